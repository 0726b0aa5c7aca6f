//! Utilidades de fechas
//!
//! Los registros guardan fechas como texto. Se aceptan los tres formatos
//! que circulan entre el endpoint remoto y los formularios:
//! `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS...` y `DD/MM/YYYY`.

use chrono::{DateTime, NaiveDate, Utc};

/// Convertir texto a fecha (sin depender de la configuración regional)
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    // Fecha-hora ISO: nos quedamos con la parte de la fecha
    if value.len() > 10 && value.as_bytes().get(10) == Some(&b'T') {
        if let Ok(date) = NaiveDate::parse_from_str(&value[..10], "%Y-%m-%d") {
            return Some(date);
        }
    }

    NaiveDate::parse_from_str(value, "%d/%m/%Y").ok()
}

/// Fecha en formato `YYYY-MM-DD` (para inputs y filtros por fecha)
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Timestamp ISO-8601 con milisegundos y sufijo `Z`
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
