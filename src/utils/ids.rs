//! Generación de IDs locales
//!
//! Formato: `PREFIJO-<epoch ms>-<aleatorio 0..999>`, igual que los IDs que
//! asignaba el almacenamiento del navegador.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Generar un ID único con prefijo
pub fn generate_id(prefix: &str, now: DateTime<Utc>) -> String {
    let random: u16 = rand::thread_rng().gen_range(0..1000);
    format!("{}-{}-{}", prefix, now.timestamp_millis(), random)
}

/// Derivar el prefijo de ID de una clave de almacenamiento:
/// primeras tres letras del último segmento, en mayúsculas.
pub fn prefix_from_storage_key(storage_key: &str) -> String {
    let segment = storage_key.rsplit('_').next().unwrap_or(storage_key);
    segment.chars().take(3).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_prefix_from_storage_key() {
        assert_eq!(prefix_from_storage_key("al_aksha_employees"), "EMP");
        assert_eq!(prefix_from_storage_key("al_aksha_vessel_orders"), "ORD");
        assert_eq!(prefix_from_storage_key("al_aksha_day_labor_workers"), "WOR");
        assert_eq!(prefix_from_storage_key("al_aksha_salary"), "SAL");
    }

    #[test]
    fn test_generate_id_shape() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let id = generate_id("ORD", now);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ORD");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert!(parts[2].parse::<u16>().unwrap() < 1000);
    }
}
