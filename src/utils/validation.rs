//! Utilidades de validación
//!
//! Comprobación del teléfono de los formularios de empleados y clientes.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Móvil de Bangladesh: 01 + operador (3-9) + 8 dígitos
    static ref BD_PHONE: Regex = Regex::new(r"^01[3-9]\d{8}$").expect("valid phone regex");
}

/// Validar número de teléfono de Bangladesh (se ignoran espacios y guiones)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if !BD_PHONE.is_match(&normalized) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
