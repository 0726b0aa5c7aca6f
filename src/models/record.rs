//! Registros genéricos
//!
//! El almacenamiento trabaja con objetos JSON abiertos (el endpoint remoto
//! puede añadir columnas que no conocemos). Los modelos tipados se leen de
//! esos objetos de forma tolerante: números que llegan como texto, IDs
//! numéricos, celdas vacías.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Un registro tal cual se guarda: objeto JSON con campos camelCase
pub type Record = Map<String, Value>;

/// Número tolerante: texto numérico se convierte, lo demás cuenta como 0
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

/// Entero tolerante (mes, año, contadores)
pub fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_from_value(&value))
}

/// Texto tolerante: números se pasan a texto, vacío y null son `None`
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_key(&value).filter(|s| !s.trim().is_empty()))
}

pub fn number_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Representación textual de un ID o clave (texto o número)
pub fn value_as_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Leer un campo de texto de un registro
pub fn field_str<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

/// Leer un campo como clave comparable (texto o número)
pub fn field_key(record: &Value, field: &str) -> Option<String> {
    record.get(field).and_then(value_as_key)
}

/// Leer un campo numérico; ausente o no numérico cuenta como 0
pub fn field_number(record: &Value, field: &str) -> f64 {
    record.get(field).map(number_from_value).unwrap_or(0.0)
}

/// Fusión superficial: los campos de `patch` sobrescriben los de `target`
pub fn shallow_merge(target: &mut Value, patch: &Value) {
    if let (Some(target), Some(patch)) = (target.as_object_mut(), patch.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_from_value() {
        assert_eq!(number_from_value(&json!(12.5)), 12.5);
        assert_eq!(number_from_value(&json!(" 300 ")), 300.0);
        assert_eq!(number_from_value(&json!("abc")), 0.0);
        assert_eq!(number_from_value(&Value::Null), 0.0);
    }

    #[test]
    fn test_field_key_accepts_numbers() {
        let record = json!({ "id": 42, "clientId": "CLI-1" });
        assert_eq!(field_key(&record, "id").as_deref(), Some("42"));
        assert_eq!(field_key(&record, "clientId").as_deref(), Some("CLI-1"));
        assert_eq!(field_key(&record, "missing"), None);
    }

    #[test]
    fn test_shallow_merge_overwrites_top_level_only() {
        let mut target = json!({ "id": "A", "name": "Old", "meta": { "x": 1, "y": 2 } });
        shallow_merge(&mut target, &json!({ "name": "New", "meta": { "x": 9 } }));
        assert_eq!(target["id"], "A");
        assert_eq!(target["name"], "New");
        assert_eq!(target["meta"], json!({ "x": 9 }));
    }
}
