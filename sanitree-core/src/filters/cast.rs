//! `cast:<type>`: converts a value to another JSON type.
//!
//! Supported targets: `int`/`integer`, `float`/`real`/`double`, `string`,
//! `bool`/`boolean`, `array` and `object`. Conversions are lenient: a string that is
//! not a number casts to zero, and JSON text that fails to decode casts to `null`.

use log::warn;
use serde_json::{Map, Number, Value};

use super::Filter;
use crate::errors::SanitizerError;

const NAME: &str = "cast";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CastTarget {
    Int,
    Float,
    String,
    Bool,
    Array,
    Object,
}

impl CastTarget {
    fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "int" | "integer" => Some(Self::Int),
            "float" | "real" | "double" => Some(Self::Float),
            "string" => Some(Self::String),
            "bool" | "boolean" => Some(Self::Bool),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cast;

fn container_flag(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    }
}

fn to_int(value: Value) -> Value {
    if matches!(&value, Value::Number(n) if n.is_i64() || n.is_u64()) {
        return value;
    }
    let n: i64 = match &value {
        Value::Number(n) => n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        Value::Bool(b) => i64::from(*b),
        Value::Null => 0,
        Value::Array(_) | Value::Object(_) => i64::from(container_flag(&value)),
    };
    Value::from(n)
}

fn to_float(value: Value) -> Value {
    let f = match &value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::from(u8::from(container_flag(&value))),
    };
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

fn to_string(value: Value) -> Value {
    match value {
        Value::String(_) => value,
        Value::Null => Value::String(String::new()),
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        container => Value::String(container.to_string()),
    }
}

fn to_bool(value: Value) -> Value {
    let b = match &value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(_) | Value::Object(_) => container_flag(&value),
    };
    Value::Bool(b)
}

fn decode_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| {
        warn!("Cast could not decode JSON text ({}), using null.", e);
        Value::Null
    })
}

fn to_array(value: Value) -> Value {
    match value {
        Value::String(s) => decode_json(&s),
        Value::Null => Value::Array(Vec::new()),
        Value::Array(_) | Value::Object(_) => value,
        scalar => Value::Array(vec![scalar]),
    }
}

fn to_object(value: Value) -> Value {
    match value {
        Value::String(s) => decode_json(&s),
        Value::Null => Value::Object(Map::new()),
        Value::Object(_) => value,
        Value::Array(items) => Value::Object(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item))
                .collect(),
        ),
        scalar => {
            let mut map = Map::new();
            map.insert("scalar".to_string(), scalar);
            Value::Object(map)
        }
    }
}

impl Filter for Cast {
    fn apply(&self, value: Value, options: &[String]) -> Result<Value, SanitizerError> {
        let type_name = options
            .first()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SanitizerError::invalid_options(NAME, "a target type is required"))?;

        let target = CastTarget::parse(type_name).ok_or_else(|| {
            SanitizerError::invalid_options(NAME, format!("wrong casting format '{}'", type_name))
        })?;

        Ok(match target {
            CastTarget::Int => to_int(value),
            CastTarget::Float => to_float(value),
            CastTarget::String => to_string(value),
            CastTarget::Bool => to_bool(value),
            CastTarget::Array => to_array(value),
            CastTarget::Object => to_object(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cast(value: Value, target: &str) -> Value {
        Cast.apply(value, &[target.to_string()]).unwrap()
    }

    #[test]
    fn test_cast_int() {
        assert_eq!(cast(json!(" 42 "), "int"), json!(42));
        assert_eq!(cast(json!("3.9"), "integer"), json!(3));
        assert_eq!(cast(json!("abc"), "int"), json!(0));
        assert_eq!(cast(json!(-7.5), "int"), json!(-7));
        assert_eq!(cast(json!(true), "int"), json!(1));
    }

    #[test]
    fn test_cast_float() {
        assert_eq!(cast(json!("1.5"), "float"), json!(1.5));
        assert_eq!(cast(json!(2), "double"), json!(2.0));
        assert_eq!(cast(json!("x"), "real"), json!(0.0));
    }

    #[test]
    fn test_cast_string() {
        assert_eq!(cast(json!(12), "string"), json!("12"));
        assert_eq!(cast(json!(false), "string"), json!("false"));
        assert_eq!(cast(Value::Null, "string"), json!(""));
        assert_eq!(cast(json!([1, 2]), "string"), json!("[1,2]"));
    }

    #[test]
    fn test_cast_bool() {
        assert_eq!(cast(json!("0"), "bool"), json!(false));
        assert_eq!(cast(json!(""), "boolean"), json!(false));
        assert_eq!(cast(json!("no"), "bool"), json!(true));
        assert_eq!(cast(json!(0.0), "bool"), json!(false));
        assert_eq!(cast(json!([]), "bool"), json!(false));
    }

    #[test]
    fn test_cast_array_and_object() {
        assert_eq!(cast(json!(r#"{"a": [1]}"#), "array"), json!({"a": [1]}));
        assert_eq!(cast(json!("{broken"), "array"), Value::Null);
        assert_eq!(cast(json!(5), "array"), json!([5]));
        assert_eq!(cast(json!(["x", "y"]), "object"), json!({"0": "x", "1": "y"}));
        assert_eq!(cast(json!(5), "object"), json!({"scalar": 5}));
    }

    #[test]
    fn test_cast_type_is_case_insensitive() {
        assert_eq!(cast(json!("8"), "INT"), json!(8));
    }

    #[test]
    fn test_cast_requires_known_type() {
        let err = Cast.apply(json!("1"), &[]).err().unwrap();
        assert!(matches!(err, SanitizerError::InvalidFilterOptions { .. }));

        let err = Cast.apply(json!("1"), &["decimal".to_string()]).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Filter 'cast' received invalid options: wrong casting format 'decimal'"
        );
    }
}
