#![forbid(unsafe_code)]

use crate::envelope::op_error;
use serde_json::{Map, Value};

pub(crate) fn require_string(args: &Map<String, Value>, key: &str) -> Result<String, Value> {
    let Some(v) = args.get(key).and_then(|v| v.as_str()) else {
        return Err(op_error("INVALID_INPUT", &format!("{key} is required")));
    };
    Ok(v.to_string())
}

pub(crate) fn optional_string(
    args: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::String(v) => Ok(Some(v.to_string())),
        _ => Err(op_error(
            "INVALID_INPUT",
            &format!("{key} must be a string"),
        )),
    }
}

pub(crate) fn require_f64(args: &Map<String, Value>, key: &str) -> Result<f64, Value> {
    let Some(value) = args.get(key) else {
        return Err(op_error("INVALID_INPUT", &format!("{key} is required")));
    };
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| op_error("INVALID_INPUT", &format!("{key} must be a number"))),
        _ => Err(op_error(
            "INVALID_INPUT",
            &format!("{key} must be a number"),
        )),
    }
}

pub(crate) fn optional_f64(args: &Map<String, Value>, key: &str) -> Result<Option<f64>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| op_error("INVALID_INPUT", &format!("{key} must be a number"))),
        _ => Err(op_error(
            "INVALID_INPUT",
            &format!("{key} must be a number"),
        )),
    }
}

pub(crate) fn optional_bool(args: &Map<String, Value>, key: &str) -> Result<Option<bool>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Bool(v) => Ok(Some(*v)),
        _ => Err(op_error(
            "INVALID_INPUT",
            &format!("{key} must be a boolean"),
        )),
    }
}
