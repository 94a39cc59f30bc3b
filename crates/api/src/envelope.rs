#![forbid(unsafe_code)]

use serde_json::{Value, json};

pub fn op_ok(intent: &str, result: Value) -> Value {
    json!({
        "success": true,
        "intent": intent,
        "result": result,
        "error": null
    })
}

pub fn op_error(code: &str, message: &str) -> Value {
    json!({
        "success": false,
        "result": null,
        "error": {
            "code": code,
            "message": message.trim()
        }
    })
}
