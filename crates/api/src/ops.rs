#![forbid(unsafe_code)]

use crate::args::{optional_bool, optional_f64, optional_string, require_f64, require_string};
use crate::dto::AllocationReportDto;
use crate::envelope::{op_error, op_ok};
use serde_json::{Map, Number, Value, json};
use ur_core::fraction::{format_fraction, is_valid_fraction, parse_fraction};
use ur_core::report::{OwnerShare, build_allocation_report};
use ur_core::share::{InputMode, MAX_SHARE, validate_share_input};
use ur_core::units::{AreaUnit, from_base_unit, to_base_unit};

/// Dispatches one named operation against a JSON arguments object. Unknown
/// names and malformed arguments come back as envelope errors, never panics.
pub fn handle_op(name: &str, args: Value) -> Value {
    let Some(args_obj) = args.as_object() else {
        return op_error("INVALID_INPUT", "arguments must be an object");
    };
    match name {
        "fraction_parse" => op_fraction_parse(args_obj),
        "fraction_is_valid" => op_fraction_is_valid(args_obj),
        "fraction_format" => op_fraction_format(args_obj),
        "share_validate" => op_share_validate(args_obj),
        "unit_to_base" => op_unit_to_base(args_obj),
        "unit_from_base" => op_unit_from_base(args_obj),
        "allocation_report" => op_allocation_report(args_obj),
        _ => op_error("UNKNOWN_OP", &format!("unknown operation: {name}")),
    }
}

fn op_fraction_parse(args: &Map<String, Value>) -> Value {
    let text = match require_string(args, "text") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    // JSON carries no NaN; the sentinel becomes parsed=false with a null value.
    let result = match Number::from_f64(parse_fraction(&text)) {
        Some(value) => json!({ "parsed": true, "value": value }),
        None => json!({ "parsed": false, "value": null }),
    };
    op_ok("fraction_parse", result)
}

fn op_fraction_is_valid(args: &Map<String, Value>) -> Value {
    let text = match require_string(args, "text") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    op_ok(
        "fraction_is_valid",
        json!({ "valid": is_valid_fraction(&text) }),
    )
}

fn op_fraction_format(args: &Map<String, Value>) -> Value {
    let value = match require_f64(args, "value") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    op_ok("fraction_format", json!({ "text": format_fraction(value) }))
}

fn op_share_validate(args: &Map<String, Value>) -> Value {
    let text = match require_string(args, "text") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let required = match optional_bool(args, "required") {
        Ok(v) => v.unwrap_or(false),
        Err(resp) => return resp,
    };
    let mode = match optional_string(args, "mode") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let mode = match mode.as_deref() {
        None | Some("decimal") => InputMode::Decimal,
        Some("fraction") => InputMode::Fraction,
        Some(other) => {
            return op_error(
                "INVALID_INPUT",
                &format!("mode must be \"decimal\" or \"fraction\", got \"{other}\""),
            );
        }
    };
    let max_value = match optional_f64(args, "max_value") {
        Ok(v) => v.unwrap_or(MAX_SHARE),
        Err(resp) => return resp,
    };

    // A failed validation is still a successful operation: the verdict is
    // data for the caller to render inline.
    let result = match validate_share_input(&text, required, mode, max_value) {
        Ok(value) => json!({
            "ok": true,
            "mode": mode.as_str(),
            "value": value,
            "error": null
        }),
        Err(err) => json!({
            "ok": false,
            "mode": mode.as_str(),
            "value": null,
            "error": { "code": err.code(), "message": err.message() }
        }),
    };
    op_ok("share_validate", result)
}

fn op_unit_to_base(args: &Map<String, Value>) -> Value {
    let value = match require_f64(args, "value") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let unit = match optional_unit(args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    op_ok(
        "unit_to_base",
        json!({ "value": to_base_unit(value, unit), "unit": unit.tag() }),
    )
}

fn op_unit_from_base(args: &Map<String, Value>) -> Value {
    let value = match require_f64(args, "value") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let unit = match optional_unit(args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    op_ok(
        "unit_from_base",
        json!({ "value": from_base_unit(value, unit), "unit": unit.tag() }),
    )
}

fn op_allocation_report(args: &Map<String, Value>) -> Value {
    let plot_id = match require_string(args, "plot_id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let total_area_m2 = match require_f64(args, "total_area_m2") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let unit = match optional_unit(args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(raw_owners) = args.get("owners").and_then(|v| v.as_array()) else {
        return op_error("INVALID_INPUT", "owners must be an array");
    };

    let mut owners = Vec::with_capacity(raw_owners.len());
    for (index, raw) in raw_owners.iter().enumerate() {
        let Some(obj) = raw.as_object() else {
            return op_error("INVALID_INPUT", &format!("owners[{index}] must be an object"));
        };
        let owner_id = match require_string(obj, "owner_id") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let owner_name = match require_string(obj, "owner_name") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let share = match require_f64(obj, "share") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        owners.push(OwnerShare {
            owner_id,
            owner_name,
            share,
        });
    }

    let report = build_allocation_report(plot_id, total_area_m2, &owners, unit);
    match serde_json::to_value(AllocationReportDto::new(report, unit)) {
        Ok(result) => op_ok("allocation_report", result),
        Err(err) => op_error("INTERNAL_ERROR", &format!("serialize report: {err}")),
    }
}

fn optional_unit(args: &Map<String, Value>) -> Result<AreaUnit, Value> {
    let tag = optional_string(args, "unit")?;
    Ok(tag.map(|tag| AreaUnit::parse(&tag)).unwrap_or_default())
}
