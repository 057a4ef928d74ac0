//! Tolerant scalar access over positional cells, and the matching encoders.
//!
//! Absent or wrong-typed cells degrade to `""`, zero or `None`; nothing in
//! this module returns an error or panics.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

pub fn str_at(cells: &[Value], idx: usize) -> String {
    match cells.get(idx) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

pub fn decimal_at(cells: &[Value], idx: usize) -> Decimal {
    match cells.get(idx) {
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string()).unwrap_or(Decimal::ZERO),
        Some(Value::String(s)) => Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

pub fn u32_at(cells: &[Value], idx: usize) -> u32 {
    match cells.get(idx) {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Epoch-millisecond date cell. An unparseable cell stays `None` rather than
/// failing the decode; the display layer renders it as an empty cell.
pub fn date_at(cells: &[Value], idx: usize) -> Option<DateTime<Utc>> {
    let millis = match cells.get(idx) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }?;
    Utc.timestamp_millis_opt(millis).single()
}

/// Hazmat-style flag cell: the backend sends `"yes"` / `"no"`.
pub fn yes_no_at(cells: &[Value], idx: usize) -> bool {
    match cells.get(idx) {
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "yes" | "true"),
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

pub fn encode_decimal(value: &Decimal) -> Value {
    if value.fract().is_zero() {
        if let Some(i) = value.to_i64() {
            return Value::from(i);
        }
    }
    value.to_f64().map(Value::from).unwrap_or(Value::Null)
}

pub fn encode_date(value: &Option<DateTime<Utc>>) -> Value {
    match value {
        Some(dt) => Value::from(dt.timestamp_millis()),
        None => Value::Null,
    }
}

pub fn encode_yes_no(value: bool) -> Value {
    Value::from(if value { "yes" } else { "no" })
}
