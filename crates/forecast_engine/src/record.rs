use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use models::TransactionRecord;
use serde_json::Value;

use crate::error::RecordParseError;

/// Naive datetime layouts accepted besides RFC 3339: `T` or space
/// separator, seconds and fraction optional.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse one raw transaction into a validated record.
///
/// The record must be a JSON object with a string `date`. The `amount` may
/// be a JSON number or a numeric string; an absent field reads as 0.
pub fn parse_record(raw: &Value) -> Result<TransactionRecord, RecordParseError> {
    let obj = raw.as_object().ok_or(RecordParseError::NotAnObject)?;

    let date = obj
        .get("date")
        .and_then(Value::as_str)
        .ok_or(RecordParseError::MissingDate)?;
    let timestamp = parse_timestamp(date)?;

    let amount = match obj.get("amount") {
        None => 0.0,
        Some(v) => parse_amount(v).ok_or(RecordParseError::InvalidAmount)?,
    };

    Ok(TransactionRecord { timestamp, amount })
}

/// Parse a calendar timestamp in its most common encodings: RFC 3339 with
/// an offset (a trailing `Z` reads as `+00:00`), a naive datetime, or a
/// bare `YYYY-MM-DD` date taken as midnight.
///
/// Offsets are accepted but not used to renormalize: the wall-clock part of
/// the timestamp is what the pipeline keeps, so the calendar day stays the
/// one written in the record.
fn parse_timestamp(s: &str) -> Result<NaiveDateTime, RecordParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    Err(RecordParseError::InvalidDate(s.to_string()))
}

/// Amounts may arrive as JSON numbers or as numeric strings. Non-finite
/// values are rejected so day sums and forecasts stay representable in the
/// response JSON.
fn parse_amount(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}
