//! Literal coercion from raw clause text to native field values
//!
//! Parsing is locale-independent: integers in plain decimal form,
//! timestamps as RFC 3339 or a bare `YYYY-MM-DD` calendar date.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::catalog::DataType;
use crate::record::FieldValue;

/// Coerce a raw literal to the native type a field descriptor declares.
pub(crate) fn coerce_literal(raw: &str, data_type: DataType) -> Option<FieldValue> {
    match data_type {
        DataType::String | DataType::Xml => Some(FieldValue::String(raw.to_string())),
        DataType::Integer32 | DataType::SimplifiedInteger32 => {
            raw.trim().parse::<i32>().ok().map(FieldValue::Integer)
        }
        DataType::Integer64 | DataType::SimplifiedInteger64 => {
            raw.trim().parse::<i64>().ok().map(FieldValue::Long)
        }
        DataType::Boolean => parse_boolean(raw).map(FieldValue::Boolean),
        DataType::Timestamp => parse_timestamp(raw).map(FieldValue::Timestamp),
    }
}

/// Parse a boolean literal; accepts `true`/`false` in any case and the
/// digit forms `1`/`0`.
pub(crate) fn parse_boolean(raw: &str) -> Option<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        Some(false)
    } else {
        None
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp);
    }
    // Bare dates become midnight UTC; comparisons are date-only anyway
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().fixed_offset())
}
