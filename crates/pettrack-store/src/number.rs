//! Serde helpers for numeric snapshot fields.
//!
//! Older snapshots were written by a loosely typed server that stored
//! request values as received, so a coordinate may be a JSON number or a
//! numeric string. Whole numbers are written back without a fractional
//! part, so a default battery is stored as `100` rather than `100.0`.
//!
//! Use with `#[serde(with = "pettrack_store::number")]`.

use serde::{Deserialize, Deserializer, Serializer, de};

/// Largest magnitude below which every whole f64 is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f64),
    Text(String),
    Null(()),
}

/// Write whole numbers as JSON integers and everything else as floats.
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Read a number, a numeric string, or `null` (read as zero).
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| de::Error::custom(format!("expected a number, found \"{}\"", text))),
        Raw::Null(()) => Ok(0.0),
    }
}
