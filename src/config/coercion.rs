//! Value types: how a raw environment string becomes a typed value.

use crate::types::ConfigValue;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Declared type of an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    Number,
    String,
    Boolean,
}

impl ValueType {
    pub const ALL: [ValueType; 3] = [ValueType::Number, ValueType::String, ValueType::Boolean];

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Number => "NUMBER",
            ValueType::String => "STRING",
            ValueType::Boolean => "BOOLEAN",
        }
    }

    /// Coerce a raw string. Never fails; an unparseable number yields
    /// [`ConfigValue::InvalidNumber`].
    pub fn parse(self, raw: &str) -> ConfigValue {
        match self {
            ValueType::Number => parse_number(raw),
            ValueType::String => ConfigValue::String(raw.to_string()),
            ValueType::Boolean => ConfigValue::Bool(parse_boolean(raw)),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown type name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown value type: {0}")]
pub struct UnknownValueType(pub String);

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownValueType(s.to_string()))
    }
}

/// `true` or `1`, case-insensitive, whole string.
fn parse_boolean(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true") || raw == "1"
}

/// Integer from the leading numeric prefix.
///
/// Accepts leading whitespace, an optional sign and an optional `0x` prefix
/// (hex digits follow). Anything after the digits is ignored. Values beyond
/// the `i64` range saturate at `i64::MIN` or `i64::MAX`.
fn parse_number(raw: &str) -> ConfigValue {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => (16, &s[2..]),
        _ => (10, s),
    };

    // Accumulate with the final sign so both ends of the range are reachable.
    let mut value: i64 = 0;
    let mut seen = 0usize;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        let shifted = value.saturating_mul(radix as i64);
        value = if negative {
            shifted.saturating_sub(d as i64)
        } else {
            shifted.saturating_add(d as i64)
        };
        seen += 1;
    }

    if seen == 0 {
        return ConfigValue::InvalidNumber;
    }

    ConfigValue::from(value)
}
