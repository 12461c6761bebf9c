// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed values produced by the config parser.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// An insertion-ordered mapping of keys to values.
///
/// Reassigning an existing key replaces its value in place (last write wins)
/// and keeps the key's original position.
pub type Mapping = IndexMap<String, Value>;

/// A single config value: one scalar type or a nested mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bool(bool),
    Integer(i64),
    /// An integer literal outside the `i64` range, kept as normalized
    /// digits (no `+`, no leading zeros).
    BigInteger(String),
    Float(f64),
    Mapping(Mapping),
}

impl Value {
    /// Coerce raw scalar text into a typed value.
    ///
    /// Rules are tried in order:
    /// 1. text wrapped in matching `"` or `'` is unwrapped verbatim
    /// 2. `true`/`false` in any case become booleans
    /// 3. integers
    /// 4. floats
    /// 5. anything else is kept as a string
    ///
    /// # Example
    ///
    /// ```
    /// use nodecfg::config::Value;
    ///
    /// assert_eq!(Value::coerce("'8443'"), Value::String("8443".into()));
    /// assert_eq!(Value::coerce("TRUE"), Value::Bool(true));
    /// assert_eq!(Value::coerce("8443"), Value::Integer(8443));
    /// assert_eq!(Value::coerce("1.5"), Value::Float(1.5));
    /// ```
    pub fn coerce(raw: &str) -> Self {
        if let Some(inner) = unquote(raw) {
            return Value::String(inner.to_string());
        }
        if raw.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
        if let Ok(i) = raw.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Some(digits) = big_integer_digits(raw) {
            return Value::BigInteger(digits);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Value::Float(f);
        }
        Value::String(raw.to_string())
    }

    /// Returns the nested mapping, if this value is one.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Whether the value counts as set where an empty value means "unset":
    /// empty strings, `false`, zero and empty mappings do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::String(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::BigInteger(_) => true,
            Value::Float(x) => *x != 0.0,
            Value::Mapping(m) => !m.is_empty(),
        }
    }

    /// The string form of a scalar, or `None` for a mapping.
    pub fn scalar_string(&self) -> Option<String> {
        if self.is_mapping() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

/// Normalized digits of a sign-and-digits literal, e.g. `+007` -> `7`.
fn big_integer_digits(raw: &str) -> Option<String> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    Some(match (significant.is_empty(), negative) {
        (true, _) => "0".to_string(),
        (false, true) => format!("-{significant}"),
        (false, false) => significant.to_string(),
    })
}

/// Float text with an explicit exponent sign and at least two exponent
/// digits (`1e+16`, `1e-05`), used outside `[1e-4, 1e16)`.
fn format_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    let magnitude = x.abs();
    if !x.is_finite() || x == 0.0 || (1e-4..1e16).contains(&magnitude) {
        // Debug keeps the fractional part on whole numbers ("1.0").
        return write!(f, "{x:?}");
    }

    let exp_form = format!("{x:e}");
    let Some((mantissa, exponent)) = exp_form.split_once('e') else {
        return f.write_str(&exp_form);
    };
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let sign = if exponent < 0 { '-' } else { '+' };
    write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

fn unquote(raw: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if raw.starts_with(quote) && raw.ends_with(quote) {
            // A lone quote character counts as both ends.
            return Some(raw.get(1..raw.len() - 1).unwrap_or(""));
        }
    }
    None
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::BigInteger(digits) => f.write_str(digits),
            Value::Float(x) => format_float(f, *x),
            Value::Mapping(_) => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
