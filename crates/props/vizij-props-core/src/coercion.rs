//! Coercion helpers between loosely typed values and numbers.
//! Rules follow the web platform: `parseFloat` for text, `Number#toString` for output.

use crate::RawValue;

/// Parse the longest leading decimal literal of `input`, like JavaScript `parseFloat`.
///
/// - leading whitespace is skipped
/// - trailing garbage is ignored (`"30rem"` -> 30)
/// - an exponent is only consumed when digits follow it
/// - no parsable prefix -> NaN
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac = j - (i + 1);
        if digits + frac > 0 {
            i = j;
            digits += frac;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Coerce a raw value into a float.
/// - Number -> its value
/// - Text -> `parse_float`
/// - Stagger (unresolved) -> NaN
pub fn to_float(v: &RawValue) -> f64 {
    match v {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => parse_float(s),
        RawValue::Stagger(_) => f64::NAN,
    }
}

/// Format a number the way JavaScript stringifies it in a template literal.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if v == 0.0 {
        // covers -0
        "0".to_string()
    } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
        // shortest round-trip mantissa, with an explicit sign on positive exponents
        let s = format!("{v:e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    } else {
        v.to_string()
    }
}
