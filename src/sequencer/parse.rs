//! Parse-with-fallback helpers for attribute-driven settings.
//!
//! Attribute values are untyped strings. Each tunable gets one explicit
//! parser that returns `None` for anything it cannot accept, so callers can
//! fall through to the next precedence level. Nothing here ever fails loudly.

/// Parse the longest leading float literal of `raw`, ignoring trailing text.
///
/// Mirrors the lenient behavior page authors expect from attribute values:
/// `"40px"` reads as `40.0`, `"  12.5ms"` as `12.5`, `".5"` as `0.5`.
/// Returns `None` when no digits lead the value.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse a delay in milliseconds. Must be finite and non-negative.
pub fn parse_delay(raw: &str) -> Option<f64> {
    parse_float_prefix(raw).filter(|v| v.is_finite() && *v >= 0.0)
}

/// Longest accepted progress bar, in glyphs.
pub const MAX_PROGRESS_LENGTH: usize = 1000;

/// Parse a progress bar length in characters. Lengths above
/// `MAX_PROGRESS_LENGTH` are rejected.
pub fn parse_length(raw: &str) -> Option<usize> {
    parse_float_prefix(raw)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.trunc())
        .filter(|v| *v <= MAX_PROGRESS_LENGTH as f64)
        .map(|v| v as usize)
}

/// Whether an already numeric length is usable.
pub fn valid_length(length: usize) -> bool {
    length <= MAX_PROGRESS_LENGTH
}

/// Parse a progress cap. Only values within `1..=100` are accepted.
pub fn parse_percent(raw: &str) -> Option<f64> {
    parse_float_prefix(raw).filter(|v| (1.0..=100.0).contains(v))
}

/// Accept any non-empty glyph string verbatim.
pub fn parse_glyph(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
