//! Size tokens such as `192gb`, `512000kb`, `1.5t` or `1073741824`.
//!
//! Memory is normalized to gigabytes and storage to bytes, both on the 1024
//! scale. A token without a unit is a byte count.

use domain_cluster::model::vo::Coerced;
use once_cell::sync::Lazy;
use regex::Regex;

static SIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)([kmgt])?$").unwrap());

/// Power of 1024 of each unit prefix relative to bytes.
fn exponent(unit: Option<&str>) -> i32 {
    match unit {
        Some("k") => 1,
        Some("m") => 2,
        Some("g") => 3,
        Some("t") => 4,
        _ => 0,
    }
}

/// Split a token into its magnitude and byte exponent.
fn split(token: &str) -> Coerced<(f64, i32)> {
    let token = token.trim().to_ascii_lowercase();
    let token = token.strip_suffix('b').unwrap_or(&token);
    let Some(caps) = SIZE.captures(token) else {
        return Coerced::Unparseable;
    };
    match caps[1].parse::<f64>() {
        Ok(magnitude) if magnitude.is_finite() => {
            Coerced::Parsed((magnitude, exponent(caps.get(2).map(|m| m.as_str()))))
        }
        _ => Coerced::Unparseable,
    }
}

/// Convert a size token to gigabytes.
pub fn to_gigabytes(token: &str) -> Coerced<f64> {
    split(token).map(|(magnitude, exp)| magnitude * 1024f64.powi(exp - 3))
}

/// Convert a size token to bytes.
pub fn to_bytes(token: &str) -> Coerced<f64> {
    split(token).map(|(magnitude, exp)| magnitude * 1024f64.powi(exp))
}
