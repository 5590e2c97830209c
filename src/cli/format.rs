//! Shared plain-text report helpers

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Heavy separator line (`=`)
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Light separator line (`-`)
pub fn dash(width: usize) -> String {
    "-".repeat(width)
}

/// Report header timestamp
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Fixed-point rendering with `dp` decimal places
pub fn dec(value: Decimal, dp: u32) -> String {
    format!("{:.prec$}", value.round_dp(dp), prec = dp as usize)
}

/// Fixed-point rendering with thousands separators in the integer part
pub fn grouped(value: Decimal, dp: u32) -> String {
    let text = dec(value.abs(), dp);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    if value.is_sign_negative() && out.trim_matches(|c| c == '0' || c == '.' || c == ',') != "" {
        format!("-{}", out)
    } else {
        out
    }
}
