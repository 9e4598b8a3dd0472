//! Number formatting for user-facing messages.

/// Format an integer with comma thousands separators (`7500000` -> `7,500,000`).
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount with thousands separators.
///
/// Whole amounts print without a fraction. Anything else keeps a single
/// decimal, which is all a rial-to-toman division can produce.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        return group_thousands(value as i64);
    }

    let fixed = format!("{:.1}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
    let whole: i64 = whole.parse().unwrap_or(0);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(whole), frac)
}
