//! Display formatting for case-detail values.

use cybercrime_console_case_models::RawValue;

/// Currency symbol for Philippine pesos.
const PESO: char = '₱';

/// Extracts a positive, finite amount from a raw value.
///
/// Numeric strings are accepted. Zero, negative, and non-numeric values
/// return `None`.
#[must_use]
pub fn parse_amount(raw: RawValue<'_>) -> Option<f64> {
    let amount = match raw {
        RawValue::Number(n) => n,
        RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
    };

    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// Formats an amount as Philippine pesos using `en-PH` grouping
/// (`150000.0` → `"₱150,000"`).
///
/// Up to three fraction digits are kept and trailing zeros are dropped.
#[must_use]
pub fn format_peso(amount: f64) -> String {
    let mut whole = amount.abs().trunc();
    let mut millis = ((amount.abs() - whole) * 1000.0).round();
    if millis >= 1000.0 {
        whole += 1.0;
        millis = 0.0;
    }

    let mut out = String::new();
    if amount < 0.0 {
        out.push('-');
    }
    out.push(PESO);
    out.push_str(&group_thousands(&format!("{whole:.0}")));

    let fraction = format!("{millis:03.0}");
    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }

    out
}

/// Inserts a comma between every group of three digits, counting from the
/// right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Turns a stored `snake_case` enum value into display text
/// (`"highly_restricted"` → `"Highly Restricted"`).
///
/// Only the first letter of each word is touched.
#[must_use]
pub fn title_case_enum(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for ch in value.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if !in_word && ch.is_alphanumeric() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        in_word = ch.is_alphanumeric();
    }

    out
}

/// Stringifies a raw value as-is.
#[must_use]
pub fn format_plain(raw: RawValue<'_>) -> String {
    match raw {
        RawValue::Text(s) => s.to_string(),
        RawValue::Number(n) => n.to_string(),
    }
}
