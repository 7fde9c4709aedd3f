use super::types::Numeric;

pub const NOT_AVAILABLE: &str = "N/A";

// Rupee amounts render with a "Rs" prefix, comma-grouped thousands, and no
// fractional digits; halves round away from zero.
pub fn fmt_currency_value(value: f64) -> String {
    let rounded = value.round();
    let grouped = group_thousands(rounded.abs() as i128);
    if rounded < 0.0 {
        format!("-Rs {grouped}")
    } else {
        format!("Rs {grouped}")
    }
}

pub fn fmt_currency(value: Numeric) -> String {
    match value.value() {
        Some(v) => fmt_currency_value(v),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn fmt_one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

pub fn fmt_one_decimal_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => fmt_one_decimal(v),
        None => NOT_AVAILABLE.to_string(),
    }
}

// Shortest natural form: 12 stays "12", 12.5 stays "12.5".
pub fn fmt_number_or_na(value: Numeric) -> String {
    match value.value() {
        Some(v) => format!("{v}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(value: i128) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*byte as char);
    }
    out
}
