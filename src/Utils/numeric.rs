/// Rounds `value` to `digits` decimal places.
///
/// The rounding is done on the exact decimal expansion of the binary value
/// (through the formatter), so `round_to(40.021, 2)` is `40.02` and values that
/// sit exactly on a tie are rounded to even, the same way a reporting layer
/// printing the number would see it.
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits, value).parse::<f64>().unwrap_or(value)
}

/// Share of `part` in `total`, in percent, rounded to 2 decimals. Zero when `total` is zero.
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(part as f64 / total as f64 * 100.0, 2)
}
