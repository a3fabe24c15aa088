/// `part / whole * 100`, rounded to 2 decimals. Zero when `whole` is zero.
pub fn accuracy(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
