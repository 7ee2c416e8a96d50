/// Rounds `value` to two decimal places, half away from zero at the
/// representable boundary. Both calculators report results through this.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
