/// Stabilizer added to the min-max denominator so a column whose values are
/// all identical normalizes to ~0 instead of dividing by zero.
pub const EPSILON: f64 = 1e-9;

/// Min-max rescale one column to [0,1] relative to the population:
/// `(value - min) / (max - min + EPSILON)`.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let denominator = max - min + EPSILON;

    values.iter().map(|v| (v - min) / denominator).collect()
}
