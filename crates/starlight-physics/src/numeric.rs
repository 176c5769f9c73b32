// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Field Statistics
// ─────────────────────────────────────────────────────────────────────
//! Slice statistics and the periodic finite-difference gradient shared
//! by the field integrator and the cognitive synthesizer.
//!
//! All helpers are total: empty input yields 0 (or an empty vector).

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    x.iter().sum::<f64>() / x.len() as f64
}

/// Population variance (divisor n); 0 for fewer than two samples.
pub fn variance(x: &[f64]) -> f64 {
    if x.len() < 2 {
        return 0.0;
    }
    let m = mean(x);
    x.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / x.len() as f64
}

/// Population standard deviation.
pub fn std_dev(x: &[f64]) -> f64 {
    variance(x).sqrt()
}

/// Mean of absolute values.
pub fn mean_abs(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    x.iter().map(|v| v.abs()).sum::<f64>() / x.len() as f64
}

/// Centered difference `(x[i+1] - x[i-1]) / (2·dx)` with circular neighbours.
pub fn gradient(x: &[f64], dx: f64) -> Vec<f64> {
    let n = x.len();
    let mut out = vec![0.0; n];
    gradient_into(x, dx, &mut out);
    out
}

/// In-place variant of [`gradient`]; `out` must have the same length as `x`.
pub fn gradient_into(x: &[f64], dx: f64, out: &mut [f64]) {
    let n = x.len();
    debug_assert_eq!(out.len(), n);
    for i in 0..n {
        let prev = x[(i + n - 1) % n];
        let next = x[(i + 1) % n];
        out[i] = (next - prev) / (2.0 * dx);
    }
}
