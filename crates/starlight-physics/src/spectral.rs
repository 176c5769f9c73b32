// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Spectral Analysis
// ─────────────────────────────────────────────────────────────────────
//! Direct-summation DFT and dominant-frequency extraction.
//!
//!   X_k = Σ_n x_n · e^{-2πi·k·n/N}
//!
//! O(N²) per call; N is the field length (tens of cells), so the direct
//! sum is cheaper than planning a fast transform.

use std::f64::consts::TAU;

/// Magnitudes |X_k| for every bin k in 0..N.
pub fn dft_magnitudes(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut mags = Vec::with_capacity(n);
    for k in 0..n {
        let mut re = 0.0;
        let mut im = 0.0;
        for (j, &v) in x.iter().enumerate() {
            let angle = TAU * (k * j) as f64 / n as f64;
            re += v * angle.cos();
            im -= v * angle.sin();
        }
        mags.push((re * re + im * im).sqrt());
    }
    mags
}

/// Index of the strongest non-DC bin in `1..floor(N/2)`.
///
/// Ties resolve to the lowest bin. When the range is empty (N < 4) the
/// result is 1.
pub fn dominant_frequency(x: &[f64]) -> usize {
    let upper = x.len() / 2;
    if upper <= 1 {
        return 1;
    }
    let mags = dft_magnitudes(x);
    let mut best = 0;
    for (i, &m) in mags[1..upper].iter().enumerate() {
        if m > mags[1 + best] {
            best = i;
        }
    }
    best + 1
}
