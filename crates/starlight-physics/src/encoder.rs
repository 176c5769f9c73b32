// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Stimulus Encoder
// ─────────────────────────────────────────────────────────────────────
//! Deterministic text → stimulus vector mapping.
//!
//! The text is reduced to a 32-bit polynomial hash over its UTF-16 code
//! units (`h = 31·h + unit`, wrapping). `|h| mod N` picks the centre
//! cell; the centre gets `±s`, its neighbours at distance d ∈ {1, 2}
//! get `±s/(d+1)`, with circular wrap. The sign is `+` only for h > 0.

/// Peak stimulus amplitude.
pub const STIMULUS_STRENGTH: f64 = 0.2;

/// 32-bit signed polynomial string hash over UTF-16 code units.
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Encode `text` into a stimulus of length `dimensions` at the default
/// amplitude. Returns an empty vector when `dimensions == 0`.
pub fn encode(text: &str, dimensions: usize) -> Vec<f64> {
    encode_with_strength(text, dimensions, STIMULUS_STRENGTH)
}

/// As [`encode`] with an explicit peak amplitude.
pub fn encode_with_strength(text: &str, dimensions: usize, strength: f64) -> Vec<f64> {
    let mut stimulus = vec![0.0; dimensions];
    if dimensions == 0 {
        return stimulus;
    }

    let hash = string_hash(text);
    let sign = if hash > 0 { 1.0 } else { -1.0 };
    let centre = (i64::from(hash).unsigned_abs() % dimensions as u64) as usize;

    stimulus[centre] = sign * strength;
    // Later writes win when the neighbourhood wraps onto itself (N < 5).
    for offset in 1..=2usize {
        let value = sign * strength / (offset + 1) as f64;
        let left = (centre + dimensions - offset % dimensions) % dimensions;
        let right = (centre + offset) % dimensions;
        stimulus[left] = value;
        stimulus[right] = value;
    }
    stimulus
}
