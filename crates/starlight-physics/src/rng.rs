// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Seeded RNG
// ─────────────────────────────────────────────────────────────────────
//! Minimal xorshift64 RNG for reproducible initial fields (no external dep).

pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0xDEAD_BEEF_CAFE_BABE } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [-0.5, 0.5).
    pub fn next_centered(&mut self) -> f64 {
        self.next_f64() - 0.5
    }
}
