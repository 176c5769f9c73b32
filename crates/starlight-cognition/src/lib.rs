// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Cognitive Synthesis
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Second-stage model: turns one tick's pattern descriptors and primary
//! field into a creativity field, a logic-weight field, and a smoothed
//! deduction field, then classifies the deduction into a `Concept`.

pub mod synthesizer;

pub use synthesizer::{CognitiveSynthesizer, DEFAULT_ITERATIONS};
