// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Field Physics Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Field physics: the 1-D reaction-diffusion integrator with its
//! chaos-reduction controller, spectral pattern analysis, and the
//! text → stimulus encoder.

pub mod encoder;
pub mod field;
pub mod numeric;
pub mod rng;
pub mod spectral;

pub use encoder::{encode, encode_with_strength, string_hash, STIMULUS_STRENGTH};
pub use field::FieldDynamics;
pub use rng::SimpleRng;
pub use spectral::{dft_magnitudes, dominant_frequency};
