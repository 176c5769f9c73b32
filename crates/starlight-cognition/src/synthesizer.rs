// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Cognitive Synthesizer
// ─────────────────────────────────────────────────────────────────────
//! Three fields, recomputed every tick:
//!
//!   creativity_i = [var > 0.05]  · 0.5·(⟨φ⟩ − φ_i)
//!                + [stab > 0.6]  · 0.5·stab·sin(2π·k·i/N)
//!                + 0.2·(0 − φ_i)
//!   logic_i      = (0.1 + (1 − stab) + stab) / Σ                (uniform)
//!   deduction    = creativity ⊙ logic, then `iterations` passes of
//!                  d += 0.1 · ∇(∇d)
//!
//! The deduction is classified by spread vs. offset: std > |mean|
//! means the field is dominated by structure (`dampen_variance`),
//! otherwise by a common drift (`drive_syntropy`).

use std::f64::consts::TAU;

use starlight_physics::numeric::{gradient_into, mean, mean_abs, std_dev};
use starlight_types::{Concept, ConceptKind, Patterns};

/// Smoothing passes used by [`CognitiveSynthesizer::deductive_synthesis`].
pub const DEFAULT_ITERATIONS: usize = 5;

const VARIANCE_TRIGGER: f64 = 0.05;
const MEAN_REVERSION_GAIN: f64 = 0.5;
const STABILITY_TRIGGER: f64 = 0.6;
const OSCILLATION_GAIN: f64 = 0.5;
const SYNTROPY_GAIN: f64 = 0.2;
const SYNTROPY_TARGET: f64 = 0.0;
const LOGIC_BASELINE: f64 = 0.1;
const SMOOTHING_RATE: f64 = 0.1;
const NO_ACTION_FLOOR: f64 = 1e-4;

/// Owner of the creativity, logic and deduction fields.
pub struct CognitiveSynthesizer {
    dimensions: usize,
    creativity_field: Vec<f64>,
    logic_field: Vec<f64>,
    deduction_field: Vec<f64>,
    // Pre-allocated scratch for the double gradient
    grad: Vec<f64>,
    grad2: Vec<f64>,
}

impl CognitiveSynthesizer {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            creativity_field: vec![0.0; dimensions],
            logic_field: vec![0.0; dimensions],
            deduction_field: vec![0.0; dimensions],
            grad: vec![0.0; dimensions],
            grad2: vec![0.0; dimensions],
        }
    }

    /// Rebuild the creativity field from this tick's patterns.
    ///
    /// Cells beyond `primary_field.len()` receive only the oscillation
    /// term; the engine always passes a full-length field.
    pub fn generate_creative_concepts(&mut self, patterns: &Patterns, primary_field: &[f64]) {
        self.creativity_field.fill(0.0);

        // Turbulent: pull toward the spatial mean.
        if patterns.variance > VARIANCE_TRIGGER {
            let field_mean = mean(primary_field);
            for (c, &phi) in self.creativity_field.iter_mut().zip(primary_field) {
                *c += MEAN_REVERSION_GAIN * (field_mean - phi);
            }
        }

        // Calm: reinforce the dominant oscillation.
        if patterns.stability > STABILITY_TRIGGER && patterns.dominant_freq_idx > 0 {
            let n = self.dimensions as f64;
            let k = patterns.dominant_freq_idx as f64;
            let amplitude = OSCILLATION_GAIN * patterns.stability;
            for (i, c) in self.creativity_field.iter_mut().enumerate() {
                *c += amplitude * (TAU * k * i as f64 / n).sin();
            }
        }

        for (c, &phi) in self.creativity_field.iter_mut().zip(primary_field) {
            *c += SYNTROPY_GAIN * (SYNTROPY_TARGET - phi);
        }
    }

    /// Rebuild the logic field and normalise it to unit sum.
    ///
    /// The dampening utility (1 − stability) and the enhancement utility
    /// (stability) are both uniform and sum to 1, so before
    /// normalisation every cell holds 1.1 regardless of stability.
    pub fn apply_logical_constraints(&mut self, patterns: &Patterns) {
        let utility_dampen = 1.0 - patterns.stability;
        let utility_enhance = patterns.stability;
        for l in self.logic_field.iter_mut() {
            *l = LOGIC_BASELINE + utility_dampen + utility_enhance;
        }

        let sum: f64 = self.logic_field.iter().sum();
        if sum > 0.0 {
            for l in self.logic_field.iter_mut() {
                *l /= sum;
            }
        }
    }

    /// Combine creativity and logic, smooth, and classify.
    pub fn deductive_synthesis(&mut self, iterations: usize) -> Concept {
        for ((d, &c), &l) in self
            .deduction_field
            .iter_mut()
            .zip(&self.creativity_field)
            .zip(&self.logic_field)
        {
            *d = c * l;
        }

        // Unit spacing: the deduction lives on cell indices, not on dx.
        for _ in 0..iterations {
            gradient_into(&self.deduction_field, 1.0, &mut self.grad);
            gradient_into(&self.grad, 1.0, &mut self.grad2);
            for (d, &s) in self.deduction_field.iter_mut().zip(&self.grad2) {
                *d += SMOOTHING_RATE * s;
            }
        }

        self.classify()
    }

    fn classify(&self) -> Concept {
        let d = &self.deduction_field;
        if d.iter().all(|&v| v == 0.0) {
            return Concept::no_action();
        }
        let max_abs = d.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        if max_abs < NO_ACTION_FLOOR {
            return Concept::no_action();
        }

        let id = if std_dev(d) > mean(d).abs() {
            ConceptKind::DampenVariance
        } else {
            ConceptKind::DriveSyntropy
        };
        let concept = Concept {
            id,
            magnitude: mean_abs(d),
        };
        log::debug!(
            "deductive synthesis: {} (magnitude {:.6})",
            concept.id,
            concept.magnitude
        );
        concept
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn creativity_field(&self) -> &[f64] {
        &self.creativity_field
    }

    pub fn logic_field(&self) -> &[f64] {
        &self.logic_field
    }

    pub fn deduction_field(&self) -> &[f64] {
        &self.deduction_field
    }
}
