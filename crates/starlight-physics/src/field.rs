// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Field Dynamics Integrator
// ─────────────────────────────────────────────────────────────────────
//! Explicit Euler integrator for the periodic 1-D field equation:
//!
//!   dφ_i/dt = γ·∇²φ_i + α·φ_i − β·φ_i³ + g·⟨φ⟩
//!
//! with ∇²φ_i = (φ_{i−1} − 2φ_i + φ_{i+1}) / dx². The update is
//! synchronous: every cell reads the pre-step field. When the new
//! field's variance exceeds the threshold a proportional controller
//! pulls every cell toward zero once.
//!
//! Pre-allocated scratch keeps the per-tick path allocation-free.

use starlight_types::{
    Concept, ConceptKind, ControlParams, EngineConfig, FeedbackConfig, Patterns, StarlightError,
    StarlightResult,
};

use crate::numeric::{gradient_into, mean, variance};
use crate::rng::SimpleRng;
use crate::spectral::dominant_frequency;

/// Owner of the primary field, its derived views, and the control
/// parameters.
pub struct FieldDynamics {
    dimensions: usize,
    dt: f64,
    dx: f64,
    primary_field: Vec<f64>,
    gradient_field: Vec<f64>,
    pattern_field: Vec<f64>,
    params: ControlParams,
    pattern_learning_rate: f64,
    // Pre-allocated scratch
    phi_new: Vec<f64>,
}

impl FieldDynamics {
    /// Create a field seeded uniformly in [-0.5, 0.5) from `config.seed`.
    ///
    /// `config` is assumed validated (`dimensions > 0`).
    pub fn new(config: &EngineConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let field = (0..config.dimensions).map(|_| rng.next_centered()).collect();
        Self::build(config, field)
    }

    /// Create a field with an explicit initial state.
    pub fn with_field(config: &EngineConfig, field: Vec<f64>) -> StarlightResult<Self> {
        if field.len() != config.dimensions {
            return Err(StarlightError::Validation(format!(
                "initial field length {} != dimensions {}",
                field.len(),
                config.dimensions
            )));
        }
        if field.iter().any(|v| !v.is_finite()) {
            return Err(StarlightError::Numerical(
                "initial field contains NaN or Inf".to_string(),
            ));
        }
        Ok(Self::build(config, field))
    }

    fn build(config: &EngineConfig, primary_field: Vec<f64>) -> Self {
        let n = config.dimensions;
        Self {
            dimensions: n,
            dt: config.dt,
            dx: config.dx,
            primary_field,
            gradient_field: vec![0.0; n],
            pattern_field: vec![0.0; n],
            params: config.initial,
            pattern_learning_rate: config.pattern_learning_rate,
            phi_new: vec![0.0; n],
        }
    }

    /// Advance the field by one step under `external_input`.
    ///
    /// Returns `true` when chaos reduction fired. On error the field is
    /// left untouched.
    pub fn integrate(&mut self, external_input: &[f64]) -> StarlightResult<bool> {
        if external_input.len() != self.dimensions {
            log::warn!(
                "rejected stimulus: length {} != dimensions {}",
                external_input.len(),
                self.dimensions
            );
            return Err(StarlightError::Validation(format!(
                "stimulus length {} != dimensions {}",
                external_input.len(),
                self.dimensions
            )));
        }
        if external_input.iter().any(|v| !v.is_finite()) {
            log::warn!("rejected stimulus: contains NaN or Inf");
            return Err(StarlightError::Numerical(
                "stimulus contains NaN or Inf".to_string(),
            ));
        }

        let n = self.dimensions;
        let dt = self.dt;

        // Stimulus injection
        for (phi, &s) in self.primary_field.iter_mut().zip(external_input) {
            *phi += s * dt;
        }

        let p = self.params;
        let global_feedback = p.global_feedback_strength * mean(&self.primary_field);
        let inv_dx2 = 1.0 / (self.dx * self.dx);

        // Synchronous update into scratch
        let phi = &self.primary_field;
        for i in 0..n {
            let prev = phi[(i + n - 1) % n];
            let curr = phi[i];
            let next = phi[(i + 1) % n];

            let laplacian = (prev - 2.0 * curr + next) * inv_dx2;
            let dphi_dt =
                p.gamma * laplacian + p.alpha * curr - p.beta * curr.powi(3) + global_feedback;
            self.phi_new[i] = curr + dphi_dt * dt;
        }
        std::mem::swap(&mut self.primary_field, &mut self.phi_new);

        let var = variance(&self.primary_field);
        if var > p.variance_threshold {
            log::debug!(
                "chaos reduction: variance {var:.5} > threshold {:.5}",
                p.variance_threshold
            );
            self.apply_chaos_reduction();
            return Ok(true);
        }
        Ok(false)
    }

    /// Proportional controller toward the zero state:
    /// φ_i += −k·φ_i·dt.
    pub fn apply_chaos_reduction(&mut self) {
        let k = self.params.control_gain;
        let dt = self.dt;
        for phi in self.primary_field.iter_mut() {
            let control_signal = -k * *phi;
            *phi += control_signal * dt;
        }
    }

    /// Recompute the gradient view and fold the field into the pattern EMA.
    pub fn evolve_auxiliary_fields(&mut self) {
        gradient_into(&self.primary_field, self.dx, &mut self.gradient_field);

        let lr = self.pattern_learning_rate;
        for (pat, &phi) in self.pattern_field.iter_mut().zip(&self.primary_field) {
            *pat = (1.0 - lr) * *pat + lr * phi;
        }
    }

    /// Statistical and spectral descriptors of the current field.
    pub fn get_patterns(&self) -> Patterns {
        let variance = variance(&self.primary_field);
        Patterns {
            variance,
            mean_value: mean(&self.primary_field),
            stability: 1.0 / (1.0 + 10.0 * variance),
            dominant_freq_idx: dominant_frequency(&self.primary_field),
        }
    }

    /// Apply a concept's parameter feedback, clamped to the ceilings.
    ///
    /// Returns `true` when any parameter changed.
    pub fn apply_feedback(&mut self, concept: &Concept, fb: &FeedbackConfig) -> bool {
        let before = self.params;
        let m = concept.magnitude.max(0.0);
        match concept.id {
            ConceptKind::DampenVariance => {
                self.params.beta = (self.params.beta + fb.beta_rate * m).min(fb.beta_max);
                self.params.control_gain = (self.params.control_gain
                    + fb.control_gain_rate * m)
                    .min(fb.control_gain_max);
            }
            ConceptKind::DriveSyntropy => {
                self.params.alpha = (self.params.alpha + fb.alpha_rate * m).min(fb.alpha_max);
            }
            ConceptKind::NoAction => {}
        }
        let changed = self.params != before;
        if changed {
            log::debug!(
                "feedback {}: alpha {:.5} beta {:.5} control_gain {:.5}",
                concept.id,
                self.params.alpha,
                self.params.beta,
                self.params.control_gain
            );
        }
        changed
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn primary_field(&self) -> &[f64] {
        &self.primary_field
    }

    pub fn gradient_field(&self) -> &[f64] {
        &self.gradient_field
    }

    pub fn pattern_field(&self) -> &[f64] {
        &self.pattern_field
    }

    /// Copy of the control parameters.
    pub fn params(&self) -> ControlParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(n: usize) -> EngineConfig {
        EngineConfig {
            dimensions: n,
            ..EngineConfig::default()
        }
    }

    fn zeroed(n: usize) -> FieldDynamics {
        FieldDynamics::with_field(&config(n), vec![0.0; n]).unwrap()
    }

    #[test]
    fn test_random_init_reproducible() {
        let a = FieldDynamics::new(&config(50));
        let b = FieldDynamics::new(&config(50));
        assert_eq!(a.primary_field(), b.primary_field());
        assert!(a.primary_field().iter().all(|v| (-0.5..0.5).contains(v)));
        assert_eq!(a.gradient_field().len(), 50);
        assert_eq!(a.pattern_field().len(), 50);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = FieldDynamics::new(&config(16));
        let b = FieldDynamics::new(&EngineConfig {
            seed: 7,
            ..config(16)
        });
        assert_ne!(a.primary_field(), b.primary_field());
    }

    #[test]
    fn test_with_field_length_mismatch() {
        let err = FieldDynamics::with_field(&config(8), vec![0.0; 4]);
        assert!(matches!(err, Err(StarlightError::Validation(_))));
    }

    #[test]
    fn test_single_impulse_step() {
        let mut field = zeroed(8);
        let mut input = vec![0.0; 8];
        input[0] = 1.0;
        let reduced = field.integrate(&input).unwrap();
        assert!(!reduced, "variance is far below threshold");

        let phi = field.primary_field();
        // dφ/dt at 0 = 0.5·(−0.2) + 0.1·0.1 − 0.1·0.001 + 0.01·0.0125
        assert!((phi[0] - 0.0910025).abs() < 1e-12, "phi[0]={}", phi[0]);
        // dφ/dt at 1 = 0.5·0.1 + 0.01·0.0125
        assert!((phi[1] - 0.0050125).abs() < 1e-12, "phi[1]={}", phi[1]);
        assert!((phi[7] - phi[1]).abs() < 1e-15, "update must be symmetric");
        for i in 2..7 {
            assert!((phi[i] - 1.25e-5).abs() < 1e-15, "phi[{i}]={}", phi[i]);
        }
    }

    #[test]
    fn test_integrate_rejects_wrong_length() {
        let mut field = zeroed(8);
        let before = field.primary_field().to_vec();
        assert!(matches!(
            field.integrate(&[1.0; 3]),
            Err(StarlightError::Validation(_))
        ));
        assert_eq!(field.primary_field(), &before[..]);
    }

    #[test]
    fn test_integrate_rejects_nan() {
        let mut field = zeroed(4);
        let input = [0.0, f64::NAN, 0.0, 0.0];
        assert!(matches!(
            field.integrate(&input),
            Err(StarlightError::Numerical(_))
        ));
        assert!(field.primary_field().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_chaos_reduction_fires_above_threshold() {
        let cfg = config(8);
        let start: Vec<f64> = (0..8).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let mut field = FieldDynamics::with_field(&cfg, start).unwrap();
        let reduced = field.integrate(&[0.0; 8]).unwrap();
        assert!(reduced, "variance ~1 must trigger chaos reduction");
    }

    #[test]
    fn test_chaos_reduction_pulls_toward_zero() {
        let start = vec![0.9, -0.7, 0.3, -0.1, 0.0, 0.5, -0.4, 0.2];
        let mut field = FieldDynamics::with_field(&config(8), start.clone()).unwrap();
        field.apply_chaos_reduction();
        // k·dt = 0.05 → each cell scaled by 0.95
        for (i, (&after, &before)) in field.primary_field().iter().zip(&start).enumerate() {
            assert!((after - 0.95 * before).abs() < 1e-12, "cell {i}");
            if before != 0.0 {
                assert!(after.abs() < before.abs(), "cell {i} not reduced");
            }
        }
    }

    #[test]
    fn test_stable_field_skips_reduction() {
        let mut field = zeroed(16);
        assert!(!field.integrate(&[0.0; 16]).unwrap());
        assert!(field.primary_field().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_patterns_of_zero_field() {
        let p = zeroed(8).get_patterns();
        assert_eq!(p.variance, 0.0);
        assert_eq!(p.mean_value, 0.0);
        assert_eq!(p.stability, 1.0);
        assert_eq!(p.dominant_freq_idx, 1);
    }

    #[test]
    fn test_patterns_dominant_frequency() {
        let n = 32;
        let field: Vec<f64> = (0..n)
            .map(|i| 0.3 * (std::f64::consts::TAU * 5.0 * i as f64 / n as f64).sin())
            .collect();
        let dynamics = FieldDynamics::with_field(&config(n), field).unwrap();
        let p = dynamics.get_patterns();
        assert_eq!(p.dominant_freq_idx, 5);
        assert!(p.mean_value.abs() < 1e-12);
        // sin² averages to 1/2 → variance 0.045
        assert!((p.variance - 0.045).abs() < 1e-9, "variance={}", p.variance);
        assert!((p.stability - 1.0 / 1.45).abs() < 1e-9);
    }

    #[test]
    fn test_auxiliary_fields_gradient_stable_pattern_decays() {
        let start = vec![0.0, 0.4, 0.0, -0.4, 0.0, 0.4, 0.0, -0.4];
        let mut field = FieldDynamics::with_field(&config(8), start).unwrap();

        field.evolve_auxiliary_fields();
        let grad1 = field.gradient_field().to_vec();
        let pat1 = field.pattern_field().to_vec();

        field.evolve_auxiliary_fields();
        assert_eq!(field.gradient_field(), &grad1[..]);
        assert_ne!(field.pattern_field(), &pat1[..]);

        // EMA from zero: 0.05·φ then 0.05·φ·(1 + 0.95)
        assert!((pat1[1] - 0.02).abs() < 1e-12);
        assert!((field.pattern_field()[1] - 0.039).abs() < 1e-12);
        // (φ_2 − φ_0) / 2 = 0 at i = 1, (φ_1 − φ_7)/2 = 0.4 at i = 0
        assert!((grad1[0] - 0.4).abs() < 1e-12);
        assert!(grad1[1].abs() < 1e-12);
    }

    #[test]
    fn test_feedback_dampen_variance() {
        let mut field = zeroed(8);
        let fb = FeedbackConfig::default();
        let concept = Concept {
            id: ConceptKind::DampenVariance,
            magnitude: 2.0,
        };
        assert!(field.apply_feedback(&concept, &fb));
        let p = field.params();
        assert!((p.beta - 0.12).abs() < 1e-12, "beta={}", p.beta);
        assert!((p.control_gain - 0.54).abs() < 1e-12);
        assert_eq!(p.alpha, 0.1);
    }

    #[test]
    fn test_feedback_drive_syntropy() {
        let mut field = zeroed(8);
        let fb = FeedbackConfig::default();
        let concept = Concept {
            id: ConceptKind::DriveSyntropy,
            magnitude: 1.0,
        };
        field.apply_feedback(&concept, &fb);
        let p = field.params();
        assert!((p.alpha - 0.11).abs() < 1e-12);
        assert_eq!(p.beta, 0.1);
        assert_eq!(p.control_gain, 0.5);
    }

    #[test]
    fn test_feedback_no_action() {
        let mut field = zeroed(8);
        assert!(!field.apply_feedback(&Concept::no_action(), &FeedbackConfig::default()));
        assert_eq!(field.params(), ControlParams::default());
    }

    #[test]
    fn test_feedback_clamped() {
        let mut field = zeroed(8);
        let fb = FeedbackConfig::default();
        let big = |id| Concept { id, magnitude: 1e6 };
        field.apply_feedback(&big(ConceptKind::DampenVariance), &fb);
        field.apply_feedback(&big(ConceptKind::DriveSyntropy), &fb);
        let p = field.params();
        assert_eq!(p.beta, 0.3);
        assert_eq!(p.control_gain, 1.0);
        assert_eq!(p.alpha, 0.2);
        // Saturated: further feedback changes nothing.
        assert!(!field.apply_feedback(&big(ConceptKind::DampenVariance), &fb));
    }

    proptest! {
        #[test]
        fn prop_stability_in_unit_interval(
            field in prop::collection::vec(-10.0f64..10.0, 8..64)
        ) {
            let n = field.len();
            let dynamics = FieldDynamics::with_field(&config(n), field).unwrap();
            let p = dynamics.get_patterns();
            prop_assert!(p.stability > 0.0 && p.stability <= 1.0);
            if p.variance > 1e-12 {
                prop_assert!(p.stability < 1.0);
            }
        }

        #[test]
        fn prop_chaos_reduction_never_grows_cells(
            field in prop::collection::vec(-5.0f64..5.0, 4..32)
        ) {
            let n = field.len();
            let mut dynamics = FieldDynamics::with_field(&config(n), field.clone()).unwrap();
            dynamics.apply_chaos_reduction();
            for (&after, &before) in dynamics.primary_field().iter().zip(&field) {
                prop_assert!(after.abs() <= before.abs());
                prop_assert!(after * before >= 0.0, "controller must not overshoot zero");
            }
        }

        #[test]
        fn prop_field_lengths_invariant(
            steps in 1usize..20,
            amp in -1.0f64..1.0
        ) {
            let mut dynamics = FieldDynamics::new(&config(12));
            let mut input = vec![0.0; 12];
            input[3] = amp;
            for _ in 0..steps {
                dynamics.integrate(&input).unwrap();
                dynamics.evolve_auxiliary_fields();
            }
            prop_assert_eq!(dynamics.primary_field().len(), 12);
            prop_assert_eq!(dynamics.gradient_field().len(), 12);
            prop_assert_eq!(dynamics.pattern_field().len(), 12);
        }
    }
}
