// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Field Engine Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{StarlightError, StarlightResult};
use crate::state::ControlParams;

/// Rates and ceilings for the concept → parameter feedback step.
///
/// Parameters only ever grow through feedback, so their initial values
/// are the floors and these ceilings are the caps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// beta += beta_rate · magnitude on `dampen_variance`.
    pub beta_rate: f64,
    /// control_gain += control_gain_rate · magnitude on `dampen_variance`.
    pub control_gain_rate: f64,
    /// alpha += alpha_rate · magnitude on `drive_syntropy`.
    pub alpha_rate: f64,
    pub beta_max: f64,
    pub control_gain_max: f64,
    pub alpha_max: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            beta_rate: 0.01,
            control_gain_rate: 0.02,
            alpha_rate: 0.01,
            beta_max: 0.3,
            control_gain_max: 1.0,
            alpha_max: 0.2,
        }
    }
}

/// Runtime configuration for the field engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Field length. Fixed for the engine's lifetime.
    /// Default: 50.
    pub dimensions: usize,

    /// Integration time step.
    /// Default: 0.1.
    pub dt: f64,

    /// Spatial step.
    /// Default: 1.0.
    pub dx: f64,

    /// Seed for the initial primary field (uniform in [-0.5, 0.5)).
    /// Default: 42.
    pub seed: u64,

    /// Initial control parameters.
    pub initial: ControlParams,

    /// Feedback rates and ceilings.
    pub feedback: FeedbackConfig,

    /// EMA learning rate of the pattern field.
    /// Default: 0.05.
    pub pattern_learning_rate: f64,

    /// Smoothing passes in deductive synthesis.
    /// Default: 5.
    pub synthesis_iterations: usize,

    /// Cycles run per ingested query.
    /// Default: 5.
    pub cycles_per_query: usize,

    /// Peak amplitude written by the vector encoder.
    /// Default: 0.2.
    pub stimulus_strength: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimensions: 50,
            dt: 0.1,
            dx: 1.0,
            seed: 42,
            initial: ControlParams::default(),
            feedback: FeedbackConfig::default(),
            pattern_learning_rate: 0.05,
            synthesis_iterations: 5,
            cycles_per_query: 5,
            stimulus_strength: 0.2,
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> StarlightResult<()> {
        if self.dimensions == 0 {
            return Err(StarlightError::Config(
                "dimensions must be > 0".to_string(),
            ));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(StarlightError::Config(format!(
                "dt must be finite and > 0, got {}",
                self.dt
            )));
        }
        if !(self.dx.is_finite() && self.dx > 0.0) {
            return Err(StarlightError::Config(format!(
                "dx must be finite and > 0, got {}",
                self.dx
            )));
        }
        if !(self.pattern_learning_rate > 0.0 && self.pattern_learning_rate <= 1.0) {
            return Err(StarlightError::Config(format!(
                "pattern_learning_rate must be in (0, 1], got {}",
                self.pattern_learning_rate
            )));
        }
        if !self.initial.is_finite() {
            return Err(StarlightError::Config(
                "initial control parameters must be finite".to_string(),
            ));
        }
        if !self.stimulus_strength.is_finite() {
            return Err(StarlightError::Config(format!(
                "stimulus_strength must be finite, got {}",
                self.stimulus_strength
            )));
        }

        let fb = &self.feedback;
        if fb.beta_rate < 0.0 || fb.control_gain_rate < 0.0 || fb.alpha_rate < 0.0 {
            return Err(StarlightError::Config(format!(
                "feedback rates must be >= 0, got beta={} control_gain={} alpha={}",
                fb.beta_rate, fb.control_gain_rate, fb.alpha_rate
            )));
        }
        let ceilings = [
            ("beta", self.initial.beta, fb.beta_max),
            ("control_gain", self.initial.control_gain, fb.control_gain_max),
            ("alpha", self.initial.alpha, fb.alpha_max),
        ];
        for (name, initial, max) in ceilings {
            if initial > max {
                return Err(StarlightError::Config(format!(
                    "initial {name} ({initial}) exceeds its feedback ceiling ({max})"
                )));
            }
        }

        if self.cycles_per_query == 0 {
            return Err(StarlightError::Config(
                "cycles_per_query must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> StarlightResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| StarlightError::Config(format!("JSON parse error: {e}")))
    }
}
