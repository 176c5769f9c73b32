// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Field Engine State Types
// ─────────────────────────────────────────────────────────────────────
//! Per-tick value types (patterns, concepts) and the read-only
//! snapshots handed to the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mutable control parameters of the field dynamics.
///
/// Snapshot value: the field engine owns the live copy and only the
/// feedback step may change it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlParams {
    /// Linear growth rate.
    pub alpha: f64,
    /// Cubic saturation coefficient.
    pub beta: f64,
    /// Diffusion coefficient.
    pub gamma: f64,
    /// Weight of the spatial mean fed back into every cell.
    pub global_feedback_strength: f64,
    /// Proportional gain of the chaos-reduction controller.
    pub control_gain: f64,
    /// Variance above which chaos reduction fires.
    pub variance_threshold: f64,
}

impl Default for ControlParams {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            beta: 0.1,
            gamma: 0.5,
            global_feedback_strength: 0.01,
            control_gain: 0.5,
            variance_threshold: 0.08,
        }
    }
}

impl ControlParams {
    pub fn is_finite(&self) -> bool {
        [
            self.alpha,
            self.beta,
            self.gamma,
            self.global_feedback_strength,
            self.control_gain,
            self.variance_threshold,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Statistical and spectral descriptors of the primary field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patterns {
    /// Population variance.
    pub variance: f64,
    pub mean_value: f64,
    /// `1 / (1 + 10 * variance)`, in (0, 1].
    pub stability: f64,
    /// Dominant non-DC DFT bin.
    pub dominant_freq_idx: usize,
}

/// The three directives the synthesizer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptKind {
    NoAction,
    DampenVariance,
    DriveSyntropy,
}

impl ConceptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConceptKind::NoAction => "no_action",
            ConceptKind::DampenVariance => "dampen_variance",
            ConceptKind::DriveSyntropy => "drive_syntropy",
        }
    }
}

impl fmt::Display for ConceptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthesized directive with its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub id: ConceptKind,
    /// Mean absolute deduction value; 0 for `NoAction`.
    pub magnitude: f64,
}

impl Concept {
    pub fn no_action() -> Self {
        Self {
            id: ConceptKind::NoAction,
            magnitude: 0.0,
        }
    }

    pub fn is_no_action(&self) -> bool {
        self.id == ConceptKind::NoAction
    }
}

/// Copy of the field engine state, safe to hand out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreFieldState {
    pub primary_field: Vec<f64>,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub global_feedback_strength: f64,
    pub control_gain: f64,
    pub variance_threshold: f64,
    /// Simulation time.
    pub time: f64,
}

impl CoreFieldState {
    pub fn new(primary_field: Vec<f64>, params: ControlParams, time: f64) -> Self {
        Self {
            primary_field,
            alpha: params.alpha,
            beta: params.beta,
            gamma: params.gamma,
            global_feedback_strength: params.global_feedback_strength,
            control_gain: params.control_gain,
            variance_threshold: params.variance_threshold,
            time,
        }
    }
}

/// Copy of the cognitive fields plus the last tick's outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveState {
    pub creativity_field: Vec<f64>,
    pub logic_field: Vec<f64>,
    pub deduction_field: Vec<f64>,
    pub patterns: Patterns,
    /// `None` until the first cycle has run.
    pub selected_concept: Option<Concept>,
}

/// Outputs of the most recent cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleInfo {
    pub patterns: Patterns,
    pub selected_concept: Option<Concept>,
}
