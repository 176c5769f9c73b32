// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Field Engine Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Star Light field engine, the numeric kernel behind the assistant's
//! internal state.

pub mod config;
pub mod error;
pub mod state;
pub mod telemetry;

pub use config::{EngineConfig, FeedbackConfig};
pub use error::{StarlightError, StarlightResult};
pub use state::{
    CognitiveState, Concept, ConceptKind, ControlParams, CoreFieldState, CycleInfo, Patterns,
};
pub use telemetry::{
    clamp_score, AnthosCluster, BusinessMetrics, DatabaseInstance, MonitoredService,
    PhysicsIndicators, PlatformState, ServiceDynamics,
};
