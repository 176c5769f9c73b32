// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Field Engine Orchestrator
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Closed-loop engine behind the assistant's internal state.
//!
//! Each cycle integrates the field under a stimulus, extracts pattern
//! descriptors, synthesizes a concept, and feeds the concept back into
//! the field's control parameters. Telemetry physics runs alongside,
//! independent of the loop.
//!
//! # Invariants
//!
//! 1. **Fixed shape**: every field keeps the configured length for the
//!    engine's lifetime; mis-sized stimuli are rejected before any state
//!    changes.
//! 2. **Monotone, capped parameters**: feedback only raises α, β and the
//!    control gain, each clamped to its ceiling.
//! 3. **Copy-out reads**: every snapshot accessor returns owned data;
//!    nothing handed out aliases engine state.

pub mod orchestrator;

pub use orchestrator::StarLightEngine;

pub use starlight_telemetry::{analyze, TelemetryMonitor};
pub use starlight_types::{
    CognitiveState, Concept, ConceptKind, ControlParams, CoreFieldState, CycleInfo, EngineConfig,
    Patterns, PhysicsIndicators, PlatformState, StarlightError, StarlightResult,
};
