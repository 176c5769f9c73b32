// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Telemetry Physics Observer
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Telemetry physics: treats per-service latency change as velocity and
//! error-rate growth as force, and folds both into a bounded risk score.
//!
//! - `analyze`: stateless transform over a (current, previous) pair
//! - `TelemetryMonitor`: remembers the previous snapshot of a stream

pub mod monitor;
pub mod physics;

pub use monitor::TelemetryMonitor;
pub use physics::{analyze, initial_indicators};
