// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Telemetry Snapshot Types
// ─────────────────────────────────────────────────────────────────────
//! Platform telemetry snapshots as delivered by the monitoring backend,
//! and the physics indicators derived from a pair of them.
//!
//! Only `services[].{name, latency, error_rate}` feed the physics
//! transform; the rest is carried through for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::{StarlightError, StarlightResult};

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to nearest bound.
#[inline]
pub fn clamp_score(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_score: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_score: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthosCluster {
    pub name: String,
    pub location: String,
    pub status: String,
}

/// One monitored microservice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredService {
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cluster: String,
    /// Latency in ms.
    pub latency: f64,
    /// Error rate in percent.
    pub error_rate: f64,
}

impl MonitoredService {
    pub fn new(name: impl Into<String>, latency: f64, error_rate: f64) -> Self {
        Self {
            name: name.into(),
            status: "HEALTHY".to_string(),
            cluster: String::new(),
            latency,
            error_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseInstance {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub cluster: String,
    pub active_connections: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMetrics {
    pub total_balance: f64,
    pub transactions_per_second: f64,
    pub failed_transactions: u64,
}

/// Full platform telemetry snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformState {
    pub clusters: Vec<AnthosCluster>,
    pub services: Vec<MonitoredService>,
    pub databases: Vec<DatabaseInstance>,
    pub business_metrics: BusinessMetrics,
}

impl PlatformState {
    /// Snapshot carrying only services.
    pub fn from_services(services: Vec<MonitoredService>) -> Self {
        Self {
            services,
            ..Default::default()
        }
    }

    /// First service with the given name.
    pub fn service(&self, name: &str) -> Option<&MonitoredService> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Parse a snapshot from its JSON wire form.
    pub fn from_json(json: &str) -> StarlightResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| StarlightError::Telemetry(format!("JSON parse error: {e}")))
    }
}

/// Dynamics of one service flagged between two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDynamics {
    pub name: String,
    /// Latency change (ms per tick).
    pub velocity: f64,
    /// 0.5 · velocity².
    pub kinetic_energy: f64,
    /// Error rate change; may be negative.
    pub error_delta: f64,
}

/// Risk indicators derived from a snapshot pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsIndicators {
    pub total_kinetic_energy: f64,
    pub instability_force: f64,
    /// In [0, 1].
    pub risk_score: f64,
    pub narrative: String,
    /// Services flagged as high dynamics, in snapshot order.
    #[serde(default)]
    pub hotspots: Vec<ServiceDynamics>,
}
