// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Telemetry Physics Transform
// ─────────────────────────────────────────────────────────────────────
//! Per service present in both snapshots (unit mass):
//!
//!   v   = latency_now − latency_prev
//!   E  += ½·v²
//!   F  += max(0, error_now − error_prev)
//!
//! risk = clamp(E / 5000 + F / 5, 0, 1). A service is flagged when
//! |v| > 25 ms or its error rate rose by more than 0.5 points.

use starlight_types::{clamp_score, PhysicsIndicators, PlatformState, ServiceDynamics};

/// Energy at which the energy term alone saturates the risk score.
const ENERGY_SCALE: f64 = 5000.0;
/// Force at which the force term alone saturates the risk score.
const FORCE_SCALE: f64 = 5.0;
const VELOCITY_FLAG: f64 = 25.0;
const ERROR_DELTA_FLAG: f64 = 0.5;

const INITIALIZING_NARRATIVE: &str = "Initializing physics simulation core...";
const STABLE_NARRATIVE: &str =
    "System dynamics are stable; no significant energy or force variations detected.";

/// Neutral indicators returned before two snapshots are available.
pub fn initial_indicators() -> PhysicsIndicators {
    PhysicsIndicators {
        total_kinetic_energy: 0.0,
        instability_force: 0.0,
        risk_score: 0.0,
        narrative: INITIALIZING_NARRATIVE.to_string(),
        hotspots: Vec::new(),
    }
}

/// Compute risk indicators from a snapshot pair.
pub fn analyze(
    current: Option<&PlatformState>,
    previous: Option<&PlatformState>,
) -> PhysicsIndicators {
    let (current, previous) = match (current, previous) {
        (Some(c), Some(p)) => (c, p),
        _ => return initial_indicators(),
    };

    let mut total_kinetic_energy = 0.0;
    let mut instability_force = 0.0;
    let mut hotspots = Vec::new();

    for service in &current.services {
        // New services have no baseline yet.
        let Some(prev) = previous.service(&service.name) else {
            continue;
        };

        let velocity = service.latency - prev.latency;
        let kinetic_energy = 0.5 * velocity * velocity;
        total_kinetic_energy += kinetic_energy;

        let error_delta = service.error_rate - prev.error_rate;
        if error_delta > 0.0 {
            instability_force += error_delta;
        }

        if velocity.abs() > VELOCITY_FLAG || error_delta > ERROR_DELTA_FLAG {
            hotspots.push(ServiceDynamics {
                name: service.name.clone(),
                velocity,
                kinetic_energy,
                error_delta,
            });
        }
    }

    let risk_score = clamp_score(
        total_kinetic_energy / ENERGY_SCALE + instability_force / FORCE_SCALE,
        0.0,
        1.0,
    );

    let narrative = if hotspots.is_empty() {
        STABLE_NARRATIVE.to_string()
    } else {
        let details: Vec<String> = hotspots.iter().map(describe).collect();
        format!("High-risk dynamics detected: {}.", details.join(". "))
    };

    log::debug!(
        "telemetry physics: E={total_kinetic_energy:.2} F={instability_force:.3} \
         risk={risk_score:.3} hotspots={}",
        hotspots.len()
    );

    PhysicsIndicators {
        total_kinetic_energy,
        instability_force,
        risk_score,
        narrative,
        hotspots,
    }
}

fn describe(d: &ServiceDynamics) -> String {
    format!(
        "{} shows high velocity (latency change: {:.0}ms) and/or force (error rate increase: {:.2}%)",
        d.name, d.velocity, d.error_delta
    )
}
