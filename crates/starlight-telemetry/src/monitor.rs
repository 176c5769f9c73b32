// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Telemetry Monitor
// ─────────────────────────────────────────────────────────────────────
//! Feeds a stream of snapshots through [`analyze`], keeping the
//! previous snapshot as the baseline for the next one.

use starlight_types::{PhysicsIndicators, PlatformState};

use crate::physics::analyze;

#[derive(Debug, Default)]
pub struct TelemetryMonitor {
    previous: Option<PlatformState>,
    last: Option<PhysicsIndicators>,
    observed: u64,
}

impl TelemetryMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze `snapshot` against the previous one, then retain it.
    ///
    /// The first observation returns the neutral initializing indicators.
    pub fn observe(&mut self, snapshot: PlatformState) -> PhysicsIndicators {
        let indicators = analyze(Some(&snapshot), self.previous.as_ref());
        self.previous = Some(snapshot);
        self.last = Some(indicators.clone());
        self.observed += 1;
        indicators
    }

    /// Indicators from the most recent observation.
    pub fn last(&self) -> Option<&PhysicsIndicators> {
        self.last.as_ref()
    }

    /// Snapshot the next observation will be compared against.
    pub fn baseline(&self) -> Option<&PlatformState> {
        self.previous.as_ref()
    }

    /// Number of snapshots observed since creation or the last reset.
    pub fn observed(&self) -> u64 {
        self.observed
    }

    /// Forget the baseline; the next observation is neutral again.
    pub fn reset(&mut self) {
        log::info!("telemetry monitor reset after {} snapshots", self.observed);
        self.previous = None;
        self.last = None;
        self.observed = 0;
    }
}
