// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Cycle Orchestrator
// ─────────────────────────────────────────────────────────────────────
//! Five-step cognitive cycle:
//!   1. Integrate the field under the stimulus, evolve auxiliary fields
//!   2. Extract pattern descriptors
//!   3. Creativity → logic → deductive synthesis → concept
//!   4. Concept feedback into α / β / control gain
//!   5. Advance simulation time by dt

use starlight_cognition::CognitiveSynthesizer;
use starlight_physics::{encode_with_strength, FieldDynamics};
use starlight_types::{
    CognitiveState, Concept, ControlParams, CoreFieldState, CycleInfo, EngineConfig, Patterns,
    StarlightResult,
};

/// Single-owner orchestrator over the field and cognitive stages.
pub struct StarLightEngine {
    cfg: EngineConfig,
    field: FieldDynamics,
    cognition: CognitiveSynthesizer,
    time: f64,
    cycle_count: u64,
    last_patterns: Patterns,
    last_concept: Option<Concept>,
}

impl StarLightEngine {
    /// Create an engine with a seeded random initial field.
    pub fn new(config: EngineConfig) -> StarlightResult<Self> {
        config.validate()?;
        let field = FieldDynamics::new(&config);
        Ok(Self::assemble(config, field))
    }

    /// Create an engine with an explicit initial field.
    pub fn with_initial_field(config: EngineConfig, field: Vec<f64>) -> StarlightResult<Self> {
        config.validate()?;
        let field = FieldDynamics::with_field(&config, field)?;
        Ok(Self::assemble(config, field))
    }

    fn assemble(cfg: EngineConfig, field: FieldDynamics) -> Self {
        log::info!(
            "field engine ready: dimensions={} dt={} dx={} seed={}",
            cfg.dimensions,
            cfg.dt,
            cfg.dx,
            cfg.seed
        );
        let last_patterns = field.get_patterns();
        Self {
            cognition: CognitiveSynthesizer::new(cfg.dimensions),
            field,
            time: 0.0,
            cycle_count: 0,
            last_patterns,
            last_concept: None,
            cfg,
        }
    }

    /// Run one cycle under `external_input` (length = dimensions).
    ///
    /// On error nothing is mutated and time does not advance.
    pub fn run_cycle(&mut self, external_input: &[f64]) -> StarlightResult<CycleInfo> {
        // Step 1: integrate + auxiliary fields
        self.field.integrate(external_input)?;
        self.field.evolve_auxiliary_fields();

        // Step 2: patterns
        let patterns = self.field.get_patterns();
        self.last_patterns = patterns;

        // Step 3: cognitive synthesis
        self.cognition
            .generate_creative_concepts(&patterns, self.field.primary_field());
        self.cognition.apply_logical_constraints(&patterns);
        let concept = self
            .cognition
            .deductive_synthesis(self.cfg.synthesis_iterations);
        self.last_concept = Some(concept);

        // Step 4: feedback
        self.field.apply_feedback(&concept, &self.cfg.feedback);

        // Step 5: time
        self.time += self.field.dt();
        self.cycle_count += 1;

        log::debug!(
            "cycle {}: t={:.3} var={:.5} stability={:.4} k={} concept={} ({:.6})",
            self.cycle_count,
            self.time,
            patterns.variance,
            patterns.stability,
            patterns.dominant_freq_idx,
            concept.id,
            concept.magnitude
        );

        Ok(CycleInfo {
            patterns,
            selected_concept: Some(concept),
        })
    }

    /// Encode `text` and run `cycles_per_query` cycles on it.
    pub fn ingest(&mut self, text: &str) -> StarlightResult<CycleInfo> {
        let stimulus = self.encode(text);
        for _ in 0..self.cfg.cycles_per_query {
            self.run_cycle(&stimulus)?;
        }
        Ok(self.last_cycle())
    }

    /// Stimulus vector for `text` at this engine's shape and amplitude.
    pub fn encode(&self, text: &str) -> Vec<f64> {
        encode_with_strength(text, self.cfg.dimensions, self.cfg.stimulus_strength)
    }

    pub fn core_state(&self) -> CoreFieldState {
        CoreFieldState::new(
            self.field.primary_field().to_vec(),
            self.field.params(),
            self.time,
        )
    }

    pub fn cognitive_state(&self) -> CognitiveState {
        CognitiveState {
            creativity_field: self.cognition.creativity_field().to_vec(),
            logic_field: self.cognition.logic_field().to_vec(),
            deduction_field: self.cognition.deduction_field().to_vec(),
            patterns: self.last_patterns,
            selected_concept: self.last_concept,
        }
    }

    pub fn last_cycle(&self) -> CycleInfo {
        CycleInfo {
            patterns: self.last_patterns,
            selected_concept: self.last_concept,
        }
    }

    pub fn last_patterns(&self) -> Patterns {
        self.last_patterns
    }

    /// `None` until the first cycle.
    pub fn last_concept(&self) -> Option<Concept> {
        self.last_concept
    }

    pub fn primary_field(&self) -> Vec<f64> {
        self.field.primary_field().to_vec()
    }

    pub fn gradient_field(&self) -> Vec<f64> {
        self.field.gradient_field().to_vec()
    }

    pub fn pattern_field(&self) -> Vec<f64> {
        self.field.pattern_field().to_vec()
    }

    pub fn params(&self) -> ControlParams {
        self.field.params()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }
}
