//! Per-player session wiring
//!
//! Owns one generator and one engine and makes the engine the single
//! difficulty authority: every answer is recorded, a recommendation is
//! fetched, and its delta is applied back to the generator. The generator's
//! own self-adjustment path is never used here.

use crate::engine::{
    DifficultyAdjustment, DifficultyEngine, DifficultyLevel, PerformanceObservation, Problem,
    ProblemGenerator,
};

/// A single player's game session.
///
/// Single-writer and synchronous; multi-player hosts create one `Session`
/// per player. Nothing here is shared or locked.
#[derive(Debug)]
pub struct Session {
    generator: ProblemGenerator,
    engine: DifficultyEngine,
}

impl Session {
    /// Start a session at level 1 with a deterministic generator seed
    pub fn new(seed: u64) -> Self {
        Self {
            generator: ProblemGenerator::new(seed),
            engine: DifficultyEngine::new(),
        }
    }

    /// Current difficulty
    pub fn difficulty(&self) -> DifficultyLevel {
        self.generator.difficulty()
    }

    /// Next problem to present
    pub fn next_problem(&mut self) -> Problem {
        self.generator.generate_problem()
    }

    /// Report an answered problem. Records the observation, fetches a
    /// recommendation, applies its delta to the generator, and hands the
    /// adjustment back so the host can surface the help suggestions.
    pub fn submit(
        &mut self,
        problem: &Problem,
        correct: bool,
        response_secs: f32,
        hints_used: u32,
    ) -> DifficultyAdjustment {
        let observation = PerformanceObservation::new(problem, correct, response_secs, hints_used);
        self.engine.record_performance(observation);

        let current = self.generator.difficulty();
        let adjustment = self
            .engine
            .recommend_difficulty_adjustment(current.value() as i32);
        let delta = adjustment.change.delta();
        if delta != 0 {
            let next = current.step(delta);
            self.generator.set_difficulty(next.value() as i32);
            log::info!(
                "Difficulty {} -> {} ({})",
                current.value(),
                next.value(),
                adjustment.reason
            );
        }
        adjustment
    }

    /// Read access to the engine for metrics and summaries
    pub fn engine(&self) -> &DifficultyEngine {
        &self.engine
    }

    /// Clear the session-scoped stats without losing the rolling history
    pub fn start_new_session(&mut self) {
        self.engine.start_new_session();
    }
}
