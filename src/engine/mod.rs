//! Deterministic difficulty/problem engine
//!
//! All adaptive logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (one `Pcg32` per generator)
//! - Bounded in-memory state, no I/O
//! - No rendering or platform dependencies

pub mod analysis;
pub mod generator;
pub mod level;
pub mod problem;

pub use analysis::{
    DifficultyAdjustment, DifficultyChange, DifficultyEngine, HelpSuggestion, PerformanceMetrics,
    PerformanceTrend, SessionSummary,
};
pub use generator::ProblemGenerator;
pub use level::DifficultyLevel;
pub use problem::{Operation, PerformanceObservation, Problem};
