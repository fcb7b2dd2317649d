//! Math Dash - adaptive difficulty core for a children's math game
//!
//! Core modules:
//! - `engine`: Deterministic problem generation and performance analysis
//! - `session`: Per-player wiring of generator + engine
//!
//! Rendering, input collection, and persistence live in the host app; this
//! crate only produces problems and difficulty recommendations.

pub mod engine;
pub mod session;

pub use engine::{
    DifficultyAdjustment, DifficultyChange, DifficultyEngine, DifficultyLevel, HelpSuggestion,
    Operation, PerformanceMetrics, PerformanceObservation, PerformanceTrend, Problem,
    ProblemGenerator, SessionSummary,
};
pub use session::Session;

/// Tuning constants for generation and analysis
pub mod consts {
    /// Rolling history cap inside `DifficultyEngine`
    pub const HISTORY_CAP: usize = 100;
    /// Analysis window over the rolling history
    pub const ANALYSIS_WINDOW: usize = 10;
    /// Minimum observations before a recommendation carries weight
    pub const MIN_OBSERVATIONS: usize = 5;

    /// Performance window cap inside `ProblemGenerator`
    pub const GENERATOR_WINDOW_CAP: usize = 20;
    /// Recent operand-pair ring size (repeat avoidance)
    pub const RECENT_PROBLEM_CAP: usize = 10;
    /// Attempts at a fresh operand pair before accepting a repeat
    pub const OPERAND_RETRY_CAP: u32 = 20;

    /// Accuracy at or above which difficulty should rise
    pub const HIGH_ACCURACY: f32 = 0.85;
    /// Accuracy at or below which difficulty should fall
    pub const LOW_ACCURACY: f32 = 0.60;
    /// Accuracy band the engine steers toward
    pub const TARGET_ACCURACY: f32 = 0.75;
    /// Response time (seconds) considered fast
    pub const FAST_RESPONSE_SECS: f32 = 3.0;
    /// Response time (seconds) the engine steers toward
    pub const TARGET_RESPONSE_SECS: f32 = 5.0;
    /// Response time (seconds) considered slow
    pub const SLOW_RESPONSE_SECS: f32 = 8.0;
    /// Correct-answer streak required before an increase
    pub const STREAK_FOR_INCREASE: u32 = 3;
    /// Recent-vs-overall response time ratio that flags fatigue
    pub const FATIGUE_RATIO: f32 = 1.5;
    /// Observations sampled for the fatigue check
    pub const FATIGUE_WINDOW: usize = 5;

    /// Accuracy over [`MASTERY_MIN_ATTEMPTS`] that marks an operation mastered
    pub const MASTERY_ACCURACY: f32 = 0.85;
    pub const MASTERY_MIN_ATTEMPTS: usize = 20;
    /// Accuracy under which an operation counts as struggling
    pub const STRUGGLE_ACCURACY: f32 = 0.60;
    pub const STRUGGLE_MIN_ATTEMPTS: usize = 10;
}

/// Current Unix time in milliseconds (0 if the clock is before the epoch)
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}
