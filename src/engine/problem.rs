//! Problem and observation value types
//!
//! Everything here is an immutable value the host app passes around: the
//! generator produces a `Problem`, the host answers it and reports back a
//! `PerformanceObservation`.

use serde::{Deserialize, Serialize};

use super::level::DifficultyLevel;

/// Arithmetic operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    /// All kinds, in selection order
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        }
    }

    /// Lowest difficulty level at which this operation appears
    pub fn min_level(&self) -> u8 {
        match self {
            Operation::Addition => 1,
            Operation::Subtraction => 2,
            Operation::Multiplication => 5,
        }
    }

    /// Selection weight among eligible operations
    pub fn weight(&self) -> f32 {
        match self {
            Operation::Addition => 0.7,
            Operation::Subtraction => 0.2,
            Operation::Multiplication => 0.1,
        }
    }

    /// Compute the answer for an operand pair.
    /// Subtraction saturates at zero; the generator orders operands so it
    /// never actually does.
    pub fn apply(&self, first: u32, second: u32) -> u32 {
        match self {
            Operation::Addition => first + second,
            Operation::Subtraction => first.saturating_sub(second),
            Operation::Multiplication => first * second,
        }
    }
}

/// A single math problem, immutable once generated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Unique within the generator that produced it
    pub id: u64,
    pub operation: Operation,
    pub first_operand: u32,
    pub second_operand: u32,
    pub correct_answer: u32,
    /// Difficulty at generation time
    pub difficulty: DifficultyLevel,
    /// Seconds allowed, copied from `difficulty` at creation
    pub time_limit_secs: f32,
    /// Wrong-answer choices (deduplicated, never the correct answer)
    pub distractors: Vec<u32>,
    /// Unix timestamp (ms) when generated
    pub created_at_ms: f64,
}

impl Problem {
    /// Display form, e.g. "7 + 5 = ?"
    pub fn display(&self) -> String {
        format!(
            "{} {} {} = ?",
            self.first_operand,
            self.operation.symbol(),
            self.second_operand
        )
    }

    /// Points this problem is worth
    pub fn points(&self) -> u32 {
        self.difficulty.points()
    }
}

/// One answered problem, as reported by the host app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceObservation {
    pub problem_id: u64,
    /// Operation kind, carried so accuracy can be bucketed per operation
    pub operation: Operation,
    pub correct: bool,
    /// Seconds from presentation to answer
    pub response_secs: f32,
    pub hints_used: u32,
    /// Unix timestamp (ms) when answered
    pub timestamp_ms: f64,
}

impl PerformanceObservation {
    pub fn new(problem: &Problem, correct: bool, response_secs: f32, hints_used: u32) -> Self {
        Self {
            problem_id: problem.id,
            operation: problem.operation,
            correct,
            response_secs,
            hints_used,
            timestamp_ms: crate::now_ms(),
        }
    }
}
