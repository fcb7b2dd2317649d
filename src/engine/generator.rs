//! Problem generation
//!
//! One `ProblemGenerator` per player session. Fully deterministic for a given
//! seed: same seed, same difficulty changes, same problem sequence.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::level::DifficultyLevel;
use super::problem::{Operation, PerformanceObservation, Problem};
use crate::consts::*;

/// Generates one problem at a time at the current difficulty, avoiding
/// recently-seen operand pairs.
///
/// The generator carries its own lightweight difficulty self-adjustment in
/// [`record_result`](Self::record_result) for hosts that embed it alone.
/// When paired with a [`DifficultyEngine`](super::DifficultyEngine) (see
/// [`Session`](crate::Session)), the engine is the authority and hosts should
/// drive difficulty through [`set_difficulty`](Self::set_difficulty) only.
#[derive(Debug, Clone)]
pub struct ProblemGenerator {
    seed: u64,
    rng: Pcg32,
    difficulty: DifficultyLevel,
    /// Operand-pair keys of the last few problems (FIFO)
    recent_pairs: VecDeque<String>,
    /// Short performance window for self-adjustment (FIFO)
    window: VecDeque<PerformanceObservation>,
    next_id: u64,
}

impl ProblemGenerator {
    /// Create a generator at level 1 with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty: DifficultyLevel::default(),
            recent_pairs: VecDeque::with_capacity(RECENT_PROBLEM_CAP),
            window: VecDeque::with_capacity(GENERATOR_WINDOW_CAP),
            next_id: 1,
        }
    }

    /// Current difficulty
    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    /// Replace the current difficulty (clamped to 1-10)
    pub fn set_difficulty(&mut self, level: i32) {
        self.difficulty = DifficultyLevel::new(level);
    }

    /// Clear all history and return to level 1, replaying the original seed
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.difficulty = DifficultyLevel::default();
        self.recent_pairs.clear();
        self.window.clear();
        self.next_id = 1;
    }

    /// Generate one problem at the current difficulty
    pub fn generate_problem(&mut self) -> Problem {
        let operation = self.pick_operation();

        // Retry for an operand pair not seen recently; accept the last roll
        // once the retry budget is spent.
        let mut pair = self.roll_operands(operation);
        for _ in 1..OPERAND_RETRY_CAP {
            if !self.recent_pairs.contains(&pair_key(operation, pair)) {
                break;
            }
            pair = self.roll_operands(operation);
        }
        let (first, second) = pair;
        let correct_answer = operation.apply(first, second);

        let count = self.difficulty.distractor_count();
        let distractors = self.roll_distractors(operation, second, correct_answer, count);

        self.recent_pairs.push_back(pair_key(operation, pair));
        if self.recent_pairs.len() > RECENT_PROBLEM_CAP {
            self.recent_pairs.pop_front();
        }

        let id = self.next_id;
        self.next_id += 1;

        Problem {
            id,
            operation,
            first_operand: first,
            second_operand: second,
            correct_answer,
            difficulty: self.difficulty,
            time_limit_secs: self.difficulty.time_limit_secs(),
            distractors,
            created_at_ms: crate::now_ms(),
        }
    }

    /// Generate `count` problems, each independently
    pub fn generate_problems(&mut self, count: usize) -> Vec<Problem> {
        (0..count).map(|_| self.generate_problem()).collect()
    }

    /// Feed back an answered problem and self-adjust difficulty.
    ///
    /// Once at least 5 results are present, the most recent 5 decide:
    /// accuracy >= 0.8 and responses within 70% of the time limit move the
    /// level up; accuracy < 0.5 or responses over the limit move it down.
    pub fn record_result(&mut self, observation: &PerformanceObservation) {
        self.window.push_back(observation.clone());
        if self.window.len() > GENERATOR_WINDOW_CAP {
            self.window.pop_front();
        }
        if self.window.len() < MIN_OBSERVATIONS {
            return;
        }

        let recent: Vec<&PerformanceObservation> =
            self.window.iter().rev().take(MIN_OBSERVATIONS).collect();
        let correct = recent.iter().filter(|o| o.correct).count();
        let accuracy = correct as f32 / recent.len() as f32;
        let avg_response: f32 =
            recent.iter().map(|o| o.response_secs).sum::<f32>() / recent.len() as f32;
        let limit = self.difficulty.time_limit_secs();

        let old = self.difficulty;
        if accuracy >= 0.8 && avg_response <= 0.7 * limit {
            self.difficulty = self.difficulty.step(1);
        } else if accuracy < 0.5 || avg_response > limit {
            self.difficulty = self.difficulty.step(-1);
        }
        if self.difficulty != old {
            log::debug!(
                "Generator self-adjusted difficulty {} -> {} (accuracy {:.2}, avg response {:.1}s)",
                old.value(),
                self.difficulty.value(),
                accuracy,
                avg_response
            );
        }
    }

    /// Weighted draw among operations eligible at the current level
    fn pick_operation(&mut self) -> Operation {
        let level = self.difficulty.value();
        let eligible: Vec<Operation> = Operation::ALL
            .iter()
            .copied()
            .filter(|op| op.min_level() <= level)
            .collect();

        let total: f32 = eligible.iter().map(|op| op.weight()).sum();
        let draw = self.rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for op in &eligible {
            cumulative += op.weight();
            if draw < cumulative {
                return *op;
            }
        }
        // Float fallthrough
        Operation::Addition
    }

    /// Roll an operand pair within the current difficulty bounds
    fn roll_operands(&mut self, operation: Operation) -> (u32, u32) {
        let max_first = self.difficulty.max_first_operand();
        let max_second = self.difficulty.max_second_operand();
        match operation {
            Operation::Addition => (
                self.rng.random_range(1..=max_first),
                self.rng.random_range(1..=max_second),
            ),
            Operation::Subtraction => {
                // Second operand never exceeds the first, so answers stay >= 0
                let first = self.rng.random_range(1..=max_first);
                let second = self.rng.random_range(1..=first.min(max_second));
                (first, second)
            }
            Operation::Multiplication => (
                // Products stay tractable regardless of the level's maxima
                self.rng.random_range(1..=max_first.min(12)),
                self.rng.random_range(1..=max_second.min(10)),
            ),
        }
    }

    /// Build `count` unique wrong answers around the correct one
    fn roll_distractors(
        &mut self,
        operation: Operation,
        second: u32,
        answer: u32,
        count: usize,
    ) -> Vec<u32> {
        let mut out: Vec<u32> = Vec::with_capacity(count);

        // First pass: plausible-mistake offsets for the operation
        let mut attempts = 0;
        while out.len() < count && attempts < count * 10 {
            attempts += 1;
            let candidate = self.plausible_mistake(operation, second, answer);
            if candidate != answer && !out.contains(&candidate) {
                out.push(candidate);
            }
        }

        // Second pass: small uniform offsets
        let mut attempts = 0;
        while out.len() < count && attempts < 50 {
            attempts += 1;
            let candidate = offset_answer(answer, self.rng.random_range(-5i64..=5));
            if candidate != answer && !out.contains(&candidate) {
                out.push(candidate);
            }
        }

        // Deterministic sweep in case the random fill stalled
        let mut delta = 1i64;
        while out.len() < count {
            for candidate in [offset_answer(answer, delta), offset_answer(answer, -delta)] {
                if out.len() < count && candidate != answer && !out.contains(&candidate) {
                    out.push(candidate);
                }
            }
            delta += 1;
        }

        out
    }

    /// One plausible wrong answer for the operation (clamped to >= 0)
    fn plausible_mistake(&mut self, operation: Operation, second: u32, answer: u32) -> u32 {
        let a = answer as i64;
        let s = second as i64;
        let candidates: [i64; 6] = match operation {
            // Off-by-one/two slips and dropped/extra carries
            Operation::Addition => [a + 1, a - 1, a + 2, a - 2, a + 10, a - 10],
            // Off-by-one/two slips, or adding back the subtrahend
            Operation::Subtraction => [a + 1, a - 1, a + 2, a - 2, a + s, a + 2 * s],
            // Off-by-one-row mistakes, halving and doubling
            Operation::Multiplication => [a + s, a - s, a / 2, a * 2, a + 1, a - 1],
        };
        let pick = candidates[self.rng.random_range(0..candidates.len())];
        pick.max(0) as u32
    }
}

fn pair_key(operation: Operation, (first, second): (u32, u32)) -> String {
    format!("{}{}{}", first, operation.symbol(), second)
}

fn offset_answer(answer: u32, delta: i64) -> u32 {
    (answer as i64 + delta).max(0) as u32
}
