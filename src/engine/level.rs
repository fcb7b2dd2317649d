//! Difficulty level derivation table
//!
//! A level is a clamped integer 1-10; every gameplay parameter is a pure
//! function of it. A new value is constructed whenever difficulty changes -
//! there is no mutable state here.

use serde::{Deserialize, Serialize};

/// A difficulty level in [1, 10], clamped on construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DifficultyLevel(u8);

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl DifficultyLevel {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    /// Construct a level, clamping out-of-range input instead of rejecting it
    pub fn new(level: i32) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX) as u8)
    }

    /// The raw level value (1-10)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// A new level offset by `delta`, clamped to [1, 10]
    pub fn step(&self, delta: i32) -> Self {
        Self::new(self.0 as i32 + delta)
    }

    /// Largest first operand the generator may produce at this level
    pub fn max_first_operand(&self) -> u32 {
        match self.0 {
            1 => 5,
            2 => 10,
            3 => 15,
            4 => 20,
            5 => 25,
            6 => 50,
            7 => 75,
            8 => 100,
            9 => 150,
            _ => 200,
        }
    }

    /// Largest second operand the generator may produce at this level
    pub fn max_second_operand(&self) -> u32 {
        match self.0 {
            1 => 3,
            2 => 5,
            3 => 8,
            4 => 10,
            5 => 12,
            6 => 15,
            7 => 20,
            8 => 25,
            9 => 30,
            _ => 50,
        }
    }

    /// Seconds the player gets to answer
    pub fn time_limit_secs(&self) -> f32 {
        match self.0 {
            1 | 2 => 15.0,
            3 | 4 => 12.0,
            5 | 6 => 10.0,
            7 | 8 => 8.0,
            _ => 6.0,
        }
    }

    /// Wrong-answer choices shown alongside the correct one
    pub fn distractor_count(&self) -> usize {
        match self.0 {
            1..=3 => 2,
            4..=6 => 3,
            _ => 4,
        }
    }

    /// Points awarded for a correct answer at this level
    pub fn points(&self) -> u32 {
        self.0 as u32 * 10
    }

    /// Recommended player age range
    pub fn age_range(&self) -> &'static str {
        match self.0 {
            1 | 2 => "4-6",
            3 | 4 => "6-8",
            5 | 6 => "8-10",
            7 | 8 => "10-12",
            _ => "12+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_construction() {
        assert_eq!(DifficultyLevel::new(0).value(), 1);
        assert_eq!(DifficultyLevel::new(-7).value(), 1);
        assert_eq!(DifficultyLevel::new(11).value(), 10);
        assert_eq!(DifficultyLevel::new(100).value(), 10);
        assert_eq!(DifficultyLevel::new(4).value(), 4);
    }

    #[test]
    fn test_step_clamps() {
        let lvl = DifficultyLevel::new(10);
        assert_eq!(lvl.step(1).value(), 10);
        let lvl = DifficultyLevel::new(1);
        assert_eq!(lvl.step(-1).value(), 1);
        assert_eq!(lvl.step(3).value(), 4);
    }

    #[test]
    fn test_table_rows() {
        let rows: [(i32, u32, u32, f32, usize); 10] = [
            (1, 5, 3, 15.0, 2),
            (2, 10, 5, 15.0, 2),
            (3, 15, 8, 12.0, 2),
            (4, 20, 10, 12.0, 3),
            (5, 25, 12, 10.0, 3),
            (6, 50, 15, 10.0, 3),
            (7, 75, 20, 8.0, 4),
            (8, 100, 25, 8.0, 4),
            (9, 150, 30, 6.0, 4),
            (10, 200, 50, 6.0, 4),
        ];
        for (level, max_first, max_second, time, distractors) in rows {
            let lvl = DifficultyLevel::new(level);
            assert_eq!(lvl.max_first_operand(), max_first, "level {level}");
            assert_eq!(lvl.max_second_operand(), max_second, "level {level}");
            assert_eq!(lvl.time_limit_secs(), time, "level {level}");
            assert_eq!(lvl.distractor_count(), distractors, "level {level}");
            assert_eq!(lvl.points(), level as u32 * 10, "level {level}");
        }
    }

    #[test]
    fn test_monotonicity() {
        for l in 2..=10 {
            let lo = DifficultyLevel::new(l - 1);
            let hi = DifficultyLevel::new(l);
            assert!(hi.max_first_operand() >= lo.max_first_operand());
            assert!(hi.max_second_operand() >= lo.max_second_operand());
            assert!(hi.distractor_count() >= lo.distractor_count());
            assert!(hi.points() > lo.points());
            assert!(hi.time_limit_secs() <= lo.time_limit_secs());
        }
    }
}
