//! Performance analysis and difficulty recommendation
//!
//! `DifficultyEngine` accumulates answered-problem observations and answers
//! three questions: how is the player doing (metrics), what should happen to
//! difficulty next (recommendation), and how did the session go (summary).
//! It never mutates difficulty itself; the caller applies recommendations.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::problem::{Operation, PerformanceObservation};
use crate::consts::*;

/// Direction the windowed accuracy is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceTrend {
    Improving,
    Declining,
    Stable,
    Fluctuating,
}

/// Snapshot of the player's recent performance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Mean response time over the analysis window
    pub average_response_secs: f32,
    /// Fraction correct over the analysis window
    pub accuracy: f32,
    /// Consecutive correct answers ending at the most recent observation
    pub current_streak: u32,
    /// Longest run of consecutive correct answers on record
    pub longest_streak: u32,
    pub trend: PerformanceTrend,
    /// (operation, accuracy) for every operation with at least one attempt
    pub per_operation_accuracy: Vec<(Operation, f32)>,
    /// Operations under [`STRUGGLE_ACCURACY`] with enough attempts
    pub struggling_areas: Vec<Operation>,
    /// Operations at or above [`MASTERY_ACCURACY`] with enough attempts
    pub mastered_areas: Vec<Operation>,
}

/// Recommended change to the difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyChange {
    Increase(u8),
    Decrease(u8),
    Maintain,
    /// Gentle single-step increase for players already near the top
    AdaptiveIncrease,
    /// Gentle single-step decrease driven by a declining trend
    AdaptiveDecrease,
}

impl DifficultyChange {
    /// Signed level delta for the caller to apply
    pub fn delta(&self) -> i32 {
        match self {
            DifficultyChange::Increase(n) => *n as i32,
            DifficultyChange::Decrease(n) => -(*n as i32),
            DifficultyChange::Maintain => 0,
            DifficultyChange::AdaptiveIncrease => 1,
            DifficultyChange::AdaptiveDecrease => -1,
        }
    }
}

/// Qualitative nudges the host app can surface to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HelpSuggestion {
    ShowHint,
    Simplify,
    PracticeOperation(Operation),
    SlowDown,
    Encouragement,
    BreakTime,
}

/// One recommendation, recomputed fresh on every call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyAdjustment {
    pub change: DifficultyChange,
    /// Confidence in [0, 1]
    pub confidence: f32,
    pub reason: String,
    /// Deduplicated, in the order the rules fired
    pub suggestions: Vec<HelpSuggestion>,
}

/// End-of-session report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_problems: usize,
    pub correct_count: usize,
    pub accuracy: f32,
    pub average_response_secs: f32,
    pub hints_used: u32,
    pub achievements: Vec<String>,
    pub areas_for_improvement: Vec<Operation>,
    /// Unix timestamp (ms) when the session started
    pub started_at_ms: f64,
}

/// Accumulates observations and recommends difficulty adjustments.
///
/// Pure accumulate-then-query: construction and
/// [`start_new_session`](Self::start_new_session) are the only lifecycle
/// events. One instance per player session; all calls are synchronous.
#[derive(Debug, Clone)]
pub struct DifficultyEngine {
    /// Rolling history, most recent [`HISTORY_CAP`] observations (FIFO)
    history: VecDeque<PerformanceObservation>,
    /// Everything since the last `start_new_session`, unbounded
    session: Vec<PerformanceObservation>,
    session_start_ms: f64,
}

impl Default for DifficultyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultyEngine {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(HISTORY_CAP),
            session: Vec::new(),
            session_start_ms: crate::now_ms(),
        }
    }

    /// Append an observation to the rolling history and the session list
    pub fn record_performance(&mut self, observation: PerformanceObservation) {
        self.session.push(observation.clone());
        self.history.push_back(observation);
        if self.history.len() > HISTORY_CAP {
            self.history.pop_front();
        }
    }

    /// Clear the session list and restart the session clock.
    /// The rolling history is untouched.
    pub fn start_new_session(&mut self) {
        self.session.clear();
        self.session_start_ms = crate::now_ms();
    }

    /// Metrics over the most recent [`ANALYSIS_WINDOW`] observations
    /// (streaks and per-operation accuracy use the full history)
    pub fn analyze_performance(&self) -> PerformanceMetrics {
        let window: Vec<&PerformanceObservation> = self.analysis_window();
        let (accuracy, average_response_secs) = accuracy_and_mean_response(&window);
        let (current_streak, longest_streak) = streaks(self.history.iter());

        let stats = operation_stats(self.history.iter());
        PerformanceMetrics {
            average_response_secs,
            accuracy,
            current_streak,
            longest_streak,
            trend: classify_trend(&window),
            per_operation_accuracy: stats
                .iter()
                .filter(|s| s.attempts > 0)
                .map(|s| (s.operation, s.accuracy()))
                .collect(),
            struggling_areas: struggling(&stats),
            mastered_areas: mastered(&stats),
        }
    }

    /// Recommend what should happen to the given difficulty level.
    ///
    /// With fewer than [`MIN_OBSERVATIONS`] on record this returns a
    /// low-confidence maintain rather than an error.
    pub fn recommend_difficulty_adjustment(&self, current_difficulty: i32) -> DifficultyAdjustment {
        if self.history.len() < MIN_OBSERVATIONS {
            return DifficultyAdjustment {
                change: DifficultyChange::Maintain,
                confidence: 0.3,
                reason: "insufficient data".to_string(),
                suggestions: Vec::new(),
            };
        }

        let metrics = self.analyze_performance();
        let accuracy = metrics.accuracy;
        let response = metrics.average_response_secs;
        let mut suggestions: Vec<HelpSuggestion> = Vec::new();

        let (mut change, confidence, mut reason) = if accuracy >= HIGH_ACCURACY
            && response <= FAST_RESPONSE_SECS
            && metrics.current_streak >= STREAK_FOR_INCREASE
        {
            let change = if current_difficulty >= 8 {
                DifficultyChange::AdaptiveIncrease
            } else {
                DifficultyChange::Increase(1)
            };
            (change, 0.9, "high accuracy and fast responses".to_string())
        } else if accuracy <= LOW_ACCURACY || response >= SLOW_RESPONSE_SECS {
            if response >= SLOW_RESPONSE_SECS {
                suggestions.push(HelpSuggestion::SlowDown);
            }
            if current_difficulty > 1 {
                (
                    DifficultyChange::Decrease(1),
                    0.8,
                    "struggling at current level".to_string(),
                )
            } else {
                suggestions.push(HelpSuggestion::ShowHint);
                suggestions.push(HelpSuggestion::SlowDown);
                (
                    DifficultyChange::Maintain,
                    0.8,
                    "struggling at the lowest level".to_string(),
                )
            }
        } else if accuracy >= TARGET_ACCURACY && response <= TARGET_RESPONSE_SECS {
            (
                DifficultyChange::Maintain,
                0.7,
                "performing within the target band".to_string(),
            )
        } else {
            match metrics.trend {
                PerformanceTrend::Improving => (
                    DifficultyChange::AdaptiveIncrease,
                    0.6,
                    "mixed signals but improving".to_string(),
                ),
                PerformanceTrend::Declining => {
                    suggestions.push(HelpSuggestion::Encouragement);
                    (
                        DifficultyChange::AdaptiveDecrease,
                        0.6,
                        "mixed signals and declining".to_string(),
                    )
                }
                PerformanceTrend::Fluctuating => {
                    if let Some(weakest) = weakest_operation(&operation_stats(self.history.iter()))
                    {
                        suggestions.push(HelpSuggestion::PracticeOperation(weakest));
                    }
                    (
                        DifficultyChange::Maintain,
                        0.4,
                        "inconsistent results".to_string(),
                    )
                }
                PerformanceTrend::Stable => (
                    DifficultyChange::Maintain,
                    0.8,
                    "stable performance".to_string(),
                ),
            }
        };

        for op in &metrics.struggling_areas {
            suggestions.push(HelpSuggestion::PracticeOperation(*op));
        }

        // Never push difficulty up on a fatigued player
        if self.is_fatigued() {
            suggestions.push(HelpSuggestion::BreakTime);
            if change == DifficultyChange::Increase(1) {
                change = DifficultyChange::Maintain;
                reason = "fatigue detected, holding difficulty".to_string();
            }
        }

        dedup_suggestions(&mut suggestions);

        log::debug!(
            "Recommendation at level {}: {:?} (confidence {:.1}, {})",
            current_difficulty,
            change,
            confidence,
            reason
        );

        DifficultyAdjustment {
            change,
            confidence,
            reason,
            suggestions,
        }
    }

    /// Summarize the session-scoped observations
    pub fn generate_session_summary(&self) -> SessionSummary {
        let total = self.session.len();
        let correct = self.session.iter().filter(|o| o.correct).count();
        let accuracy = if total > 0 {
            correct as f32 / total as f32
        } else {
            0.0
        };
        let average_response_secs = if total > 0 {
            self.session.iter().map(|o| o.response_secs).sum::<f32>() / total as f32
        } else {
            0.0
        };
        let hints_used = self.session.iter().map(|o| o.hints_used).sum();
        let (current_streak, _) = streaks(self.session.iter());

        let mut achievements = Vec::new();
        if correct >= 10 {
            achievements.push("Problem Solver".to_string());
        }
        if total > 0 && accuracy >= 0.9 {
            achievements.push("Math Master".to_string());
        }
        if current_streak >= 5 {
            achievements.push("Hot Streak".to_string());
        }
        if total > 0 && average_response_secs <= FAST_RESPONSE_SECS && accuracy >= 0.8 {
            achievements.push("Speed Demon".to_string());
        }

        SessionSummary {
            total_problems: total,
            correct_count: correct,
            accuracy,
            average_response_secs,
            hints_used,
            achievements,
            areas_for_improvement: struggling(&operation_stats(self.session.iter())),
            started_at_ms: self.session_start_ms,
        }
    }

    fn analysis_window(&self) -> Vec<&PerformanceObservation> {
        let start = self.history.len().saturating_sub(ANALYSIS_WINDOW);
        self.history.iter().skip(start).collect()
    }

    /// Recent responses dragging well past the windowed average
    fn is_fatigued(&self) -> bool {
        if self.history.len() < FATIGUE_WINDOW {
            return false;
        }
        let window = self.analysis_window();
        let (_, window_mean) = accuracy_and_mean_response(&window);
        let recent_mean = self
            .history
            .iter()
            .rev()
            .take(FATIGUE_WINDOW)
            .map(|o| o.response_secs)
            .sum::<f32>()
            / FATIGUE_WINDOW as f32;
        window_mean > 0.0 && recent_mean > FATIGUE_RATIO * window_mean
    }
}

/// Attempt/correct tally for one operation
#[derive(Debug, Clone, Copy)]
struct OperationStats {
    operation: Operation,
    attempts: usize,
    correct: usize,
}

impl OperationStats {
    fn accuracy(&self) -> f32 {
        if self.attempts == 0 {
            0.0
        } else {
            self.correct as f32 / self.attempts as f32
        }
    }
}

fn operation_stats<'a>(
    observations: impl Iterator<Item = &'a PerformanceObservation>,
) -> [OperationStats; 3] {
    let mut stats = Operation::ALL.map(|operation| OperationStats {
        operation,
        attempts: 0,
        correct: 0,
    });
    for obs in observations {
        let slot = &mut stats[Operation::ALL
            .iter()
            .position(|op| *op == obs.operation)
            .unwrap_or(0)];
        slot.attempts += 1;
        if obs.correct {
            slot.correct += 1;
        }
    }
    stats
}

fn struggling(stats: &[OperationStats; 3]) -> Vec<Operation> {
    stats
        .iter()
        .filter(|s| s.attempts >= STRUGGLE_MIN_ATTEMPTS && s.accuracy() < STRUGGLE_ACCURACY)
        .map(|s| s.operation)
        .collect()
}

fn mastered(stats: &[OperationStats; 3]) -> Vec<Operation> {
    stats
        .iter()
        .filter(|s| s.attempts >= MASTERY_MIN_ATTEMPTS && s.accuracy() >= MASTERY_ACCURACY)
        .map(|s| s.operation)
        .collect()
}

/// Lowest-accuracy operation among those actually attempted
fn weakest_operation(stats: &[OperationStats; 3]) -> Option<Operation> {
    stats
        .iter()
        .filter(|s| s.attempts > 0)
        .min_by(|a, b| {
            a.accuracy()
                .partial_cmp(&b.accuracy())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|s| s.operation)
}

fn accuracy_and_mean_response(window: &[&PerformanceObservation]) -> (f32, f32) {
    if window.is_empty() {
        return (0.0, 0.0);
    }
    let correct = window.iter().filter(|o| o.correct).count();
    let mean = window.iter().map(|o| o.response_secs).sum::<f32>() / window.len() as f32;
    (correct as f32 / window.len() as f32, mean)
}

/// (current streak ending at the latest observation, longest streak on record)
fn streaks<'a>(observations: impl Iterator<Item = &'a PerformanceObservation>) -> (u32, u32) {
    let mut run = 0u32;
    let mut longest = 0u32;
    for obs in observations {
        if obs.correct {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    (run, longest)
}

/// First/second half accuracy comparison over the window.
/// Anything not improving, declining, or stable is fluctuating - including
/// the 0.05-0.1 gap between the thresholds.
fn classify_trend(window: &[&PerformanceObservation]) -> PerformanceTrend {
    if window.len() < 2 {
        return PerformanceTrend::Stable;
    }
    let mid = window.len() / 2;
    let (first_accuracy, _) = accuracy_and_mean_response(&window[..mid]);
    let (second_accuracy, _) = accuracy_and_mean_response(&window[mid..]);
    let diff = second_accuracy - first_accuracy;

    if diff > 0.1 {
        PerformanceTrend::Improving
    } else if diff < -0.1 {
        PerformanceTrend::Declining
    } else if diff.abs() <= 0.05 {
        PerformanceTrend::Stable
    } else {
        PerformanceTrend::Fluctuating
    }
}

/// Keep the first occurrence of each suggestion (set semantics, stable order)
fn dedup_suggestions(suggestions: &mut Vec<HelpSuggestion>) {
    let mut seen: Vec<HelpSuggestion> = Vec::with_capacity(suggestions.len());
    suggestions.retain(|s| {
        if seen.contains(s) {
            false
        } else {
            seen.push(*s);
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(operation: Operation, correct: bool, response_secs: f32) -> PerformanceObservation {
        PerformanceObservation {
            problem_id: 0,
            operation,
            correct,
            response_secs,
            hints_used: 0,
            timestamp_ms: 0.0,
        }
    }

    fn engine_with(observations: Vec<PerformanceObservation>) -> DifficultyEngine {
        let mut engine = DifficultyEngine::new();
        for obs in observations {
            engine.record_performance(obs);
        }
        engine
    }

    #[test]
    fn test_insufficient_data() {
        let engine = engine_with(vec![
            observation(Operation::Addition, true, 2.0);
            4
        ]);
        let adjustment = engine.recommend_difficulty_adjustment(3);
        assert_eq!(adjustment.change, DifficultyChange::Maintain);
        assert_eq!(adjustment.confidence, 0.3);
        assert_eq!(adjustment.reason, "insufficient data");
    }

    #[test]
    fn test_fast_and_accurate_increases() {
        let engine = engine_with(vec![
            observation(Operation::Addition, true, 2.0);
            5
        ]);
        let adjustment = engine.recommend_difficulty_adjustment(3);
        assert_eq!(adjustment.change, DifficultyChange::Increase(1));
        assert_eq!(adjustment.confidence, 0.9);
    }

    #[test]
    fn test_adaptive_increase_near_the_top() {
        let engine = engine_with(vec![
            observation(Operation::Multiplication, true, 1.5);
            8
        ]);
        let adjustment = engine.recommend_difficulty_adjustment(8);
        assert_eq!(adjustment.change, DifficultyChange::AdaptiveIncrease);
    }

    #[test]
    fn test_struggling_at_floor_suggests_help() {
        let engine = engine_with(vec![
            observation(Operation::Addition, false, 9.0);
            5
        ]);
        let adjustment = engine.recommend_difficulty_adjustment(1);
        assert_eq!(adjustment.change, DifficultyChange::Maintain);
        assert!(adjustment.suggestions.contains(&HelpSuggestion::ShowHint));
        assert!(adjustment.suggestions.contains(&HelpSuggestion::SlowDown));
        // Dedup: SlowDown pushed by both the slow-response rule and the floor rule
        let slow_downs = adjustment
            .suggestions
            .iter()
            .filter(|s| **s == HelpSuggestion::SlowDown)
            .count();
        assert_eq!(slow_downs, 1);
    }

    #[test]
    fn test_struggling_above_floor_decreases() {
        let engine = engine_with(vec![
            observation(Operation::Addition, false, 9.0);
            5
        ]);
        let adjustment = engine.recommend_difficulty_adjustment(4);
        assert_eq!(adjustment.change, DifficultyChange::Decrease(1));
        assert_eq!(adjustment.confidence, 0.8);
        // Slow responses carry the slow-down suggestion into this branch too
        assert!(adjustment.suggestions.contains(&HelpSuggestion::SlowDown));
    }

    #[test]
    fn test_target_band_maintains() {
        let mut observations = vec![observation(Operation::Addition, true, 4.0); 8];
        observations.push(observation(Operation::Addition, false, 4.0));
        observations.push(observation(Operation::Addition, false, 4.0));
        // 0.8 accuracy at 4s: inside the target band, below the increase bar
        let engine = engine_with(observations);
        let adjustment = engine.recommend_difficulty_adjustment(5);
        assert_eq!(adjustment.change, DifficultyChange::Maintain);
        assert_eq!(adjustment.confidence, 0.7);
    }

    #[test]
    fn test_trend_improving() {
        let mut observations = vec![observation(Operation::Addition, false, 5.0); 5];
        observations.extend(vec![observation(Operation::Addition, true, 5.0); 5]);
        let engine = engine_with(observations);
        let metrics = engine.analyze_performance();
        assert_eq!(metrics.trend, PerformanceTrend::Improving);
        assert_eq!(metrics.current_streak, 5);
        assert_eq!(metrics.longest_streak, 5);
    }

    #[test]
    fn test_trend_declining_recommends_adaptive_decrease() {
        // 7 correct then 3 wrong: 0.7 accuracy at 6s is a mixed signal
        // (neither the increase, decrease, nor target-band rules fire) and
        // the halves read 1.0 vs 0.4, a declining trend.
        let mut observations = vec![observation(Operation::Addition, true, 6.0); 7];
        observations.extend(vec![observation(Operation::Addition, false, 6.0); 3]);
        let engine = engine_with(observations);
        assert_eq!(engine.analyze_performance().trend, PerformanceTrend::Declining);
        let adjustment = engine.recommend_difficulty_adjustment(5);
        assert_eq!(adjustment.change, DifficultyChange::AdaptiveDecrease);
        assert_eq!(adjustment.confidence, 0.6);
        assert!(adjustment.suggestions.contains(&HelpSuggestion::Encouragement));
    }

    #[test]
    fn test_trend_dead_zone_falls_to_fluctuating() {
        // 7 observations split 3/4: first-half accuracy 2/3, second 3/4.
        // The 0.083 difference sits between the stable and improving
        // thresholds and must land on fluctuating.
        let observations = vec![
            observation(Operation::Addition, true, 6.0),
            observation(Operation::Subtraction, false, 6.0),
            observation(Operation::Addition, true, 6.0),
            observation(Operation::Addition, true, 6.0),
            observation(Operation::Subtraction, false, 6.0),
            observation(Operation::Addition, true, 6.0),
            observation(Operation::Addition, true, 6.0),
        ];
        let engine = engine_with(observations);
        let metrics = engine.analyze_performance();
        assert_eq!(metrics.trend, PerformanceTrend::Fluctuating);

        // Mixed signal (0.71 accuracy, 6s responses) dispatches on the trend
        // and recommends practicing the weakest operation.
        let adjustment = engine.recommend_difficulty_adjustment(5);
        assert_eq!(adjustment.change, DifficultyChange::Maintain);
        assert_eq!(adjustment.confidence, 0.4);
        assert!(adjustment
            .suggestions
            .contains(&HelpSuggestion::PracticeOperation(Operation::Subtraction)));
    }

    #[test]
    fn test_trend_stable() {
        let engine = engine_with(vec![
            observation(Operation::Addition, true, 6.0);
            10
        ]);
        assert_eq!(engine.analyze_performance().trend, PerformanceTrend::Stable);
    }

    #[test]
    fn test_fatigue_downgrades_increase() {
        // All correct; early responses quick, last five slow enough to push
        // the recent mean past 1.5x the windowed mean while the windowed mean
        // stays under the fast-response bar.
        let mut observations = vec![observation(Operation::Addition, true, 0.5); 15];
        observations.extend(vec![observation(Operation::Addition, true, 4.0); 5]);
        let engine = engine_with(observations);

        let adjustment = engine.recommend_difficulty_adjustment(3);
        assert_eq!(adjustment.change, DifficultyChange::Maintain);
        assert!(adjustment.suggestions.contains(&HelpSuggestion::BreakTime));
    }

    #[test]
    fn test_fatigue_leaves_other_changes_alone() {
        // Same fatigue shape but struggling: the decrease stands
        let mut observations = vec![observation(Operation::Addition, false, 2.0); 15];
        observations.extend(vec![observation(Operation::Addition, false, 9.0); 5]);
        let engine = engine_with(observations);
        let adjustment = engine.recommend_difficulty_adjustment(4);
        assert_eq!(adjustment.change, DifficultyChange::Decrease(1));
        assert!(adjustment.suggestions.contains(&HelpSuggestion::BreakTime));
    }

    #[test]
    fn test_history_cap() {
        let mut engine = DifficultyEngine::new();
        for _ in 0..120 {
            engine.record_performance(observation(Operation::Addition, true, 1.0));
        }
        assert_eq!(engine.analyze_performance().longest_streak, 100);
    }

    #[test]
    fn test_struggling_and_mastered_areas() {
        let mut observations = Vec::new();
        // 24/25 addition: mastered
        for i in 0..25 {
            observations.push(observation(Operation::Addition, i != 0, 3.0));
        }
        // 4/12 subtraction: struggling
        for i in 0..12 {
            observations.push(observation(Operation::Subtraction, i < 4, 3.0));
        }
        let engine = engine_with(observations);
        let metrics = engine.analyze_performance();
        assert!(metrics.mastered_areas.contains(&Operation::Addition));
        assert!(metrics.struggling_areas.contains(&Operation::Subtraction));
        assert!(!metrics.struggling_areas.contains(&Operation::Multiplication));

        // Struggling areas surface as practice suggestions
        let adjustment = engine.recommend_difficulty_adjustment(3);
        assert!(adjustment
            .suggestions
            .contains(&HelpSuggestion::PracticeOperation(Operation::Subtraction)));
    }

    #[test]
    fn test_session_summary_achievements() {
        let engine = engine_with(vec![
            observation(Operation::Addition, true, 2.0);
            12
        ]);
        let summary = engine.generate_session_summary();
        assert_eq!(summary.total_problems, 12);
        assert_eq!(summary.correct_count, 12);
        assert!(summary.achievements.contains(&"Problem Solver".to_string()));
        assert!(summary.achievements.contains(&"Math Master".to_string()));
        assert!(summary.achievements.contains(&"Hot Streak".to_string()));
        assert!(summary.achievements.contains(&"Speed Demon".to_string()));
        assert!(summary.areas_for_improvement.is_empty());
    }

    #[test]
    fn test_new_session_keeps_history() {
        let mut engine = engine_with(vec![
            observation(Operation::Addition, true, 2.0);
            8
        ]);
        engine.start_new_session();

        let summary = engine.generate_session_summary();
        assert_eq!(summary.total_problems, 0);
        assert!(summary.achievements.is_empty());

        // Rolling history survives, so recommendations still have data
        let adjustment = engine.recommend_difficulty_adjustment(3);
        assert_ne!(adjustment.reason, "insufficient data");
    }

    #[test]
    fn test_empty_engine_metrics() {
        let engine = DifficultyEngine::new();
        let metrics = engine.analyze_performance();
        assert_eq!(metrics.accuracy, 0.0);
        assert_eq!(metrics.current_streak, 0);
        assert!(metrics.per_operation_accuracy.is_empty());
    }

    #[test]
    fn test_change_delta() {
        assert_eq!(DifficultyChange::Increase(2).delta(), 2);
        assert_eq!(DifficultyChange::Decrease(1).delta(), -1);
        assert_eq!(DifficultyChange::Maintain.delta(), 0);
        assert_eq!(DifficultyChange::AdaptiveIncrease.delta(), 1);
        assert_eq!(DifficultyChange::AdaptiveDecrease.delta(), -1);
    }
}
