//! Math Dash demo entry point
//!
//! Runs a simulated player through a session so the adaptive loop can be
//! watched from a terminal: problems out, answers in, difficulty following.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use math_dash::Session;

/// Problems the simulated player answers
const SESSION_LENGTH: usize = 40;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xDA54);
    log::info!("Session initialized with seed: {}", seed);

    let mut session = Session::new(seed);
    // Separate stream for the player model so it never perturbs generation
    let mut player_rng = Pcg32::seed_from_u64(seed ^ 0x5EED);

    for turn in 1..=SESSION_LENGTH {
        let problem = session.next_problem();

        // Player model: accuracy and speed degrade as difficulty rises
        let level = problem.difficulty.value() as f32;
        let p_correct = (1.05 - 0.08 * level).clamp(0.2, 0.98);
        let correct = player_rng.random_range(0.0..1.0) < p_correct;
        let response_secs =
            player_rng.random_range(0.8..2.5) + 0.4 * level + if correct { 0.0 } else { 2.0 };

        let adjustment = session.submit(&problem, correct, response_secs, 0);
        println!(
            "#{turn:02} L{} {:<12} {} ({:.1}s) -> {:?}",
            problem.difficulty.value(),
            problem.display(),
            if correct { "correct" } else { "wrong" },
            response_secs,
            adjustment.change,
        );
        for suggestion in &adjustment.suggestions {
            println!("     suggest: {:?}", suggestion);
        }
    }

    let summary = session.engine().generate_session_summary();
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("\n{json}"),
        Err(e) => log::error!("Failed to serialize summary: {e}"),
    }
}
