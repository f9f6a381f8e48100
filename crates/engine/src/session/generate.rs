//! Round generation strategies: the per-game content tables.

use rand::rng;
use rand::seq::SliceRandom;

use kidplay_core::model::{AnswerRule, Candidate, RoundSpec};

/// Strategy producing the content of each round. One implementation per
/// family of mini-games; concrete games differ only in their tables.
pub trait RoundGenerator: Send + Sync {
    fn generate(&self, index: u32) -> RoundSpec;
}

/// Sample an option set that always contains the correct candidate.
///
/// Decoys never duplicate the correct id, and the final shuffle keeps the
/// correct candidate's position unbiased. `option_count` is a target; the
/// set is smaller when the pool runs short.
#[must_use]
pub fn sample_options(
    correct: Candidate,
    decoy_pool: &[Candidate],
    option_count: usize,
) -> Vec<Candidate> {
    let mut rng = rng();

    let mut options: Vec<Candidate> = decoy_pool
        .iter()
        .filter(|c| c.id() != correct.id())
        .cloned()
        .collect();
    options.shuffle(&mut rng);
    options.truncate(option_count.saturating_sub(1));

    options.push(correct);
    options.shuffle(&mut rng);
    options
}

//
// ─── FIXED ROUNDS ──────────────────────────────────────────────────────────────
//

/// Generator over a pre-built list of rounds, repeating from the top if
/// asked past the end. Used by scripted games and tests.
pub struct FixedRounds {
    rounds: Vec<RoundSpec>,
}

impl FixedRounds {
    /// # Panics
    ///
    /// Panics if `rounds` is empty.
    #[must_use]
    pub fn new(rounds: Vec<RoundSpec>) -> Self {
        assert!(!rounds.is_empty(), "FixedRounds requires at least one round");
        Self { rounds }
    }
}

impl RoundGenerator for FixedRounds {
    fn generate(&self, index: u32) -> RoundSpec {
        self.rounds[index as usize % self.rounds.len()].clone()
    }
}

//
// ─── MATCH TABLE ───────────────────────────────────────────────────────────────
//

/// The generalized matching mini-game as a content table: a target list,
/// a decoy pool, an option count, and a prompt template with a `{}`
/// placeholder for the target's label.
///
/// Round `i` targets `targets[i % targets.len()]` and samples decoys
/// around it, so a game is its table rather than its own state machine.
pub struct MatchTable {
    targets: Vec<Candidate>,
    pool: Vec<Candidate>,
    option_count: usize,
    prompt_template: String,
}

impl MatchTable {
    /// # Panics
    ///
    /// Panics if `targets` is empty.
    #[must_use]
    pub fn new(
        targets: Vec<Candidate>,
        pool: Vec<Candidate>,
        option_count: usize,
        prompt_template: impl Into<String>,
    ) -> Self {
        assert!(!targets.is_empty(), "MatchTable requires at least one target");
        Self {
            targets,
            pool,
            option_count,
            prompt_template: prompt_template.into(),
        }
    }
}

impl RoundGenerator for MatchTable {
    fn generate(&self, index: u32) -> RoundSpec {
        let target = &self.targets[index as usize % self.targets.len()];
        let candidates = sample_options(target.clone(), &self.pool, self.option_count);
        RoundSpec {
            prompt: self.prompt_template.replace("{}", target.label()),
            candidates,
            rule: AnswerRule::Exact(target.id()),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
