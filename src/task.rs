//! Graduated discrimination task used by the demo driver and tests.
//!
//! The agent sees one of a pair of mood percepts per trial and must answer
//! with `+` for the positive percept and `-` for the negative one. New
//! percept pairs are introduced in stages, so earlier associations keep
//! paying off while new ones are learned.

use std::collections::VecDeque;

use rand::Rng;

use crate::agent::percept::Clip;

/// The action rewarded for positive percepts.
pub const APPROVE: &str = "+";
/// The action rewarded for negative percepts.
pub const REJECT: &str = "-";

/// Percepts answered correctly with [`APPROVE`].
pub const GOOD_PERCEPTS: [&str; 3] = ["happy", "good", ":)"];
/// Percepts answered correctly with [`REJECT`].
pub const BAD_PERCEPTS: [&str; 3] = ["sad", "bad", ":("];

/// A staged two-alternative forced-choice task over mood percepts.
#[derive(Clone, Debug)]
pub struct MoodTask {
    trials_per_stage: usize,
    trial: usize,
}

impl MoodTask {
    /// Creates a task that advances to the next percept pair every
    /// `trials_per_stage` trials.
    #[must_use]
    pub fn new(trials_per_stage: usize) -> Self {
        assert!(trials_per_stage > 0, "stages need at least one trial");
        Self {
            trials_per_stage,
            trial: 0,
        }
    }

    /// Number of percept-pair stages.
    #[must_use]
    pub const fn stage_count() -> usize {
        GOOD_PERCEPTS.len()
    }

    /// The current stage index, capped at the final stage.
    #[must_use]
    pub fn stage(&self) -> usize {
        (self.trial / self.trials_per_stage).min(Self::stage_count() - 1)
    }

    /// Trials presented so far.
    #[must_use]
    pub fn trial(&self) -> usize {
        self.trial
    }

    /// True once every stage has run its course.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.trial >= self.trials_per_stage * Self::stage_count()
    }

    /// Draws the next percept from the current stage's pair.
    pub fn sample_percept(&mut self, rng: &mut impl Rng) -> Clip {
        let stage = self.stage();
        self.trial += 1;
        let label = if rng.random_range(0..2) == 0 {
            GOOD_PERCEPTS[stage]
        } else {
            BAD_PERCEPTS[stage]
        };
        Clip::symbol(label)
    }

    /// Scores an answer: 1.0 for the matching action, 0.0 otherwise.
    #[must_use]
    pub fn grade(&self, percept: &Clip, action: &str) -> f64 {
        let positive = GOOD_PERCEPTS
            .iter()
            .any(|label| *percept == Clip::symbol(label));
        let correct = if positive { APPROVE } else { REJECT };
        if action == correct {
            1.0
        } else {
            0.0
        }
    }
}

/// Fixed-window hit rate over recent trials.
#[derive(Clone, Debug)]
pub struct RollingAccuracy {
    window: usize,
    hits: VecDeque<bool>,
}

impl RollingAccuracy {
    #[must_use]
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "accuracy window must be non-empty");
        Self {
            window,
            hits: VecDeque::with_capacity(window),
        }
    }

    /// Records one trial outcome, evicting the oldest once the window fills.
    pub fn push(&mut self, hit: bool) {
        if self.hits.len() == self.window {
            self.hits.pop_front();
        }
        self.hits.push_back(hit);
    }

    /// Fraction of hits in the window, or 0.0 before any trial.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.hits.is_empty() {
            return 0.0;
        }
        let hits = self.hits.iter().filter(|hit| **hit).count();
        hits as f64 / self.hits.len() as f64
    }

    /// Trials currently inside the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
