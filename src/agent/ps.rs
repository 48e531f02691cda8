//! The agent facade: one `observe_environment` step function.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::config::AgentConfig;
use crate::agent::error::AgentError;
use crate::agent::journal::DecisionJournal;
use crate::agent::learning::LearningRule;
use crate::agent::memory::ClipGraph;
use crate::agent::percept::Clip;
use crate::agent::policy;
use crate::agent::walk::{DecisionEngine, Walk};

/// A Projective Simulation agent.
///
/// Owns the clip graph, the decision engine, the learning rule, the RNG, and
/// the pending path from the most recent decision. Single-threaded by design:
/// one driver calls [`PsAgent::observe_environment`] once per tick and feeds
/// the resulting reward into the next call.
#[derive(Debug)]
pub struct PsAgent {
    config: AgentConfig,
    graph: ClipGraph,
    engine: DecisionEngine,
    learning: LearningRule,
    pending: Option<Walk>,
    journal: Option<DecisionJournal>,
    rng: StdRng,
}

impl PsAgent {
    /// Builds an agent, validating the configuration up front.
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let graph = ClipGraph::new(&config.actions);
        let engine = DecisionEngine::new(&config);
        let learning = LearningRule::new(&config);
        Ok(Self {
            config,
            graph,
            engine,
            learning,
            pending: None,
            journal: None,
            rng,
        })
    }

    /// One interaction step: ingest a percept, reward the previous decision,
    /// decide and return the next action's label.
    ///
    /// An empty percept is a no-op: a warning is logged, nothing is mutated,
    /// and `Ok(None)` is returned. A non-finite reward is rejected at this
    /// boundary before it can reach the tensors.
    pub fn observe_environment(
        &mut self,
        percept: &Clip,
        reward: f64,
    ) -> Result<Option<String>, AgentError> {
        if percept.is_empty() {
            tracing::warn!("no observations were given to the agent");
            return Ok(None);
        }
        if !reward.is_finite() {
            return Err(AgentError::InvalidReward(reward));
        }

        let percept_index = self.graph.ensure_clip(percept);

        // Reward the previous walk, if one is pending.
        if let Some(walk) = self.pending.take() {
            self.learning.reward_walk(&mut self.graph, &walk, reward);
        }

        let walk = self.engine.decide(&self.graph, percept_index, &mut self.rng);
        let action = self.graph.action_label(walk.action).to_string();

        if let Some(journal) = &mut self.journal {
            journal.record(&self.graph, percept, &action, &walk)?;
        }

        self.pending = Some(walk);
        Ok(Some(action))
    }

    /// Pre-seeds a clip into memory, returning its index.
    pub fn add_clip(&mut self, percept: &Clip) -> usize {
        self.graph.ensure_clip(percept)
    }

    /// Registers an action label, returning its index.
    pub fn add_action(&mut self, label: &str) -> usize {
        self.graph.ensure_action(label)
    }

    /// The probability of each action given `percept`, in action-index order.
    ///
    /// Returns `None` for percepts the agent has never seen.
    #[must_use]
    pub fn action_probabilities(&self, percept: &Clip) -> Option<Vec<f64>> {
        let index = self.graph.clip_index(percept)?;
        Some(policy::distribution(
            self.config.policy,
            self.graph.action_row(index),
        ))
    }

    /// Attaches a diagnostic journal; every accepted decision is appended.
    pub fn attach_journal(&mut self, journal: DecisionJournal) {
        self.journal = Some(journal);
    }

    /// Truncates the attached journal, if any.
    pub fn clear_journal(&mut self) -> Result<(), AgentError> {
        if let Some(journal) = &mut self.journal {
            journal.clear()?;
        }
        Ok(())
    }

    /// Read-only view of the clip memory.
    #[must_use]
    pub fn graph(&self) -> &ClipGraph {
        &self.graph
    }

    /// The walk pending reward, if a decision has been made since the last
    /// update.
    #[must_use]
    pub fn last_walk(&self) -> Option<&Walk> {
        self.pending.as_ref()
    }

    /// The configuration the agent was built with.
    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}
