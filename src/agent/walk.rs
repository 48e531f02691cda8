//! Deliberation and reflection: the random-walk decision state machine.
//!
//! A decision starts at the observed percept's clip. With no deliberation and
//! no reflection the first sampled action is final. Otherwise the agent may
//! walk `deliberation` clip-to-clip hops before picking an action, and with
//! `reflection > 0` it may discard an unpromising pick (no emotion tag) and
//! re-walk from the starting clip, up to the attempt budget.

use rand::Rng;

use crate::agent::config::{AgentConfig, ProbabilityPolicy};
use crate::agent::memory::ClipGraph;
use crate::agent::policy;

/// The outcome of one decision: clips visited in order, then the action.
///
/// Held by the agent as the pending path until the next observation's reward
/// arrives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    /// Clip indices visited, starting clip first.
    pub clips: Vec<usize>,
    /// The chosen action's index.
    pub action: usize,
}

impl Walk {
    /// Full path as index sequence: clips visited, then the action index.
    #[must_use]
    pub fn path(&self) -> Vec<usize> {
        let mut path = self.clips.clone();
        path.push(self.action);
        path
    }

    /// Path length including the action element. A walk always holds at
    /// least the starting clip and an action, so this is never below 2.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.clips.len() + 1
    }
}

/// Runs the deliberation/reflection state machine over a clip graph.
#[derive(Clone, Copy, Debug)]
pub struct DecisionEngine {
    deliberation: u32,
    reflection: u32,
    emotion_sensitive: bool,
    policy: ProbabilityPolicy,
}

impl DecisionEngine {
    #[must_use]
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            deliberation: config.deliberation,
            reflection: config.reflection,
            emotion_sensitive: config.emotion_sensitive,
            policy: config.policy,
        }
    }

    /// Decides an action starting from `start`.
    ///
    /// Panics if `start` is out of range or no actions are registered; both
    /// are caller bugs, not runtime conditions.
    pub fn decide(&self, graph: &ClipGraph, start: usize, rng: &mut impl Rng) -> Walk {
        assert!(start < graph.clip_count(), "start clip out of range");
        assert!(
            graph.action_count() > 0,
            "decision requested with no actions registered"
        );

        // First pick at the starting clip.
        let first = policy::sample(self.policy, graph.action_row(start), rng);
        if self.deliberation == 0 && self.reflection == 0 {
            // Immediate accept: no walk, no retry, tag ignored.
            return Walk {
                clips: vec![start],
                action: first,
            };
        }
        if self.accepts(graph, start, first) {
            return Walk {
                clips: vec![start],
                action: first,
            };
        }

        // Retry walks from the original starting clip with a fresh hop budget.
        // With reflection == 0 a single walk is still owed.
        let attempts = self.reflection.max(1);
        for attempt in 1..=attempts {
            let mut clips = vec![start];
            let mut current = start;
            for _ in 0..self.deliberation {
                current = policy::sample(self.policy, graph.clip_row(current), rng);
                clips.push(current);
            }
            let action = policy::sample(self.policy, graph.action_row(current), rng);
            if attempt == attempts || self.accepts(graph, current, action) {
                return Walk { clips, action };
            }
        }
        unreachable!("the final attempt always accepts")
    }

    fn accepts(&self, graph: &ClipGraph, clip: usize, action: usize) -> bool {
        self.emotion_sensitive && graph.action_tag(clip, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::percept::Clip;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine(deliberation: u32, reflection: u32) -> DecisionEngine {
        DecisionEngine::new(&AgentConfig {
            deliberation,
            reflection,
            ..AgentConfig::default()
        })
    }

    fn graph_with_clips(n: usize) -> ClipGraph {
        let mut graph = ClipGraph::new(&["+", "-"]);
        for i in 0..n {
            graph.ensure_clip(&Clip::from(vec![i as i64]));
        }
        graph
    }

    #[test]
    fn test_immediate_accept_path_is_two() {
        let graph = graph_with_clips(3);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let walk = engine(0, 0).decide(&graph, 1, &mut rng);
            assert_eq!(walk.clips, vec![1]);
            assert_eq!(walk.len(), 2);
        }
    }

    #[test]
    fn test_single_walk_hop_count() {
        let graph = graph_with_clips(4);
        let mut rng = StdRng::seed_from_u64(2);
        let walk = engine(3, 0).decide(&graph, 0, &mut rng);
        // Starting clip plus exactly three hops, then the action.
        assert_eq!(walk.clips.len(), 4);
        assert_eq!(walk.clips[0], 0);
        assert_eq!(walk.len(), 5);
    }

    #[test]
    fn test_tagged_action_accepted_without_walk() {
        let mut graph = graph_with_clips(3);
        // Force the first pick at clip 0 to be action 1, and tag it.
        graph.set_action_weight(0, 0, 0.0);
        graph.record_outcome(0, 1, true);

        let mut rng = StdRng::seed_from_u64(3);
        let walk = engine(2, 3).decide(&graph, 0, &mut rng);
        assert_eq!(walk.clips, vec![0]);
        assert_eq!(walk.action, 1);
    }

    #[test]
    fn test_untagged_single_walk_discards_first_pick() {
        let graph = graph_with_clips(3);
        let mut rng = StdRng::seed_from_u64(4);
        // No tags anywhere: deliberation > 0 forces exactly one walk.
        let walk = engine(2, 0).decide(&graph, 0, &mut rng);
        assert_eq!(walk.clips.len(), 3);
    }

    #[test]
    fn test_path_bound_holds() {
        let graph = graph_with_clips(5);
        let mut rng = StdRng::seed_from_u64(5);
        for (d, r) in [(0, 0), (1, 0), (0, 2), (2, 3), (4, 1)] {
            let bound = (r as usize + 1) * (d as usize + 1) + 1;
            for _ in 0..40 {
                let walk = engine(d, r).decide(&graph, 0, &mut rng);
                assert!(walk.len() <= bound, "d={d} r={r} len={}", walk.len());
            }
        }
    }

    #[test]
    fn test_reflection_zero_hops_resamples_at_start() {
        let graph = graph_with_clips(2);
        let mut rng = StdRng::seed_from_u64(6);
        // deliberation 0 with reflection: every attempt stays at the start.
        let walk = engine(0, 4).decide(&graph, 1, &mut rng);
        assert_eq!(walk.clips, vec![1]);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let graph = graph_with_clips(4);
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..25 {
            assert_eq!(
                engine(2, 2).decide(&graph, 0, &mut a),
                engine(2, 2).decide(&graph, 0, &mut b)
            );
        }
    }

    #[test]
    #[should_panic(expected = "no actions registered")]
    fn test_no_actions_is_a_bug() {
        let mut graph = ClipGraph::new::<&str>(&[]);
        graph.ensure_clip(&Clip::symbol("lonely"));
        let mut rng = StdRng::seed_from_u64(0);
        let _ = engine(0, 0).decide(&graph, 0, &mut rng);
    }
}
