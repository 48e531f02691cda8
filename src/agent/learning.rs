//! Reward-driven weight updates.
//!
//! Direct reinforcement rewards the edge from the clip immediately preceding
//! the chosen action; indirect reinforcement gives partial credit (scaled by
//! the associative growth factor `k`) to every hop of a multi-hop walk.
//! Every update first decays all weights toward the neutral baseline.

use crate::agent::config::AgentConfig;
use crate::agent::memory::ClipGraph;
use crate::agent::walk::Walk;

/// Applies reward and decay to the clip graph after each step.
#[derive(Clone, Copy, Debug)]
pub struct LearningRule {
    decay_rate: f64,
    growth_k: f64,
}

impl LearningRule {
    #[must_use]
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            decay_rate: config.decay_rate,
            growth_k: config.growth_k,
        }
    }

    /// Rewards the previous walk.
    pub fn reward_walk(&self, graph: &mut ClipGraph, walk: &Walk, reward: f64) {
        self.update(graph, &walk.clips, walk.action, reward);
    }

    /// Updates weights for a path of visited clips and the chosen action.
    ///
    /// Decay runs unconditionally, before reinforcement. An empty path with a
    /// valid action is legal (the very first decision has no history) and
    /// results in decay only.
    pub fn update(&self, graph: &mut ClipGraph, clips: &[usize], action: usize, reward: f64) {
        graph.decay_weights(self.decay_rate);

        let Some(&first) = clips.first() else {
            return;
        };

        // Direct credit on the percept -> action edge.
        graph.reinforce_action(first, action, reward);
        graph.record_outcome(first, action, reward > 0.0);

        // Indirect credit along the walk, scaled by k. Self-hops (possible
        // under the uniform fallback in a single-clip graph) carry no credit,
        // so the clip-clip diagonal stays at zero.
        if clips.len() > 1 {
            for hop in clips.windows(2) {
                if hop[0] != hop[1] {
                    graph.reinforce_clip(hop[0], hop[1], self.growth_k * reward);
                }
            }
            let last = *clips.last().unwrap_or(&first);
            graph.reinforce_action(last, action, self.growth_k * reward);
            graph.record_outcome(last, action, reward > 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::percept::Clip;

    fn rule(decay_rate: f64, growth_k: f64) -> LearningRule {
        LearningRule::new(&AgentConfig {
            decay_rate,
            growth_k,
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
    fn test_direct_reinforcement() {
        let mut graph = graph_with_clips(1);
        rule(0.0, 0.2).update(&mut graph, &[0], 0, 1.0);

        assert!((graph.action_row(0)[0] - 2.0).abs() < 1e-12);
        assert!((graph.action_row(0)[1] - 1.0).abs() < 1e-12);
        assert!(graph.action_tag(0, 0));
        assert!(!graph.action_tag(0, 1));
    }

    #[test]
    fn test_non_positive_reward_clears_tags() {
        let mut graph = graph_with_clips(1);
        rule(0.0, 0.2).update(&mut graph, &[0], 0, 1.0);
        assert!(graph.action_tag(0, 0));

        rule(0.0, 0.2).update(&mut graph, &[0], 1, 0.0);
        assert!(!graph.action_tag(0, 0));
        assert!(!graph.action_tag(0, 1));
    }

    #[test]
    fn test_indirect_reinforcement_scaled_by_k() {
        let mut graph = graph_with_clips(3);
        // Walk 0 -> 2 -> 1, then action 0.
        rule(0.0, 0.5).update(&mut graph, &[0, 2, 1], 0, 1.0);

        // Hop edges get k * reward on top of the baseline.
        assert!((graph.clip_row(0)[2] - 1.5).abs() < 1e-12);
        assert!((graph.clip_row(2)[1] - 1.5).abs() < 1e-12);
        // Direct edge gets the full reward; the walk's landing clip gets k.
        assert!((graph.action_row(0)[0] - 2.0).abs() < 1e-12);
        assert!((graph.action_row(1)[0] - 1.5).abs() < 1e-12);
        // Both visited rows end up tagged on the rewarded action.
        assert!(graph.action_tag(0, 0));
        assert!(graph.action_tag(1, 0));
    }

    #[test]
    fn test_self_hop_earns_no_indirect_credit() {
        let mut graph = graph_with_clips(1);
        // A single-clip graph can only walk onto itself.
        rule(0.0, 0.5).update(&mut graph, &[0, 0], 0, 1.0);

        assert!(graph.clip_row(0)[0].abs() < 1e-12);
        // Direct and landing credit still land on the action edge.
        assert!((graph.action_row(0)[0] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_path_decays_only() {
        let mut graph = graph_with_clips(2);
        graph.set_action_weight(0, 0, 3.0);

        rule(0.5, 0.2).update(&mut graph, &[], 0, 1.0);

        assert!((graph.action_row(0)[0] - 2.0).abs() < 1e-12);
        assert!(!graph.action_tag(0, 0));
    }

    #[test]
    fn test_decay_monotone_toward_baseline() {
        let mut graph = graph_with_clips(2);
        graph.set_action_weight(0, 0, 5.0);
        graph.set_clip_weight(1, 0, 0.2);

        let rule = rule(0.3, 0.2);
        let mut above = 5.0;
        let mut below = 0.2;
        for _ in 0..60 {
            rule.update(&mut graph, &[], 0, 0.0);
            let a = graph.action_row(0)[0];
            let b = graph.clip_row(1)[0];
            assert!(a < above && a >= 1.0);
            assert!(b > below && b <= 1.0);
            above = a;
            below = b;
        }
        assert!((above - 1.0).abs() < 1e-6);
        assert!((below - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_reward_cannot_underflow() {
        let mut graph = graph_with_clips(2);
        let rule = rule(0.0, 1.0);
        for _ in 0..5 {
            rule.update(&mut graph, &[0, 1], 0, -10.0);
        }
        assert!(graph.action_row(0)[0] >= 0.0);
        assert!(graph.clip_row(0)[1] >= 0.0);
    }
}
