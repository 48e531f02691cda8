//! The clip graph store: index maps plus weighted relation matrices.
//!
//! Owns the bijective clip/action index maps and the two weight matrices
//! (clip-to-clip and clip-to-action) together with the per-edge emotion tags.
//! Memory only grows: clips and actions are added on first sight and never
//! removed, and indices are never reused.

use std::collections::HashMap;

use crate::agent::memory::matrix::Matrix;
use crate::agent::percept::Clip;

/// Baseline every weight decays toward, and the initial weight of new edges.
pub const BASELINE_WEIGHT: f64 = 1.0;

/// Associative memory over clips and actions.
#[derive(Clone, Debug)]
pub struct ClipGraph {
    clip_ids: HashMap<Clip, usize>,
    clips: Vec<Clip>,
    action_ids: HashMap<String, usize>,
    actions: Vec<String>,
    /// N x N clip-to-clip weights; diagonal fixed at 0 (no self-loops).
    clip_weights: Matrix<f64>,
    /// N x M clip-to-action weights.
    action_weights: Matrix<f64>,
    /// N x M emotion tags; at most one `true` per row.
    action_tags: Matrix<bool>,
}

impl ClipGraph {
    /// Creates an empty graph seeded with the given action labels.
    #[must_use]
    pub fn new<S: AsRef<str>>(initial_actions: &[S]) -> Self {
        let mut graph = Self {
            clip_ids: HashMap::new(),
            clips: Vec::new(),
            action_ids: HashMap::new(),
            actions: Vec::new(),
            clip_weights: Matrix::new(0, 0, BASELINE_WEIGHT),
            action_weights: Matrix::new(0, 0, BASELINE_WEIGHT),
            action_tags: Matrix::new(0, 0, false),
        };
        for action in initial_actions {
            graph.ensure_action(action.as_ref());
        }
        graph
    }

    /// Returns the index for `clip`, growing the memory on first sight.
    ///
    /// Growth appends one row and one column of baseline weight to the
    /// clip-to-clip matrix (the new diagonal cell stays 0), one baseline row
    /// to the clip-to-action weights, and an untagged row to the tags. All
    /// existing cells are preserved.
    pub fn ensure_clip(&mut self, clip: &Clip) -> usize {
        if let Some(&index) = self.clip_ids.get(clip) {
            return index;
        }
        let index = self.clips.len();
        self.clip_ids.insert(clip.clone(), index);
        self.clips.push(clip.clone());

        self.clip_weights.push_col(BASELINE_WEIGHT);
        self.clip_weights.push_row(BASELINE_WEIGHT);
        self.clip_weights.set(index, index, 0.0);

        self.action_weights.push_row(BASELINE_WEIGHT);
        self.action_tags.push_row(false);
        index
    }

    /// Returns the index for `action`, growing the memory on first sight.
    ///
    /// Growth appends one baseline column to the clip-to-action weights and
    /// an untagged column to the tags, preserving all existing cells.
    pub fn ensure_action(&mut self, action: &str) -> usize {
        if let Some(&index) = self.action_ids.get(action) {
            return index;
        }
        let index = self.actions.len();
        self.action_ids.insert(action.to_string(), index);
        self.actions.push(action.to_string());

        self.action_weights.push_col(BASELINE_WEIGHT);
        self.action_tags.push_col(false);
        index
    }

    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Looks up a clip's index without growing the memory.
    #[must_use]
    pub fn clip_index(&self, clip: &Clip) -> Option<usize> {
        self.clip_ids.get(clip).copied()
    }

    /// Looks up an action's index without growing the memory.
    #[must_use]
    pub fn action_index(&self, action: &str) -> Option<usize> {
        self.action_ids.get(action).copied()
    }

    /// Returns the clip stored at `index`. Panics if out of range.
    #[must_use]
    pub fn clip(&self, index: usize) -> &Clip {
        &self.clips[index]
    }

    /// Returns the action label stored at `index`. Panics if out of range.
    #[must_use]
    pub fn action_label(&self, index: usize) -> &str {
        &self.actions[index]
    }

    #[must_use]
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    #[must_use]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Clip-to-clip weight row for `clip_index`. Panics if out of range.
    #[must_use]
    pub fn clip_row(&self, clip_index: usize) -> &[f64] {
        self.clip_weights.row(clip_index)
    }

    /// Clip-to-action weight row for `clip_index`. Panics if out of range.
    #[must_use]
    pub fn action_row(&self, clip_index: usize) -> &[f64] {
        self.action_weights.row(clip_index)
    }

    /// Emotion tag on the clip -> action edge. Panics if out of range.
    #[must_use]
    pub fn action_tag(&self, clip_index: usize, action_index: usize) -> bool {
        self.action_tags.get(clip_index, action_index)
    }

    /// Overwrites one clip-to-clip weight. Panics if out of range.
    pub fn set_clip_weight(&mut self, from: usize, to: usize, weight: f64) {
        self.clip_weights.set(from, to, weight);
    }

    /// Overwrites one clip-to-action weight. Panics if out of range.
    pub fn set_action_weight(&mut self, clip: usize, action: usize, weight: f64) {
        self.action_weights.set(clip, action, weight);
    }

    /// Sets or clears one emotion tag. Panics if out of range.
    pub fn set_action_tag(&mut self, clip: usize, action: usize, tagged: bool) {
        self.action_tags.set(clip, action, tagged);
    }

    /// Adds `delta` to a clip-to-clip weight, clamping at zero so negative
    /// rewards cannot drive weights below the structural floor.
    pub fn reinforce_clip(&mut self, from: usize, to: usize, delta: f64) {
        let weight = (self.clip_weights.get(from, to) + delta).max(0.0);
        self.clip_weights.set(from, to, weight);
    }

    /// Adds `delta` to a clip-to-action weight, clamping at zero.
    pub fn reinforce_action(&mut self, clip: usize, action: usize, delta: f64) {
        let weight = (self.action_weights.get(clip, action) + delta).max(0.0);
        self.action_weights.set(clip, action, weight);
    }

    /// Records a step outcome on a clip's tag row.
    ///
    /// A positive outcome leaves exactly the chosen action tagged; a
    /// non-positive outcome leaves the row untagged.
    pub fn record_outcome(&mut self, clip: usize, action: usize, positive: bool) {
        for a in 0..self.action_count() {
            self.action_tags.set(clip, a, false);
        }
        if positive {
            self.action_tags.set(clip, action, positive);
        }
    }

    /// Pulls every weight toward [`BASELINE_WEIGHT`] by `rate`:
    /// `w <- w - rate * (w - 1)`.
    ///
    /// Each matrix decays from its own prior values, and the clip-to-clip
    /// diagonal is skipped so self-loops stay at zero.
    pub fn decay_weights(&mut self, rate: f64) {
        if rate == 0.0 {
            return;
        }
        let n = self.clip_count();
        for from in 0..n {
            for to in 0..n {
                if from == to {
                    continue;
                }
                let w = self.clip_weights.get(from, to);
                self.clip_weights.set(from, to, w - rate * (w - BASELINE_WEIGHT));
            }
        }
        for clip in 0..n {
            for action in 0..self.action_count() {
                let w = self.action_weights.get(clip, action);
                self.action_weights
                    .set(clip, action, w - rate * (w - BASELINE_WEIGHT));
            }
        }
    }
}
