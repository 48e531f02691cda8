//! Agent hyperparameters.

use crate::agent::error::AgentError;

/// Default weight decay toward the neutral baseline (forgetting disabled).
pub const DEFAULT_DECAY_RATE: f64 = 0.0;
/// Default associative growth factor for indirect (multi-hop) credit.
pub const DEFAULT_GROWTH_K: f64 = 0.2;

/// How a weight row is turned into a probability distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbabilityPolicy {
    /// `p_i = w_i / sum(w)`, the canonical PS policy.
    Traditional,
    /// `p_i = exp(w_i) / sum(exp(w))`. Design slot only; rejected by
    /// [`AgentConfig::validate`].
    Softmax,
}

/// Eligibility-trace variant for credit assignment.
///
/// Only `None` has behavior; the glow variants are reserved extension slots
/// and are rejected at construction rather than silently no-oping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowMode {
    /// No eligibility trace.
    None,
    /// Glow on every edge of a rewarded walk.
    EdgeGlow,
    /// Glow on the start and end clips of a rewarded walk.
    ClipGlow,
}

/// Construction-time configuration for a [`crate::agent::PsAgent`].
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Accept an action early when its emotion tag is set.
    pub emotion_sensitive: bool,
    /// Weight-to-probability policy, applied uniformly to clip and action rows.
    pub policy: ProbabilityPolicy,
    /// Eligibility-trace variant. Must be `GlowMode::None`.
    pub glow: GlowMode,
    /// Maximum retry attempts per decision.
    pub reflection: u32,
    /// Clip-to-clip hops per attempt.
    pub deliberation: u32,
    /// Per-update pull of every weight toward 1.0, in `[0, 1]`.
    pub decay_rate: f64,
    /// Fractional credit for intermediate edges of a multi-hop walk.
    pub growth_k: f64,
    /// Action labels seeded at construction. More can be added later.
    pub actions: Vec<String>,
    /// RNG seed for deterministic replay. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            emotion_sensitive: true,
            policy: ProbabilityPolicy::Traditional,
            glow: GlowMode::None,
            reflection: 0,
            deliberation: 0,
            decay_rate: DEFAULT_DECAY_RATE,
            growth_k: DEFAULT_GROWTH_K,
            actions: Vec::new(),
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Checks the configuration, rejecting unimplemented variants up front.
    pub fn validate(&self) -> Result<(), AgentError> {
        if self.policy == ProbabilityPolicy::Softmax {
            return Err(AgentError::UnimplementedPolicy("softmax policy"));
        }
        match self.glow {
            GlowMode::None => {}
            GlowMode::EdgeGlow => return Err(AgentError::UnimplementedPolicy("edge glow")),
            GlowMode::ClipGlow => return Err(AgentError::UnimplementedPolicy("clip glow")),
        }
        if !self.decay_rate.is_finite() || !(0.0..=1.0).contains(&self.decay_rate) {
            return Err(AgentError::InvalidConfig(format!(
                "decay_rate must be in [0, 1], got {}",
                self.decay_rate
            )));
        }
        if !self.growth_k.is_finite() || self.growth_k < 0.0 {
            return Err(AgentError::InvalidConfig(format!(
                "growth_k must be finite and non-negative, got {}",
                self.growth_k
            )));
        }
        Ok(())
    }
}
