//! Weight-to-probability conversion and sampling.

use rand::Rng;

use crate::agent::config::ProbabilityPolicy;

/// Converts a row of non-negative weights into a probability distribution.
///
/// The traditional policy normalizes by the row sum. An all-zero row is
/// degenerate (division by zero); it falls back to the uniform distribution
/// so a walk can always continue. An empty row is a programming error.
#[must_use]
pub fn distribution(policy: ProbabilityPolicy, weights: &[f64]) -> Vec<f64> {
    assert!(!weights.is_empty(), "cannot normalize an empty weight row");
    match policy {
        ProbabilityPolicy::Traditional => {
            let total: f64 = weights.iter().sum();
            if total <= 0.0 {
                let uniform = 1.0 / weights.len() as f64;
                return vec![uniform; weights.len()];
            }
            weights.iter().map(|w| w / total).collect()
        }
        // Rejected by AgentConfig::validate before an agent exists.
        ProbabilityPolicy::Softmax => unreachable!("softmax policy is rejected at configuration"),
    }
}

/// Draws one index from the distribution induced by `weights`.
pub fn sample(policy: ProbabilityPolicy, weights: &[f64], rng: &mut impl Rng) -> usize {
    let probabilities = distribution(policy, weights);
    let roll: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (index, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if roll < cumulative {
            return index;
        }
    }
    // Floating-point shortfall: the cumulative sum can land just under 1.0.
    probabilities.len() - 1
}
