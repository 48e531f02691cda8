//! Percept features and clips.
//!
//! A clip is the agent's memory unit for one observed percept: an ordered,
//! immutable tuple of feature values. Clips are identified by value, so two
//! separately constructed clips with equal contents name the same memory.

use std::fmt;

/// A single scalar component of a percept.
///
/// Percepts in the driving tasks are labels (`"happy"`) or small integer
/// tuples; floats are excluded so clips stay hashable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// A categorical label, e.g. a stimulus name.
    Symbol(String),
    /// A discrete measurement, e.g. a size step.
    Value(i64),
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) => write!(f, "{s}"),
            Self::Value(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Feature {
    fn from(s: &str) -> Self {
        Self::Symbol(s.to_string())
    }
}

impl From<i64> for Feature {
    fn from(v: i64) -> Self {
        Self::Value(v)
    }
}

/// An ordered, immutable tuple of percept features.
///
/// Created the first time a percept is observed; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clip(Vec<Feature>);

impl Clip {
    /// Creates a clip from an ordered list of features.
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self(features)
    }

    /// Creates a single-label clip, the common case in the discrimination tasks.
    #[must_use]
    pub fn symbol(label: &str) -> Self {
        Self(vec![Feature::Symbol(label.to_string())])
    }

    /// An empty clip. Observing one is a no-op at the agent boundary.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the features in order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, feature) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{feature}")?;
        }
        write!(f, ")")
    }
}

impl From<&str> for Clip {
    fn from(label: &str) -> Self {
        Self::symbol(label)
    }
}

impl From<Vec<i64>> for Clip {
    fn from(values: Vec<i64>) -> Self {
        Self(values.into_iter().map(Feature::Value).collect())
    }
}
