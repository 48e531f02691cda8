//! The agent core: memory, decision making, learning, and the facade.

pub mod config;
pub mod error;
pub mod journal;
pub mod learning;
pub mod memory;
pub mod percept;
pub mod policy;
pub mod ps;
pub mod walk;

pub use config::{AgentConfig, GlowMode, ProbabilityPolicy};
pub use error::AgentError;
pub use journal::DecisionJournal;
pub use memory::ClipGraph;
pub use percept::{Clip, Feature};
pub use ps::PsAgent;
pub use walk::Walk;
