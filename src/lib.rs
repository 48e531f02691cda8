#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]

//! Projective Simulation (PS) agent.
//!
//! The agent keeps an associative memory of *clips* (observed percepts) and
//! actions, connected by a dynamically growing weighted graph. Decisions are
//! made by a randomized multi-hop walk over that graph; observed rewards feed
//! back into the edge weights, with decay toward a neutral baseline and
//! partial credit for intermediate hops.

pub mod agent;
pub mod task;
pub mod ui;

pub use agent::{AgentConfig, AgentError, Clip, Feature, PsAgent};
