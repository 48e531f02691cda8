//! Clip memory: the growable matrix and the graph store built on it.

pub mod graph;
pub mod matrix;

pub use graph::ClipGraph;
pub use matrix::Matrix;
