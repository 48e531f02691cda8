//! Dashboard widgets for the demo binary.

pub mod render;

pub use render::{draw_ui, probability_bar, DashboardState};
