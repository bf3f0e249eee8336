//! Utility modules: JSON persistence and id generation.

pub mod ids;
pub mod persistence;

pub use ids::*;
