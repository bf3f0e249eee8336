//! The entity store: movies in the pool and the players who own them.

pub mod defaults;
pub mod logic;
pub mod types;

pub use defaults::*;
pub use logic::*;
pub use types::*;
