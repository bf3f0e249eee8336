//! Movie Roulette - weighted movie picker with a coin economy
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod catalog;
pub mod core;
pub mod error;
pub mod roster;
pub mod selection;
pub mod store;
pub mod utils;

pub use crate::core::config::Config;
pub use error::{CatalogError, RosterError, SpinError};
pub use roster::{Movie, NewMovie, Player, Roster};
pub use selection::{resolve_selection, FloorPolicy, History, SpinRecord, SpinResult};
pub use store::{GameData, Store};
