//! Selection engine: odds, weighted draw, coin economy and spin history.
//!
//! `resolve_selection` runs the whole spin against a roster snapshot and
//! applies the two side effects (opponent coin, history entry) together.

pub mod draw;
pub mod economy;
pub mod history;
pub mod odds;
pub mod spin;
pub mod types;

pub use draw::*;
pub use economy::*;
pub use history::*;
pub use odds::*;
pub use spin::*;
pub use types::*;
