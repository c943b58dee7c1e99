//! Static level data consumed once when a game is constructed.
//!
//! Layouts are plain tables of [`EntityCode`]s. Turning them into live
//! decor happens in [`crate::state::Grid::from_layout`]; nothing in this
//! module is referenced after construction.
mod level;

pub use level::{EntityCode, LevelLayout};
