//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Level layouts (data-driven via RON)
//! - Campaign manifests listing levels in order (RON)
//! - Game configuration (data-driven via TOML)
//! - A built-in demo campaign used when no data directory is supplied
//!
//! Content is consumed once when a game is constructed and never appears in
//! game state.
//!
//! All loaders use bomb-core types directly with serde for RON/TOML deserialization.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{DEMO_LEVELS, demo_levels};

#[cfg(feature = "loaders")]
pub use loaders::{Campaign, CampaignLoader, ConfigLoader, ContentFactory, LevelLoader};
