//! Deterministic bomb game simulation shared by the runtime and clients.
//!
//! `bomb-core` defines the canonical rules (intents, engine, level state) and
//! exposes pure APIs with no I/O or wall clock. All state mutation flows
//! through [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Damage, DamageCause, Destroyed, Explosion, Intent, Interaction, MoveOutcome, Taken,
};
pub use config::GameConfig;
pub use engine::{GameEngine, LevelChange, StepError, TickPhase, TickPhaseError, TickReport};
pub use env::{EntityCode, LevelLayout};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    BlastEffect, Bomb, BombId, BombPhase, Character, CharacterKind, CharacterView, Decor,
    DecorKind, DecorView, Direction, GameOutcome, GameState, GameStatus, Grid, GridError,
    InitializationError, LevelIndex, ObjectFlags, PlayerState, PlayerSummary, Position,
    RemovedDecor, RenderSnapshot, Tick, Timer,
};
