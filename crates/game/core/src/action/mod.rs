//! Player intents and the rules that resolve them.
//!
//! An [`Intent`] is written by an input collaborator and consumed by the
//! engine at the start of a tick. The submodules hold the rules the engine
//! applies while resolving it:
//! - [`movement`]: move legality and displacement
//! - [`interact`]: the decor × player interaction table
//! - [`bomb`]: placement, timers and blast propagation
pub mod bomb;
pub mod interact;
pub mod movement;

pub use bomb::{Destroyed, Explosion};
pub use interact::{Interaction, Taken};
pub use movement::MoveOutcome;

use crate::state::{BombId, Character, CharacterKind, Direction, Position};

/// One externally supplied action request, consumed once per tick.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Use the door the player is facing.
    Interact,
    PlaceBomb,
    Exit,
}

impl Intent {
    pub const fn movement(direction: Direction) -> Self {
        match direction {
            Direction::Up => Intent::MoveUp,
            Direction::Down => Intent::MoveDown,
            Direction::Left => Intent::MoveLeft,
            Direction::Right => Intent::MoveRight,
        }
    }

    /// Direction carried by a movement intent.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Intent::MoveUp => Some(Direction::Up),
            Intent::MoveDown => Some(Direction::Down),
            Intent::MoveLeft => Some(Direction::Left),
            Intent::MoveRight => Some(Direction::Right),
            Intent::Interact | Intent::PlaceBomb | Intent::Exit => None,
        }
    }
}

/// Source of one unit of damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageCause {
    /// Player and monster on the same cell.
    Collision,
    Explosion(BombId),
}

/// One unit of damage applied to a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Damage {
    pub target: CharacterKind,
    pub position: Position,
    pub cause: DamageCause,
    pub lives_left: u32,
}

impl Damage {
    pub(crate) fn new(character: &Character, cause: DamageCause, lives_left: u32) -> Self {
        Self {
            target: character.kind,
            position: character.position,
            cause,
            lives_left,
        }
    }
}
