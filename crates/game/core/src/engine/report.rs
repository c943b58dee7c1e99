//! Per-tick outcome returned by [`crate::GameEngine::step`].

use crate::action::{Damage, Destroyed, Explosion, Intent, MoveOutcome, Taken};
use crate::state::{BombId, GameOutcome, LevelIndex, Position, Tick};

/// Result of applying a pending level change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelChange {
    Changed {
        from: LevelIndex,
        to: LevelIndex,
        entry: Position,
    },
    /// The door pointed past the first or last level. The flag is cleared and
    /// the player stays where they are.
    Rejected { from: LevelIndex, offset: i32 },
}

/// Everything that happened during one tick, in pipeline order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Game clock after this tick.
    pub clock: Tick,
    pub intent: Option<Intent>,
    pub level_change: Option<LevelChange>,
    /// Bombs dropped from the departed level.
    pub abandoned_bombs: Vec<BombId>,
    pub moved: Option<MoveOutcome>,
    /// Interactions resolved by the interact intent or by the move.
    pub taken: Vec<Taken>,
    pub placed_bomb: Option<BombId>,
    /// Contact damage between the player and monsters.
    pub collisions: Vec<Damage>,
    pub explosions: Vec<Explosion>,
    /// Set on the tick the game ends; never repeated.
    pub outcome: Option<GameOutcome>,
}

impl TickReport {
    pub(crate) fn new(intent: Option<Intent>) -> Self {
        Self {
            intent,
            ..Self::default()
        }
    }

    /// All damage of the tick, collisions first.
    pub fn damage(&self) -> impl Iterator<Item = &Damage> {
        self.collisions
            .iter()
            .chain(self.explosions.iter().flat_map(|explosion| &explosion.damage))
    }

    /// All decor destroyed by blasts this tick.
    pub fn destroyed(&self) -> impl Iterator<Item = &Destroyed> {
        self.explosions
            .iter()
            .flat_map(|explosion| &explosion.destroyed)
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}
