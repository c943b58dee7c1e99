//! High-level game events extracted from tick reports.

use bomb_core::{
    BombId, CharacterKind, DamageCause, DecorKind, GameOutcome, Interaction, LevelIndex, Position,
};

/// Semantically meaningful occurrences of one tick.
///
/// Events are computed from the [`bomb_core::TickReport`] after each step and
/// are what clients log, display or react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The player moved to a new cell.
    PlayerMoved { from: Position, to: Position },

    /// The player interacted with a decor.
    DecorTaken {
        position: Position,
        kind: DecorKind,
        interaction: Interaction,
    },

    BombPlaced { bomb: BombId, position: Position },

    /// A bomb exploded. `chained` lists the bombs it set off.
    BombExploded {
        bomb: BombId,
        origin: Position,
        cells: Vec<Position>,
        chained: Vec<BombId>,
    },

    /// A blast removed a decor.
    DecorDestroyed { position: Position, kind: DecorKind },

    CharacterDamaged {
        target: CharacterKind,
        position: Position,
        cause: DamageCause,
        lives_left: u32,
    },

    LevelChanged {
        from: LevelIndex,
        to: LevelIndex,
        entry: Position,
    },

    /// A door pointed at a level that does not exist.
    LevelChangeRejected { from: LevelIndex, offset: i32 },

    /// An armed bomb was dropped when its level was left; its bag slot was
    /// returned.
    BombAbandoned { bomb: BombId },

    /// Terminal outcome, emitted once.
    GameOver {
        outcome: GameOutcome,
        message: &'static str,
    },
}

impl GameEvent {
    /// Whether the event ends the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameOver { .. })
    }
}
