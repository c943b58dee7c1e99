//! Move legality and displacement.

use crate::state::{Character, Direction, GameState, Grid, Position};

use super::interact::{self, Taken};

/// Result of a completed player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    /// Decor resolved on the destination cell before the move.
    pub taken: Option<Taken>,
}

/// Whether `character` may step one cell in `direction` on `grid`.
///
/// The target must be inside the grid and either empty or hold walkable
/// decor. Bombs are never walkable, not even for their owner.
pub fn can_enter(grid: &Grid, character: &Character, direction: Direction) -> bool {
    if !character.kind.can_move() {
        return false;
    }
    let target = character.position.step(direction);
    grid.inside(target)
        && grid
            .get(target)
            .is_none_or(|decor| decor.kind().is_walkable())
}

/// Whether the player may step in `direction` on the current level.
pub fn can_move(state: &GameState, direction: Direction) -> bool {
    can_enter(state.grid(), &state.player.character, direction)
}

/// Performs the pending move request, if any and if legal.
///
/// The request is cleared either way; intents never queue across ticks.
pub(crate) fn update_player(state: &mut GameState) -> Option<MoveOutcome> {
    let direction = state.player.take_move_request()?;
    if !can_move(state, direction) {
        return None;
    }

    let from = state.player.position();
    let to = from.step(direction);
    let taken = interact::resolve_at(state, to);
    state.player.character.move_to(to);

    Some(MoveOutcome { from, to, taken })
}
