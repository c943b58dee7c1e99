//! Read-only view of the state handed to rendering and status displays.

use super::{CharacterKind, DecorKind, Direction, GameState, GameStatus, LevelIndex, Position};

/// One decor sprite's worth of information.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecorView {
    pub position: Position,
    pub kind: DecorKind,
    pub modified: bool,
    pub deleted: bool,
    /// Remaining fuse in whole seconds, for bombs.
    pub countdown: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterView {
    pub kind: CharacterKind,
    pub position: Position,
    pub direction: Direction,
    pub modified: bool,
    pub deleted: bool,
}

/// Counters for the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSummary {
    pub lives: u32,
    pub keys: u32,
    pub bomb_range: u32,
    pub bomb_bag: u32,
    pub level: LevelIndex,
}

/// Post-tick state of the current level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSnapshot {
    pub width: u32,
    pub height: u32,
    pub status: GameStatus,
    /// Live decor first, then decor removed since the last acknowledged render.
    pub decors: Vec<DecorView>,
    /// Player first, then monsters of the current level (dead ones flagged).
    pub characters: Vec<CharacterView>,
    pub player: PlayerSummary,
}

impl RenderSnapshot {
    pub(crate) fn capture(state: &GameState) -> Self {
        let level = state.current_level();
        let grid = state.grid();

        let live = grid.iter().map(|(position, decor)| {
            let countdown = match decor.kind() {
                DecorKind::Bomb(id) => state
                    .player
                    .bomb(id)
                    .map(|bomb| bomb.timer.remaining().whole_seconds_ceil()),
                _ => None,
            };
            DecorView {
                position,
                kind: decor.kind(),
                modified: decor.is_modified(),
                deleted: decor.is_deleted(),
                countdown,
            }
        });
        let removed = state
            .removed()
            .iter()
            .filter(|removed| removed.level == level)
            .map(|removed| DecorView {
                position: removed.position,
                kind: removed.decor.kind(),
                modified: true,
                deleted: true,
                countdown: None,
            });
        let decors = live.chain(removed).collect();

        let characters = std::iter::once(&state.player.character)
            .chain(state.monsters().iter().filter(|monster| monster.level == level))
            .map(|character| CharacterView {
                kind: character.kind,
                position: character.position,
                direction: character.direction,
                modified: character.is_modified(),
                deleted: character.is_deleted(),
            })
            .collect();

        Self {
            width: grid.width(),
            height: grid.height(),
            status: state.status(),
            decors,
            characters,
            player: PlayerSummary {
                lives: state.player.lives(),
                keys: state.player.keys(),
                bomb_range: state.player.bomb_range(),
                bomb_bag: u32::try_from(state.player.bomb_bag()).unwrap_or(0),
                level,
            },
        }
    }

    /// Views flagged as changed since the last acknowledged render.
    pub fn dirty_decors(&self) -> impl Iterator<Item = &DecorView> {
        self.decors.iter().filter(|view| view.modified)
    }

    pub fn player_view(&self) -> Option<&CharacterView> {
        self.characters
            .iter()
            .find(|view| view.kind == CharacterKind::Player)
    }
}
