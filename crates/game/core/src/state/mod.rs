//! Authoritative game state representation.
//!
//! This module owns the data structures that describe levels, decor, the
//! player, monsters and bombs. Consumers read this state or its
//! [`RenderSnapshot`] but mutate it exclusively through the engine.
mod bomb;
mod character;
mod common;
mod decor;
mod error;
mod grid;
mod snapshot;
mod status;

pub use bomb::{Bomb, BombAdvance, BombId, BombPhase, Timer};
pub use character::{Character, CharacterKind, PlayerState};
pub use common::{Direction, LevelIndex, Position, Tick};
pub use decor::{BlastEffect, Decor, DecorKind, ObjectFlags};
pub use error::{GridError, InitializationError};
pub use grid::Grid;
pub use snapshot::{CharacterView, DecorView, PlayerSummary, RenderSnapshot};
pub use status::{GameOutcome, GameStatus};

use crate::config::GameConfig;
use crate::env::LevelLayout;

/// Decor taken off a grid, kept until the view acknowledges the deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemovedDecor {
    pub level: LevelIndex,
    pub position: Position,
    pub decor: Decor,
}

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Every level of the campaign, built up front. Levels keep their state
    /// while the player is elsewhere.
    levels: Vec<Grid>,
    current_level: LevelIndex,
    pub player: PlayerState,
    /// Monster roster across all levels, tagged by `Character::level`.
    monsters: Vec<Character>,
    /// Signed level offset requested by a door, applied on the next tick.
    pending_level_change: Option<i32>,
    status: GameStatus,
    /// Total logical time simulated so far.
    clock: Tick,
    /// Monotonic bomb id allocator.
    next_bomb_id: u32,
    removed: Vec<RemovedDecor>,
}

impl GameState {
    /// Builds every level from its layout and places the player on the
    /// first level's start cell.
    ///
    /// Fails without producing any state if one layout is invalid.
    pub fn new(config: &GameConfig, layouts: &[LevelLayout]) -> Result<Self, InitializationError> {
        if layouts.is_empty() {
            return Err(InitializationError::NoLevels);
        }

        let levels = layouts
            .iter()
            .enumerate()
            .map(|(index, layout)| Grid::from_layout(index, layout))
            .collect::<Result<Vec<_>, _>>()?;

        let start = levels
            .first()
            .and_then(Grid::player_start)
            .ok_or(InitializationError::MissingPlayerStart)?;

        let monsters = levels
            .iter()
            .enumerate()
            .flat_map(|(index, grid)| {
                grid.monster_spawns()
                    .iter()
                    .map(move |position| Character::monster(*position, index))
            })
            .collect();

        Ok(Self {
            levels,
            current_level: 0,
            player: PlayerState::new(
                start,
                config.player_lives,
                config.bomb_range,
                config.bomb_bag,
            ),
            monsters,
            pending_level_change: None,
            status: GameStatus::Running,
            clock: Tick::ZERO,
            next_bomb_id: 0,
            removed: Vec::new(),
        })
    }

    /// Grid of the level the player is on.
    pub fn grid(&self) -> &Grid {
        &self.levels[self.current_level]
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.levels[self.current_level]
    }

    /// Current grid and player borrowed together for interaction resolution.
    pub(crate) fn grid_and_player_mut(&mut self) -> (&mut Grid, &mut PlayerState) {
        (&mut self.levels[self.current_level], &mut self.player)
    }

    pub fn level(&self, index: LevelIndex) -> Option<&Grid> {
        self.levels.get(index)
    }

    pub(crate) fn level_mut(&mut self, index: LevelIndex) -> Option<&mut Grid> {
        self.levels.get_mut(index)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn current_level(&self) -> LevelIndex {
        self.current_level
    }

    pub(crate) fn set_current_level(&mut self, level: LevelIndex) {
        debug_assert!(level < self.levels.len());
        self.current_level = level;
    }

    /// The full roster, dead monsters included.
    pub fn monsters(&self) -> &[Character] {
        &self.monsters
    }

    pub(crate) fn monsters_mut(&mut self) -> &mut [Character] {
        &mut self.monsters
    }

    pub(crate) fn monsters_and_player_mut(&mut self) -> (&mut [Character], &mut PlayerState) {
        (&mut self.monsters, &mut self.player)
    }

    /// Live monsters on the current level.
    pub fn active_monsters(&self) -> impl Iterator<Item = &Character> {
        let level = self.current_level;
        self.monsters
            .iter()
            .filter(move |monster| monster.level == level && monster.is_alive())
    }

    pub fn pending_level_change(&self) -> Option<i32> {
        self.pending_level_change
    }

    pub(crate) fn request_level_change(&mut self, offset: i32) {
        self.pending_level_change = Some(offset);
    }

    pub(crate) fn take_level_change(&mut self) -> Option<i32> {
        self.pending_level_change.take()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub(crate) fn advance_clock(&mut self, elapsed: Tick) {
        self.clock += elapsed;
    }

    pub(crate) fn allocate_bomb_id(&mut self) -> BombId {
        let id = BombId(self.next_bomb_id);
        self.next_bomb_id = self.next_bomb_id.wrapping_add(1);
        id
    }

    /// Takes decor off a level and keeps it, flagged deleted, for the view.
    pub(crate) fn remove_decor(&mut self, level: LevelIndex, position: Position) -> Option<Decor> {
        let mut decor = self.level_mut(level)?.remove(position)?;
        decor.mark_deleted();
        self.removed.push(RemovedDecor {
            level,
            position,
            decor,
        });
        Some(decor)
    }

    /// Decor removed since the last [`GameState::clear_dirty`].
    pub fn removed(&self) -> &[RemovedDecor] {
        &self.removed
    }

    /// Acknowledges a render: clears every MODIFIED flag and forgets
    /// removed decor.
    pub fn clear_dirty(&mut self) {
        self.removed.clear();
        for grid in &mut self.levels {
            for decor in grid.values_mut() {
                decor.clear_modified();
            }
        }
        self.player.character.clear_modified();
        for monster in &mut self.monsters {
            monster.clear_modified();
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}
