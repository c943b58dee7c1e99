//! Tick scheduling and the simulation pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. One
//! call to [`GameEngine::step`] runs a full tick in a fixed order:
//!
//! 1. consume the intent
//! 2. update: pending level change, player move, monsters, bomb fuses
//! 3. register the bomb placed this tick
//! 4. player/monster collisions
//! 5. explosions, including chain reactions
//! 6. terminal checks
//!
//! No partial tick is observable from outside. Once a terminal status is
//! reached every further step fails with [`StepError::GameOver`].

mod errors;
mod report;
mod transition;

pub use errors::{StepError, TickPhase, TickPhaseError};
pub use report::{LevelChange, TickReport};

use crate::action::{Intent, bomb, interact, movement};
use crate::config::GameConfig;
use crate::state::{GameOutcome, GameState, GameStatus, RenderSnapshot, Tick};

/// Explicit simulation context: the state being advanced and the static
/// parameters it was built with.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot()
    }

    /// Acknowledges the last render. See [`GameState::clear_dirty`].
    pub fn clear_dirty(&mut self) {
        self.state.clear_dirty();
    }

    /// Runs one tick of `elapsed` logical time with at most one intent.
    pub fn step(&mut self, elapsed: Tick, intent: Option<Intent>) -> Result<TickReport, StepError> {
        if let Some(outcome) = self.state.status().outcome() {
            return Err(StepError::GameOver { outcome });
        }

        let mut report = TickReport::new(intent);

        if intent == Some(Intent::Exit) {
            self.state.set_status(GameStatus::Exited);
            report.clock = self.state.clock();
            report.outcome = Some(GameOutcome::Exited);
            return Ok(report);
        }
        self.consume_intent(intent, &mut report);

        self.update(elapsed, &mut report);

        report.placed_bomb = bomb::register_placed_bomb(self.state)
            .map_err(|error| StepError::grid(TickPhase::PlaceBomb, error))?;

        report.collisions = interact::resolve_collisions(self.state);

        report.explosions = bomb::resolve_explosions(self.state);

        report.outcome = self.check_terminal();
        report.clock = self.state.clock();
        Ok(report)
    }

    fn consume_intent(&mut self, intent: Option<Intent>, report: &mut TickReport) {
        match intent {
            Some(Intent::Interact) => {
                report.taken.extend(interact::interact_facing(self.state));
            }
            Some(Intent::PlaceBomb) => {
                // The bag and the cell are checked here; the decor is
                // registered after the update phase.
                bomb::arm_bomb(self.state, self.config.bomb_fuse());
            }
            Some(movement_intent) => {
                if let Some(direction) = movement_intent.direction() {
                    self.state.player.request_move(direction);
                }
            }
            None => {}
        }
    }

    fn update(&mut self, elapsed: Tick, report: &mut TickReport) {
        if let Some(offset) = self.state.take_level_change() {
            let (change, abandoned) = transition::apply_level_change(self.state, offset);
            report.level_change = Some(change);
            report.abandoned_bombs = abandoned;
        }

        report.moved = movement::update_player(self.state);
        if let Some(taken) = report.moved.and_then(|moved| moved.taken) {
            report.taken.push(taken);
        }

        // Monsters are stationary; their kind never passes `can_move`.

        bomb::advance_bombs(self.state, elapsed);
        self.state.advance_clock(elapsed);
    }

    /// Losing takes precedence when the final blow and the princess land on
    /// the same tick.
    fn check_terminal(&mut self) -> Option<GameOutcome> {
        let status = if self.state.player.lives() == 0 {
            GameStatus::Lost
        } else if self.state.player.has_won() {
            GameStatus::Won
        } else {
            return None;
        };
        self.state.set_status(status);
        status.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::LevelLayout;
    use crate::state::{Direction, Position};

    fn setup(levels: &[&[&str]], config: GameConfig) -> (GameState, GameConfig) {
        let layouts: Vec<_> = levels
            .iter()
            .map(|rows| LevelLayout::from_rows(*rows).unwrap())
            .collect();
        (GameState::new(&config, &layouts).unwrap(), config)
    }

    #[test]
    fn move_intent_resolves_in_the_same_tick() {
        let (mut state, config) = setup(&[&["P_"]], GameConfig::default());
        let mut engine = GameEngine::new(&mut state, &config);

        let report = engine.step(Tick(16), Some(Intent::MoveRight)).unwrap();
        assert_eq!(report.moved.map(|moved| moved.to), Some(Position::new(1, 0)));
        assert_eq!(report.clock, Tick(16));
        assert_eq!(engine.state().player.direction(), Direction::Right);

        // Intents never carry over.
        let report = engine.step(Tick(16), None).unwrap();
        assert!(report.moved.is_none());
    }

    #[test]
    fn blocked_move_still_turns_the_player() {
        let (mut state, config) = setup(&[&["PS"]], GameConfig::default());
        let mut engine = GameEngine::new(&mut state, &config);
        engine.clear_dirty();

        let report = engine.step(Tick(16), Some(Intent::MoveRight)).unwrap();
        assert!(report.moved.is_none());
        let view = *engine.snapshot().player_view().unwrap();
        assert_eq!(view.direction, Direction::Right);
        assert!(view.modified);
        assert_eq!(view.position, Position::ORIGIN);
    }

    #[test]
    fn placed_bomb_appears_after_the_update_phase() {
        let (mut state, config) = setup(&[&["P_"]], GameConfig::default());
        let mut engine = GameEngine::new(&mut state, &config);

        let report = engine.step(Tick(16), Some(Intent::PlaceBomb)).unwrap();
        let id = report.placed_bomb.unwrap();
        let decor = engine.state().grid().get(Position::ORIGIN).unwrap();
        assert_eq!(decor.kind(), crate::state::DecorKind::Bomb(id));
        assert_eq!(engine.state().player.bomb_bag(), 0);

        // Bag is empty: a second request is silently ignored.
        let report = engine.step(Tick(16), Some(Intent::PlaceBomb)).unwrap();
        assert!(report.placed_bomb.is_none());
    }

    #[test]
    fn door_traversal_changes_level_on_the_next_tick() {
        let (mut state, config) = setup(&[&["PN"], &["V_"]], GameConfig::default());
        let mut engine = GameEngine::new(&mut state, &config);

        let report = engine.step(Tick(16), Some(Intent::MoveRight)).unwrap();
        assert!(report.level_change.is_none());
        assert_eq!(engine.state().pending_level_change(), Some(1));
        assert_eq!(engine.state().current_level(), 0);

        let report = engine.step(Tick(16), None).unwrap();
        assert_eq!(
            report.level_change,
            Some(LevelChange::Changed {
                from: 0,
                to: 1,
                entry: Position::ORIGIN
            })
        );
        assert_eq!(engine.state().current_level(), 1);
        assert_eq!(engine.state().pending_level_change(), None);
    }

    #[test]
    fn huge_elapsed_time_saturates_the_clock() {
        let (mut state, config) = setup(&[&["P_"]], GameConfig::default());
        let mut engine = GameEngine::new(&mut state, &config);

        engine.step(Tick(u64::MAX), Some(Intent::PlaceBomb)).unwrap();
        let report = engine.step(Tick(u64::MAX), None).unwrap();
        assert_eq!(report.clock, Tick(u64::MAX));
    }

    #[test]
    fn exit_is_terminal() {
        let (mut state, config) = setup(&[&["P_"]], GameConfig::default());
        let mut engine = GameEngine::new(&mut state, &config);

        let report = engine.step(Tick(16), Some(Intent::Exit)).unwrap();
        assert_eq!(report.outcome, Some(GameOutcome::Exited));
        assert_eq!(
            engine.step(Tick(16), None),
            Err(StepError::GameOver {
                outcome: GameOutcome::Exited
            })
        );
    }

    #[test]
    fn losing_beats_winning_on_the_same_tick() {
        let config = GameConfig::default()
            .with_player_lives(1)
            .with_bomb_fuse_ms(32);
        let (mut state, config) = setup(&[&["PW"]], config);
        let mut engine = GameEngine::new(&mut state, &config);

        engine.step(Tick(16), Some(Intent::PlaceBomb)).unwrap();
        // Picks up the princess while the fuse runs out under the player.
        let report = engine.step(Tick(16), Some(Intent::MoveRight)).unwrap();
        assert!(engine.state().player.has_won());
        assert_eq!(report.explosions.len(), 1);
        assert_eq!(report.outcome, Some(GameOutcome::Lost));
        assert_eq!(engine.state().status(), GameStatus::Lost);
    }
}
