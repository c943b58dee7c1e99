//! High-level runtime orchestrator.
//!
//! The runtime owns the game state, pulls one intent per tick from its
//! provider, steps the engine and reports what happened as [`GameEvent`]s.
//! Time is logical: callers decide how much elapses per step.

use bomb_content::Campaign;
use bomb_core::{
    GameConfig, GameEngine, GameOutcome, GameState, GameStatus, Intent, LevelLayout,
    RenderSnapshot, Tick,
};

use crate::api::{IntentProvider, Result, RuntimeError};
use crate::events::{GameEvent, extract_events};

/// Main runtime that drives a game session.
pub struct Runtime {
    config: GameConfig,
    state: GameState,
    provider: Option<Box<dyn IntentProvider>>,
    ticks: u64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the authoritative state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Number of ticks simulated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot()
    }

    /// Marks the current snapshot as drawn, clearing dirty and deleted marks.
    pub fn acknowledge_render(&mut self) {
        self.state.clear_dirty();
    }

    /// Set the intent provider
    pub fn set_provider(&mut self, provider: impl IntentProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Pulls one intent from the provider and runs one tick.
    pub fn step(&mut self, elapsed: Tick) -> Result<Vec<GameEvent>> {
        let snapshot = self.state.snapshot();
        let provider = self.provider.as_mut().ok_or(RuntimeError::ProviderNotSet)?;
        let intent = provider.next_intent(&snapshot);
        self.step_with(elapsed, intent)
    }

    /// Runs one tick with an explicit intent, bypassing the provider.
    pub fn step_with(&mut self, elapsed: Tick, intent: Option<Intent>) -> Result<Vec<GameEvent>> {
        let mut engine = GameEngine::new(&mut self.state, &self.config);
        let report = engine.step(elapsed, intent)?;
        self.ticks += 1;

        tracing::trace!(
            target: "runtime",
            tick = self.ticks,
            clock = %report.clock,
            intent = ?report.intent,
            "tick complete"
        );

        let events = extract_events(&report, &self.state);
        for event in &events {
            log_event(event);
        }
        Ok(events)
    }

    /// Steps until the game ends or `max_ticks` ticks have run.
    ///
    /// Returns the outcome if one was reached.
    pub fn run_until_terminal(
        &mut self,
        elapsed: Tick,
        max_ticks: u64,
    ) -> Result<Option<GameOutcome>> {
        for _ in 0..max_ticks {
            self.step(elapsed)?;
            if let Some(outcome) = self.state.status().outcome() {
                return Ok(Some(outcome));
            }
        }

        tracing::debug!(target: "runtime", max_ticks, "tick budget exhausted");
        Ok(None)
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::PlayerMoved { from, to } => {
            tracing::debug!(target: "runtime::events", %from, %to, "player moved");
        }
        GameEvent::DecorTaken {
            position,
            kind,
            interaction,
        } => {
            tracing::debug!(
                target: "runtime::events",
                %position,
                kind = kind.label(),
                ?interaction,
                "decor taken"
            );
        }
        GameEvent::BombPlaced { bomb, position } => {
            tracing::debug!(target: "runtime::events", %bomb, %position, "bomb placed");
        }
        GameEvent::BombExploded {
            bomb,
            origin,
            cells,
            chained,
        } => {
            tracing::info!(
                target: "runtime::events",
                %bomb,
                %origin,
                cells = cells.len(),
                chained = chained.len(),
                "bomb exploded"
            );
        }
        GameEvent::DecorDestroyed { position, kind } => {
            tracing::debug!(
                target: "runtime::events",
                %position,
                kind = kind.label(),
                "decor destroyed"
            );
        }
        GameEvent::CharacterDamaged {
            target,
            position,
            cause,
            lives_left,
        } => {
            tracing::info!(
                target: "runtime::events",
                %target,
                %position,
                ?cause,
                lives_left,
                "character damaged"
            );
        }
        GameEvent::LevelChanged { from, to, entry } => {
            tracing::info!(target: "runtime::events", from, to, %entry, "level changed");
        }
        GameEvent::LevelChangeRejected { from, offset } => {
            tracing::warn!(
                target: "runtime::events",
                from,
                offset,
                "door leads outside the campaign"
            );
        }
        GameEvent::BombAbandoned { bomb } => {
            tracing::debug!(target: "runtime::events", %bomb, "bomb abandoned");
        }
        GameEvent::GameOver { outcome, message } => {
            tracing::info!(target: "runtime::events", %outcome, "{message}");
        }
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: GameConfig,
    levels: Vec<LevelLayout>,
    provider: Option<Box<dyn IntentProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            levels: Vec::new(),
            provider: None,
        }
    }

    /// Override game configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Levels in play order. The first one must hold the player start.
    pub fn levels(mut self, levels: Vec<LevelLayout>) -> Self {
        self.levels = levels;
        self
    }

    /// Configuration and levels from a loaded campaign.
    pub fn campaign(self, campaign: Campaign) -> Self {
        self.config(campaign.config).levels(campaign.levels)
    }

    /// Set intent provider (optional; required before [`Runtime::step`])
    pub fn provider(mut self, provider: impl IntentProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        if self.levels.is_empty() {
            return Err(RuntimeError::MissingLevels);
        }

        let state =
            GameState::new(&self.config, &self.levels).map_err(RuntimeError::InitialState)?;

        tracing::info!(
            target: "runtime",
            levels = state.level_count(),
            lives = state.player.lives(),
            "runtime ready"
        );

        Ok(Runtime {
            config: self.config,
            state,
            provider: self.provider,
            ticks: 0,
        })
    }
}
