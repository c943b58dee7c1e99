use crate::state::Tick;

/// Game configuration constants and tunable parameters.
///
/// Supplied once when a game is constructed; the engine never mutates it.
/// Grid dimensions are not part of the configuration: each
/// [`crate::LevelLayout`] carries its own.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Lives the player starts with.
    pub player_lives: u32,
    /// Time between placing a bomb and its explosion, in milliseconds.
    pub bomb_fuse_ms: u64,
    /// Initial explosion range, in cells per direction.
    pub bomb_range: u32,
    /// Initial number of bombs that may be armed at the same time.
    pub bomb_bag: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_LIVES: u32 = 3;
    pub const DEFAULT_BOMB_FUSE_MS: u64 = 4000;
    pub const DEFAULT_BOMB_RANGE: u32 = 1;
    pub const DEFAULT_BOMB_BAG: u32 = 1;

    pub fn new() -> Self {
        Self {
            player_lives: Self::DEFAULT_PLAYER_LIVES,
            bomb_fuse_ms: Self::DEFAULT_BOMB_FUSE_MS,
            bomb_range: Self::DEFAULT_BOMB_RANGE,
            bomb_bag: Self::DEFAULT_BOMB_BAG,
        }
    }

    pub fn with_player_lives(mut self, player_lives: u32) -> Self {
        self.player_lives = player_lives;
        self
    }

    pub fn with_bomb_fuse_ms(mut self, bomb_fuse_ms: u64) -> Self {
        self.bomb_fuse_ms = bomb_fuse_ms;
        self
    }

    pub fn with_bomb_range(mut self, bomb_range: u32) -> Self {
        self.bomb_range = bomb_range;
        self
    }

    pub fn with_bomb_bag(mut self, bomb_bag: u32) -> Self {
        self.bomb_bag = bomb_bag;
        self
    }

    pub fn bomb_fuse(&self) -> Tick {
        Tick::from_millis(self.bomb_fuse_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
