/// Lifecycle of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Running,
    Won,
    Lost,
    /// The player asked to quit.
    Exited,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }

    /// Terminal outcome, if any.
    pub const fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::Running => None,
            GameStatus::Won => Some(GameOutcome::Won),
            GameStatus::Lost => Some(GameOutcome::Lost),
            GameStatus::Exited => Some(GameOutcome::Exited),
        }
    }
}

/// Terminal result surfaced once, on the tick it is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameOutcome {
    Won,
    Lost,
    Exited,
}

impl GameOutcome {
    /// Message shown by the view when the game ends.
    pub const fn message(self) -> &'static str {
        match self {
            GameOutcome::Won => "You win!",
            GameOutcome::Lost => "Game over",
            GameOutcome::Exited => "Exited",
        }
    }

    pub const fn status(self) -> GameStatus {
        match self {
            GameOutcome::Won => GameStatus::Won,
            GameOutcome::Lost => GameStatus::Lost,
            GameOutcome::Exited => GameStatus::Exited,
        }
    }
}
