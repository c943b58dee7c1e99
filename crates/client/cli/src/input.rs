//! Line commands typed by the player.

use bomb_core::Intent;

/// One command per input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Interact,
    Bomb,
    Exit,
    /// Let time pass without acting.
    Wait,
}

impl Command {
    /// Parses a trimmed input line. Blank lines mean `wait`.
    pub fn parse(line: &str) -> Result<Self, strum::ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Wait);
        }
        line.parse()
    }

    pub fn intent(self) -> Option<Intent> {
        match self {
            Command::Up => Some(Intent::MoveUp),
            Command::Down => Some(Intent::MoveDown),
            Command::Left => Some(Intent::MoveLeft),
            Command::Right => Some(Intent::MoveRight),
            Command::Interact => Some(Intent::Interact),
            Command::Bomb => Some(Intent::PlaceBomb),
            Command::Exit => Some(Intent::Exit),
            Command::Wait => None,
        }
    }
}
