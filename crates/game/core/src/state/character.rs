use super::{Bomb, BombId, Direction, LevelIndex, ObjectFlags, Position};

/// Character variants. Behaviour differences live in this capability table
/// rather than in separate types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CharacterKind {
    Player,
    Monster,
}

impl CharacterKind {
    /// Monsters are stationary.
    pub const fn can_move(self) -> bool {
        matches!(self, CharacterKind::Player)
    }

    /// Lives left after taking one unit of damage.
    pub const fn lives_after_damage(self, lives: u32) -> u32 {
        match self {
            CharacterKind::Player => lives.saturating_sub(1),
            // One hit kills a monster.
            CharacterKind::Monster => 0,
        }
    }
}

/// Position, facing and health shared by the player and monsters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub kind: CharacterKind,
    pub position: Position,
    pub direction: Direction,
    /// Level the character lives on. Only meaningful for monsters; the
    /// player always lives on the current level.
    pub level: LevelIndex,
    lives: u32,
    flags: ObjectFlags,
}

impl Character {
    pub fn new(kind: CharacterKind, position: Position, level: LevelIndex, lives: u32) -> Self {
        Self {
            kind,
            position,
            direction: Direction::default(),
            level,
            lives,
            flags: ObjectFlags::MODIFIED,
        }
    }

    pub fn monster(position: Position, level: LevelIndex) -> Self {
        Self::new(CharacterKind::Monster, position, level, 1)
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0 && !self.is_deleted()
    }

    pub fn flags(&self) -> ObjectFlags {
        self.flags
    }

    pub fn is_modified(&self) -> bool {
        self.flags.contains(ObjectFlags::MODIFIED)
    }

    pub fn is_deleted(&self) -> bool {
        self.flags.contains(ObjectFlags::DELETED)
    }

    pub fn set_modified(&mut self) {
        self.flags.insert(ObjectFlags::MODIFIED);
    }

    pub fn clear_modified(&mut self) {
        self.flags.remove(ObjectFlags::MODIFIED);
    }

    /// Applies one unit of damage and returns the remaining lives.
    pub fn damage(&mut self) -> u32 {
        self.lives = self.kind.lives_after_damage(self.lives);
        self.flags.insert(ObjectFlags::MODIFIED);
        if self.lives == 0 && self.kind == CharacterKind::Monster {
            self.flags.insert(ObjectFlags::DELETED);
        }
        self.lives
    }

    pub fn heal(&mut self) {
        self.lives = self.lives.saturating_add(1);
        self.flags.insert(ObjectFlags::MODIFIED);
    }

    /// Turns to face `direction`. Returns true if the facing changed.
    pub fn face(&mut self, direction: Direction) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        self.flags.insert(ObjectFlags::MODIFIED);
        true
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
        self.flags.insert(ObjectFlags::MODIFIED);
    }
}

/// The controllable character and everything it carries between levels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub character: Character,
    keys: u32,
    bomb_range: u32,
    /// Bombs that may still be armed. Negative after a `BombNumber(-n)`
    /// pickup taken while bombs were out; nothing can be armed until the
    /// returning slots bring it back above zero.
    bomb_bag: i32,
    bombs: Vec<Bomb>,
    won: bool,
    move_requested: bool,
    bomb_placed: Option<BombId>,
}

impl PlayerState {
    pub fn new(position: Position, lives: u32, bomb_range: u32, bomb_bag: u32) -> Self {
        Self {
            character: Character::new(CharacterKind::Player, position, 0, lives),
            keys: 0,
            bomb_range,
            bomb_bag: i32::try_from(bomb_bag).unwrap_or(i32::MAX),
            bombs: Vec::new(),
            won: false,
            move_requested: false,
            bomb_placed: None,
        }
    }

    pub fn position(&self) -> Position {
        self.character.position
    }

    pub fn direction(&self) -> Direction {
        self.character.direction
    }

    pub fn lives(&self) -> u32 {
        self.character.lives()
    }

    pub fn keys(&self) -> u32 {
        self.keys
    }

    pub fn bomb_range(&self) -> u32 {
        self.bomb_range
    }

    pub fn bomb_bag(&self) -> i32 {
        self.bomb_bag
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Bombs currently armed by the player.
    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    pub(crate) fn bombs_mut(&mut self) -> &mut [Bomb] {
        &mut self.bombs
    }

    pub fn bomb(&self, id: BombId) -> Option<&Bomb> {
        self.bombs.iter().find(|bomb| bomb.id == id)
    }

    pub(crate) fn bomb_mut(&mut self, id: BombId) -> Option<&mut Bomb> {
        self.bombs.iter_mut().find(|bomb| bomb.id == id)
    }

    pub fn is_move_requested(&self) -> bool {
        self.move_requested
    }

    /// Records a movement intent. Facing changes immediately; the step
    /// itself waits for the next update.
    pub fn request_move(&mut self, direction: Direction) {
        self.character.face(direction);
        self.move_requested = true;
    }

    pub(crate) fn take_move_request(&mut self) -> Option<Direction> {
        std::mem::take(&mut self.move_requested).then_some(self.character.direction)
    }

    pub(crate) fn take_placed_bomb(&mut self) -> Option<BombId> {
        self.bomb_placed.take()
    }

    pub(crate) fn gain_key(&mut self) {
        self.keys += 1;
        self.character.set_modified();
    }

    /// Spends one key. Returns false if the player has none.
    pub(crate) fn spend_key(&mut self) -> bool {
        if self.keys == 0 {
            return false;
        }
        self.keys -= 1;
        self.character.set_modified();
        true
    }

    pub(crate) fn win(&mut self) {
        self.won = true;
    }

    pub(crate) fn adjust_bomb_range(&mut self, delta: i32) {
        self.bomb_range = self.bomb_range.saturating_add_signed(delta);
        self.character.set_modified();
    }

    pub(crate) fn adjust_bomb_bag(&mut self, delta: i32) {
        self.bomb_bag = self.bomb_bag.saturating_add(delta);
        self.character.set_modified();
    }

    /// Takes one bomb out of the bag and arms it.
    pub(crate) fn arm(&mut self, bomb: Bomb) -> bool {
        if self.bomb_bag <= 0 {
            return false;
        }
        self.bomb_bag -= 1;
        self.bomb_placed = Some(bomb.id);
        self.bombs.push(bomb);
        true
    }

    /// Removes a finished bomb and returns its slot to the bag.
    pub(crate) fn release_bomb(&mut self, id: BombId) -> Option<Bomb> {
        let index = self.bombs.iter().position(|bomb| bomb.id == id)?;
        let bomb = self.bombs.remove(index);
        self.bomb_bag += 1;
        if self.bomb_placed == Some(id) {
            self.bomb_placed = None;
        }
        Some(bomb)
    }
}
