use std::collections::BTreeMap;

use crate::env::{EntityCode, LevelLayout};

use super::{Decor, DecorKind, GridError, InitializationError, LevelIndex, Position};

/// Sparse cell storage for one level.
///
/// Empty cells are absent keys. Every stored key lies inside
/// `[0, width) x [0, height)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    cells: BTreeMap<Position, Decor>,
    monster_spawns: Vec<Position>,
    player_start: Option<Position>,
}

impl Grid {
    /// Creates an empty grid of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: BTreeMap::new(),
            monster_spawns: Vec::new(),
            player_start: None,
        }
    }

    /// Populates a grid from typed entity codes.
    pub fn from_layout(
        level: LevelIndex,
        layout: &LevelLayout,
    ) -> Result<Self, InitializationError> {
        let mut grid = Self::new(layout.width(), layout.height());

        for (position, code) in layout.iter() {
            let kind = match code {
                EntityCode::Empty => continue,
                EntityCode::Monster => {
                    grid.monster_spawns.push(position);
                    continue;
                }
                EntityCode::Player => {
                    if grid.player_start.replace(position).is_some() {
                        return Err(InitializationError::DuplicatePlayerStart { level });
                    }
                    continue;
                }
                EntityCode::Stone => DecorKind::Stone,
                EntityCode::Tree => DecorKind::Tree,
                EntityCode::Box => DecorKind::Box,
                EntityCode::Key => DecorKind::Key,
                EntityCode::Heart => DecorKind::Heart,
                EntityCode::Princess => DecorKind::Princess,
                EntityCode::BombRangeInc => DecorKind::BombRange(1),
                EntityCode::BombRangeDec => DecorKind::BombRange(-1),
                EntityCode::BombNumberInc => DecorKind::BombNumber(1),
                EntityCode::BombNumberDec => DecorKind::BombNumber(-1),
                EntityCode::DoorNextOpened => DecorKind::Door {
                    locked: false,
                    offset: 1,
                },
                EntityCode::DoorNextClosed => DecorKind::Door {
                    locked: true,
                    offset: 1,
                },
                EntityCode::DoorPrevOpened => DecorKind::Door {
                    locked: false,
                    offset: -1,
                },
            };
            grid.set(position, Decor::new(kind))?;
        }

        Ok(grid)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn inside(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn get(&self, position: Position) -> Option<&Decor> {
        self.cells.get(&position)
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut Decor> {
        self.cells.get_mut(&position)
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        !self.cells.contains_key(&position)
    }

    /// Writes `decor` at `position`, replacing whatever was there.
    pub fn set(&mut self, position: Position, decor: Decor) -> Result<Option<Decor>, GridError> {
        if !self.inside(position) {
            return Err(GridError::InvalidPosition {
                position,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells.insert(position, decor))
    }

    /// Clears a cell. Removing an empty cell is a no-op.
    pub fn remove(&mut self, position: Position) -> Option<Decor> {
        self.cells.remove(&position)
    }

    /// Iterates occupied cells in position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Decor)> {
        self.cells.iter().map(|(position, decor)| (*position, decor))
    }

    pub fn values(&self) -> impl Iterator<Item = &Decor> {
        self.cells.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Decor> {
        self.cells.values_mut()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Monster spawn positions read from the layout.
    pub fn monster_spawns(&self) -> &[Position] {
        &self.monster_spawns
    }

    pub fn player_start(&self) -> Option<Position> {
        self.player_start
    }

    /// Position of the first door whose offset has the given sign.
    pub fn door_with_offset_sign(&self, forward: bool) -> Option<Position> {
        self.iter().find_map(|(position, decor)| match decor.kind() {
            DecorKind::Door { offset, .. } if (offset > 0) == forward && offset != 0 => {
                Some(position)
            }
            _ => None,
        })
    }
}
