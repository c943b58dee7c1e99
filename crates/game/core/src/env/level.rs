use crate::state::{InitializationError, Position};

/// Typed code for the content of one cell in a level layout.
///
/// Each code has a single-character textual form used by level files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityCode {
    Empty,
    Stone,
    Tree,
    Box,
    Key,
    Heart,
    Princess,
    BombRangeInc,
    BombRangeDec,
    BombNumberInc,
    BombNumberDec,
    DoorNextOpened,
    DoorNextClosed,
    DoorPrevOpened,
    Monster,
    Player,
}

impl EntityCode {
    pub const ALL: [EntityCode; 16] = [
        EntityCode::Empty,
        EntityCode::Stone,
        EntityCode::Tree,
        EntityCode::Box,
        EntityCode::Key,
        EntityCode::Heart,
        EntityCode::Princess,
        EntityCode::BombRangeInc,
        EntityCode::BombRangeDec,
        EntityCode::BombNumberInc,
        EntityCode::BombNumberDec,
        EntityCode::DoorNextOpened,
        EntityCode::DoorNextClosed,
        EntityCode::DoorPrevOpened,
        EntityCode::Monster,
        EntityCode::Player,
    ];

    pub const fn as_char(self) -> char {
        match self {
            EntityCode::Empty => '_',
            EntityCode::Stone => 'S',
            EntityCode::Tree => 'T',
            EntityCode::Box => 'B',
            EntityCode::Key => 'K',
            EntityCode::Heart => 'H',
            EntityCode::Princess => 'W',
            EntityCode::BombRangeInc => '>',
            EntityCode::BombRangeDec => '<',
            EntityCode::BombNumberInc => '+',
            EntityCode::BombNumberDec => '-',
            EntityCode::DoorNextOpened => 'N',
            EntityCode::DoorNextClosed => 'n',
            EntityCode::DoorPrevOpened => 'V',
            EntityCode::Monster => 'M',
            EntityCode::Player => 'P',
        }
    }

    pub fn from_char(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|entity| entity.as_char() == code)
    }
}

/// Rectangular table of entity codes describing one level, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelLayout {
    width: u32,
    height: u32,
    cells: Vec<EntityCode>,
}

impl LevelLayout {
    pub fn new(
        width: u32,
        height: u32,
        cells: Vec<EntityCode>,
    ) -> Result<Self, InitializationError> {
        let expected = width as usize * height as usize;
        if expected == 0 {
            return Err(InitializationError::EmptyLayout);
        }
        if cells.len() != expected {
            return Err(InitializationError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parses text rows, top to bottom, one character per cell.
    ///
    /// Fails on the first unknown character; no partial layout is produced.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, InitializationError> {
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .ok_or(InitializationError::EmptyLayout)?;

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(InitializationError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, code) in row.chars().enumerate() {
                let entity = EntityCode::from_char(code).ok_or(
                    InitializationError::UnknownEntityCode {
                        code,
                        position: Position::new(x as i32, y as i32),
                    },
                )?;
                cells.push(entity);
            }
        }

        Self::new(width as u32, rows.len() as u32, cells)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, position: Position) -> Option<EntityCode> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        let (x, y) = (position.x as u32, position.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize).copied()
    }

    /// Iterates every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, EntityCode)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(index, code)| {
            let position = Position::new((index % width) as i32, (index / width) as i32);
            (position, *code)
        })
    }

    /// Renders the layout back into text rows.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|code| code.as_char()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_unique_character() {
        for code in EntityCode::ALL {
            assert_eq!(EntityCode::from_char(code.as_char()), Some(code));
        }
    }

    #[test]
    fn parses_rows_into_positions() {
        let layout = LevelLayout::from_rows(&["P_S", "KBM"]).unwrap();
        assert_eq!(layout.width(), 3);
        assert_eq!(layout.height(), 2);
        assert_eq!(layout.get(Position::new(0, 0)), Some(EntityCode::Player));
        assert_eq!(layout.get(Position::new(2, 0)), Some(EntityCode::Stone));
        assert_eq!(layout.get(Position::new(1, 1)), Some(EntityCode::Box));
        assert_eq!(layout.get(Position::new(3, 0)), None);
        assert_eq!(layout.to_rows(), vec!["P_S".to_string(), "KBM".to_string()]);
    }

    #[test]
    fn unknown_code_is_fatal() {
        let err = LevelLayout::from_rows(&["P_", "_?"]).unwrap_err();
        assert_eq!(
            err,
            InitializationError::UnknownEntityCode {
                code: '?',
                position: Position::new(1, 1),
            }
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = LevelLayout::from_rows(&["P__", "_"]).unwrap_err();
        assert!(matches!(
            err,
            InitializationError::RaggedRow {
                row: 1,
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn empty_layout_is_rejected() {
        let rows: [&str; 0] = [];
        assert_eq!(
            LevelLayout::from_rows(&rows).unwrap_err(),
            InitializationError::EmptyLayout
        );
        assert_eq!(
            LevelLayout::new(0, 3, Vec::new()).unwrap_err(),
            InitializationError::EmptyLayout
        );
    }
}
