//! Text rendering of render snapshots.

use bomb_core::{CharacterKind, DecorKind, RenderSnapshot};

/// Status bar shown after every tick.
pub fn status_line(snapshot: &RenderSnapshot) -> String {
    let player = &snapshot.player;
    format!(
        "level {} | lives {} | keys {} | range {} | bombs {}",
        player.level + 1,
        player.lives,
        player.keys,
        player.bomb_range,
        player.bomb_bag,
    )
}

/// Draws the current level, one line per row.
///
/// Bombs show their remaining whole seconds; the player is `@`.
pub fn render_grid(snapshot: &RenderSnapshot) -> String {
    let width = snapshot.width as usize;
    let height = snapshot.height as usize;
    let mut cells = vec!['.'; width * height];

    let mut put = |x: i32, y: i32, glyph: char| {
        if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
            cells[y as usize * width + x as usize] = glyph;
        }
    };

    for view in snapshot.decors.iter().filter(|view| !view.deleted) {
        put(view.position.x, view.position.y, glyph(view.kind, view.countdown));
    }
    for view in snapshot.characters.iter().filter(|view| !view.deleted) {
        let glyph = match view.kind {
            CharacterKind::Player => '@',
            CharacterKind::Monster => 'M',
        };
        put(view.position.x, view.position.y, glyph);
    }

    cells
        .chunks(width.max(1))
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn glyph(kind: DecorKind, countdown: Option<u64>) -> char {
    match kind {
        DecorKind::Stone => 'S',
        DecorKind::Tree => 'T',
        DecorKind::Box => 'B',
        DecorKind::Key => 'K',
        DecorKind::Heart => 'H',
        DecorKind::Princess => 'W',
        DecorKind::BombRange(delta) if delta >= 0 => '>',
        DecorKind::BombRange(_) => '<',
        DecorKind::BombNumber(delta) if delta >= 0 => '+',
        DecorKind::BombNumber(_) => '-',
        DecorKind::Door { locked: true, .. } => 'n',
        DecorKind::Door { offset, .. } if offset < 0 => 'V',
        DecorKind::Door { .. } => 'N',
        DecorKind::Bomb(_) => countdown
            .and_then(|seconds| char::from_digit(seconds.min(9) as u32, 10))
            .unwrap_or('*'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomb_core::{GameConfig, GameState, LevelLayout};

    #[test]
    fn renders_layout_and_status() {
        let layout = LevelLayout::from_rows(&["SP_", "nKM"]).unwrap();
        let state = GameState::new(&GameConfig::default(), &[layout]).unwrap();
        let snapshot = state.snapshot();

        assert_eq!(render_grid(&snapshot), "S@.\nnKM");
        assert_eq!(
            status_line(&snapshot),
            "level 1 | lives 3 | keys 0 | range 1 | bombs 1"
        );
    }
}
