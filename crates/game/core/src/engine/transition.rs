//! Level change applied at the start of the update phase.

use crate::state::{BombId, DecorKind, GameState, LevelIndex, Position};

use super::LevelChange;

/// Switches the current level by `offset`.
///
/// Bombs still armed are dropped from their grid and their bag slots are
/// returned before the switch. The player lands on the entry point of the
/// target level and every object there is flagged for a full redraw.
pub(super) fn apply_level_change(state: &mut GameState, offset: i32) -> (LevelChange, Vec<BombId>) {
    let from = state.current_level();
    let Some(to) = target_level(from, offset, state.level_count()) else {
        return (LevelChange::Rejected { from, offset }, Vec::new());
    };

    let abandoned = abandon_bombs(state);

    state.set_current_level(to);
    let entry = entry_point(state, to, offset);
    state.player.character.level = to;
    state.player.character.move_to(entry);

    state.grid_mut().values_mut().for_each(|decor| decor.set_modified());
    state
        .monsters_mut()
        .iter_mut()
        .filter(|monster| monster.level == to)
        .for_each(|monster| monster.set_modified());

    (LevelChange::Changed { from, to, entry }, abandoned)
}

fn target_level(from: LevelIndex, offset: i32, count: usize) -> Option<LevelIndex> {
    let target = from.checked_add_signed(isize::try_from(offset).ok()?)?;
    (target < count).then_some(target)
}

fn abandon_bombs(state: &mut GameState) -> Vec<BombId> {
    let ids: Vec<BombId> = state.player.bombs().iter().map(|bomb| bomb.id).collect();
    for id in &ids {
        let Some(bomb) = state.player.release_bomb(*id) else {
            continue;
        };
        let on_grid = state
            .level(bomb.level)
            .and_then(|grid| grid.get(bomb.position))
            .is_some_and(|decor| decor.kind() == DecorKind::Bomb(bomb.id));
        if on_grid {
            state.remove_decor(bomb.level, bomb.position);
        }
    }
    ids
}

/// Where the player appears on `level`.
///
/// Going forward lands on the level's backward door and going backward on its
/// forward door. Without such a door the level's start cell is used, then the
/// player's current coordinates if they fit, then the origin.
fn entry_point(state: &GameState, level: LevelIndex, offset: i32) -> Position {
    let Some(grid) = state.level(level) else {
        return Position::ORIGIN;
    };
    let door = match offset.signum() {
        1 => grid.door_with_offset_sign(false),
        -1 => grid.door_with_offset_sign(true),
        _ => None,
    };
    let current = state.player.position();

    door.or(grid.player_start())
        .or_else(|| grid.inside(current).then_some(current))
        .unwrap_or(Position::ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::bomb;
    use crate::config::GameConfig;
    use crate::env::LevelLayout;
    use crate::state::Tick;

    fn campaign(levels: &[&[&str]]) -> GameState {
        let layouts: Vec<_> = levels
            .iter()
            .map(|rows| LevelLayout::from_rows(*rows).unwrap())
            .collect();
        GameState::new(&GameConfig::default(), &layouts).unwrap()
    }

    #[test]
    fn target_level_stays_in_range() {
        assert_eq!(target_level(0, 1, 2), Some(1));
        assert_eq!(target_level(1, -1, 2), Some(0));
        assert_eq!(target_level(0, -1, 2), None);
        assert_eq!(target_level(1, 1, 2), None);
    }

    #[test]
    fn forward_lands_on_backward_door_and_back_again() {
        let mut state = campaign(&[&["P_N"], &["__", "_V"]]);

        let (change, _) = apply_level_change(&mut state, 1);
        assert_eq!(
            change,
            LevelChange::Changed {
                from: 0,
                to: 1,
                entry: Position::new(1, 1)
            }
        );
        assert_eq!(state.current_level(), 1);
        assert_eq!(state.player.character.level, 1);

        let (change, _) = apply_level_change(&mut state, -1);
        assert_eq!(
            change,
            LevelChange::Changed {
                from: 1,
                to: 0,
                entry: Position::new(2, 0)
            }
        );
    }

    #[test]
    fn out_of_range_change_is_rejected() {
        let mut state = campaign(&[&["P_N"]]);
        let (change, abandoned) = apply_level_change(&mut state, 1);
        assert_eq!(change, LevelChange::Rejected { from: 0, offset: 1 });
        assert!(abandoned.is_empty());
        assert_eq!(state.current_level(), 0);
        assert_eq!(state.player.position(), Position::ORIGIN);
    }

    #[test]
    fn armed_bombs_are_abandoned_and_credited() {
        let mut state = campaign(&[&["P_N"], &["V_"]]);
        let id = bomb::arm_bomb(&mut state, Tick(4000)).unwrap();
        bomb::register_placed_bomb(&mut state).unwrap();
        assert_eq!(state.player.bomb_bag(), 0);

        let (_, abandoned) = apply_level_change(&mut state, 1);
        assert_eq!(abandoned, vec![id]);
        assert_eq!(state.player.bomb_bag(), 1);
        assert!(state.player.bombs().is_empty());
        assert!(state.level(0).unwrap().is_empty_at(Position::ORIGIN));
    }

    #[test]
    fn entry_falls_back_to_current_coordinates_then_origin() {
        let mut state = campaign(&[&["__P_N"], &["___"]]);
        state.player.character.move_to(Position::new(1, 0));
        let (change, _) = apply_level_change(&mut state, 1);
        assert!(matches!(
            change,
            LevelChange::Changed { entry, .. } if entry == Position::new(1, 0)
        ));

        let mut state = campaign(&[&["___PN"], &["___"]]);
        let (change, _) = apply_level_change(&mut state, 1);
        assert!(matches!(change, LevelChange::Changed { entry, .. } if entry == Position::ORIGIN));
    }
}
