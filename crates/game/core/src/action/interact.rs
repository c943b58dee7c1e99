//! Decor × player interaction table.
//!
//! Every decor kind maps to exactly one effect on the player in [`take`].
//! Adding a kind means adding one match arm; the player type does not change.

use crate::state::{Character, Decor, DecorKind, GameState, PlayerState, Position};

use super::{Damage, DamageCause};

/// What happened when the player took a decor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    /// Nothing to take.
    Ignored,
    /// The decor applied its effect and must leave the grid.
    Consumed,
    /// A locked door was opened with one key. The player stays put.
    DoorUnlocked,
    /// An open door was used; the level changes on the next tick.
    LevelChange(i32),
}

/// Applies `decor`'s effect to `player`.
///
/// The caller removes consumed decor and schedules level changes; this
/// function only touches the two records it is given.
pub fn take(decor: &mut Decor, player: &mut PlayerState) -> Interaction {
    match decor.kind() {
        DecorKind::Key => {
            player.gain_key();
            Interaction::Consumed
        }
        DecorKind::Heart => {
            player.character.heal();
            Interaction::Consumed
        }
        DecorKind::Princess => {
            player.win();
            Interaction::Consumed
        }
        DecorKind::BombRange(delta) => {
            player.adjust_bomb_range(delta);
            Interaction::Consumed
        }
        DecorKind::BombNumber(delta) => {
            player.adjust_bomb_bag(delta);
            Interaction::Consumed
        }
        DecorKind::Door { locked: true, .. } => {
            if player.spend_key() {
                decor.unlock();
                Interaction::DoorUnlocked
            } else {
                Interaction::Ignored
            }
        }
        DecorKind::Door {
            locked: false,
            offset,
        } => Interaction::LevelChange(offset),
        DecorKind::Stone | DecorKind::Tree | DecorKind::Box | DecorKind::Bomb(_) => {
            Interaction::Ignored
        }
    }
}

/// Record of one resolved interaction on the current level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Taken {
    pub position: Position,
    /// Decor kind as it was before the interaction.
    pub kind: DecorKind,
    pub interaction: Interaction,
}

/// Runs [`take`] on the decor at `position` of the current level and applies
/// the grid-level consequences: consumed decor is removed and open doors
/// schedule a level change.
pub(crate) fn resolve_at(state: &mut GameState, position: Position) -> Option<Taken> {
    let (grid, player) = state.grid_and_player_mut();
    let decor = grid.get_mut(position)?;
    let kind = decor.kind();
    let interaction = take(decor, player);

    match interaction {
        Interaction::Consumed => {
            let level = state.current_level();
            state.remove_decor(level, position);
        }
        Interaction::LevelChange(offset) => state.request_level_change(offset),
        Interaction::Ignored | Interaction::DoorUnlocked => {}
    }

    Some(Taken {
        position,
        kind,
        interaction,
    })
}

/// Uses the door on the cell the player faces. Anything else is left alone.
pub(crate) fn interact_facing(state: &mut GameState) -> Option<Taken> {
    let target = state.player.position().step(state.player.direction());
    let is_door = state
        .grid()
        .get(target)
        .is_some_and(|decor| matches!(decor.kind(), DecorKind::Door { .. }));
    if !is_door {
        return None;
    }
    resolve_at(state, target)
}

/// Contact with a monster: the player loses a life and the monster dies.
///
/// The player is not displaced by this interaction.
pub fn take_monster(monster: &mut Character, player: &mut PlayerState) -> [Damage; 2] {
    let monster_lives = monster.damage();
    let player_lives = player.character.damage();
    [
        Damage::new(monster, DamageCause::Collision, monster_lives),
        Damage::new(&player.character, DamageCause::Collision, player_lives),
    ]
}

/// Applies [`take_monster`] for every live monster sharing the player's cell.
pub(crate) fn resolve_collisions(state: &mut GameState) -> Vec<Damage> {
    let level = state.current_level();
    let (monsters, player) = state.monsters_and_player_mut();
    let position = player.position();

    monsters
        .iter_mut()
        .filter(|monster| monster.level == level && monster.is_alive())
        .filter(|monster| monster.position == position)
        .flat_map(|monster| take_monster(monster, player))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    fn player() -> PlayerState {
        PlayerState::new(Position::ORIGIN, 3, 1, 1)
    }

    #[test]
    fn bonuses_are_consumed() {
        let mut player = player();

        assert_eq!(take(&mut Decor::new(DecorKind::Key), &mut player), Interaction::Consumed);
        assert_eq!(player.keys(), 1);

        assert_eq!(take(&mut Decor::new(DecorKind::Heart), &mut player), Interaction::Consumed);
        assert_eq!(player.lives(), 4);

        take(&mut Decor::new(DecorKind::BombRange(1)), &mut player);
        assert_eq!(player.bomb_range(), 2);

        take(&mut Decor::new(DecorKind::BombNumber(-1)), &mut player);
        assert_eq!(player.bomb_bag(), 0);

        assert!(!player.has_won());
        assert_eq!(take(&mut Decor::new(DecorKind::Princess), &mut player), Interaction::Consumed);
        assert!(player.has_won());
    }

    #[test]
    fn locked_door_needs_a_key() {
        let mut player = player();
        let mut door = Decor::new(DecorKind::Door { locked: true, offset: 1 });

        assert_eq!(take(&mut door, &mut player), Interaction::Ignored);
        assert_eq!(door.kind(), DecorKind::Door { locked: true, offset: 1 });

        take(&mut Decor::new(DecorKind::Key), &mut player);
        assert_eq!(take(&mut door, &mut player), Interaction::DoorUnlocked);
        assert_eq!(player.keys(), 0);
        assert_eq!(door.kind(), DecorKind::Door { locked: false, offset: 1 });

        assert_eq!(take(&mut door, &mut player), Interaction::LevelChange(1));
        assert_eq!(player.keys(), 0);
    }

    #[test]
    fn open_door_never_costs_a_key() {
        let mut player = player();
        take(&mut Decor::new(DecorKind::Key), &mut player);
        let mut door = Decor::new(DecorKind::Door { locked: false, offset: -1 });
        assert_eq!(take(&mut door, &mut player), Interaction::LevelChange(-1));
        assert_eq!(player.keys(), 1);
    }

    #[test]
    fn obstacles_are_ignored() {
        let mut player = player();
        for kind in [DecorKind::Stone, DecorKind::Tree, DecorKind::Box] {
            assert_eq!(take(&mut Decor::new(kind), &mut player), Interaction::Ignored);
        }
    }

    #[test]
    fn interact_only_uses_the_faced_door() {
        use crate::config::GameConfig;
        use crate::env::LevelLayout;
        use crate::state::Direction;

        let layout = LevelLayout::from_rows(&["KPN"]).unwrap();
        let mut state = GameState::new(&GameConfig::default(), &[layout]).unwrap();

        // Facing down, out of the grid.
        assert!(interact_facing(&mut state).is_none());

        state.player.character.face(Direction::Left);
        assert!(interact_facing(&mut state).is_none());
        assert_eq!(state.player.keys(), 0);

        state.player.character.face(Direction::Right);
        let taken = interact_facing(&mut state).unwrap();
        assert_eq!(taken.interaction, Interaction::LevelChange(1));
        assert_eq!(state.pending_level_change(), Some(1));
        assert_eq!(state.player.position(), Position::new(1, 0));
    }

    #[test]
    fn every_colocated_monster_collides() {
        use crate::config::GameConfig;
        use crate::env::LevelLayout;

        let layout = LevelLayout::from_rows(&["PM", "M_"]).unwrap();
        let mut state = GameState::new(&GameConfig::default(), &[layout]).unwrap();
        assert!(resolve_collisions(&mut state).is_empty());

        // Both monsters end up on the player's cell.
        for monster in state.monsters_mut() {
            monster.move_to(Position::ORIGIN);
        }
        let damage = resolve_collisions(&mut state);
        assert_eq!(damage.len(), 4);
        assert_eq!(state.player.lives(), 1);
        assert_eq!(state.active_monsters().count(), 0);

        // Dead monsters do not collide again.
        assert!(resolve_collisions(&mut state).is_empty());
    }

    #[test]
    fn monster_contact_hurts_both() {
        let mut player = player();
        let mut monster = Character::monster(Position::new(1, 0), 0);
        let [monster_hit, player_hit] = take_monster(&mut monster, &mut player);
        assert_eq!(monster_hit.lives_left, 0);
        assert_eq!(player_hit.lives_left, 2);
        assert_eq!(player.lives(), 2);
        assert!(monster.is_deleted());
        assert_eq!(player.position(), Position::ORIGIN);
    }
}
