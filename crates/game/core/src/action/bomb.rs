//! Bomb placement, fuse timers and blast propagation.

use std::collections::{BTreeSet, VecDeque};

use crate::state::{
    BlastEffect, Bomb, BombId, Decor, DecorKind, Direction, GameState, GridError, Position, Tick,
};

use super::{Damage, DamageCause};

/// Decor destroyed by a blast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destroyed {
    pub position: Position,
    pub kind: DecorKind,
}

/// Everything one detonating bomb did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explosion {
    pub bomb: BombId,
    pub origin: Position,
    /// Origin first, then each direction outward in [`Direction::ALL`] order.
    pub cells: Vec<Position>,
    pub destroyed: Vec<Destroyed>,
    /// Bombs this blast force-detonated.
    pub chained: Vec<BombId>,
    pub damage: Vec<Damage>,
}

impl Explosion {
    pub fn affects(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

/// Arms a bomb on the player's cell if the bag allows it.
///
/// The bomb is owned by the player immediately but only occupies the grid
/// once [`register_placed_bomb`] runs later in the tick. An exhausted bag or
/// an occupied cell silently rejects the request.
pub(crate) fn arm_bomb(state: &mut GameState, fuse: Tick) -> Option<BombId> {
    let position = state.player.position();
    if state.player.bomb_bag() <= 0 || !state.grid().is_empty_at(position) {
        return None;
    }

    let id = state.allocate_bomb_id();
    let bomb = Bomb::new(
        id,
        position,
        state.current_level(),
        state.player.bomb_range(),
        fuse,
    );
    state.player.arm(bomb).then_some(id)
}

/// Puts the bomb armed this tick on its grid cell.
pub(crate) fn register_placed_bomb(state: &mut GameState) -> Result<Option<BombId>, GridError> {
    let Some(id) = state.player.take_placed_bomb() else {
        return Ok(None);
    };
    // Released in between, e.g. by a level change.
    let Some(bomb) = state.player.bomb(id).copied() else {
        return Ok(None);
    };
    let Some(grid) = state.level_mut(bomb.level) else {
        return Ok(None);
    };

    grid.set(bomb.position, Decor::new(DecorKind::Bomb(id)))?;
    Ok(Some(id))
}

/// Advances every fuse by `elapsed`.
///
/// Bomb decor is flagged modified whenever its displayed countdown changes.
/// Returns the bombs that are due to detonate.
pub(crate) fn advance_bombs(state: &mut GameState, elapsed: Tick) -> Vec<BombId> {
    let mut due = Vec::new();
    let mut redraw = Vec::new();

    for bomb in state.player.bombs_mut() {
        let advance = bomb.advance(elapsed);
        if advance.detonate {
            due.push(bomb.id);
        }
        if advance.countdown_changed {
            redraw.push((bomb.level, bomb.position));
        }
    }

    for (level, position) in redraw {
        if let Some(decor) = state.level_mut(level).and_then(|grid| grid.get_mut(position)) {
            decor.set_modified();
        }
    }

    due
}

/// Detonates every bomb in the `Detonating` phase, following chain reactions
/// transitively. Each bomb explodes at most once per call.
pub(crate) fn resolve_explosions(state: &mut GameState) -> Vec<Explosion> {
    let mut queue: VecDeque<BombId> = state
        .player
        .bombs()
        .iter()
        .filter(|bomb| bomb.is_detonating())
        .map(|bomb| bomb.id)
        .collect();
    let mut seen: BTreeSet<BombId> = queue.iter().copied().collect();
    let mut explosions = Vec::new();

    while let Some(id) = queue.pop_front() {
        let Some(bomb) = state.player.release_bomb(id) else {
            continue;
        };
        let explosion = detonate(state, &bomb, &mut seen, &mut queue);
        explosions.push(explosion);
    }

    explosions
}

fn detonate(
    state: &mut GameState,
    bomb: &Bomb,
    seen: &mut BTreeSet<BombId>,
    queue: &mut VecDeque<BombId>,
) -> Explosion {
    let level = bomb.level;
    let owns_cell = state
        .level(level)
        .and_then(|grid| grid.get(bomb.position))
        .is_some_and(|decor| decor.kind() == DecorKind::Bomb(bomb.id));
    if owns_cell {
        state.remove_decor(level, bomb.position);
    }

    let mut explosion = Explosion {
        bomb: bomb.id,
        origin: bomb.position,
        cells: vec![bomb.position],
        destroyed: Vec::new(),
        chained: Vec::new(),
        damage: Vec::new(),
    };

    for direction in Direction::ALL {
        for distance in 1..=bomb.range {
            let target = bomb.position.offset(direction, distance as i32);
            let Some(grid) = state.level(level) else {
                break;
            };
            if !grid.inside(target) {
                break;
            }
            explosion.cells.push(target);

            let Some(kind) = grid.get(target).map(Decor::kind) else {
                continue;
            };
            match kind.blast_effect() {
                BlastEffect::Pass => {}
                BlastEffect::Destroy => {
                    state.remove_decor(level, target);
                    explosion.destroyed.push(Destroyed {
                        position: target,
                        kind,
                    });
                }
                BlastEffect::DestroyAndStop => {
                    state.remove_decor(level, target);
                    explosion.destroyed.push(Destroyed {
                        position: target,
                        kind,
                    });
                    break;
                }
                BlastEffect::Stop => break,
                BlastEffect::Chain => {
                    if let DecorKind::Bomb(other) = kind
                        && seen.insert(other)
                    {
                        if let Some(chained) = state.player.bomb_mut(other) {
                            chained.trigger();
                        }
                        explosion.chained.push(other);
                        queue.push_back(other);
                    }
                }
            }
        }
    }

    explosion.damage = damage_characters(state, &explosion);
    explosion
}

/// One unit of damage to each live character standing in the blast.
fn damage_characters(state: &mut GameState, explosion: &Explosion) -> Vec<Damage> {
    let level = state.current_level();
    let cause = DamageCause::Explosion(explosion.bomb);
    let mut damage = Vec::new();

    let player = &mut state.player.character;
    if player.is_alive() && explosion.affects(player.position) {
        let lives_left = player.damage();
        damage.push(Damage::new(player, cause, lives_left));
    }

    for monster in state.monsters_mut() {
        if monster.level == level && monster.is_alive() && explosion.affects(monster.position) {
            let lives_left = monster.damage();
            damage.push(Damage::new(monster, cause, lives_left));
        }
    }

    damage
}
