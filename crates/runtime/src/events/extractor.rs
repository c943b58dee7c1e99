//! Event extraction from tick reports.

use bomb_core::{GameState, LevelChange, TickReport};

use super::game_event::GameEvent;

/// Extract high-level game events from a tick report.
///
/// `state` is the state after the tick; it supplies the cell of a bomb placed
/// this tick.
///
/// # Event Ordering
///
/// Events follow the tick pipeline:
/// 1. Level change and abandoned bombs
/// 2. Player movement and interactions
/// 3. Bomb placement
/// 4. Collision damage
/// 5. Explosions with their destroyed decor and damage
/// 6. Terminal outcome
pub fn extract_events(report: &TickReport, state: &GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match report.level_change {
        Some(LevelChange::Changed { from, to, entry }) => {
            events.push(GameEvent::LevelChanged { from, to, entry });
        }
        Some(LevelChange::Rejected { from, offset }) => {
            events.push(GameEvent::LevelChangeRejected { from, offset });
        }
        None => {}
    }
    events.extend(
        report
            .abandoned_bombs
            .iter()
            .map(|bomb| GameEvent::BombAbandoned { bomb: *bomb }),
    );

    if let Some(moved) = report.moved {
        events.push(GameEvent::PlayerMoved {
            from: moved.from,
            to: moved.to,
        });
    }
    events.extend(report.taken.iter().map(|taken| GameEvent::DecorTaken {
        position: taken.position,
        kind: taken.kind,
        interaction: taken.interaction,
    }));

    if let Some(bomb) = report.placed_bomb {
        // A bomb placed and blown up in the same tick is no longer owned.
        let position = state
            .player
            .bomb(bomb)
            .map(|armed| armed.position)
            .or_else(|| {
                report
                    .explosions
                    .iter()
                    .find(|explosion| explosion.bomb == bomb)
                    .map(|explosion| explosion.origin)
            })
            .unwrap_or_else(|| state.player.position());
        events.push(GameEvent::BombPlaced { bomb, position });
    }

    let damage_event = |damage: &bomb_core::Damage| GameEvent::CharacterDamaged {
        target: damage.target,
        position: damage.position,
        cause: damage.cause,
        lives_left: damage.lives_left,
    };

    events.extend(report.collisions.iter().map(damage_event));

    for explosion in &report.explosions {
        events.push(GameEvent::BombExploded {
            bomb: explosion.bomb,
            origin: explosion.origin,
            cells: explosion.cells.clone(),
            chained: explosion.chained.clone(),
        });
        events.extend(
            explosion
                .destroyed
                .iter()
                .map(|destroyed| GameEvent::DecorDestroyed {
                    position: destroyed.position,
                    kind: destroyed.kind,
                }),
        );
        events.extend(explosion.damage.iter().map(damage_event));
    }

    if let Some(outcome) = report.outcome {
        events.push(GameEvent::GameOver {
            outcome,
            message: outcome.message(),
        });
    }

    events
}
