use std::fmt;

use super::{LevelIndex, Position, Tick};

/// Identifier of a placed bomb. Allocated monotonically, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BombId(pub u32);

impl fmt::Display for BombId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bomb#{}", self.0)
    }
}

/// Countdown driven purely by logical elapsed time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    duration: Tick,
    remaining: Tick,
}

impl Timer {
    pub fn new(duration: Tick) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }

    /// Advances the countdown and returns true once it has run out.
    pub fn advance(&mut self, elapsed: Tick) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.is_expired()
    }

    pub fn remaining(&self) -> Tick {
        self.remaining
    }

    pub fn elapsed(&self) -> Tick {
        self.duration.saturating_sub(self.remaining)
    }

    pub fn duration(&self) -> Tick {
        self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == Tick::ZERO
    }
}

/// Lifecycle of a bomb. Removal from the owner's list ends it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BombPhase {
    #[default]
    Armed,
    Detonating,
}

/// A bomb armed by the player.
///
/// The matching grid cell holds `DecorKind::Bomb(id)` until detonation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bomb {
    pub id: BombId,
    pub position: Position,
    pub level: LevelIndex,
    pub range: u32,
    pub timer: Timer,
    pub phase: BombPhase,
}

/// Result of advancing a bomb's timer by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BombAdvance {
    /// The fuse ran out; the bomb must detonate this tick.
    pub detonate: bool,
    /// The displayed countdown (whole seconds) changed.
    pub countdown_changed: bool,
}

impl Bomb {
    pub fn new(id: BombId, position: Position, level: LevelIndex, range: u32, fuse: Tick) -> Self {
        Self {
            id,
            position,
            level,
            range,
            timer: Timer::new(fuse),
            phase: BombPhase::Armed,
        }
    }

    /// Single authoritative state transition for the timer path.
    ///
    /// A bomb already triggered by a chain reaction stays `Detonating`
    /// regardless of its timer.
    pub fn advance(&mut self, elapsed: Tick) -> BombAdvance {
        if self.phase == BombPhase::Detonating {
            return BombAdvance {
                detonate: true,
                countdown_changed: false,
            };
        }

        let before = self.timer.remaining().whole_seconds_ceil();
        let expired = self.timer.advance(elapsed);
        let countdown_changed = before != self.timer.remaining().whole_seconds_ceil();
        if expired {
            self.phase = BombPhase::Detonating;
        }

        BombAdvance {
            detonate: expired,
            countdown_changed,
        }
    }

    /// Forces detonation independently of the timer.
    pub fn trigger(&mut self) {
        self.phase = BombPhase::Detonating;
    }

    pub fn is_detonating(&self) -> bool {
        self.phase == BombPhase::Detonating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bomb(fuse: u64) -> Bomb {
        Bomb::new(BombId(1), Position::new(2, 2), 0, 2, Tick(fuse))
    }

    #[test]
    fn detonates_when_fuse_runs_out() {
        let mut bomb = bomb(2000);
        let step = bomb.advance(Tick(1500));
        assert!(!step.detonate);
        assert!(step.countdown_changed);
        assert_eq!(bomb.timer.remaining(), Tick(500));
        assert_eq!(bomb.timer.elapsed(), Tick(1500));

        let step = bomb.advance(Tick(700));
        assert!(step.detonate);
        assert!(bomb.is_detonating());
        assert_eq!(bomb.timer.remaining(), Tick::ZERO);
    }

    #[test]
    fn countdown_changes_only_on_second_boundaries() {
        let mut bomb = bomb(4000);
        assert!(!bomb.advance(Tick(400)).countdown_changed);
        assert!(!bomb.advance(Tick(500)).countdown_changed);
        assert!(bomb.advance(Tick(100)).countdown_changed);
    }

    #[test]
    fn triggered_bomb_detonates_without_timer() {
        let mut bomb = bomb(4000);
        bomb.trigger();
        let step = bomb.advance(Tick::ZERO);
        assert!(step.detonate);
        assert_eq!(bomb.timer.remaining(), Tick(4000));
    }
}
