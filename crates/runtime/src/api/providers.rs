//! Abstraction for sourcing player intent.
//!
//! Runtime users plug in [`IntentProvider`] implementations so the simulation
//! can run with human input, scripted fixtures, or nothing at all.
use std::collections::VecDeque;

use bomb_core::{Intent, RenderSnapshot};

/// Supplies at most one intent per tick.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed intents
/// - Testing fixtures
pub trait IntentProvider {
    /// Returns the intent for the coming tick, or `None` to let time pass.
    ///
    /// `snapshot` is the state as rendered after the previous tick.
    fn next_intent(&mut self, snapshot: &RenderSnapshot) -> Option<Intent>;
}

/// A provider that never acts. Useful for letting fuses burn down.
pub struct IdleIntentProvider;

impl IntentProvider for IdleIntentProvider {
    fn next_intent(&mut self, _snapshot: &RenderSnapshot) -> Option<Intent> {
        None
    }
}

/// FIFO queue written by an input collaborator and drained one intent per
/// tick. An empty queue yields no intent.
#[derive(Clone, Debug, Default)]
pub struct QueuedIntentProvider {
    queue: VecDeque<Intent>,
}

impl QueuedIntentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.queue.push_back(intent);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FromIterator<Intent> for QueuedIntentProvider {
    fn from_iter<I: IntoIterator<Item = Intent>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl Extend<Intent> for QueuedIntentProvider {
    fn extend<I: IntoIterator<Item = Intent>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}

impl IntentProvider for QueuedIntentProvider {
    fn next_intent(&mut self, _snapshot: &RenderSnapshot) -> Option<Intent> {
        self.queue.pop_front()
    }
}
