//! Game events derived from engine tick reports.
mod extractor;
mod game_event;

pub use extractor::extract_events;
pub use game_event::GameEvent;
