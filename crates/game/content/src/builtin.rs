//! Built-in two-level demo campaign.

use bomb_core::{InitializationError, LevelLayout};

/// Rows of each demo level, top to bottom.
///
/// Level 0 hides a key behind a box and guards the locked door with a
/// monster. Level 1 holds the princess.
pub const DEMO_LEVELS: &[&[&str]] = &[
    &[
        "SSSSSSSS",
        "SP__B_KS",
        "S_TT_T_S",
        "S>_+__MS",
        "S_T_TT_S",
        "S_____nS",
        "SSSSSSSS",
    ],
    &[
        "SSSSSSS",
        "SV_B__S",
        "S_S_S_S",
        "S_H_M_S",
        "S_S_S<S",
        "S___-WS",
        "SSSSSSS",
    ],
];

/// Parses [`DEMO_LEVELS`].
pub fn demo_levels() -> Result<Vec<LevelLayout>, InitializationError> {
    DEMO_LEVELS
        .iter()
        .map(|rows| LevelLayout::from_rows(*rows))
        .collect()
}
