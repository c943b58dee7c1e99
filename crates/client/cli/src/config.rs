//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use bomb_core::Tick;

/// Configuration required to bootstrap the terminal session.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Campaign manifest to load. The built-in demo runs when absent.
    pub campaign: Option<PathBuf>,
    /// Logical time that passes per command.
    pub tick: Tick,
}

impl CliConfig {
    pub const DEFAULT_TICK_MS: u64 = 1000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOMB_CAMPAIGN` - Path to a campaign manifest (default: built-in demo)
    /// - `BOMB_TICK_MS` - Milliseconds simulated per command (default: 1000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.campaign = env::var("BOMB_CAMPAIGN").ok().map(PathBuf::from);

        if let Some(tick_ms) = read_env::<u64>("BOMB_TICK_MS") {
            config.tick = Tick::from_millis(tick_ms.max(1));
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            campaign: None,
            tick: Tick::from_millis(Self::DEFAULT_TICK_MS),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
