//! User-facing mining settings.

use serde::{Deserialize, Serialize};

/// Rock category whose respawn timers are carried across world hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorldRock {
    /// Cross-world tracking disabled
    #[default]
    None,
    Iron,
    Silver,
    Coal,
    Gold,
    Mithril,
    Adamantite,
    Runite,
    Amethyst,
}

impl WorldRock {
    pub const ALL: [WorldRock; 9] = [
        WorldRock::None,
        WorldRock::Iron,
        WorldRock::Silver,
        WorldRock::Coal,
        WorldRock::Gold,
        WorldRock::Mithril,
        WorldRock::Adamantite,
        WorldRock::Runite,
        WorldRock::Amethyst,
    ];

    pub fn is_none(self) -> bool {
        self == WorldRock::None
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Iron => "Iron",
            Self::Silver => "Silver",
            Self::Coal => "Coal",
            Self::Gold => "Gold",
            Self::Mithril => "Mithril",
            Self::Adamantite => "Adamantite",
            Self::Runite => "Runite",
            Self::Amethyst => "Amethyst",
        }
    }
}

/// Mining plugin settings.
///
/// Every field has a default so partial TOML files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Rock type to keep timers for after hopping away from a world
    #[serde(default)]
    pub track_world_rock: WorldRock,

    /// Minutes without mining a rock type before its session stats reset
    #[serde(default = "default_stat_timeout")]
    pub stat_timeout_minutes: u32,

    /// Draw respawn timers over depleted rocks
    #[serde(default = "default_true")]
    pub show_respawn_timers: bool,

    /// Draw the per-session mined count panel
    #[serde(default = "default_true")]
    pub show_session_stats: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            track_world_rock: WorldRock::None,
            stat_timeout_minutes: default_stat_timeout(),
            show_respawn_timers: true,
            show_session_stats: true,
        }
    }
}

fn default_stat_timeout() -> u32 {
    5
}

fn default_true() -> bool {
    true
}
