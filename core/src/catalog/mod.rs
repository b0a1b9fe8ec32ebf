//! Static rock metadata.
//!
//! Every minable rock the tracker knows about is a [`RockType`]. A rock can
//! appear under several object ids (different mines use different models),
//! so object id lookup goes through a perfect-hash table built at compile
//! time.

mod rocks;

use chrono::TimeDelta;
use rockwatch_types::WorldRock;

pub use rocks::{ORE_NAMES, ROCK_OBJECT_IDS};

/// Coarse respawn speed of a rock.
///
/// Actual respawn times vary with world population; the nominal duration is
/// only used to estimate the remaining time and to detect stale timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RespawnClass {
    /// Clay, copper, tin
    Rapid,
    /// Iron
    Short,
    /// Silver, coal, gold, amethyst
    Moderate,
    /// Mithril
    Long,
    /// Adamantite
    VeryLong,
    /// Runite
    Extended,
}

impl RespawnClass {
    pub fn nominal_respawn(self) -> TimeDelta {
        match self {
            Self::Rapid => TimeDelta::milliseconds(2_400),
            Self::Short => TimeDelta::milliseconds(5_400),
            Self::Moderate => TimeDelta::seconds(60),
            Self::Long => TimeDelta::minutes(2),
            Self::VeryLong => TimeDelta::minutes(4),
            Self::Extended => TimeDelta::minutes(12),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RockType {
    Clay,
    Copper,
    Tin,
    Iron,
    Silver,
    Coal,
    Gold,
    Mithril,
    Adamantite,
    Runite,
    Amethyst,
}

impl RockType {
    pub const COUNT: usize = 11;

    pub const ALL: [RockType; Self::COUNT] = [
        RockType::Clay,
        RockType::Copper,
        RockType::Tin,
        RockType::Iron,
        RockType::Silver,
        RockType::Coal,
        RockType::Gold,
        RockType::Mithril,
        RockType::Adamantite,
        RockType::Runite,
        RockType::Amethyst,
    ];

    /// Position in [`RockType::ALL`], used to index per-rock arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Clay => "Clay",
            Self::Copper => "Copper",
            Self::Tin => "Tin",
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

    /// Object ids this rock can appear as.
    pub fn object_ids(self) -> &'static [u32] {
        match self {
            Self::Clay => &[7454, 7487, 11362, 11363],
            Self::Copper => &[7453, 7484, 10943, 11161],
            Self::Tin => &[7485, 7486, 11360, 11361],
            Self::Iron => &[7455, 7488, 11364, 11365],
            Self::Silver => &[7457, 7490, 11368, 11369],
            Self::Coal => &[7456, 7489, 11366, 11367],
            Self::Gold => &[7458, 7491, 11370, 11371],
            Self::Mithril => &[7459, 7492, 11372, 11373],
            Self::Adamantite => &[7460, 7493, 11374, 11375],
            Self::Runite => &[7461, 7494, 11376, 11377],
            Self::Amethyst => &[11388, 11389],
        }
    }

    /// Mining level needed to mine this rock.
    pub fn required_level(self) -> u32 {
        match self {
            Self::Clay | Self::Copper | Self::Tin => 1,
            Self::Iron => 15,
            Self::Silver => 20,
            Self::Coal => 30,
            Self::Gold => 40,
            Self::Mithril => 55,
            Self::Adamantite => 70,
            Self::Runite => 85,
            Self::Amethyst => 92,
        }
    }

    pub fn respawn_class(self) -> RespawnClass {
        match self {
            Self::Clay | Self::Copper | Self::Tin => RespawnClass::Rapid,
            Self::Iron => RespawnClass::Short,
            Self::Silver | Self::Coal | Self::Gold | Self::Amethyst => RespawnClass::Moderate,
            Self::Mithril => RespawnClass::Long,
            Self::Adamantite => RespawnClass::VeryLong,
            Self::Runite => RespawnClass::Extended,
        }
    }

    pub fn respawn_time(self) -> TimeDelta {
        self.respawn_class().nominal_respawn()
    }

    /// Cross-world tracking category, if this rock can be carried across hops.
    pub fn world_rock(self) -> Option<WorldRock> {
        match self {
            Self::Clay | Self::Copper | Self::Tin => None,
            Self::Iron => Some(WorldRock::Iron),
            Self::Silver => Some(WorldRock::Silver),
            Self::Coal => Some(WorldRock::Coal),
            Self::Gold => Some(WorldRock::Gold),
            Self::Mithril => Some(WorldRock::Mithril),
            Self::Adamantite => Some(WorldRock::Adamantite),
            Self::Runite => Some(WorldRock::Runite),
            Self::Amethyst => Some(WorldRock::Amethyst),
        }
    }
}

impl std::fmt::Display for RockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Find the rock an object id belongs to. `None` for anything that isn't a
/// tracked rock.
pub fn lookup_by_id(object_id: u32) -> Option<RockType> {
    ROCK_OBJECT_IDS.get(&object_id).copied()
}

/// Find a rock by ore name, as it appears in chat ("iron", "Runite ore").
pub fn lookup_by_name(ore_name: &str) -> Option<RockType> {
    let normalized = normalize_ore_name(ore_name);
    ORE_NAMES.get(normalized.as_str()).copied()
}

/// Rock type tracked by a cross-world category.
pub fn lookup_category(world_rock: WorldRock) -> Option<RockType> {
    RockType::ALL
        .into_iter()
        .find(|rock| rock.world_rock() == Some(world_rock))
}

fn normalize_ore_name(name: &str) -> String {
    let lower = name.trim().replace('.', "").to_lowercase();
    let trimmed = lower.trim();
    trimmed
        .strip_suffix(" ore")
        .or_else(|| trimmed.strip_suffix(" rocks"))
        .or_else(|| trimmed.strip_suffix(" rock"))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
