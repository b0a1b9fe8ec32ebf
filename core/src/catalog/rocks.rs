//! Lookup tables for the rock catalog.

use super::RockType;

/// Object id -> rock type. Must stay in sync with [`RockType::object_ids`].
pub static ROCK_OBJECT_IDS: phf::Map<u32, RockType> = phf::phf_map! {
    // Clay
    7454u32 => RockType::Clay,
    7487u32 => RockType::Clay,
    11362u32 => RockType::Clay,
    11363u32 => RockType::Clay,
    // Copper
    7453u32 => RockType::Copper,
    7484u32 => RockType::Copper,
    10943u32 => RockType::Copper,
    11161u32 => RockType::Copper,
    // Tin
    7485u32 => RockType::Tin,
    7486u32 => RockType::Tin,
    11360u32 => RockType::Tin,
    11361u32 => RockType::Tin,
    // Iron
    7455u32 => RockType::Iron,
    7488u32 => RockType::Iron,
    11364u32 => RockType::Iron,
    11365u32 => RockType::Iron,
    // Silver
    7457u32 => RockType::Silver,
    7490u32 => RockType::Silver,
    11368u32 => RockType::Silver,
    11369u32 => RockType::Silver,
    // Coal
    7456u32 => RockType::Coal,
    7489u32 => RockType::Coal,
    11366u32 => RockType::Coal,
    11367u32 => RockType::Coal,
    // Gold
    7458u32 => RockType::Gold,
    7491u32 => RockType::Gold,
    11370u32 => RockType::Gold,
    11371u32 => RockType::Gold,
    // Mithril
    7459u32 => RockType::Mithril,
    7492u32 => RockType::Mithril,
    11372u32 => RockType::Mithril,
    11373u32 => RockType::Mithril,
    // Adamantite
    7460u32 => RockType::Adamantite,
    7493u32 => RockType::Adamantite,
    11374u32 => RockType::Adamantite,
    11375u32 => RockType::Adamantite,
    // Runite
    7461u32 => RockType::Runite,
    7494u32 => RockType::Runite,
    11376u32 => RockType::Runite,
    11377u32 => RockType::Runite,
    // Amethyst
    11388u32 => RockType::Amethyst,
    11389u32 => RockType::Amethyst,
};

/// Normalized (lowercase, no suffix) ore name -> rock type.
pub static ORE_NAMES: phf::Map<&'static str, RockType> = phf::phf_map! {
    "clay" => RockType::Clay,
    "copper" => RockType::Copper,
    "tin" => RockType::Tin,
    "iron" => RockType::Iron,
    "silver" => RockType::Silver,
    "coal" => RockType::Coal,
    "gold" => RockType::Gold,
    "mithril" => RockType::Mithril,
    "adamantite" => RockType::Adamantite,
    "runite" => RockType::Runite,
    "amethyst" => RockType::Amethyst,
};
