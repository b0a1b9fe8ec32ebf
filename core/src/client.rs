//! Read-only view of the game client the tracker runs inside.

use crate::events::{GameState, Skill};

pub trait GameClient {
    fn game_state(&self) -> GameState;

    /// Id of the world instance the player is connected to.
    fn world(&self) -> i32;

    /// Real (unboosted) level in `skill`.
    fn skill_level(&self, skill: Skill) -> u32;

    /// Ids of the currently loaded map regions.
    fn map_regions(&self) -> &[i32];
}
