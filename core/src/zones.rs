//! Fixed map areas with special mining behaviour.

use crate::client::GameClient;
use crate::events::GameState;

/// Map regions that make up the Motherlode Mine.
pub static MOTHERLODE_MAP_REGIONS: phf::Set<i32> = phf::phf_set! {
    14679i32, 14680i32, 14681i32,
    14935i32, 14936i32, 14937i32,
    15191i32, 15192i32, 15193i32,
};

/// True when the player is logged in and every loaded region belongs to the
/// Motherlode Mine.
///
/// An empty region list is not a match, unlike a plain "all regions are in
/// the set" test, which would hold vacuously.
pub fn in_motherlode_mine(client: &impl GameClient) -> bool {
    if client.game_state() != GameState::LoggedIn {
        return false;
    }
    let regions = client.map_regions();
    !regions.is_empty()
        && regions
            .iter()
            .all(|region| MOTHERLODE_MAP_REGIONS.contains(region))
}
