use chrono::NaiveDateTime;
use hashbrown::HashMap;
use rockwatch_types::WorldRock;

use crate::catalog::{self, RockType};
use crate::events::TileObject;

use super::{TrackedRock, WorldState};

/// Holds the rock timers of every world the player hopped away from while
/// tracking one rock category.
#[derive(Debug, Clone)]
pub struct WorldTracker {
    tracking: WorldRock,
    tracking_rock: RockType,
    worlds: HashMap<i32, WorldState>,
}

impl WorldTracker {
    /// Tracker for `tracking`, or `None` when cross-world tracking is off.
    pub fn for_category(tracking: WorldRock) -> Option<Self> {
        let tracking_rock = catalog::lookup_category(tracking)?;
        Some(Self {
            tracking,
            tracking_rock,
            worlds: HashMap::new(),
        })
    }

    pub fn tracking(&self) -> WorldRock {
        self.tracking
    }

    pub fn tracking_rock(&self) -> RockType {
        self.tracking_rock
    }

    /// Whether `rock` belongs to the tracked category.
    pub fn tracks(&self, rock: RockType) -> bool {
        rock == self.tracking_rock
    }

    /// Record a rock timer for `world`.
    ///
    /// The world's existing entries are purged of negatives before the new
    /// entry goes in, never after.
    pub fn add_tracked(
        &mut self,
        world: i32,
        object: TileObject,
        mined: TrackedRock,
        now: NaiveDateTime,
    ) {
        let state = self
            .worlds
            .entry(world)
            .or_insert_with(|| WorldState::new(world));
        state.purge_negatives(Some(self.tracking_rock), now);
        state.insert(object, mined);
    }

    pub fn contains_world(&self, world: i32) -> bool {
        self.worlds.contains_key(&world)
    }

    pub fn world(&self, world: i32) -> Option<&WorldState> {
        self.worlds.get(&world)
    }

    /// Remove and return the state carried for `world`. Once the player is
    /// back on a world its timers live in the live map again.
    pub fn take_world(&mut self, world: i32) -> Option<WorldState> {
        self.worlds.remove(&world)
    }

    /// Carried worlds, for the world hopper view.
    pub fn worlds(&self) -> impl Iterator<Item = &WorldState> {
        self.worlds.values()
    }

    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }
}
