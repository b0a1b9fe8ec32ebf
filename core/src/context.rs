//! Mutable tracking state for one running session.
//!
//! Built when the tracker starts and torn down when it stops; nothing here
//! outlives the process.

use chrono::NaiveDateTime;
use hashbrown::HashMap;
use rockwatch_types::WorldRock;

use crate::events::TileObject;
use crate::session::SessionCounters;
use crate::tracking::{TrackedRock, WorldTracker};

#[derive(Debug, Clone)]
pub struct TrackingContext {
    /// Depleted rocks in the current world, keyed by object instance.
    /// Cleared on every map load.
    pub(crate) ores: HashMap<TileObject, TrackedRock>,
    pub(crate) session: SessionCounters,
    /// Present only while a cross-world category is configured
    pub(crate) world_tracker: Option<WorldTracker>,
    /// Start of the most recent map load
    pub(crate) last_load_at: Option<NaiveDateTime>,
    pub(crate) mining_level: u32,
}

impl TrackingContext {
    pub fn new(track_world_rock: WorldRock, mining_level: u32) -> Self {
        Self {
            ores: HashMap::new(),
            session: SessionCounters::new(),
            world_tracker: WorldTracker::for_category(track_world_rock),
            last_load_at: None,
            mining_level,
        }
    }

    pub fn ores(&self) -> &HashMap<TileObject, TrackedRock> {
        &self.ores
    }

    pub fn session(&self) -> &SessionCounters {
        &self.session
    }

    pub fn world_tracker(&self) -> Option<&WorldTracker> {
        self.world_tracker.as_ref()
    }

    pub fn last_load_at(&self) -> Option<NaiveDateTime> {
        self.last_load_at
    }

    pub fn mining_level(&self) -> u32 {
        self.mining_level
    }

    /// Replace the world tracker for a new category. Anything carried for
    /// the previous category is dropped.
    pub(crate) fn reset_world_tracker(&mut self, track_world_rock: WorldRock) {
        if let Some(old) = &self.world_tracker
            && old.world_count() > 0
        {
            tracing::debug!(
                previous = old.tracking().label(),
                dropped_worlds = old.world_count(),
                "Discarding carried world rocks"
            );
        }
        self.world_tracker = WorldTracker::for_category(track_world_rock);
    }

    pub(crate) fn teardown(&mut self) {
        self.ores.clear();
        self.session = SessionCounters::new();
        self.world_tracker = None;
        self.last_load_at = None;
    }
}
