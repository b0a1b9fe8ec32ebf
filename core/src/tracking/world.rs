use chrono::NaiveDateTime;
use hashbrown::HashMap;

use crate::catalog::RockType;
use crate::events::TileObject;

use super::TrackedRock;

/// Rock timers left behind in one world instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldState {
    pub world: i32,
    rocks: HashMap<TileObject, TrackedRock>,
}

impl WorldState {
    pub fn new(world: i32) -> Self {
        Self {
            world,
            rocks: HashMap::new(),
        }
    }

    pub fn rocks(&self) -> &HashMap<TileObject, TrackedRock> {
        &self.rocks
    }

    pub fn len(&self) -> usize {
        self.rocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rocks.is_empty()
    }

    /// Insert or overwrite the timer for `object`.
    ///
    /// Callers purge negatives first; purging after would throw away the
    /// entry just added if it is already past its nominal respawn.
    pub fn insert(&mut self, object: TileObject, rock: TrackedRock) {
        self.rocks.insert(object, rock);
    }

    /// Drop entries that can no longer be useful: rocks of a type other than
    /// `tracking`, and rocks whose nominal respawn time has passed.
    ///
    /// Returns the number of entries removed.
    pub fn purge_negatives(&mut self, tracking: Option<RockType>, now: NaiveDateTime) -> usize {
        let before = self.rocks.len();
        self.rocks
            .retain(|_, tracked| Some(tracked.rock) == tracking && !tracked.has_respawned(now));
        let removed = before - self.rocks.len();
        if removed > 0 {
            tracing::trace!(world = self.world, removed, "Purged negative rocks");
        }
        removed
    }

    pub fn into_rocks(self) -> HashMap<TileObject, TrackedRock> {
        self.rocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ObjectKind, WorldPoint};
    use chrono::{NaiveDate, TimeDelta};

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn object(handle: u64, x: i32) -> TileObject {
        TileObject::new(handle, 11376, WorldPoint::new(x, 3000, 0), ObjectKind::Ground)
    }

    #[test]
    fn test_purge_removes_other_types() {
        let mut state = WorldState::new(302);
        state.insert(object(1, 10), TrackedRock::new(RockType::Runite, t0()));
        state.insert(object(2, 11), TrackedRock::new(RockType::Adamantite, t0()));

        let removed = state.purge_negatives(Some(RockType::Runite), t0());

        assert_eq!(removed, 1);
        assert_eq!(state.len(), 1);
        assert!(state.rocks().contains_key(&object(1, 10)));
    }

    #[test]
    fn test_purge_removes_respawned_rocks() {
        let mut state = WorldState::new(302);
        state.insert(object(1, 10), TrackedRock::new(RockType::Runite, t0()));
        state.insert(
            object(2, 11),
            TrackedRock::new(RockType::Runite, t0() + TimeDelta::minutes(10)),
        );

        let removed = state.purge_negatives(Some(RockType::Runite), t0() + TimeDelta::minutes(12));

        assert_eq!(removed, 1);
        assert!(state.rocks().contains_key(&object(2, 11)));
    }

    #[test]
    fn test_purge_without_category_clears_everything() {
        let mut state = WorldState::new(302);
        state.insert(object(1, 10), TrackedRock::new(RockType::Runite, t0()));

        assert_eq!(state.purge_negatives(None, t0()), 1);
        assert!(state.is_empty());
    }

    #[test]
    fn test_insert_after_purge_keeps_new_entry() {
        let mut state = WorldState::new(302);
        let now = t0() + TimeDelta::minutes(13);
        state.insert(object(1, 10), TrackedRock::new(RockType::Runite, t0()));

        state.purge_negatives(Some(RockType::Runite), now);
        state.insert(object(2, 11), TrackedRock::new(RockType::Runite, now));

        assert_eq!(state.len(), 1);
        assert!(state.rocks().contains_key(&object(2, 11)));
    }
}
