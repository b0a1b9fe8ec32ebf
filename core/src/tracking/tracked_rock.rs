use chrono::{NaiveDateTime, TimeDelta};

use crate::catalog::RockType;

/// A depleted rock waiting to respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedRock {
    pub rock: RockType,
    /// When the rock was seen despawning
    pub observed_at: NaiveDateTime,
}

impl TrackedRock {
    pub fn new(rock: RockType, observed_at: NaiveDateTime) -> Self {
        Self { rock, observed_at }
    }

    pub fn elapsed(&self, now: NaiveDateTime) -> TimeDelta {
        now.signed_duration_since(self.observed_at)
    }

    /// Estimated time until respawn. Negative once the nominal respawn time
    /// has passed.
    pub fn remaining(&self, now: NaiveDateTime) -> TimeDelta {
        self.rock.respawn_time() - self.elapsed(now)
    }

    /// True once the nominal respawn time has fully elapsed.
    pub fn has_respawned(&self, now: NaiveDateTime) -> bool {
        self.remaining(now) <= TimeDelta::zero()
    }

    /// Fraction of the respawn time elapsed, clamped to [0, 1].
    pub fn progress(&self, now: NaiveDateTime) -> f32 {
        let total = self.rock.respawn_time().num_milliseconds();
        if total <= 0 {
            return 1.0;
        }
        let elapsed = self.elapsed(now).num_milliseconds();
        (elapsed as f32 / total as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_remaining_counts_down() {
        let rock = TrackedRock::new(RockType::Runite, t0());
        let now = t0() + TimeDelta::minutes(2);

        assert_eq!(rock.elapsed(now), TimeDelta::minutes(2));
        assert_eq!(rock.remaining(now), TimeDelta::minutes(10));
        assert!(!rock.has_respawned(now));
    }

    #[test]
    fn test_has_respawned_at_exact_respawn_time() {
        let rock = TrackedRock::new(RockType::Mithril, t0());
        assert!(!rock.has_respawned(t0() + TimeDelta::seconds(119)));
        assert!(rock.has_respawned(t0() + TimeDelta::minutes(2)));
        assert!(rock.remaining(t0() + TimeDelta::minutes(3)) < TimeDelta::zero());
    }

    #[test]
    fn test_progress_is_clamped() {
        let rock = TrackedRock::new(RockType::Adamantite, t0());
        assert_eq!(rock.progress(t0()), 0.0);
        assert_eq!(rock.progress(t0() + TimeDelta::minutes(2)), 0.5);
        assert_eq!(rock.progress(t0() + TimeDelta::minutes(10)), 1.0);
        assert_eq!(rock.progress(t0() - TimeDelta::seconds(5)), 0.0);
    }
}
