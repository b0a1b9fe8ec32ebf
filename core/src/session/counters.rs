use chrono::{NaiveDateTime, TimeDelta};

use crate::catalog::RockType;

/// Mining stats for one rock type in the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RockStats {
    pub mined: u32,
    pub first_mined_at: Option<NaiveDateTime>,
    pub last_mined_at: Option<NaiveDateTime>,
}

impl RockStats {
    /// Ores per hour since the first ore of this session. `None` until at
    /// least a second has passed since the first ore.
    pub fn per_hour(&self, now: NaiveDateTime) -> Option<f64> {
        let first = self.first_mined_at?;
        let elapsed_ms = now.signed_duration_since(first).num_milliseconds();
        if elapsed_ms < 1_000 {
            return None;
        }
        Some(self.mined as f64 * 3_600_000.0 / elapsed_ms as f64)
    }
}

/// Per-rock mined counts, reset after a period of not mining that rock.
#[derive(Debug, Clone, Default)]
pub struct SessionCounters {
    stats: [RockStats; RockType::COUNT],
}

impl SessionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_mined(&mut self, rock: RockType, now: NaiveDateTime) {
        let stats = &mut self.stats[rock.index()];
        stats.mined += 1;
        stats.first_mined_at.get_or_insert(now);
        stats.last_mined_at = Some(now);
        tracing::trace!(rock = %rock, mined = stats.mined, "Ore mined");
    }

    /// Reset every rock whose last ore is at least `timeout` old.
    /// Rocks never mined this session are left alone.
    pub fn sweep_expired(&mut self, now: NaiveDateTime, timeout: TimeDelta) {
        for rock in RockType::ALL {
            let stats = &mut self.stats[rock.index()];
            let Some(last) = stats.last_mined_at else {
                continue;
            };
            if now.signed_duration_since(last) >= timeout {
                tracing::debug!(rock = %rock, mined = stats.mined, "Mining session timed out");
                *stats = RockStats::default();
            }
        }
    }

    pub fn clear_session_for(&mut self, rock: RockType) {
        self.stats[rock.index()] = RockStats::default();
    }

    pub fn stats(&self, rock: RockType) -> &RockStats {
        &self.stats[rock.index()]
    }

    pub fn mined(&self, rock: RockType) -> u32 {
        self.stats(rock).mined
    }

    pub fn last_mined_at(&self, rock: RockType) -> Option<NaiveDateTime> {
        self.stats(rock).last_mined_at
    }

    pub fn mined_per_hour(&self, rock: RockType, now: NaiveDateTime) -> Option<f64> {
        self.stats(rock).per_hour(now)
    }

    /// Rocks with an active session, in catalog order.
    pub fn active(&self) -> impl Iterator<Item = (RockType, &RockStats)> {
        RockType::ALL
            .into_iter()
            .map(|rock| (rock, &self.stats[rock.index()]))
            .filter(|(_, stats)| stats.last_mined_at.is_some())
    }

    /// Copy of every rock's stats, in catalog order.
    pub fn snapshot(&self) -> [(RockType, RockStats); RockType::COUNT] {
        std::array::from_fn(|i| (RockType::ALL[i], self.stats[i]))
    }

    pub fn is_idle(&self) -> bool {
        self.active().next().is_none()
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
    fn test_record_mined_counts_and_stamps() {
        let mut session = SessionCounters::new();
        session.record_mined(RockType::Iron, t0());
        session.record_mined(RockType::Iron, t0() + TimeDelta::seconds(3));

        assert_eq!(session.mined(RockType::Iron), 2);
        assert_eq!(
            session.last_mined_at(RockType::Iron),
            Some(t0() + TimeDelta::seconds(3))
        );
        assert_eq!(session.stats(RockType::Iron).first_mined_at, Some(t0()));
        assert_eq!(session.mined(RockType::Coal), 0);
    }

    #[test]
    fn test_sweep_resets_only_at_or_past_timeout() {
        let mut session = SessionCounters::new();
        let timeout = TimeDelta::minutes(5);
        session.record_mined(RockType::Iron, t0());
        session.record_mined(RockType::Coal, t0() + TimeDelta::minutes(1));

        session.sweep_expired(t0() + TimeDelta::seconds(299), timeout);
        assert_eq!(session.mined(RockType::Iron), 1);

        session.sweep_expired(t0() + TimeDelta::minutes(5), timeout);
        assert_eq!(session.mined(RockType::Iron), 0);
        assert_eq!(session.last_mined_at(RockType::Iron), None);
        assert_eq!(session.mined(RockType::Coal), 1);
    }

    #[test]
    fn test_sweep_ignores_unmined_rocks() {
        let mut session = SessionCounters::new();
        session.sweep_expired(t0(), TimeDelta::zero());
        assert!(session.is_idle());
        assert_eq!(session.stats(RockType::Gold), &RockStats::default());
    }

    #[test]
    fn test_per_hour_rate() {
        let mut session = SessionCounters::new();
        for i in 0..10 {
            session.record_mined(RockType::Gold, t0() + TimeDelta::seconds(i * 36));
        }

        assert_eq!(session.mined_per_hour(RockType::Gold, t0()), None);
        let rate = session
            .mined_per_hour(RockType::Gold, t0() + TimeDelta::minutes(6))
            .unwrap();
        assert!((rate - 100.0).abs() < 1e-9);
        assert_eq!(session.mined_per_hour(RockType::Tin, t0()), None);
    }

    #[test]
    fn test_active_lists_mined_rocks_in_catalog_order() {
        let mut session = SessionCounters::new();
        session.record_mined(RockType::Runite, t0());
        session.record_mined(RockType::Copper, t0());

        let active: Vec<_> = session.active().map(|(rock, _)| rock).collect();
        assert_eq!(active, vec![RockType::Copper, RockType::Runite]);

        session.clear_session_for(RockType::Copper);
        assert_eq!(session.active().count(), 1);
    }

    #[test]
    fn test_snapshot_covers_every_rock() {
        let mut session = SessionCounters::new();
        session.record_mined(RockType::Mithril, t0());
        session.record_mined(RockType::Mithril, t0() + TimeDelta::seconds(4));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.len(), RockType::COUNT);
        for (rock, stats) in snapshot {
            if rock == RockType::Mithril {
                assert_eq!(stats.mined, 2);
                assert_eq!(stats.first_mined_at, Some(t0()));
            } else {
                assert_eq!(stats, RockStats::default());
            }
        }

        // Later mining doesn't change an earlier copy
        session.record_mined(RockType::Mithril, t0() + TimeDelta::seconds(8));
        assert_eq!(snapshot[RockType::Mithril.index()].1.mined, 2);
    }
}
