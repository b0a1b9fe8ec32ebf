//! Reconciles game events with rock respawn timers.
//!
//! The coordinator owns the [`TrackingContext`] and is the only thing that
//! mutates it. Renderers read the live map and session counters through
//! the accessors here.
//!
//! # Event reactions
//!
//! | Event            | Reaction                                                   |
//! |------------------|------------------------------------------------------------|
//! | `Loading`        | clear live map, start the spawn grace window               |
//! | object spawned   | drop any timer at the same x/y (the rock came back)        |
//! | object despawned | start a timer, unless in grace window or under-levelled    |
//! | `Hopping`        | carry timers of the tracked category into the WorldTracker |
//! | `LoggedIn`       | pull this world's carried timers back into the live map    |

use chrono::{NaiveDateTime, TimeDelta};
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use rockwatch_types::MiningConfig;

use crate::catalog;
use crate::chat;
use crate::client::GameClient;
use crate::clock::{Clock, SystemClock};
use crate::context::TrackingContext;
use crate::events::{ChatKind, EventHandler, GameEvent, GameState, Skill, TileObject};
use crate::session::SessionCounters;
use crate::tracking::{TrackedRock, WorldTracker};
use crate::zones;

/// Despawns within this long after a map load are ignored. While the scene
/// is being built, rocks that were already depleted despawn and respawn and
/// would otherwise get bogus timers.
pub const SPAWN_GRACE_MS: i64 = 2_000;

pub struct TrackingCoordinator<C: GameClient, K: Clock = SystemClock> {
    config: MiningConfig,
    client: C,
    clock: K,
    context: TrackingContext,
}

impl<C: GameClient, K: Clock> TrackingCoordinator<C, K> {
    /// Start tracking. Reads the current mining level from the client.
    pub fn new(config: MiningConfig, client: C, clock: K) -> Self {
        let mining_level = client.skill_level(Skill::Mining);
        let context = TrackingContext::new(config.track_world_rock, mining_level);
        tracing::debug!(
            mining_level,
            track_world_rock = config.track_world_rock.label(),
            "Rock tracking started"
        );
        Self {
            config,
            client,
            clock,
            context,
        }
    }

    /// Stop tracking and discard all state.
    pub fn shutdown(mut self) -> C {
        self.context.teardown();
        tracing::debug!("Rock tracking stopped");
        self.client
    }

    // --- Accessors ---

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn context(&self) -> &TrackingContext {
        &self.context
    }

    /// Live depleted-rock timers for the current world.
    pub fn tracked_rocks(&self) -> &HashMap<TileObject, TrackedRock> {
        self.context.ores()
    }

    /// Timer for whatever rock sits at `(x, y)`, if any.
    pub fn tracked_at(&self, x: i32, y: i32) -> Option<&TrackedRock> {
        self.context
            .ores
            .iter()
            .find(|(object, _)| object.x() == x && object.y() == y)
            .map(|(_, tracked)| tracked)
    }

    pub fn session(&self) -> &SessionCounters {
        self.context.session()
    }

    pub fn world_tracker(&self) -> Option<&WorldTracker> {
        self.context.world_tracker()
    }

    pub fn mining_level(&self) -> u32 {
        self.context.mining_level()
    }

    pub fn in_motherlode_mine(&self) -> bool {
        zones::in_motherlode_mine(&self.client)
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    // --- Host callbacks ---

    /// React to a settings change. The world tracker is rebuilt only when
    /// the tracked category changes; any carried timers are lost.
    pub fn apply_config(&mut self, config: MiningConfig) {
        if config.track_world_rock != self.config.track_world_rock {
            tracing::debug!(
                from = self.config.track_world_rock.label(),
                to = config.track_world_rock.label(),
                "Tracked world rock changed"
            );
            self.context.reset_world_tracker(config.track_world_rock);
        }
        self.config = config;
    }

    /// Periodic housekeeping, called once per second by the host.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let timeout = TimeDelta::minutes(i64::from(self.config.stat_timeout_minutes));
        self.context.session.sweep_expired(now, timeout);
    }

    // --- Event handlers ---

    fn handle_game_state(&mut self, state: GameState) {
        match state {
            GameState::Hopping => self.carry_world_rocks(),
            GameState::Loading => {
                let now = self.clock.now();
                if !self.context.ores.is_empty() {
                    tracing::trace!(cleared = self.context.ores.len(), "Map loading, clearing rocks");
                }
                self.context.ores.clear();
                self.context.last_load_at = Some(now);
            }
            GameState::LoggedIn => {
                self.refresh_mining_level();
                self.restore_world_rocks();
            }
            GameState::LoginScreen => {}
        }
    }

    fn handle_object_spawned(&mut self, object: &TileObject) {
        if catalog::lookup_by_id(object.id).is_none() {
            tracing::trace!(id = object.id, x = object.x(), y = object.y(), "Ignoring non-rock spawn");
            return;
        }

        // The respawned rock is a new instance, so match on position
        let respawned = self
            .context
            .ores
            .keys()
            .find(|tracked| tracked.position.same_xy(&object.position))
            .copied();

        if let Some(key) = respawned
            && let Some(tracked) = self.context.ores.remove(&key)
        {
            tracing::debug!(
                rock = %tracked.rock,
                x = object.x(),
                y = object.y(),
                "Rock respawned"
            );
        }
    }

    fn handle_object_despawned(&mut self, object: &TileObject) {
        let now = self.clock.now();
        if self.within_spawn_grace(now) {
            tracing::trace!(x = object.x(), y = object.y(), "Despawn inside load grace window");
            return;
        }

        let Some(rock) = catalog::lookup_by_id(object.id) else {
            tracing::trace!(id = object.id, x = object.x(), y = object.y(), "Ignoring non-rock despawn");
            return;
        };

        // Rocks the player can't mine never get depleted by them
        if self.context.mining_level < rock.required_level() {
            tracing::trace!(
                rock = %rock,
                level = self.context.mining_level,
                "Despawn of rock above mining level"
            );
            return;
        }

        if let Entry::Vacant(slot) = self.context.ores.entry(*object) {
            tracing::debug!(
                rock = %rock,
                x = object.x(),
                y = object.y(),
                kind = ?object.kind,
                "Rock depleted"
            );
            slot.insert(TrackedRock::new(rock, now));
        }
    }

    fn handle_chat_message(&mut self, kind: ChatKind, message: &str) {
        if let Some(rock) = chat::mined_ore(kind, message) {
            let now = self.clock.now();
            self.context.session.record_mined(rock, now);
        }
    }

    // --- Helpers ---

    fn within_spawn_grace(&self, now: NaiveDateTime) -> bool {
        self.context
            .last_load_at
            .is_some_and(|loaded| now.signed_duration_since(loaded).num_milliseconds() <= SPAWN_GRACE_MS)
    }

    fn refresh_mining_level(&mut self) {
        let level = self.client.skill_level(Skill::Mining);
        if level != self.context.mining_level {
            tracing::debug!(from = self.context.mining_level, to = level, "Mining level changed");
            self.context.mining_level = level;
        }
    }

    /// Player is leaving the current world: carry the tracked category's
    /// timers over so they can be restored on return.
    fn carry_world_rocks(&mut self) {
        let world = self.client.world();
        let now = self.clock.now();
        let Some(tracker) = self.context.world_tracker.as_mut() else {
            return;
        };

        let mut carried = 0usize;
        for (object, mined) in &self.context.ores {
            if tracker.tracks(mined.rock) {
                tracker.add_tracked(world, *object, *mined, now);
                carried += 1;
            }
        }

        if carried > 0 {
            tracing::debug!(world, carried, rock = %tracker.tracking_rock(), "Carrying rocks across hop");
        }
    }

    /// Player arrived on a world: bring back anything carried for it. The
    /// carried state is consumed.
    fn restore_world_rocks(&mut self) {
        let world = self.client.world();
        let now = self.clock.now();
        let Some(tracker) = self.context.world_tracker.as_mut() else {
            return;
        };
        let Some(mut state) = tracker.take_world(world) else {
            return;
        };

        state.purge_negatives(Some(tracker.tracking_rock()), now);
        let restored = state.len();
        self.context.ores.extend(state.into_rocks());

        tracing::debug!(world, restored, "Restored carried rocks");
    }
}

impl<C: GameClient, K: Clock> EventHandler for TrackingCoordinator<C, K> {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStateChanged(state) => self.handle_game_state(*state),
            GameEvent::ObjectSpawned(object) => self.handle_object_spawned(object),
            GameEvent::ObjectDespawned(object) => self.handle_object_despawned(object),
            GameEvent::ExperienceChanged(Skill::Mining) => self.refresh_mining_level(),
            GameEvent::ExperienceChanged(_) => {}
            GameEvent::ChatMessage { kind, message } => self.handle_chat_message(*kind, message),
        }
    }
}
