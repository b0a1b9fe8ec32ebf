//! Event script format
//!
//! A script is a TOML file describing the client at start-up and a list of
//! timed events:
//!
//! ```toml
//! [setup]
//! world = 301
//! mining_level = 85
//!
//! [config]
//! track_world_rock = "runite"
//!
//! [[event]]
//! at = 0.0
//! kind = "game_state"
//! state = "loading"
//!
//! [[event]]
//! at = 5.0
//! kind = "despawned"
//! handle = 1
//! id = 11376
//! x = 3047
//! y = 9738
//! ```
//!
//! `at` is seconds since the start of the replay, at most a week, and must
//! never decrease.

use std::fs;
use std::path::{Path, PathBuf};

use rockwatch_core::events::{ChatKind, GameState, ObjectKind, TileObject, WorldPoint};
use rockwatch_types::{MiningConfig, WorldRock};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("event {index} at {at}s is earlier than the previous event at {previous}s")]
    OutOfOrder { index: usize, at: f64, previous: f64 },
    #[error("event {index} has time {at}s, expected 0 up to one week")]
    BadTime { index: usize, at: f64 },
}

/// Latest event time accepted in a script (one week).
pub const MAX_EVENT_SECS: f64 = 7.0 * 24.0 * 3600.0;

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub setup: Setup,
    #[serde(default)]
    pub config: MiningConfig,
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

/// Client state before the first event.
#[derive(Debug, Clone, Deserialize)]
pub struct Setup {
    #[serde(default = "default_world")]
    pub world: i32,
    #[serde(default = "default_level")]
    pub mining_level: u32,
    #[serde(default)]
    pub regions: Vec<i32>,
    #[serde(default = "default_state")]
    pub state: GameState,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            world: default_world(),
            mining_level: default_level(),
            regions: Vec::new(),
            state: default_state(),
        }
    }
}

fn default_world() -> i32 {
    301
}

fn default_level() -> u32 {
    99
}

fn default_state() -> GameState {
    GameState::LoggedIn
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptEvent {
    /// Seconds since replay start
    pub at: f64,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    GameState {
        state: GameState,
    },
    Spawned(ObjectSpec),
    Despawned(ObjectSpec),
    /// Change the world the client reports (before a login)
    World {
        world: i32,
    },
    /// Change mining level and emit an experience event
    Level {
        level: u32,
    },
    Regions {
        regions: Vec<i32>,
    },
    Chat {
        message: String,
        #[serde(default = "default_channel")]
        channel: ChatKind,
    },
    Tick,
    TrackWorldRock {
        rock: WorldRock,
    },
    /// Print the tracker state at this point
    Report,
}

fn default_channel() -> ChatKind {
    ChatKind::Filtered
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ObjectSpec {
    pub handle: u64,
    pub id: u32,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub plane: i32,
    #[serde(default)]
    pub wall: bool,
}

impl ObjectSpec {
    pub fn to_object(self) -> TileObject {
        let kind = if self.wall {
            ObjectKind::Wall
        } else {
            ObjectKind::Ground
        };
        TileObject::new(self.handle, self.id, WorldPoint::new(self.x, self.y, self.plane), kind)
    }
}

pub fn load_script(path: &Path) -> Result<Script, ScriptError> {
    let contents = fs::read_to_string(path).map_err(|e| ScriptError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let script = parse_script(&contents).map_err(|e| ScriptError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    check_order(&script)?;
    Ok(script)
}

fn parse_script(contents: &str) -> Result<Script, toml::de::Error> {
    toml::from_str(contents)
}

/// Events are delivered in arrival order, so timestamps must not go back.
pub fn check_order(script: &Script) -> Result<(), ScriptError> {
    let mut previous = 0.0_f64;
    for (index, event) in script.events.iter().enumerate() {
        // NaN fails the range check too
        if !(0.0..=MAX_EVENT_SECS).contains(&event.at) {
            return Err(ScriptError::BadTime { index, at: event.at });
        }
        if event.at < previous {
            return Err(ScriptError::OutOfOrder {
                index,
                at: event.at,
                previous,
            });
        }
        previous = event.at;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
[setup]
world = 330
mining_level = 85

[config]
track_world_rock = "runite"

[[event]]
at = 0
kind = "game_state"
state = "loading"

[[event]]
at = 5.5
kind = "despawned"
handle = 1
id = 11376
x = 3047
y = 9738
wall = true

[[event]]
at = 6
kind = "chat"
message = "You manage to mine some runite."

[[event]]
at = 7
kind = "tick"
"#;

    #[test]
    fn test_parse_script() {
        let script = parse_script(SCRIPT).unwrap();
        assert_eq!(script.setup.world, 330);
        assert_eq!(script.setup.mining_level, 85);
        assert_eq!(script.setup.state, GameState::LoggedIn);
        assert_eq!(script.config.track_world_rock, WorldRock::Runite);
        assert_eq!(script.events.len(), 4);

        assert!(matches!(
            script.events[0].action,
            Action::GameState {
                state: GameState::Loading
            }
        ));
        let Action::Despawned(spec) = script.events[1].action else {
            panic!("expected despawn");
        };
        assert_eq!(script.events[1].at, 5.5);
        let object = spec.to_object();
        assert_eq!(object.kind, ObjectKind::Wall);
        assert_eq!(object.position, WorldPoint::new(3047, 9738, 0));
        assert!(matches!(
            &script.events[2].action,
            Action::Chat { channel: ChatKind::Filtered, .. }
        ));
        assert!(check_order(&script).is_ok());
    }

    #[test]
    fn test_out_of_order_events_rejected() {
        let script = parse_script(
            r#"
[[event]]
at = 5
kind = "tick"

[[event]]
at = 4
kind = "tick"
"#,
        )
        .unwrap();

        let err = check_order(&script).unwrap_err();
        assert!(matches!(err, ScriptError::OutOfOrder { index: 1, .. }));
    }

    #[test]
    fn test_empty_script_uses_defaults() {
        let script = parse_script("").unwrap();
        assert_eq!(script.setup.world, 301);
        assert!(script.events.is_empty());
        assert!(script.config.track_world_rock.is_none());
    }

    #[test]
    fn test_unusable_times_rejected() {
        for at in ["inf", "-inf", "nan", "1e15", "-1"] {
            let script = parse_script(&format!(
                "[[event]]\nat = 0\nkind = \"tick\"\n\n[[event]]\nat = {at}\nkind = \"tick\"\n"
            ))
            .unwrap();

            let err = check_order(&script).unwrap_err();
            assert!(matches!(err, ScriptError::BadTime { index: 1, .. }), "at = {at}: {err}");
        }

        let script = parse_script(&format!(
            "[[event]]\nat = {MAX_EVENT_SECS}\nkind = \"tick\"\n"
        ))
        .unwrap();
        assert!(check_order(&script).is_ok());
    }
}
