pub mod catalog;
pub mod chat;
pub mod client;
pub mod clock;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod events;
pub mod session;
pub mod tracking;
pub mod zones;


// Re-exports for convenience
pub use catalog::{RespawnClass, RockType};
pub use client::GameClient;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, default_config_path, load_config, save_config};
pub use context::TrackingContext;
pub use coordinator::TrackingCoordinator;
pub use events::{EventHandler, GameEvent, GameState, ObjectKind, Skill, TileObject, WorldPoint};
pub use rockwatch_types::{MiningConfig, WorldRock};
pub use session::{RockStats, SessionCounters};
pub use tracking::{TrackedRock, WorldState, WorldTracker};
