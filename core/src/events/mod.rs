pub mod game_event;
pub mod handler;

pub use game_event::{ChatKind, GameEvent, GameState, ObjectKind, Skill, TileObject, WorldPoint};
pub use handler::EventHandler;
