//! Respawn timer state
//!
//! - **TrackedRock**: one depleted rock and when it was seen going down
//! - **WorldState**: timers left behind in one world instance
//! - **WorldTracker**: every world left behind while tracking a rock category
//!
//! # Lifecycle
//!
//! ```text
//!   despawn seen ──► TrackedRock in live map ──► respawn seen ──► dropped
//!                           │
//!                     player hops away
//!                           ▼
//!              WorldTracker[world] (WorldState)
//!                           │
//!                 player logs back into world
//!                           ▼
//!                 copied back into live map, entry removed
//! ```

mod tracked_rock;
mod world;
mod world_tracker;

pub use tracked_rock::TrackedRock;
pub use world::WorldState;
pub use world_tracker::WorldTracker;
