//! Types shared between the tracking core and anything that renders or
//! configures it.

pub mod config;
pub mod formatting;

pub use config::{MiningConfig, WorldRock};
