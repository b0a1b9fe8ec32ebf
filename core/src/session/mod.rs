pub mod counters;

pub use counters::{RockStats, SessionCounters};
