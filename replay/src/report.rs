//! Plain-text dump of tracker state.

use std::fmt::Write;

use rockwatch_core::{Clock, GameClient, TrackingCoordinator};
use rockwatch_types::formatting::{format_countdown, format_duration, format_per_hour};

pub fn render<C: GameClient, K: Clock>(coord: &TrackingCoordinator<C, K>, elapsed_secs: f64) -> String {
    let now = coord.now();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "[+{:.1}s] world {} | mining {}{}",
        elapsed_secs,
        coord.client().world(),
        coord.mining_level(),
        if coord.in_motherlode_mine() { " | motherlode" } else { "" }
    );

    let mut rocks: Vec<_> = coord.tracked_rocks().iter().collect();
    rocks.sort_by_key(|(object, _)| (object.x(), object.y(), object.handle));
    let _ = writeln!(out, "  depleted rocks: {}", rocks.len());
    for (object, tracked) in rocks {
        let remaining = tracked.remaining(now).num_milliseconds() as f32 / 1000.0;
        let _ = writeln!(
            out,
            "    {:<10} ({}, {}) {:?}  down {}  respawn {}",
            tracked.rock.name(),
            object.x(),
            object.y(),
            object.kind,
            format_duration(tracked.elapsed(now).num_seconds()),
            format_countdown(remaining, "any moment"),
        );
    }

    if let Some(tracker) = coord.world_tracker() {
        let mut worlds: Vec<_> = tracker.worlds().collect();
        worlds.sort_by_key(|w| w.world);
        let _ = writeln!(
            out,
            "  carried worlds ({}): {}",
            tracker.tracking().label(),
            worlds.len()
        );
        for world in worlds {
            let soonest = world
                .rocks()
                .values()
                .map(|t| t.remaining(now).num_milliseconds())
                .min()
                .unwrap_or(0);
            let _ = writeln!(
                out,
                "    world {}: {} rock(s), next in {}",
                world.world,
                world.len(),
                format_countdown(soonest as f32 / 1000.0, "now")
            );
        }
    }

    let session = coord.session();
    if !session.is_idle() {
        let _ = writeln!(out, "  session:");
        for (rock, stats) in session.active() {
            let rate = stats
                .per_hour(now)
                .map(format_per_hour)
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(out, "    {:<10} {:>4} mined  {}", rock.name(), stats.mined, rate);
        }
    }

    out
}
