//! rockwatch-replay - feed a scripted event sequence through the rock tracker.
//!
//! Usage: rockwatch-replay <script.toml> [--config mining.toml] [--verbose]
//!
//! Prints the tracker state after the last event, and wherever the script
//! asks for a `report`.

mod report;
mod script;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDateTime, TimeDelta};
use clap::Parser;
use rockwatch_core::events::{GameEvent, GameState, Skill};
use rockwatch_core::{Clock, EventHandler, GameClient, ManualClock, SystemClock, TrackingCoordinator};
use tracing_subscriber::filter::EnvFilter;

use crate::script::{Action, Script, ScriptError, Setup};

#[derive(Parser)]
#[command(version, about = "Replay a mining event script through the rock tracker")]
struct Cli {
    /// Event script (TOML)
    script: PathBuf,

    /// Settings file to use instead of the script's [config] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print tracker state after every event
    #[arg(short, long)]
    verbose: bool,
}

/// Client whose state is driven entirely by the script.
struct ReplayClient {
    state: GameState,
    world: i32,
    mining_level: u32,
    regions: Vec<i32>,
}

impl ReplayClient {
    fn from_setup(setup: &Setup) -> Self {
        Self {
            state: setup.state,
            world: setup.world,
            mining_level: setup.mining_level,
            regions: setup.regions.clone(),
        }
    }
}

impl GameClient for ReplayClient {
    fn game_state(&self) -> GameState {
        self.state
    }

    fn world(&self) -> i32 {
        self.world
    }

    fn skill_level(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Mining => self.mining_level,
            _ => 1,
        }
    }

    fn map_regions(&self) -> &[i32] {
        &self.regions
    }
}

/// Initialize logging, writing to ROCKWATCH_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("ROCKWATCH_LOG_PATH")
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(file)
            .init();
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let mut script = match script::load_script(&cli.script) {
        Ok(script) => script,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load script");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &cli.config {
        match rockwatch_core::load_config(path) {
            Ok(config) => script.config = config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load config");
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::info!(
        events = script.events.len(),
        track_world_rock = script.config.track_world_rock.label(),
        "Replaying script"
    );

    // Anchor the replay at the real current time so timestamps look sane
    let start = SystemClock.now();
    match run(script, start, cli.verbose) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Replay failed");
            ExitCode::FAILURE
        }
    }
}

/// Wall-clock time of an event `at` seconds into the replay.
fn event_time(start: NaiveDateTime, at: f64) -> Option<NaiveDateTime> {
    if !at.is_finite() {
        return None;
    }
    let offset = TimeDelta::try_milliseconds((at * 1000.0).round() as i64)?;
    start.checked_add_signed(offset)
}

fn run(script: Script, start: NaiveDateTime, verbose: bool) -> Result<String, ScriptError> {
    script::check_order(&script)?;

    let client = ReplayClient::from_setup(&script.setup);
    let mut coord = TrackingCoordinator::new(script.config, client, ManualClock::new(start));
    let mut output = String::new();
    let mut last_at = 0.0;

    for (index, event) in script.events.into_iter().enumerate() {
        last_at = event.at;
        let now = event_time(start, event.at).ok_or(ScriptError::BadTime {
            index,
            at: event.at,
        })?;
        coord.clock().set(now);

        let report_now = matches!(event.action, Action::Report);
        apply(&mut coord, event.action);

        if verbose || report_now {
            output.push_str(&report::render(&coord, last_at));
        }
    }

    if !verbose {
        output.push_str(&report::render(&coord, last_at));
    }
    coord.shutdown();
    Ok(output)
}

fn apply(coord: &mut TrackingCoordinator<ReplayClient, ManualClock>, action: Action) {
    match action {
        Action::GameState { state } => {
            coord.client_mut().state = state;
            coord.handle_event(&GameEvent::GameStateChanged(state));
        }
        Action::Spawned(spec) => coord.handle_event(&GameEvent::ObjectSpawned(spec.to_object())),
        Action::Despawned(spec) => {
            coord.handle_event(&GameEvent::ObjectDespawned(spec.to_object()))
        }
        Action::World { world } => coord.client_mut().world = world,
        Action::Level { level } => {
            coord.client_mut().mining_level = level;
            coord.handle_event(&GameEvent::ExperienceChanged(Skill::Mining));
        }
        Action::Regions { regions } => coord.client_mut().regions = regions,
        Action::Chat { message, channel } => coord.handle_event(&GameEvent::ChatMessage {
            kind: channel,
            message,
        }),
        Action::Tick => coord.tick(),
        Action::TrackWorldRock { rock } => {
            let mut config = coord.config().clone();
            config.track_world_rock = rock;
            coord.apply_config(config);
        }
        Action::Report => {}
    }
}
