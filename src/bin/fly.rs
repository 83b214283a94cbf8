use bevy::input::InputPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use flightdeck::{
    components::{ControlInputs, ThrottleCommand},
    plugins::{CockpitScenePlugin, FlightSet, FlightSimPlugin},
    resources::{FlightSimulation, PilotControls, SimulationConfig},
    utils::errors::SimError,
};

#[derive(Parser, Debug)]
#[command(name = "flightdeck_fly")]
#[command(about = "First-person light-aircraft flight simulator")]
#[command(version)]
struct Args {
    /// YAML simulation config; built-in Cessna 172 at KIND when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run without a window and print one JSON HUD readout per simulated second
    #[arg(long)]
    headless: bool,

    #[arg(long, default_value_t = 60.0)]
    seconds: f64,

    /// Throttle held during a headless run
    #[arg(long, default_value_t = 0.8)]
    throttle: f64,

    /// Frame time of a headless run (s)
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,
}

/// Throttle to hold during a headless run.
#[derive(Resource, Clone, Copy)]
struct HeldThrottle(f64);

fn hold_throttle_system(held: Res<HeldThrottle>, mut controls: ResMut<PilotControls>) {
    controls.throttle = ThrottleCommand::Set(held.0);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };

    if args.headless {
        run_headless(config, &args)
    } else {
        run_windowed(config)
    }
}

fn run_windowed(config: SimulationConfig) -> Result<(), Box<dyn std::error::Error>> {
    let title = format!("{} Flight Simulator", config.aircraft.name);
    let flight = FlightSimPlugin::new(config)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title,
                resolution: (1024.0, 768.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((flight, CockpitScenePlugin))
        .run();
    Ok(())
}

fn run_headless(config: SimulationConfig, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    ControlInputs::new(0.0, 0.0, 0.0, ThrottleCommand::Set(args.throttle)).validate()?;
    if !(args.dt.is_finite() && args.dt > 0.0) {
        return Err(SimError::InvalidTimestep(args.dt).into());
    }

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, InputPlugin, LogPlugin::default()))
        .add_plugins(FlightSimPlugin::new(config)?)
        .insert_resource(HeldThrottle(args.throttle))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            args.dt,
        )))
        .add_systems(
            Update,
            hold_throttle_system
                .after(FlightSet::Input)
                .before(FlightSet::Step),
        );

    // the first update only starts the clock
    let frames = (args.seconds / args.dt).ceil() as u64 + 2;
    let mut next_report = 1.0;
    for _ in 0..frames {
        app.update();

        let simulation = app.world().resource::<FlightSimulation>();
        simulation.check()?;
        while simulation.elapsed() + 1e-9 >= next_report && next_report <= args.seconds {
            println!("{}", serde_json::to_string(&simulation.hud())?);
            next_report += 1.0;
        }
        if simulation.elapsed() >= args.seconds {
            break;
        }
    }
    Ok(())
}
