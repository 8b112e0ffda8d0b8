use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use geo_globe::cli::{Cli, Command};
use geo_globe::clock::FixedStepClock;
use geo_globe::commands::SceneCommand;
use geo_globe::config::GlobeConfig;
use geo_globe::dataset::CountryCatalog;
use geo_globe::frame::FrameIterator;
use geo_globe::framer::CameraFramer;
use geo_globe::geo::{distance_km, project_lat_lon, unproject, GeoCoordinate};
use geo_globe::geolocation::{GeoFix, PositionWatch, WatchStatus};
use geo_globe::math::Point3D;
use geo_globe::scene::{GlobeScene, SceneEvent};

const VIEWPORT: (f64, f64) = (800.0, 600.0);

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GlobeConfig::load(path)?,
        None => GlobeConfig::default(),
    };

    match cli.command {
        Command::Project { lat, lon, radius } => {
            let p = project_lat_lon(lat, lon, radius)?;
            println!("{:.6} {:.6} {:.6}", p.x, p.y, p.z);
        }
        Command::Unproject { x, y, z } => {
            let c = unproject(Point3D::new(x, y, z))?;
            println!("{}", c);
        }
        Command::Distance { from, to } => {
            println!("{:.2} km", distance_km(from, to));
        }
        Command::Frame {
            target,
            distance,
            rotation,
        } => {
            let framer = CameraFramer::new(config.globe_radius)?;
            let p = framer.frame_on(target, distance.unwrap_or(config.focus_distance), rotation)?;
            println!("{:.6} {:.6} {:.6}", p.x, p.y, p.z);
        }
        Command::Simulate {
            countries,
            frames,
            hz,
            focus,
            search,
            pick,
            no_spin,
            transition_ms,
        } => {
            let mut config = config;
            if let Some(ms) = transition_ms {
                config.transition_ms = ms;
            }
            let catalog = CountryCatalog::load(&countries)?;
            simulate(config, catalog, frames, hz, focus, search, pick, !no_spin)?;
        }
        Command::Watch {
            fixes,
            target,
            tolerance,
        } => watch(&fixes, target, tolerance)?,
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn simulate(
    config: GlobeConfig,
    catalog: CountryCatalog,
    frames: u64,
    hz: f64,
    focus: Option<GeoCoordinate>,
    search: Option<String>,
    pick: Option<(f64, f64)>,
    spin: bool,
) -> Result<()> {
    let mut scene = GlobeScene::new(config, catalog)?;
    scene.set_spin_enabled(spin);

    if let Some(coord) = focus {
        scene.push(SceneCommand::Focus(coord));
    }
    if let Some(query) = search {
        scene.push(SceneCommand::Search(query));
    }
    if let Some((x, y)) = pick {
        scene.push(SceneCommand::Pick {
            x,
            y,
            width: VIEWPORT.0,
            height: VIEWPORT.1,
        });
    }

    info!("Simulating {} frames at {} Hz", frames, hz);
    for frame in FrameIterator::new(FixedStepClock::from_hz(hz)).take(frames as usize) {
        let report = scene.tick(frame);
        for event in &report.events {
            print_event(report.number, event);
        }
    }

    let camera = scene.camera().position();
    println!(
        "camera: {:.4} {:.4} {:.4} (distance {:.3})",
        camera.x,
        camera.y,
        camera.z,
        camera.length()
    );
    println!("globe rotation: {:.4} rad", scene.spin().earth);
    if let Some(country) = scene.selected_country() {
        println!("selected: {}\n{}", country.name, country.details());
    }
    Ok(())
}

fn print_event(frame: u64, event: &SceneEvent) {
    match event {
        SceneEvent::CountrySelected { name, .. } => println!("[{}] selected {}", frame, name),
        SceneEvent::NavigationStarted { target } => println!("[{}] flying to {}", frame, target),
        SceneEvent::NavigationFinished => println!("[{}] arrived", frame),
        SceneEvent::SearchMissed(q) => println!("[{}] no country matches {:?}", frame, q),
        SceneEvent::PickMissed => println!("[{}] nothing under pointer", frame),
        SceneEvent::UserMarkerPlaced(c) => println!("[{}] user marker at {}", frame, c),
        SceneEvent::CommandRejected(msg) => eprintln!("[{}] error: {}", frame, msg),
    }
}

fn watch(path: &Path, target: GeoCoordinate, tolerance: f64) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixes file: {:?}", path))?;
    let fixes: Vec<GeoFix> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse fixes file: {:?}", path))?;

    let mut watch = PositionWatch::new(target, tolerance);
    for fix in fixes {
        println!("{}\n", fix.report());
        match watch.update(fix) {
            WatchStatus::Tracking { remaining_m } => {
                println!("{:.1} m to target\n", remaining_m)
            }
            WatchStatus::Reached => {
                println!("Target reached");
                break;
            }
            WatchStatus::Cleared => break,
        }
    }

    if watch.is_active() {
        println!("Target not reached");
    }
    Ok(())
}
