//! Duck Flight demo
//!
//! Plans one seeded flight, flies it at a fixed frame rate and prints the debug
//! samples as JSON. Usage: `duck-flight [seed] [speed]`

#[cfg(not(target_arch = "wasm32"))]
use duck_flight::{
    FlightMover, FlightPathError, FlightPlanner, PathSettings, VisualizationSettings,
};

/// Simulated frame rate of the demo (typical VR refresh)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_DT: f32 = 1.0 / 90.0;
/// Give up on flights longer than ten minutes of frames
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: usize = 90 * 600;

#[cfg(not(target_arch = "wasm32"))]
#[derive(serde::Serialize)]
struct FlightReport {
    seed: u64,
    speed: f32,
    waypoints: Vec<glam::Vec3>,
    total_arc_length: f32,
    estimated_duration: f32,
    frames_flown: usize,
    samples: Vec<glam::Vec3>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), FlightPathError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42_u64);
    let speed = args.next().and_then(|s| s.parse().ok()).unwrap_or(3.0_f32);

    log::info!("Duck Flight starting (seed {}, speed {})", seed, speed);

    let settings = PathSettings::default();
    let planner = FlightPlanner::default();
    let mut rng = duck_flight::spawn::seeded_rng(seed);
    let path = planner.plan_path(&mut rng, &settings)?;

    let estimated_duration = path.estimated_duration(speed);
    log::info!(
        "Planned path: {} waypoints, length {:.3}, estimated {:.2}s",
        path.waypoints().len(),
        path.total_arc_length(),
        estimated_duration
    );

    let mut mover = FlightMover::new(path.clone(), speed, glam::Vec3::NEG_Z);
    let mut frames_flown = 0;
    while !mover.is_finished() && frames_flown < MAX_FRAMES {
        mover.advance(FRAME_DT);
        frames_flown += 1;
    }
    if !mover.is_finished() {
        log::warn!(
            "Gave up after {} frames at {:.1}% of the path",
            frames_flown,
            mover.progress() * 100.0
        );
    } else {
        log::info!(
            "Flight finished after {} frames ({:.2}s)",
            frames_flown,
            frames_flown as f32 * FRAME_DT
        );
    }

    let report = FlightReport {
        seed,
        speed,
        waypoints: path.waypoints().to_vec(),
        total_arc_length: path.total_arc_length(),
        estimated_duration,
        frames_flown,
        samples: path.visualization_points(VisualizationSettings::default().point_count),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is consumed by the host game; there is no standalone web entry
}
