//! Duck Flight - curved flight paths for shooting-gallery targets
//!
//! Core modules:
//! - `path`: Catmull-Rom spline kernel, arc-length table, `FlightPath` queries
//! - `settings`: Tension/sample density and debug visualization configuration
//! - `mover`: Constant-speed traversal of a path (per-frame distance accumulator)
//! - `spawn`: Seeded waypoint planning for a new flight
//! - `debug`: Vertex output for drawing a path as a line strip

pub mod debug;
pub mod mover;
pub mod path;
pub mod settings;
pub mod spawn;

pub use mover::{FlightMover, FlightSample};
pub use path::{FlightPath, FlightPathError};
pub use settings::{PathSettings, SampleDensity, VisualizationSettings};
pub use spawn::{FlightPlanner, SpawnArea};

/// Path engine defaults
pub mod consts {
    /// Standard Catmull-Rom tension
    pub const DEFAULT_TENSION: f32 = 0.5;
    /// Arc-length samples per spline segment
    pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 20;
    /// Smallest usable sample count per segment
    pub const MIN_SAMPLES_PER_SEGMENT: usize = 2;
    /// Chord length below which a segment is considered degenerate
    pub const DEGENERATE_SEGMENT_LENGTH: f32 = 1.0e-6;
}
