//! Flight path engine
//!
//! Pure geometry, no gameplay state:
//! - Catmull-Rom segment evaluation (position and derivative)
//! - Phantom endpoints so the first and last real segments are defined
//! - Cumulative arc-length table for constant-speed traversal
//! - Distance and normalized-time queries on an immutable `FlightPath`

pub mod arc_table;
pub mod error;
pub mod flight;
pub mod phantom;
pub mod spline;

pub use arc_table::{ArcLengthTable, SegmentParam};
pub use error::FlightPathError;
pub use flight::FlightPath;
pub use phantom::extend_with_phantoms;
pub use spline::{catmull_rom_point, catmull_rom_tangent};
