//! Constant-speed traversal of a flight path
//!
//! The mover owns one `FlightPath` for the lifetime of a flight and a scalar
//! distance accumulator. Each frame it advances by `speed * dt` and reads the
//! position and direction at the new distance; it never re-walks the curve.

use glam::Vec3;

use crate::path::FlightPath;

/// Pose of a flying target after one update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSample {
    pub position: Vec3,
    /// Unit direction of travel
    pub forward: Vec3,
    /// Distance traveled along the path so far
    pub distance: f32,
    /// Reached the target point this update (or earlier)
    pub finished: bool,
}

/// Moves a target along its flight path at constant speed
#[derive(Debug, Clone)]
pub struct FlightMover {
    path: FlightPath,
    /// Units per second along the curve
    pub speed: f32,
    distance_traveled: f32,
    forward: Vec3,
}

impl FlightMover {
    /// Start at the spawn point. `initial_forward` is used until the path
    /// provides a direction.
    pub fn new(path: FlightPath, speed: f32, initial_forward: Vec3) -> Self {
        let forward = path.tangent_at_distance(0.0, initial_forward.normalize_or(Vec3::Z));
        Self {
            path,
            speed,
            distance_traveled: 0.0,
            forward,
        }
    }

    pub fn path(&self) -> &FlightPath {
        &self.path
    }

    pub fn distance_traveled(&self) -> f32 {
        self.distance_traveled
    }

    pub fn position(&self) -> Vec3 {
        self.path.position_at_distance(self.distance_traveled)
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Advance by one frame
    pub fn advance(&mut self, dt: f32) -> FlightSample {
        if !self.is_finished() {
            let step = (self.speed * dt).max(0.0);
            self.distance_traveled =
                (self.distance_traveled + step).min(self.path.total_arc_length());
        }

        // Keep the last good heading through degenerate stretches
        self.forward = self.path.tangent_at_distance(self.distance_traveled, self.forward);

        FlightSample {
            position: self.position(),
            forward: self.forward,
            distance: self.distance_traveled,
            finished: self.is_finished(),
        }
    }

    /// Reached the target point
    pub fn is_finished(&self) -> bool {
        self.path.is_at_end(self.distance_traveled)
    }

    /// Fraction of the path covered, in [0, 1]
    pub fn progress(&self) -> f32 {
        let total = self.path.total_arc_length();
        if total <= 0.0 {
            return 1.0;
        }
        (self.distance_traveled / total).clamp(0.0, 1.0)
    }

    pub fn remaining_distance(&self) -> f32 {
        (self.path.total_arc_length() - self.distance_traveled).max(0.0)
    }

    /// Seconds left at the current speed
    pub fn remaining_time(&self) -> f32 {
        if self.speed <= 0.0 {
            return f32::INFINITY;
        }
        self.remaining_distance() / self.speed
    }

    /// Seconds for the whole flight at the current speed
    pub fn estimated_duration(&self) -> f32 {
        self.path.estimated_duration(self.speed)
    }

    /// Give the path back (e.g. when the target returns to its pool)
    pub fn into_path(self) -> FlightPath {
        self.path
    }
}
