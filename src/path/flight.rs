//! Flight path: an arc-length parameterized Catmull-Rom curve
//!
//! Built once when a target spawns and read-only afterwards. Movement code keeps
//! its own "distance traveled" counter and asks the path for position and
//! direction at that distance each frame.

use glam::Vec3;
use serde::Serialize;

use super::arc_table::{ArcLengthTable, SegmentParam};
use super::error::FlightPathError;
use super::phantom::extend_with_phantoms;
use super::spline::{catmull_rom_point, catmull_rom_tangent};
use crate::consts::{DEFAULT_SAMPLES_PER_SEGMENT, DEFAULT_TENSION};
use crate::settings::PathSettings;

/// Smooth curve through a spawn point, optional control points and a target point
#[derive(Debug, Clone, Serialize)]
pub struct FlightPath {
    /// Waypoints with one phantom point prepended and one appended
    extended: Vec<Vec3>,
    /// Cumulative distance at every sample
    table: ArcLengthTable,
    /// Catmull-Rom tension (0.5 = standard)
    tension: f32,
}

impl FlightPath {
    /// Build a path through `waypoints` (in travel order).
    ///
    /// Fails when fewer than 2 waypoints are given or when
    /// `samples_per_segment < 2`.
    pub fn new(
        waypoints: &[Vec3],
        tension: f32,
        samples_per_segment: usize,
    ) -> Result<Self, FlightPathError> {
        let extended = extend_with_phantoms(waypoints)?;
        let table = ArcLengthTable::build(&extended, samples_per_segment, tension)?;

        log::debug!(
            "Built flight path: {} waypoints, {} samples/segment, length {:.3}",
            waypoints.len(),
            samples_per_segment,
            table.total_length()
        );

        Ok(Self {
            extended,
            table,
            tension,
        })
    }

    /// Build with standard tension and default sample density
    pub fn from_waypoints(waypoints: &[Vec3]) -> Result<Self, FlightPathError> {
        Self::new(waypoints, DEFAULT_TENSION, DEFAULT_SAMPLES_PER_SEGMENT)
    }

    /// Build using tension and sample density from settings
    pub fn with_settings(
        waypoints: &[Vec3],
        settings: &PathSettings,
    ) -> Result<Self, FlightPathError> {
        Self::new(waypoints, settings.tension, settings.samples_per_segment())
    }

    /// First real waypoint
    #[inline]
    pub fn spawn_point(&self) -> Vec3 {
        self.extended[1]
    }

    /// Last real waypoint
    #[inline]
    pub fn target_point(&self) -> Vec3 {
        self.extended[self.extended.len() - 2]
    }

    /// Sampled length of the whole curve
    #[inline]
    pub fn total_arc_length(&self) -> f32 {
        self.table.total_length()
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }

    pub fn samples_per_segment(&self) -> usize {
        self.table.samples_per_segment()
    }

    /// Number of real segments (waypoints - 1)
    pub fn segment_count(&self) -> usize {
        self.table.segment_count()
    }

    /// Real waypoints, without the phantom endpoints
    pub fn waypoints(&self) -> &[Vec3] {
        &self.extended[1..self.extended.len() - 1]
    }

    /// Cumulative arc-length table
    pub fn arc_lengths(&self) -> &[f32] {
        self.table.distances()
    }

    /// Position after traveling `distance` along the curve (clamped to the path)
    pub fn position_at_distance(&self, distance: f32) -> Vec3 {
        if distance.is_nan() || distance <= 0.0 {
            return self.spawn_point();
        }
        if distance >= self.total_arc_length() {
            return self.target_point();
        }
        self.evaluate_point(self.table.locate(distance))
    }

    /// Unit direction of travel at `distance`.
    ///
    /// Returns `fallback` where the curve has no defined direction (coincident
    /// control points).
    pub fn tangent_at_distance(&self, distance: f32, fallback: Vec3) -> Vec3 {
        self.evaluate_tangent(self.table.locate(distance))
            .normalize_or(fallback)
    }

    /// Position at normalized time `u` in [0, 1] (fraction of total arc length)
    pub fn point_at_normalized_time(&self, u: f32) -> Vec3 {
        self.position_at_distance(u * self.total_arc_length())
    }

    /// Unit direction at normalized time `u` in [0, 1]
    pub fn tangent_at_normalized_time(&self, u: f32, fallback: Vec3) -> Vec3 {
        self.tangent_at_distance(u * self.total_arc_length(), fallback)
    }

    /// True once `distance_traveled` reaches the end of the path
    #[inline]
    pub fn is_at_end(&self, distance_traveled: f32) -> bool {
        distance_traveled >= self.total_arc_length()
    }

    /// Seconds to fly the whole path at `speed` units/second.
    ///
    /// A non-positive speed never arrives and yields `f32::INFINITY`.
    pub fn estimated_duration(&self, speed: f32) -> f32 {
        if speed <= 0.0 {
            return f32::INFINITY;
        }
        self.total_arc_length() / speed
    }

    /// `count` points evenly spaced in normalized time, spawn to target
    pub fn visualization_points(&self, count: usize) -> Vec<Vec3> {
        (0..count)
            .map(|i| {
                let u = i as f32 / (count - 1).max(1) as f32;
                self.point_at_normalized_time(u)
            })
            .collect()
    }

    fn segment_points(&self, segment: usize) -> [Vec3; 4] {
        [
            self.extended[segment],
            self.extended[segment + 1],
            self.extended[segment + 2],
            self.extended[segment + 3],
        ]
    }

    fn evaluate_point(&self, param: SegmentParam) -> Vec3 {
        let [p0, p1, p2, p3] = self.segment_points(param.segment);
        catmull_rom_point(p0, p1, p2, p3, param.t, self.tension)
    }

    fn evaluate_tangent(&self, param: SegmentParam) -> Vec3 {
        let [p0, p1, p2, p3] = self.segment_points(param.segment);
        catmull_rom_tangent(p0, p1, p2, p3, param.t, self.tension)
    }
}
