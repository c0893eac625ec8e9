//! Seeded waypoint planning for new flights
//!
//! A flight starts somewhere in a spawn volume, ends somewhere in a target
//! volume, and bends through up to three control points scattered around the
//! straight line between them. Same seed, same waypoints.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::path::{FlightPath, FlightPathError};
use crate::settings::PathSettings;

/// Upper bound on intermediate control points per flight
pub const MAX_CONTROL_POINTS: usize = 3;

/// Deterministic RNG for a flight seed
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Axis-aligned box that spawn or target points are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    pub min: Vec3,
    pub max: Vec3,
}

impl SpawnArea {
    /// Box spanning two corners (in any order)
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Degenerate box holding a single point
    pub fn point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Uniform point inside the box
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let unit = Vec3::new(rng.random(), rng.random(), rng.random());
        self.min + (self.max - self.min) * unit
    }
}

/// Produces waypoint lists for new flights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPlanner {
    pub spawn_area: SpawnArea,
    pub target_area: SpawnArea,
    /// Fewest intermediate control points
    pub min_control_points: usize,
    /// Most intermediate control points (capped at `MAX_CONTROL_POINTS`)
    pub max_control_points: usize,
    /// Max distance a control point strays from the spawn-target line
    pub wander: f32,
}

impl Default for FlightPlanner {
    fn default() -> Self {
        Self {
            spawn_area: SpawnArea::new(Vec3::new(-6.0, 0.5, 8.0), Vec3::new(6.0, 1.5, 10.0)),
            target_area: SpawnArea::new(Vec3::new(-6.0, 3.0, 4.0), Vec3::new(6.0, 6.0, 6.0)),
            min_control_points: 0,
            max_control_points: MAX_CONTROL_POINTS,
            wander: 2.0,
        }
    }
}

impl FlightPlanner {
    /// Waypoints in travel order: spawn, control points, target (2 to 5 points)
    pub fn plan<R: Rng>(&self, rng: &mut R) -> Vec<Vec3> {
        let max = self.max_control_points.min(MAX_CONTROL_POINTS);
        let min = self.min_control_points.min(max);
        let count = rng.random_range(min..=max);

        let spawn = self.spawn_area.sample(rng);
        let target = self.target_area.sample(rng);

        let mut waypoints = Vec::with_capacity(count + 2);
        waypoints.push(spawn);

        for i in 0..count {
            // Evenly spaced along the line, jittered inside their slot
            let slot = 1.0 / (count + 1) as f32;
            let jitter = rng.random_range(-0.25_f32..=0.25) * slot;
            let frac = (i + 1) as f32 * slot + jitter;
            let base = spawn.lerp(target, frac);
            waypoints.push(base + self.wander_offset(rng));
        }

        waypoints.push(target);
        log::debug!("Planned flight with {} waypoints", waypoints.len());
        waypoints
    }

    /// Plan waypoints and build the path in one go
    pub fn plan_path<R: Rng>(
        &self,
        rng: &mut R,
        settings: &PathSettings,
    ) -> Result<FlightPath, FlightPathError> {
        let waypoints = self.plan(rng);
        FlightPath::with_settings(&waypoints, settings)
    }

    fn wander_offset<R: Rng>(&self, rng: &mut R) -> Vec3 {
        if self.wander <= 0.0 {
            return Vec3::ZERO;
        }
        let dir = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        )
        .normalize_or_zero();
        dir * rng.random_range(0.0..=self.wander)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_waypoints() {
        let planner = FlightPlanner::default();
        let a = planner.plan(&mut seeded_rng(42));
        let b = planner.plan(&mut seeded_rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_waypoint_count_and_endpoints() {
        let planner = FlightPlanner::default();
        let mut rng = seeded_rng(7);
        for _ in 0..100 {
            let waypoints = planner.plan(&mut rng);
            assert!((2..=MAX_CONTROL_POINTS + 2).contains(&waypoints.len()));
            assert!(planner.spawn_area.contains(waypoints[0]));
            assert!(planner.target_area.contains(*waypoints.last().unwrap()));
        }
    }

    #[test]
    fn test_control_points_stay_near_line() {
        let planner = FlightPlanner {
            min_control_points: 3,
            max_control_points: 3,
            wander: 1.5,
            ..Default::default()
        };
        let mut rng = seeded_rng(2024);
        for _ in 0..50 {
            let waypoints = planner.plan(&mut rng);
            assert_eq!(waypoints.len(), 5);
            let (spawn, target) = (waypoints[0], waypoints[4]);
            let line = target - spawn;
            for &p in &waypoints[1..4] {
                // Distance from the infinite spawn-target line
                let along = (p - spawn).dot(line) / line.length_squared();
                let closest = spawn + line * along;
                assert!(p.distance(closest) <= 1.5 + 1e-4);
            }
        }
    }

    #[test]
    fn test_point_areas_without_wander() {
        let planner = FlightPlanner {
            spawn_area: SpawnArea::point(Vec3::ZERO),
            target_area: SpawnArea::point(Vec3::new(10.0, 0.0, 0.0)),
            min_control_points: 1,
            max_control_points: 1,
            wander: 0.0,
        };
        let waypoints = planner.plan(&mut seeded_rng(1));
        assert_eq!(waypoints.len(), 3);
        assert_eq!(waypoints[0], Vec3::ZERO);
        assert_eq!(waypoints[2], Vec3::new(10.0, 0.0, 0.0));
        assert!(waypoints[1].y.abs() < 1e-6 && waypoints[1].z.abs() < 1e-6);
        assert!(waypoints[1].x > 2.4 && waypoints[1].x < 7.6);
    }

    #[test]
    fn test_control_point_cap() {
        let planner = FlightPlanner {
            min_control_points: 10,
            max_control_points: 10,
            ..Default::default()
        };
        let waypoints = planner.plan(&mut seeded_rng(3));
        assert_eq!(waypoints.len(), MAX_CONTROL_POINTS + 2);
    }

    #[test]
    fn test_plan_path_builds() {
        let planner = FlightPlanner::default();
        let path = planner
            .plan_path(&mut seeded_rng(99), &PathSettings::default())
            .unwrap();
        assert!(path.total_arc_length() > 0.0);
        assert!(planner.spawn_area.contains(path.spawn_point()));
        assert!(planner.target_area.contains(path.target_point()));
    }

    #[test]
    fn test_area_new_orders_corners() {
        let area = SpawnArea::new(Vec3::new(3.0, -1.0, 5.0), Vec3::new(-2.0, 4.0, 0.0));
        assert_eq!(area.min, Vec3::new(-2.0, -1.0, 0.0));
        assert_eq!(area.max, Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(area.center(), Vec3::new(0.5, 1.5, 2.5));
    }
}
