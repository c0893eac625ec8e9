//! Debug drawing output for flight paths
//!
//! Produces plain vertices the host can upload as a line strip (curve) plus a
//! point list (waypoints). Whether anything is produced is decided by the
//! `VisualizationSettings` passed in, not by a global toggle.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::path::FlightPath;
use crate::settings::VisualizationSettings;

/// 3D debug vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PathVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl PathVertex {
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Debug geometry for one path
#[derive(Debug, Clone, Default)]
pub struct PathDebugGeometry {
    /// Curve samples, spawn to target, drawn as a line strip
    pub line: Vec<PathVertex>,
    /// Real waypoints, drawn as markers
    pub waypoints: Vec<PathVertex>,
}

impl PathDebugGeometry {
    pub fn is_empty(&self) -> bool {
        self.line.is_empty() && self.waypoints.is_empty()
    }

    /// Line strip as raw bytes for a vertex buffer
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line)
    }

    /// Waypoint markers as raw bytes for a vertex buffer
    pub fn waypoint_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.waypoints)
    }
}

/// Build debug geometry for `path`; empty when visualization is disabled
pub fn path_debug_geometry(path: &FlightPath, settings: &VisualizationSettings) -> PathDebugGeometry {
    if !settings.enabled {
        return PathDebugGeometry::default();
    }

    let line = path
        .visualization_points(settings.point_count)
        .into_iter()
        .map(|p| PathVertex::new(p, settings.path_color))
        .collect();

    let waypoints = if settings.show_waypoints {
        path.waypoints()
            .iter()
            .map(|&p| PathVertex::new(p, settings.waypoint_color))
            .collect()
    } else {
        Vec::new()
    };

    PathDebugGeometry { line, waypoints }
}
