//! Path and debug-visualization settings
//!
//! Plain serde structs handed to the code that needs them. Nothing here is global:
//! the host loads settings (e.g. from a JSON asset) and passes them along.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SAMPLES_PER_SEGMENT, DEFAULT_TENSION};
use crate::path::FlightPathError;

/// Arc-length table density presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SampleDensity {
    Low,
    #[default]
    Medium,
    High,
}

impl SampleDensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleDensity::Low => "Low",
            SampleDensity::Medium => "Medium",
            SampleDensity::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(SampleDensity::Low),
            "medium" | "med" => Some(SampleDensity::Medium),
            "high" => Some(SampleDensity::High),
            _ => None,
        }
    }

    /// Samples taken per spline segment when building the arc-length table
    pub fn samples_per_segment(&self) -> usize {
        match self {
            SampleDensity::Low => 8,
            SampleDensity::Medium => DEFAULT_SAMPLES_PER_SEGMENT,
            SampleDensity::High => 64,
        }
    }
}

/// Flight path construction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Catmull-Rom tension (0.5 = standard)
    pub tension: f32,
    /// Sample density preset
    pub density: SampleDensity,
    /// Exact samples per segment, overrides `density` when set
    pub samples_override: Option<usize>,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            tension: DEFAULT_TENSION,
            density: SampleDensity::Medium,
            samples_override: None,
        }
    }
}

impl PathSettings {
    /// Create settings from a density preset
    pub fn from_density(density: SampleDensity) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    /// Effective sample count per segment
    pub fn samples_per_segment(&self) -> usize {
        self.samples_override
            .unwrap_or_else(|| self.density.samples_per_segment())
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, FlightPathError> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!("Loaded path settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, FlightPathError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Debug drawing options, passed explicitly to the visualization helpers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationSettings {
    /// Master toggle; when off no debug geometry is produced
    pub enabled: bool,
    /// Points sampled along the curve
    pub point_count: usize,
    /// Also emit the real waypoints
    pub show_waypoints: bool,
    /// RGBA color of the curve
    pub path_color: [f32; 4],
    /// RGBA color of the waypoint markers
    pub waypoint_color: [f32; 4],
}

impl Default for VisualizationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            point_count: 50,
            show_waypoints: true,
            path_color: [1.0, 0.85, 0.2, 1.0],
            waypoint_color: [0.9, 0.2, 0.2, 1.0],
        }
    }
}

impl VisualizationSettings {
    /// Enabled settings with default colors
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, FlightPathError> {
        Ok(serde_json::from_str(json)?)
    }
}
