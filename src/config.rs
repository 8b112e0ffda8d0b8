use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};

/// Tunables for the globe scene. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub globe_radius: f64,
    /// Radius flags and markers sit at, slightly above the surface.
    pub decoration_radius: f64,
    pub flag_width: f64,
    pub flag_height: f64,
    pub marker_size: f64,
    /// Camera distance used when focusing on a coordinate.
    pub focus_distance: f64,
    /// 0 snaps the camera instantly.
    pub transition_ms: u32,
    /// Earth spin in radians per second.
    pub earth_spin: f64,
    /// Cloud layer spin in radians per second.
    pub cloud_spin: f64,
    pub camera_distance: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub fov_degrees: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            globe_radius: 1.0,
            decoration_radius: 1.02,
            flag_width: 0.12,
            flag_height: 0.07,
            marker_size: 0.02,
            focus_distance: 2.2,
            transition_ms: 800,
            earth_spin: 0.036,
            cloud_spin: 0.054,
            camera_distance: 2.5,
            min_distance: 1.5,
            max_distance: 6.0,
            fov_degrees: 45.0,
        }
    }
}

impl GlobeConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// Rejects values that would put the camera inside the globe, invert the zoom
    /// range, or produce degenerate or non-finite geometry.
    pub fn validate(&self) -> GeoResult<()> {
        check(positive(self.globe_radius), "globe_radius must be positive")?;
        check(
            self.decoration_radius.is_finite() && self.decoration_radius >= self.globe_radius,
            "decoration_radius must not be below the globe surface",
        )?;
        check(
            positive(self.flag_width) && positive(self.flag_height),
            "flag_width and flag_height must be positive",
        )?;
        check(positive(self.marker_size), "marker_size must be positive")?;
        check(
            self.focus_distance.is_finite() && self.focus_distance > self.globe_radius,
            "focus_distance must be outside the globe",
        )?;
        check(
            self.earth_spin.is_finite() && self.cloud_spin.is_finite(),
            "earth_spin and cloud_spin must be finite",
        )?;
        check(
            self.camera_distance.is_finite() && self.camera_distance > self.globe_radius,
            "camera_distance must be outside the globe",
        )?;
        check(
            self.min_distance > self.globe_radius,
            "min_distance must be outside the globe",
        )?;
        check(
            self.max_distance.is_finite() && self.min_distance <= self.max_distance,
            "min_distance must not exceed max_distance",
        )?;
        check(
            self.fov_degrees > 0.0 && self.fov_degrees < 180.0,
            "fov_degrees must be in (0, 180)",
        )?;
        Ok(())
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check(condition: bool, message: &'static str) -> GeoResult<()> {
    if condition {
        Ok(())
    } else {
        Err(GeoError::InvalidConfig(message))
    }
}
