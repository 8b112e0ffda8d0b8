//! Device position fixes and a watch that stops once a target is reached.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::geo::{distance_meters, GeoCoordinate};

/// One reading from a positioning source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub coordinate: GeoCoordinate,
    /// Metres above the reference ellipsoid.
    #[serde(default)]
    pub altitude: Option<f64>,
    /// Horizontal accuracy radius in metres.
    pub accuracy: f64,
    /// Metres per second.
    #[serde(default)]
    pub speed: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl GeoFix {
    pub fn new(coordinate: GeoCoordinate, accuracy: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            coordinate,
            altitude: None,
            accuracy,
            speed: None,
            timestamp,
        }
    }

    /// Multi-line human readable report.
    pub fn report(&self) -> String {
        let altitude = self
            .altitude
            .map_or_else(|| "Unavailable".to_string(), |a| format!("{} m", a));
        let speed = self
            .speed
            .map_or_else(|| "Unavailable".to_string(), |s| format!("{} m/s", s));

        format!(
            "Latitude: {}\nLongitude: {}\nAltitude: {}\nAccuracy: {} m\nSpeed: {}\nDate: {}",
            self.coordinate.latitude(),
            self.coordinate.longitude(),
            altitude,
            self.accuracy,
            speed,
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WatchStatus {
    /// Still following; distance to the target in metres.
    Tracking { remaining_m: f64 },
    /// This fix reached the target; the watch is now cleared.
    Reached,
    /// The watch was already cleared and ignored the fix.
    Cleared,
}

/// Follows fixes toward a target and clears itself when one lands within
/// `tolerance_m` of it.
#[derive(Debug, Clone)]
pub struct PositionWatch {
    target: GeoCoordinate,
    tolerance_m: f64,
    last: Option<GeoFix>,
    active: bool,
}

impl PositionWatch {
    pub fn new(target: GeoCoordinate, tolerance_m: f64) -> Self {
        Self {
            target,
            tolerance_m: tolerance_m.max(0.0),
            last: None,
            active: true,
        }
    }

    pub fn target(&self) -> GeoCoordinate {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_fix(&self) -> Option<&GeoFix> {
        self.last.as_ref()
    }

    pub fn update(&mut self, fix: GeoFix) -> WatchStatus {
        if !self.active {
            return WatchStatus::Cleared;
        }

        let remaining_m = distance_meters(fix.coordinate, self.target);
        self.last = Some(fix);

        if remaining_m <= self.tolerance_m {
            self.active = false;
            info!("Target {} reached", self.target);
            WatchStatus::Reached
        } else {
            WatchStatus::Tracking { remaining_m }
        }
    }
}
