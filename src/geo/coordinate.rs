use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};

/// Validated latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Rejects latitude outside [-90, 90], longitude outside [-180, 180] and
    /// non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(GeoError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Like [`GeoCoordinate::new`], but first wraps longitude into [-180, 180).
    /// Latitude is still rejected when out of range.
    pub fn wrapped(latitude: f64, longitude: f64) -> GeoResult<Self> {
        if !longitude.is_finite() {
            return Err(GeoError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Self::new(latitude, wrap_longitude(longitude))
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Wraps any finite longitude into [-180, 180).
pub fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = GeoError;

    fn try_from(raw: RawCoordinate) -> GeoResult<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl From<GeoCoordinate> for RawCoordinate {
    fn from(c: GeoCoordinate) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseCoordinateError {
    #[error("expected \"lat,lon\", got {0:?}")]
    Format(String),
    #[error("not a number: {0:?}")]
    Number(String),
    #[error(transparent)]
    Range(#[from] GeoError),
}

/// Parses `"lat,lon"` (whitespace around either value is ignored).
impl FromStr for GeoCoordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| ParseCoordinateError::Format(s.to_string()))?;

        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| ParseCoordinateError::Number(v.trim().to_string()))
        };

        Ok(GeoCoordinate::new(parse(lat)?, parse(lon)?)?)
    }
}
