/// Precondition violations raised by the geometry core.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a non-finite value.
    #[error("invalid coordinate (lat={latitude}, lon={longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// Camera distance at or inside the sphere surface, or non-finite.
    #[error("invalid camera distance {distance} (must exceed {minimum})")]
    InvalidDistance { distance: f64, minimum: f64 },
    /// Projection radius that is not strictly positive and finite.
    #[error("invalid radius {0} (must be > 0)")]
    InvalidRadius(f64),
    /// Scene configuration that would leave the camera or decorations degenerate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type GeoResult<T> = Result<T, GeoError>;
