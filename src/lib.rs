pub mod camera;
pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod framer;
pub mod geo;
pub mod geolocation;
pub mod math;
pub mod picking;
pub mod scene;
pub mod tracker;
pub mod types;

pub use error::{GeoError, GeoResult};
pub use framer::{CameraFramer, CameraTransition, Navigator, TransitionSample};
pub use geo::{project, GeoCoordinate};
pub use math::Point3D;
pub use tracker::{SurfaceDecoration, SurfaceTracker};
