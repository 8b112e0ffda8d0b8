mod basis;
mod point;
mod ray;

pub use basis::Basis;
pub use point::Point3D;
pub use ray::Ray;
