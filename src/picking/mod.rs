//! Pointer hit-testing against the star cloud

pub mod ray;
pub mod throttle;

pub use ray::{intersect_point_cloud, PointHit, Ray};
pub use throttle::RaycastThrottle;
