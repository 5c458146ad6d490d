use glam::Vec3;

use crate::camera::{unproject_ndc, CameraData};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Closest point on the ray (never behind the origin) to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let t = (point - self.origin).dot(self.direction);
        if t < 0.0 {
            self.origin
        } else {
            self.point_at(t)
        }
    }

    /// Cast from the camera through a normalized-device-coordinate point
    pub fn from_camera(camera: &CameraData, ndc: (f32, f32)) -> Option<Self> {
        let origin = Vec3::from_array(camera.position);
        let target = unproject_ndc(camera, ndc.0, ndc.1, 0.5)?;
        let direction = Vec3::new(target.x, target.y, target.z) - origin;
        if direction.length_squared() <= f32::EPSILON {
            return None;
        }
        Some(Self::new(origin, direction))
    }
}

/// One star intersected by a pointer ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    pub index: usize,
    /// Distance from the ray origin to the closest point on the ray
    pub distance: f32,
    /// Perpendicular distance between the star and the ray
    pub distance_to_ray: f32,
}

/// Hit-test a flat xyz point buffer against a ray.
///
/// A point is hit when it lies within `threshold` of the ray and its distance along
/// the ray falls inside `[near, far]`. Hits come back nearest first.
pub fn intersect_point_cloud(
    ray: &Ray,
    positions: &[f32],
    threshold: f32,
    near: f32,
    far: f32,
) -> Vec<PointHit> {
    let threshold_sq = threshold * threshold;
    let mut hits = Vec::new();

    for (index, chunk) in positions.chunks_exact(3).enumerate() {
        let point = Vec3::new(chunk[0], chunk[1], chunk[2]);
        let closest = ray.closest_point(point);
        let distance_sq = closest.distance_squared(point);
        if distance_sq >= threshold_sq {
            continue;
        }

        let distance = ray.origin.distance(closest);
        if distance < near || distance > far {
            continue;
        }

        hits.push(PointHit {
            index,
            distance,
            distance_to_ray: distance_sq.sqrt(),
        });
    }

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert_eq!(ray.point_at(5.0), Vec3::new(0.0, 3.0, 4.0));
    }

    #[test]
    fn test_hits_sorted_nearest_first() {
        let positions = [
            0.0, 0.0, -50.0, // far, on axis
            0.5, 0.0, 40.0, // near, slightly off axis
            30.0, 0.0, 0.0, // outside threshold
            0.0, 1.0, 0.0, // middle
        ];

        let hits = intersect_point_cloud(&forward_ray(), &positions, 2.0, 1.0, 1000.0);
        let order: Vec<usize> = hits.iter().map(|h| h.index).collect();
        assert_eq!(order, vec![1, 3, 0]);
        assert!((hits[0].distance - 60.0).abs() < 1e-4);
        assert!((hits[0].distance_to_ray - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_points_behind_origin_or_outside_range_are_missed() {
        let positions = [
            0.0, 0.0, 150.0, // behind the camera
            0.0, 0.0, 99.5, // closer than near
            0.0, 0.0, -2000.0, // beyond far
        ];

        let hits = intersect_point_cloud(&forward_ray(), &positions, 2.0, 1.0, 1000.0);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_from_camera_through_center() {
        let config = crate::config::StarfieldConfig::default();
        let camera = crate::camera::init_camera(&config, 1280, 720);

        let ray = Ray::from_camera(&camera, (0.0, 0.0)).unwrap();
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, config.camera.initial_z));
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3);
    }
}
