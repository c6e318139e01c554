//! Ray representation for intersection tests.
//!
//! A ray is r(t) = origin + t * direction, a half-line in world space.

use crate::vec3::{Point3, Vec3};

/// Ray defined by origin and direction.
///
/// The direction is not required to be normalized; intersection code
/// accounts for its length. Rays are cheap value types built per sample
/// and owned by the caller.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,
    /// Direction vector of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter t along the ray.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let r = Ray::new(Point3::new(2.0, 3.0, 4.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(r.at(0.0), Point3::new(2.0, 3.0, 4.0));
        assert_eq!(r.at(1.0), Point3::new(3.0, 3.0, 4.0));
        assert_eq!(r.at(-2.0), Point3::new(0.0, 3.0, 4.0));
    }

    #[test]
    fn test_ray_at_unnormalized_direction() {
        // at() scales by the raw direction length
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(r.at(0.5), Point3::new(0.0, 1.0, 0.0));
    }
}
