//! Sphere primitive.
//!
//! Ray intersection uses the half-angle form of the quadratic, which
//! halves the b coefficient and drops a factor of two from the roots.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::Ray;
use crate::vec3::Point3;

/// Sphere defined by center, radius and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Point3,
    /// Radius of the sphere, always non-negative.
    pub radius: f64,
    /// Material at every point of the surface.
    pub material: MaterialType,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to 0.
    pub fn new(center: Point3, radius: f64, material: MaterialType) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - r.origin;
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root strictly inside the acceptable range, else the far one
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        let outward_normal = (p - self.center) / self.radius;
        let mut rec = HitRecord {
            p,
            normal: outward_normal,
            t: root,
            front_face: false,
            material: self.material,
        };
        rec.set_face_normal(r, outward_normal);

        Some(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::{Color, Vec3};

    fn gray() -> MaterialType {
        MaterialType::Lambertian {
            albedo: Color::splat(0.5),
        }
    }

    fn unit_bounds() -> Interval {
        Interval::new(0.001, f64::INFINITY)
    }

    #[test]
    fn test_hit_through_center() {
        // Camera at the origin looking down -z at a sphere half a unit deep
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, gray());
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&r, unit_bounds()).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-12);
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-12);
        assert!(rec.front_face);
    }

    #[test]
    fn test_hit_point_lies_on_surface() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, gray());
        for dir in [
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.1, 0.05, -1.0),
            Vec3::new(-0.2, 0.1, -1.0),
        ] {
            let r = Ray::new(Point3::ZERO, dir);
            let rec = sphere.hit(&r, unit_bounds()).unwrap();
            let dist = (rec.p - sphere.center).length();
            assert!((dist - sphere.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_miss_reports_none() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, gray());
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&r, unit_bounds()).is_none());
    }

    #[test]
    fn test_tangent_ray_single_root() {
        // Grazing ray along -z offset by exactly one radius: discriminant 0
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -2.0), 0.5, gray());
        let r = Ray::new(Point3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&r, unit_bounds()).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_normal_opposes_ray_from_inside() {
        // Ray starting at the center exits through the back face
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, gray());
        let r = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&r, unit_bounds()).unwrap();
        assert!(!rec.front_face);
        assert!(r.direction.dot(rec.normal) < 0.0);
    }

    #[test]
    fn test_front_face_normal_opposes_ray() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, gray());
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&r, unit_bounds()).unwrap();
        assert!(rec.front_face);
        assert!(r.direction.dot(rec.normal) < 0.0);
    }

    #[test]
    fn test_interval_rejects_near_root_accepts_far() {
        // Lower bound past the entry point selects the exit root
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, gray());
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&r, Interval::new(1.0, f64::INFINITY)).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-12);
        assert!(!rec.front_face);
    }

    #[test]
    fn test_negative_radius_clamps_to_zero() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), -2.0, gray());
        assert_eq!(sphere.radius, 0.0);
    }
}
