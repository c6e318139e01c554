//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives, the HitRecord
//! produced by a successful intersection, and the HittableList scene
//! aggregate.

use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Ray-object intersection information.
///
/// Transient result of a single intersection query; built fresh per test
/// and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Surface normal at the intersection point (unit vector, always
    /// oriented against the incoming ray)
    pub normal: Vec3,
    /// Ray parameter at the intersection point
    pub t: f64,
    /// True if the ray struck the outward-facing side of the surface
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: MaterialType,
}

impl HitRecord {
    /// Set the surface normal and determine front/back face.
    ///
    /// `outward_normal` must be unit length. The stored normal always
    /// opposes the incident ray.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.front_face = r.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by rays.
///
/// `Send + Sync` so a scene can be shared read-only across workers; the
/// render loop itself is single-threaded.
pub trait Hittable: Send + Sync {
    /// Test for ray intersection with t strictly inside `ray_t`.
    ///
    /// Returns the nearest accepted intersection, or `None`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Linear search over polymorphic primitives; nearest hit wins regardless
/// of insertion order.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Remove all objects from the scene.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_hit = None;
        let mut closest_so_far = ray_t.max;

        // Shrink the search window to the closest t seen so far; a
        // streaming minimum, not a sort.
        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest_hit = Some(rec);
            }
        }

        closest_hit
    }
}
