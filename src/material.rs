//! Material system for ray scattering.
//!
//! A closed set of surface models: Lambertian (diffuse), Metal (specular
//! with roughness) and Dielectric (transparent). The set is small and
//! fixed, so materials are a tagged enum dispatched in `scatter` rather
//! than trait objects; a material value is shared by copy across any
//! number of primitives and never mutated.

use rand::Rng;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;
use crate::vec3::{self, Color, Vec3};

/// Surface material variants.
#[derive(Debug, Clone, Copy)]
pub enum MaterialType {
    /// Diffuse material for matte surfaces.
    Lambertian {
        /// Fractional reflectance per color channel.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal tint.
        albedo: Color,
        /// Roughness in [0, 1]: 0 is a perfect mirror. Out-of-range
        /// values are clamped at scatter time.
        fuzz: f64,
    },

    /// Transparent material with refraction (glass, water).
    Dielectric {
        /// Index of refraction relative to the surrounding medium.
        refraction_index: f64,
    },
}

impl MaterialType {
    /// Compute how an incoming ray scatters off this surface.
    ///
    /// Returns the attenuation color and the scattered ray, or `None`
    /// when the ray is absorbed.
    pub fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        rng: &mut impl Rng,
    ) -> Option<(Color, Ray)> {
        match *self {
            MaterialType::Lambertian { albedo } => scatter_lambertian(albedo, rec, rng),
            MaterialType::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec, rng),
            MaterialType::Dielectric { refraction_index } => {
                scatter_dielectric(refraction_index, r_in, rec, rng)
            }
        }
    }
}

/// Diffuse scattering: normal plus a random unit vector.
fn scatter_lambertian(
    albedo: Color,
    rec: &HitRecord,
    rng: &mut impl Rng,
) -> Option<(Color, Ray)> {
    let mut scatter_direction = rec.normal + random::random_unit_vector(rng);

    // The random vector can cancel the normal almost exactly
    if vec3::near_zero(scatter_direction) {
        scatter_direction = rec.normal;
    }

    Some((albedo, Ray::new(rec.p, scatter_direction)))
}

/// Specular reflection perturbed by the fuzz radius.
fn scatter_metal(
    albedo: Color,
    fuzz: f64,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut impl Rng,
) -> Option<(Color, Ray)> {
    let reflected = reflect(r_in.direction, rec.normal);
    let direction = vec3::unit_vector(reflected)
        + fuzz.clamp(0.0, 1.0) * random::random_unit_vector(rng);

    // Fuzzed reflections that end up under the surface are absorbed
    if direction.dot(rec.normal) > 0.0 {
        Some((albedo, Ray::new(rec.p, direction)))
    } else {
        None
    }
}

/// Reflection or refraction at a dielectric boundary.
fn scatter_dielectric(
    refraction_index: f64,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut impl Rng,
) -> Option<(Color, Ray)> {
    // Glass absorbs nothing
    let attenuation = Color::ONE;

    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = vec3::unit_vector(r_in.direction);
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;
    let direction = if cannot_refract || reflectance(cos_theta, ri) > random::random_f64(rng) {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    Some((attenuation, Ray::new(rec.p, direction)))
}

/// Reflect `v` about the normal `n`.
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with normal `n` and
/// refraction ratio `etai_over_etat` (Snell's law).
fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation of angle-dependent reflectance.
fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
