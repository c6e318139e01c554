//! Vector, point and color types for the renderer.
//!
//! All three are the same 3-component f64 vector; the aliases document
//! intent at call sites. Arithmetic, dot/cross and normalization come
//! from glam.

use glam::DVec3;

/// 3D vector.
pub type Vec3 = DVec3;

/// 3D point in world space.
pub type Point3 = DVec3;

/// RGB color with components conventionally in [0, 1] until quantization.
pub type Color = DVec3;

/// Threshold below which a component counts as zero.
const NEAR_ZERO_EPS: f64 = 1e-8;

/// Return the unit vector in the direction of `v`.
///
/// Returns the zero vector when `v` has zero length. This is a documented
/// degenerate case, not an error: miss shading normalizes arbitrary ray
/// directions and must not produce NaNs.
pub fn unit_vector(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// True if every component magnitude is below 1e-8.
///
/// Used to detect degenerate scatter directions before they become
/// zero-length rays.
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO_EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vector_length() {
        let v = Vec3::new(1.0, 2.0, -2.0);
        let u = unit_vector(v);
        assert!((u.length() - 1.0).abs() < 1e-12);
        // Same direction as the input
        assert!(u.dot(v) > 0.0);
    }

    #[test]
    fn test_unit_vector_zero_input() {
        // Zero-length input maps to the zero vector, not NaN
        let u = unit_vector(Vec3::ZERO);
        assert_eq!(u, Vec3::ZERO);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::new(1e-9, -1e-9, 1e-9)));
        assert!(!near_zero(Vec3::new(1e-7, 0.0, 0.0)));
        assert!(!near_zero(Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_elementwise_multiply() {
        // Colors attenuate by component-wise product
        let a = Color::new(0.5, 0.25, 1.0);
        let b = Color::new(0.5, 0.5, 0.0);
        assert_eq!(a * b, Color::new(0.25, 0.125, 0.0));
    }

    #[test]
    fn test_cross_product_basis() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    }
}
