use cgmath::prelude::*;
use cgmath::Vector3;

use crate::consts;
use crate::float::*;

/// Normalize a vector unless it is too short (or not finite) to have a direction
pub fn try_normalize(v: Vector3<Float>) -> Option<Vector3<Float>> {
    if !is_finite(v) {
        return None;
    }
    // Scale by the largest component first so the squared length can't overflow
    let scale = v.x.abs().max(v.y.abs()).max(v.z.abs());
    if scale == 0.0 {
        return None;
    }
    let scaled = v / scale;
    let len = scaled.magnitude();
    if scale * len > consts::DEGENERATE_LENGTH {
        Some(scaled / len)
    } else {
        None
    }
}

/// Mirror direction around a unit normal
pub fn reflect(dir: Vector3<Float>, n: Vector3<Float>) -> Vector3<Float> {
    dir - 2.0 * dir.dot(n) * n
}

pub fn is_finite(v: Vector3<Float>) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_guards_zero_vector() {
        assert!(try_normalize(Vector3::new(0.0, 0.0, 0.0)).is_none());
        assert!(try_normalize(Vector3::new(1e-30, 0.0, 0.0)).is_none());
        assert!(try_normalize(Vector3::new(Float::NAN, 0.0, 0.0)).is_none());
        let n = try_normalize(Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn normalize_huge_vectors() {
        let big = Float::MAX / 4.0;
        let n = try_normalize(Vector3::new(big, big, 0.0)).unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        assert!((n.x - n.y).abs() < 1e-6);
        assert!(n.z == 0.0);
    }

    #[test]
    fn reflect_flips_normal_component() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        let r = reflect(Vector3::new(1.0, -1.0, 0.0), n);
        assert_eq!(r, Vector3::new(1.0, 1.0, 0.0));
    }
}
