use glam::Vec3;

use super::error::RenderError;

/// Unit-length copy of `v`. Never mutates the argument.
pub fn normalize(v: Vec3) -> Result<Vec3, RenderError> {
    v.try_normalize().ok_or(RenderError::DegenerateVector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_returns_unit_length() {
        let n = normalize(Vec3::new(3.0, 4.0, 0.0)).unwrap();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn normalize_does_not_mutate_input() {
        let v = Vec3::new(0.0, 0.0, -4.0);
        let n = normalize(v).unwrap();
        assert_eq!(v, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(n, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn normalize_rejects_near_zero_vectors() {
        assert_eq!(normalize(Vec3::ZERO), Err(RenderError::DegenerateVector));
        assert_eq!(
            normalize(Vec3::new(1e-30, -1e-30, 0.0)),
            Err(RenderError::DegenerateVector)
        );
    }

    #[test]
    fn cross_is_anti_commutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 5.0, 0.5);
        assert_eq!(a.cross(b), -b.cross(a));
    }
}
