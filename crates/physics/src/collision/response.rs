//! Elastic velocity exchange between two colliding bodies.

use crate::body::KinematicBody;
use crate::types::Vec3;

/// One-dimensional elastic collision applied independently to x, y and z.
///
/// Returns the post-collision velocities `(v1', v2')`, both computed from the
/// inputs as given:
///
/// ```text
/// v1' = v1 (m1 - m2)/(m1 + m2) + v2 (2 m2)/(m1 + m2)
/// v2' = v2 (m2 - m1)/(m1 + m2) + v1 (2 m1)/(m1 + m2)
/// ```
///
/// An infinite mass takes the limit of the formula: the immovable side keeps
/// its velocity and the other side leaves with `2·v_immovable − v`. Two
/// immovable bodies exchange nothing.
#[must_use]
pub fn elastic_exchange(m1: f32, v1: Vec3, m2: f32, v2: Vec3) -> (Vec3, Vec3) {
    match (m1.is_infinite(), m2.is_infinite()) {
        (true, true) => (v1, v2),
        (true, false) => (v1, v1 * 2.0 - v2),
        (false, true) => (v2 * 2.0 - v1, v2),
        (false, false) => {
            let total = m1 + m2;
            debug_assert!(
                total > 0.0 && total.is_finite(),
                "combined mass must be positive and finite, got {total}"
            );
            let v1_out = v1 * ((m1 - m2) / total) + v2 * (2.0 * m2 / total);
            let v2_out = v2 * ((m2 - m1) / total) + v1 * (2.0 * m1 / total);
            (v1_out, v2_out)
        }
    }
}

/// Resolves one overlapping pair in place. Both outputs are computed from the
/// pre-collision velocities before either body is written.
pub fn resolve_pair(a: &mut KinematicBody, b: &mut KinematicBody) {
    let (va, vb) = elastic_exchange(a.mass(), a.velocity(), b.mass(), b.velocity());
    a.set_velocity(va);
    b.set_velocity(vb);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::MAX_MASS;

    #[test]
    fn equal_masses_swap_velocities() {
        let (a, b) = elastic_exchange(1.0, Vec3::new(2.0, 0.0, 0.0), 1.0, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(a, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(b, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn immovable_side_reflects_the_other() {
        let v = Vec3::new(0.5, -1.0, 0.0);
        let (a, b) = elastic_exchange(3.0, v, f32::INFINITY, Vec3::ZERO);
        assert_eq!(a, -v);
        assert_eq!(b, Vec3::ZERO);

        let (a, b) = elastic_exchange(f32::INFINITY, Vec3::ZERO, 3.0, v);
        assert_eq!(a, Vec3::ZERO);
        assert_eq!(b, -v);
    }

    #[test]
    fn two_immovable_bodies_are_untouched() {
        let (a, b) = elastic_exchange(f32::INFINITY, Vec3::ZERO, f32::INFINITY, Vec3::ZERO);
        assert_eq!((a, b), (Vec3::ZERO, Vec3::ZERO));
    }

    #[test]
    fn heavy_target_approaches_reflection() {
        let (ball, wall) = elastic_exchange(1.0, Vec3::new(0.0, 1.0, 0.0), 200.0, Vec3::ZERO);
        assert!((ball.y + 199.0 / 201.0).abs() < 1e-6);
        assert!((wall.y - 2.0 / 201.0).abs() < 1e-6);
    }

    #[test]
    fn heaviest_bodies_exchange_finite_velocities() {
        let v = Vec3::new(1.0, 0.0, 0.0);
        let (a, b) = elastic_exchange(MAX_MASS, v, MAX_MASS, -v);
        assert_eq!((a, b), (-v, v));

        let mut heavy = KinematicBody::new(v, Vec3::ZERO, MAX_MASS).unwrap();
        let mut other = KinematicBody::new(-v, Vec3::ZERO, MAX_MASS).unwrap();
        resolve_pair(&mut heavy, &mut other);
        assert!(heavy.velocity().is_finite() && other.velocity().is_finite());
    }

    #[test]
    fn resolve_pair_reads_snapshotted_inputs() {
        let mut a = KinematicBody::new(Vec3::new(3.0, 1.0, 0.0), Vec3::ZERO, 2.0).unwrap();
        let mut b = KinematicBody::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::ZERO, 1.0).unwrap();
        let expected = elastic_exchange(2.0, a.velocity(), 1.0, b.velocity());
        resolve_pair(&mut a, &mut b);
        assert_eq!((a.velocity(), b.velocity()), expected);
    }
}
