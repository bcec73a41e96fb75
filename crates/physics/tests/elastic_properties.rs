use physics::{elastic_exchange, Vec3};
use proptest::prelude::*;

fn energy(m1: f32, v1: Vec3, m2: f32, v2: Vec3) -> f32 {
    m1 * v1.length_squared() + m2 * v2.length_squared()
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn exchange_conserves_kinetic_energy(
        m1 in 0.1f32..100.0,
        m2 in 0.1f32..100.0,
        v1 in vec3(),
        v2 in vec3(),
    ) {
        let before = energy(m1, v1, m2, v2);
        let (v1_out, v2_out) = elastic_exchange(m1, v1, m2, v2);
        let after = energy(m1, v1_out, m2, v2_out);
        prop_assert!(
            (before - after).abs() <= 1e-4 * before.max(1.0),
            "energy drifted: {before} -> {after}"
        );
    }

    #[test]
    fn exchange_conserves_momentum(
        m1 in 0.1f32..100.0,
        m2 in 0.1f32..100.0,
        v1 in vec3(),
        v2 in vec3(),
    ) {
        let before = v1 * m1 + v2 * m2;
        let (v1_out, v2_out) = elastic_exchange(m1, v1, m2, v2);
        let after = v1_out * m1 + v2_out * m2;
        let scale = before.length().max(m1 * v1.length() + m2 * v2.length()).max(1.0);
        prop_assert!((before - after).length() <= 1e-4 * scale);
    }

    #[test]
    fn immovable_partner_preserves_speed(m in 0.1f32..100.0, v in vec3()) {
        let (out, wall) = elastic_exchange(m, v, f32::INFINITY, Vec3::ZERO);
        prop_assert_eq!(wall, Vec3::ZERO);
        prop_assert_eq!(out, -v);
    }
}

#[test]
fn equal_masses_swap_velocities() {
    let (a, b) = elastic_exchange(1.0, Vec3::new(2.0, 0.0, 0.0), 1.0, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(a, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(b, Vec3::new(2.0, 0.0, 0.0));
}
