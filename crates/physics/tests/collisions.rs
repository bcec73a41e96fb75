use physics::{
    check_collisions, overlaps, Contact, KinematicBody, OverlapAxes, SimParams, Simulation, Vec3,
    UNIT_EXTENT,
};

fn body(vel: [f32; 3], pos: [f32; 3], mass: f32) -> KinematicBody {
    KinematicBody::new(vel.into(), pos.into(), mass).unwrap()
}

#[test]
fn touching_edge_is_a_collision() {
    let p = Vec3::new(3.0, -2.0, 0.0);
    let a = KinematicBody::new(Vec3::ZERO, p, 1.0).unwrap();
    let touching = KinematicBody::new(Vec3::ZERO, p + Vec3::new(1.0, 0.0, 0.0), 1.0).unwrap();
    let apart = KinematicBody::new(Vec3::ZERO, p + Vec3::new(1.0001, 0.0, 0.0), 1.0).unwrap();
    assert!(overlaps(&a, &touching));
    assert!(!overlaps(&a, &apart));
}

#[test]
fn three_bodies_one_exchange() {
    let mut bodies = vec![
        body([2.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0),
        body([-1.0, 0.0, 0.0], [0.9, 0.0, 0.0], 1.0),
        body([0.0, -0.5, 0.0], [0.0, 5.0, 0.0], 3.0),
    ];
    let contacts = check_collisions(&mut bodies, UNIT_EXTENT, OverlapAxes::Planar);

    assert_eq!(contacts, vec![Contact { a: 0, b: 1 }]);
    assert_eq!(bodies[0].velocity(), Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(bodies[1].velocity(), Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(bodies[2].velocity(), Vec3::new(0.0, -0.5, 0.0));
}

#[test]
fn collision_changes_velocity_not_position() {
    let mut bodies = vec![
        body([1.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0),
        body([0.0, 0.0, 0.0], [0.5, 0.0, 0.0], 1.0),
    ];
    check_collisions(&mut bodies, UNIT_EXTENT, OverlapAxes::Planar);
    assert_eq!(bodies[0].position(), Vec3::ZERO);
    assert_eq!(bodies[1].position(), Vec3::new(0.5, 0.0, 0.0));
}

#[test]
fn spatial_axes_separate_bodies_in_depth() -> anyhow::Result<()> {
    let params = SimParams {
        overlap_axes: OverlapAxes::Spatial,
        ..SimParams::default()
    };
    let mut sim = Simulation::with_params(params)?;
    let near = sim.add_body(KinematicBody::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 1.0)?);
    sim.add_body(KinematicBody::new(Vec3::ZERO, Vec3::new(0.5, 0.5, 4.0), 1.0)?);

    let report = sim.step();
    assert!(report.contacts.is_empty());
    assert_eq!(sim.body(near).unwrap().velocity(), Vec3::new(1.0, 0.0, 0.0));
    Ok(())
}

#[test]
fn wide_extent_widens_overlap() -> anyhow::Result<()> {
    let params = SimParams {
        extent: Vec3::new(2.0, 1.0, 1.0),
        ..SimParams::default()
    };
    let mut sim = Simulation::with_params(params)?;
    sim.add_body(KinematicBody::new(Vec3::ZERO, Vec3::ZERO, 1.0)?);
    sim.add_body(KinematicBody::new(Vec3::ZERO, Vec3::new(1.8, 0.0, 0.0), 1.0)?);
    assert_eq!(sim.step().contacts.len(), 1);
    Ok(())
}
