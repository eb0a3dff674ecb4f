use arena_physics::{
    core::{ContactEventType, SimulationConfig},
    math::Vec2,
    BodyBuilder, BodyType, Level, Scene, Trigger, Triggers, Vector,
};
use approx::{assert_abs_diff_eq, assert_relative_eq};

fn scene() -> Scene {
    let mut scene = Scene::new();
    scene.refresh_display(80.0, 24.0, 0.0, 0.0);
    scene
}

#[test]
fn test_falling_body_lands_on_floor() {
    let mut scene = scene();
    let body = scene.add(
        BodyBuilder::falling()
            .position(Vector::new(10.0, 10.0))
            .size(Vector::new(1.0, 0.6))
            .elasticity(0.5)
            .groups(&[0, 1])
            .gravity(Vector::new(0.0, 0.49))
            .z(1)
            .build()
            .unwrap(),
    );
    scene.add(
        BodyBuilder::wall()
            .position(Vector::new(0.0, 11.0))
            .size(Vector::new(20.0, 1.0))
            .groups(&[1])
            .build()
            .unwrap(),
    );
    let frame = scene.frame();

    // No contact yet, so only gravity acts
    scene.tick();
    assert_relative_eq!(scene.get_body(body).unwrap().get_velocity().y(&frame), 0.49, epsilon = 1e-6);
    assert!(scene.events().is_empty());

    scene.tick();
    assert_eq!(scene.events().get_contact_events_of_type(ContactEventType::Static).len(), 1);

    for _ in 0..20 {
        let a = scene.get_body(body).unwrap();
        assert_abs_diff_eq!(a.get_velocity().y(&frame), 0.0, epsilon = 1e-4);
        assert!(a.bounds(&frame).bottom() <= 11.0 + 1e-3);
        scene.tick();
    }
}

#[test]
fn test_unit_body_touching_floor_still_falls_first() {
    let mut scene = scene();
    let body = scene.add(
        BodyBuilder::falling()
            .position(Vector::new(10.0, 10.0))
            .elasticity(0.5)
            .groups(&[0, 1])
            .gravity(Vector::new(0.0, 0.49))
            .build()
            .unwrap(),
    );
    scene.add(
        BodyBuilder::wall()
            .position(Vector::new(0.0, 11.0))
            .size(Vector::new(20.0, 1.0))
            .groups(&[1])
            .build()
            .unwrap(),
    );
    let frame = scene.frame();

    // The bottom edge sits on the floor's top edge but nothing pushes yet
    scene.tick();
    assert_relative_eq!(scene.get_body(body).unwrap().get_velocity().y(&frame), 0.49, epsilon = 1e-6);
    assert!(scene.events().is_empty());

    scene.tick();
    assert_eq!(scene.events().get_contact_events_of_type(ContactEventType::Static).len(), 1);
    assert!(scene.get_body(body).unwrap().is_settled());

    for _ in 0..20 {
        let a = scene.get_body(body).unwrap();
        assert_abs_diff_eq!(a.get_velocity().y(&frame), 0.0, epsilon = 1e-4);
        assert!(a.bounds(&frame).bottom() <= 11.0 + 1e-3);
        scene.tick();
    }
}

#[test]
fn test_disjoint_groups_fall_through() {
    let mut scene = scene();
    let body = scene.add(
        BodyBuilder::falling()
            .position(Vector::new(10.0, 10.0))
            .groups(&[2])
            .gravity(Vector::new(0.0, 0.49))
            .build()
            .unwrap(),
    );
    scene.add(
        BodyBuilder::wall()
            .position(Vector::new(0.0, 11.0))
            .size(Vector::new(20.0, 1.0))
            .groups(&[1])
            .build()
            .unwrap(),
    );
    let frame = scene.frame();
    assert!(!scene.contacts_for(body).unwrap().is_empty());

    for tick in 1..=3 {
        scene.tick();
        let velocity = scene.get_body(body).unwrap().get_velocity().y(&frame);
        assert_relative_eq!(velocity, 0.49 * tick as f32, epsilon = 1e-5);
    }
    assert!(scene.events().is_empty());
}

#[test]
fn test_arena_edge_stops_body() {
    let mut scene = Scene::new();
    scene.refresh_display(20.0, 10.0, 0.0, 0.0);
    let body = scene.add(
        BodyBuilder::falling()
            .position(Vector::new(17.0, 4.0))
            .velocity(Vector::new(1.0, 0.0))
            .gravity(Vector::zero())
            .build()
            .unwrap(),
    );
    let frame = scene.frame();

    let mut stopped = false;
    for _ in 0..10 {
        scene.tick();
        let a = scene.get_body(body).unwrap();
        assert!(a.bounds(&frame).right() <= 20.0 + 1e-3);
        if !scene.events().get_contact_events_of_type(ContactEventType::Edge).is_empty() {
            stopped = true;
        }
    }

    assert!(stopped);
    assert_abs_diff_eq!(scene.get_body(body).unwrap().get_velocity().x(&frame), 0.0, epsilon = 1e-6);
}

#[test]
fn test_open_arena_lets_bodies_leave() {
    let mut config = SimulationConfig::default();
    config.solid_edges = false;
    let mut scene = Scene::with_config(config);
    scene.refresh_display(20.0, 10.0, 0.0, 0.0);
    let body = scene.add(
        BodyBuilder::falling()
            .position(Vector::new(19.0, 4.0))
            .velocity(Vector::new(1.0, 0.0))
            .gravity(Vector::zero())
            .build()
            .unwrap(),
    );

    scene.step(3);
    assert_eq!(scene.get_body(body).unwrap().get_position().x(&scene.frame()), 22.0);
}

#[test]
fn test_equal_masses_exchange_velocity() {
    let mut scene = scene();
    let a = scene.add(
        BodyBuilder::falling()
            .position(Vector::new(10.0, 5.0))
            .velocity(Vector::new(1.0, 0.0))
            .elasticity(1.0)
            .gravity(Vector::zero())
            .build()
            .unwrap(),
    );
    let b = scene.add(
        BodyBuilder::falling()
            .position(Vector::new(11.0, 5.0))
            .gravity(Vector::zero())
            .build()
            .unwrap(),
    );
    let frame = scene.frame();

    scene.tick();

    let va = scene.get_body(a).unwrap().get_velocity().resolve(&frame);
    let vb = scene.get_body(b).unwrap().get_velocity().resolve(&frame);
    assert_abs_diff_eq!(va.x, 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(vb.x, 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!((va + vb).x, 1.0, epsilon = 1e-5);

    let events = scene.events().get_contact_events_of_type(ContactEventType::Elastic);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].body, a);
    assert_eq!(events[0].neighbor, Some(b));
}

/// Runs one tick of a moving body hitting a resting one. Returns both
/// velocities and the number of elastic events.
fn collide(resting_first: bool) -> (Vec2, Vec2, usize) {
    let mut scene = scene();
    let moving = BodyBuilder::falling()
        .position(Vector::new(10.0, 5.0))
        .velocity(Vector::new(1.0, 0.0))
        .elasticity(1.0)
        .gravity(Vector::zero())
        .build()
        .unwrap();
    let resting = BodyBuilder::falling()
        .position(Vector::new(11.0, 5.0))
        .elasticity(1.0)
        .gravity(Vector::zero())
        .build()
        .unwrap();

    let (a, b) = if resting_first {
        let b = scene.add(resting);
        (scene.add(moving), b)
    } else {
        let a = scene.add(moving);
        (a, scene.add(resting))
    };
    let frame = scene.frame();
    scene.tick();

    let va = scene.get_body(a).unwrap().get_velocity().resolve(&frame);
    let vb = scene.get_body(b).unwrap().get_velocity().resolve(&frame);
    let exchanges = scene.events().get_contact_events_of_type(ContactEventType::Elastic).len();
    (va, vb, exchanges)
}

#[test]
fn test_collision_outcome_ignores_insertion_order() {
    for resting_first in [false, true] {
        let (va, vb, exchanges) = collide(resting_first);

        assert_eq!(exchanges, 1, "resting_first = {}", resting_first);
        assert_abs_diff_eq!(va.x + vb.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(va.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(vb.x, 1.0, epsilon = 1e-5);
    }

    let (forward_a, forward_b, _) = collide(false);
    let (reverse_a, reverse_b, _) = collide(true);
    assert_abs_diff_eq!(forward_a.x, reverse_a.x, epsilon = 1e-5);
    assert_abs_diff_eq!(forward_b.x, reverse_b.x, epsilon = 1e-5);
}

#[test]
fn test_kinematic_body_moves_and_blocks() {
    let mut scene = scene();
    let platform = scene.add(
        BodyBuilder::kinematic()
            .position(Vector::new(5.0, 12.0))
            .size(Vector::new(10.0, 1.0))
            .velocity(Vector::new(0.5, 0.0))
            .build()
            .unwrap(),
    );
    let rider = scene.add(
        BodyBuilder::falling()
            .position(Vector::new(8.0, 11.0))
            .gravity(Vector::new(0.0, 0.49))
            .build()
            .unwrap(),
    );
    let frame = scene.frame();

    scene.step(4);

    let p = scene.get_body(platform).unwrap();
    assert_eq!(p.get_body_type(), BodyType::Kinematic);
    assert_relative_eq!(p.get_position().x(&frame), 7.0, epsilon = 1e-5);
    assert_relative_eq!(p.get_position().y(&frame), 12.0, epsilon = 1e-5);

    let r = scene.get_body(rider).unwrap();
    assert!(r.bounds(&frame).bottom() <= 12.0 + 1e-3);
}

#[test]
fn test_force_trigger_applies_once() {
    let mut scene = scene();
    let body = scene.add(
        BodyBuilder::falling()
            .position(Vector::new(10.0, 5.0))
            .mass(2.0)
            .gravity(Vector::zero())
            .build()
            .unwrap(),
    );
    let triggers = Triggers::new(vec![
        Trigger::force(body, Vector::new(4.0, 0.0)),
        Trigger::custom(9).with_option("door", "open"),
    ]);

    let custom = scene.fire(&triggers).unwrap();
    assert_eq!(custom.len(), 1);
    assert!(matches!(custom[0], Trigger::Custom { identifier: 9, .. }));

    let frame = scene.frame();
    scene.tick();
    assert_eq!(scene.get_body(body).unwrap().get_velocity().resolve(&frame), Vec2::new(2.0, 0.0));
    scene.tick();
    assert_eq!(scene.get_body(body).unwrap().get_velocity().resolve(&frame), Vec2::new(2.0, 0.0));
}

#[test]
fn test_bodies_in_z_order() {
    let mut scene = scene();
    let back = scene.add(BodyBuilder::wall().z(-1).build().unwrap());
    let front = scene.add(BodyBuilder::wall().z(5).build().unwrap());
    let middle = scene.add(BodyBuilder::wall().z(0).build().unwrap());
    let middle_later = scene.add(BodyBuilder::wall().z(0).build().unwrap());

    let order: Vec<_> = scene.bodies_in_z_order().map(|(handle, _)| handle).collect();
    assert_eq!(order, vec![back, middle, middle_later, front]);

    scene.set_depth(back, 10).unwrap();
    let order: Vec<_> = scene.bodies_in_z_order().map(|(handle, _)| handle).collect();
    assert_eq!(order, vec![middle, middle_later, front, back]);
    assert_eq!(scene.get_body(back).unwrap().get_z(), 10);
}

#[test]
fn test_clear_empties_scene() {
    let mut scene = Level::new("test")
        .with_bodies(arena_physics::bodies::game_zone(20.0))
        .build()
        .unwrap();
    scene.refresh_display(80.0, 24.0, 0.0, 0.0);
    scene.tick();
    assert_eq!(scene.len(), 4);
    assert_eq!(scene.tick_count(), 1);

    scene.clear();
    assert!(scene.is_empty());
    assert_eq!(scene.tick_count(), 0);
}

#[test]
fn test_body_inside_game_zone_stays_inside() {
    let mut scene = Level::new("zone")
        .with_bodies(arena_physics::bodies::game_zone(10.0))
        .with_body(
            BodyBuilder::falling()
                .position(Vector::new(4.0, 2.0))
                .velocity(Vector::new(0.3, 0.0))
                .gravity(Vector::new(0.0, 0.2)),
        )
        .build()
        .unwrap();
    scene.refresh_display(80.0, 24.0, 0.0, 0.0);
    let frame = scene.frame();

    scene.step(60);

    for (_, body) in scene.bodies_in_z_order() {
        if body.get_body_type() == BodyType::Dynamic {
            let bounds = body.bounds(&frame);
            assert!(bounds.bottom() <= 10.0 + 1e-2);
            assert!(bounds.right() <= 10.0 + 1e-2);
            assert!(bounds.left() >= -1e-2);
        }
    }
}

#[test]
fn test_relative_positions_follow_display() {
    let mut scene = Scene::new();
    scene.refresh_display(80.0, 24.0, 0.0, 0.0);
    let body = scene.add(
        BodyBuilder::wall()
            .position(Vector::relative(0.5, 0.5))
            .build()
            .unwrap(),
    );

    let frame = scene.refresh_display(40.0, 12.0, 0.0, 0.0);
    assert!(scene.display().was_resized());
    assert_eq!(scene.get_body(body).unwrap().get_position().resolve(&frame), Vec2::new(20.0, 6.0));
}
