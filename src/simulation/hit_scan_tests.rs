use crate::models::{EntityId, RigidBody};
use crate::simulation::PhysicsWorld;
use approx::assert_relative_eq;

fn tracked_body(
    world: &mut PhysicsWorld,
    position: (f64, f64, f64),
    mass: f64,
) -> EntityId {
    let body = RigidBody::new(
        position,
        (0.0, 0.0, 0.0),
        (1.0, 1.0, 1.0),
        mass,
        1.0,
        0.0,
        100.0,
        40.0,
    )
    .expect("valid body");
    let entity = world.add_body(body);
    world
        .attach_cuboid_hull(entity, 1.0, 1.0, 1.0)
        .expect("cuboid hull");
    entity
}

#[test]
fn test_missing_ray_reports_not_found_and_completes() {
    let mut world = PhysicsWorld::default();
    let step = world.constants.fixed_time_step();
    tracked_body(&mut world, (0.0, 0.0, 50.0), 1.0);

    let ray_id = world
        .cast_ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 100.0, false)
        .expect("valid ray");

    world.tick(step);

    let ray = world.ray(ray_id).expect("ray present");
    assert!(!ray.found);
    assert!(ray.complete);
    assert_eq!(ray.hit_point, (0.0, 0.0, 0.0), "hit point stays untouched on a miss");
    assert!(ray.hit_entity.is_none());
}

#[test]
fn test_closest_hit_wins_among_candidates() {
    let mut world = PhysicsWorld::default();
    let step = world.constants.fixed_time_step();
    let near = tracked_body(&mut world, (5.0, 0.0, 0.0), 1.0);
    let _far = tracked_body(&mut world, (12.0, 0.0, 0.0), 1.0);

    let ray_id = world
        .cast_ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 100.0, false)
        .expect("valid ray");

    world.tick(step);

    let ray = world.ray(ray_id).expect("ray present");
    assert!(ray.found);
    assert_eq!(ray.hit_entity, Some(near));
    assert_relative_eq!(ray.hit_point.0, 4.5, epsilon = 1e-9);
}

#[test]
fn test_interacting_hit_applies_linear_and_angular_impulse() {
    let mut world = PhysicsWorld::default();
    let step = world.constants.fixed_time_step();
    // Body center sits 0.2 above the ray line, so the hit point is offset.
    let target = tracked_body(&mut world, (10.0, 0.2, 0.0), 2.0);

    world
        .cast_ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 100.0, true)
        .expect("valid ray");

    world.tick(step);

    let body = world.body(target).expect("body present");

    // Linear: direction * (20 / mass).
    assert_relative_eq!(body.velocity.0, 10.0, epsilon = 1e-9);
    assert_relative_eq!(body.velocity.1, 0.0, epsilon = 1e-9);

    // Angular: offset (-0.5, -0.2, 0), impulse (10, 0, 0), torque -2,
    // inertia 1, factor -100.
    assert_relative_eq!(body.angular_velocity, 200.0, epsilon = 1e-9);
}

#[test]
fn test_non_interacting_hit_leaves_the_body_alone() {
    let mut world = PhysicsWorld::default();
    let step = world.constants.fixed_time_step();
    let target = tracked_body(&mut world, (10.0, 0.0, 0.0), 2.0);

    let ray_id = world
        .cast_ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 100.0, false)
        .expect("valid ray");

    world.tick(step);

    let ray = world.ray(ray_id).expect("ray present");
    assert!(ray.found);
    assert_eq!(ray.hit_entity, Some(target));

    let body = world.body(target).expect("body present");
    assert_eq!(body.velocity, (0.0, 0.0, 0.0));
    assert_eq!(body.angular_velocity, 0.0);
}

#[test]
fn test_pointer_ray_is_reprocessed_every_tick() {
    let mut world = PhysicsWorld::default();
    let step = world.constants.fixed_time_step();
    let target = tracked_body(&mut world, (10.0, 0.0, 0.0), 1.0);

    let pointer = world
        .set_pointer_ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 100.0)
        .expect("valid ray");

    world.tick(step);
    {
        let ray = world.ray(pointer).expect("ray present");
        assert!(ray.found);
        assert!(ray.complete, "the pointer ray completes like any record");
        assert_eq!(ray.hit_entity, Some(target));
    }

    // Move the target out of the line of fire; the pointer must notice even
    // though its complete flag is already set.
    world.body_mut(target).expect("body present").position = (0.0, 50.0, 0.0);
    world.tick(step);

    let ray = world.ray(pointer).expect("ray present");
    assert!(!ray.found, "pointer ray re-resolves every pass");
}

#[test]
fn test_one_shot_ray_is_resolved_only_once() {
    let mut world = PhysicsWorld::default();
    let step = world.constants.fixed_time_step();
    let target = tracked_body(&mut world, (10.0, 0.0, 0.0), 1.0);

    let ray_id = world
        .cast_ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 100.0, false)
        .expect("valid ray");

    world.tick(step);
    assert!(world.ray(ray_id).expect("ray present").found);

    // Even after the target leaves, the completed record keeps its result.
    world.body_mut(target).expect("body present").position = (0.0, 50.0, 0.0);
    world.tick(step);

    let ray = world.ray(ray_id).expect("ray present");
    assert!(ray.found, "completed record is not reprocessed");
    assert_eq!(ray.hit_entity, Some(target));
}

#[test]
fn test_stale_index_entries_for_removed_entities_are_skipped() {
    let mut world = PhysicsWorld::default();
    let step = world.constants.fixed_time_step();
    let doomed = tracked_body(&mut world, (5.0, 0.0, 0.0), 1.0);

    // Publish an index that references the entity, then drop the entity
    // without rebuilding.
    world.tick(step);
    world.remove_entity(doomed);

    let ray_id = world
        .cast_ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 100.0, false)
        .expect("valid ray");
    world.hit_scan();

    let ray = world.ray(ray_id).expect("ray present");
    assert!(!ray.found, "a stale index entry must not produce a hit");
    assert!(ray.complete);
}

#[test]
fn test_pointer_retarget_clears_previous_result() {
    let mut world = PhysicsWorld::default();
    let step = world.constants.fixed_time_step();
    let target = tracked_body(&mut world, (10.0, 0.0, 0.0), 1.0);

    let pointer = world
        .set_pointer_ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 100.0)
        .expect("valid ray");
    world.tick(step);
    assert_eq!(world.ray(pointer).expect("ray present").hit_entity, Some(target));

    let same = world
        .set_pointer_ray((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), 100.0)
        .expect("valid ray");
    assert_eq!(same, pointer, "the pointer record is reused");

    let ray = world.ray(pointer).expect("ray present");
    assert!(!ray.complete);
    assert!(ray.hit_entity.is_none());
}
