use crate::models::{Extents, RigidBody};
use crate::simulation::PhysicsWorld;
use crate::spatial::{BoundsTree, LeafEntry};
use crate::utils::add_vectors;

impl PhysicsWorld {
    /// Advances every tracked body by one fixed sub-step, recomputes hull
    /// geometry and bounds, and publishes a fresh spatial index over the
    /// results.
    pub(crate) fn integrate(&mut self) {
        self.world_extents.reset();
        self.tree_queue.clear();

        let dt = self.fixed_time_step;
        for (entity, body) in self.bodies.iter_mut() {
            assert!(
                !body.hulls.is_empty(),
                "tracked body {} has no hulls",
                entity
            );
            integrate_body(body, dt, &mut self.world_extents);
            self.tree_queue.push(LeafEntry {
                bounds: body.bounds,
                entity: *entity,
            });
        }

        let root_bounds = self.world_extents.as_bounds();
        self.tree = Some(BoundsTree::build(
            root_bounds,
            &self.tree_queue,
            self.constants.min_leaf_size,
            self.constants.max_leaf_objects,
        ));
    }
}

/// One fixed sub-step for a single body.
///
/// Order matters: the previous state snapshot comes first (it anchors render
/// interpolation), yaw integrates before the thrust decomposition so the new
/// heading steers this step's force, and drag scales velocity before the
/// acceleration is added.
fn integrate_body(body: &mut RigidBody, dt: f64, world_extents: &mut Extents) {
    body.previous_position = body.position;
    body.previous_rotation = body.rotation;

    let torque = body.yaw * body.max_yaw_torque;
    body.angular_acceleration = torque / body.inertia;
    body.angular_velocity += body.angular_acceleration * dt;
    body.angular_velocity *= 1.0 - body.drag * dt;
    body.rotation.1 += body.angular_velocity * dt;

    let force = body.thrust * body.max_thrust;
    let force_x = body.rotation.1.sin() * force;
    let force_z = body.rotation.1.cos() * force;
    body.acceleration = (
        force_x / body.mass * dt,
        0.0,
        force_z / body.mass * dt,
    );

    body.velocity = (
        body.velocity.0 * (1.0 - body.drag * dt),
        body.velocity.1 * (1.0 - body.drag * dt),
        body.velocity.2 * (1.0 - body.drag * dt),
    );
    body.velocity = add_vectors(body.velocity, body.acceleration);

    body.position.0 += body.velocity.0 * dt;
    body.position.1 += body.velocity.1 * dt;
    body.position.2 += body.velocity.2 * dt;

    update_bounding_geometry(body, world_extents);
}

/// Recomputes the body's hull geometry from its new transform and refreshes
/// the body bounds as the union of its hull bounds.
fn update_bounding_geometry(body: &mut RigidBody, world_extents: &mut Extents) {
    let position = body.position;
    let rotation = body.rotation;
    let scale = body.scale;

    let mut model_extents = Extents::new();
    for hull in &mut body.hulls {
        hull.transform(position, rotation, scale, world_extents);
        model_extents.include_bounds(&hull.bounds);
    }
    body.bounds = model_extents.as_bounds();
}
