use std::collections::{BTreeMap, VecDeque};

use crate::constants_config::SimulationConstants;
use crate::errors::PhysicsError;
use crate::models::{ConvexHull, EntityId, Extents, RayCast, RigidBody};
use crate::spatial::{BoundsTree, LeafEntry};

/// An unordered pair of hulls whose owning entities' broad-phase bounds
/// overlapped. Created and consumed within a single sub-step; never
/// persisted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CollisionCandidate {
    pub entity_a: EntityId,
    pub hull_a: usize,
    pub entity_b: EntityId,
    pub hull_b: usize,
}

/// The fixed-timestep rigid-body pipeline.
///
/// One instance owns the complete physics state of a simulation: the tracked
/// bodies, the ray-cast records, the fixed-step accumulator and the published
/// spatial index. The surrounding frame loop calls [`PhysicsWorld::tick`]
/// once per frame with the variable frame delta; everything else about the
/// sub-step cadence is internal.
///
/// The pipeline is single-threaded and synchronous. Scratch queues are
/// cleared and reused across sub-steps rather than reallocated.
pub struct PhysicsWorld {
    pub(crate) constants: SimulationConstants,
    pub(crate) fixed_time_step: f64,
    pub(crate) accumulator: f64,
    simulation_remainder: f64,
    next_entity: u64,
    pub(crate) bodies: BTreeMap<EntityId, RigidBody>,
    pub(crate) rays: BTreeMap<EntityId, RayCast>,
    pointer_ray: Option<EntityId>,
    pub(crate) tree: Option<BoundsTree>,
    pub(crate) world_extents: Extents,
    pub(crate) tree_queue: Vec<LeafEntry>,
    pub(crate) narrow_phase_queue: VecDeque<CollisionCandidate>,
}

impl PhysicsWorld {
    pub fn new(constants: SimulationConstants) -> Self {
        let fixed_time_step = constants.fixed_time_step();
        Self {
            constants,
            fixed_time_step,
            accumulator: 0.0,
            simulation_remainder: 1.0,
            next_entity: 0,
            bodies: BTreeMap::new(),
            rays: BTreeMap::new(),
            pointer_ray: None,
            tree: None,
            world_extents: Extents::new(),
            tree_queue: Vec::new(),
            narrow_phase_queue: VecDeque::new(),
        }
    }

    /// Advances the simulation by a variable frame delta.
    ///
    /// The accumulator consumes `dt` in fixed sub-steps; each sub-step
    /// integrates every tracked body, rebuilds the spatial index, and runs
    /// broad- and narrow-phase collision. Hit-scan resolution runs exactly
    /// once, after the final sub-step. The render-interpolation fraction is
    /// published afterwards and stays in (0, 1].
    pub fn tick(&mut self, dt: f64) {
        self.simulate(dt);
        self.simulation_remainder = 1.0 + self.accumulator / self.fixed_time_step;
    }

    fn simulate(&mut self, dt: f64) {
        self.accumulator += dt;
        while self.accumulator > 0.0 {
            self.integrate();
            self.collide();
            self.accumulator -= self.fixed_time_step;
            if self.accumulator <= 0.0 {
                self.hit_scan();
            }
        }
    }

    /// Registers a body and returns its entity id.
    pub fn add_body(&mut self, body: RigidBody) -> EntityId {
        let entity = EntityId(self.next_entity);
        self.next_entity += 1;
        self.bodies.insert(entity, body);
        entity
    }

    /// Attaches a convex hull, given in body-local space, to a tracked body.
    pub fn attach_hull(
        &mut self,
        entity: EntityId,
        local_vertices: Vec<(f64, f64, f64)>,
        faces: Vec<[usize; 3]>,
    ) -> Result<(), PhysicsError> {
        if !self.bodies.contains_key(&entity) {
            return Err(PhysicsError::UnknownEntity(entity.0));
        }
        let hull = ConvexHull::new(entity, local_vertices, faces)?;
        if let Some(body) = self.bodies.get_mut(&entity) {
            body.hulls.push(hull);
        }
        Ok(())
    }

    /// Attaches an axis-aligned cuboid hull centered on the body origin.
    pub fn attach_cuboid_hull(
        &mut self,
        entity: EntityId,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<(), PhysicsError> {
        if !self.bodies.contains_key(&entity) {
            return Err(PhysicsError::UnknownEntity(entity.0));
        }
        let hull = ConvexHull::cuboid(entity, width, height, depth)?;
        if let Some(body) = self.bodies.get_mut(&entity) {
            body.hulls.push(hull);
        }
        Ok(())
    }

    /// Removes an entity and any ray-cast record it owns. The published
    /// spatial index may still reference the entity until the next sub-step
    /// rebuild; the resolvers skip such stale entries.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.bodies.remove(&entity);
        self.rays.remove(&entity);
        if self.pointer_ray == Some(entity) {
            self.pointer_ray = None;
        }
    }

    /// Sets a body's thrust input (clamped to [-1, 1]).
    pub fn set_thrust(&mut self, entity: EntityId, value: f64) -> Result<(), PhysicsError> {
        match self.bodies.get_mut(&entity) {
            Some(body) => {
                body.set_thrust(value);
                Ok(())
            }
            None => Err(PhysicsError::UnknownEntity(entity.0)),
        }
    }

    /// Sets a body's yaw input (clamped to [-1, 1]).
    pub fn set_yaw(&mut self, entity: EntityId, value: f64) -> Result<(), PhysicsError> {
        match self.bodies.get_mut(&entity) {
            Some(body) => {
                body.set_yaw(value);
                Ok(())
            }
            None => Err(PhysicsError::UnknownEntity(entity.0)),
        }
    }

    /// Queues a one-shot hit-scan ray. The record is resolved by the next
    /// hit-scan pass and then marked complete.
    pub fn cast_ray(
        &mut self,
        origin: (f64, f64, f64),
        direction: (f64, f64, f64),
        range: f64,
        interact: bool,
    ) -> Result<EntityId, PhysicsError> {
        let ray = RayCast::new(origin, direction, range, interact)?;
        let entity = EntityId(self.next_entity);
        self.next_entity += 1;
        self.rays.insert(entity, ray);
        Ok(entity)
    }

    /// Creates or re-aims the persistent pointer ray. Unlike one-shot
    /// records it is re-resolved on every hit-scan pass.
    pub fn set_pointer_ray(
        &mut self,
        origin: (f64, f64, f64),
        direction: (f64, f64, f64),
        range: f64,
    ) -> Result<EntityId, PhysicsError> {
        if let Some(entity) = self.pointer_ray {
            if let Some(ray) = self.rays.get_mut(&entity) {
                ray.retarget(origin, direction, range)?;
                return Ok(entity);
            }
        }

        let mut ray = RayCast::new(origin, direction, range, false)?;
        ray.pointer = true;
        let entity = EntityId(self.next_entity);
        self.next_entity += 1;
        self.rays.insert(entity, ray);
        self.pointer_ray = Some(entity);
        Ok(entity)
    }

    pub fn pointer_ray(&self) -> Option<EntityId> {
        self.pointer_ray
    }

    pub fn body(&self, entity: EntityId) -> Option<&RigidBody> {
        self.bodies.get(&entity)
    }

    pub fn body_mut(&mut self, entity: EntityId) -> Option<&mut RigidBody> {
        self.bodies.get_mut(&entity)
    }

    pub fn ray(&self, entity: EntityId) -> Option<&RayCast> {
        self.rays.get(&entity)
    }

    /// The spatial index published by the most recent sub-step, shared
    /// read-only with debug visualization.
    pub fn bounds_tree(&self) -> Option<&BoundsTree> {
        self.tree.as_ref()
    }

    /// The blend weight in (0, 1] between previous and current physics state.
    pub fn simulation_remainder(&self) -> f64 {
        self.simulation_remainder
    }

    /// Interpolated transform for rendering: previous and current state
    /// blended by the simulation remainder, scale passed through.
    pub fn render_transform(
        &self,
        entity: EntityId,
    ) -> Option<((f64, f64, f64), (f64, f64, f64), (f64, f64, f64))> {
        let body = self.bodies.get(&entity)?;
        let alpha = self.simulation_remainder;
        Some((
            body.interpolated_position(alpha),
            body.interpolated_rotation(alpha),
            body.scale,
        ))
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(SimulationConstants::default())
    }
}
