use crate::collision::ray_hull_distance;
use crate::models::EntityId;
use crate::simulation::PhysicsWorld;
use crate::utils::{add_vectors, scale_vector, sub_vectors};

impl PhysicsWorld {
    /// Resolves every pending ray-cast record against the published spatial
    /// index. Runs exactly once per `tick`, after the final sub-step.
    pub(crate) fn hit_scan(&mut self) {
        let ray_ids: Vec<EntityId> = self.rays.keys().copied().collect();
        for ray_id in ray_ids {
            self.resolve_ray(ray_id);
        }
    }

    fn resolve_ray(&mut self, ray_id: EntityId) {
        {
            let ray = match self.rays.get(&ray_id) {
                Some(ray) => ray,
                None => return,
            };
            if !ray.pointer && ray.complete {
                return;
            }
        }

        let (closest_entity, closest_point) = {
            let ray = match self.rays.get(&ray_id) {
                Some(ray) => ray,
                None => return,
            };
            let tree = self
                .tree
                .as_ref()
                .expect("spatial index is built before hit-scan");
            let hits = tree.query_ray(ray);

            let mut closest = f64::INFINITY;
            let mut closest_entity = None;
            let mut closest_point = (0.0, 0.0, 0.0);
            for hit in &hits {
                // The index can hold entries for entities removed earlier in
                // the frame; skip them.
                let body = match self.bodies.get(&hit.entity) {
                    Some(body) => body,
                    None => continue,
                };
                for hull in &body.hulls {
                    if !hull.bounds.intersects_ray(ray) {
                        continue;
                    }
                    if let Some((distance, point)) = ray_hull_distance(ray, hull) {
                        if distance < closest {
                            closest = distance;
                            closest_point = point;
                            closest_entity = Some(hit.entity);
                        }
                    }
                }
            }
            (closest_entity, closest_point)
        };

        let (interact, direction) = {
            let ray = match self.rays.get_mut(&ray_id) {
                Some(ray) => ray,
                None => return,
            };
            match closest_entity {
                Some(entity) => {
                    ray.found = true;
                    ray.hit_point = closest_point;
                    ray.hit_entity = Some(entity);
                }
                None => {
                    ray.found = false;
                }
            }
            ray.complete = true;
            (ray.interact, ray.direction)
        };

        if let Some(entity) = closest_entity {
            if interact {
                self.apply_hit_impulse(entity, closest_point, direction);
            }
            // The spatial index is deliberately not rebuilt after the
            // impulse moves the struck body: a rebuild here could hand the
            // rest of the frame a tree referencing entities that game logic
            // destroys before the next tick.
        }
    }

    fn apply_hit_impulse(
        &mut self,
        entity: EntityId,
        hit_point: (f64, f64, f64),
        direction: (f64, f64, f64),
    ) {
        let hit_impulse = self.constants.hit_impulse;
        let hit_angular_impulse = self.constants.hit_angular_impulse;

        let body = match self.bodies.get_mut(&entity) {
            Some(body) => body,
            None => return,
        };

        let impulse = scale_vector(direction, hit_impulse / body.mass);
        body.velocity = add_vectors(body.velocity, impulse);

        let offset = sub_vectors(hit_point, body.position);
        let torque = offset.1 * impulse.0 - offset.0 * impulse.1;
        if body.inertia > 0.0 {
            body.angular_velocity += (torque / body.inertia) * -hit_angular_impulse;
        }
    }
}
