use crate::collision::{find_intersection, IntersectionState};
use crate::simulation::{CollisionCandidate, PhysicsWorld};
use crate::utils::{add_vectors, clamp_magnitude, dot_product, scale_vector, sub_vectors};

impl PhysicsWorld {
    /// Runs the broad phase, then drains the candidate queue through the
    /// narrow phase.
    pub(crate) fn collide(&mut self) {
        self.collect_candidates();
        while let Some(candidate) = self.narrow_phase_queue.pop_front() {
            self.resolve_candidate(candidate);
        }
    }

    /// Exact test and response for one candidate pair.
    ///
    /// The convex intersection test is seeded with the centroid difference.
    /// On contact the positional correction is applied first; a separating
    /// relative velocity then skips the impulse but leaves the correction in
    /// place. Hull world vertices are not recomputed here, so the mirrored
    /// candidate of the same pair re-tests against the identical vertex
    /// snapshot within the sub-step.
    pub(crate) fn resolve_candidate(&mut self, candidate: CollisionCandidate) {
        let (contact, mass_a, mass_b, inertia_a, inertia_b, velocity_a, velocity_b) = {
            let body_a = match self.bodies.get(&candidate.entity_a) {
                Some(body) => body,
                None => return,
            };
            let body_b = match self.bodies.get(&candidate.entity_b) {
                Some(body) => body,
                None => return,
            };
            let hull_a = &body_a.hulls[candidate.hull_a];
            let hull_b = &body_b.hulls[candidate.hull_b];

            let seed = sub_vectors(hull_b.centroid, hull_a.centroid);
            let intersection = find_intersection(&hull_a.vertices, &hull_b.vertices, seed);
            if intersection.state != IntersectionState::Intersecting {
                return;
            }
            let contact = intersection
                .contact
                .expect("intersecting result carries a contact");

            (
                contact,
                body_a.mass,
                body_b.mass,
                body_a.inertia,
                body_b.inertia,
                body_a.velocity,
                body_b.velocity,
            )
        };

        let total_mass = mass_a + mass_b;
        let ratio_a = mass_b / total_mass;
        let ratio_b = mass_a / total_mass;
        let half_depth = contact.depth / 2.0;

        if let Some(body_a) = self.bodies.get_mut(&candidate.entity_a) {
            body_a.position = add_vectors(
                body_a.position,
                scale_vector(contact.normal, -(half_depth * ratio_a)),
            );
        }
        if let Some(body_b) = self.bodies.get_mut(&candidate.entity_b) {
            body_b.position = add_vectors(
                body_b.position,
                scale_vector(contact.normal, half_depth * ratio_b),
            );
        }

        let relative_velocity = sub_vectors(velocity_b, velocity_a);
        let velocity_along_normal = dot_product(relative_velocity, contact.normal);
        if velocity_along_normal > 0.0 {
            return; // separating; no impulse
        }

        let mut impulse_magnitude = -(1.0 + self.constants.restitution) * velocity_along_normal;
        impulse_magnitude /= 1.0 / mass_a + 1.0 / mass_b;
        let impulse = scale_vector(contact.normal, impulse_magnitude);

        let corrected_position_a = match self.bodies.get(&candidate.entity_a) {
            Some(body) => body.position,
            None => return,
        };
        let corrected_position_b = match self.bodies.get(&candidate.entity_b) {
            Some(body) => body.position,
            None => return,
        };

        let offset_a = sub_vectors(contact.point, corrected_position_a);
        let offset_b = sub_vectors(contact.point, corrected_position_b);
        let torque_a = offset_a.1 * impulse.0 - offset_a.0 * impulse.1;
        let torque_b = offset_b.1 * impulse.0 - offset_b.0 * impulse.1;

        if let Some(body_a) = self.bodies.get_mut(&candidate.entity_a) {
            body_a.velocity = sub_vectors(body_a.velocity, scale_vector(impulse, 1.0 / mass_a));
            if inertia_a > 0.0 {
                body_a.angular_velocity += clamp_magnitude(torque_a / inertia_a, 1.0);
            }
        }
        if let Some(body_b) = self.bodies.get_mut(&candidate.entity_b) {
            body_b.velocity = add_vectors(body_b.velocity, scale_vector(impulse, 1.0 / mass_b));
            if inertia_b > 0.0 {
                body_b.angular_velocity -= clamp_magnitude(torque_b / inertia_b, 1.0);
            }
        }
    }
}
