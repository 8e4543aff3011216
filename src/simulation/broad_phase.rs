use crate::simulation::{CollisionCandidate, PhysicsWorld};

impl PhysicsWorld {
    /// Queries the spatial index with every tracked entity's bounds and
    /// queues a candidate for every overlapping hull pair against the other
    /// entities returned.
    ///
    /// Entries owned by the querying entity are skipped, so self-pairs never
    /// enter the queue. Both orderings of a colliding pair are queued (once
    /// from each side's query); the narrow phase is order-independent, so
    /// that only costs a redundant disjointness test.
    pub(crate) fn collect_candidates(&mut self) {
        let tree = self
            .tree
            .as_ref()
            .expect("spatial index is built before the broad phase");

        for (entity, body) in &self.bodies {
            let hits = tree.query_bounds(&body.bounds);
            for hit in hits {
                if hit.entity == *entity {
                    continue;
                }
                let other = match self.bodies.get(&hit.entity) {
                    Some(other) => other,
                    None => continue,
                };
                for (index_a, hull_a) in body.hulls.iter().enumerate() {
                    for (index_b, hull_b) in other.hulls.iter().enumerate() {
                        if hull_a.bounds.intersects(&hull_b.bounds) {
                            self.narrow_phase_queue.push_back(CollisionCandidate {
                                entity_a: *entity,
                                hull_a: index_a,
                                entity_b: hit.entity,
                                hull_b: index_b,
                            });
                        }
                    }
                }
            }
        }
    }
}
