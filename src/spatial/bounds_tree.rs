use crate::models::{Bounds3, EntityId, RayCast};

/// A leaf payload of the spatial index: one entity's world bounds.
#[derive(Debug, Clone, Copy)]
pub struct LeafEntry {
    pub bounds: Bounds3,
    pub entity: EntityId,
}

/// The per-sub-step spatial index: an octree built in bulk from the fresh
/// set of per-entity bounds.
///
/// The tree is read-only after construction. A new tree fully replaces the
/// previous one each sub-step; nothing is mutated in place, so a reference to
/// the published tree can be shared with non-physics consumers (debug draw)
/// for the rest of the frame.
#[derive(Debug)]
pub struct BoundsTree {
    root: TreeNode,
    entry_count: usize,
}

#[derive(Debug)]
enum TreeNode {
    Leaf {
        bounds: Bounds3,
        entries: Vec<LeafEntry>,
    },
    Internal {
        bounds: Bounds3,
        children: Vec<TreeNode>,
    },
}

impl BoundsTree {
    /// Builds the index over `entries`, rooted at `root_bounds` (the union of
    /// all entry bounds). A node holding more than `max_leaf_objects` entries
    /// subdivides into octants until the octants would be smaller than
    /// `min_leaf_size` along their longest edge.
    pub fn build(
        root_bounds: Bounds3,
        entries: &[LeafEntry],
        min_leaf_size: f64,
        max_leaf_objects: usize,
    ) -> Self {
        let root = Self::build_node(
            root_bounds,
            entries.to_vec(),
            min_leaf_size,
            max_leaf_objects,
        );
        Self {
            root,
            entry_count: entries.len(),
        }
    }

    pub fn root_bounds(&self) -> &Bounds3 {
        match &self.root {
            TreeNode::Leaf { bounds, .. } => bounds,
            TreeNode::Internal { bounds, .. } => bounds,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// All entries whose bounds overlap `bounds`, deduplicated and ordered by
    /// entity id.
    pub fn query_bounds(&self, bounds: &Bounds3) -> Vec<LeafEntry> {
        let mut hits = Vec::new();
        Self::collect_overlaps(&self.root, bounds, &mut hits);
        Self::dedup_by_entity(&mut hits);
        hits
    }

    /// All entries whose bounds overlap the ray's bounding volume,
    /// deduplicated and ordered by entity id. This is the coarse cull; exact
    /// slab and hull tests are the caller's concern.
    pub fn query_ray(&self, ray: &RayCast) -> Vec<LeafEntry> {
        self.query_bounds(&ray.bounding_box())
    }

    fn build_node(
        bounds: Bounds3,
        entries: Vec<LeafEntry>,
        min_leaf_size: f64,
        max_leaf_objects: usize,
    ) -> TreeNode {
        let size = bounds.size();
        let longest_half = size.0.max(size.1).max(size.2) * 0.5;

        if entries.len() <= max_leaf_objects || longest_half < min_leaf_size {
            return TreeNode::Leaf { bounds, entries };
        }

        let center = bounds.center();
        let mut children = Vec::with_capacity(8);
        for octant in 0..8 {
            let octant_bounds = Self::octant_bounds(&bounds, center, octant);
            let octant_entries: Vec<LeafEntry> = entries
                .iter()
                .filter(|entry| entry.bounds.intersects(&octant_bounds))
                .copied()
                .collect();
            children.push(Self::build_node(
                octant_bounds,
                octant_entries,
                min_leaf_size,
                max_leaf_objects,
            ));
        }

        TreeNode::Internal { bounds, children }
    }

    fn octant_bounds(bounds: &Bounds3, center: (f64, f64, f64), octant: usize) -> Bounds3 {
        let (min_x, max_x) = if octant & 1 == 0 {
            (bounds.min.0, center.0)
        } else {
            (center.0, bounds.max.0)
        };
        let (min_y, max_y) = if octant & 2 == 0 {
            (bounds.min.1, center.1)
        } else {
            (center.1, bounds.max.1)
        };
        let (min_z, max_z) = if octant & 4 == 0 {
            (bounds.min.2, center.2)
        } else {
            (center.2, bounds.max.2)
        };
        Bounds3::new((min_x, min_y, min_z), (max_x, max_y, max_z))
    }

    fn collect_overlaps(node: &TreeNode, query: &Bounds3, hits: &mut Vec<LeafEntry>) {
        match node {
            TreeNode::Leaf { bounds, entries } => {
                if !bounds.intersects(query) {
                    return;
                }
                for entry in entries {
                    if entry.bounds.intersects(query) {
                        hits.push(*entry);
                    }
                }
            }
            TreeNode::Internal { bounds, children } => {
                if !bounds.intersects(query) {
                    return;
                }
                for child in children {
                    Self::collect_overlaps(child, query, hits);
                }
            }
        }
    }

    // An entry straddling an octant boundary lands in several leaves, so the
    // raw hit list can repeat entities.
    fn dedup_by_entity(hits: &mut Vec<LeafEntry>) {
        hits.sort_by_key(|entry| entry.entity);
        hits.dedup_by_key(|entry| entry.entity);
    }
}
