use crate::errors::PhysicsError;
use crate::models::{Bounds3, EntityId, Extents};
use crate::utils::{rotate_around_x, rotate_around_y, rotate_around_z};

/// A convex hull owned by a tracked body.
///
/// The world-space vertex set, centroid and bounds are recomputed in full
/// from the owning body's transform every sub-step; there is no incremental
/// update. The triangular face list indexes into the vertex list and is used
/// by the precise ray intersection routine and by debug rendering.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    pub owner: EntityId,
    local_vertices: Vec<(f64, f64, f64)>,
    pub vertices: Vec<(f64, f64, f64)>,
    pub centroid: (f64, f64, f64),
    pub bounds: Bounds3,
    pub faces: Vec<[usize; 3]>,
}

impl ConvexHull {
    /// # Errors
    /// Returns [`PhysicsError::EmptyHull`] if the vertex list is empty.
    pub fn new(
        owner: EntityId,
        local_vertices: Vec<(f64, f64, f64)>,
        faces: Vec<[usize; 3]>,
    ) -> Result<Self, PhysicsError> {
        if local_vertices.is_empty() {
            return Err(PhysicsError::EmptyHull);
        }

        let vertices = local_vertices.clone();
        let mut hull = Self {
            owner,
            local_vertices,
            vertices,
            centroid: (0.0, 0.0, 0.0),
            bounds: Bounds3::empty(),
            faces,
        };
        hull.refresh_derived();
        Ok(hull)
    }

    /// Convenience constructor for an axis-aligned cuboid hull centered at
    /// the local origin, with the standard 12-triangle face list.
    pub fn cuboid(
        owner: EntityId,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<Self, PhysicsError> {
        let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
        let vertices = vec![
            (-hw, -hh, -hd),
            (hw, -hh, -hd),
            (hw, hh, -hd),
            (-hw, hh, -hd),
            (-hw, -hh, hd),
            (hw, -hh, hd),
            (hw, hh, hd),
            (-hw, hh, hd),
        ];
        let faces = vec![
            [0, 1, 2], [0, 2, 3], // back
            [4, 6, 5], [4, 7, 6], // front
            [0, 3, 7], [0, 7, 4], // left
            [1, 5, 6], [1, 6, 2], // right
            [3, 2, 6], [3, 6, 7], // top
            [0, 4, 5], [0, 5, 1], // bottom
        ];
        Self::new(owner, vertices, faces)
    }

    /// Recomputes the world-space geometry from the owning body's transform.
    ///
    /// Vertices go through scale, then the YXZ euler rotation (Z, then X,
    /// then Y when applied to a point), then translation. The freshly
    /// derived bounds are merged into the caller's world extents
    /// accumulator.
    pub fn transform(
        &mut self,
        position: (f64, f64, f64),
        rotation: (f64, f64, f64),
        scale: (f64, f64, f64),
        world_extents: &mut Extents,
    ) {
        for (index, local) in self.local_vertices.iter().enumerate() {
            let scaled = (local.0 * scale.0, local.1 * scale.1, local.2 * scale.2);
            let rotated = rotate_around_y(
                rotate_around_x(rotate_around_z(scaled, rotation.2), rotation.0),
                rotation.1,
            );
            self.vertices[index] = (
                rotated.0 + position.0,
                rotated.1 + position.1,
                rotated.2 + position.2,
            );
        }

        self.refresh_derived();
        world_extents.include_bounds(&self.bounds);
    }

    fn refresh_derived(&mut self) {
        let mut extents = Extents::new();
        let mut sum = (0.0, 0.0, 0.0);
        for vertex in &self.vertices {
            extents.include_point(*vertex);
            sum.0 += vertex.0;
            sum.1 += vertex.1;
            sum.2 += vertex.2;
        }

        let count = self.vertices.len() as f64;
        self.centroid = (sum.0 / count, sum.1 / count, sum.2 / count);
        self.bounds = extents.as_bounds();
    }
}
