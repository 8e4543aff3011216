use crate::models::RayCast;

/// An axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: (f64, f64, f64),
    pub max: (f64, f64, f64),
}

impl Bounds3 {
    pub fn new(min: (f64, f64, f64), max: (f64, f64, f64)) -> Self {
        Self { min, max }
    }

    /// A degenerate box that contains nothing and unions as the identity.
    pub fn empty() -> Self {
        Self {
            min: (f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: (f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn center(&self) -> (f64, f64, f64) {
        (
            (self.min.0 + self.max.0) * 0.5,
            (self.min.1 + self.max.1) * 0.5,
            (self.min.2 + self.max.2) * 0.5,
        )
    }

    pub fn size(&self) -> (f64, f64, f64) {
        (
            self.max.0 - self.min.0,
            self.max.1 - self.min.1,
            self.max.2 - self.min.2,
        )
    }

    pub fn union(&self, other: &Bounds3) -> Bounds3 {
        Bounds3 {
            min: (
                self.min.0.min(other.min.0),
                self.min.1.min(other.min.1),
                self.min.2.min(other.min.2),
            ),
            max: (
                self.max.0.max(other.max.0),
                self.max.1.max(other.max.1),
                self.max.2.max(other.max.2),
            ),
        }
    }

    pub fn intersects(&self, other: &Bounds3) -> bool {
        !(self.max.0 < other.min.0 || self.min.0 > other.max.0
            || self.max.1 < other.min.1 || self.min.1 > other.max.1
            || self.max.2 < other.min.2 || self.min.2 > other.max.2)
    }

    /// Slab test against a ray segment, using the record's precomputed
    /// inverse direction. The intersection parameter is clipped to
    /// `[0, range]` so hits behind the origin or past the endpoint miss.
    pub fn intersects_ray(&self, ray: &RayCast) -> bool {
        let t1 = (self.min.0 - ray.origin.0) * ray.inv_direction.0;
        let t2 = (self.max.0 - ray.origin.0) * ray.inv_direction.0;
        let mut t_min = t1.min(t2);
        let mut t_max = t1.max(t2);

        let t1 = (self.min.1 - ray.origin.1) * ray.inv_direction.1;
        let t2 = (self.max.1 - ray.origin.1) * ray.inv_direction.1;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));

        let t1 = (self.min.2 - ray.origin.2) * ray.inv_direction.2;
        let t2 = (self.max.2 - ray.origin.2) * ray.inv_direction.2;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));

        t_max >= t_min.max(0.0) && t_min <= ray.range
    }
}

/// Accumulates the min/max extent of a set of points or boxes, then collapses
/// into a [`Bounds3`]. Reset and reused every sub-step.
#[derive(Debug, Clone, Copy)]
pub struct Extents {
    min: (f64, f64, f64),
    max: (f64, f64, f64),
}

impl Extents {
    pub fn new() -> Self {
        Self {
            min: (f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: (f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn reset(&mut self) {
        *self = Extents::new();
    }

    pub fn include_point(&mut self, point: (f64, f64, f64)) {
        self.min.0 = self.min.0.min(point.0);
        self.min.1 = self.min.1.min(point.1);
        self.min.2 = self.min.2.min(point.2);
        self.max.0 = self.max.0.max(point.0);
        self.max.1 = self.max.1.max(point.1);
        self.max.2 = self.max.2.max(point.2);
    }

    pub fn include_bounds(&mut self, bounds: &Bounds3) {
        self.include_point(bounds.min);
        self.include_point(bounds.max);
    }

    pub fn as_bounds(&self) -> Bounds3 {
        Bounds3 {
            min: self.min,
            max: self.max,
        }
    }
}

impl Default for Extents {
    fn default() -> Self {
        Extents::new()
    }
}
