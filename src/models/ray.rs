use crate::errors::PhysicsError;
use crate::models::{Bounds3, EntityId};
use crate::utils::{normalize_vector, scale_vector, add_vectors};

/// A hit-scan ray record.
///
/// Ordinary records are processed by the hit-scan resolver exactly once and
/// then marked complete. A record flagged as the `pointer` ray is the
/// persistent picking ray and is re-processed every hit-scan pass regardless
/// of its complete flag.
#[derive(Debug, Clone)]
pub struct RayCast {
    pub origin: (f64, f64, f64),
    /// Unit direction.
    pub direction: (f64, f64, f64),
    /// Per-axis reciprocal of the direction; infinity where the direction
    /// component is exactly zero.
    pub inv_direction: (f64, f64, f64),
    pub endpoint: (f64, f64, f64),
    pub range: f64,
    /// Whether a hit should impart an impulse on the struck body.
    pub interact: bool,
    /// Whether this record is the persistent pointer ray.
    pub pointer: bool,
    pub found: bool,
    pub complete: bool,
    pub hit_point: (f64, f64, f64),
    pub hit_entity: Option<EntityId>,
}

impl RayCast {
    /// Creates a ray record from an origin, a direction (normalized here) and
    /// a maximum range.
    ///
    /// # Errors
    /// Returns [`PhysicsError::InvalidDirection`] if the direction has zero
    /// length.
    pub fn new(
        origin: (f64, f64, f64),
        direction: (f64, f64, f64),
        range: f64,
        interact: bool,
    ) -> Result<Self, PhysicsError> {
        let direction = normalize_vector(direction).map_err(|_| PhysicsError::InvalidDirection)?;
        let endpoint = add_vectors(origin, scale_vector(direction, range));

        Ok(Self {
            origin,
            direction,
            inv_direction: Self::invert_direction(direction),
            endpoint,
            range,
            interact,
            pointer: false,
            found: false,
            complete: false,
            hit_point: (0.0, 0.0, 0.0),
            hit_entity: None,
        })
    }

    /// Re-aims the record and clears its per-pass result state. Used every
    /// frame on the pointer ray.
    pub fn retarget(
        &mut self,
        origin: (f64, f64, f64),
        direction: (f64, f64, f64),
        range: f64,
    ) -> Result<(), PhysicsError> {
        let direction = normalize_vector(direction).map_err(|_| PhysicsError::InvalidDirection)?;

        self.origin = origin;
        self.direction = direction;
        self.inv_direction = Self::invert_direction(direction);
        self.endpoint = add_vectors(origin, scale_vector(direction, range));
        self.range = range;
        self.found = false;
        self.complete = false;
        self.hit_entity = None;
        Ok(())
    }

    /// The axis-aligned box spanned by the ray segment, used as the coarse
    /// query volume against the spatial index.
    pub fn bounding_box(&self) -> Bounds3 {
        Bounds3 {
            min: (
                self.origin.0.min(self.endpoint.0),
                self.origin.1.min(self.endpoint.1),
                self.origin.2.min(self.endpoint.2),
            ),
            max: (
                self.origin.0.max(self.endpoint.0),
                self.origin.1.max(self.endpoint.1),
                self.origin.2.max(self.endpoint.2),
            ),
        }
    }

    fn invert_direction(direction: (f64, f64, f64)) -> (f64, f64, f64) {
        let invert = |component: f64| {
            if component == 0.0 {
                f64::INFINITY
            } else {
                1.0 / component
            }
        };
        (invert(direction.0), invert(direction.1), invert(direction.2))
    }
}
