use log::warn;

use crate::errors::PhysicsError;
use crate::models::{Bounds3, ConvexHull};

/// State of one physically-tracked entity.
///
/// `previous_position` / `previous_rotation` always hold the state from
/// before the most recent integration step; they are the lower anchor for
/// render interpolation. Rotation is an euler triple of which only the yaw
/// component (`rotation.1`) is dynamically integrated.
#[derive(Debug, Clone)]
pub struct RigidBody {
    pub position: (f64, f64, f64),
    pub rotation: (f64, f64, f64),
    pub scale: (f64, f64, f64),
    pub previous_position: (f64, f64, f64),
    pub previous_rotation: (f64, f64, f64),
    pub velocity: (f64, f64, f64),
    pub angular_velocity: f64,
    /// Scratch, overwritten every sub-step.
    pub acceleration: (f64, f64, f64),
    /// Scratch, overwritten every sub-step.
    pub angular_acceleration: f64,
    pub mass: f64,
    pub inertia: f64,
    pub drag: f64,
    pub max_thrust: f64,
    pub max_yaw_torque: f64,
    /// Thrust input in [-1, 1].
    pub thrust: f64,
    /// Yaw input in [-1, 1].
    pub yaw: f64,
    pub bounds: Bounds3,
    pub hulls: Vec<ConvexHull>,
}

impl RigidBody {
    /// Creates a body at the given transform with validated mass properties.
    ///
    /// # Errors
    /// * [`PhysicsError::InvalidMass`] if `mass` is not positive.
    /// * [`PhysicsError::InvalidInertia`] if `inertia` is not positive.
    /// * [`PhysicsError::InvalidCoefficient`] if `drag` is negative.
    ///
    /// # Example
    /// ```
    /// use substep_physics::models::RigidBody;
    ///
    /// let body = RigidBody::new((0.0, 0.0, 0.0), (0.0, 0.0, 0.0), (1.0, 1.0, 1.0),
    ///     5.0, 1.0, 1.0, 100.0, 40.0);
    /// assert!(body.is_ok());
    ///
    /// let weightless = RigidBody::new((0.0, 0.0, 0.0), (0.0, 0.0, 0.0), (1.0, 1.0, 1.0),
    ///     0.0, 1.0, 1.0, 100.0, 40.0);
    /// assert!(weightless.is_err());
    /// ```
    pub fn new(
        position: (f64, f64, f64),
        rotation: (f64, f64, f64),
        scale: (f64, f64, f64),
        mass: f64,
        inertia: f64,
        drag: f64,
        max_thrust: f64,
        max_yaw_torque: f64,
    ) -> Result<Self, PhysicsError> {
        if mass <= 0.0 {
            return Err(PhysicsError::InvalidMass);
        }
        if inertia <= 0.0 {
            return Err(PhysicsError::InvalidInertia);
        }
        if drag < 0.0 {
            return Err(PhysicsError::InvalidCoefficient);
        }

        Ok(Self {
            position,
            rotation,
            scale,
            previous_position: position,
            previous_rotation: rotation,
            velocity: (0.0, 0.0, 0.0),
            angular_velocity: 0.0,
            acceleration: (0.0, 0.0, 0.0),
            angular_acceleration: 0.0,
            mass,
            inertia,
            drag,
            max_thrust,
            max_yaw_torque,
            thrust: 0.0,
            yaw: 0.0,
            bounds: Bounds3::empty(),
            hulls: Vec::new(),
        })
    }

    /// Sets the thrust input, clamping it to the normalized range.
    pub fn set_thrust(&mut self, value: f64) {
        if !(-1.0..=1.0).contains(&value) {
            warn!("Thrust input {} outside [-1, 1], clamping", value);
        }
        self.thrust = value.clamp(-1.0, 1.0);
    }

    /// Sets the yaw input, clamping it to the normalized range.
    pub fn set_yaw(&mut self, value: f64) {
        if !(-1.0..=1.0).contains(&value) {
            warn!("Yaw input {} outside [-1, 1], clamping", value);
        }
        self.yaw = value.clamp(-1.0, 1.0);
    }

    /// Blends previous and current position with `alpha` in (0, 1].
    pub fn interpolated_position(&self, alpha: f64) -> (f64, f64, f64) {
        let inverse = 1.0 - alpha;
        (
            self.position.0 * alpha + self.previous_position.0 * inverse,
            self.position.1 * alpha + self.previous_position.1 * inverse,
            self.position.2 * alpha + self.previous_position.2 * inverse,
        )
    }

    /// Blends previous and current rotation with `alpha` in (0, 1].
    pub fn interpolated_rotation(&self, alpha: f64) -> (f64, f64, f64) {
        let inverse = 1.0 - alpha;
        (
            self.rotation.0 * alpha + self.previous_rotation.0 * inverse,
            self.rotation.1 * alpha + self.previous_rotation.1 * inverse,
            self.rotation.2 * alpha + self.previous_rotation.2 * inverse,
        )
    }
}
