use std::fmt;
use std::error::Error;

/// Represents errors that can occur while constructing or mutating simulation state.
#[derive(Debug, Clone)]
pub enum PhysicsError {
    /// Indicates an invalid mass value (e.g., negative or zero mass).
    InvalidMass,
    /// Indicates an invalid moment of inertia (e.g., negative or zero inertia).
    InvalidInertia,
    /// Indicates an invalid coefficient value (e.g., negative drag coefficient).
    InvalidCoefficient,
    /// Indicates a direction vector that cannot be normalized (zero length).
    InvalidDirection,
    /// Indicates a convex hull with no vertices.
    EmptyHull,
    /// Indicates an entity id that is not present in the world.
    UnknownEntity(u64),
    /// A general error for calculations that produce invalid results.
    CalculationError(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "Invalid mass value"),
            PhysicsError::InvalidInertia => write!(f, "Invalid moment of inertia"),
            PhysicsError::InvalidCoefficient => write!(f, "Invalid coefficient value"),
            PhysicsError::InvalidDirection => write!(f, "Direction vector cannot be normalized"),
            PhysicsError::EmptyHull => write!(f, "Convex hull has no vertices"),
            PhysicsError::UnknownEntity(id) => write!(f, "Unknown entity id: {}", id),
            PhysicsError::CalculationError(msg) => write!(f, "Calculation error: {}", msg),
        }
    }
}

impl Error for PhysicsError {}
