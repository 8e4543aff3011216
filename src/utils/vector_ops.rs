// src/utils/vector_ops.rs

/// Calculates the dot product of two 3D vectors.
///
/// # Arguments
/// * `v1` - The first vector as a tuple (x, y, z).
/// * `v2` - The second vector as a tuple (x, y, z).
///
/// # Returns
/// The dot product as a scalar.
///
/// # Example
/// ```
/// use substep_physics::utils::dot_product;
///
/// let v1 = (1.0, 2.0, 3.0);
/// let v2 = (4.0, 5.0, 6.0);
/// let result = dot_product(v1, v2);
///
/// assert_eq!(result, 32.0); // 1*4 + 2*5 + 3*6 = 32
/// ```
pub fn dot_product(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> f64 {
    v1.0 * v2.0 + v1.1 * v2.1 + v1.2 * v2.2
}

/// Calculates the cross product of two 3D vectors.
///
/// # Arguments
/// * `v1` - The first vector as a tuple (x, y, z).
/// * `v2` - The second vector as a tuple (x, y, z).
///
/// # Returns
/// The cross product as a tuple (x, y, z).
///
/// # Example
/// ```
/// use substep_physics::utils::cross_product;
///
/// let v1 = (1.0, 0.0, 0.0);
/// let v2 = (0.0, 1.0, 0.0);
/// let result = cross_product(v1, v2);
///
/// assert_eq!(result, (0.0, 0.0, 1.0));
/// ```
pub fn cross_product(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> (f64, f64, f64) {
    (
        v1.1 * v2.2 - v1.2 * v2.1,
        v1.2 * v2.0 - v1.0 * v2.2,
        v1.0 * v2.1 - v1.1 * v2.0
    )
}

/// Calculates the vector magnitude (length) of a 3D vector.
///
/// # Arguments
/// * `v` - The vector as a tuple (x, y, z).
///
/// # Returns
/// The magnitude of the vector.
///
/// # Example
/// ```
/// use substep_physics::utils::vector_magnitude;
///
/// let v = (3.0, 0.0, 4.0);
/// let magnitude = vector_magnitude(v);
///
/// assert!((magnitude - 5.0).abs() < 1e-10);
/// ```
pub fn vector_magnitude(v: (f64, f64, f64)) -> f64 {
    (v.0 * v.0 + v.1 * v.1 + v.2 * v.2).sqrt()
}

/// Normalizes a 3D vector (makes it a unit vector).
///
/// # Arguments
/// * `v` - The vector to normalize as a tuple (x, y, z).
///
/// # Returns
/// The normalized vector as a tuple (x, y, z).
///
/// # Errors
/// Returns an error if the input is a zero vector.
///
/// # Example
/// ```
/// use substep_physics::utils::normalize_vector;
///
/// let v = (0.0, 3.0, 4.0);
/// let normalized = normalize_vector(v).unwrap();
///
/// assert!((normalized.1 - 0.6).abs() < 1e-10);
/// assert!((normalized.2 - 0.8).abs() < 1e-10);
/// ```
pub fn normalize_vector(v: (f64, f64, f64)) -> Result<(f64, f64, f64), &'static str> {
    let magnitude = vector_magnitude(v);

    if magnitude == 0.0 {
        return Err("Cannot normalize a zero vector");
    }

    Ok((v.0 / magnitude, v.1 / magnitude, v.2 / magnitude))
}

/// Adds two 3D vectors component-wise.
pub fn add_vectors(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> (f64, f64, f64) {
    (v1.0 + v2.0, v1.1 + v2.1, v1.2 + v2.2)
}

/// Subtracts the second 3D vector from the first, component-wise.
pub fn sub_vectors(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> (f64, f64, f64) {
    (v1.0 - v2.0, v1.1 - v2.1, v1.2 - v2.2)
}

/// Scales a 3D vector by a scalar.
pub fn scale_vector(v: (f64, f64, f64), s: f64) -> (f64, f64, f64) {
    (v.0 * s, v.1 * s, v.2 * s)
}

/// Negates a 3D vector.
pub fn negate_vector(v: (f64, f64, f64)) -> (f64, f64, f64) {
    (-v.0, -v.1, -v.2)
}

/// Rotates a 3D point around the x-axis.
///
/// # Arguments
/// * `point` - The point to rotate as a tuple (x, y, z).
/// * `angle` - The angle of rotation in radians.
///
/// # Returns
/// The rotated point as a tuple (x, y, z).
///
/// # Example
/// ```
/// use substep_physics::utils::rotate_around_x;
/// use std::f64::consts::PI;
///
/// let point = (1.0, 1.0, 0.0);
/// let rotated = rotate_around_x(point, PI/2.0);
///
/// assert!((rotated.0 - 1.0).abs() < 1e-10);
/// assert!((rotated.1 - 0.0).abs() < 1e-10);
/// assert!((rotated.2 - 1.0).abs() < 1e-10);
/// ```
pub fn rotate_around_x(point: (f64, f64, f64), angle: f64) -> (f64, f64, f64) {
    let cos_angle = angle.cos();
    let sin_angle = angle.sin();

    (
        point.0,
        point.1 * cos_angle - point.2 * sin_angle,
        point.1 * sin_angle + point.2 * cos_angle
    )
}

/// Rotates a 3D point around the y-axis.
///
/// # Arguments
/// * `point` - The point to rotate as a tuple (x, y, z).
/// * `angle` - The angle of rotation in radians.
///
/// # Returns
/// The rotated point as a tuple (x, y, z).
///
/// # Example
/// ```
/// use substep_physics::utils::rotate_around_y;
/// use std::f64::consts::PI;
///
/// let point = (1.0, 0.0, 1.0);
/// let rotated = rotate_around_y(point, PI/2.0);
///
/// assert!((rotated.0 - 1.0).abs() < 1e-10);
/// assert!((rotated.1 - 0.0).abs() < 1e-10);
/// assert!((rotated.2 - -1.0).abs() < 1e-10);
/// ```
pub fn rotate_around_y(point: (f64, f64, f64), angle: f64) -> (f64, f64, f64) {
    let cos_angle = angle.cos();
    let sin_angle = angle.sin();

    (
        point.0 * cos_angle + point.2 * sin_angle,
        point.1,
        -point.0 * sin_angle + point.2 * cos_angle
    )
}

/// Rotates a 3D point around the z-axis.
///
/// # Arguments
/// * `point` - The point to rotate as a tuple (x, y, z).
/// * `angle` - The angle of rotation in radians.
///
/// # Returns
/// The rotated point as a tuple (x, y, z).
///
/// # Example
/// ```
/// use substep_physics::utils::rotate_around_z;
/// use std::f64::consts::PI;
///
/// let point = (1.0, 1.0, 0.0);
/// let rotated = rotate_around_z(point, PI/2.0);
///
/// assert!((rotated.0 - -1.0).abs() < 1e-10);
/// assert!((rotated.1 - 1.0).abs() < 1e-10);
/// assert!((rotated.2 - 0.0).abs() < 1e-10);
/// ```
pub fn rotate_around_z(point: (f64, f64, f64), angle: f64) -> (f64, f64, f64) {
    let cos_angle = angle.cos();
    let sin_angle = angle.sin();

    (
        point.0 * cos_angle - point.1 * sin_angle,
        point.0 * sin_angle + point.1 * cos_angle,
        point.2
    )
}

/// Clamps a value so its magnitude does not exceed the given bound.
///
/// # Arguments
/// * `value` - The value to clamp.
/// * `bound` - The magnitude bound (its sign is ignored).
///
/// # Returns
/// The value, limited to the range [-|bound|, |bound|].
///
/// # Example
/// ```
/// use substep_physics::utils::clamp_magnitude;
///
/// assert_eq!(clamp_magnitude(2.5, 1.0), 1.0);
/// assert_eq!(clamp_magnitude(-2.5, 1.0), -1.0);
/// assert_eq!(clamp_magnitude(0.5, 1.0), 0.5);
/// ```
pub fn clamp_magnitude(value: f64, bound: f64) -> f64 {
    let bound = bound.abs();
    if value > bound || value < -bound {
        return if value > 0.0 { bound } else { -bound };
    }
    value
}
