use crate::utils::{
    add_vectors, clamp_magnitude, cross_product, dot_product, normalize_vector, rotate_around_x,
    rotate_around_y, rotate_around_z, scale_vector, sub_vectors, vector_magnitude,
};
use approx::assert_relative_eq;
use std::f64::consts::PI;

#[test]
fn test_cross_product_is_anticommutative() {
    let v1 = (1.0, 2.0, 3.0);
    let v2 = (-4.0, 0.5, 2.0);

    let forward = cross_product(v1, v2);
    let backward = cross_product(v2, v1);

    assert_relative_eq!(forward.0, -backward.0);
    assert_relative_eq!(forward.1, -backward.1);
    assert_relative_eq!(forward.2, -backward.2);
}

#[test]
fn test_cross_product_is_orthogonal_to_inputs() {
    let v1 = (1.0, 2.0, 3.0);
    let v2 = (4.0, -5.0, 6.0);

    let cross = cross_product(v1, v2);

    assert_relative_eq!(dot_product(cross, v1), 0.0, epsilon = 1e-12);
    assert_relative_eq!(dot_product(cross, v2), 0.0, epsilon = 1e-12);
}

#[test]
fn test_normalize_vector_produces_unit_length() {
    let v = (3.0, -4.0, 12.0);
    let normalized = normalize_vector(v).expect("non-zero vector should normalize");

    assert_relative_eq!(vector_magnitude(normalized), 1.0, epsilon = 1e-12);
}

#[test]
fn test_normalize_zero_vector_fails() {
    assert!(normalize_vector((0.0, 0.0, 0.0)).is_err());
}

#[test]
fn test_vector_arithmetic() {
    let v1 = (1.0, 2.0, 3.0);
    let v2 = (0.5, -1.0, 4.0);

    assert_eq!(add_vectors(v1, v2), (1.5, 1.0, 7.0));
    assert_eq!(sub_vectors(v1, v2), (0.5, 3.0, -1.0));
    assert_eq!(scale_vector(v1, 2.0), (2.0, 4.0, 6.0));
}

#[test]
fn test_yaw_rotation_moves_forward_axis() {
    // A quarter turn around Y takes +Z onto +X.
    let rotated = rotate_around_y((0.0, 0.0, 1.0), PI / 2.0);

    assert_relative_eq!(rotated.0, 1.0, epsilon = 1e-12);
    assert_relative_eq!(rotated.1, 0.0, epsilon = 1e-12);
    assert_relative_eq!(rotated.2, 0.0, epsilon = 1e-12);
}

#[test]
fn test_rotations_preserve_magnitude() {
    let point = (1.0, 2.0, -3.0);
    let magnitude = vector_magnitude(point);

    for angle in [0.3, 1.2, -2.0, PI] {
        assert_relative_eq!(
            vector_magnitude(rotate_around_x(point, angle)),
            magnitude,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            vector_magnitude(rotate_around_y(point, angle)),
            magnitude,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            vector_magnitude(rotate_around_z(point, angle)),
            magnitude,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_clamp_magnitude_bounds_both_signs() {
    assert_eq!(clamp_magnitude(5.0, 1.0), 1.0);
    assert_eq!(clamp_magnitude(-5.0, 1.0), -1.0);
    assert_eq!(clamp_magnitude(0.25, 1.0), 0.25);
    // A negative bound behaves like its absolute value.
    assert_eq!(clamp_magnitude(5.0, -2.0), 2.0);
}
