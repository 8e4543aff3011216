use crate::models::{ConvexHull, RayCast};
use crate::utils::{cross_product, dot_product, sub_vectors};

const DETERMINANT_EPSILON: f64 = 1e-12;

/// Precise ray-versus-hull intersection: the closest parametric hit distance
/// along the ray segment against the hull's triangle faces, plus the hit
/// point, or `None` when the segment misses the hull entirely.
///
/// Triangles are tested without backface culling, so a ray started inside a
/// hull reports the exit face.
pub fn ray_hull_distance(ray: &RayCast, hull: &ConvexHull) -> Option<(f64, (f64, f64, f64))> {
    let mut closest: Option<f64> = None;

    for face in &hull.faces {
        let v0 = hull.vertices[face[0]];
        let v1 = hull.vertices[face[1]];
        let v2 = hull.vertices[face[2]];

        if let Some(distance) = ray_triangle_distance(ray.origin, ray.direction, v0, v1, v2) {
            if distance <= ray.range && closest.map_or(true, |best| distance < best) {
                closest = Some(distance);
            }
        }
    }

    closest.map(|distance| {
        let point = (
            ray.origin.0 + ray.direction.0 * distance,
            ray.origin.1 + ray.direction.1 * distance,
            ray.origin.2 + ray.direction.2 * distance,
        );
        (distance, point)
    })
}

/// Möller–Trumbore ray-triangle intersection. Returns the distance along the
/// (unit) direction, or `None` for a miss, a hit behind the origin, or a ray
/// parallel to the triangle plane.
fn ray_triangle_distance(
    origin: (f64, f64, f64),
    direction: (f64, f64, f64),
    v0: (f64, f64, f64),
    v1: (f64, f64, f64),
    v2: (f64, f64, f64),
) -> Option<f64> {
    let edge1 = sub_vectors(v1, v0);
    let edge2 = sub_vectors(v2, v0);

    let p = cross_product(direction, edge2);
    let determinant = dot_product(edge1, p);
    if determinant.abs() < DETERMINANT_EPSILON {
        return None;
    }
    let inverse_determinant = 1.0 / determinant;

    let t_vec = sub_vectors(origin, v0);
    let u = dot_product(t_vec, p) * inverse_determinant;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = cross_product(t_vec, edge1);
    let v = dot_product(direction, q) * inverse_determinant;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let distance = dot_product(edge2, q) * inverse_determinant;
    if distance >= 0.0 {
        Some(distance)
    } else {
        None
    }
}
