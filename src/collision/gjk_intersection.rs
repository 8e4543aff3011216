use crate::utils::{
    cross_product, dot_product, negate_vector, normalize_vector, sub_vectors, vector_magnitude,
};

const TOLERANCE: f64 = 1e-10;
const EPA_TOLERANCE: f64 = 1e-8;
const MAX_GJK_ITERATIONS: usize = 64;
const MAX_EPA_ITERATIONS: usize = 64;

/// Result state of a convex intersection test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionState {
    Disjoint,
    Intersecting,
}

/// Contact information for an intersecting pair.
#[derive(Debug, Clone)]
pub struct Contact {
    /// Unit normal pointing from the first hull toward the second.
    pub normal: (f64, f64, f64),
    /// Penetration depth along the normal.
    pub depth: f64,
    /// World-space contact point.
    pub point: (f64, f64, f64),
}

/// Outcome of [`find_intersection`]. `contact` is present exactly when the
/// state is `Intersecting`.
#[derive(Debug, Clone)]
pub struct Intersection {
    pub state: IntersectionState,
    pub contact: Option<Contact>,
}

/// A point on the Minkowski difference, remembering the witness points on
/// both hulls that produced it.
#[derive(Debug, Clone, Copy)]
struct SupportPoint {
    point: (f64, f64, f64),
    witness_a: (f64, f64, f64),
    witness_b: (f64, f64, f64),
}

/// GJK (Gilbert-Johnson-Keerthi) intersection test between two convex hulls
/// given as world-space vertex clouds, followed by EPA contact generation
/// when the hulls overlap.
///
/// The test is pure with respect to its inputs and deterministic: support
/// points are selected by a strict maximum over the vertex list, so repeated
/// calls with identical inputs walk identical simplices.
///
/// # Arguments
/// * `vertices_a` - World-space vertices of the first hull.
/// * `vertices_b` - World-space vertices of the second hull.
/// * `seed_direction` - Initial search direction, normally the vector between
///   the hulls' centroids. A zero seed falls back to the x-axis.
///
/// # Returns
/// An [`Intersection`] whose contact (when intersecting) carries a unit
/// normal pointing from the first hull toward the second, the penetration
/// depth along that normal, and a world-space contact point.
pub fn find_intersection(
    vertices_a: &[(f64, f64, f64)],
    vertices_b: &[(f64, f64, f64)],
    seed_direction: (f64, f64, f64),
) -> Intersection {
    let seed = normalize_vector(seed_direction).unwrap_or((1.0, 0.0, 0.0));

    let first = minkowski_support(vertices_a, vertices_b, seed);
    if vector_magnitude(first.point) < TOLERANCE {
        // The surfaces touch exactly along the seed direction.
        return intersecting(touching_contact(&first, seed));
    }

    let mut simplex: Vec<SupportPoint> = Vec::with_capacity(4);
    simplex.push(first);
    let mut direction = negate_vector(first.point);

    for _ in 0..MAX_GJK_ITERATIONS {
        let unit_direction = match normalize_vector(direction) {
            Ok(unit) => unit,
            // A vanishing search direction means the origin sits on the
            // current simplex feature: a touching contact.
            Err(_) => {
                let reference = simplex[simplex.len() - 1];
                return intersecting(touching_contact(&reference, seed));
            }
        };

        let support = minkowski_support(vertices_a, vertices_b, unit_direction);
        if dot_product(support.point, unit_direction) < TOLERANCE {
            // The support point never crossed the origin; a separating
            // direction exists.
            return Intersection {
                state: IntersectionState::Disjoint,
                contact: None,
            };
        }

        simplex.push(support);
        if update_simplex(&mut simplex, &mut direction) {
            let contact = epa_contact(vertices_a, vertices_b, &simplex, seed);
            return intersecting(contact);
        }
    }

    // No convergence within the iteration budget; report the pair disjoint
    // rather than fabricating a contact.
    Intersection {
        state: IntersectionState::Disjoint,
        contact: None,
    }
}

fn intersecting(contact: Contact) -> Intersection {
    Intersection {
        state: IntersectionState::Intersecting,
        contact: Some(contact),
    }
}

/// Zero-depth contact for exactly-touching hulls.
fn touching_contact(support: &SupportPoint, normal: (f64, f64, f64)) -> Contact {
    Contact {
        normal,
        depth: 0.0,
        point: midpoint(support.witness_a, support.witness_b),
    }
}

fn midpoint(a: (f64, f64, f64), b: (f64, f64, f64)) -> (f64, f64, f64) {
    ((a.0 + b.0) * 0.5, (a.1 + b.1) * 0.5, (a.2 + b.2) * 0.5)
}

/// Furthest vertex of a hull in the given direction. Strict comparison keeps
/// the first of several equally-far vertices, which keeps the walk
/// deterministic.
fn support_on_hull(vertices: &[(f64, f64, f64)], direction: (f64, f64, f64)) -> (f64, f64, f64) {
    let mut best = vertices[0];
    let mut best_projection = dot_product(best, direction);
    for vertex in &vertices[1..] {
        let projection = dot_product(*vertex, direction);
        if projection > best_projection {
            best_projection = projection;
            best = *vertex;
        }
    }
    best
}

/// Support point of the Minkowski difference `A - B` in `direction`.
fn minkowski_support(
    vertices_a: &[(f64, f64, f64)],
    vertices_b: &[(f64, f64, f64)],
    direction: (f64, f64, f64),
) -> SupportPoint {
    let witness_a = support_on_hull(vertices_a, direction);
    let witness_b = support_on_hull(vertices_b, negate_vector(direction));
    SupportPoint {
        point: sub_vectors(witness_a, witness_b),
        witness_a,
        witness_b,
    }
}

/// Triple product (a × b) × c.
fn triple_product(
    a: (f64, f64, f64),
    b: (f64, f64, f64),
    c: (f64, f64, f64),
) -> (f64, f64, f64) {
    cross_product(cross_product(a, b), c)
}

/// A unit vector perpendicular to `v`, built against its least significant
/// axis.
fn perpendicular_to(v: (f64, f64, f64)) -> (f64, f64, f64) {
    let axis = if v.0.abs() <= v.1.abs() && v.0.abs() <= v.2.abs() {
        (1.0, 0.0, 0.0)
    } else if v.1.abs() <= v.2.abs() {
        (0.0, 1.0, 0.0)
    } else {
        (0.0, 0.0, 1.0)
    };
    normalize_vector(cross_product(v, axis)).unwrap_or((1.0, 0.0, 0.0))
}

/// Process the simplex toward containing the origin. Returns true once the
/// simplex is a tetrahedron enclosing the origin.
fn update_simplex(simplex: &mut Vec<SupportPoint>, direction: &mut (f64, f64, f64)) -> bool {
    match simplex.len() {
        2 => line_case(simplex, direction),
        3 => triangle_case(simplex, direction),
        4 => tetrahedron_case(simplex, direction),
        _ => {
            *direction = (1.0, 0.0, 0.0);
            false
        }
    }
}

/// Line simplex: newest point last.
fn line_case(simplex: &mut Vec<SupportPoint>, direction: &mut (f64, f64, f64)) -> bool {
    let a = simplex[1].point;
    let b = simplex[0].point;

    let ab = sub_vectors(b, a);
    let ao = negate_vector(a);

    if dot_product(ab, ao) > 0.0 {
        // Origin is beside the segment; search perpendicular to it.
        *direction = triple_product(ab, ao, ab);
        if vector_magnitude(*direction) < TOLERANCE {
            // Origin lies on the segment's line.
            *direction = perpendicular_to(ab);
        }
    } else {
        // Origin is behind the newest point; drop the old one.
        let newest = simplex[1];
        simplex.clear();
        simplex.push(newest);
        *direction = ao;
    }

    false
}

/// Triangle simplex: newest point last.
fn triangle_case(simplex: &mut Vec<SupportPoint>, direction: &mut (f64, f64, f64)) -> bool {
    let a = simplex[2].point;
    let b = simplex[1].point;
    let c = simplex[0].point;

    let ab = sub_vectors(b, a);
    let ac = sub_vectors(c, a);
    let ao = negate_vector(a);
    let abc = cross_product(ab, ac);

    if dot_product(cross_product(abc, ac), ao) > 0.0 {
        if dot_product(ac, ao) > 0.0 {
            // Edge AC region.
            let (newest, oldest) = (simplex[2], simplex[0]);
            simplex.clear();
            simplex.push(oldest);
            simplex.push(newest);
            *direction = triple_product(ac, ao, ac);
            if vector_magnitude(*direction) < TOLERANCE {
                *direction = perpendicular_to(ac);
            }
        } else {
            // Edge AB region.
            let (newest, middle) = (simplex[2], simplex[1]);
            simplex.clear();
            simplex.push(middle);
            simplex.push(newest);
            return line_case(simplex, direction);
        }
    } else if dot_product(cross_product(ab, abc), ao) > 0.0 {
        // Edge AB region on the other side.
        let (newest, middle) = (simplex[2], simplex[1]);
        simplex.clear();
        simplex.push(middle);
        simplex.push(newest);
        return line_case(simplex, direction);
    } else if dot_product(abc, ao) > 0.0 {
        // Origin above the triangle face.
        *direction = abc;
    } else {
        // Origin below the face; flip the winding so the next point keeps
        // the tetrahedron faces oriented outward.
        simplex.swap(0, 1);
        *direction = negate_vector(abc);
    }

    false
}

/// Tetrahedron simplex: newest point last. The triangle case maintains the
/// winding invariant that the three faces containing the newest point have
/// outward normals as computed here.
fn tetrahedron_case(simplex: &mut Vec<SupportPoint>, direction: &mut (f64, f64, f64)) -> bool {
    let a = simplex[3].point;
    let b = simplex[2].point;
    let c = simplex[1].point;
    let d = simplex[0].point;

    let ab = sub_vectors(b, a);
    let ac = sub_vectors(c, a);
    let ad = sub_vectors(d, a);
    let ao = negate_vector(a);

    let abc = cross_product(ab, ac);
    let acd = cross_product(ac, ad);
    let adb = cross_product(ad, ab);

    if dot_product(abc, ao) > 0.0 {
        // Origin outside face ABC; drop D.
        let (sp_a, sp_b, sp_c) = (simplex[3], simplex[2], simplex[1]);
        simplex.clear();
        simplex.push(sp_c);
        simplex.push(sp_b);
        simplex.push(sp_a);
        return triangle_case(simplex, direction);
    }

    if dot_product(acd, ao) > 0.0 {
        // Origin outside face ACD; drop B.
        let (sp_a, sp_c, sp_d) = (simplex[3], simplex[1], simplex[0]);
        simplex.clear();
        simplex.push(sp_d);
        simplex.push(sp_c);
        simplex.push(sp_a);
        return triangle_case(simplex, direction);
    }

    if dot_product(adb, ao) > 0.0 {
        // Origin outside face ADB; drop C.
        let (sp_a, sp_b, sp_d) = (simplex[3], simplex[2], simplex[0]);
        simplex.clear();
        simplex.push(sp_b);
        simplex.push(sp_d);
        simplex.push(sp_a);
        return triangle_case(simplex, direction);
    }

    // Origin is inside all faces containing A, hence inside the tetrahedron.
    true
}

/// A face of the expanding polytope.
#[derive(Debug, Clone, Copy)]
struct Face {
    indices: [usize; 3],
    /// Unit outward normal.
    normal: (f64, f64, f64),
    /// Distance from the origin to the face plane.
    distance: f64,
}

/// Builds an outward-oriented face over three polytope vertices, or `None`
/// for a degenerate triangle. Orientation is fixed against an interior point
/// of the polytope rather than the origin, so faces passing exactly through
/// the origin still come out pointing the right way.
fn make_face(
    polytope: &[SupportPoint],
    interior: (f64, f64, f64),
    i0: usize,
    i1: usize,
    i2: usize,
) -> Option<Face> {
    let a = polytope[i0].point;
    let b = polytope[i1].point;
    let c = polytope[i2].point;

    let normal = cross_product(sub_vectors(b, a), sub_vectors(c, a));
    let length = vector_magnitude(normal);
    if length < 1e-12 {
        return None;
    }
    let normal = (normal.0 / length, normal.1 / length, normal.2 / length);

    if dot_product(normal, sub_vectors(a, interior)) < 0.0 {
        let normal = negate_vector(normal);
        Some(Face {
            indices: [i0, i2, i1],
            normal,
            distance: dot_product(normal, a),
        })
    } else {
        Some(Face {
            indices: [i0, i1, i2],
            normal,
            distance: dot_product(normal, a),
        })
    }
}

/// A shared edge shows up twice in opposite order while collecting the
/// horizon; only boundary edges survive.
fn push_unique_edge(edges: &mut Vec<[usize; 2]>, start: usize, end: usize) {
    if let Some(position) = edges.iter().position(|e| e[0] == end && e[1] == start) {
        edges.remove(position);
    } else {
        edges.push([start, end]);
    }
}

/// EPA (expanding polytope algorithm): grows the terminal GJK tetrahedron
/// until the face nearest the origin stops moving outward, then derives the
/// contact from that face.
fn epa_contact(
    vertices_a: &[(f64, f64, f64)],
    vertices_b: &[(f64, f64, f64)],
    simplex: &[SupportPoint],
    seed: (f64, f64, f64),
) -> Contact {
    let mut polytope: Vec<SupportPoint> = simplex.to_vec();

    // The tetrahedron centroid anchors face orientation for the whole
    // expansion; every grown polytope still contains it.
    let interior = {
        let mut sum = (0.0, 0.0, 0.0);
        for support in &polytope {
            sum.0 += support.point.0;
            sum.1 += support.point.1;
            sum.2 += support.point.2;
        }
        (sum.0 / 4.0, sum.1 / 4.0, sum.2 / 4.0)
    };

    let mut faces: Vec<Face> = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]
        .iter()
        .filter_map(|idx| make_face(&polytope, interior, idx[0], idx[1], idx[2]))
        .collect();

    if faces.is_empty() {
        // Degenerate (flat) terminal simplex: effectively a touching contact.
        return touching_contact(&polytope[0], seed);
    }

    for _ in 0..MAX_EPA_ITERATIONS {
        let closest = closest_face_index(&faces);
        let min_distance = faces[closest].distance;
        let search_normal = faces[closest].normal;

        let support = minkowski_support(vertices_a, vertices_b, search_normal);
        let growth = dot_product(support.point, search_normal) - min_distance;
        if growth < EPA_TOLERANCE {
            return contact_from_face(&polytope, &faces[closest]);
        }

        // Expand: remove every face visible from the new point and stitch
        // the horizon to it.
        let new_index = polytope.len();
        polytope.push(support);

        let mut horizon: Vec<[usize; 2]> = Vec::new();
        faces.retain(|face| {
            let visible = dot_product(face.normal, support.point) > face.distance;
            if visible {
                push_unique_edge(&mut horizon, face.indices[0], face.indices[1]);
                push_unique_edge(&mut horizon, face.indices[1], face.indices[2]);
                push_unique_edge(&mut horizon, face.indices[2], face.indices[0]);
            }
            !visible
        });

        for edge in &horizon {
            if let Some(face) = make_face(&polytope, interior, edge[0], edge[1], new_index) {
                faces.push(face);
            }
        }

        if faces.is_empty() {
            return touching_contact(&polytope[new_index], seed);
        }
    }

    // Iteration budget exhausted; the nearest face is the best answer.
    let closest = closest_face_index(&faces);
    contact_from_face(&polytope, &faces[closest])
}

fn closest_face_index(faces: &[Face]) -> usize {
    let mut closest = 0;
    let mut min_distance = faces[0].distance;
    for (index, face) in faces.iter().enumerate().skip(1) {
        if face.distance < min_distance {
            min_distance = face.distance;
            closest = index;
        }
    }
    closest
}

fn contact_from_face(polytope: &[SupportPoint], face: &Face) -> Contact {
    let sp0 = polytope[face.indices[0]];
    let sp1 = polytope[face.indices[1]];
    let sp2 = polytope[face.indices[2]];

    let (u, v, w) = barycentric_of_origin_projection(sp0.point, sp1.point, sp2.point);

    let witness_a = (
        u * sp0.witness_a.0 + v * sp1.witness_a.0 + w * sp2.witness_a.0,
        u * sp0.witness_a.1 + v * sp1.witness_a.1 + w * sp2.witness_a.1,
        u * sp0.witness_a.2 + v * sp1.witness_a.2 + w * sp2.witness_a.2,
    );
    let witness_b = (
        u * sp0.witness_b.0 + v * sp1.witness_b.0 + w * sp2.witness_b.0,
        u * sp0.witness_b.1 + v * sp1.witness_b.1 + w * sp2.witness_b.1,
        u * sp0.witness_b.2 + v * sp1.witness_b.2 + w * sp2.witness_b.2,
    );

    Contact {
        normal: face.normal,
        depth: face.distance,
        point: midpoint(witness_a, witness_b),
    }
}

/// Barycentric coordinates of the origin's projection onto the triangle,
/// clamped to the nearest vertex when the projection falls outside.
fn barycentric_of_origin_projection(
    a: (f64, f64, f64),
    b: (f64, f64, f64),
    c: (f64, f64, f64),
) -> (f64, f64, f64) {
    let ab = sub_vectors(b, a);
    let ac = sub_vectors(c, a);
    let ap = negate_vector(a);

    let d00 = dot_product(ab, ab);
    let d01 = dot_product(ab, ac);
    let d11 = dot_product(ac, ac);
    let d20 = dot_product(ap, ab);
    let d21 = dot_product(ap, ac);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < 1e-12 {
        return (1.0, 0.0, 0.0);
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    let u = 1.0 - v - w;

    if u < 0.0 || v < 0.0 || w < 0.0 {
        // Outside the triangle; fall back to the nearest vertex.
        let dist_a = vector_magnitude(a);
        let dist_b = vector_magnitude(b);
        let dist_c = vector_magnitude(c);
        return if dist_a <= dist_b && dist_a <= dist_c {
            (1.0, 0.0, 0.0)
        } else if dist_b <= dist_c {
            (0.0, 1.0, 0.0)
        } else {
            (0.0, 0.0, 1.0)
        };
    }

    (u, v, w)
}
