use crate::collision::{find_intersection, IntersectionState};
use crate::utils::{dot_product, vector_magnitude};
use approx::assert_relative_eq;

fn cube_vertices(center: (f64, f64, f64), half: f64) -> Vec<(f64, f64, f64)> {
    let mut vertices = Vec::with_capacity(8);
    for &x in &[-half, half] {
        for &y in &[-half, half] {
            for &z in &[-half, half] {
                vertices.push((center.0 + x, center.1 + y, center.2 + z));
            }
        }
    }
    vertices
}

fn seed_between(a: (f64, f64, f64), b: (f64, f64, f64)) -> (f64, f64, f64) {
    (b.0 - a.0, b.1 - a.1, b.2 - a.2)
}

#[test]
fn test_disjoint_cubes_report_no_contact() {
    let a = cube_vertices((0.0, 0.0, 0.0), 0.5);
    let b = cube_vertices((3.0, 0.0, 0.0), 0.5);

    let result = find_intersection(&a, &b, seed_between((0.0, 0.0, 0.0), (3.0, 0.0, 0.0)));

    assert_eq!(result.state, IntersectionState::Disjoint);
    assert!(result.contact.is_none());
}

#[test]
fn test_shallow_overlap_produces_axis_contact() {
    // Unit cubes overlapping by 0.1 along x.
    let a = cube_vertices((0.0, 0.0, 0.0), 0.5);
    let b = cube_vertices((0.9, 0.0, 0.0), 0.5);

    let result = find_intersection(&a, &b, seed_between((0.0, 0.0, 0.0), (0.9, 0.0, 0.0)));

    assert_eq!(result.state, IntersectionState::Intersecting);
    let contact = result.contact.expect("intersecting result carries a contact");

    assert_relative_eq!(contact.depth, 0.1, epsilon = 1e-9);
    assert_relative_eq!(contact.normal.0, 1.0, epsilon = 1e-9);
    assert_relative_eq!(contact.normal.1, 0.0, epsilon = 1e-9);
    assert_relative_eq!(contact.normal.2, 0.0, epsilon = 1e-9);
    // The contact point lies inside the overlap slab.
    assert!(
        contact.point.0 > 0.3 && contact.point.0 < 0.6,
        "contact point x = {} should be near the overlap region",
        contact.point.0
    );
}

#[test]
fn test_deep_overlap_reports_full_depth() {
    let a = cube_vertices((0.0, 0.0, 0.0), 0.5);
    let b = cube_vertices((0.2, 0.0, 0.0), 0.5);

    let result = find_intersection(&a, &b, seed_between((0.0, 0.0, 0.0), (0.2, 0.0, 0.0)));

    assert_eq!(result.state, IntersectionState::Intersecting);
    let contact = result.contact.expect("intersecting result carries a contact");

    assert_relative_eq!(contact.depth, 0.8, epsilon = 1e-9);
    assert_relative_eq!(contact.normal.0, 1.0, epsilon = 1e-9);
}

#[test]
fn test_swapped_arguments_mirror_the_normal() {
    let a = cube_vertices((0.0, 0.0, 0.0), 0.5);
    let b = cube_vertices((0.9, 0.2, 0.0), 0.5);

    let forward = find_intersection(&a, &b, seed_between((0.0, 0.0, 0.0), (0.9, 0.2, 0.0)));
    let backward = find_intersection(&b, &a, seed_between((0.9, 0.2, 0.0), (0.0, 0.0, 0.0)));

    assert_eq!(forward.state, IntersectionState::Intersecting);
    assert_eq!(backward.state, IntersectionState::Intersecting);

    let fc = forward.contact.expect("intersecting result carries a contact");
    let bc = backward.contact.expect("intersecting result carries a contact");

    assert_relative_eq!(fc.depth, bc.depth, epsilon = 1e-9);
    assert_relative_eq!(fc.normal.0, -bc.normal.0, epsilon = 1e-9);
    assert_relative_eq!(fc.normal.1, -bc.normal.1, epsilon = 1e-9);
    assert_relative_eq!(fc.normal.2, -bc.normal.2, epsilon = 1e-9);
}

#[test]
fn test_contained_cube_reports_unit_normal_and_positive_depth() {
    // Co-centered cubes; every separating face is equally deep.
    let a = cube_vertices((0.0, 0.0, 0.0), 0.5);
    let b = cube_vertices((0.0, 0.0, 0.0), 0.5);

    let result = find_intersection(&a, &b, (0.0, 0.0, 0.0));

    assert_eq!(result.state, IntersectionState::Intersecting);
    let contact = result.contact.expect("intersecting result carries a contact");

    assert_relative_eq!(contact.depth, 1.0, epsilon = 1e-9);
    assert_relative_eq!(vector_magnitude(contact.normal), 1.0, epsilon = 1e-9);
}

#[test]
fn test_diagonal_offset_normal_points_from_a_to_b() {
    let a = cube_vertices((0.0, 0.0, 0.0), 0.5);
    let b = cube_vertices((0.7, 0.7, 0.0), 0.5);

    let result = find_intersection(&a, &b, seed_between((0.0, 0.0, 0.0), (0.7, 0.7, 0.0)));

    assert_eq!(result.state, IntersectionState::Intersecting);
    let contact = result.contact.expect("intersecting result carries a contact");

    // Whichever face wins, the normal must have a positive component toward B.
    let toward_b = dot_product(contact.normal, (0.7, 0.7, 0.0));
    assert!(
        toward_b > 0.0,
        "normal {:?} should point from A toward B",
        contact.normal
    );
    assert_relative_eq!(contact.depth, 0.3, epsilon = 1e-9);
}

#[test]
fn test_tetrahedron_versus_cube() {
    let cube = cube_vertices((0.0, 0.0, 0.0), 0.5);
    let tetrahedron = vec![
        (2.0, 0.0, 0.0),
        (3.0, 0.0, 0.0),
        (2.5, 1.0, 0.0),
        (2.5, 0.5, 1.0),
    ];

    let apart = find_intersection(&cube, &tetrahedron, (2.4, 0.3, 0.2));
    assert_eq!(apart.state, IntersectionState::Disjoint);

    let shifted: Vec<(f64, f64, f64)> = tetrahedron
        .iter()
        .map(|v| (v.0 - 1.7, v.1, v.2))
        .collect();
    let touching = find_intersection(&cube, &shifted, (0.7, 0.3, 0.2));
    assert_eq!(touching.state, IntersectionState::Intersecting);
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let a = cube_vertices((0.0, 0.1, -0.2), 0.5);
    let b = cube_vertices((0.6, 0.4, 0.1), 0.5);
    let seed = seed_between((0.0, 0.1, -0.2), (0.6, 0.4, 0.1));

    let first = find_intersection(&a, &b, seed);
    let second = find_intersection(&a, &b, seed);

    assert_eq!(first.state, second.state);
    let fc = first.contact.expect("intersecting result carries a contact");
    let sc = second.contact.expect("intersecting result carries a contact");

    assert_eq!(fc.depth.to_bits(), sc.depth.to_bits());
    assert_eq!(fc.normal.0.to_bits(), sc.normal.0.to_bits());
    assert_eq!(fc.point.1.to_bits(), sc.point.1.to_bits());
}
