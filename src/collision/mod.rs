mod gjk_intersection;
mod ray_intersection;

pub use gjk_intersection::*;
pub use ray_intersection::*;

#[cfg(test)]
mod gjk_intersection_tests;
