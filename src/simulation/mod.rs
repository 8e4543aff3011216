mod world;
mod integrator;
mod broad_phase;
mod narrow_phase;
mod hit_scan;

pub use world::*;

#[cfg(test)]
mod hit_scan_tests;
