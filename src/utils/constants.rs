use crate::utils;

pub const DEFAULT_SIMULATION_CONSTANTS: utils::SimulationConstants = utils::SimulationConstants {
    target_fps: 60.0,
    sub_steps: 8,
    restitution: 0.8,
    min_leaf_size: 32.0,
    max_leaf_objects: 8,
    hit_impulse: 20.0,
    hit_angular_impulse: 100.0,
};
