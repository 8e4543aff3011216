// src/constants_config.rs

#[derive(Debug, Clone, Copy)]
pub struct SimulationConstants {
    /// Target render frame rate the fixed step is derived from.
    pub target_fps: f64,
    /// Number of fixed sub-steps per target frame.
    pub sub_steps: u32,
    /// Restitution coefficient applied to every collision pair.
    pub restitution: f64,
    /// Minimum edge length below which the spatial index stops subdividing.
    pub min_leaf_size: f64,
    /// Maximum number of entries a spatial index node holds before subdividing.
    pub max_leaf_objects: usize,
    /// Linear impulse magnitude applied by an interacting hit-scan ray.
    pub hit_impulse: f64,
    /// Angular impulse factor applied by an interacting hit-scan ray.
    pub hit_angular_impulse: f64,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            sub_steps: 8,
            restitution: 0.8,
            min_leaf_size: 32.0,
            max_leaf_objects: 8,
            hit_impulse: 20.0,
            hit_angular_impulse: 100.0,
        }
    }
}

impl SimulationConstants {
    pub fn new(
        target_fps: Option<f64>,
        sub_steps: Option<u32>,
        restitution: Option<f64>,
        min_leaf_size: Option<f64>,
        max_leaf_objects: Option<usize>,
        hit_impulse: Option<f64>,
        hit_angular_impulse: Option<f64>,
    ) -> Self {
        let default = SimulationConstants::default();
        Self {
            target_fps: target_fps.unwrap_or(default.target_fps),
            sub_steps: sub_steps.unwrap_or(default.sub_steps),
            restitution: restitution.unwrap_or(default.restitution),
            min_leaf_size: min_leaf_size.unwrap_or(default.min_leaf_size),
            max_leaf_objects: max_leaf_objects.unwrap_or(default.max_leaf_objects),
            hit_impulse: hit_impulse.unwrap_or(default.hit_impulse),
            hit_angular_impulse: hit_angular_impulse.unwrap_or(default.hit_angular_impulse),
        }
    }

    /// The fixed simulation time step, independent of the variable frame time.
    pub fn fixed_time_step(&self) -> f64 {
        1.0 / (self.target_fps * self.sub_steps as f64)
    }
}
