mod entity;
mod bounds;
mod body;
mod hull;
mod ray;

pub use entity::*;
pub use bounds::*;
pub use body::*;
pub use hull::*;
pub use ray::*;
