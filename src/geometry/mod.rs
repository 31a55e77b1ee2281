//! 2D primitives: points, angles and lines.

pub mod angle;
pub mod line;
pub mod point;

pub use angle::{corner_angle, degrees, shorter_angular_distance, wrap};
pub use line::Line;
pub use point::{Point, PointExt, lerp};
