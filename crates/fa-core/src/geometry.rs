//! Planar and spatial vector helpers.
//!
//! Horizontal positions are `(x, y)`; absolute positions add `z`, positive up,
//! with the free surface at `z = 0`.

use nalgebra::{Vector2, Vector3};

pub type Vec2 = Vector2<f64>;
pub type Vec3 = Vector3<f64>;

/// Unit vector pointing along `heading` (radians, counter-clockwise from +x).
pub fn heading_unit(heading: f64) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Append a depth to a horizontal position.
pub fn with_depth(xy: Vec2, z: f64) -> Vec3 {
    Vec3::new(xy.x, xy.y, z)
}

/// Horizontal part of an absolute position.
pub fn horizontal(r: &Vec3) -> Vec2 {
    Vec2::new(r.x, r.y)
}
