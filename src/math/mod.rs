mod vector;
mod display;
mod angle;
mod aabb;

pub use vector::Vector;
pub use display::{DisplayFrame, DisplayTracker};
pub use angle::AngleRange;
pub use aabb::Aabb;

/// Resolved 2D value used by the collision and response math
pub type Vec2 = nalgebra::Vector2<f32>;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Converts degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Converts radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Wraps an angle in degrees into `[0, 360)`
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Smallest absolute difference between two angles in degrees, in `[0, 180]`
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = wrap_degrees(a - b);
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Clockwise angle in degrees from "up" (positive y) of a resolved value.
///
/// A zero value points up by convention.
pub fn direction_of(value: Vec2) -> f32 {
    if value.x == 0.0 {
        return if value.y >= 0.0 { 0.0 } else { 180.0 };
    }
    let angle = to_degrees((value.y / value.x).atan());
    if value.x >= 0.0 {
        90.0 - angle
    } else {
        270.0 - angle
    }
}

/// Unit value pointing along a clockwise-from-up angle in degrees
#[inline]
pub fn unit_from_direction(degrees: f32) -> Vec2 {
    let radians = to_radians(degrees);
    Vec2::new(radians.sin(), radians.cos())
}
