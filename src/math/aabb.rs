use crate::math::Vec2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a body for one tick, in display units.
///
/// `min` is the top-left corner; y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner of the AABB
    pub min: Vec2,

    /// Maximum corner of the AABB
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new AABB from minimum and maximum points
    #[inline]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from a corner and a size. Negative sizes extend the
    /// box the other way.
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        let far = corner + size;
        Self {
            min: corner.inf(&far),
            max: corner.sup(&far),
        }
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the extents of the AABB in each dimension
    #[inline]
    pub fn extents(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    /// Returns true if `value` lies in the vertical span, widened by `margin`
    #[inline]
    pub fn spans_y(&self, value: f32, margin: f32) -> bool {
        value >= self.min.y - margin && value <= self.max.y + margin
    }

    /// Returns true if `value` lies in the horizontal span, widened by `margin`
    #[inline]
    pub fn spans_x(&self, value: f32, margin: f32) -> bool {
        value >= self.min.x - margin && value <= self.max.x + margin
    }

    /// Returns true if the horizontal spans overlap, touching included
    #[inline]
    pub fn overlaps_x(&self, other: &Self, margin: f32) -> bool {
        self.min.x <= other.max.x + margin && self.max.x >= other.min.x - margin
    }

    /// Returns true if the vertical spans overlap, touching included
    #[inline]
    pub fn overlaps_y(&self, other: &Self, margin: f32) -> bool {
        self.min.y <= other.max.y + margin && self.max.y >= other.min.y - margin
    }

    /// Checks if this AABB intersects with another AABB
    #[inline]
    pub fn intersects(&self, other: &Self, margin: f32) -> bool {
        self.overlaps_x(other, margin) && self.overlaps_y(other, margin)
    }

    /// Checks if this AABB fully contains another AABB
    #[inline]
    pub fn contains_aabb(&self, other: &Self) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x &&
        self.min.y <= other.min.y && self.max.y >= other.max.y
    }

    /// Moves the AABB by an offset
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_size_is_normalised() {
        let aabb = Aabb::from_corner_size(Vec2::new(4.0, 4.0), Vec2::new(-2.0, 3.0));
        assert_eq!(aabb.min, Vec2::new(2.0, 4.0));
        assert_eq!(aabb.max, Vec2::new(4.0, 7.0));
        assert_eq!(aabb.center(), Vec2::new(3.0, 5.5));
    }

    #[test]
    fn touching_counts_as_overlap() {
        let a = Aabb::from_corner_size(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Aabb::from_corner_size(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0));
        let c = Aabb::from_corner_size(Vec2::new(1.5, 0.0), Vec2::new(1.0, 1.0));
        assert!(a.intersects(&b, 0.0));
        assert!(!a.intersects(&c, 0.0));
        assert!(a.intersects(&c, 0.5));
    }
}
