use crate::math::wrap_degrees;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A clockwise sector of directions, in degrees from up.
///
/// When `min` is greater than `max` the sector wraps through 360/0, so
/// `315..=45` covers the directions around straight up. Both bounds are
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AngleRange {
    pub min: f32,
    pub max: f32,
}

impl AngleRange {
    /// Creates a sector from two bounds, both wrapped into `[0, 360)`
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min: wrap_degrees(min),
            max: wrap_degrees(max),
        }
    }

    /// A sector `half_width` degrees either side of `center`
    pub fn around(center: f32, half_width: f32) -> Self {
        if half_width >= 180.0 {
            return Self::full();
        }
        Self::new(center - half_width, center + half_width)
    }

    /// Every direction
    pub fn full() -> Self {
        Self { min: 0.0, max: 360.0 }
    }

    /// Returns true if the sector spans the whole circle
    pub fn is_full(&self) -> bool {
        self.min == 0.0 && self.max >= 360.0
    }

    /// Returns true if the sector wraps through 360/0
    pub fn wraps(&self) -> bool {
        self.min > self.max
    }

    /// Returns true if `angle` lies inside the sector
    pub fn contains(&self, angle: f32) -> bool {
        if self.is_full() {
            return true;
        }
        let angle = wrap_degrees(angle);
        if self.wraps() {
            angle >= self.min || angle <= self.max
        } else {
            self.min <= angle && angle <= self.max
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sector() {
        let sector = AngleRange::new(0.0, 180.0);
        assert!(sector.contains(0.0));
        assert!(sector.contains(90.0));
        assert!(sector.contains(180.0));
        assert!(!sector.contains(181.0));
        assert!(!sector.wraps());
    }

    #[test]
    fn wrapping_sector() {
        let sector = AngleRange::around(0.0, 90.0);
        assert_eq!(sector.min, 270.0);
        assert_eq!(sector.max, 90.0);
        assert!(sector.wraps());
        assert!(sector.contains(0.0));
        assert!(sector.contains(300.0));
        assert!(sector.contains(90.0));
        assert!(!sector.contains(180.0));
        assert!(sector.contains(-10.0));
    }

    #[test]
    fn full_sector() {
        let sector = AngleRange::around(45.0, 180.0);
        assert!(sector.is_full());
        assert!(sector.contains(123.0));
    }
}
