use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::math::{direction_of, DisplayFrame, Vec2};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A 2D value whose components may track the display.
///
/// Each axis resolves to
/// `constant + relative * extent + ratio * origin - baseline_weight * baseline`,
/// where `extent`, `origin` and `baseline` come from the [`DisplayFrame`] of
/// the current tick. A plain ratio term measures displacement from the
/// baseline origin latched at level start; an explicit reference folds
/// `-ratio * reference` into the constant instead. Keeping every term linear
/// means sums and differences of vectors with different references stay
/// exact, and nothing is cached between ticks.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector {
    pub constant_x: f32,
    pub constant_y: f32,
    pub relative_x: f32,
    pub relative_y: f32,
    pub ratio_x: f32,
    pub ratio_y: f32,
    pub baseline_x: f32,
    pub baseline_y: f32,
}

impl Vector {
    /// Creates a purely constant vector
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            constant_x: x,
            constant_y: y,
            ..Self::default()
        }
    }

    /// Creates a vector with all components set to zero
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a vector measured as a proportion of the display extent
    #[inline]
    pub fn relative(x: f32, y: f32) -> Self {
        Self::zero().with_relative(x, y)
    }

    /// Creates a constant vector from a resolved value
    #[inline]
    pub fn from_resolved(value: Vec2) -> Self {
        Self::new(value.x, value.y)
    }

    /// Adds a proportion of the display extent (can be negative)
    pub fn with_relative(mut self, x: f32, y: f32) -> Self {
        self.relative_x = x;
        self.relative_y = y;
        self
    }

    /// Adds a proportion of how far the display has moved since the level
    /// started
    pub fn with_ratio(mut self, x: f32, y: f32) -> Self {
        self.ratio_x = x;
        self.ratio_y = y;
        self.baseline_x = x;
        self.baseline_y = y;
        self
    }

    /// Measures the ratio terms from an explicit display origin instead of
    /// the latched baseline. Call after [`Vector::with_ratio`].
    pub fn with_reference(mut self, x: f32, y: f32) -> Self {
        self.constant_x -= self.baseline_x * x;
        self.constant_y -= self.baseline_y * y;
        self.baseline_x = 0.0;
        self.baseline_y = 0.0;
        self
    }

    /// Resolves the vector against the display frame of the current tick
    #[inline]
    pub fn resolve(&self, frame: &DisplayFrame) -> Vec2 {
        Vec2::new(self.x(frame), self.y(frame))
    }

    #[inline]
    pub fn x(&self, frame: &DisplayFrame) -> f32 {
        self.constant_x + self.relative_x * frame.extent.x + self.ratio_x * frame.origin.x
            - self.baseline_x * frame.baseline.x
    }

    #[inline]
    pub fn y(&self, frame: &DisplayFrame) -> f32 {
        self.constant_y + self.relative_y * frame.extent.y + self.ratio_y * frame.origin.y
            - self.baseline_y * frame.baseline.y
    }

    /// Shifts only the constant term so the resolved x equals `value`
    pub fn update_constant_x(&mut self, value: f32, frame: &DisplayFrame) {
        self.constant_x += value - self.x(frame);
    }

    /// Shifts only the constant term so the resolved y equals `value`
    pub fn update_constant_y(&mut self, value: f32, frame: &DisplayFrame) {
        self.constant_y += value - self.y(frame);
    }

    /// Length of the resolved value
    #[inline]
    pub fn magnitude(&self, frame: &DisplayFrame) -> f32 {
        self.resolve(frame).norm()
    }

    /// Clockwise angle in degrees from up; zero vectors point up
    #[inline]
    pub fn direction(&self, frame: &DisplayFrame) -> f32 {
        direction_of(self.resolve(frame))
    }

    /// Returns true if the resolved value has zero length
    #[inline]
    pub fn is_zero(&self, frame: &DisplayFrame) -> bool {
        self.resolve(frame) == Vec2::zeros()
    }

    /// Returns true if no term depends on the display
    pub fn is_fixed(&self) -> bool {
        self.relative_x == 0.0
            && self.relative_y == 0.0
            && self.ratio_x == 0.0
            && self.ratio_y == 0.0
            && self.baseline_x == 0.0
            && self.baseline_y == 0.0
    }

    /// Full copy that keeps tracking the display
    #[inline]
    pub fn copy(&self) -> Self {
        *self
    }

    /// Copy frozen at the current resolved value; it no longer follows the
    /// display
    #[inline]
    pub fn fixed_copy(&self, frame: &DisplayFrame) -> Self {
        Self::from_resolved(self.resolve(frame))
    }

    /// Compares resolved components
    pub fn eq_resolved(&self, other: &Self, frame: &DisplayFrame) -> bool {
        self.resolve(frame) == other.resolve(frame)
    }

    /// Compares resolved magnitudes
    pub fn cmp_magnitude(&self, other: &Self, frame: &DisplayFrame) -> Option<Ordering> {
        self.magnitude(frame).partial_cmp(&other.magnitude(frame))
    }

    fn zip_with(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self {
            constant_x: f(self.constant_x, rhs.constant_x),
            constant_y: f(self.constant_y, rhs.constant_y),
            relative_x: f(self.relative_x, rhs.relative_x),
            relative_y: f(self.relative_y, rhs.relative_y),
            ratio_x: f(self.ratio_x, rhs.ratio_x),
            ratio_y: f(self.ratio_y, rhs.ratio_y),
            baseline_x: f(self.baseline_x, rhs.baseline_x),
            baseline_y: f(self.baseline_y, rhs.baseline_y),
        }
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            constant_x: f(self.constant_x),
            constant_y: f(self.constant_y),
            relative_x: f(self.relative_x),
            relative_y: f(self.relative_y),
            ratio_x: f(self.ratio_x),
            ratio_y: f(self.ratio_y),
            baseline_x: f(self.baseline_x),
            baseline_y: f(self.baseline_y),
        }
    }
}

impl From<Vec2> for Vector {
    #[inline]
    fn from(value: Vec2) -> Self {
        Self::from_resolved(value)
    }
}

impl From<[f32; 2]> for Vector {
    #[inline]
    fn from(array: [f32; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "({}, {})", self.constant_x, self.constant_y)
        } else {
            write!(
                f,
                "({} + {}w + {}dx, {} + {}h + {}dy)",
                self.constant_x, self.relative_x, self.ratio_x,
                self.constant_y, self.relative_y, self.ratio_y,
            )
        }
    }
}

impl Add for Vector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Vector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul<f32> for Vector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|a| a * rhs)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self.map(|a| a / rhs)
    }
}

impl Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Vector> for Vector {
    fn sum<I: Iterator<Item = &'a Vector>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + *v)
    }
}
