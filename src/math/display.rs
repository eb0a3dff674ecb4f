use crate::math::Vec2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Display state used to resolve [`crate::math::Vector`] values for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DisplayFrame {
    /// Width and height of the display area
    pub extent: Vec2,

    /// Current position of the display area
    pub origin: Vec2,

    /// Position of the display area when the level started
    pub baseline: Vec2,
}

impl DisplayFrame {
    /// Creates a frame whose origin has not moved since the level started
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            extent: Vec2::new(width, height),
            origin: Vec2::zeros(),
            baseline: Vec2::zeros(),
        }
    }

    /// Sets the current and baseline origins
    pub fn with_origin(mut self, origin: Vec2, baseline: Vec2) -> Self {
        self.origin = origin;
        self.baseline = baseline;
        self
    }

    /// How far the display has moved since the level started
    pub fn displacement(&self) -> Vec2 {
        self.origin - self.baseline
    }
}

impl Default for DisplayFrame {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Tracks the host display between ticks.
///
/// The first refresh latches the baseline origin; later refreshes only move
/// the current origin and extent.
#[derive(Debug, Clone, Default)]
pub struct DisplayTracker {
    baseline: Option<Vec2>,
    current: DisplayFrame,
    previous: Option<DisplayFrame>,
}

impl DisplayTracker {
    /// Creates a tracker that has not seen the display yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the display size and position for the coming tick
    pub fn refresh(&mut self, width: f32, height: f32, x: f32, y: f32) -> DisplayFrame {
        let origin = Vec2::new(x, y);
        let first = self.baseline.is_none();
        let baseline = *self.baseline.get_or_insert(origin);

        self.previous = if first { None } else { Some(self.current) };
        self.current = DisplayFrame {
            extent: Vec2::new(width, height),
            origin,
            baseline,
        };
        self.current
    }

    /// Forgets the baseline so the next refresh latches a new one
    pub fn reset_baseline(&mut self) {
        self.baseline = None;
        self.previous = None;
    }

    /// The frame recorded by the last refresh
    pub fn frame(&self) -> &DisplayFrame {
        &self.current
    }

    /// Returns true if the display moved since the previous refresh
    pub fn was_moved(&self) -> bool {
        self.previous
            .map_or(false, |previous| previous.origin != self.current.origin)
    }

    /// Returns true if the display was resized since the previous refresh
    pub fn was_resized(&self) -> bool {
        self.previous
            .map_or(false, |previous| previous.extent != self.current.extent)
    }

    /// Returns true if the display moved or was resized
    pub fn changed(&self) -> bool {
        self.was_moved() || self.was_resized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_refresh_latches_baseline() {
        let mut tracker = DisplayTracker::new();
        let first = tracker.refresh(80.0, 24.0, 5.0, 7.0);
        assert_eq!(first.baseline, Vec2::new(5.0, 7.0));
        assert_eq!(first.displacement(), Vec2::zeros());

        let second = tracker.refresh(100.0, 30.0, 8.0, 3.0);
        assert_eq!(second.baseline, Vec2::new(5.0, 7.0));
        assert_eq!(second.displacement(), Vec2::new(3.0, -4.0));
        assert!(tracker.was_moved());
        assert!(tracker.was_resized());
    }

    #[test]
    fn reset_latches_again() {
        let mut tracker = DisplayTracker::new();
        tracker.refresh(80.0, 24.0, 5.0, 7.0);
        tracker.reset_baseline();
        let frame = tracker.refresh(80.0, 24.0, 1.0, 1.0);
        assert_eq!(frame.baseline, Vec2::new(1.0, 1.0));
        assert!(!tracker.changed());
    }
}
