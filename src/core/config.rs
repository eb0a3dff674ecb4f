use crate::math::{Aabb, DisplayFrame, Vector};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Rectangle the bodies play in, as two corner vectors so it can follow the
/// display
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Arena {
    /// Top-left corner
    pub min: Vector,

    /// Bottom-right corner
    pub max: Vector,
}

impl Arena {
    pub fn new(min: Vector, max: Vector) -> Self {
        Self { min, max }
    }

    /// Resolves the arena for the current tick
    pub fn resolve(&self, frame: &DisplayFrame) -> Aabb {
        Aabb::from_corner_size(
            self.min.resolve(frame),
            self.max.resolve(frame) - self.min.resolve(frame),
        )
    }
}

impl Default for Arena {
    /// The whole display area
    fn default() -> Self {
        Self::new(Vector::zero(), Vector::relative(1.0, 1.0))
    }
}

/// Configuration parameters for the simulation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Bounds used for edge contacts
    pub arena: Arena,

    /// Whether the arena edges stop bodies
    pub solid_edges: bool,

    /// Friction coefficient of the arena edges, multiplied with the body's own
    pub edge_friction: f32,

    /// Gap between two surfaces still counted as touching
    pub contact_margin: f32,

    /// Whether static contacts push a body back out of the overlap
    pub position_correction: bool,

    /// Ticks per second for the frame clock
    pub tick_rate: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            solid_edges: true,
            edge_friction: 1.0,
            contact_margin: 0.01,
            position_correction: true,
            tick_rate: 20,
        }
    }
}
