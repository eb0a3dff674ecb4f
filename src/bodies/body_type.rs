#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Type of body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum BodyType {
    /// Dynamic bodies are fully simulated (affected by forces, collisions, etc.)
    #[default]
    Dynamic,

    /// Kinematic bodies move at their set velocity and act as immovable
    /// surfaces for dynamic bodies
    Kinematic,

    /// Static bodies never move and skip the update entirely
    Static,
}

impl BodyType {
    /// Returns true if other bodies treat this one as an immovable surface
    pub fn is_immovable(self) -> bool {
        !matches!(self, BodyType::Dynamic)
    }
}
