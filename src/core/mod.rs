pub mod config;
pub mod storage;
pub mod events;
mod scene;
mod triggers;
mod clock;
mod level;

pub use self::config::{Arena, SimulationConfig};
pub use self::storage::BodyStorage;
pub use self::events::{ContactEvent, ContactEventType, EventQueue};
pub use self::scene::Scene;
pub use self::triggers::{Trigger, Triggers};
pub use self::clock::FrameClock;
pub use self::level::Level;

/// A unique identifier for a body in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyHandle(pub(crate) u32);
