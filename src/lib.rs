pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod integration;
pub mod render;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, FrameClock, Level, Scene, SimulationConfig, Trigger, Triggers};
pub use crate::bodies::{Appearance, Body, BodyBuilder, BodyType, ColorPair, Material, Shape};
pub use crate::collision::CollisionGroups;
pub use crate::math::{DisplayFrame, Vec2, Vector};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Invalid collision group {0}, groups must be below 64")]
        InvalidCollisionGroup(u32),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
