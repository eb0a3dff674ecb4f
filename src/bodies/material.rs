use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Surface properties of a body
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Fraction of kinetic energy kept by a collision this body initiates, 0-1
    pub elasticity: f32,

    /// Coefficient of friction, 0-1. Multiplied with the other surface's
    /// coefficient on contact
    pub friction: f32,
}

impl Material {
    /// Creates a new material with the specified properties
    pub fn new(elasticity: f32, friction: f32) -> Self {
        Self { elasticity, friction }
    }

    /// Creates a material for ice (low friction, medium elasticity)
    pub fn ice() -> Self {
        Self::new(0.4, 0.05)
    }

    /// Creates a material for rubber (high friction, high elasticity)
    pub fn rubber() -> Self {
        Self::new(0.8, 0.8)
    }

    /// Creates a material for wood (medium friction, low elasticity)
    pub fn wood() -> Self {
        Self::new(0.2, 0.6)
    }

    /// Creates a material for stone (high friction, no bounce)
    pub fn stone() -> Self {
        Self::new(0.0, 0.9)
    }

    /// Checks both coefficients are finite and inside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("elasticity", self.elasticity), ("friction", self.friction)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            elasticity: 0.0,
            friction: 0.0,
        }
    }
}
