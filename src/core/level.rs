use tracing::debug;

use crate::bodies::BodyBuilder;
use crate::core::{Scene, SimulationConfig};
use crate::Result;

/// A named list of body configurations that assembles into a [`Scene`]
#[derive(Debug, Clone, Default)]
pub struct Level {
    name: String,
    config: SimulationConfig,
    bodies: Vec<BodyBuilder>,
}

impl Level {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a body configuration
    pub fn with_body(mut self, body: BodyBuilder) -> Self {
        self.bodies.push(body);
        self
    }

    /// Adds several body configurations, such as a game zone
    pub fn with_bodies(mut self, bodies: impl IntoIterator<Item = BodyBuilder>) -> Self {
        self.bodies.extend(bodies);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Validates every body and builds the scene. Fails on the first body
    /// that violates a precondition; nothing is defaulted.
    pub fn build(&self) -> Result<Scene> {
        let mut scene = Scene::with_config(self.config.clone());
        for builder in &self.bodies {
            scene.add(builder.clone().build()?);
        }
        debug!(level = %self.name, bodies = scene.len(), "level built");
        Ok(scene)
    }
}
