use std::collections::HashMap;

use crate::core::BodyHandle;
use crate::math::Vector;

/// A single action fired by a sensor such as a button or lever
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Queues a one-tick force on the target body
    Force { target: BodyHandle, force: Vector },

    /// No built-in action; handed back to the caller by
    /// [`crate::core::Scene::fire`]
    Custom {
        identifier: u32,
        options: HashMap<String, String>,
    },
}

impl Trigger {
    pub fn force(target: BodyHandle, force: Vector) -> Self {
        Trigger::Force { target, force }
    }

    pub fn custom(identifier: u32) -> Self {
        Trigger::Custom {
            identifier,
            options: HashMap::new(),
        }
    }

    /// Adds an option to a custom trigger. Does nothing for other triggers.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Trigger::Custom { options, .. } = &mut self {
            options.insert(key.into(), value.into());
        }
        self
    }
}

/// An ordered list of triggers, processed front to back
#[derive(Debug, Clone, Default)]
pub struct Triggers {
    triggers: Vec<Trigger>,
}

impl Triggers {
    pub fn new(triggers: Vec<Trigger>) -> Self {
        Self { triggers }
    }

    pub fn push(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }
}

impl FromIterator<Trigger> for Triggers {
    fn from_iter<I: IntoIterator<Item = Trigger>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
