use std::collections::HashSet;

use tracing::{debug, trace};

use crate::bodies::{Body, BodyType};
use crate::collision::{BodySnapshot, Contact, ContactDetector, Resolution};
use crate::core::{
    BodyHandle, BodyStorage, ContactEvent, EventQueue, SimulationConfig, Trigger, Triggers,
};
use crate::math::{DisplayFrame, DisplayTracker};
use crate::Result;

/// The box the bodies live in.
///
/// Owns every body in depth order and drives the tick: contacts for all
/// bodies are detected from the state before the tick, then each body is
/// updated in depth order. Two dynamic bodies collide with each other at
/// most once per tick, whichever of them updates first.
pub struct Scene {
    /// All bodies, ordered by depth then insertion
    bodies: BodyStorage<Body>,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Host display state used to resolve vectors
    display: DisplayTracker,

    /// Contacts resolved during the last tick
    events: EventQueue,

    /// Ticks run since the scene was created or cleared
    tick_count: u64,
}

impl Scene {
    /// Creates an empty scene with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates an empty scene with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            config,
            display: DisplayTracker::new(),
            events: EventQueue::new(),
            tick_count: 0,
        }
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Removes every body and forgets the display baseline
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.events.clear();
        self.display.reset_baseline();
        self.tick_count = 0;
    }

    /// Adds a body at its own depth and returns its handle
    pub fn add(&mut self, body: Body) -> BodyHandle {
        let z = body.get_z();
        let handle = self.bodies.insert(z, body);
        debug!(body = ?handle, z, "added body");
        handle
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.bodies.get_body_mut(handle)
    }

    /// Moves a body to another depth, after every body already there
    pub fn set_depth(&mut self, handle: BodyHandle, z: i32) -> Result<()> {
        self.bodies.set_depth(handle, z)?;
        self.bodies.get_body_mut(handle)?.set_z(z);
        Ok(())
    }

    /// Records the display size and origin for the coming tick. Must be
    /// called before a tick that resolves display-relative vectors.
    pub fn refresh_display(&mut self, width: f32, height: f32, x: f32, y: f32) -> DisplayFrame {
        self.display.refresh(width, height, x, y)
    }

    /// The display tracker
    pub fn display(&self) -> &DisplayTracker {
        &self.display
    }

    /// The display frame of the current tick
    pub fn frame(&self) -> DisplayFrame {
        *self.display.frame()
    }

    fn snapshots(&self, frame: &DisplayFrame) -> Vec<BodySnapshot> {
        self.bodies
            .iter()
            .map(|(handle, body)| BodySnapshot::capture(handle, body, frame))
            .collect()
    }

    /// Contacts the body would see if a tick ran now
    pub fn contacts_for(&self, handle: BodyHandle) -> Result<Vec<Contact>> {
        self.bodies.get_body(handle)?;

        let frame = self.frame();
        let detector = ContactDetector::from_config(&self.config, &frame);
        let snapshots = self.snapshots(&frame);
        Ok(snapshots
            .iter()
            .find(|snapshot| snapshot.handle() == handle)
            .map(|subject| detector.detect(subject, &snapshots))
            .unwrap_or_default())
    }

    /// Advances every body by one tick
    pub fn tick(&mut self) {
        self.events.clear();

        let frame = self.frame();
        let detector = ContactDetector::from_config(&self.config, &frame);
        let snapshots = self.snapshots(&frame);

        // Detection reads only the state from before the tick
        let pending: Vec<(BodyHandle, Vec<Contact>)> = snapshots
            .iter()
            .map(|subject| {
                let contacts = if subject.state.body_type == BodyType::Dynamic {
                    detector.detect(subject, &snapshots)
                } else {
                    Vec::new()
                };
                (subject.handle(), contacts)
            })
            .collect();

        // A pair of dynamic bodies exchanges momentum at most once per tick
        let mut exchanged: HashSet<(BodyHandle, BodyHandle)> = HashSet::new();

        for (handle, mut contacts) in pending {
            contacts.retain(|contact| {
                contact
                    .neighbor
                    .handle()
                    .map_or(true, |neighbor| !exchanged.contains(&pair_key(handle, neighbor)))
            });

            let Some(body) = self.bodies.get_mut(handle) else {
                continue;
            };
            let Some(resolution) = body.update(&contacts, &frame) else {
                continue;
            };

            if let Resolution::Elastic { neighbor, neighbor_velocity, .. } = resolution {
                exchanged.insert(pair_key(handle, neighbor));
                if let Some(other) = self.bodies.get_mut(neighbor) {
                    let mut velocity = other.get_velocity();
                    velocity.update_constant_x(neighbor_velocity.x, &frame);
                    velocity.update_constant_y(neighbor_velocity.y, &frame);
                    other.set_velocity(velocity);
                }
            }

            self.events
                .add_contact_event(ContactEvent::from_resolution(handle, &resolution, self.tick_count));
        }

        trace!(tick = self.tick_count, contacts = self.events.len(), "tick complete");
        self.tick_count += 1;
    }

    /// Runs `ticks` ticks without refreshing the display
    pub fn step(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Bodies in depth order, for the presentation layer
    pub fn bodies_in_z_order(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies.iter()
    }

    /// Processes triggers in order. Force triggers queue a one-tick force on
    /// their target; custom triggers are returned to the caller.
    pub fn fire<'t>(&mut self, triggers: &'t Triggers) -> Result<Vec<&'t Trigger>> {
        let mut custom = Vec::new();
        for trigger in triggers.iter() {
            match trigger {
                Trigger::Force { target, force } => {
                    self.bodies.get_body_mut(*target)?.add_transient_force(*force);
                    debug!(body = ?target, "force trigger");
                }
                Trigger::Custom { .. } => custom.push(trigger),
            }
        }
        Ok(custom)
    }

    /// Returns a reference to the contact events of the last tick
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the number of bodies in the scene
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn pair_key(a: BodyHandle, b: BodyHandle) -> (BodyHandle, BodyHandle) {
    (a.min(b), a.max(b))
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
