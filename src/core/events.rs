use std::collections::VecDeque;

use crate::collision::Resolution;
use crate::core::BodyHandle;

/// How a contact was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEventType {
    /// A body stopped against an immovable body
    Static,

    /// A body stopped against the arena edge
    Edge,

    /// Two dynamic bodies exchanged momentum
    Elastic,

    /// Two dynamic bodies had no real collision solution and merged velocities
    Merged,
}

/// A contact resolved during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    /// The type of contact event
    pub event_type: ContactEventType,

    /// The body whose update resolved the contact
    pub body: BodyHandle,

    /// The other body, `None` for the arena edge
    pub neighbor: Option<BodyHandle>,

    /// Tick the contact was resolved in
    pub tick: u64,
}

impl ContactEvent {
    /// Describes a body's resolution as an event
    pub fn from_resolution(body: BodyHandle, resolution: &Resolution, tick: u64) -> Self {
        let (event_type, neighbor) = match *resolution {
            Resolution::Static { neighbor: None } => (ContactEventType::Edge, None),
            Resolution::Static { neighbor } => (ContactEventType::Static, neighbor),
            Resolution::Elastic { neighbor, merged: false, .. } => (ContactEventType::Elastic, Some(neighbor)),
            Resolution::Elastic { neighbor, merged: true, .. } => (ContactEventType::Merged, Some(neighbor)),
        };
        Self { event_type, body, neighbor, tick }
    }

    /// Returns true if the event involves the given body on either side
    pub fn involves(&self, handle: BodyHandle) -> bool {
        self.body == handle || self.neighbor == Some(handle)
    }
}

/// A queue of contact events, cleared at the start of every tick
#[derive(Debug, Default)]
pub struct EventQueue {
    contact_events: VecDeque<ContactEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            contact_events: VecDeque::new(),
        }
    }

    /// Adds a contact event to the queue
    pub fn add_contact_event(&mut self, event: ContactEvent) {
        self.contact_events.push_back(event);
    }

    /// Gets the next contact event from the queue
    pub fn next_contact_event(&mut self) -> Option<ContactEvent> {
        self.contact_events.pop_front()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.contact_events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contact_events.len()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.contact_events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactEvent> {
        self.contact_events.iter()
    }

    /// Gets all contact events of a specific type
    pub fn get_contact_events_of_type(&self, event_type: ContactEventType) -> Vec<&ContactEvent> {
        self.contact_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all contact events involving a specific body
    pub fn get_contact_events_for_body(&self, body: BodyHandle) -> Vec<&ContactEvent> {
        self.contact_events
            .iter()
            .filter(|e| e.involves(body))
            .collect()
    }
}
