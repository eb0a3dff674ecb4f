use tracing::trace;

use crate::bodies::Body;
use crate::collision::{Contact, Neighbor, NeighborState};
use crate::core::{BodyHandle, SimulationConfig};
use crate::math::{angular_distance, direction_of, Aabb, DisplayFrame, Vec2};

/// Face normals, in degrees clockwise from up (positive y, screen down)
const BELOW: f32 = 0.0;
const RIGHT: f32 = 90.0;
const ABOVE: f32 = 180.0;
const LEFT: f32 = 270.0;

/// Everything the detector needs to know about one body, captured before
/// any body moves in a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub bounds: Aabb,

    /// Direction of travel, degrees clockwise from up
    pub direction: f32,

    pub state: NeighborState,
}

impl BodySnapshot {
    /// Captures a body against the display frame of the current tick
    pub fn capture(handle: BodyHandle, body: &Body, frame: &DisplayFrame) -> Self {
        let velocity = body.get_velocity().resolve(frame);
        Self {
            bounds: body.bounds(frame),
            direction: direction_of(velocity),
            state: NeighborState {
                handle,
                body_type: body.get_body_type(),
                mass: body.get_mass(),
                velocity,
                friction: body.get_material().friction,
                collision_groups: body.get_collision_groups(),
            },
        }
    }

    #[inline]
    pub fn handle(&self) -> BodyHandle {
        self.state.handle
    }
}

/// Finds the contacts of a body against every other body and the arena.
///
/// Detection is exhaustively pairwise and only looks at bounding rectangles.
#[derive(Debug, Clone)]
pub struct ContactDetector {
    /// Gap still counted as touching
    margin: f32,

    /// Resolved arena rectangle, `None` when the edges are open
    arena: Option<Aabb>,

    edge_friction: f32,

    /// Whether contacts report their penetration for positional correction
    correct_positions: bool,
}

impl ContactDetector {
    /// Creates a detector with a contact margin and no arena edges
    pub fn new(margin: f32) -> Self {
        Self {
            margin: margin.max(0.0),
            arena: None,
            edge_friction: 1.0,
            correct_positions: true,
        }
    }

    /// Builds the detector for one tick from the scene configuration.
    ///
    /// An arena without area, such as the whole display before the display
    /// was first refreshed, has no edges.
    pub fn from_config(config: &SimulationConfig, frame: &DisplayFrame) -> Self {
        let mut detector = Self::new(config.contact_margin);
        detector.correct_positions = config.position_correction;

        let arena = config.arena.resolve(frame);
        let extents = arena.extents();
        if config.solid_edges && extents.x > 0.0 && extents.y > 0.0 {
            detector = detector.with_arena(arena, config.edge_friction);
        }
        detector
    }

    /// Closes the arena with solid edges along `bounds`
    pub fn with_arena(mut self, bounds: Aabb, friction: f32) -> Self {
        self.arena = Some(bounds);
        self.edge_friction = friction;
        self
    }

    pub fn get_margin(&self) -> f32 {
        self.margin
    }

    pub fn get_arena(&self) -> Option<&Aabb> {
        self.arena.as_ref()
    }

    /// Contacts of `subject` against `others` and the arena edges, best
    /// aligned with the subject's direction of travel first.
    ///
    /// The subject is skipped if it appears in `others`.
    pub fn detect(&self, subject: &BodySnapshot, others: &[BodySnapshot]) -> Vec<Contact> {
        let mut contacts: Vec<Contact> = others
            .iter()
            .filter(|other| other.handle() != subject.handle())
            .filter_map(|other| {
                self.detect_pair(&subject.bounds, &other.bounds, Neighbor::Body(other.state))
            })
            .collect();

        if let Some(arena) = &self.arena {
            contacts.extend(self.detect_edges(&subject.bounds, arena));
        }

        contacts.sort_by(|a, b| {
            let da = angular_distance(a.plane_normal, subject.direction);
            let db = angular_distance(b.plane_normal, subject.direction);
            da.total_cmp(&db)
        });

        trace!(body = ?subject.handle(), contacts = contacts.len(), "detected contacts");
        contacts
    }

    /// Contact between two rectangles, if they touch.
    ///
    /// Both axes are tested; the vertical test runs first and wins ties, and
    /// when both axes overlap the shallower overlap gives the face.
    pub fn detect_pair(&self, a: &Aabb, b: &Aabb, neighbor: Neighbor) -> Option<Contact> {
        let (ca, cb) = (a.center(), b.center());

        if ca == cb || a.contains_aabb(b) || b.contains_aabb(a) {
            return Some(Contact::degenerate(neighbor, direction_of(cb - ca)));
        }

        let vertical = self.vertical_face(a, b, ca, cb);
        let horizontal = self.horizontal_face(a, b, ca, cb);

        let (plane_normal, penetration) = match (vertical, horizontal) {
            (Some(v), Some(h)) => {
                if h.1 < v.1 { h } else { v }
            }
            (Some(face), None) | (None, Some(face)) => face,
            (None, None) => return None,
        };

        let resting = penetration <= self.margin;
        let penetration = if self.correct_positions { penetration } else { 0.0 };
        Some(Contact::across_face(neighbor, plane_normal, penetration).with_resting(resting))
    }

    fn vertical_face(&self, a: &Aabb, b: &Aabb, ca: Vec2, cb: Vec2) -> Option<(f32, f32)> {
        if !a.overlaps_x(b, self.margin) {
            return None;
        }
        if ca.y <= cb.y {
            a.spans_y(b.top(), self.margin)
                .then(|| (BELOW, a.bottom() - b.top()))
        } else {
            a.spans_y(b.bottom(), self.margin)
                .then(|| (ABOVE, b.bottom() - a.top()))
        }
    }

    fn horizontal_face(&self, a: &Aabb, b: &Aabb, ca: Vec2, cb: Vec2) -> Option<(f32, f32)> {
        if !a.overlaps_y(b, self.margin) {
            return None;
        }
        if ca.x <= cb.x {
            a.spans_x(b.left(), self.margin)
                .then(|| (RIGHT, a.right() - b.left()))
        } else {
            a.spans_x(b.right(), self.margin)
                .then(|| (LEFT, b.right() - a.left()))
        }
    }

    /// One edge contact per arena side the body touches or crosses
    fn detect_edges(&self, bounds: &Aabb, arena: &Aabb) -> Vec<Contact> {
        let margin = self.margin;
        let edge = Neighbor::Edge { friction: self.edge_friction };
        let penetration = |depth: f32| if self.correct_positions { depth } else { 0.0 };

        let sides = [
            (bounds.bottom() >= arena.bottom() - margin, BELOW, bounds.bottom() - arena.bottom()),
            (bounds.right() >= arena.right() - margin, RIGHT, bounds.right() - arena.right()),
            (bounds.top() <= arena.top() + margin, ABOVE, arena.top() - bounds.top()),
            (bounds.left() <= arena.left() + margin, LEFT, arena.left() - bounds.left()),
        ];

        sides
            .into_iter()
            .filter(|(touching, _, _)| *touching)
            .map(|(_, normal, depth)| {
                Contact::across_face(edge, normal, penetration(depth)).with_resting(depth <= margin)
            })
            .collect()
    }
}

impl Default for ContactDetector {
    fn default() -> Self {
        Self::new(SimulationConfig::default().contact_margin)
    }
}
