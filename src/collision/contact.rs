use crate::bodies::BodyType;
use crate::collision::CollisionGroups;
use crate::core::BodyHandle;
use crate::math::{unit_from_direction, AngleRange, Vec2};

/// State of a neighbouring body captured before any body moved this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborState {
    pub handle: BodyHandle,
    pub body_type: BodyType,
    pub mass: f32,
    pub velocity: Vec2,
    pub friction: f32,
    pub collision_groups: CollisionGroups,
}

/// What a contact touches
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Neighbor {
    /// Another body in the scene
    Body(NeighborState),

    /// The arena boundary. Always immovable and never filtered by groups
    Edge { friction: f32 },
}

impl Neighbor {
    /// Handle of the neighbouring body, `None` for the arena edge
    pub fn handle(&self) -> Option<BodyHandle> {
        match self {
            Neighbor::Body(state) => Some(state.handle),
            Neighbor::Edge { .. } => None,
        }
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Neighbor::Edge { .. })
    }

    pub fn friction(&self) -> f32 {
        match self {
            Neighbor::Body(state) => state.friction,
            Neighbor::Edge { friction } => *friction,
        }
    }

    /// Returns true if a collision with this neighbour should pass the group
    /// filter for a body in `groups`
    pub fn collides_with(&self, groups: &CollisionGroups) -> bool {
        match self {
            Neighbor::Body(state) => state.collision_groups.shares_group(groups),
            Neighbor::Edge { .. } => true,
        }
    }
}

/// A potential collision found for one body during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Directions of travel that head into the neighbour
    pub sector: AngleRange,

    pub neighbor: Neighbor,

    /// Direction from the body into the touched face, in degrees clockwise
    /// from up
    pub plane_normal: f32,

    /// Overlap depth along the plane normal
    pub penetration: f32,

    /// Coincident or fully contained bodies. Resolved as an immovable
    /// surface without positional correction
    pub degenerate: bool,

    /// The bodies only touch within the contact margin
    pub resting: bool,
}

impl Contact {
    /// Contact across an axis-aligned face
    pub fn across_face(neighbor: Neighbor, plane_normal: f32, penetration: f32) -> Self {
        Self {
            sector: AngleRange::around(plane_normal, 90.0),
            neighbor,
            plane_normal,
            penetration: penetration.max(0.0),
            degenerate: false,
            resting: false,
        }
    }

    /// Marks a contact whose bodies touch without overlapping
    pub fn with_resting(mut self, resting: bool) -> Self {
        self.resting = resting;
        self
    }

    /// Contact for overlapping bodies with no usable face
    pub fn degenerate(neighbor: Neighbor, plane_normal: f32) -> Self {
        Self {
            sector: AngleRange::full(),
            neighbor,
            plane_normal,
            penetration: 0.0,
            degenerate: true,
            resting: false,
        }
    }

    #[inline]
    pub fn min_angle(&self) -> f32 {
        self.sector.min
    }

    #[inline]
    pub fn max_angle(&self) -> f32 {
        self.sector.max
    }

    /// Unit value pointing into the touched face
    #[inline]
    pub fn normal(&self) -> Vec2 {
        unit_from_direction(self.plane_normal)
    }

    /// Returns true if the body should treat the neighbour as an immovable
    /// surface
    pub fn is_static(&self) -> bool {
        self.degenerate
            || match &self.neighbor {
                Neighbor::Body(state) => state.body_type.is_immovable(),
                Neighbor::Edge { .. } => true,
            }
    }

    /// Returns true if this contact applies to a body travelling in
    /// `direction` with collision `groups`
    pub fn accepts(&self, direction: f32, groups: &CollisionGroups) -> bool {
        self.sector.contains(direction) && self.neighbor.collides_with(groups)
    }

    /// Speed at which a body moving with `velocity` closes on the touched
    /// face. Negative when it moves away.
    pub fn closing_speed(&self, velocity: Vec2) -> f32 {
        let neighbor_velocity = match &self.neighbor {
            Neighbor::Body(state) => state.velocity,
            Neighbor::Edge { .. } => Vec2::zeros(),
        };
        (velocity - neighbor_velocity).dot(&self.normal())
    }

    /// Returns true if the contact takes part in this tick. A resting
    /// contact only does once the body closes on it or already rests on a
    /// surface.
    pub fn engages(&self, velocity: Vec2, settled: bool) -> bool {
        !self.resting || settled || self.closing_speed(velocity) > 0.0
    }
}

/// How a body's update resolved its selected contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Stopped against an immovable surface; `neighbor` is `None` for the
    /// arena edge
    Static { neighbor: Option<BodyHandle> },

    /// Exchanged momentum with a dynamic body whose new velocity must be
    /// written back
    Elastic {
        neighbor: BodyHandle,
        neighbor_velocity: Vec2,
        merged: bool,
    },
}
