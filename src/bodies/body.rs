use tracing::debug;

use crate::bodies::{Appearance, BodyType, Material, Shape};
use crate::collision::response::{resolve_elastic, resolve_static};
use crate::collision::{CollisionGroups, Contact, Neighbor, Resolution};
use crate::error::PhysicsError;
use crate::integration::integrate;
use crate::math::{direction_of, Aabb, DisplayFrame, Vec2, Vector};
use crate::Result;

/// A rigid, non-rotating rectangle in the arena.
///
/// Bodies are assembled once through [`crate::bodies::BodyBuilder`] and then
/// advanced one tick at a time by [`Body::update`].
#[derive(Debug, Clone)]
pub struct Body {
    /// Top-left corner
    position: Vector,

    /// Displacement per tick
    velocity: Vector,

    size: Vector,

    /// Degrees clockwise from up. Only the presentation layer reads it
    orientation: f32,

    mass: f32,

    material: Material,

    body_type: BodyType,

    collision_groups: CollisionGroups,

    /// Depth used to order bodies in the scene
    z: i32,

    /// Acceleration applied every tick, scaled by mass into a weight
    gravity: Vector,

    /// Forces applied on every tick until removed
    standing_forces: Vec<Vector>,

    /// Forces acting during the current tick, rebuilt by every update
    transient_forces: Vec<Vector>,

    /// One-tick forces waiting for the next update
    queued_forces: Vec<Vector>,

    shape: Shape,

    appearance: Appearance,

    /// Whether the last update stopped against an immovable surface
    settled: bool,
}

impl Body {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        position: Vector,
        velocity: Vector,
        size: Vector,
        orientation: f32,
        mass: f32,
        material: Material,
        body_type: BodyType,
        collision_groups: CollisionGroups,
        z: i32,
        gravity: Vector,
        standing_forces: Vec<Vector>,
        queued_forces: Vec<Vector>,
        shape: Shape,
        appearance: Appearance,
    ) -> Self {
        Self {
            position,
            velocity,
            size,
            orientation,
            mass,
            material,
            body_type,
            collision_groups,
            z,
            gravity,
            standing_forces,
            transient_forces: Vec::new(),
            queued_forces,
            shape,
            appearance,
            settled: false,
        }
    }

    /// Returns the body's position (top-left corner)
    pub fn get_position(&self) -> Vector {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    /// Returns the body's velocity
    pub fn get_velocity(&self) -> Vector {
        self.velocity
    }

    /// Sets the body's velocity
    pub fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }

    /// Returns the body's size
    pub fn get_size(&self) -> Vector {
        self.size
    }

    /// Sets the body's size
    pub fn set_size(&mut self, size: Vector) {
        self.size = size;
    }

    /// Returns the orientation in degrees clockwise from up
    pub fn get_orientation(&self) -> f32 {
        self.orientation
    }

    /// Sets the orientation in degrees clockwise from up
    pub fn set_orientation(&mut self, orientation: f32) {
        self.orientation = orientation;
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Sets the body's mass, which must be finite and positive
    pub fn set_mass(&mut self, mass: f32) -> Result<()> {
        validate_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Returns the body's material
    pub fn get_material(&self) -> &Material {
        &self.material
    }

    /// Sets the body's material
    pub fn set_material(&mut self, material: Material) -> Result<()> {
        material.validate()?;
        self.material = material;
        Ok(())
    }

    /// Returns the body type
    pub fn get_body_type(&self) -> BodyType {
        self.body_type
    }

    /// Returns true if the body never moves
    pub fn is_static(&self) -> bool {
        self.body_type == BodyType::Static
    }

    pub fn get_collision_groups(&self) -> CollisionGroups {
        self.collision_groups
    }

    pub fn set_collision_groups(&mut self, groups: CollisionGroups) {
        self.collision_groups = groups;
    }

    /// Returns the depth of the body
    pub fn get_z(&self) -> i32 {
        self.z
    }

    pub(crate) fn set_z(&mut self, z: i32) {
        self.z = z;
    }

    pub fn get_gravity(&self) -> Vector {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vector) {
        self.gravity = gravity;
    }

    pub fn get_shape(&self) -> Shape {
        self.shape
    }

    pub fn get_appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    /// Forces applied on every tick
    pub fn get_standing_forces(&self) -> &[Vector] {
        &self.standing_forces
    }

    /// Adds a force applied on every tick until removed
    pub fn add_standing_force(&mut self, force: Vector) {
        self.standing_forces.push(force);
    }

    /// Removes every standing force
    pub fn clear_standing_forces(&mut self) {
        self.standing_forces.clear();
    }

    /// Queues a force for the next tick only
    pub fn add_transient_force(&mut self, force: Vector) {
        self.queued_forces.push(force);
    }

    /// Forces that acted during the last update
    pub fn get_transient_forces(&self) -> &[Vector] {
        &self.transient_forces
    }

    /// Bounds of the body for the given display frame
    pub fn bounds(&self, frame: &DisplayFrame) -> Aabb {
        Aabb::from_corner_size(self.position.resolve(frame), self.size.resolve(frame))
    }

    /// Sum of the transient forces, resolved
    pub fn resultant(&self, frame: &DisplayFrame) -> Vec2 {
        self.transient_forces
            .iter()
            .map(|force| force.resolve(frame))
            .sum()
    }

    /// Returns true if the body came to rest against an immovable surface
    /// during its last update
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Kinetic energy of the body for the given display frame
    pub fn kinetic_energy(&self, frame: &DisplayFrame) -> f32 {
        0.5 * self.mass * self.velocity.resolve(frame).norm_squared()
    }

    /// Advances the body by one tick.
    ///
    /// `contacts` must have been detected from the positions every body had
    /// before this tick started. At most one contact is resolved: the first
    /// one whose sector contains the current direction of travel and whose
    /// neighbour shares a collision group. A contact that only touches is
    /// skipped until the body closes on it, unless the body already rests. When the neighbour is another
    /// dynamic body the returned resolution carries the velocity the caller
    /// must write back to it.
    pub fn update(&mut self, contacts: &[Contact], frame: &DisplayFrame) -> Option<Resolution> {
        match self.body_type {
            BodyType::Static => {
                self.transient_forces.clear();
                self.queued_forces.clear();
                return None;
            }
            BodyType::Kinematic => {
                self.transient_forces.clear();
                self.queued_forces.clear();
                self.position += self.velocity;
                return None;
            }
            BodyType::Dynamic => {}
        }

        self.transient_forces.clear();
        self.transient_forces.extend_from_slice(&self.standing_forces);
        self.transient_forces.append(&mut self.queued_forces);
        self.transient_forces.push(self.gravity * self.mass);

        let velocity = self.velocity.resolve(frame);
        let direction = direction_of(velocity);
        let mut correction = Vec2::zeros();

        let resolution = match self.select_contact(contacts, velocity, direction) {
            Some(contact) if contact.is_static() => {
                let response = resolve_static(
                    self.mass,
                    velocity,
                    self.resultant(frame),
                    contact.normal(),
                    self.material.friction * contact.neighbor.friction(),
                    contact.penetration,
                );
                self.transient_forces
                    .extend(response.forces().into_iter().map(Vector::from_resolved));
                if !contact.degenerate {
                    correction = response.correction;
                }
                debug!(
                    neighbor = ?contact.neighbor.handle(),
                    edge = contact.neighbor.is_edge(),
                    normal = contact.plane_normal,
                    "static contact"
                );
                Some(Resolution::Static { neighbor: contact.neighbor.handle() })
            }
            Some(contact @ Contact { neighbor: Neighbor::Body(state), .. }) => {
                let outcome = resolve_elastic(
                    self.mass,
                    velocity,
                    state.mass,
                    state.velocity,
                    self.material.elasticity,
                    contact.normal(),
                );
                self.velocity.update_constant_x(outcome.velocity_a.x, frame);
                self.velocity.update_constant_y(outcome.velocity_a.y, frame);
                debug!(neighbor = ?state.handle, merged = outcome.merged, "elastic contact");
                Some(Resolution::Elastic {
                    neighbor: state.handle,
                    neighbor_velocity: outcome.velocity_b,
                    merged: outcome.merged,
                })
            }
            Some(_) | None => None,
        };
        self.settled = matches!(resolution, Some(Resolution::Static { .. }));

        let acceleration = self.transient_forces.iter().sum::<Vector>() / self.mass;
        integrate(&mut self.position, &mut self.velocity, acceleration);
        if correction != Vec2::zeros() {
            self.position += Vector::from_resolved(correction);
        }

        resolution
    }

    fn select_contact<'a>(
        &self,
        contacts: &'a [Contact],
        velocity: Vec2,
        direction: f32,
    ) -> Option<&'a Contact> {
        contacts.iter().find(|contact| {
            contact.accepts(direction, &self.collision_groups) && contact.engages(velocity, self.settled)
        })
    }
}

/// Mass must be finite and strictly positive
pub(crate) fn validate_mass(mass: f32) -> Result<()> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(PhysicsError::InvalidParameter(format!(
            "mass must be finite and positive, got {}",
            mass
        )));
    }
    Ok(())
}
