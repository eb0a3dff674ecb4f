use crate::bodies::body::validate_mass;
use crate::bodies::{Appearance, Body, BodyType, ColorPair, Material, Shape};
use crate::collision::CollisionGroups;
use crate::error::PhysicsError;
use crate::math::Vector;
use crate::Result;

/// Assembles a [`Body`] and checks its preconditions.
///
/// Defaults: unit size and mass, group 1, gravity `(0, 0.03)` per tick,
/// no friction and no bounce.
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    position: Vector,
    velocity: Vector,
    size: Vector,
    orientation: f32,
    mass: f32,
    material: Material,
    body_type: BodyType,
    groups: Vec<u32>,
    z: i32,
    gravity: Vector,
    standing_forces: Vec<Vector>,
    initial_forces: Vec<Vector>,
    shape: Shape,
    appearance: Appearance,
}

impl Default for BodyBuilder {
    fn default() -> Self {
        Self {
            position: Vector::zero(),
            velocity: Vector::zero(),
            size: Vector::new(1.0, 1.0),
            orientation: 0.0,
            mass: 1.0,
            material: Material::default(),
            body_type: BodyType::Dynamic,
            groups: vec![1],
            z: 0,
            gravity: Vector::new(0.0, 0.03),
            standing_forces: Vec::new(),
            initial_forces: Vec::new(),
            shape: Shape::Rectangle,
            appearance: Appearance::Empty,
        }
    }
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dynamic body of unit mass that falls under gravity
    pub fn falling() -> Self {
        Self::new().mass(1.0)
    }

    /// A static body that never moves
    pub fn wall() -> Self {
        Self::new().body_type(BodyType::Static).gravity(Vector::zero())
    }

    /// A kinematic body that moves at its velocity and pushes others aside
    pub fn kinematic() -> Self {
        Self::new().body_type(BodyType::Kinematic).gravity(Vector::zero())
    }

    pub fn position(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    pub fn velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn size(mut self, size: Vector) -> Self {
        self.size = size;
        self
    }

    /// Degrees clockwise from up
    pub fn orientation(mut self, orientation: f32) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn elasticity(mut self, elasticity: f32) -> Self {
        self.material.elasticity = elasticity;
        self
    }

    pub fn friction(mut self, friction: f32) -> Self {
        self.material.friction = friction;
        self
    }

    pub fn body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    /// Collision group indices, each below 64
    pub fn groups(mut self, groups: &[u32]) -> Self {
        self.groups = groups.to_vec();
        self
    }

    pub fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    pub fn gravity(mut self, gravity: Vector) -> Self {
        self.gravity = gravity;
        self
    }

    /// Adds a force applied on every tick
    pub fn standing_force(mut self, force: Vector) -> Self {
        self.standing_forces.push(force);
        self
    }

    /// Adds a force applied on the first tick only
    pub fn initial_force(mut self, force: Vector) -> Self {
        self.initial_forces.push(force);
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Shorthand for a solid appearance
    pub fn solid(self, glyph: char, color: ColorPair) -> Self {
        self.appearance(Appearance::solid(glyph, color))
    }

    /// Validates the configuration and builds the body
    pub fn build(self) -> Result<Body> {
        validate_mass(self.mass)?;
        self.material.validate()?;
        if !self.orientation.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "orientation must be finite, got {}",
                self.orientation
            )));
        }
        let collision_groups = CollisionGroups::from_indices(&self.groups)?;

        let vectors = [self.position, self.velocity, self.size, self.gravity]
            .into_iter()
            .chain(self.standing_forces.iter().copied())
            .chain(self.initial_forces.iter().copied());
        for vector in vectors {
            check_finite(&vector)?;
        }

        Ok(Body::from_parts(
            self.position,
            self.velocity,
            self.size,
            self.orientation,
            self.mass,
            self.material,
            self.body_type,
            collision_groups,
            self.z,
            self.gravity,
            self.standing_forces,
            self.initial_forces,
            self.shape,
            self.appearance,
        ))
    }
}

fn check_finite(vector: &Vector) -> Result<()> {
    let terms = [
        vector.constant_x,
        vector.constant_y,
        vector.relative_x,
        vector.relative_y,
        vector.ratio_x,
        vector.ratio_y,
        vector.baseline_x,
        vector.baseline_y,
    ];
    if terms.iter().all(|term| term.is_finite()) {
        Ok(())
    } else {
        Err(PhysicsError::InvalidParameter(format!(
            "vector terms must be finite, got {:?}",
            vector
        )))
    }
}

/// Four walls enclosing a square play area of side `size` whose top-left
/// corner is the origin. The walls sit just outside the area and belong to
/// groups 0 and 1.
pub fn game_zone(size: f32) -> [BodyBuilder; 4] {
    let wall = || BodyBuilder::wall().groups(&[0, 1]);
    [
        wall()
            .position(Vector::new(-1.0, -1.0))
            .size(Vector::new(size + 2.0, 1.0)),
        wall()
            .position(Vector::new(-1.0, size))
            .size(Vector::new(size + 2.0, 1.0)),
        wall()
            .position(Vector::new(-1.0, 0.0))
            .size(Vector::new(1.0, size)),
        wall()
            .position(Vector::new(size, 0.0))
            .size(Vector::new(1.0, size)),
    ]
}
