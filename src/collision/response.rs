//! Force and velocity responses for a single selected contact.
//!
//! Every routine here works in resolved display units with one tick as the
//! unit of time, so a force `f` on a body of mass `m` changes its velocity by
//! `f / m` in the tick it is applied.

use tracing::{debug, warn};

use crate::math::{clamp, Vec2, EPSILON};

/// Forces produced by a contact with an immovable surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticResponse {
    /// Cancels the part of the resultant pushing into the surface
    pub reaction: Vec2,

    /// Cancels the velocity heading into the surface
    pub stop: Vec2,

    /// Opposes the tangential motion force
    pub friction: Vec2,

    /// Displacement that moves the body back out of the overlap
    pub correction: Vec2,
}

impl StaticResponse {
    /// The forces to add to the body's transient forces
    pub fn forces(&self) -> [Vec2; 3] {
        [self.reaction, self.stop, self.friction]
    }
}

/// Resolves a contact with an immovable surface.
///
/// `normal` is the unit direction from the body into the surface and
/// `resultant` the sum of the forces already acting this tick.
pub fn resolve_static(
    mass: f32,
    velocity: Vec2,
    resultant: Vec2,
    normal: Vec2,
    friction_coefficient: f32,
    penetration: f32,
) -> StaticResponse {
    let pushing = resultant.dot(&normal);
    let reaction = if pushing > 0.0 { -normal * pushing } else { Vec2::zeros() };

    let approach = velocity.dot(&normal);
    let stop = if approach > 0.0 { -normal * (approach * mass) } else { Vec2::zeros() };

    let tangent_resultant = resultant - normal * pushing;
    let tangent_velocity = velocity - normal * approach;
    let motion = tangent_resultant + tangent_velocity * mass;
    let friction = friction_force(friction_coefficient, reaction.norm(), motion);

    StaticResponse {
        reaction,
        stop,
        friction,
        correction: -normal * penetration.max(0.0),
    }
}

/// Coulomb friction against a tangential motion force.
///
/// The limit is `coefficient * reaction`. Above the motion force friction
/// cancels it completely; otherwise friction opposes it with exactly the
/// limit.
pub fn friction_force(coefficient: f32, reaction: f32, force: Vec2) -> Vec2 {
    let limit = coefficient * reaction.abs();
    let magnitude = force.norm();

    if limit > magnitude {
        -force
    } else if magnitude > EPSILON {
        -force / magnitude * limit
    } else {
        Vec2::zeros()
    }
}

/// Velocities after a collision between two dynamic bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticOutcome {
    pub velocity_a: Vec2,
    pub velocity_b: Vec2,

    /// True if at least one axis had no real solution and fell back to a
    /// fully inelastic merge
    pub merged: bool,
}

enum AxisSolution {
    Roots { plus: f32, minus: f32 },
    Merged(f32),
}

/// Solves momentum and scaled energy conservation on one axis for body A.
fn solve_axis(mass_a: f32, velocity_a: f32, mass_b: f32, velocity_b: f32, elasticity: f32) -> AxisSolution {
    let total = mass_a + mass_b;
    let momentum = mass_a * velocity_a + mass_b * velocity_b;
    let energy = 0.5 * mass_a * velocity_a * velocity_a + 0.5 * mass_b * velocity_b * velocity_b;
    let target = elasticity * energy;

    // m_a (m_a + m_b) u^2 - 2 p m_a u + (p^2 - 2 m_b eE) = 0, reduced
    let mut discriminant = mass_a * mass_b * (2.0 * total * target - momentum * momentum);
    let tolerance = EPSILON * (mass_a * mass_b * momentum * momentum).max(1.0);
    if discriminant < 0.0 && discriminant > -tolerance {
        discriminant = 0.0;
    }

    if discriminant < 0.0 {
        return AxisSolution::Merged(momentum / total);
    }

    let root = discriminant.sqrt();
    AxisSolution::Roots {
        plus: (momentum * mass_a + root) / (mass_a * total),
        minus: (momentum * mass_a - root) / (mass_a * total),
    }
}

/// Resolves a collision between two dynamic bodies.
///
/// Momentum is conserved on each axis and the kinetic energy on each axis is
/// scaled by `elasticity`, which is clamped to `[0, 1]`. `normal` points from
/// A into B. Along the normal the root that stops A approaching B is kept;
/// along the tangent the root on the same side of the centre-of-mass velocity
/// as A's current motion is kept. Axes without a real solution merge the two
/// velocities.
pub fn resolve_elastic(
    mass_a: f32,
    velocity_a: Vec2,
    mass_b: f32,
    velocity_b: Vec2,
    elasticity: f32,
    normal: Vec2,
) -> ElasticOutcome {
    let coefficient = if elasticity.is_nan() { 0.0 } else { clamp(elasticity, 0.0, 1.0) };
    if coefficient != elasticity {
        warn!(elasticity, clamped = coefficient, "elasticity outside [0, 1], clamping");
    }

    let total = mass_a + mass_b;
    let normal_axis = if normal.x.abs() > normal.y.abs() { 0 } else { 1 };
    let mut velocity_out = Vec2::zeros();
    let mut merged = false;

    for axis in 0..2 {
        let (va, vb) = (velocity_a[axis], velocity_b[axis]);
        let centre = (mass_a * va + mass_b * vb) / total;

        velocity_out[axis] = match solve_axis(mass_a, va, mass_b, vb, coefficient) {
            AxisSolution::Merged(shared) => {
                merged = true;
                shared
            }
            AxisSolution::Roots { plus, minus } => {
                let keep_plus = if axis == normal_axis {
                    (plus - centre) * normal[axis] <= 0.0
                } else {
                    va - centre >= 0.0
                };
                if keep_plus { plus } else { minus }
            }
        };
    }

    // With no elasticity a merge is the exact answer, not a fallback
    if merged && coefficient > 0.0 {
        warn!(mass_a, mass_b, elasticity = coefficient, "no real collision solution, merging velocities");
    } else if merged {
        debug!(mass_a, mass_b, "perfectly inelastic collision");
    }

    let momentum = velocity_a * mass_a + velocity_b * mass_b;
    ElasticOutcome {
        velocity_a: velocity_out,
        velocity_b: (momentum - velocity_out * mass_a) / mass_b,
        merged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn equal_masses_swap_velocities() {
        let outcome = resolve_elastic(
            1.0, Vec2::new(1.0, 0.0),
            1.0, Vec2::new(0.0, 0.0),
            1.0, Vec2::new(1.0, 0.0),
        );
        assert_abs_diff_eq!(outcome.velocity_a.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(outcome.velocity_b.x, 1.0, epsilon = 1e-5);
        assert!(!outcome.merged);
    }

    #[test]
    fn half_elasticity_matches_centre_of_mass_for_equal_masses() {
        let outcome = resolve_elastic(
            1.0, Vec2::new(1.0, 0.0),
            1.0, Vec2::new(0.0, 0.0),
            0.5, Vec2::new(1.0, 0.0),
        );
        assert_abs_diff_eq!(outcome.velocity_a.x, 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(outcome.velocity_b.x, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn zero_elasticity_merges() {
        let outcome = resolve_elastic(
            2.0, Vec2::new(3.0, 0.0),
            1.0, Vec2::new(0.0, 0.0),
            0.0, Vec2::new(1.0, 0.0),
        );
        assert!(outcome.merged);
        assert_abs_diff_eq!(outcome.velocity_a.x, 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(outcome.velocity_b.x, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn weak_elasticity_without_real_root_falls_back_to_merge() {
        let outcome = resolve_elastic(
            1.0, Vec2::new(1.0, 0.0),
            1.0, Vec2::new(0.0, 0.0),
            0.1, Vec2::new(1.0, 0.0),
        );
        assert!(outcome.merged);
        assert_abs_diff_eq!(outcome.velocity_a.x, 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(outcome.velocity_b.x, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn static_contact_cancels_weight_and_approach() {
        let response = resolve_static(
            1.0,
            Vec2::new(0.0, 0.98),
            Vec2::new(0.0, 0.49),
            Vec2::new(0.0, 1.0),
            0.0,
            0.25,
        );
        assert_eq!(response.reaction, Vec2::new(0.0, -0.49));
        assert_eq!(response.stop, Vec2::new(0.0, -0.98));
        assert_eq!(response.friction, Vec2::zeros());
        assert_eq!(response.correction, Vec2::new(0.0, -0.25));
    }

    #[test]
    fn static_contact_leaves_separating_motion_alone() {
        let response = resolve_static(
            1.0,
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, -2.0),
            Vec2::new(0.0, 1.0),
            0.5,
            0.0,
        );
        assert_eq!(response.reaction, Vec2::zeros());
        assert_eq!(response.stop, Vec2::zeros());
    }

    #[test]
    fn friction_clamps_or_slides() {
        let push = Vec2::new(0.3, 0.0);
        assert_eq!(friction_force(0.5, 1.0, push), -push);

        let hard_push = Vec2::new(2.0, 0.0);
        let sliding = friction_force(0.5, 1.0, hard_push);
        assert_abs_diff_eq!(sliding.norm(), 0.5, epsilon = 1e-6);
        assert!(sliding.x < 0.0);

        assert_eq!(friction_force(0.0, 0.0, Vec2::zeros()), Vec2::zeros());
    }
}
