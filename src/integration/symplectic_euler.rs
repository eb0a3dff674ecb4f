use crate::math::Vector;

/// Semi-implicit Euler step with one tick as the unit of time.
///
/// The velocity is updated first and the position then moves by the *new*
/// velocity, which keeps a body resting on a surface from drifting into it.
/// Both values keep their display-relative terms.
#[inline]
pub fn integrate(position: &mut Vector, velocity: &mut Vector, acceleration: Vector) {
    *velocity += acceleration;
    *position += *velocity;
}
