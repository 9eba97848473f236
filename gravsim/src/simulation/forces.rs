//! Acceleration model for the n-body engine
//!
//! [`ForceModel`] answers one question: what acceleration would body `target`
//! feel if it sat at `position`, given where every other body is right now.
//! Integrators only ever talk to gravity through this trait.

use super::constants;
use super::states::{Body, NVec3};

pub trait ForceModel {
    /// Acceleration on `bodies[target]` evaluated at `position` (which may be a
    /// trial position, not the body's stored one)
    fn acceleration_at(&self, target: usize, position: &NVec3, bodies: &[Body]) -> NVec3;

    /// Acceleration of every body at its own stored position
    /// - `out[i]` is overwritten, not accumulated
    fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec3]) {
        for (i, (a, b)) in out.iter_mut().zip(bodies).enumerate() {
            *a = self.acceleration_at(i, &b.x, bodies);
        }
    }
}

/// Any `Fn(target, position, bodies) -> acceleration` closure is a force model
impl<F> ForceModel for F
where
    F: Fn(usize, &NVec3, &[Body]) -> NVec3,
{
    fn acceleration_at(&self, target: usize, position: &NVec3, bodies: &[Body]) -> NVec3 {
        self(target, position, bodies)
    }
}

/// Newtonian gravity by direct pairwise summation, no softening
///
/// Coincident positions divide by zero and yield NaN/inf; callers are expected
/// to keep bodies apart (see `SimError::CoincidentBodies` / `NonFiniteState`).
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { g: constants::G }
    }
}

impl NewtonianGravity {
    /// Magnitude of the pull between `target` (sitting at `position`) and
    /// `other`, plus the unit vector from `position` toward `other`
    fn pull(&self, target: usize, position: &NVec3, other: usize, bodies: &[Body]) -> (f64, NVec3) {
        let bt = &bodies[target];
        let bo = &bodies[other];

        // delta points from the target toward the other body
        let delta = bo.x - position;
        let dist = delta.norm();

        // |F| = G m_t m_o / d^2
        let force = self.g * bt.m() * bo.m() / (dist * dist);
        (force, delta / dist)
    }

    /// Force vector exerted on `bodies[target]` at its stored position by `bodies[other]`
    pub fn pair_force(&self, target: usize, other: usize, bodies: &[Body]) -> NVec3 {
        let (force, dir) = self.pull(target, &bodies[target].x, other, bodies);
        force * dir
    }
}

impl ForceModel for NewtonianGravity {
    fn acceleration_at(&self, target: usize, position: &NVec3, bodies: &[Body]) -> NVec3 {
        let mt = bodies[target].m();
        let mut a = NVec3::zeros();

        // Identity by index: a second body at the same spot is still "other"
        for j in 0..bodies.len() {
            if j == target {
                continue; // no self gravity
            }
            // force first, then divide by the target's own mass
            let (force, dir) = self.pull(target, position, j, bodies);
            a += (force / mt) * dir;
        }
        a
    }
}
