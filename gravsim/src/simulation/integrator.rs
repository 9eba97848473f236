//! Fixed-step single-body integrators
//!
//! An [`Integrator`] advances ONE body by one step, treating every other body
//! as frozen where it currently is. Which neighbour state it sees (already
//! moved this step or not) is decided by the [`Stepper`](super::stepper::Stepper)
//! that drives it.

use super::forces::ForceModel;
use super::states::{Body, Kinematics, NVec3};

pub trait Integrator {
    /// New position/velocity for `bodies[target]` after `dt`
    /// `bodies` is read as-is: all other bodies stay put for every stage
    fn advance(&self, target: usize, bodies: &[Body], forces: &dyn ForceModel, dt: f64) -> Kinematics;

    /// Force model evaluations per body per step
    fn evaluations(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// Semi-implicit (symplectic) Euler
/// One force evaluation per step; velocity is updated first and the
/// already-updated velocity moves the body
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn advance(&self, target: usize, bodies: &[Body], forces: &dyn ForceModel, dt: f64) -> Kinematics {
        let b = &bodies[target];

        // a_n from x_n, with every other body where it is right now
        let a = forces.acceleration_at(target, &b.x, bodies);

        // Kick: v_n+1 = v_n + dt * a_n
        let v = b.v + dt * a;

        // Drift with the NEW velocity: x_n+1 = x_n + dt * v_n+1
        let x = b.x + dt * v;

        Kinematics { x, v }
    }

    fn evaluations(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "euler"
    }
}

/// Four-stage Runge-Kutta with the rest of the system held fixed
///
/// `strict = false` reproduces the reference tableau: stage positions are built
/// from the stage's own velocity and the fourth acceleration is sampled at the
/// third stage position. That scheme is only first order once combined with
/// frozen neighbours. `strict = true` is textbook classical RK4.
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKutta4 {
    pub strict: bool, // textbook tableau instead of the reference one
}

impl RungeKutta4 {
    pub fn reference() -> Self {
        Self { strict: false }
    }

    pub fn textbook() -> Self {
        Self { strict: true }
    }
}

impl Integrator for RungeKutta4 {
    fn advance(&self, target: usize, bodies: &[Body], forces: &dyn ForceModel, dt: f64) -> Kinematics {
        let b = &bodies[target];
        let half_dt = 0.5 * dt;
        let accel = |p: &NVec3| forces.acceleration_at(target, p, bodies);

        // Stage 1: current state
        let (kp1, kv1) = (b.x, b.v);
        let ka1 = accel(&kp1);

        // Stage 2: half step using ka1
        let (kp2, kv2) = rk4_stage(&kp1, &kv1, &kv1, &ka1, half_dt, self.strict);
        let ka2 = accel(&kp2);

        // Stage 3: half step using ka2
        let (kp3, kv3) = rk4_stage(&kp1, &kv1, &kv2, &ka2, half_dt, self.strict);
        let ka3 = accel(&kp3);

        // Stage 4: full step using ka3
        let (kp4, kv4) = rk4_stage(&kp1, &kv1, &kv3, &ka3, dt, self.strict);
        let ka4 = accel(if self.strict { &kp4 } else { &kp3 });

        rk4_combine(&kp1, &kv1, [&kv1, &kv2, &kv3, &kv4], [&ka1, &ka2, &ka3, &ka4], dt)
    }

    fn evaluations(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        if self.strict {
            "rk4 (textbook)"
        } else {
            "rk4"
        }
    }
}

// =========================================================================================
// Shared RK4 tableau, also used by the coupled stepper
// =========================================================================================

/// Position/velocity of the next stage, `h` being dt/2 or dt
/// - velocity: v0 + h * a_prev
/// - position: p0 + h * v_prev (textbook) or p0 + h * v_this (reference)
pub(crate) fn rk4_stage(
    p0: &NVec3,
    v0: &NVec3,
    v_prev: &NVec3,
    a_prev: &NVec3,
    h: f64,
    strict: bool,
) -> (NVec3, NVec3) {
    let kv = v0 + h * a_prev;
    let kp = if strict { p0 + h * v_prev } else { p0 + h * kv };
    (kp, kv)
}

/// Weighted 1-2-2-1 combination of the four stages
pub(crate) fn rk4_combine(
    p0: &NVec3,
    v0: &NVec3,
    kv: [&NVec3; 4],
    ka: [&NVec3; 4],
    dt: f64,
) -> Kinematics {
    let w = dt / 6.0;
    Kinematics {
        x: p0 + w * (kv[0] + 2.0 * kv[1] + 2.0 * kv[2] + kv[3]),
        v: v0 + w * (ka[0] + 2.0 * ka[1] + 2.0 * ka[2] + ka[3]),
    }
}
