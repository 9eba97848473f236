//! Conserved quantities of a body list
//!
//! Used to judge integrator quality: total energy, angular momentum and linear
//! momentum should stay put for an isolated system.

use super::states::{Body, NVec3};

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| 0.5 * b.m() * b.v.norm_squared()).sum()
}

/// Pairwise Newtonian potential energy, each pair counted once
pub fn potential_energy(bodies: &[Body], g: f64) -> f64 {
    let n = bodies.len();
    let mut pe = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (bodies[j].x - bodies[i].x).norm();
            pe -= g * bodies[i].m() * bodies[j].m() / r;
        }
    }
    pe
}

pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g)
}

/// L = sum m (r x v), about the origin
pub fn angular_momentum(bodies: &[Body]) -> NVec3 {
    bodies.iter().map(|b| b.m() * b.x.cross(&b.v)).sum()
}

/// P = sum m v
pub fn linear_momentum(bodies: &[Body]) -> NVec3 {
    bodies.iter().map(|b| b.m() * b.v).sum()
}

pub fn center_of_mass(bodies: &[Body]) -> NVec3 {
    let total: f64 = bodies.iter().map(Body::m).sum();
    if total == 0.0 {
        return NVec3::zeros();
    }
    bodies.iter().map(|b| b.m() * b.x).sum::<NVec3>() / total
}

/// Snapshot of the conserved quantities at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invariants {
    pub energy: f64,
    pub angular_momentum: NVec3,
    pub momentum: NVec3,
}

impl Invariants {
    pub fn measure(bodies: &[Body], g: f64) -> Self {
        Self {
            energy: total_energy(bodies, g),
            angular_momentum: angular_momentum(bodies),
            momentum: linear_momentum(bodies),
        }
    }

    /// |E - E0| / |E0|
    pub fn energy_drift(&self, initial: &Invariants) -> f64 {
        relative(self.energy - initial.energy, initial.energy.abs())
    }

    /// |L - L0| / |L0|
    pub fn angular_momentum_drift(&self, initial: &Invariants) -> f64 {
        relative(
            (self.angular_momentum - initial.angular_momentum).norm(),
            initial.angular_momentum.norm(),
        )
    }

    /// |P - P0| in kg m/s; the total is often zero, so no relative form
    pub fn momentum_change(&self, initial: &Invariants) -> f64 {
        (self.momentum - initial.momentum).norm()
    }
}

fn relative(delta: f64, scale: f64) -> f64 {
    if scale == 0.0 {
        delta.abs()
    } else {
        delta.abs() / scale
    }
}
