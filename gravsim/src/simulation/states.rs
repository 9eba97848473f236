//! Core state types for the N-body simulation.
//!
//! - `Body`: one point mass, SI units, plus its display attributes
//! - `System`: the ordered bodies and the elapsed time `t`
//!
//! Positions live in `NVec3`; planar scenarios simply keep `z = 0`.

use nalgebra::Vector3;

use super::constants::{KM, M_SUN, R_SUN};
use super::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

/// RGB colour of a body, only read by renderers
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: usize, // identity, index in the system
    pub name: String, // label for logs
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
    m: f64, // mass (kg), fixed after construction
    pub radius: f64, // display radius (px)
    pub color: Rgb,
}

/// Position and velocity produced by one integrator call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub x: NVec3,
    pub v: NVec3,
}

impl Body {
    /// Build a body from solar radii, km/s and solar masses.
    ///
    /// `x` and `v` accept 2 (planar) or 3 components. This is the only place
    /// unit conversion happens; the returned body is pure SI.
    pub fn from_solar_units(
        id: usize,
        name: impl Into<String>,
        x: &[f64],
        v: &[f64],
        m: f64,
        radius: f64,
        color: Rgb,
    ) -> SimResult<Self> {
        let x = vector_from_slice(id, "x", x)? * R_SUN;
        let v = vector_from_slice(id, "v", v)? * KM;
        Self::new_si(id, name, x, v, m * M_SUN, radius, color)
    }

    /// Build a body from values that are already SI
    pub fn new_si(
        id: usize,
        name: impl Into<String>,
        x: NVec3,
        v: NVec3,
        m: f64,
        radius: f64,
        color: Rgb,
    ) -> SimResult<Self> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass { body: id, mass: m });
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SimError::InvalidRadius { body: id, radius });
        }
        if !x.iter().all(|c| c.is_finite()) {
            return Err(SimError::InvalidVector { body: id, field: "x", len: 3 });
        }
        if !v.iter().all(|c| c.is_finite()) {
            return Err(SimError::InvalidVector { body: id, field: "v", len: 3 });
        }

        Ok(Self {
            id,
            name: name.into(),
            x,
            v,
            m,
            radius,
            color,
        })
    }

    /// Mass in kg
    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn kinematics(&self) -> Kinematics {
        Kinematics { x: self.x, v: self.v }
    }

    pub fn apply(&mut self, k: Kinematics) {
        self.x = k.x;
        self.v = k.v;
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

fn vector_from_slice(body: usize, field: &'static str, comps: &[f64]) -> SimResult<NVec3> {
    let vec = match comps {
        &[x, y] => NVec3::new(x, y, 0.0),
        &[x, y, z] => NVec3::new(x, y, z),
        _ => return Err(SimError::InvalidVector { body, field, len: comps.len() }),
    };
    if !vec.iter().all(|c| c.is_finite()) {
        return Err(SimError::InvalidVector { body, field, len: comps.len() });
    }
    Ok(vec)
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, order fixed for the run
    pub t: f64, // elapsed time (s)
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// First pair of bodies sharing an exact position, if any
    pub fn coincident_pair(&self) -> Option<(usize, usize)> {
        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.bodies[i].x == self.bodies[j].x {
                    return Some((self.bodies[i].id, self.bodies[j].id));
                }
            }
        }
        None
    }
}
