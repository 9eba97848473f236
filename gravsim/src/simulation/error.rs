//! Error taxonomy for the simulation core
//!
//! Configuration errors are raised while building a [`Scenario`](super::scenario::Scenario)
//! or a [`SimulationLoop`](super::sim_loop::SimulationLoop); `NonFiniteState`
//! is raised by a step that produced NaN/inf state. None of them are recoverable.

use std::fmt;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass must be strictly positive and finite
    InvalidMass { body: usize, mass: f64 },
    /// Display radius must be non-negative and finite
    InvalidRadius { body: usize, radius: f64 },
    /// Position/velocity must have 2 or 3 finite components
    InvalidVector { body: usize, field: &'static str, len: usize },
    /// Time step must be strictly positive and finite
    InvalidTimeStep(f64),
    /// Box size must be strictly positive and finite
    InvalidBoxSize(f64),
    /// Gravitational constant must be strictly positive and finite
    InvalidGravConstant(f64),
    /// Two bodies start at the same position
    CoincidentBodies { a: usize, b: usize },
    /// A step produced a NaN or infinite position/velocity
    NonFiniteState { body: usize, cycle: u64 },
    /// Engine switches that cannot be combined
    IncompatibleEngine(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass { body, mass } => {
                write!(f, "body {body}: mass must be positive, got {mass}")
            }
            SimError::InvalidRadius { body, radius } => {
                write!(f, "body {body}: radius must be non-negative, got {radius}")
            }
            SimError::InvalidVector { body, field, len } => write!(
                f,
                "body {body}: `{field}` needs 2 or 3 finite components, got {len}"
            ),
            SimError::InvalidTimeStep(dt) => {
                write!(f, "time step must be positive, got {dt} s")
            }
            SimError::InvalidBoxSize(size) => {
                write!(f, "box size must be positive, got {size} solar radii")
            }
            SimError::InvalidGravConstant(g) => {
                write!(f, "gravitational constant must be positive, got {g}")
            }
            SimError::CoincidentBodies { a, b } => {
                write!(f, "bodies {a} and {b} start at the same position")
            }
            SimError::NonFiniteState { body, cycle } => write!(
                f,
                "body {body} reached a non-finite state in cycle {cycle} (bodies coincided?)"
            ),
            SimError::IncompatibleEngine(reason) => write!(f, "incompatible engine: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}
