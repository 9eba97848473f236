//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings, already in SI:
//! - fixed step size,
//! - box size (only used to place and scale the view),
//! - optional cycle budget,
//! - gravitational constant

use crate::configuration::config::ParametersConfig;
use super::constants::R_SUN;
use super::error::{SimError, SimResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size (s)
    pub box_size: f64, // box width (m)
    pub max_cycles: Option<u64>, // None -> until stopped
    pub g: f64, // gravitational constant
}

impl Parameters {
    pub fn from_config(cfg: &ParametersConfig) -> SimResult<Self> {
        if !(cfg.time_step.is_finite() && cfg.time_step > 0.0) {
            return Err(SimError::InvalidTimeStep(cfg.time_step));
        }
        if !(cfg.box_size.is_finite() && cfg.box_size > 0.0) {
            return Err(SimError::InvalidBoxSize(cfg.box_size));
        }
        if !(cfg.grav_constant.is_finite() && cfg.grav_constant > 0.0) {
            return Err(SimError::InvalidGravConstant(cfg.grav_constant));
        }

        Ok(Self {
            dt: cfg.time_step,
            box_size: cfg.box_size * R_SUN,
            max_cycles: cfg.max_cycles,
            g: cfg.grav_constant,
        })
    }
}
