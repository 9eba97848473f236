//! Runtime engine settings
//!
//! Picks the integrator, how RK4 treats neighbours and the simultaneity
//! policy, and turns that choice into a [`Stepper`]

use crate::configuration::config::{CouplingConfig, EngineConfig, IntegratorConfig, SimultaneityConfig};
use super::error::{SimError, SimResult};
use super::integrator::{RungeKutta4, SemiImplicitEuler};
use super::stepper::{CoupledRk4, Sequential, Snapshot, Stepper};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or rk4
    pub coupling: CouplingConfig, // frozen neighbours or coupled stages
    pub simultaneity: SimultaneityConfig, // sequential or snapshot
    pub strict_rk4: bool, // textbook tableau
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            integrator: cfg.integrator,
            coupling: cfg.coupling,
            simultaneity: cfg.simultaneity,
            strict_rk4: cfg.strict_rk4,
        }
    }
}

impl Engine {
    /// Reject switch combinations that have no meaning
    ///
    /// Coupled stages move every body together, so they ignore `simultaneity`.
    pub fn validate(&self) -> SimResult<()> {
        match (self.integrator, self.coupling) {
            (IntegratorConfig::Euler, CouplingConfig::Coupled) => Err(SimError::IncompatibleEngine(
                "coupled stages only exist for rk4".to_string(),
            )),
            _ => Ok(()),
        }
    }

    pub fn build_stepper(&self) -> SimResult<Box<dyn Stepper + Send + Sync>> {
        self.validate()?;

        let stepper: Box<dyn Stepper + Send + Sync> = match (self.integrator, self.coupling, self.simultaneity) {
            (IntegratorConfig::Rk4, CouplingConfig::Coupled, _) => Box::new(CoupledRk4::new(self.strict_rk4)),
            (IntegratorConfig::Rk4, _, SimultaneityConfig::Sequential) => {
                Box::new(Sequential::new(RungeKutta4 { strict: self.strict_rk4 }))
            }
            (IntegratorConfig::Rk4, _, SimultaneityConfig::Snapshot) => {
                Box::new(Snapshot::new(RungeKutta4 { strict: self.strict_rk4 }))
            }
            (IntegratorConfig::Euler, _, SimultaneityConfig::Sequential) => Box::new(Sequential::new(SemiImplicitEuler)),
            (IntegratorConfig::Euler, _, SimultaneityConfig::Snapshot) => Box::new(Snapshot::new(SemiImplicitEuler)),
        };
        Ok(stepper)
    }
}
