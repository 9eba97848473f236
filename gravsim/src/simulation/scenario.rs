//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing, user units) and produces the runtime
//! bundle (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`, SI)
//! - system state (`System` with bodies at t = 0, SI)
//! - the force model (`NewtonianGravity`)
//!
//! Every validation error surfaces here, before anything is stepped

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use super::engine::Engine;
use super::error::{SimError, SimResult};
use super::forces::NewtonianGravity;
use super::params::Parameters;
use super::states::{Body, System};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: NewtonianGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        // Engine (runtime) from EngineConfig
        let engine = Engine::from(&cfg.engine);
        engine.validate()?;

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters::from_config(&cfg.parameters)?;

        // Bodies: `BodyConfig` -> runtime `Body`, converted to SI once here
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc): (usize, &BodyConfig)| {
                let name = if bc.name.is_empty() { format!("body{i}") } else { bc.name.clone() };
                Body::from_solar_units(i, name, &bc.x, &bc.v, bc.m, bc.radius, bc.color)
            })
            .collect::<SimResult<Vec<Body>>>()?;

        // Initial system state: bodies at t = 0
        let system = System::new(bodies);
        if let Some((a, b)) = system.coincident_pair() {
            return Err(SimError::CoincidentBodies { a, b });
        }

        let forces = NewtonianGravity { g: parameters.g };

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}
