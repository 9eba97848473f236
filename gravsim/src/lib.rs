pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::constants;
pub use simulation::error::{SimError, SimResult};
pub use simulation::states::{Body, Kinematics, NVec3, Rgb, System};
pub use simulation::forces::{ForceModel, NewtonianGravity};
pub use simulation::integrator::{Integrator, RungeKutta4, SemiImplicitEuler};
pub use simulation::stepper::{CoupledRk4, Sequential, Snapshot, Stepper};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::sim_loop::{Frame, RunSummary, SimulationLoop};
pub use simulation::diagnostics::Invariants;

pub use configuration::config::{
    BodyConfig, CouplingConfig, DisplayConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig,
    SimultaneityConfig,
};
pub use configuration::presets::Preset;

pub use visualization::headless::run_headless;
#[cfg(feature = "viewer")]
pub use visualization::viewer2d::run_viewer;

pub use benchmark::benchmark::{bench_convergence, bench_step_cost};
