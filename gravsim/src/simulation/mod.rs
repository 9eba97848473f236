pub mod constants;
pub mod error;
pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod stepper;
pub mod scenario;
pub mod sim_loop;
pub mod diagnostics;
