//! Windowless presentation: drives the loop and reports through `log`

use std::ops::ControlFlow;

use log::info;

use crate::simulation::constants::{KM, M_SUN, R_SUN};
use crate::simulation::diagnostics::Invariants;
use crate::simulation::error::SimResult;
use crate::simulation::sim_loop::{RunSummary, SimulationLoop};

/// Cycle budget used when a headless run was not given one
pub const DEFAULT_HEADLESS_CYCLES: u64 = 100_000;

/// Run `sim` to the end of its budget, logging progress every `report_every` cycles
pub fn run_headless(sim: &mut SimulationLoop, g: f64, report_every: u64) -> SimResult<RunSummary> {
    info!(
        "run_headless: {} bodies, dt = {} s, {}",
        sim.bodies().len(),
        sim.dt(),
        sim.describe()
    );
    for b in sim.bodies() {
        info!(
            "  #{} {:<10} x = ({:.3}, {:.3}) Rsun, v = ({:.3}, {:.3}) km/s, m = {:.6} Msun",
            b.id,
            b.name,
            b.x.x / R_SUN,
            b.x.y / R_SUN,
            b.v.x / KM,
            b.v.y / KM,
            b.m() / M_SUN,
        );
    }

    let initial = Invariants::measure(sim.bodies(), g);
    let report_every = report_every.max(1);

    let summary = sim.run(|frame| {
        if frame.cycle % report_every == 0 {
            let now = Invariants::measure(frame.bodies, g);
            info!(
                "cycle {:>8}  t = {:.5} yr  dE/E = {:.3e}",
                frame.cycle,
                frame.elapsed_years(),
                now.energy_drift(&initial)
            );
        }
        ControlFlow::Continue(())
    })?;

    let last = Invariants::measure(sim.bodies(), g);
    info!(
        "done: {} cycles, {:.5} yr simulated, dE/E = {:.3e}, dL/L = {:.3e}, |dP| = {:.3e} kg m/s",
        summary.cycles,
        sim.frame().elapsed_years(),
        last.energy_drift(&initial),
        last.angular_momentum_drift(&initial),
        last.momentum_change(&initial),
    );

    Ok(summary)
}
