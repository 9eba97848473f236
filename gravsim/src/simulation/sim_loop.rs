//! The simulation loop
//!
//! Owns the system for the whole run, advances it one full step at a time and
//! hands a read-only [`Frame`] to whoever is presenting it. Stop requests are
//! only looked at between steps, so a step is never left half-applied.

use std::ops::ControlFlow;

use super::constants::YEAR;
use super::error::{SimError, SimResult};
use super::forces::ForceModel;
use super::scenario::Scenario;
use super::states::{Body, System};
use super::stepper::Stepper;

/// What a renderer gets after each completed step
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub bodies: &'a [Body], // stable order, read-only
    pub elapsed: f64, // seconds
    pub cycle: u64, // completed steps
}

impl Frame<'_> {
    pub fn elapsed_years(&self) -> f64 {
        self.elapsed / YEAR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub cycles: u64, // steps completed by this call
    pub elapsed: f64, // total simulated seconds at exit
    pub stopped: bool, // true if the observer asked to stop
}

pub struct SimulationLoop {
    system: System,
    forces: Box<dyn ForceModel + Send + Sync>,
    stepper: Box<dyn Stepper + Send + Sync>,
    dt: f64,
    max_cycles: Option<u64>,
    cycle: u64,
    pending: Vec<Body>, // next state, committed only once it is finite
}

impl SimulationLoop {
    pub fn new(
        system: System,
        forces: impl ForceModel + Send + Sync + 'static,
        stepper: Box<dyn Stepper + Send + Sync>,
        dt: f64,
        max_cycles: Option<u64>,
    ) -> SimResult<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }
        if let Some((a, b)) = system.coincident_pair() {
            return Err(SimError::CoincidentBodies { a, b });
        }

        Ok(Self {
            system,
            forces: Box::new(forces),
            stepper,
            dt,
            max_cycles,
            cycle: 0,
            pending: Vec::new(),
        })
    }

    pub fn from_scenario(scenario: Scenario) -> SimResult<Self> {
        let stepper = scenario.engine.build_stepper()?;
        Self::new(
            scenario.system,
            scenario.forces,
            stepper,
            scenario.parameters.dt,
            scenario.parameters.max_cycles,
        )
    }

    /// Advance every body by one full step, then the clock
    ///
    /// A NaN/inf anywhere in the new state (two bodies met) is fatal. The step
    /// is then discarded: bodies, clock and cycle stay at the last good state.
    pub fn step(&mut self) -> SimResult<()> {
        self.pending.clone_from(&self.system.bodies);
        self.stepper.step(&mut self.pending, &*self.forces, self.dt);

        if let Some(b) = self.pending.iter().find(|b| !b.is_finite()) {
            return Err(SimError::NonFiniteState {
                body: b.id,
                cycle: self.cycle,
            });
        }

        std::mem::swap(&mut self.system.bodies, &mut self.pending);
        self.system.t += self.dt;
        self.cycle += 1;
        Ok(())
    }

    /// Step until the cycle budget runs out or `observer` breaks
    ///
    /// `observer` sees every completed step. Without a budget this only
    /// returns through the observer or an error.
    pub fn run<F>(&mut self, mut observer: F) -> SimResult<RunSummary>
    where
        F: FnMut(&Frame<'_>) -> ControlFlow<()>,
    {
        let start = self.cycle;
        let mut stopped = false;

        while !self.is_exhausted() {
            self.step()?;
            if observer(&self.frame()).is_break() {
                stopped = true;
                break;
            }
        }

        Ok(RunSummary {
            cycles: self.cycle - start,
            elapsed: self.system.t,
            stopped,
        })
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_cycles.is_some_and(|max| self.cycle >= max)
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            bodies: &self.system.bodies,
            elapsed: self.system.t,
            cycle: self.cycle,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn max_cycles(&self) -> Option<u64> {
        self.max_cycles
    }

    pub fn describe(&self) -> String {
        self.stepper.describe()
    }
}
