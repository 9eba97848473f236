//! Whole-system step strategies (the simultaneity policy)
//!
//! - [`Sequential`]: bodies are updated in order and later bodies see the
//!   already-moved earlier ones within the same step (reference behaviour)
//! - [`Snapshot`]: every body is integrated against the pre-step state, then
//!   all updates are applied at once
//! - [`CoupledRk4`]: RK4 where all bodies move through the four stages in
//!   lockstep, so neighbours are never frozen

use super::forces::ForceModel;
use super::integrator::{rk4_combine, rk4_stage, Integrator};
use super::states::{Body, Kinematics, NVec3};

pub trait Stepper {
    /// Advance every body in `bodies` by one full step of `dt`
    fn step(&mut self, bodies: &mut [Body], forces: &dyn ForceModel, dt: f64);

    fn describe(&self) -> String;
}

pub struct Sequential {
    integrator: Box<dyn Integrator + Send + Sync>,
}

impl Sequential {
    pub fn new(integrator: impl Integrator + Send + Sync + 'static) -> Self {
        Self {
            integrator: Box::new(integrator),
        }
    }
}

impl Stepper for Sequential {
    fn step(&mut self, bodies: &mut [Body], forces: &dyn ForceModel, dt: f64) {
        for i in 0..bodies.len() {
            // bodies[..i] have already moved this step
            let k = self.integrator.advance(i, bodies, forces, dt);
            bodies[i].apply(k);
        }
    }

    fn describe(&self) -> String {
        format!("{}, sequential", self.integrator.name())
    }
}

pub struct Snapshot {
    integrator: Box<dyn Integrator + Send + Sync>,
    pending: Vec<Kinematics>, // updates computed from the pre-step state
}

impl Snapshot {
    pub fn new(integrator: impl Integrator + Send + Sync + 'static) -> Self {
        Self {
            integrator: Box::new(integrator),
            pending: Vec::new(),
        }
    }
}

impl Stepper for Snapshot {
    fn step(&mut self, bodies: &mut [Body], forces: &dyn ForceModel, dt: f64) {
        let Self { integrator, pending } = self;
        let before: &[Body] = bodies;

        pending.clear();
        pending.extend((0..before.len()).map(|i| integrator.advance(i, before, forces, dt)));

        for (b, k) in bodies.iter_mut().zip(pending.iter()) {
            b.apply(*k);
        }
    }

    fn describe(&self) -> String {
        format!("{}, snapshot", self.integrator.name())
    }
}

/// RK4 over the coupled system: stage s accelerations are evaluated with
/// every body at its own stage-s position
#[derive(Debug, Clone, Default)]
pub struct CoupledRk4 {
    pub strict: bool, // textbook tableau, see `RungeKutta4`
    stage: Vec<Body>, // scratch copy positioned at the current stage
}

impl CoupledRk4 {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            stage: Vec::new(),
        }
    }
}

impl Stepper for CoupledRk4 {
    fn step(&mut self, bodies: &mut [Body], forces: &dyn ForceModel, dt: f64) {
        let n = bodies.len();
        if n == 0 { // no bodies, return
            return;
        }
        let half_dt = 0.5 * dt;

        let p0: Vec<NVec3> = bodies.iter().map(|b| b.x).collect();
        let v0: Vec<NVec3> = bodies.iter().map(|b| b.v).collect();

        // kp[s][i], kv[s][i], ka[s][i]: stage s of body i
        let mut kp = [p0.clone(), p0.clone(), p0.clone(), p0.clone()];
        let mut kv = [v0.clone(), v0.clone(), v0.clone(), v0.clone()];
        let mut ka = [
            vec![NVec3::zeros(); n],
            vec![NVec3::zeros(); n],
            vec![NVec3::zeros(); n],
            vec![NVec3::zeros(); n],
        ];

        // Stage 1: accelerations at the pre-step positions
        self.stage.clear();
        self.stage.extend_from_slice(bodies);
        forces.accumulate_accels(&self.stage, &mut ka[0]);

        for s in 1..4 {
            let h = if s == 3 { dt } else { half_dt };
            for i in 0..n {
                let (p, v) = rk4_stage(&p0[i], &v0[i], &kv[s - 1][i], &ka[s - 1][i], h, self.strict);
                kp[s][i] = p;
                kv[s][i] = v;
            }

            // The reference tableau samples stage 4 at the stage 3 positions
            let at = if s == 3 && !self.strict { 2 } else { s };
            for (b, p) in self.stage.iter_mut().zip(kp[at].iter()) {
                b.x = *p;
            }
            forces.accumulate_accels(&self.stage, &mut ka[s]);
        }

        for (i, b) in bodies.iter_mut().enumerate() {
            let k = rk4_combine(
                &p0[i],
                &v0[i],
                [&kv[0][i], &kv[1][i], &kv[2][i], &kv[3][i]],
                [&ka[0][i], &ka[1][i], &ka[2][i], &ka[3][i]],
                dt,
            );
            b.apply(k);
        }
    }

    fn describe(&self) -> String {
        let tableau = if self.strict { "rk4 (textbook)" } else { "rk4" };
        format!("{tableau}, coupled stages")
    }
}
