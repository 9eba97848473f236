use std::time::Instant;

use crate::configuration::config::{CouplingConfig, IntegratorConfig, SimultaneityConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimResult;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::states::{Body, NVec3, System};
use crate::simulation::stepper::Stepper;

/// The engine choices worth comparing, with their CSV column names
fn engines() -> Vec<(&'static str, Engine)> {
    let engine = |integrator, coupling, simultaneity, strict_rk4| Engine {
        integrator,
        coupling,
        simultaneity,
        strict_rk4,
    };
    use CouplingConfig::*;
    use IntegratorConfig::*;
    use SimultaneityConfig::*;

    vec![
        ("euler_seq", engine(Euler, Frozen, Sequential, false)),
        ("euler_snap", engine(Euler, Frozen, Snapshot, false)),
        ("rk4_frozen", engine(Rk4, Frozen, Sequential, false)),
        ("rk4_textbook", engine(Rk4, Frozen, Snapshot, true)),
        ("rk4_coupled", engine(Rk4, Coupled, Snapshot, true)),
    ]
}

/// Helper to build a ring of `n` equal bodies, in G = 1 units
fn make_ring(n: usize) -> SimResult<System> {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic, slightly uneven radii so no two bodies coincide
            let phase = i_f / n as f64 * std::f64::consts::TAU;
            let r = 5.0 + (i_f * 0.37).sin();
            let x = NVec3::new(r * phase.cos(), r * phase.sin(), 0.0);
            let v = NVec3::new(-phase.sin(), phase.cos(), 0.0) * 0.3;
            Body::new_si(i, format!("ring{i}"), x, v, 1.0, 0.0, [255, 255, 255])
        })
        .collect::<SimResult<Vec<_>>>()?;
    Ok(System::new(bodies))
}

/// Two equal masses on a circular orbit about their centre of mass, G = 1
fn circular_pair() -> SimResult<System> {
    let (m, d): (f64, f64) = (1.0, 1.0);
    let v = (m / (2.0 * d)).sqrt();
    let bodies = vec![
        Body::new_si(0, "a", NVec3::new(-d / 2.0, 0.0, 0.0), NVec3::new(0.0, -v, 0.0), m, 0.0, [255, 0, 0])?,
        Body::new_si(1, "b", NVec3::new(d / 2.0, 0.0, 0.0), NVec3::new(0.0, v, 0.0), m, 0.0, [0, 0, 255])?,
    ];
    Ok(System::new(bodies))
}

fn integrate(stepper: &mut dyn Stepper, sys: &mut System, dt: f64, t_end: f64) {
    let forces = NewtonianGravity { g: 1.0 };
    let steps = (t_end / dt).round() as usize;
    for _ in 0..steps {
        stepper.step(&mut sys.bodies, &forces, dt);
        sys.t += dt;
    }
}

/// Wall-clock cost of one full step for each engine choice
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_cost() -> SimResult<()> {
    let forces = NewtonianGravity { g: 1.0 };
    let ns = [2, 4, 8, 16, 32, 64, 128];
    let columns = engines();

    let header: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    println!("N,{}", header.join(","));

    for n in ns {
        // Small n: average over many steps to smooth noise
        let steps = if n <= 16 { 2000 } else { 200 };
        let mut row = vec![n.to_string()];

        for (_, engine) in &columns {
            let Ok(mut stepper) = engine.build_stepper() else {
                row.push("-".to_string());
                continue;
            };
            let mut sys = make_ring(n)?;

            // Warm-up
            stepper.step(&mut sys.bodies, &forces, 1e-3);

            let t0 = Instant::now();
            for _ in 0..steps {
                stepper.step(&mut sys.bodies, &forces, 1e-3);
            }
            let us_per_step = t0.elapsed().as_secs_f64() * 1e6 / steps as f64;
            row.push(format!("{us_per_step:.3}"));
        }
        println!("{}", row.join(","));
    }
    Ok(())
}

/// Endpoint position error against a fine Euler run, for shrinking dt
pub fn bench_convergence() -> SimResult<()> {
    let t_end = 2.0;

    let mut reference = circular_pair()?;
    let mut fine = Engine {
        integrator: IntegratorConfig::Euler,
        simultaneity: SimultaneityConfig::Snapshot,
        ..Engine::default()
    }
    .build_stepper()?;
    integrate(fine.as_mut(), &mut reference, 4e-6, t_end);

    let columns = engines();
    let header: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    println!("dt,{}", header.join(","));

    for dt in [0.5, 0.25, 0.125, 0.0625, 0.03125] {
        let mut row = vec![dt.to_string()];
        for (_, engine) in &columns {
            let Ok(mut stepper) = engine.build_stepper() else {
                row.push("-".to_string());
                continue;
            };
            let mut sys = circular_pair()?;
            integrate(stepper.as_mut(), &mut sys, dt, t_end);

            let err = sys
                .bodies
                .iter()
                .zip(&reference.bodies)
                .map(|(a, b)| (a.x - b.x).norm())
                .fold(0.0, f64::max);
            row.push(format!("{err:.3e}"));
        }
        println!("{}", row.join(","));
    }
    Ok(())
}
