use gravsim::visualization::headless::DEFAULT_HEADLESS_CYCLES;
use gravsim::{bench_convergence, bench_step_cost, run_headless};
use gravsim::{CouplingConfig, IntegratorConfig, Preset, ScenarioConfig, SimultaneityConfig};
use gravsim::{Scenario, SimulationLoop};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Gravitational n-body simulator")]
struct Args {
    /// Scenario YAML, looked up as given and then under the crate's `scenarios/`
    #[arg(short, long = "file")]
    file_name: Option<String>,

    /// Built-in initial conditions, used when no file is given
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Height/width of the physical box in solar radii
    #[arg(long)]
    boxsize: Option<f64>,

    /// Seconds between calculations
    #[arg(long)]
    timestep: Option<f64>,

    /// Height and width of the window in pixels
    #[arg(long)]
    winsize: Option<u32>,

    /// Number of ticks on each side of the window
    #[arg(long)]
    ticknum: Option<u32>,

    /// Length of each tick in pixels
    #[arg(long)]
    ticklen: Option<u32>,

    /// Stop after this many steps
    #[arg(long)]
    cycles: Option<u64>,

    #[arg(long, value_enum)]
    integrator: Option<IntegratorConfig>,

    /// RK4 neighbours: frozen per body, or coupled stages (moves all bodies at once)
    #[arg(long, value_enum)]
    coupling: Option<CouplingConfig>,

    #[arg(long, value_enum)]
    simultaneity: Option<SimultaneityConfig>,

    /// Use the textbook RK4 tableau
    #[arg(long)]
    strict_rk4: bool,

    /// Draw a trail behind each body
    #[arg(long)]
    tracks: bool,

    /// Run without a window and log progress instead
    #[arg(long)]
    headless: bool,

    /// Headless: cycles between progress lines
    #[arg(long, default_value_t = 1000)]
    report_every: u64,

    /// Print step-cost and convergence tables as CSV and exit
    #[arg(long)]
    bench: bool,
}

impl Args {
    /// Command line values win over the file
    fn apply_overrides(&self, cfg: &mut ScenarioConfig) {
        if let Some(v) = self.boxsize {
            cfg.parameters.box_size = v;
        }
        if let Some(v) = self.timestep {
            cfg.parameters.time_step = v;
        }
        if let Some(v) = self.cycles {
            cfg.parameters.max_cycles = Some(v);
        }
        if let Some(v) = self.winsize {
            cfg.display.window_size = v;
        }
        if let Some(v) = self.ticknum {
            cfg.display.tick_num = v;
        }
        if let Some(v) = self.ticklen {
            cfg.display.tick_len = v;
        }
        if let Some(v) = self.integrator {
            cfg.engine.integrator = v;
        }
        if let Some(v) = self.coupling {
            cfg.engine.coupling = v;
        }
        if let Some(v) = self.simultaneity {
            cfg.engine.simultaneity = v;
        }
        if self.strict_rk4 {
            cfg.engine.strict_rk4 = true;
        }
        if self.tracks {
            cfg.display.tracks = true;
        }
    }
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let Some(file_name) = &args.file_name else {
        return Ok(ScenarioConfig::from_preset(args.preset.unwrap_or_default()));
    };

    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let yaml = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read scenario {}", config_path.display()))?;
    let scenario_cfg = ScenarioConfig::from_yaml_str(&yaml)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    log::debug!("{:?}", scenario_cfg);
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step_cost()?;
        bench_convergence()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario(&args)?;
    args.apply_overrides(&mut scenario_cfg);

    let headless = args.headless || cfg!(not(feature = "viewer"));
    if headless && scenario_cfg.parameters.max_cycles.is_none() {
        scenario_cfg.parameters.max_cycles = Some(DEFAULT_HEADLESS_CYCLES);
    }

    let g = scenario_cfg.parameters.grav_constant;
    let scenario = Scenario::build_scenario(&scenario_cfg).context("invalid scenario")?;
    let mut sim = SimulationLoop::from_scenario(scenario)?;

    if headless {
        run_headless(&mut sim, g, args.report_every)?;
    } else {
        present(sim, scenario_cfg);
    }

    Ok(())
}

#[cfg(feature = "viewer")]
fn present(sim: SimulationLoop, scenario_cfg: ScenarioConfig) {
    gravsim::run_viewer(sim, scenario_cfg.display, scenario_cfg.parameters.box_size);
}

#[cfg(not(feature = "viewer"))]
fn present(_sim: SimulationLoop, _scenario_cfg: ScenarioConfig) {}
