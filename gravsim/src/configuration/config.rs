//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator, RK4 coupling, simultaneity policy
//! - [`ParametersConfig`] – time step, box size, cycle budget, G
//! - [`DisplayConfig`]    – window and grid settings for the viewer
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! Every field has a default, so an empty file is the built-in `jstaff` system.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"           # or "euler"
//!   coupling: "frozen"          # or "coupled" (rk4 only, simultaneity is ignored)
//!   simultaneity: "sequential"  # or "snapshot"
//!   strict_rk4: false           # true -> textbook RK4 tableau
//!
//! parameters:
//!   time_step: 8640.0           # seconds (0.1 day)
//!   box_size: 1000.0            # solar radii
//!   max_cycles: 100000          # omit to run until the window closes
//!   grav_constant: 6.67e-11
//!
//! display:
//!   window_size: 1000           # pixels
//!   tick_num: 10
//!   tick_len: 20                # pixels
//!   steps_per_frame: 1
//!   tracks: false
//!
//! bodies:                       # x: solar radii from box centre, v: km/s, m: solar masses
//!   - name: "star"
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.346]
//!     m: 0.77
//!     radius: 10                # pixels
//!     color: [255, 0, 0]
//! ```

use clap::ValueEnum;
use serde::Deserialize;

use super::presets::Preset;
use crate::simulation::constants::{DAY, G};

/// Which single-body integrator the engine uses
#[derive(Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler, one force evaluation, first order
    Euler,

    #[default]
    #[serde(rename = "rk4")] // Four-stage Runge-Kutta, four force evaluations
    Rk4,
}

/// How RK4 treats the other bodies during its stages
#[derive(Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CouplingConfig {
    #[default]
    #[serde(rename = "frozen")] // others stay at their pre-step position for all stages
    Frozen,

    #[serde(rename = "coupled")] // all bodies go through the stages together, `simultaneity` is ignored
    Coupled,
}

/// Whether bodies see neighbours that already moved in the same step
#[derive(Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimultaneityConfig {
    #[default]
    #[serde(rename = "sequential")] // update in place, in body order
    Sequential,

    #[serde(rename = "snapshot")] // integrate everyone from the same pre-step state
    Snapshot,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig,
    pub coupling: CouplingConfig,
    pub simultaneity: SimultaneityConfig,
    pub strict_rk4: bool, // textbook RK4 instead of the stage-4-at-kp3 tableau
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub time_step: f64, // seconds
    pub box_size: f64, // solar radii, width and height of the displayed box
    pub max_cycles: Option<u64>, // None -> run until stopped
    pub grav_constant: f64, // m^3 kg^-1 s^-2
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            time_step: DAY / 10.0,
            box_size: 1000.0,
            max_cycles: None,
            grav_constant: G,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub window_size: u32, // pixels, the window is square
    pub tick_num: u32, // ticks per window edge
    pub tick_len: u32, // pixels
    pub steps_per_frame: u32, // full steps between two redraws
    pub tracks: bool, // leave a trail behind each body
    pub track_len: usize, // points kept per trail
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_size: 1000,
            tick_num: 10,
            tick_len: 20,
            steps_per_frame: 1,
            tracks: false,
            track_len: 2000,
        }
    }
}

/// Initial state of one body, in user-facing units
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String,
    pub x: Vec<f64>, // solar radii, offset from the box centre
    pub v: Vec<f64>, // km/s
    #[serde(default = "default_mass")]
    pub m: f64, // solar masses
    #[serde(default = "default_radius")]
    pub radius: f64, // display pixels
    #[serde(default)]
    pub color: [u8; 3],
}

fn default_mass() -> f64 {
    1.0
}

fn default_radius() -> f64 {
    4.0
}

impl BodyConfig {
    pub fn new(name: &str, x: [f64; 2], v: [f64; 2], m: f64, radius: f64, color: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            x: x.to_vec(),
            v: v.to_vec(),
            m,
            radius,
            color,
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub display: DisplayConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl ScenarioConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            display: DisplayConfig::default(),
            bodies: preset.bodies(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // serde_yaml reads an empty document as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}
