//! Built-in initial conditions
//!
//! All systems are laid out along the x axis from the box centre, orbiting in
//! the xy plane. Positions in solar radii, velocities in km/s, masses in
//! solar masses, radii in pixels.

use clap::ValueEnum;

use super::config::BodyConfig;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Star with two light companions on a shared velocity
    #[default]
    Jstaff,
    /// Heavy primary with two solar-mass companions
    Tauris,
    /// Sun and the eight planets
    SolarSystem,
    /// Wide three-star system
    Triple,
}

impl Preset {
    pub fn bodies(self) -> Vec<BodyConfig> {
        match self {
            Preset::Jstaff => vec![
                BodyConfig::new("primary", [0.0, 0.0], [0.0, 0.346], 0.77, 10.0, [255, 0, 0]),
                BodyConfig::new("inner", [186.0, 0.0], [0.0, -20.8], 0.0095, 5.0, [0, 255, 0]),
                BodyConfig::new("outer", [338.0, 0.0], [0.0, -20.8], 0.0095, 5.0, [0, 0, 255]),
            ],
            Preset::Tauris => vec![
                BodyConfig::new("primary", [0.0, 0.0], [0.0, 6.623627965], 9.9, 10.0, [255, 0, 0]),
                BodyConfig::new("inner", [478.655890805, 0.0], [0.0, -59.556125654], 1.1, 5.0, [0, 255, 0]),
                BodyConfig::new("outer", [1998.563218391, 0.0], [0.0, -27.56153374], 1.3, 5.0, [0, 0, 255]),
            ],
            Preset::SolarSystem => vec![
                BodyConfig::new("sun", [0.0, 0.0], [0.0, 0.0], 1.0, 10.0, [255, 255, 0]),
                BodyConfig::new("mercury", [66.12, 0.0], [0.0, -58.98], 0.000000165, 4.0, [105, 105, 105]),
                BodyConfig::new("venus", [154.5, 0.0], [0.0, -35.26], 0.000002447, 4.0, [210, 105, 30]),
                BodyConfig::new("earth", [211.4, 0.0], [0.0, -30.29], 0.000003003, 4.0, [0, 255, 0]),
                BodyConfig::new("mars", [297.0, 0.0], [0.0, -26.5], 0.000000321, 4.0, [255, 0, 0]),
                BodyConfig::new("jupiter", [1064.4, 0.0], [0.0, -13.72], 0.0009543, 4.0, [160, 82, 45]),
                BodyConfig::new("saturn", [1944.2, 0.0], [0.0, -10.18], 0.0002857, 4.0, [102, 102, 0]),
                BodyConfig::new("uranus", [3940.3, 0.0], [0.0, -7.11], 0.00004364, 4.0, [102, 255, 170]),
                BodyConfig::new("neptune", [6388.5, 0.0], [0.0, -5.5], 0.00005149, 4.0, [0, 0, 255]),
            ],
            Preset::Triple => vec![
                BodyConfig::new("primary", [0.0, 0.0], [0.0, 6.65], 9.9, 10.0, [255, 0, 0]),
                BodyConfig::new("far", [-1400.0, 0.0], [0.0, -59.85], 1.1, 5.0, [0, 255, 0]),
                BodyConfig::new("near", [-500.0, 0.0], [0.0, -36.79], 1.3, 5.0, [0, 0, 255]),
            ],
        }
    }
}
