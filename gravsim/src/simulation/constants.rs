//! Physical constants and unit conversion factors
//!
//! Scenario inputs are given in solar radii, km/s and solar masses;
//! everything past [`Body::from_solar_units`](super::states::Body::from_solar_units)
//! is SI

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67e-11;

/// Solar mass (kg)
pub const M_SUN: f64 = 2e30;

/// Solar radius (m)
pub const R_SUN: f64 = 6.957e8;

/// One kilometre (m)
pub const KM: f64 = 1.0e3;

/// One day (s)
pub const DAY: f64 = 24.0 * 60.0 * 60.0;

/// One Julian year (s)
pub const YEAR: f64 = 365.25 * DAY;
