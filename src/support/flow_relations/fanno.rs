//! Fanno flow relations: adiabatic flow in a constant-area duct with friction.
//!
//! Ratios are taken against the sonic (`*`) state the flow reaches at the end
//! of a duct of length `L*`. Friction drives subsonic and supersonic flow
//! toward `M = 1` alike.

use super::stagnation_factor;

/// Returns `T*/T`, the squared speed-of-sound ratio shared by all Fanno relations.
#[inline]
fn sonic_temperature_factor(mach: f64, gamma: f64) -> f64 {
    2.0 / (gamma + 1.0) * stagnation_factor(mach, gamma)
}

/// Static pressure ratio `P/P*`.
#[must_use]
pub fn pressure_ratio(mach: f64, gamma: f64) -> f64 {
    (mach * sonic_temperature_factor(mach, gamma).sqrt()).recip()
}

/// Density ratio `rho/rho*`.
#[must_use]
pub fn density_ratio(mach: f64, gamma: f64) -> f64 {
    sonic_temperature_factor(mach, gamma).sqrt() / mach
}

/// Static temperature ratio `T/T*`.
#[must_use]
pub fn temperature_ratio(mach: f64, gamma: f64) -> f64 {
    sonic_temperature_factor(mach, gamma).recip()
}

/// Velocity ratio `u/u*`.
#[must_use]
pub fn velocity_ratio(mach: f64, gamma: f64) -> f64 {
    mach / sonic_temperature_factor(mach, gamma).sqrt()
}

/// Stagnation pressure ratio `Pt/Pt*`.
///
/// Never below one: friction only ever lowers stagnation pressure on the way
/// to the sonic state.
#[must_use]
pub fn stagnation_pressure_ratio(mach: f64, gamma: f64) -> f64 {
    let exponent = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    sonic_temperature_factor(mach, gamma).powf(exponent) / mach
}

/// Stagnation temperature ratio `Tt/Tt*`, identically one in adiabatic flow.
#[must_use]
pub fn stagnation_temperature_ratio(_mach: f64, _gamma: f64) -> f64 {
    1.0
}

/// Stagnation density ratio `rhot/rhot*`.
///
/// Equal to [`stagnation_pressure_ratio`] because stagnation temperature is constant.
#[must_use]
pub fn stagnation_density_ratio(mach: f64, gamma: f64) -> f64 {
    stagnation_pressure_ratio(mach, gamma)
}

/// Friction parameter `4f L*/D` (Fanning friction factor `f`).
///
/// The duct length, in hydraulic diameters, that brings the flow to `M = 1`.
#[must_use]
pub fn friction_parameter(mach: f64, gamma: f64) -> f64 {
    let m2 = mach * mach;
    (1.0 - m2) / (gamma * m2)
        + (gamma + 1.0) / (2.0 * gamma) * (m2 / sonic_temperature_factor(mach, gamma)).ln()
}

/// Upper limit of the friction parameter for supersonic flow (`M` tending to infinity).
///
/// Supersonic Fanno flow chokes within a finite length; no supersonic inlet
/// supports a longer duct.
#[must_use]
pub fn max_supersonic_friction_parameter(gamma: f64) -> f64 {
    (gamma + 1.0) / (2.0 * gamma) * ((gamma + 1.0) / (gamma - 1.0)).ln() - gamma.recip()
}

/// Lower limit of `rho/rho*` as `M` tends to infinity.
#[must_use]
pub fn min_density_ratio(gamma: f64) -> f64 {
    ((gamma - 1.0) / (gamma + 1.0)).sqrt()
}

/// Upper limit of `T/T*`, reached as `M` tends to zero.
#[must_use]
pub fn max_temperature_ratio(gamma: f64) -> f64 {
    0.5 * (gamma + 1.0)
}

/// Upper limit of `u/u*` as `M` tends to infinity.
#[must_use]
pub fn max_velocity_ratio(gamma: f64) -> f64 {
    min_density_ratio(gamma).recip()
}
