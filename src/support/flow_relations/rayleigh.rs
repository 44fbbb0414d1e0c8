//! Rayleigh flow relations: frictionless constant-area flow with heat transfer.
//!
//! Ratios are taken against the sonic (`*`) state reached by adding exactly
//! enough heat to choke the flow. Heat addition drives both subsonic and
//! supersonic flow toward `M = 1`; the amount added is implicit in `Tt/Tt*`.

use super::stagnation_factor;

/// Returns `1 + gamma M²`, the momentum factor shared by all Rayleigh relations.
#[inline]
fn momentum_factor(mach: f64, gamma: f64) -> f64 {
    1.0 + gamma * mach * mach
}

/// Static pressure ratio `P/P*`.
#[must_use]
pub fn pressure_ratio(mach: f64, gamma: f64) -> f64 {
    (gamma + 1.0) / momentum_factor(mach, gamma)
}

/// Density ratio `rho/rho*`.
#[must_use]
pub fn density_ratio(mach: f64, gamma: f64) -> f64 {
    velocity_ratio(mach, gamma).recip()
}

/// Static temperature ratio `T/T*`.
///
/// Not monotonic on the subsonic side: it peaks at
/// [`peak_temperature_mach`] before falling back to one at `M = 1`.
#[must_use]
pub fn temperature_ratio(mach: f64, gamma: f64) -> f64 {
    let pm = mach * pressure_ratio(mach, gamma);
    pm * pm
}

/// Velocity ratio `u/u*`.
#[must_use]
pub fn velocity_ratio(mach: f64, gamma: f64) -> f64 {
    (gamma + 1.0) * mach * mach / momentum_factor(mach, gamma)
}

/// Stagnation pressure ratio `Pt/Pt*`.
#[must_use]
pub fn stagnation_pressure_ratio(mach: f64, gamma: f64) -> f64 {
    let recovery = 2.0 / (gamma + 1.0) * stagnation_factor(mach, gamma);
    pressure_ratio(mach, gamma) * recovery.powf(gamma / (gamma - 1.0))
}

/// Stagnation temperature ratio `Tt/Tt*`.
#[must_use]
pub fn stagnation_temperature_ratio(mach: f64, gamma: f64) -> f64 {
    let m2 = mach * mach;
    2.0 * (gamma + 1.0) * m2 * stagnation_factor(mach, gamma) / momentum_factor(mach, gamma).powi(2)
}

/// Mach number of maximum static temperature, `1 / sqrt(gamma)`.
#[must_use]
pub fn peak_temperature_mach(gamma: f64) -> f64 {
    gamma.sqrt().recip()
}

/// Maximum of `T/T*`, reached at [`peak_temperature_mach`].
#[must_use]
pub fn peak_temperature_ratio(gamma: f64) -> f64 {
    (gamma + 1.0).powi(2) / (4.0 * gamma)
}

/// Upper limit of `P/P*`, reached as `M` tends to zero.
#[must_use]
pub fn max_pressure_ratio(gamma: f64) -> f64 {
    gamma + 1.0
}

/// Upper limit of `u/u*` as `M` tends to infinity.
#[must_use]
pub fn max_velocity_ratio(gamma: f64) -> f64 {
    (gamma + 1.0) / gamma
}

/// Lower limit of `rho/rho*` as `M` tends to infinity.
#[must_use]
pub fn min_density_ratio(gamma: f64) -> f64 {
    max_velocity_ratio(gamma).recip()
}

/// Upper limit of subsonic `Pt/Pt*`, reached as `M` tends to zero.
#[must_use]
pub fn max_subsonic_stagnation_pressure_ratio(gamma: f64) -> f64 {
    (gamma + 1.0) * (2.0 / (gamma + 1.0)).powf(gamma / (gamma - 1.0))
}

/// Lower limit of supersonic `Tt/Tt*` as `M` tends to infinity.
#[must_use]
pub fn min_supersonic_stagnation_temperature_ratio(gamma: f64) -> f64 {
    (gamma * gamma - 1.0) / (gamma * gamma)
}
