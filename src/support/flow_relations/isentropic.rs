//! Isentropic flow relations.
//!
//! Static-to-stagnation ratios (`P/Pt`, `rho/rhot`, `T/Tt`) use the stagnation
//! state as reference. Static-to-sonic ratios (`P/P*`, `rho/rho*`, `T/T*`) use
//! the sonic state with the same stagnation conditions.

use std::f64::consts::FRAC_PI_2;

use uom::{
    ConstZero,
    si::{angle::radian, f64::Angle},
};

use super::stagnation_factor;

/// Area ratio `A/A*`, the flow area relative to the sonic throat area.
#[must_use]
pub fn area_ratio(mach: f64, gamma: f64) -> f64 {
    let exponent = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    (2.0 / (gamma + 1.0) * stagnation_factor(mach, gamma)).powf(exponent) / mach
}

/// Static-to-stagnation pressure ratio `P/Pt`.
#[must_use]
pub fn pressure_ratio(mach: f64, gamma: f64) -> f64 {
    stagnation_factor(mach, gamma).powf(-gamma / (gamma - 1.0))
}

/// Static-to-stagnation density ratio `rho/rhot`.
#[must_use]
pub fn density_ratio(mach: f64, gamma: f64) -> f64 {
    stagnation_factor(mach, gamma).powf(-1.0 / (gamma - 1.0))
}

/// Static-to-stagnation temperature ratio `T/Tt`.
#[must_use]
pub fn temperature_ratio(mach: f64, gamma: f64) -> f64 {
    stagnation_factor(mach, gamma).recip()
}

/// Static-to-sonic pressure ratio `P/P*`.
#[must_use]
pub fn sonic_pressure_ratio(mach: f64, gamma: f64) -> f64 {
    sonic_temperature_ratio(mach, gamma).powf(gamma / (gamma - 1.0))
}

/// Static-to-sonic density ratio `rho/rho*`.
#[must_use]
pub fn sonic_density_ratio(mach: f64, gamma: f64) -> f64 {
    sonic_temperature_ratio(mach, gamma).powf(1.0 / (gamma - 1.0))
}

/// Static-to-sonic temperature ratio `T/T*`.
#[must_use]
pub fn sonic_temperature_ratio(mach: f64, gamma: f64) -> f64 {
    stagnation_factor(1.0, gamma) / stagnation_factor(mach, gamma)
}

/// Sonic-to-stagnation pressure ratio `P*/Pt`.
///
/// This is the critical pressure ratio of a choked nozzle, about 0.528 for air.
#[must_use]
pub fn critical_pressure_ratio(gamma: f64) -> f64 {
    pressure_ratio(1.0, gamma)
}

/// Sonic-to-stagnation density ratio `rho*/rhot`.
#[must_use]
pub fn critical_density_ratio(gamma: f64) -> f64 {
    density_ratio(1.0, gamma)
}

/// Sonic-to-stagnation temperature ratio `T*/Tt`, equal to `2 / (gamma + 1)`.
#[must_use]
pub fn critical_temperature_ratio(gamma: f64) -> f64 {
    2.0 / (gamma + 1.0)
}

/// Prandtl-Meyer angle `nu(M)`.
///
/// The turning angle needed to expand a sonic stream isentropically to `M`.
/// Subsonic Mach numbers have no expansion fan, so they return zero.
#[must_use]
pub fn prandtl_meyer_angle(mach: f64, gamma: f64) -> Angle {
    if mach < 1.0 {
        return Angle::ZERO;
    }

    let k = (gamma + 1.0) / (gamma - 1.0);
    let beta = (mach * mach - 1.0).sqrt();
    Angle::new::<radian>(k.sqrt() * (beta / k.sqrt()).atan() - beta.atan())
}

/// Upper limit of the Prandtl-Meyer angle as `M` tends to infinity.
#[must_use]
pub fn max_prandtl_meyer_angle(gamma: f64) -> Angle {
    let k = (gamma + 1.0) / (gamma - 1.0);
    Angle::new::<radian>(FRAC_PI_2 * (k.sqrt() - 1.0))
}

/// Mach angle `mu(M) = asin(1/M)`.
///
/// Defined for `M >= 1`. Subsonic Mach numbers return zero.
#[must_use]
pub fn mach_angle(mach: f64) -> Angle {
    if mach < 1.0 {
        return Angle::ZERO;
    }
    Angle::new::<radian>(mach.recip().asin())
}
