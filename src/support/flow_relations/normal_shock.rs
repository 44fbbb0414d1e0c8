//! Stationary normal shock relations.
//!
//! All functions take the upstream Mach number `M1` and are physical only for
//! `M1 >= 1`. Subscript 1 is the upstream state and subscript 2 the downstream
//! state. Stagnation temperature is conserved across the shock.

use super::{isentropic, stagnation_factor};

/// Downstream Mach number `M2`.
#[must_use]
pub fn downstream_mach(mach: f64, gamma: f64) -> f64 {
    let m2 = mach * mach;
    ((2.0 + (gamma - 1.0) * m2) / (2.0 * gamma * m2 - (gamma - 1.0))).sqrt()
}

/// Static pressure ratio `P2/P1`.
#[must_use]
pub fn pressure_ratio(mach: f64, gamma: f64) -> f64 {
    1.0 + 2.0 * gamma / (gamma + 1.0) * (mach * mach - 1.0)
}

/// Density ratio `rho2/rho1`, equal to the velocity ratio `u1/u2`.
#[must_use]
pub fn density_ratio(mach: f64, gamma: f64) -> f64 {
    let m2 = mach * mach;
    (gamma + 1.0) * m2 / ((gamma - 1.0) * m2 + 2.0)
}

/// Static temperature ratio `T2/T1`.
#[must_use]
pub fn temperature_ratio(mach: f64, gamma: f64) -> f64 {
    let m2 = mach * mach;
    (2.0 + (gamma - 1.0) * m2) * (2.0 * gamma * m2 - (gamma - 1.0))
        / ((gamma + 1.0).powi(2) * m2)
}

/// Stagnation pressure ratio `Pt2/Pt1`.
///
/// Always below one for `M1 > 1`; the loss measures the entropy generated by
/// the shock.
#[must_use]
pub fn stagnation_pressure_ratio(mach: f64, gamma: f64) -> f64 {
    let m2 = mach * mach;
    let compression = 0.5 * (gamma + 1.0) * m2 / stagnation_factor(mach, gamma);
    let jump = (2.0 * gamma * m2 - (gamma - 1.0)) / (gamma + 1.0);
    compression.powf(gamma / (gamma - 1.0)) * jump.powf(-1.0 / (gamma - 1.0))
}

/// Upstream stagnation-to-static pressure ratio `Pt1/P1`.
#[must_use]
pub fn upstream_stagnation_pressure_ratio(mach: f64, gamma: f64) -> f64 {
    isentropic::pressure_ratio(mach, gamma).recip()
}

/// Upstream static to downstream stagnation pressure ratio `P1/Pt2`.
///
/// This is what a pitot probe in supersonic flow measures against the
/// free-stream static pressure (Rayleigh pitot formula, inverted).
#[must_use]
pub fn pitot_pressure_ratio(mach: f64, gamma: f64) -> f64 {
    (stagnation_pressure_ratio(mach, gamma) * upstream_stagnation_pressure_ratio(mach, gamma))
        .recip()
}

/// Lower limit of `M2` as `M1` tends to infinity.
#[must_use]
pub fn min_downstream_mach(gamma: f64) -> f64 {
    ((gamma - 1.0) / (2.0 * gamma)).sqrt()
}

/// Upper limit of `rho2/rho1` as `M1` tends to infinity.
#[must_use]
pub fn max_density_ratio(gamma: f64) -> f64 {
    (gamma + 1.0) / (gamma - 1.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const AIR: f64 = 1.4;

    #[test]
    fn mach_two_in_air() {
        assert_relative_eq!(downstream_mach(2.0, AIR), 0.577_350_269, max_relative = 1e-8);
        assert_relative_eq!(pressure_ratio(2.0, AIR), 4.5, max_relative = 1e-12);
        assert_relative_eq!(density_ratio(2.0, AIR), 8.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(temperature_ratio(2.0, AIR), 1.6875, max_relative = 1e-12);
        assert_relative_eq!(
            stagnation_pressure_ratio(2.0, AIR),
            0.720_873_861,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            upstream_stagnation_pressure_ratio(2.0, AIR),
            7.824_449_067,
            max_relative = 1e-8
        );
        assert_relative_eq!(pitot_pressure_ratio(2.0, AIR), 0.177_291_108, max_relative = 1e-8);
    }

    #[test]
    fn state_equation_holds_across_shock() {
        // P2/P1 = (rho2/rho1) * (T2/T1) for a perfect gas.
        for gamma in [1.2, AIR, 5.0 / 3.0] {
            for mach in [1.1, 2.0, 4.5, 10.0] {
                assert_relative_eq!(
                    pressure_ratio(mach, gamma),
                    density_ratio(mach, gamma) * temperature_ratio(mach, gamma),
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn strong_shock_limits() {
        assert_relative_eq!(min_downstream_mach(AIR), 0.377_964_473, max_relative = 1e-8);
        assert_relative_eq!(max_density_ratio(AIR), 6.0, max_relative = 1e-12);
        assert_relative_eq!(
            downstream_mach(1e4, AIR),
            min_downstream_mach(AIR),
            max_relative = 1e-6
        );
    }
}
