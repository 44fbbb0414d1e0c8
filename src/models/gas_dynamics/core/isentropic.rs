//! Isentropic flow solver.
//!
//! Most isentropic ratios are monotonic through the sonic point and give a
//! single root over the full Mach range; only the area ratio has a subsonic
//! and a supersonic solution.

use std::f64::consts::FRAC_PI_2;

use uom::si::angle::radian;

use crate::support::flow_relations::{Relation, isentropic};

use super::{
    Domain, FlowConfig, FlowError, FlowRegime, MachBranch, RatioSet, SolverResult,
    search::Target,
};

const REGIME: FlowRegime = FlowRegime::Isentropic;

/// Ratios reported for every isentropic branch, after `M`.
const RATIOS: &[(&str, Relation)] = &[
    ("A_Astar", isentropic::area_ratio),
    ("P_Pt", isentropic::pressure_ratio),
    ("P_Pstar", isentropic::sonic_pressure_ratio),
    ("rho_rhot", isentropic::density_ratio),
    ("rho_rhostar", isentropic::sonic_density_ratio),
    ("T_Tt", isentropic::temperature_ratio),
    ("T_Tstar", isentropic::sonic_temperature_ratio),
    ("nu", prandtl_meyer),
    ("mu", mach_angle),
];

/// Prandtl-Meyer angle in radians.
fn prandtl_meyer(mach: f64, gamma: f64) -> f64 {
    isentropic::prandtl_meyer_angle(mach, gamma).get::<radian>()
}

/// Mach angle in radians.
fn mach_angle(mach: f64, _gamma: f64) -> f64 {
    isentropic::mach_angle(mach).get::<radian>()
}

/// The known ratio of an isentropic query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Mach,
    AreaRatio,
    PressureRatio,
    SonicPressureRatio,
    DensityRatio,
    SonicDensityRatio,
    TemperatureRatio,
    SonicTemperatureRatio,
    PrandtlMeyerAngle,
    MachAngle,
}

impl Input {
    const SUPPORTED: &'static [&'static str] = &[
        "M",
        "A_Astar",
        "P_Pt",
        "P_Pstar",
        "rho_rhot",
        "rho_rhostar",
        "T_Tt",
        "T_Tstar",
        "nu",
        "mu",
    ];

    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "M" => Input::Mach,
            "A_Astar" => Input::AreaRatio,
            "P_Pt" => Input::PressureRatio,
            "P_Pstar" => Input::SonicPressureRatio,
            "rho_rhot" => Input::DensityRatio,
            "rho_rhostar" => Input::SonicDensityRatio,
            "T_Tt" => Input::TemperatureRatio,
            "T_Tstar" => Input::SonicTemperatureRatio,
            "nu" => Input::PrandtlMeyerAngle,
            "mu" => Input::MachAngle,
            _ => return None,
        })
    }

    fn domain(self, gamma: f64, config: &FlowConfig) -> Domain {
        match self {
            Input::Mach => config.mach_domain(REGIME),
            Input::AreaRatio => Domain::above(1.0),
            Input::PressureRatio | Input::DensityRatio | Input::TemperatureRatio => {
                Domain::open(0.0, 1.0)
            }
            Input::SonicPressureRatio => {
                Domain::open(0.0, isentropic::critical_pressure_ratio(gamma).recip())
            }
            Input::SonicDensityRatio => {
                Domain::open(0.0, isentropic::critical_density_ratio(gamma).recip())
            }
            Input::SonicTemperatureRatio => {
                Domain::open(0.0, isentropic::critical_temperature_ratio(gamma).recip())
            }
            Input::PrandtlMeyerAngle => Domain::open(
                0.0,
                isentropic::max_prandtl_meyer_angle(gamma).get::<radian>(),
            ),
            Input::MachAngle => Domain::upper_closed(0.0, FRAC_PI_2),
        }
    }

    fn relation(self) -> Relation {
        match self {
            Input::Mach => |mach, _| mach,
            Input::AreaRatio => isentropic::area_ratio,
            Input::PressureRatio => isentropic::pressure_ratio,
            Input::SonicPressureRatio => isentropic::sonic_pressure_ratio,
            Input::DensityRatio => isentropic::density_ratio,
            Input::SonicDensityRatio => isentropic::sonic_density_ratio,
            Input::TemperatureRatio => isentropic::temperature_ratio,
            Input::SonicTemperatureRatio => isentropic::sonic_temperature_ratio,
            Input::PrandtlMeyerAngle => prandtl_meyer,
            Input::MachAngle => mach_angle,
        }
    }
}

/// Solves an isentropic flow state from one known ratio.
///
/// - `M` is used as given.
/// - `A_Astar` is inverted on both sides of the sonic point.
/// - `nu` and `mu` (radians) exist only for `M >= 1`.
/// - The remaining ratios are monotonic in `M`; the root found decides the branch.
pub(super) fn solve(
    target: &Target<'_>,
    gamma: f64,
    config: &FlowConfig,
) -> Result<SolverResult, FlowError> {
    let input =
        Input::parse(target.input_var).ok_or_else(|| target.unknown_variable(Input::SUPPORTED))?;
    target.check(input.domain(gamma, config))?;

    let relation = input.relation();
    let equation = |mach| relation(mach, gamma);

    let machs = match input {
        Input::Mach => vec![target.value],
        Input::AreaRatio => target.find_machs(
            equation,
            [config.subsonic(), config.supersonic(REGIME)],
            &config.solver,
        )?,
        Input::PrandtlMeyerAngle | Input::MachAngle => {
            vec![target.find_mach(equation, config.from_sonic(REGIME), &config.solver)?]
        }
        _ => vec![target.find_mach(equation, config.full(REGIME), &config.solver)?],
    };

    Ok(machs.into_iter().fold(SolverResult::new(REGIME), |result, mach| {
        result.with_branch(MachBranch::from_mach(mach), ratio_set(mach, gamma))
    }))
}

/// Evaluates every isentropic ratio at `mach`.
pub(super) fn ratio_set(mach: f64, gamma: f64) -> RatioSet {
    RatioSet::evaluate("M", mach, gamma, RATIOS)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const AIR: f64 = 1.4;

    fn query(input_var: &str, value: f64) -> Result<SolverResult, FlowError> {
        let target = Target {
            regime: REGIME,
            input_var,
            value,
        };
        solve(&target, AIR, &FlowConfig::default())
    }

    #[test]
    fn mach_passes_through() {
        let result = query("M", 2.0).unwrap();
        let ratios = result.branch(MachBranch::Supersonic).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(ratios.mach(), 2.0);
        assert_relative_eq!(ratios.get("A_Astar").unwrap(), 1.6875, max_relative = 1e-12);
        assert_relative_eq!(ratios.get("mu").unwrap(), FRAC_PI_2 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn area_ratio_has_two_branches() {
        let result = query("A_Astar", 1.6875).unwrap();

        let sub = result.branch(MachBranch::Subsonic).unwrap();
        let sup = result.branch(MachBranch::Supersonic).unwrap();
        assert_relative_eq!(sub.mach(), 0.372_244_486, max_relative = 1e-8);
        assert_relative_eq!(sup.mach(), 2.0, max_relative = 1e-9);
    }

    #[test]
    fn stagnation_ratio_picks_its_branch() {
        let subsonic = query("P_Pt", 0.9).unwrap();
        assert!(subsonic.contains(MachBranch::Subsonic));
        assert_eq!(subsonic.len(), 1);

        let supersonic = query("P_Pt", 0.1).unwrap();
        assert!(supersonic.contains(MachBranch::Supersonic));
        assert_eq!(supersonic.len(), 1);
    }

    #[test]
    fn mach_angle_at_ninety_degrees_is_sonic() {
        let result = query("mu", FRAC_PI_2).unwrap();
        assert_eq!(result.machs(), [1.0]);
    }

    #[test]
    fn rejects_out_of_domain_values() {
        for (input_var, value) in [
            ("A_Astar", 0.5),
            ("A_Astar", 1.0),
            ("P_Pt", 1.2),
            ("T_Tstar", 1.3),
            ("nu", 2.5),
            ("mu", 2.0),
            ("M", -1.0),
            ("M", f64::NAN),
        ] {
            assert!(
                matches!(query(input_var, value), Err(FlowError::DomainViolation { .. })),
                "{input_var} = {value} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_variable() {
        let err = query("cfLstar_D", 0.3).unwrap_err();
        match err {
            FlowError::UnknownVariable { supported, .. } => {
                assert_eq!(supported, Input::SUPPORTED);
            }
            other => panic!("expected UnknownVariable, got {other:?}"),
        }
    }
}
