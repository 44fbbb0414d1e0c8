//! Normal shock solver.
//!
//! A normal shock only forms in supersonic flow, so every input is inverted
//! for the upstream Mach number `M1` over the supersonic bracket alone and the
//! result has a single [`MachBranch::Normal`] branch.

use crate::support::flow_relations::{Relation, isentropic, normal_shock};

use super::{
    Domain, FlowConfig, FlowError, FlowRegime, MachBranch, RatioSet, SolverResult,
    search::Target,
};

const REGIME: FlowRegime = FlowRegime::NormalShock;

/// Ratios reported for the shock, after `M1`.
const RATIOS: &[(&str, Relation)] = &[
    ("M2", normal_shock::downstream_mach),
    ("P2_P1", normal_shock::pressure_ratio),
    ("rho2_rho1", normal_shock::density_ratio),
    ("T2_T1", normal_shock::temperature_ratio),
    ("Tt2_Tt1", stagnation_temperature_ratio),
    ("Pt2_Pt1", normal_shock::stagnation_pressure_ratio),
    ("Pt1_P1", normal_shock::upstream_stagnation_pressure_ratio),
    ("P1_Pt2", normal_shock::pitot_pressure_ratio),
];

/// `Tt2/Tt1`, identically one across an adiabatic shock.
fn stagnation_temperature_ratio(_mach: f64, _gamma: f64) -> f64 {
    1.0
}

/// The known quantity of a normal shock query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    UpstreamMach,
    DownstreamMach,
    StagnationPressureRatio,
    PressureRatio,
    TemperatureRatio,
    DensityRatio,
    UpstreamStagnationPressureRatio,
    PitotPressureRatio,
}

impl Input {
    const SUPPORTED: &'static [&'static str] = &[
        "M", "M1", "M2", "Pt2_Pt1", "P2_P1", "T2_T1", "rho2_rho1", "Pt1_P1", "P1_Pt2",
    ];

    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "M" | "M1" => Input::UpstreamMach,
            "M2" => Input::DownstreamMach,
            "Pt2_Pt1" => Input::StagnationPressureRatio,
            "P2_P1" => Input::PressureRatio,
            "T2_T1" => Input::TemperatureRatio,
            "rho2_rho1" => Input::DensityRatio,
            "Pt1_P1" => Input::UpstreamStagnationPressureRatio,
            "P1_Pt2" => Input::PitotPressureRatio,
            _ => return None,
        })
    }

    fn domain(self, gamma: f64, config: &FlowConfig) -> Domain {
        match self {
            Input::UpstreamMach => Domain::upper_closed(1.0, config.max_mach.get(REGIME)),
            Input::PressureRatio | Input::TemperatureRatio => Domain::above(1.0),
            Input::DownstreamMach => Domain::open(normal_shock::min_downstream_mach(gamma), 1.0),
            Input::StagnationPressureRatio => Domain::open(0.0, 1.0),
            Input::DensityRatio => Domain::open(1.0, normal_shock::max_density_ratio(gamma)),
            Input::UpstreamStagnationPressureRatio => {
                Domain::above(isentropic::critical_pressure_ratio(gamma).recip())
            }
            Input::PitotPressureRatio => {
                Domain::open(0.0, isentropic::critical_pressure_ratio(gamma))
            }
        }
    }

    fn relation(self) -> Relation {
        match self {
            Input::UpstreamMach => |mach, _| mach,
            Input::DownstreamMach => normal_shock::downstream_mach,
            Input::StagnationPressureRatio => normal_shock::stagnation_pressure_ratio,
            Input::PressureRatio => normal_shock::pressure_ratio,
            Input::TemperatureRatio => normal_shock::temperature_ratio,
            Input::DensityRatio => normal_shock::density_ratio,
            Input::UpstreamStagnationPressureRatio => {
                normal_shock::upstream_stagnation_pressure_ratio
            }
            Input::PitotPressureRatio => normal_shock::pitot_pressure_ratio,
        }
    }
}

/// Solves a normal shock from one known quantity.
///
/// `M` (or `M1`) is the upstream Mach number and is used as given.
pub(super) fn solve(
    target: &Target<'_>,
    gamma: f64,
    config: &FlowConfig,
) -> Result<SolverResult, FlowError> {
    let input =
        Input::parse(target.input_var).ok_or_else(|| target.unknown_variable(Input::SUPPORTED))?;
    target.check(input.domain(gamma, config))?;

    let mach = match input {
        Input::UpstreamMach => target.value,
        _ => {
            let relation = input.relation();
            target.find_mach(
                |mach| relation(mach, gamma),
                config.supersonic(REGIME),
                &config.solver,
            )?
        }
    };

    Ok(SolverResult::new(REGIME).with_branch(MachBranch::Normal, ratio_set(mach, gamma)))
}

/// Evaluates every normal shock ratio at upstream Mach number `mach`.
pub(super) fn ratio_set(mach: f64, gamma: f64) -> RatioSet {
    RatioSet::evaluate("M1", mach, gamma, RATIOS)
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
    fn mach_two_table_values() {
        let result = query("M", 2.0).unwrap();
        let ratios = result.branch(MachBranch::Normal).unwrap();

        assert_eq!(result.len(), 1);
        assert_relative_eq!(ratios.get("M2").unwrap(), 0.5774, epsilon = 1e-3);
        assert_relative_eq!(ratios.get("P2_P1").unwrap(), 4.5, epsilon = 1e-3);
        assert_relative_eq!(ratios.get("rho2_rho1").unwrap(), 2.6667, epsilon = 1e-3);
        assert_relative_eq!(ratios.get("Pt2_Pt1").unwrap(), 0.7209, epsilon = 1e-3);
        assert_eq!(ratios.get("Tt2_Tt1"), Some(1.0));
    }

    #[test]
    fn upstream_alias() {
        assert_eq!(query("M1", 3.0).unwrap(), query("M", 3.0).unwrap());
    }

    #[test]
    fn inverts_downstream_quantities() {
        for (input_var, value) in [
            ("M2", 0.577_350_269_189_625_8),
            ("P2_P1", 4.5),
            ("rho2_rho1", 8.0 / 3.0),
            ("T2_T1", 1.6875),
        ] {
            let result = query(input_var, value).unwrap();
            assert_relative_eq!(result.machs()[0], 2.0, max_relative = 1e-8);
        }
    }

    #[test]
    fn rejects_out_of_domain_values() {
        for (input_var, value) in [
            ("M", 0.8),
            ("M2", 1.2),
            ("M2", 0.3),
            ("Pt2_Pt1", 1.0),
            ("P2_P1", 0.9),
            ("rho2_rho1", 6.5),
            ("Pt1_P1", 1.5),
            ("P1_Pt2", 0.6),
        ] {
            assert!(
                matches!(query(input_var, value), Err(FlowError::DomainViolation { .. })),
                "{input_var} = {value} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_variable() {
        assert!(matches!(
            query("A_Astar", 2.0),
            Err(FlowError::UnknownVariable { .. })
        ));
    }
}
