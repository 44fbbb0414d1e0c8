//! Fanno flow solver.
//!
//! Every Fanno ratio turns at the sonic point, so a ratio is inverted on the
//! subsonic and supersonic brackets separately. A branch whose bracket does
//! not reach the target is left out of the result.

use crate::support::flow_relations::{Relation, fanno};

use super::{
    Domain, FlowConfig, FlowError, FlowRegime, MachBranch, RatioSet, SolverResult,
    search::Target,
};

const REGIME: FlowRegime = FlowRegime::Fanno;

const RATIOS: &[(&str, Relation)] = &[
    ("P_Pstar", fanno::pressure_ratio),
    ("rho_rhostar", fanno::density_ratio),
    ("T_Tstar", fanno::temperature_ratio),
    ("u_ustar", fanno::velocity_ratio),
    ("Pt_Ptstar", fanno::stagnation_pressure_ratio),
    ("Tt_Ttstar", fanno::stagnation_temperature_ratio),
    ("rhot_rhotstar", fanno::stagnation_density_ratio),
    ("cfLstar_D", fanno::friction_parameter),
];

/// The known ratio of a Fanno query.
///
/// `Tt_Ttstar` is reported but not accepted: it is one everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Mach,
    PressureRatio,
    DensityRatio,
    TemperatureRatio,
    VelocityRatio,
    StagnationPressureRatio,
    StagnationDensityRatio,
    FrictionParameter,
}

impl Input {
    const SUPPORTED: &'static [&'static str] = &[
        "M",
        "P_Pstar",
        "rho_rhostar",
        "T_Tstar",
        "u_ustar",
        "Pt_Ptstar",
        "rhot_rhotstar",
        "cfLstar_D",
    ];

    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "M" => Input::Mach,
            "P_Pstar" => Input::PressureRatio,
            "rho_rhostar" => Input::DensityRatio,
            "T_Tstar" => Input::TemperatureRatio,
            "u_ustar" => Input::VelocityRatio,
            "Pt_Ptstar" => Input::StagnationPressureRatio,
            "rhot_rhotstar" => Input::StagnationDensityRatio,
            "cfLstar_D" => Input::FrictionParameter,
            _ => return None,
        })
    }

    fn domain(self, gamma: f64, config: &FlowConfig) -> Domain {
        match self {
            Input::Mach => config.mach_domain(REGIME),
            Input::PressureRatio | Input::FrictionParameter => Domain::above(0.0),
            Input::DensityRatio => Domain::above(fanno::min_density_ratio(gamma)),
            Input::TemperatureRatio => Domain::open(0.0, fanno::max_temperature_ratio(gamma)),
            Input::VelocityRatio => Domain::open(0.0, fanno::max_velocity_ratio(gamma)),
            Input::StagnationPressureRatio | Input::StagnationDensityRatio => Domain::at_least(1.0),
        }
    }

    fn relation(self) -> Relation {
        match self {
            Input::Mach => |mach, _| mach,
            Input::PressureRatio => fanno::pressure_ratio,
            Input::DensityRatio => fanno::density_ratio,
            Input::TemperatureRatio => fanno::temperature_ratio,
            Input::VelocityRatio => fanno::velocity_ratio,
            Input::StagnationPressureRatio => fanno::stagnation_pressure_ratio,
            Input::StagnationDensityRatio => fanno::stagnation_density_ratio,
            Input::FrictionParameter => fanno::friction_parameter,
        }
    }
}

/// Solves a Fanno flow state from one known ratio.
pub(super) fn solve(
    target: &Target<'_>,
    gamma: f64,
    config: &FlowConfig,
) -> Result<SolverResult, FlowError> {
    let input =
        Input::parse(target.input_var).ok_or_else(|| target.unknown_variable(Input::SUPPORTED))?;
    target.check(input.domain(gamma, config))?;

    let machs = match input {
        Input::Mach => vec![target.value],
        _ => {
            let relation = input.relation();
            target.find_machs(
                |mach| relation(mach, gamma),
                [config.subsonic(), config.supersonic(REGIME)],
                &config.solver,
            )?
        }
    };

    Ok(machs.into_iter().fold(SolverResult::new(REGIME), |result, mach| {
        result.with_branch(MachBranch::from_mach(mach), ratio_set(mach, gamma))
    }))
}

/// Evaluates every Fanno ratio at `mach`.
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
    fn friction_parameter_has_two_branches() {
        let result = query("cfLstar_D", 0.3).unwrap();

        let sub = result.branch(MachBranch::Subsonic).unwrap();
        let sup = result.branch(MachBranch::Supersonic).unwrap();
        assert!(sub.mach() < 1.0 && sup.mach() > 1.0);
        assert_relative_eq!(sub.get("cfLstar_D").unwrap(), 0.3, max_relative = 1e-9);
        assert_relative_eq!(sup.get("cfLstar_D").unwrap(), 0.3, max_relative = 1e-9);
    }

    #[test]
    fn long_duct_is_subsonic_only() {
        // Supersonic inlets choke within cfLstar_D ~ 0.82 in air.
        let result = query("cfLstar_D", 2.0).unwrap();
        assert!(result.contains(MachBranch::Subsonic));
        assert!(!result.contains(MachBranch::Supersonic));
    }

    #[test]
    fn sonic_pressure_is_the_sonic_point() {
        let result = query("P_Pstar", 1.0).unwrap();
        assert_eq!(result.machs(), [1.0]);
        assert!(result.contains(MachBranch::Supersonic));
    }

    #[test]
    fn sonic_stagnation_ratios_are_the_sonic_point() {
        for input_var in ["u_ustar", "Pt_Ptstar", "rhot_rhotstar"] {
            let result = query(input_var, 1.0).unwrap();
            assert_eq!(result.machs(), [1.0], "{input_var}");
        }
    }

    #[test]
    fn mach_input_is_bounded_by_the_search_range() {
        for mach in [1e-200, 1e200] {
            assert!(
                matches!(query("M", mach), Err(FlowError::DomainViolation { .. })),
                "M = {mach} should be rejected"
            );
        }

        let config = FlowConfig::default();
        for mach in [config.sonic_margin, config.max_mach.fanno] {
            let result = query("M", mach).unwrap();
            let ratios = result.branch(MachBranch::from_mach(mach)).unwrap();
            assert!(ratios.iter().all(|(_, value)| value.is_finite()), "M = {mach}");
        }
    }

    #[test]
    fn stagnation_temperature_is_not_invertible() {
        assert!(matches!(
            query("Tt_Ttstar", 1.0),
            Err(FlowError::UnknownVariable { .. })
        ));
    }

    #[test]
    fn rejects_out_of_domain_values() {
        for (input_var, value) in [
            ("cfLstar_D", 0.0),
            ("Pt_Ptstar", 0.9),
            ("T_Tstar", 1.3),
            ("u_ustar", 2.5),
            ("rho_rhostar", 0.3),
        ] {
            assert!(
                matches!(query(input_var, value), Err(FlowError::DomainViolation { .. })),
                "{input_var} = {value} should be rejected"
            );
        }
    }
}
