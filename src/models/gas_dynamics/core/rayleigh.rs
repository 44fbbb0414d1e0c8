//! Rayleigh flow solver.
//!
//! Like Fanno flow, each ratio is inverted on the subsonic and supersonic
//! brackets separately. The static temperature ratio is the exception on the
//! subsonic side: it peaks at `M = 1/sqrt(gamma)`, so its subsonic search
//! stops there and only the root on the rising segment is reported.

use crate::support::{
    flow_relations::{Relation, rayleigh},
    mach_solver::Bracket,
};

use super::{
    Domain, FlowConfig, FlowError, FlowRegime, MachBranch, RatioSet, SolverResult,
    search::Target,
};

const REGIME: FlowRegime = FlowRegime::Rayleigh;

const RATIOS: &[(&str, Relation)] = &[
    ("P_Pstar", rayleigh::pressure_ratio),
    ("rho_rhostar", rayleigh::density_ratio),
    ("T_Tstar", rayleigh::temperature_ratio),
    ("u_ustar", rayleigh::velocity_ratio),
    ("Pt_Ptstar", rayleigh::stagnation_pressure_ratio),
    ("Tt_Ttstar", rayleigh::stagnation_temperature_ratio),
];

/// The known ratio of a Rayleigh query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Mach,
    PressureRatio,
    DensityRatio,
    TemperatureRatio,
    VelocityRatio,
    StagnationPressureRatio,
    StagnationTemperatureRatio,
}

impl Input {
    const SUPPORTED: &'static [&'static str] = &[
        "M",
        "P_Pstar",
        "rho_rhostar",
        "T_Tstar",
        "u_ustar",
        "Pt_Ptstar",
        "Tt_Ttstar",
    ];

    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "M" => Input::Mach,
            "P_Pstar" => Input::PressureRatio,
            "rho_rhostar" => Input::DensityRatio,
            "T_Tstar" => Input::TemperatureRatio,
            "u_ustar" => Input::VelocityRatio,
            "Pt_Ptstar" => Input::StagnationPressureRatio,
            "Tt_Ttstar" => Input::StagnationTemperatureRatio,
            _ => return None,
        })
    }

    fn domain(self, gamma: f64, config: &FlowConfig) -> Domain {
        match self {
            Input::Mach => config.mach_domain(REGIME),
            Input::PressureRatio => Domain::open(0.0, rayleigh::max_pressure_ratio(gamma)),
            Input::DensityRatio => Domain::above(rayleigh::min_density_ratio(gamma)),
            Input::TemperatureRatio => {
                Domain::upper_closed(0.0, rayleigh::peak_temperature_ratio(gamma))
            }
            Input::VelocityRatio => Domain::open(0.0, rayleigh::max_velocity_ratio(gamma)),
            Input::StagnationPressureRatio => Domain::at_least(1.0),
            Input::StagnationTemperatureRatio => Domain::upper_closed(0.0, 1.0),
        }
    }

    fn relation(self) -> Relation {
        match self {
            Input::Mach => |mach, _| mach,
            Input::PressureRatio => rayleigh::pressure_ratio,
            Input::DensityRatio => rayleigh::density_ratio,
            Input::TemperatureRatio => rayleigh::temperature_ratio,
            Input::VelocityRatio => rayleigh::velocity_ratio,
            Input::StagnationPressureRatio => rayleigh::stagnation_pressure_ratio,
            Input::StagnationTemperatureRatio => rayleigh::stagnation_temperature_ratio,
        }
    }

    /// The subsonic search bracket, cut at the temperature peak for `T_Tstar`.
    fn subsonic_bracket(self, gamma: f64, config: &FlowConfig) -> Bracket {
        match self {
            Input::TemperatureRatio => {
                Bracket::new(config.sonic_margin, rayleigh::peak_temperature_mach(gamma))
            }
            _ => config.subsonic(),
        }
    }
}

/// Solves a Rayleigh flow state from one known ratio.
///
/// Subsonic `T_Tstar` rises to its peak at `M = 1/sqrt(gamma)` and falls back
/// to one at the sonic point, so a value between one and the peak has two
/// subsonic roots. Only the root below the peak is reported; the one on the
/// cooling segment `(1/sqrt(gamma), 1)` is not.
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
        // The peak value itself sits on the bracket edge and may miss it by rounding.
        Input::TemperatureRatio if target.value >= rayleigh::peak_temperature_ratio(gamma) => {
            vec![rayleigh::peak_temperature_mach(gamma)]
        }
        _ => {
            let relation = input.relation();
            target.find_machs(
                |mach| relation(mach, gamma),
                [
                    input.subsonic_bracket(gamma, config),
                    config.supersonic(REGIME),
                ],
                &config.solver,
            )?
        }
    };

    Ok(machs.into_iter().fold(SolverResult::new(REGIME), |result, mach| {
        result.with_branch(MachBranch::from_mach(mach), ratio_set(mach, gamma))
    }))
}

/// Evaluates every Rayleigh ratio at `mach`.
pub(super) fn ratio_set(mach: f64, gamma: f64) -> RatioSet {
    RatioSet::evaluate("M", mach, gamma, RATIOS)
}
