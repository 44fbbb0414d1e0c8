//! Closed-form compressible flow relations.
//!
//! Each submodule collects the algebraic relations of one flow regime as pure
//! functions of the Mach number and the heat capacity ratio `gamma`:
//!
//! - [`isentropic`]: Static-to-stagnation and static-to-sonic ratios,
//!   area ratio, and the Prandtl-Meyer and Mach angles.
//! - [`normal_shock`]: Jump conditions across a stationary normal shock.
//! - [`fanno`]: Adiabatic constant-area flow with wall friction.
//! - [`rayleigh`]: Frictionless constant-area flow with heat addition.
//!
//! Ratios carrying a `*` reference are normalized by the sonic state reached
//! along the same process, so every one of them equals exactly 1 at `M = 1`.
//!
//! The relations do not validate their inputs. Outside a relation's physical
//! domain they produce non-finite or meaningless values, so callers check the
//! domain first (as the [`gas_dynamics`](crate::models::gas_dynamics) models do).
//!
//! # Example
//!
//! ```
//! use twine_compressible::support::flow_relations::{isentropic, normal_shock};
//!
//! let gamma = 1.4;
//! assert!((isentropic::area_ratio(2.0, gamma) - 1.6875).abs() < 1e-12);
//! assert!((normal_shock::pressure_ratio(2.0, gamma) - 4.5).abs() < 1e-12);
//! ```

pub mod fanno;
pub mod isentropic;
pub mod normal_shock;
pub mod rayleigh;

/// A ratio expressed as a function of `(mach, gamma)`.
pub type Relation = fn(f64, f64) -> f64;

/// Returns `1 + (gamma - 1) / 2 * M²`, the stagnation-to-static temperature ratio.
///
/// Nearly every relation in this module is built from this factor.
#[inline]
pub(crate) fn stagnation_factor(mach: f64, gamma: f64) -> f64 {
    1.0 + 0.5 * (gamma - 1.0) * mach * mach
}
