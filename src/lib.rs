//! # Twine Compressible
//!
//! Compressible flow models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given one known dimensionless ratio of isentropic, normal shock, Fanno, or
//! Rayleigh flow, the models recover the consistent Mach number(s) and report
//! every other ratio of that flow state.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and their solve functions.
//! - [`support`]: Supporting utilities used by models, including the closed-form
//!   relation library and the bracketed Mach solver.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it's useful across models or outside this crate.

pub mod models;
pub mod support;
