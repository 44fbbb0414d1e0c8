//! Supporting utilities used by the flow models.
//!
//! These modules are public because they're useful on their own (the relation
//! library in particular), but their APIs are not stable.

pub mod constraint;
pub mod flow_relations;
pub mod gas;
pub mod mach_solver;
