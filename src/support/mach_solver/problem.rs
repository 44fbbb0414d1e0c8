//! Problem formulation for bracketed Mach inversion.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

/// A relation evaluated at one Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Sample {
    pub(super) mach: f64,
    pub(super) value: f64,
}

/// Model adapter exposing a plain `f(M)` relation with Mach as the sole input.
pub(super) struct RatioModel<'a, F> {
    relation: &'a F,
}

impl<'a, F> RatioModel<'a, F> {
    pub(super) fn new(relation: &'a F) -> Self {
        Self { relation }
    }
}

impl<F> Model for RatioModel<'_, F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = Sample;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(Sample {
            mach: *input,
            value: (self.relation)(*input),
        })
    }
}

/// Equation problem definition for Mach inversion.
///
/// Computes the residual as `value - target`.
pub(super) struct RatioProblem {
    target: f64,
}

impl RatioProblem {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for RatioProblem {
    type Input = f64;
    type Output = Sample;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.value - self.target])
    }
}
