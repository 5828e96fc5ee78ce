//! Piecewise-linear mapping from an input range to an output range
//!
//! An [`Interpolator`] holds ordered `(input, output)` breakpoints. Values
//! between two breakpoints are interpolated linearly; values outside the
//! declared input domain clamp to the first or last output, never extrapolate.

use serde::{Deserialize, Serialize};

use super::timing::{inverse_lerp, lerp};
use crate::error::{Error, Result};

/// Ordered breakpoints mapping an input domain onto output values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveSpec", into = "CurveSpec")]
pub struct Interpolator {
    input: Vec<f64>,
    output: Vec<f64>,
}

/// Serialized form: `{ input = [0.0, 0.5], output = [1.0, 0.0] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveSpec {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

impl Interpolator {
    /// Build from parallel input/output slices
    ///
    /// The input must hold at least two finite, non-decreasing values and
    /// have the same length as the output.
    pub fn new(input: &[f64], output: &[f64]) -> Result<Self> {
        if input.len() != output.len() {
            return Err(Error::InvalidCurve(format!(
                "input has {} breakpoints but output has {}",
                input.len(),
                output.len()
            )));
        }
        if input.len() < 2 {
            return Err(Error::InvalidCurve(
                "at least two breakpoints are required".to_string(),
            ));
        }
        if input.iter().chain(output).any(|v| !v.is_finite()) {
            return Err(Error::InvalidCurve("breakpoints must be finite".to_string()));
        }
        if input.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(Error::InvalidCurve(format!(
                "input breakpoints must be non-decreasing: {:?}",
                input
            )));
        }

        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
        })
    }

    /// Two-point mapping `[in_start, in_end] -> [out_start, out_end]`
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        Self::new(&[domain.0, domain.1], &[range.0, range.1])
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.input[0], self.input[self.input.len() - 1])
    }

    /// Map `value` through the breakpoints
    pub fn sample(&self, value: f64) -> f64 {
        let last = self.input.len() - 1;
        if value.is_nan() || value <= self.input[0] {
            return self.output[0];
        }
        if value >= self.input[last] {
            return self.output[last];
        }

        // First segment whose upper bound reaches the value
        let upper = self
            .input
            .iter()
            .position(|&bound| bound >= value)
            .unwrap_or(last);
        let lower = upper.saturating_sub(1);

        let t = inverse_lerp(self.input[lower], self.input[upper], value);
        lerp(self.output[lower], self.output[upper], t)
    }
}

impl TryFrom<CurveSpec> for Interpolator {
    type Error = Error;

    fn try_from(spec: CurveSpec) -> Result<Self> {
        Interpolator::new(&spec.input, &spec.output)
    }
}

impl From<Interpolator> for CurveSpec {
    fn from(curve: Interpolator) -> Self {
        CurveSpec {
            input: curve.input,
            output: curve.output,
        }
    }
}
