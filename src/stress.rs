/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Standardized Residual Sum of Squares (STRESS) index.
use crate::err::ColourError;
use crate::method::{Method, validate_method};
use std::fmt::Display;
use std::str::FromStr;

/// STRESS index of Garcia et al. (2007).
///
/// `d_e` holds computed colour differences and `d_v` the visually assessed
/// ones. The result is 0 when both agree up to a positive scale factor.
pub fn index_stress_garcia2007(d_e: &[f64], d_v: &[f64]) -> Result<f64, ColourError> {
    if d_e.len() != d_v.len() {
        return Err(ColourError::IncompatibleShapes(
            vec![d_e.len()],
            vec![d_v.len()],
        ));
    }
    if d_e.is_empty() {
        return Err(ColourError::NumericDegeneracy(
            "colour difference arrays are empty",
        ));
    }

    let sum_e2: f64 = d_e.iter().map(|e| e * e).sum();
    let sum_ev: f64 = d_e.iter().zip(d_v.iter()).map(|(e, v)| e * v).sum();
    if sum_ev == 0. {
        tracing::warn!(n = d_e.len(), "STRESS scale factor denominator is zero");
        return Err(ColourError::NumericDegeneracy(
            "sum of d_E * d_V is zero, scale factor F1 is undefined",
        ));
    }
    let f_1 = sum_e2 / sum_ev;

    let residual: f64 = d_e
        .iter()
        .zip(d_v.iter())
        .map(|(e, v)| {
            let r = e - f_1 * v;
            r * r
        })
        .sum();
    let scaled: f64 = d_v.iter().map(|v| f_1 * f_1 * v * v).sum();
    if scaled == 0. {
        tracing::warn!(f_1, "STRESS normalisation term is zero");
        return Err(ColourError::NumericDegeneracy(
            "sum of (F1 * d_V)^2 is zero",
        ));
    }

    Ok((residual / scaled).sqrt())
}

/// Computation method of the STRESS index
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum StressMethod {
    #[default]
    Garcia2007,
}

impl Method for StressMethod {
    const ALL: &'static [Self] = &[StressMethod::Garcia2007];

    fn name(self) -> &'static str {
        match self {
            StressMethod::Garcia2007 => "Garcia 2007",
        }
    }
}

impl FromStr for StressMethod {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_method(s)
    }
}

impl Display for StressMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// STRESS index computed with `method`
pub fn index_stress(d_e: &[f64], d_v: &[f64], method: StressMethod) -> Result<f64, ColourError> {
    match method {
        StressMethod::Garcia2007 => index_stress_garcia2007(d_e, d_v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const D_E: [f64; 3] = [2.0425, 2.8615, 3.4412];
    const D_V: [f64; 3] = [1.2644, 1.2630, 1.8731];

    #[test]
    fn known_value() {
        let stress = index_stress(&D_E, &D_V, StressMethod::Garcia2007).unwrap();
        assert!((stress - 0.12117093936995721).abs() < 1e-12);
    }

    #[test]
    fn method_name_is_case_insensitive() {
        let method: StressMethod = "GARCIA 2007".parse().unwrap();
        let a = index_stress(&D_E, &D_V, method).unwrap();
        let b = index_stress_garcia2007(&D_E, &D_V).unwrap();
        assert_eq!(a, b);
        assert!(matches!(
            "Garcia 2008".parse::<StressMethod>(),
            Err(ColourError::InvalidMethod { .. })
        ));
    }

    #[test]
    fn self_agreement_is_zero() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let x: Vec<f64> = (0..16).map(|_| rng.random_range(0.1..10.0)).collect();
            assert_eq!(index_stress_garcia2007(&x, &x).unwrap(), 0.);
        }
    }

    #[test]
    fn invariant_under_positive_scaling() {
        let scaled: Vec<f64> = D_V.iter().map(|v| v * 3.5).collect();
        let a = index_stress_garcia2007(&D_E, &D_V).unwrap();
        let b = index_stress_garcia2007(&D_E, &scaled).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(matches!(
            index_stress_garcia2007(&[0., 0.], &[1., 2.]),
            Err(ColourError::NumericDegeneracy(_))
        ));
        assert!(matches!(
            index_stress_garcia2007(&[1., 2.], &[0., 0.]),
            Err(ColourError::NumericDegeneracy(_))
        ));
        assert!(matches!(
            index_stress_garcia2007(&[], &[]),
            Err(ColourError::NumericDegeneracy(_))
        ));
        assert!(matches!(
            index_stress_garcia2007(&[1., 2.], &[1.]),
            Err(ColourError::IncompatibleShapes(_, _))
        ));
    }
}
