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
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum ColourError {
    /// Requested method name is not registered for the function family
    InvalidMethod {
        method: String,
        valid: Vec<&'static str>,
    },
    /// Trailing axis does not hold the number of channels the transform needs
    ShapeMismatch { expected: usize, found: usize },
    /// Two arrays, or an array and its data, do not agree in shape
    IncompatibleShapes(Vec<usize>, Vec<usize>),
    /// Closed-form expression is undefined for the given inputs
    NumericDegeneracy(&'static str),
    InvalidDomainRangeScale(String),
    UnsupportedColourspace(String),
    UnsupportedIlluminant(String),
}

impl Display for ColourError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColourError::InvalidMethod { method, valid } => write!(
                f,
                "\"{}\" method is invalid, it must be one of {:?}!",
                method, valid
            ),
            ColourError::ShapeMismatch { expected, found } => write!(
                f,
                "Trailing axis must have {} components, but it has {}",
                expected, found
            ),
            ColourError::IncompatibleShapes(a, b) => {
                write!(f, "Shapes {:?} and {:?} are incompatible", a, b)
            }
            ColourError::NumericDegeneracy(what) => write!(f, "Numeric degeneracy: {}", what),
            ColourError::InvalidDomainRangeScale(scale) => write!(
                f,
                "\"{}\" scale is invalid, it must be one of [\"reference\", \"1\", \"100\", \"ignore\"]!",
                scale
            ),
            ColourError::UnsupportedColourspace(name) => {
                write!(f, "RGB colourspace \"{}\" is not registered", name)
            }
            ColourError::UnsupportedIlluminant(name) => {
                write!(f, "Illuminant \"{}\" is not registered", name)
            }
        }
    }
}

impl Error for ColourError {}
