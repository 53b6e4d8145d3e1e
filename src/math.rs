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
use crate::err::ColourError;
use crate::matrix::{Matrix3d, Vector3d};
use crate::nd_array::ColourArray;
use pxfm::f_pow;

/// Safe power: `sign(x) * |x|^p`.
///
/// Keeps the sign of negative values through fractional exponents where an
/// ordinary power would produce NaN.
#[inline]
pub fn spow(x: f64, p: f64) -> f64 {
    f_pow(x.abs(), p).copysign(x)
}

impl ColourArray {
    /// Element-wise [spow]
    pub fn spow(&self, p: f64) -> ColourArray {
        self.map(|x| spow(x, p))
    }
}

/// Multiplies every trailing 3-vector of `v` by `m`
pub fn vector_dot(m: &Matrix3d, v: &ColourArray) -> Result<ColourArray, ColourError> {
    v.map_triplets(|t| m.mul_vector_fused(Vector3d { v: t }).v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spow_keeps_sign() {
        assert!((spow(2., 2.) - 4.).abs() < 1e-12);
        assert!((spow(-8., 1. / 3.) + 2.).abs() < 1e-12);
        assert!((spow(0.25, 0.5) - 0.25f64.powf(0.5)).abs() < 1e-15);
        assert_eq!(spow(0., 0.43), 0.);
        assert!(!spow(-0.5, 0.43).is_nan());
    }

    #[test]
    fn vector_dot_broadcasts() {
        let m = Matrix3d::new([[1., 0., 0.], [0., 2., 0.], [0., 0., 3.]]);
        let v = ColourArray::new(vec![2, 1, 3], vec![1., 1., 1., 2., 2., 2.]).unwrap();
        let r = vector_dot(&m, &v).unwrap();
        assert_eq!(r.shape(), &[2, 1, 3]);
        assert_eq!(r.data(), &[1., 2., 3., 2., 4., 6.]);
        assert!(vector_dot(&m, &ColourArray::from_slice(&[1., 2.])).is_err());
    }
}
