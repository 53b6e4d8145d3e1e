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
//! IPT colourspace (Ebner and Fairchild, 1998).
//!
//! Input tristimulus values are expected to be adapted to CIE Illuminant D65.
use crate::err::ColourError;
use crate::math::vector_dot;
use crate::matrix::Matrix3d;
use crate::nd_array::ColourArray;
use crate::scale::{from_range_1, from_range_degrees, to_domain_1};
use pxfm::f_atan2;

/// CIE XYZ to normalised cone responses
pub const MATRIX_IPT_XYZ_TO_LMS: Matrix3d = Matrix3d::new([
    [0.4002, 0.7075, -0.0807],
    [-0.2280, 1.1500, 0.0612],
    [0.0000, 0.0000, 0.9184],
]);

pub const MATRIX_IPT_LMS_TO_XYZ: Matrix3d = MATRIX_IPT_XYZ_TO_LMS.inverse_const();

/// Non-linear cone responses to IPT
pub const MATRIX_IPT_LMS_P_TO_IPT: Matrix3d = Matrix3d::new([
    [0.4000, 0.4000, 0.2000],
    [4.4550, -4.8510, 0.3960],
    [0.8056, 0.3572, -1.1628],
]);

pub const MATRIX_IPT_IPT_TO_LMS_P: Matrix3d = MATRIX_IPT_LMS_P_TO_IPT.inverse_const();

const IPT_EXPONENT: f64 = 0.43;

/// Converts CIE XYZ tristimulus values to IPT.
///
/// Domain and range are [0, 1] under both reference and `1` scales.
pub fn xyz_to_ipt(xyz: &ColourArray) -> Result<ColourArray, ColourError> {
    let xyz = to_domain_1(xyz.clone());
    let lms = vector_dot(&MATRIX_IPT_XYZ_TO_LMS, &xyz)?;
    let lms_p = lms.spow(IPT_EXPONENT);
    let ipt = vector_dot(&MATRIX_IPT_LMS_P_TO_IPT, &lms_p)?;
    Ok(from_range_1(ipt))
}

/// Converts IPT back to CIE XYZ tristimulus values
pub fn ipt_to_xyz(ipt: &ColourArray) -> Result<ColourArray, ColourError> {
    let ipt = to_domain_1(ipt.clone());
    let lms_p = vector_dot(&MATRIX_IPT_IPT_TO_LMS_P, &ipt)?;
    let lms = lms_p.spow(1. / IPT_EXPONENT);
    let xyz = vector_dot(&MATRIX_IPT_LMS_TO_XYZ, &lms)?;
    Ok(from_range_1(xyz))
}

/// Hue angle of IPT values in degrees, within [0, 360).
///
/// The trailing axis is consumed, so a `(n, 3)` input yields `(n,)` angles.
/// Achromatic values (`P == T == 0`) have a hue of 0.
pub fn ipt_hue_angle(ipt: &ColourArray) -> Result<ColourArray, ColourError> {
    let ipt = to_domain_1(ipt.clone());
    let hue = ipt.reduce_triplets(|[_, p, t]| {
        let h = f_atan2(t, p).to_degrees().rem_euclid(360.);
        // rem_euclid rounds tiny negative angles up to exactly 360
        if h >= 360. { 0. } else { h }
    })?;
    Ok(from_range_degrees(hue))
}
