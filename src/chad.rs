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
//! Chromatic adaptation transforms.
use crate::err::ColourError;
use crate::math::vector_dot;
use crate::matrix::{Matrix3d, Vector3d, Xyz};
use crate::method::{Method, validate_method};
use crate::nd_array::ColourArray;
use crate::scale::{
    DomainRangeScale, from_range_1, from_range_100, get_domain_range_scale, to_domain_1,
    to_domain_100,
};
use std::fmt::Display;
use std::str::FromStr;

pub const CAT_XYZ_SCALING: Matrix3d = Matrix3d::IDENTITY;

pub const CAT_VON_KRIES: Matrix3d = Matrix3d::new([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

pub const CAT_BRADFORD: Matrix3d = Matrix3d::new([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

pub const CAT_SHARP: Matrix3d = Matrix3d::new([
    [1.2694, -0.0988, -0.1706],
    [-0.8364, 1.8006, 0.0357],
    [0.0297, -0.0315, 1.0018],
]);

pub const CAT_FAIRCHILD: Matrix3d = Matrix3d::new([
    [0.8562, 0.3372, -0.1934],
    [-0.8360, 1.8327, 0.0033],
    [0.0357, -0.0469, 1.0112],
]);

pub const CAT_CMCCAT97: Matrix3d = Matrix3d::new([
    [0.8951, -0.7502, 0.0389],
    [0.2664, 1.7135, 0.0685],
    [-0.1614, 0.0367, 1.0296],
]);

pub const CAT_CMCCAT2000: Matrix3d = Matrix3d::new([
    [0.7982, 0.3389, -0.1371],
    [-0.5918, 1.5512, 0.0406],
    [0.0008, 0.0239, 0.9753],
]);

pub const CAT_CAT02: Matrix3d = Matrix3d::new([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

pub const CAT_CAT02_BRILL2008: Matrix3d = Matrix3d::new([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0000, 0.0000, 1.0000],
]);

pub const CAT_CAT16: Matrix3d = Matrix3d::new([
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
]);

pub const CAT_BIANCO2010: Matrix3d = Matrix3d::new([
    [0.8752, 0.2787, -0.1539],
    [-0.8904, 1.8709, 0.0195],
    [-0.0061, 0.0162, 0.9899],
]);

pub const CAT_PC_BIANCO2010: Matrix3d = Matrix3d::new([
    [0.6489, 0.3915, -0.0404],
    [-0.3775, 1.3055, 0.0720],
    [-0.0271, 0.0888, 0.9383],
]);

/// Cone response model used to adapt between whitepoints
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ChromaticAdaptationTransform {
    XyzScaling,
    VonKries,
    Bradford,
    Sharp,
    Fairchild,
    Cmccat97,
    Cmccat2000,
    #[default]
    Cat02,
    Cat02Brill2008,
    Cat16,
    Bianco2010,
    BiancoPc2010,
}

impl Method for ChromaticAdaptationTransform {
    const ALL: &'static [Self] = &[
        ChromaticAdaptationTransform::XyzScaling,
        ChromaticAdaptationTransform::VonKries,
        ChromaticAdaptationTransform::Bradford,
        ChromaticAdaptationTransform::Sharp,
        ChromaticAdaptationTransform::Fairchild,
        ChromaticAdaptationTransform::Cmccat97,
        ChromaticAdaptationTransform::Cmccat2000,
        ChromaticAdaptationTransform::Cat02,
        ChromaticAdaptationTransform::Cat02Brill2008,
        ChromaticAdaptationTransform::Cat16,
        ChromaticAdaptationTransform::Bianco2010,
        ChromaticAdaptationTransform::BiancoPc2010,
    ];

    fn name(self) -> &'static str {
        match self {
            ChromaticAdaptationTransform::XyzScaling => "XYZ Scaling",
            ChromaticAdaptationTransform::VonKries => "Von Kries",
            ChromaticAdaptationTransform::Bradford => "Bradford",
            ChromaticAdaptationTransform::Sharp => "Sharp",
            ChromaticAdaptationTransform::Fairchild => "Fairchild",
            ChromaticAdaptationTransform::Cmccat97 => "CMCCAT97",
            ChromaticAdaptationTransform::Cmccat2000 => "CMCCAT2000",
            ChromaticAdaptationTransform::Cat02 => "CAT02",
            ChromaticAdaptationTransform::Cat02Brill2008 => "CAT02 Brill 2008",
            ChromaticAdaptationTransform::Cat16 => "CAT16",
            ChromaticAdaptationTransform::Bianco2010 => "Bianco 2010",
            ChromaticAdaptationTransform::BiancoPc2010 => "Bianco PC 2010",
        }
    }
}

impl FromStr for ChromaticAdaptationTransform {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_method(s)
    }
}

impl Display for ChromaticAdaptationTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ChromaticAdaptationTransform {
    pub const fn matrix(self) -> Matrix3d {
        match self {
            ChromaticAdaptationTransform::XyzScaling => CAT_XYZ_SCALING,
            ChromaticAdaptationTransform::VonKries => CAT_VON_KRIES,
            ChromaticAdaptationTransform::Bradford => CAT_BRADFORD,
            ChromaticAdaptationTransform::Sharp => CAT_SHARP,
            ChromaticAdaptationTransform::Fairchild => CAT_FAIRCHILD,
            ChromaticAdaptationTransform::Cmccat97 => CAT_CMCCAT97,
            ChromaticAdaptationTransform::Cmccat2000 => CAT_CMCCAT2000,
            ChromaticAdaptationTransform::Cat02 => CAT_CAT02,
            ChromaticAdaptationTransform::Cat02Brill2008 => CAT_CAT02_BRILL2008,
            ChromaticAdaptationTransform::Cat16 => CAT_CAT16,
            ChromaticAdaptationTransform::Bianco2010 => CAT_BIANCO2010,
            ChromaticAdaptationTransform::BiancoPc2010 => CAT_PC_BIANCO2010,
        }
    }
}

#[inline]
fn cone_ratio(dest: Vector3d, source: Vector3d) -> Result<Vector3d, ColourError> {
    if source.v.contains(&0.) {
        tracing::warn!(cone = ?source.v, "source whitepoint has a zero cone response");
        return Err(ColourError::NumericDegeneracy(
            "source whitepoint has a zero cone response",
        ));
    }
    Ok(dest / source)
}

#[inline]
fn compute_chromatic_adaption(
    source_white_point: Xyz,
    dest_white_point: Xyz,
    chad: Matrix3d,
) -> Result<Matrix3d, ColourError> {
    let cone_source_rgb = chad.mul_vector(source_white_point.to_vector());
    let cone_dest_rgb = chad.mul_vector(dest_white_point.to_vector());

    let cone = Matrix3d::diagonal(cone_ratio(cone_dest_rgb, cone_source_rgb)?);

    let chad_inv = chad.inverse().ok_or(ColourError::NumericDegeneracy(
        "chromatic adaptation matrix is singular",
    ))?;

    let p0 = cone.mat_mul(chad);
    Ok(chad_inv.mat_mul(p0))
}

/// Von Kries adaptation matrix for tables and whitepoints known at compile time.
///
/// Degenerate inputs yield non-finite entries.
pub const fn compute_chromatic_adaption_const(
    source_white_point: Xyz,
    dest_white_point: Xyz,
    chad: Matrix3d,
) -> Matrix3d {
    let cone_source_rgb = chad.mul_vector(source_white_point.to_vector());
    let cone_dest_rgb = chad.mul_vector(dest_white_point.to_vector());

    let cone = Matrix3d {
        v: [
            [cone_dest_rgb.v[0] / cone_source_rgb.v[0], 0., 0.],
            [0., cone_dest_rgb.v[1] / cone_source_rgb.v[1], 0.],
            [0., 0., cone_dest_rgb.v[2] / cone_source_rgb.v[2]],
        ],
    };

    let chad_inv = chad.inverse_const();

    let p0 = cone.mat_mul_const(chad);
    chad_inv.mat_mul_const(p0)
}

/// Matrix adapting tristimulus values from whitepoint `xyz_w` to `xyz_wr`.
///
/// Computed as `M^-1 * diag(M * xyz_wr / M * xyz_w) * M` with `M` the cone
/// matrix of `transform`.
pub fn matrix_chromatic_adaptation_von_kries(
    xyz_w: Xyz,
    xyz_wr: Xyz,
    transform: ChromaticAdaptationTransform,
) -> Result<Matrix3d, ColourError> {
    compute_chromatic_adaption(
        to_domain_1(xyz_w),
        to_domain_1(xyz_wr),
        transform.matrix(),
    )
}

/// Adapts `xyz` from whitepoint `xyz_w` to `xyz_wr` with a Von Kries transform
pub fn chromatic_adaptation_von_kries(
    xyz: &ColourArray,
    xyz_w: Xyz,
    xyz_wr: Xyz,
    transform: ChromaticAdaptationTransform,
) -> Result<ColourArray, ColourError> {
    let xyz = to_domain_1(xyz.clone());
    let m_cat = matrix_chromatic_adaptation_von_kries(xyz_w, xyz_wr, transform)?;
    Ok(from_range_1(vector_dot(&m_cat, &xyz)?))
}

/// Degrees of adaptation and baseline illuminant of Zhai and Luo (2018)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Zhai2018Parameters {
    /// Degree of adaptation to the input illuminant
    pub d_b: f64,
    /// Degree of adaptation to the output illuminant
    pub d_d: f64,
    /// Baseline illuminant, equal-energy `[100, 100, 100]` when `None`
    pub xyz_wo: Option<Xyz>,
}

impl Default for Zhai2018Parameters {
    fn default() -> Self {
        Zhai2018Parameters {
            d_b: 1.,
            d_d: 1.,
            xyz_wo: None,
        }
    }
}

const ZHAI2018_BASELINE: Xyz = Xyz::new(100., 100., 100.);

/// Two-step chromatic adaptation of Zhai and Luo (2018).
///
/// Domain and range are [0, 100] under the reference scale. Only `Cat02` and
/// `Cat16` are valid transforms.
pub fn chromatic_adaptation_zhai2018(
    xyz_b: &ColourArray,
    xyz_wb: Xyz,
    xyz_wd: Xyz,
    params: &Zhai2018Parameters,
    transform: ChromaticAdaptationTransform,
) -> Result<ColourArray, ColourError> {
    if !matches!(
        transform,
        ChromaticAdaptationTransform::Cat02 | ChromaticAdaptationTransform::Cat16
    ) {
        return Err(ColourError::InvalidMethod {
            method: transform.name().to_string(),
            valid: vec![
                ChromaticAdaptationTransform::Cat02.name(),
                ChromaticAdaptationTransform::Cat16.name(),
            ],
        });
    }

    let xyz_b = to_domain_100(xyz_b.clone());
    let xyz_wb = to_domain_100(xyz_wb);
    let xyz_wd = to_domain_100(xyz_wd);
    // baseline only enters through ratios
    let xyz_wo = params.xyz_wo.unwrap_or(ZHAI2018_BASELINE);

    if xyz_wo.y == 0. {
        return Err(ColourError::NumericDegeneracy(
            "baseline illuminant has zero luminance",
        ));
    }

    let m = transform.matrix();
    let rgb_wb = m.mul_vector(xyz_wb.to_vector());
    let rgb_wd = m.mul_vector(xyz_wd.to_vector());
    let rgb_wo = m.mul_vector(xyz_wo.to_vector());

    let d_rgb_b = cone_ratio(rgb_wo, rgb_wb)? * (params.d_b * (xyz_wb.y / xyz_wo.y))
        + (1. - params.d_b);
    let d_rgb_d = cone_ratio(rgb_wo, rgb_wd)? * (params.d_d * (xyz_wd.y / xyz_wo.y))
        + (1. - params.d_d);
    let d_rgb = cone_ratio(d_rgb_b, d_rgb_d)?;

    let m_inv = m.inverse().ok_or(ColourError::NumericDegeneracy(
        "chromatic adaptation matrix is singular",
    ))?;
    let m_cat = m_inv.mat_mul(Matrix3d::diagonal(d_rgb).mat_mul(m));

    Ok(from_range_100(vector_dot(&m_cat, &xyz_b)?))
}

/// Chromatic adaptation model selectable in [chromatic_adaptation]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ChromaticAdaptationMethod {
    #[default]
    VonKries,
    Zhai2018,
}

impl Method for ChromaticAdaptationMethod {
    const ALL: &'static [Self] = &[
        ChromaticAdaptationMethod::VonKries,
        ChromaticAdaptationMethod::Zhai2018,
    ];

    fn name(self) -> &'static str {
        match self {
            ChromaticAdaptationMethod::VonKries => "Von Kries",
            ChromaticAdaptationMethod::Zhai2018 => "Zhai 2018",
        }
    }
}

impl FromStr for ChromaticAdaptationMethod {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_method(s)
    }
}

impl Display for ChromaticAdaptationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct ChromaticAdaptationOptions {
    pub transform: ChromaticAdaptationTransform,
    pub zhai2018: Zhai2018Parameters,
}

/// Adapts `xyz` from whitepoint `xyz_w` to `xyz_wr` with `method`.
///
/// Domain and range are [0, 1] under the reference scale for every method;
/// models defined on [0, 100] are fed scaled values and their output scaled
/// back.
pub fn chromatic_adaptation(
    xyz: &ColourArray,
    xyz_w: Xyz,
    xyz_wr: Xyz,
    method: ChromaticAdaptationMethod,
    options: &ChromaticAdaptationOptions,
) -> Result<ColourArray, ColourError> {
    match method {
        ChromaticAdaptationMethod::VonKries => {
            chromatic_adaptation_von_kries(xyz, xyz_w, xyz_wr, options.transform)
        }
        ChromaticAdaptationMethod::Zhai2018 => {
            if get_domain_range_scale() == DomainRangeScale::Reference {
                let params = Zhai2018Parameters {
                    xyz_wo: options.zhai2018.xyz_wo.map(|wo| wo * 100.),
                    ..options.zhai2018
                };
                let adapted = chromatic_adaptation_zhai2018(
                    &xyz.map(|x| x * 100.),
                    xyz_w * 100.,
                    xyz_wr * 100.,
                    &params,
                    options.transform,
                )?;
                Ok(adapted.map_into(|x| x / 100.))
            } else {
                chromatic_adaptation_zhai2018(
                    xyz,
                    xyz_w,
                    xyz_wr,
                    &options.zhai2018,
                    options.transform,
                )
            }
        }
    }
}
