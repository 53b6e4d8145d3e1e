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
use crate::chad::{ChromaticAdaptationTransform, matrix_chromatic_adaptation_von_kries};
use crate::datasets::RGB_COLOURSPACE_SRGB;
use crate::err::ColourError;
use crate::math::vector_dot;
use crate::matrix::{Chromaticity, Matrix3d};
use crate::nd_array::ColourArray;
use crate::scale::{DomainRangeScale, domain_range_scale, from_range_1, to_domain_1};
use std::fmt::Debug;

/// Colour component transfer function
pub type Cctf = fn(&ColourArray) -> ColourArray;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromaticityTriple {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
}

/// Normalised primary matrix converting linear RGB to CIE XYZ.
///
/// Each column holds the tristimulus values of one primary, scaled so that
/// RGB `[1, 1, 1]` maps to `whitepoint` with unit luminance. Collinear
/// primaries yield non-finite entries.
pub const fn normalised_primary_matrix(
    primaries: &ChromaticityTriple,
    whitepoint: Chromaticity,
) -> Matrix3d {
    let r = primaries.red;
    let g = primaries.green;
    let b = primaries.blue;
    let p = Matrix3d::new([
        [r.x, g.x, b.x],
        [r.y, g.y, b.y],
        [1. - r.x - r.y, 1. - g.x - g.y, 1. - b.x - b.y],
    ]);
    let s = p.inverse_const().mul_vector(whitepoint.to_xyz().to_vector());
    Matrix3d::new([
        [p.v[0][0] * s.v[0], p.v[0][1] * s.v[1], p.v[0][2] * s.v[2]],
        [p.v[1][0] * s.v[0], p.v[1][1] * s.v[1], p.v[1][2] * s.v[2]],
        [p.v[2][0] * s.v[0], p.v[2][1] * s.v[1], p.v[2][2] * s.v[2]],
    ])
}

/// Converts RGB values to CIE XYZ.
///
/// `illuminant_rgb` is the whitepoint of the RGB values and `illuminant_xyz`
/// the one the result is adapted to when `cat` is set. `cctf_decoding` runs
/// before the matrix, without domain-range rescaling.
pub fn rgb_to_xyz(
    rgb: &ColourArray,
    illuminant_rgb: Chromaticity,
    illuminant_xyz: Chromaticity,
    matrix_rgb_to_xyz: &Matrix3d,
    cat: Option<ChromaticAdaptationTransform>,
    cctf_decoding: Option<Cctf>,
) -> Result<ColourArray, ColourError> {
    rgb.ensure_channels(3)?;
    let mut rgb = to_domain_1(rgb.clone());

    if let Some(decode) = cctf_decoding {
        let _ignore = domain_range_scale(DomainRangeScale::Ignore);
        rgb = decode(&rgb);
    }

    let mut xyz = vector_dot(matrix_rgb_to_xyz, &rgb)?;

    if let Some(transform) = cat {
        let m_cat = matrix_chromatic_adaptation_von_kries(
            illuminant_rgb.to_xyz(),
            illuminant_xyz.to_xyz(),
            transform,
        )?;
        xyz = vector_dot(&m_cat, &xyz)?;
    }

    Ok(from_range_1(xyz))
}

/// Converts CIE XYZ to RGB values, inverse of [rgb_to_xyz]
pub fn xyz_to_rgb(
    xyz: &ColourArray,
    illuminant_xyz: Chromaticity,
    illuminant_rgb: Chromaticity,
    matrix_xyz_to_rgb: &Matrix3d,
    cat: Option<ChromaticAdaptationTransform>,
    cctf_encoding: Option<Cctf>,
) -> Result<ColourArray, ColourError> {
    let mut xyz = to_domain_1(xyz.clone());

    if let Some(transform) = cat {
        let m_cat = matrix_chromatic_adaptation_von_kries(
            illuminant_xyz.to_xyz(),
            illuminant_rgb.to_xyz(),
            transform,
        )?;
        xyz = vector_dot(&m_cat, &xyz)?;
    }

    let mut rgb = vector_dot(matrix_xyz_to_rgb, &xyz)?;

    if let Some(encode) = cctf_encoding {
        let _ignore = domain_range_scale(DomainRangeScale::Ignore);
        rgb = encode(&rgb);
    }

    Ok(from_range_1(rgb))
}

/// Options shared by the RGB colourspace conversions
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RgbConversionOptions {
    /// Whitepoint of the CIE XYZ side of the conversion
    pub illuminant: Chromaticity,
    /// `None` skips chromatic adaptation entirely
    pub chromatic_adaptation_transform: Option<ChromaticAdaptationTransform>,
    /// Whether to run the colourspace transfer function
    pub apply_cctf: bool,
}

impl Default for RgbConversionOptions {
    fn default() -> Self {
        RgbConversionOptions {
            illuminant: Chromaticity::D65,
            chromatic_adaptation_transform: Some(ChromaticAdaptationTransform::Cat02),
            apply_cctf: true,
        }
    }
}

/// RGB colourspace description
#[derive(Clone, Copy)]
pub struct RgbColourspace {
    pub name: &'static str,
    pub primaries: ChromaticityTriple,
    pub whitepoint: Chromaticity,
    pub whitepoint_name: &'static str,
    pub matrix_rgb_to_xyz: Matrix3d,
    pub matrix_xyz_to_rgb: Matrix3d,
    /// Linear light to encoded signal
    pub cctf_encoding: Cctf,
    /// Encoded signal to linear light
    pub cctf_decoding: Cctf,
}

impl Debug for RgbColourspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbColourspace")
            .field("name", &self.name)
            .field("primaries", &self.primaries)
            .field("whitepoint", &self.whitepoint)
            .field("whitepoint_name", &self.whitepoint_name)
            .field("matrix_rgb_to_xyz", &self.matrix_rgb_to_xyz)
            .field("matrix_xyz_to_rgb", &self.matrix_xyz_to_rgb)
            .finish()
    }
}

impl RgbColourspace {
    /// Colourspace with matrices derived from its primaries and whitepoint
    pub const fn new(
        name: &'static str,
        primaries: ChromaticityTriple,
        whitepoint: Chromaticity,
        whitepoint_name: &'static str,
        cctf_encoding: Cctf,
        cctf_decoding: Cctf,
    ) -> RgbColourspace {
        let matrix_rgb_to_xyz = normalised_primary_matrix(&primaries, whitepoint);
        RgbColourspace {
            name,
            primaries,
            whitepoint,
            whitepoint_name,
            matrix_rgb_to_xyz,
            matrix_xyz_to_rgb: matrix_rgb_to_xyz.inverse_const(),
            cctf_encoding,
            cctf_decoding,
        }
    }

    /// Replaces the derived matrices with published ones
    pub const fn with_matrices(
        mut self,
        matrix_rgb_to_xyz: Matrix3d,
        matrix_xyz_to_rgb: Matrix3d,
    ) -> RgbColourspace {
        self.matrix_rgb_to_xyz = matrix_rgb_to_xyz;
        self.matrix_xyz_to_rgb = matrix_xyz_to_rgb;
        self
    }

    /// Converts values of this colourspace to CIE XYZ under `options.illuminant`
    pub fn to_xyz(
        &self,
        rgb: &ColourArray,
        options: &RgbConversionOptions,
    ) -> Result<ColourArray, ColourError> {
        rgb_to_xyz(
            rgb,
            self.whitepoint,
            options.illuminant,
            &self.matrix_rgb_to_xyz,
            options.chromatic_adaptation_transform,
            options.apply_cctf.then_some(self.cctf_decoding),
        )
    }

    /// Converts CIE XYZ under `options.illuminant` to values of this colourspace
    pub fn from_xyz(
        &self,
        xyz: &ColourArray,
        options: &RgbConversionOptions,
    ) -> Result<ColourArray, ColourError> {
        xyz_to_rgb(
            xyz,
            options.illuminant,
            self.whitepoint,
            &self.matrix_xyz_to_rgb,
            options.chromatic_adaptation_transform,
            options.apply_cctf.then_some(self.cctf_encoding),
        )
    }
}

/// Converts CIE XYZ to sRGB
pub fn xyz_to_srgb(
    xyz: &ColourArray,
    options: &RgbConversionOptions,
) -> Result<ColourArray, ColourError> {
    RGB_COLOURSPACE_SRGB.from_xyz(xyz, options)
}

/// Converts sRGB to CIE XYZ
pub fn srgb_to_xyz(
    rgb: &ColourArray,
    options: &RgbConversionOptions,
) -> Result<ColourArray, ColourError> {
    RGB_COLOURSPACE_SRGB.to_xyz(rgb, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::with_domain_range_scale;

    fn assert_row(m: &Matrix3d, row: usize, expected: [f64; 3], tolerance: f64) {
        for (a, b) in m.v[row].iter().zip(expected.iter()) {
            assert!((a - b).abs() < tolerance, "{} != {}", a, b);
        }
    }

    #[test]
    fn npm_bt709() {
        let primaries = ChromaticityTriple {
            red: Chromaticity::new(0.64, 0.33),
            green: Chromaticity::new(0.30, 0.60),
            blue: Chromaticity::new(0.15, 0.06),
        };
        let npm = normalised_primary_matrix(&primaries, Chromaticity::D65);
        assert_row(&npm, 0, [0.41239, 0.35758, 0.18048], 1e-5);
        let white = npm.mul_vector(crate::matrix::Vector3d { v: [1., 1., 1.] });
        let d65 = Chromaticity::D65.to_xyz();
        assert!((white.v[0] - d65.x).abs() < 1e-12);
        assert!((white.v[1] - 1.).abs() < 1e-12);
        assert!((white.v[2] - d65.z).abs() < 1e-12);
    }

    #[test]
    fn xyz_to_srgb_known_value() {
        let rgb = xyz_to_srgb(
            &[0.20654008, 0.12197225, 0.05136952].into(),
            &RgbConversionOptions::default(),
        )
        .unwrap();
        let expected = [0.7057393628165596, 0.19248265555461616, 0.22354169091552095];
        for (a, b) in rgb.data().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-7, "{} != {}", a, b);
        }
    }

    #[test]
    fn srgb_to_xyz_known_value() {
        let xyz = srgb_to_xyz(
            &[0.70573936, 0.19248266, 0.22354169].into(),
            &RgbConversionOptions::default(),
        )
        .unwrap();
        let expected = [0.20654290245634593, 0.12197942621139343, 0.05137140486219816];
        for (a, b) in xyz.data().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-7, "{} != {}", a, b);
        }
    }

    #[test]
    fn srgb_without_cctf_is_linear() {
        let options = RgbConversionOptions {
            apply_cctf: false,
            chromatic_adaptation_transform: None,
            ..Default::default()
        };
        let rgb = xyz_to_srgb(&[0.2, 0.3, 0.4].into(), &options).unwrap();
        let expected = vector_dot(
            &RGB_COLOURSPACE_SRGB.matrix_xyz_to_rgb,
            &[0.2, 0.3, 0.4].into(),
        )
        .unwrap();
        assert_eq!(rgb, expected);
    }

    #[test]
    fn conversions_follow_scale() {
        let options = RgbConversionOptions::default();
        let reference = srgb_to_xyz(&[0.5, 0.25, 0.75].into(), &options).unwrap();
        let hundred = with_domain_range_scale(DomainRangeScale::Hundred, || {
            srgb_to_xyz(&[50., 25., 75.].into(), &options).unwrap()
        });
        let diff = hundred.map(|x| x / 100.).max_abs_diff(&reference).unwrap();
        assert!(diff < 1e-12);
    }

    #[test]
    fn rejects_wrong_channel_count() {
        assert!(matches!(
            srgb_to_xyz(&ColourArray::from_slice(&[0.1, 0.2]), &RgbConversionOptions::default()),
            Err(ColourError::ShapeMismatch { .. })
        ));
    }
}
