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
//! RGB colourspace datasets.
use crate::err::ColourError;
use crate::gamma::{
    NegativeNumberHandling, eotf_inverse_srgb, eotf_srgb, gamma_function, log_decoding_nlog,
    log_encoding_nlog,
};
use crate::matrix::{Chromaticity, Matrix3d};
use crate::method::CaseInsensitiveMapping;
use crate::nd_array::ColourArray;
use crate::rgb::{ChromaticityTriple, RgbColourspace};

fn gamma_2p2_encoding(a: &ColourArray) -> ColourArray {
    gamma_function(a, 1. / 2.2, NegativeNumberHandling::Indeterminate)
}

fn gamma_2p2_decoding(a: &ColourArray) -> ColourArray {
    gamma_function(a, 2.2, NegativeNumberHandling::Indeterminate)
}

fn gamma_2p8_encoding(a: &ColourArray) -> ColourArray {
    gamma_function(a, 1. / 2.8, NegativeNumberHandling::Indeterminate)
}

fn gamma_2p8_decoding(a: &ColourArray) -> ColourArray {
    gamma_function(a, 2.8, NegativeNumberHandling::Indeterminate)
}

/// ITU-R BT.709 primaries, shared by sRGB
pub const PRIMARIES_SRGB: ChromaticityTriple = ChromaticityTriple {
    red: Chromaticity::new(0.6400, 0.3300),
    green: Chromaticity::new(0.3000, 0.6000),
    blue: Chromaticity::new(0.1500, 0.0600),
};

/// Published IEC 61966-2-1 matrices, rounded to four decimals
pub const MATRIX_SRGB_RGB_TO_XYZ: Matrix3d = Matrix3d::new([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

pub const MATRIX_SRGB_XYZ_TO_RGB: Matrix3d = Matrix3d::new([
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
]);

pub const RGB_COLOURSPACE_SRGB: RgbColourspace = RgbColourspace::new(
    "sRGB",
    PRIMARIES_SRGB,
    Chromaticity::D65,
    "D65",
    eotf_inverse_srgb,
    eotf_srgb,
)
.with_matrices(MATRIX_SRGB_RGB_TO_XYZ, MATRIX_SRGB_XYZ_TO_RGB);

/// ITU-R BT.470 System M, the original NTSC primaries
pub const PRIMARIES_NTSC1953: ChromaticityTriple = ChromaticityTriple {
    red: Chromaticity::new(0.67, 0.33),
    green: Chromaticity::new(0.21, 0.71),
    blue: Chromaticity::new(0.14, 0.08),
};

/// CIE Illuminant C
pub const CCS_WHITEPOINT_NTSC1953: Chromaticity = Chromaticity::new(0.31006, 0.31616);

pub const RGB_COLOURSPACE_NTSC1953: RgbColourspace = RgbColourspace::new(
    "NTSC (1953)",
    PRIMARIES_NTSC1953,
    CCS_WHITEPOINT_NTSC1953,
    "C",
    gamma_2p8_encoding,
    gamma_2p8_decoding,
);

/// SMPTE C primaries
pub const PRIMARIES_NTSC1987: ChromaticityTriple = ChromaticityTriple {
    red: Chromaticity::new(0.630, 0.340),
    green: Chromaticity::new(0.310, 0.595),
    blue: Chromaticity::new(0.155, 0.070),
};

pub const RGB_COLOURSPACE_NTSC1987: RgbColourspace = RgbColourspace::new(
    "NTSC (1987)",
    PRIMARIES_NTSC1987,
    Chromaticity::D65,
    "D65",
    gamma_2p2_encoding,
    gamma_2p2_decoding,
);

/// ITU-R BT.470 System B, G primaries
pub const PRIMARIES_PAL_SECAM: ChromaticityTriple = ChromaticityTriple {
    red: Chromaticity::new(0.64, 0.33),
    green: Chromaticity::new(0.29, 0.60),
    blue: Chromaticity::new(0.15, 0.06),
};

pub const RGB_COLOURSPACE_PAL_SECAM: RgbColourspace = RgbColourspace::new(
    "Pal/Secam",
    PRIMARIES_PAL_SECAM,
    Chromaticity::D65,
    "D65",
    gamma_2p8_encoding,
    gamma_2p8_decoding,
);

/// Nikon N-Gamut uses the ITU-R BT.2020 primaries
pub const PRIMARIES_N_GAMUT: ChromaticityTriple = ChromaticityTriple {
    red: Chromaticity::new(0.7080, 0.2920),
    green: Chromaticity::new(0.1700, 0.7970),
    blue: Chromaticity::new(0.1310, 0.0460),
};

pub const RGB_COLOURSPACE_N_GAMUT: RgbColourspace = RgbColourspace::new(
    "N-Gamut",
    PRIMARIES_N_GAMUT,
    Chromaticity::D65,
    "D65",
    log_encoding_nlog,
    log_decoding_nlog,
);

const COLOURSPACES: &[(&str, RgbColourspace)] = &[
    ("sRGB", RGB_COLOURSPACE_SRGB),
    ("NTSC (1953)", RGB_COLOURSPACE_NTSC1953),
    ("NTSC (1987)", RGB_COLOURSPACE_NTSC1987),
    ("Pal/Secam", RGB_COLOURSPACE_PAL_SECAM),
    ("N-Gamut", RGB_COLOURSPACE_N_GAMUT),
];

/// Every bundled RGB colourspace keyed by name
pub static RGB_COLOURSPACES: CaseInsensitiveMapping<RgbColourspace> =
    CaseInsensitiveMapping::new(COLOURSPACES);

/// Looks up a bundled colourspace by name, ignoring case
pub fn rgb_colourspace(name: &str) -> Result<&'static RgbColourspace, ColourError> {
    RGB_COLOURSPACES
        .get(name)
        .ok_or_else(|| ColourError::UnsupportedColourspace(name.to_string()))
}
