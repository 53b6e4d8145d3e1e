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
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
mod chad;
mod datasets;
mod err;
mod gamma;
mod illuminant;
mod ipt;
mod jzazbz;
/// Kernel primitives shared by every transform
mod math;
mod matrix;
mod method;
mod mlaf;
mod nd_array;
mod rgb;
mod scale;
mod stress;

pub use chad::{
    CAT_BIANCO2010, CAT_BRADFORD, CAT_CAT02, CAT_CAT02_BRILL2008, CAT_CAT16, CAT_CMCCAT97,
    CAT_CMCCAT2000, CAT_FAIRCHILD, CAT_PC_BIANCO2010, CAT_SHARP, CAT_VON_KRIES, CAT_XYZ_SCALING,
    ChromaticAdaptationMethod, ChromaticAdaptationOptions, ChromaticAdaptationTransform,
    Zhai2018Parameters, chromatic_adaptation, chromatic_adaptation_von_kries,
    chromatic_adaptation_zhai2018, compute_chromatic_adaption_const,
    matrix_chromatic_adaptation_von_kries,
};
pub use datasets::{
    CCS_WHITEPOINT_NTSC1953, MATRIX_SRGB_RGB_TO_XYZ, MATRIX_SRGB_XYZ_TO_RGB, PRIMARIES_N_GAMUT,
    PRIMARIES_NTSC1953, PRIMARIES_NTSC1987, PRIMARIES_PAL_SECAM, PRIMARIES_SRGB,
    RGB_COLOURSPACE_N_GAMUT, RGB_COLOURSPACE_NTSC1953, RGB_COLOURSPACE_NTSC1987,
    RGB_COLOURSPACE_PAL_SECAM, RGB_COLOURSPACE_SRGB, RGB_COLOURSPACES, rgb_colourspace,
};
pub use err::ColourError;
pub use gamma::{
    NLogConstants, NegativeNumberHandling, ST2084_PEAK_LUMINANCE, St2084Constants,
    eotf_inverse_srgb, eotf_inverse_st2084, eotf_srgb, eotf_st2084, gamma_function,
    log_decoding_nlog, log_decoding_nlog_with, log_encoding_nlog, log_encoding_nlog_with,
};
pub use illuminant::{CCS_ILLUMINANTS, ccs_illuminant};
pub use ipt::{
    MATRIX_IPT_IPT_TO_LMS_P, MATRIX_IPT_LMS_P_TO_IPT, MATRIX_IPT_LMS_TO_XYZ,
    MATRIX_IPT_XYZ_TO_LMS, ipt_hue_angle, ipt_to_xyz, xyz_to_ipt,
};
pub use jzazbz::{
    IzazbzMethod, JzazbzConstants, MATRIX_JZAZBZ_IZAZBZ_TO_LMS_P_SAFDAR2017,
    MATRIX_JZAZBZ_IZAZBZ_TO_LMS_P_SAFDAR2021, MATRIX_JZAZBZ_LMS_P_TO_IZAZBZ_SAFDAR2017,
    MATRIX_JZAZBZ_LMS_P_TO_IZAZBZ_SAFDAR2021, MATRIX_JZAZBZ_LMS_TO_XYZ,
    MATRIX_JZAZBZ_XYZ_TO_LMS, izazbz_to_xyz, jzazbz_to_xyz, xyz_to_izazbz, xyz_to_jzazbz,
};
pub use math::{spow, vector_dot};
pub use matrix::{Chromaticity, Matrix3d, Vector3, Vector3d, Xyz};
pub use method::{CaseInsensitiveMapping, Method, canonical_eq, method_names, validate_method};
pub use nd_array::{ColourArray, tsplit, tstack};
pub use rgb::{
    Cctf, ChromaticityTriple, RgbColourspace, RgbConversionOptions, normalised_primary_matrix,
    rgb_to_xyz, srgb_to_xyz, xyz_to_rgb, xyz_to_srgb,
};
pub use scale::{
    DomainRangeScale, Rescale, ScaleGuard, domain_range_scale, from_range_1, from_range_1_with,
    from_range_100, from_range_100_with, from_range_degrees, from_range_degrees_with,
    get_domain_range_scale, set_domain_range_scale, to_domain_1, to_domain_1_with, to_domain_100,
    to_domain_100_with, to_domain_degrees, to_domain_degrees_with, with_domain_range_scale,
};
pub use stress::{StressMethod, index_stress, index_stress_garcia2007};
