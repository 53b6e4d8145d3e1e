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
use crate::math::spow;
use crate::nd_array::ColourArray;
use crate::scale::{from_range_1, to_domain_1};
use pxfm::{f_exp, f_log, f_pow};

/// Constants of the SMPTE ST 2084 perceptual quantizer
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct St2084Constants {
    pub m_1: f64,
    pub m_2: f64,
    pub c_1: f64,
    pub c_2: f64,
    pub c_3: f64,
}

impl St2084Constants {
    pub const ST2084: St2084Constants = St2084Constants {
        m_1: 2610. / 4096. * (1. / 4.),
        m_2: 2523. / 4096. * 128.,
        c_1: 3424. / 4096.,
        c_2: 2413. / 4096. * 32.,
        c_3: 2392. / 4096. * 32.,
    };
}

impl Default for St2084Constants {
    fn default() -> Self {
        St2084Constants::ST2084
    }
}

/// Display peak luminance used by ST 2084, in cd/m2
pub const ST2084_PEAK_LUMINANCE: f64 = 10000.;

#[inline]
fn pq_from_linear(c: f64, l_p: f64, k: &St2084Constants) -> f64 {
    let y_p = spow(c / l_p, k.m_1);
    spow((k.c_1 + k.c_2 * y_p) / (k.c_3 * y_p + 1.), k.m_2)
}

#[inline]
fn pq_to_linear(n: f64, l_p: f64, k: &St2084Constants) -> f64 {
    let v_p = spow(n, 1. / k.m_2);
    let num = (v_p - k.c_1).max(0.);
    let l = spow(num / (k.c_2 - k.c_3 * v_p), 1. / k.m_1);
    l_p * l
}

/// Inverse electro-optical transfer function of SMPTE ST 2084.
///
/// Maps absolute luminance `c` in cd/m2 to a non-linear signal, with `l_p`
/// the display peak luminance.
pub fn eotf_inverse_st2084(c: &ColourArray, l_p: f64, constants: &St2084Constants) -> ColourArray {
    let c = to_domain_1(c.clone());
    from_range_1(c.map_into(|x| pq_from_linear(x, l_p, constants)))
}

/// Electro-optical transfer function of SMPTE ST 2084
pub fn eotf_st2084(n: &ColourArray, l_p: f64, constants: &St2084Constants) -> ColourArray {
    let n = to_domain_1(n.clone());
    from_range_1(n.map_into(|x| pq_to_linear(x, l_p, constants)))
}

#[inline]
/// Gamma transfer function for sRGB
fn srgb_from_linear(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * spow(linear, 1. / 2.4) - 0.055
    }
}

#[inline]
/// Linear transfer function for sRGB
fn srgb_to_linear(gamma: f64) -> f64 {
    const BREAKPOINT: f64 = 0.0031308 * 12.92;
    if gamma <= BREAKPOINT {
        gamma / 12.92
    } else {
        spow((gamma + 0.055) / 1.055, 2.4)
    }
}

/// IEC 61966-2-1 inverse EOTF, linear light to sRGB signal
pub fn eotf_inverse_srgb(l: &ColourArray) -> ColourArray {
    from_range_1(to_domain_1(l.clone()).map_into(srgb_from_linear))
}

/// IEC 61966-2-1 EOTF, sRGB signal to linear light
pub fn eotf_srgb(v: &ColourArray) -> ColourArray {
    from_range_1(to_domain_1(v.clone()).map_into(srgb_to_linear))
}

/// Treatment of negative inputs by [gamma_function]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NegativeNumberHandling {
    /// Negative values raised to a fractional power become NaN
    #[default]
    Indeterminate,
    /// `sign(x) * |x|^exponent`
    Mirror,
    /// Negative values are returned unchanged
    Preserve,
    /// Negative values are clamped to zero
    Clamp,
}

#[inline]
fn pure_gamma(x: f64, exponent: f64, handling: NegativeNumberHandling) -> f64 {
    match handling {
        NegativeNumberHandling::Indeterminate => {
            if x < 0. {
                x.powf(exponent)
            } else {
                f_pow(x, exponent)
            }
        }
        NegativeNumberHandling::Mirror => spow(x, exponent),
        NegativeNumberHandling::Preserve => {
            if x <= 0. {
                x
            } else {
                f_pow(x, exponent)
            }
        }
        NegativeNumberHandling::Clamp => f_pow(x.max(0.), exponent),
    }
}

/// Plain power law `a^exponent`
pub fn gamma_function(
    a: &ColourArray,
    exponent: f64,
    handling: NegativeNumberHandling,
) -> ColourArray {
    a.map(|x| pure_gamma(x, exponent, handling))
}

/// Nikon N-Log curve parameters
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NLogConstants {
    pub cut1: f64,
    pub cut2: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl NLogConstants {
    pub const NLOG: NLogConstants = NLogConstants {
        cut1: 0.328,
        cut2: 452. / 1023.,
        a: 650. / 1023.,
        b: 0.0075,
        c: 150. / 1023.,
        d: 619. / 1023.,
    };
}

/// Nikon N-Log encoding of linear reflection values.
///
/// With `in_reflection` unset the input is treated as linear IRE and scaled
/// by 0.9 first. Output is a normalised code value.
pub fn log_encoding_nlog_with(in_r: &ColourArray, in_reflection: bool) -> ColourArray {
    let k = NLogConstants::NLOG;
    let in_r = to_domain_1(in_r.clone());
    let encoded = in_r.map_into(|x| {
        let x = if in_reflection { x } else { x * 0.9 };
        if x < k.cut1 {
            k.a * spow(x + k.b, 1. / 3.)
        } else {
            k.c * f_log(x) + k.d
        }
    });
    from_range_1(encoded)
}

/// Inverse of [log_encoding_nlog_with]
pub fn log_decoding_nlog_with(in_v: &ColourArray, in_reflection: bool) -> ColourArray {
    let k = NLogConstants::NLOG;
    let in_v = to_domain_1(in_v.clone());
    let decoded = in_v.map_into(|v| {
        let r = if v < k.cut2 {
            spow(v / k.a, 3.) - k.b
        } else {
            f_exp((v - k.d) / k.c)
        };
        if in_reflection { r } else { r / 0.9 }
    });
    from_range_1(decoded)
}

#[inline]
pub fn log_encoding_nlog(in_r: &ColourArray) -> ColourArray {
    log_encoding_nlog_with(in_r, true)
}

#[inline]
pub fn log_decoding_nlog(in_v: &ColourArray) -> ColourArray {
    log_decoding_nlog_with(in_v, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{DomainRangeScale, with_domain_range_scale};
    use rand::Rng;

    #[test]
    fn st2084_known_values() {
        let k = St2084Constants::ST2084;
        let encoded = eotf_inverse_st2084(
            &ColourArray::from_slice(&[0., 100., 10000.]),
            ST2084_PEAK_LUMINANCE,
            &k,
        );
        let expected = [7.3095590257839665e-07, 0.508078420, 1.];
        for (a, b) in encoded.data().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-6, "{} != {}", a, b);
        }
    }

    #[test]
    fn st2084_round_trip() {
        let k = St2084Constants::ST2084;
        let mut rng = rand::rng();
        for _ in 0..500 {
            let c: f64 = rng.random_range(0.01..10000.0);
            let n = eotf_inverse_st2084(&c.into(), ST2084_PEAK_LUMINANCE, &k);
            let back = eotf_st2084(&n, ST2084_PEAK_LUMINANCE, &k);
            let diff = (back.data()[0] - c).abs() / c;
            assert!(diff < 1e-7, "round trip of {} gave {}", c, back.data()[0]);
        }
    }

    #[test]
    fn srgb_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let l: f64 = rng.random_range(0.0..1.0);
            let v = eotf_inverse_srgb(&l.into());
            let back = eotf_srgb(&v);
            assert!((back.data()[0] - l).abs() < 1e-9);
        }
        let v = eotf_inverse_srgb(&ColourArray::from_slice(&[0.18]));
        assert!((v.data()[0] - 0.46135612950044164).abs() < 1e-9);
    }

    #[test]
    fn srgb_follows_scale() {
        let reference = eotf_inverse_srgb(&0.18.into()).data()[0];
        let hundred = with_domain_range_scale(DomainRangeScale::Hundred, || {
            eotf_inverse_srgb(&18.0.into()).data()[0]
        });
        assert!((reference * 100. - hundred).abs() < 1e-9);
    }

    #[test]
    fn gamma_negative_handling() {
        let a = ColourArray::from_slice(&[-0.25, 0.25]);
        let indeterminate = gamma_function(&a, 0.5, NegativeNumberHandling::Indeterminate);
        assert!(indeterminate.data()[0].is_nan());
        assert!((indeterminate.data()[1] - 0.5).abs() < 1e-12);
        let mirror = gamma_function(&a, 0.5, NegativeNumberHandling::Mirror);
        assert!((mirror.data()[0] + 0.5).abs() < 1e-12);
        let preserve = gamma_function(&a, 0.5, NegativeNumberHandling::Preserve);
        assert_eq!(preserve.data()[0], -0.25);
        let clamp = gamma_function(&a, 0.5, NegativeNumberHandling::Clamp);
        assert_eq!(clamp.data()[0], 0.);
    }

    #[test]
    fn nlog_known_values() {
        let encoded = log_encoding_nlog(&ColourArray::from_slice(&[0.18, 0.5, 0.0]));
        let expected = [0.3636677701171387, 0.5034486050009855, 0.12437262789637153];
        for (a, b) in encoded.data().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }
        let decoded = log_decoding_nlog(&encoded);
        for (a, b) in decoded.data().iter().zip([0.18, 0.5, 0.0].iter()) {
            assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }
    }

    #[test]
    fn nlog_ire_input() {
        let ire = log_encoding_nlog_with(&0.2.into(), false);
        let reflection = log_encoding_nlog(&0.18.into());
        assert!((ire.data()[0] - reflection.data()[0]).abs() < 1e-12);
        let back = log_decoding_nlog_with(&ire, false);
        assert!((back.data()[0] - 0.2).abs() < 1e-9);
    }
}
