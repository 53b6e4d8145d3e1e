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
use crate::matrix::Chromaticity;
use crate::method::CaseInsensitiveMapping;

const ILLUMINANTS_CIE_1931_2: &[(&str, Chromaticity)] = &[
    ("A", Chromaticity::new(0.44757, 0.40745)),
    ("B", Chromaticity::new(0.34842, 0.35161)),
    ("C", Chromaticity::new(0.31006, 0.31616)),
    ("D50", Chromaticity::D50),
    ("D55", Chromaticity::new(0.33242, 0.34743)),
    ("D60", Chromaticity::new(0.32168, 0.33767)),
    ("D65", Chromaticity::D65),
    ("D75", Chromaticity::new(0.29902, 0.31485)),
    ("E", Chromaticity::new(1. / 3., 1. / 3.)),
];

/// Chromaticity coordinates of the CIE standard illuminants for the
/// CIE 1931 2 degree standard observer.
pub static CCS_ILLUMINANTS: CaseInsensitiveMapping<Chromaticity> =
    CaseInsensitiveMapping::new(ILLUMINANTS_CIE_1931_2);

/// Looks up an illuminant chromaticity by name, ignoring case
pub fn ccs_illuminant(name: &str) -> Result<Chromaticity, ColourError> {
    CCS_ILLUMINANTS
        .get(name)
        .copied()
        .ok_or_else(|| ColourError::UnsupportedIlluminant(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(ccs_illuminant("d65").unwrap(), Chromaticity::D65);
        assert_eq!(ccs_illuminant("D50").unwrap(), Chromaticity::D50);
        assert!(matches!(
            ccs_illuminant("F2"),
            Err(ColourError::UnsupportedIlluminant(_))
        ));
    }

    #[test]
    fn equal_energy_is_neutral() {
        let e = ccs_illuminant("E").unwrap().to_xyz();
        assert!((e.x - 1.).abs() < 1e-12);
        assert!((e.z - 1.).abs() < 1e-12);
    }
}
