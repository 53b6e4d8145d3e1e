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

/// Closed family of interchangeable algorithm variants selectable by name.
///
/// Names are matched independent of ASCII case and of space, underscore and
/// hyphen separators, so `"Safdar 2021"`, `"safdar_2021"` and `"SAFDAR-2021"`
/// all select the same variant.
pub trait Method: Copy + Sized + 'static {
    /// Every variant, in registration order
    const ALL: &'static [Self];

    /// Canonical display name of the variant
    fn name(self) -> &'static str;
}

#[inline]
fn canonical_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
}

/// Compares two names the way method and registry lookups do
#[inline]
pub fn canonical_eq(a: &str, b: &str) -> bool {
    canonical_chars(a).eq(canonical_chars(b))
}

/// Canonical names of every variant of `M`
pub fn method_names<M: Method>() -> Vec<&'static str> {
    M::ALL.iter().map(|m| m.name()).collect()
}

/// Resolves `name` to a variant of `M`.
///
/// Fails with [ColourError::InvalidMethod] listing the valid names, there is
/// no fallback to a default variant.
pub fn validate_method<M: Method>(name: &str) -> Result<M, ColourError> {
    match M::ALL.iter().find(|m| canonical_eq(m.name(), name)) {
        Some(&m) => Ok(m),
        None => {
            let valid = method_names::<M>();
            tracing::debug!(method = name, ?valid, "rejected method name");
            Err(ColourError::InvalidMethod {
                method: name.to_string(),
                valid,
            })
        }
    }
}

/// Static registry keyed by names compared with [canonical_eq].
///
/// Entries keep their declared order; the first matching key wins.
pub struct CaseInsensitiveMapping<V: 'static> {
    entries: &'static [(&'static str, V)],
}

impl<V: 'static> CaseInsensitiveMapping<V> {
    pub const fn new(entries: &'static [(&'static str, V)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&'static V> {
        self.entries
            .iter()
            .find(|(k, _)| canonical_eq(k, key))
            .map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + use<V> {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static V)> + use<V> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq)]
    enum Flavour {
        Plain,
        DoubleShot,
    }

    impl Method for Flavour {
        const ALL: &'static [Self] = &[Flavour::Plain, Flavour::DoubleShot];

        fn name(self) -> &'static str {
            match self {
                Flavour::Plain => "Plain",
                Flavour::DoubleShot => "Double Shot",
            }
        }
    }

    #[test]
    fn names_resolve_in_any_case() {
        assert_eq!(validate_method::<Flavour>("plain").unwrap(), Flavour::Plain);
        assert_eq!(
            validate_method::<Flavour>("DOUBLE SHOT").unwrap(),
            Flavour::DoubleShot
        );
        assert_eq!(
            validate_method::<Flavour>("double_shot").unwrap(),
            Flavour::DoubleShot
        );
    }

    #[test]
    fn unknown_names_list_valid_choices() {
        match validate_method::<Flavour>("Triple") {
            Err(ColourError::InvalidMethod { method, valid }) => {
                assert_eq!(method, "Triple");
                assert_eq!(valid, vec!["Plain", "Double Shot"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn mapping_lookup() {
        const ENTRIES: &[(&str, u8)] = &[("NTSC (1953)", 1), ("Pal/Secam", 2)];
        static TABLE: CaseInsensitiveMapping<u8> = CaseInsensitiveMapping::new(ENTRIES);
        assert_eq!(TABLE.get("ntsc (1953)"), Some(&1));
        assert_eq!(TABLE.get("PAL/SECAM"), Some(&2));
        assert!(TABLE.get("ntsc (1987)").is_none());
        assert!(TABLE.contains_key("pal/secam"));
        assert!(!TABLE.contains_key("pal secam"));
        assert_eq!(TABLE.len(), 2);
        assert_eq!(TABLE.keys().collect::<Vec<_>>(), vec!["NTSC (1953)", "Pal/Secam"]);
    }
}
