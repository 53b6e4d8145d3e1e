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
//! Domain-range scale handling.
//!
//! Every transform reads the active scale at call time to decide whether its
//! inputs and outputs are expressed in reference units or normalised to
//! [0, 1] / [0, 100]. The scale is held per thread, and temporary overrides
//! are expressed with [ScaleGuard] which restores the previous scale when it
//! goes out of scope.
use crate::err::ColourError;
use crate::matrix::Xyz;
use crate::nd_array::ColourArray;
use std::cell::Cell;
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DomainRangeScale {
    /// Values are interpreted in the units each transform documents
    #[default]
    Reference,
    /// Normalised to [0, 1]
    One,
    /// Normalised to [0, 100]
    Hundred,
    /// No rescaling at all, used when a transform calls another one
    Ignore,
}

impl DomainRangeScale {
    pub const fn name(self) -> &'static str {
        match self {
            DomainRangeScale::Reference => "reference",
            DomainRangeScale::One => "1",
            DomainRangeScale::Hundred => "100",
            DomainRangeScale::Ignore => "ignore",
        }
    }
}

impl Display for DomainRangeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DomainRangeScale {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(DomainRangeScale::Reference),
            "1" => Ok(DomainRangeScale::One),
            "100" => Ok(DomainRangeScale::Hundred),
            "ignore" => Ok(DomainRangeScale::Ignore),
            _ => Err(ColourError::InvalidDomainRangeScale(s.to_string())),
        }
    }
}

thread_local! {
    static SCALE: Cell<DomainRangeScale> = const { Cell::new(DomainRangeScale::Reference) };
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Active scale of the calling thread
#[inline]
pub fn get_domain_range_scale() -> DomainRangeScale {
    SCALE.with(|s| s.get())
}

/// Replaces the scale of the calling thread
pub fn set_domain_range_scale(scale: DomainRangeScale) {
    SCALE.with(|s| s.set(scale));
}

/// Scoped scale override created by [domain_range_scale].
///
/// Guards nest strictly: the innermost guard has to be dropped first.
/// Releasing them out of order trips a debug assertion.
#[must_use = "the previous scale is restored as soon as the guard is dropped"]
pub struct ScaleGuard {
    previous: DomainRangeScale,
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

/// Overrides the scale of the calling thread until the returned guard is dropped
pub fn domain_range_scale(scale: DomainRangeScale) -> ScaleGuard {
    let previous = SCALE.with(|s| s.replace(scale));
    let depth = DEPTH.with(|d| {
        let depth = d.get() + 1;
        d.set(depth);
        depth
    });
    tracing::trace!(%previous, %scale, depth, "entering domain-range scale override");
    ScaleGuard {
        previous,
        depth,
        _not_send: PhantomData,
    }
}

impl ScaleGuard {
    /// Scale that is restored on drop
    pub fn previous(&self) -> DomainRangeScale {
        self.previous
    }
}

impl Drop for ScaleGuard {
    fn drop(&mut self) {
        let depth = DEPTH.with(|d| d.get());
        debug_assert!(
            std::thread::panicking() || depth == self.depth,
            "scale guards must be released innermost first"
        );
        DEPTH.with(|d| d.set(self.depth - 1));
        SCALE.with(|s| s.set(self.previous));
        tracing::trace!(restored = %self.previous, depth = self.depth, "leaving domain-range scale override");
    }
}

/// Runs `f` with `scale` active and restores the previous scale afterwards
pub fn with_domain_range_scale<R, F: FnOnce() -> R>(scale: DomainRangeScale, f: F) -> R {
    let _guard = domain_range_scale(scale);
    f()
}

/// Values that can be rescaled at a transform boundary
pub trait Rescale: Sized {
    fn scale_mul(self, factor: f64) -> Self;
    fn scale_div(self, factor: f64) -> Self;
}

impl Rescale for f64 {
    #[inline]
    fn scale_mul(self, factor: f64) -> Self {
        self * factor
    }

    #[inline]
    fn scale_div(self, factor: f64) -> Self {
        self / factor
    }
}

impl Rescale for ColourArray {
    #[inline]
    fn scale_mul(self, factor: f64) -> Self {
        self.map_into(|x| x * factor)
    }

    #[inline]
    fn scale_div(self, factor: f64) -> Self {
        self.map_into(|x| x / factor)
    }
}

impl Rescale for Xyz {
    #[inline]
    fn scale_mul(self, factor: f64) -> Self {
        self * factor
    }

    #[inline]
    fn scale_div(self, factor: f64) -> Self {
        self / factor
    }
}

/// Brings a value with a [0, 1] reference domain into the active scale.
#[inline]
pub fn to_domain_1<T: Rescale>(a: T) -> T {
    to_domain_1_with(a, 100.)
}

pub fn to_domain_1_with<T: Rescale>(a: T, scale_factor: f64) -> T {
    match get_domain_range_scale() {
        DomainRangeScale::Hundred => a.scale_div(scale_factor),
        _ => a,
    }
}

/// Brings a value with a [0, 100] reference domain into the active scale.
#[inline]
pub fn to_domain_100<T: Rescale>(a: T) -> T {
    to_domain_100_with(a, 100.)
}

pub fn to_domain_100_with<T: Rescale>(a: T, scale_factor: f64) -> T {
    match get_domain_range_scale() {
        DomainRangeScale::One => a.scale_mul(scale_factor),
        _ => a,
    }
}

/// Brings an angle in degrees into the active scale.
#[inline]
pub fn to_domain_degrees<T: Rescale>(a: T) -> T {
    to_domain_degrees_with(a, 360.)
}

pub fn to_domain_degrees_with<T: Rescale>(a: T, scale_factor: f64) -> T {
    match get_domain_range_scale() {
        DomainRangeScale::One => a.scale_mul(scale_factor),
        DomainRangeScale::Hundred => a.scale_mul(scale_factor / 100.),
        _ => a,
    }
}

/// Inverse of [to_domain_1] for outputs.
#[inline]
pub fn from_range_1<T: Rescale>(a: T) -> T {
    from_range_1_with(a, 100.)
}

pub fn from_range_1_with<T: Rescale>(a: T, scale_factor: f64) -> T {
    match get_domain_range_scale() {
        DomainRangeScale::Hundred => a.scale_mul(scale_factor),
        _ => a,
    }
}

/// Inverse of [to_domain_100] for outputs.
#[inline]
pub fn from_range_100<T: Rescale>(a: T) -> T {
    from_range_100_with(a, 100.)
}

pub fn from_range_100_with<T: Rescale>(a: T, scale_factor: f64) -> T {
    match get_domain_range_scale() {
        DomainRangeScale::One => a.scale_div(scale_factor),
        _ => a,
    }
}

/// Inverse of [to_domain_degrees] for outputs.
#[inline]
pub fn from_range_degrees<T: Rescale>(a: T) -> T {
    from_range_degrees_with(a, 360.)
}

pub fn from_range_degrees_with<T: Rescale>(a: T, scale_factor: f64) -> T {
    match get_domain_range_scale() {
        DomainRangeScale::One => a.scale_div(scale_factor),
        DomainRangeScale::Hundred => a.scale_div(scale_factor / 100.),
        _ => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "Reference".parse::<DomainRangeScale>().unwrap(),
            DomainRangeScale::Reference
        );
        assert_eq!(
            " IGNORE ".parse::<DomainRangeScale>().unwrap(),
            DomainRangeScale::Ignore
        );
        assert_eq!(
            "100".parse::<DomainRangeScale>().unwrap(),
            DomainRangeScale::Hundred
        );
        assert!("10".parse::<DomainRangeScale>().is_err());
    }

    #[test]
    fn guards_restore_in_stack_order() {
        set_domain_range_scale(DomainRangeScale::One);
        {
            let outer = domain_range_scale(DomainRangeScale::Hundred);
            assert_eq!(outer.previous(), DomainRangeScale::One);
            {
                let _inner = domain_range_scale(DomainRangeScale::Ignore);
                assert_eq!(get_domain_range_scale(), DomainRangeScale::Ignore);
            }
            assert_eq!(get_domain_range_scale(), DomainRangeScale::Hundred);
        }
        assert_eq!(get_domain_range_scale(), DomainRangeScale::One);
        set_domain_range_scale(DomainRangeScale::Reference);
    }

    #[test]
    fn guard_restores_on_unwind() {
        set_domain_range_scale(DomainRangeScale::One);
        let result = std::panic::catch_unwind(|| {
            let _guard = domain_range_scale(DomainRangeScale::Ignore);
            panic!("boom");
        });
        assert!(result.is_err());
        assert_eq!(get_domain_range_scale(), DomainRangeScale::One);
        set_domain_range_scale(DomainRangeScale::Reference);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "innermost first")]
    fn out_of_order_release_is_caught() {
        let outer = domain_range_scale(DomainRangeScale::One);
        let inner = domain_range_scale(DomainRangeScale::Hundred);
        drop(outer);
        drop(inner);
    }

    #[test]
    fn scale_is_thread_local() {
        set_domain_range_scale(DomainRangeScale::Hundred);
        let other = std::thread::spawn(get_domain_range_scale).join().unwrap();
        assert_eq!(other, DomainRangeScale::Reference);
        assert_eq!(get_domain_range_scale(), DomainRangeScale::Hundred);
        set_domain_range_scale(DomainRangeScale::Reference);
    }

    #[test]
    fn rescaling_follows_active_scale() {
        assert_eq!(to_domain_1(50.), 50.);
        assert_eq!(from_range_degrees(180.), 180.);

        with_domain_range_scale(DomainRangeScale::Hundred, || {
            assert_eq!(to_domain_1(50.), 0.5);
            assert_eq!(from_range_1(0.5), 50.);
            assert_eq!(to_domain_100(50.), 50.);
            assert_eq!(from_range_degrees(180.), 50.);
            assert_eq!(to_domain_degrees(50.), 180.);
        });

        with_domain_range_scale(DomainRangeScale::One, || {
            assert_eq!(to_domain_1(0.5), 0.5);
            assert_eq!(to_domain_100(0.5), 50.);
            assert_eq!(from_range_100(50.), 0.5);
            assert_eq!(from_range_degrees(180.), 0.5);
            assert_eq!(to_domain_degrees(0.5), 180.);
        });

        with_domain_range_scale(DomainRangeScale::Ignore, || {
            assert_eq!(to_domain_1(50.), 50.);
            assert_eq!(to_domain_100(0.5), 0.5);
            assert_eq!(from_range_degrees(180.), 180.);
        });
    }

    #[test]
    fn arrays_are_rescaled() {
        let a = ColourArray::from([10., 20., 30.]);
        let scaled = with_domain_range_scale(DomainRangeScale::Hundred, || to_domain_1(a.clone()));
        assert_eq!(scaled, ColourArray::from([0.1, 0.2, 0.3]));
    }
}
