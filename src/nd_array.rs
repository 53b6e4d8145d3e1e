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

/// Owned N-dimensional `f64` array whose last axis holds colour channels.
///
/// Leading axes are batch dimensions; a rank 0 array is a scalar.
/// Values are stored in row-major order, so every trailing channel group
/// is contiguous.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ColourArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl ColourArray {
    /// Creates an array from its shape and row-major data
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Result<ColourArray, ColourError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(ColourError::IncompatibleShapes(shape, vec![data.len()]));
        }
        Ok(ColourArray { shape, data })
    }

    pub fn scalar(value: f64) -> ColourArray {
        ColourArray {
            shape: vec![],
            data: vec![value],
        }
    }

    /// One dimensional array
    pub fn from_slice(values: &[f64]) -> ColourArray {
        ColourArray {
            shape: vec![values.len()],
            data: values.to_vec(),
        }
    }

    /// `(n, 3)` array from a list of triplets
    pub fn from_triplets(rows: &[[f64; 3]]) -> ColourArray {
        ColourArray {
            shape: vec![rows.len(), 3],
            data: rows.iter().flatten().copied().collect(),
        }
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of the last axis, `None` for scalars
    #[inline]
    pub fn channels(&self) -> Option<usize> {
        self.shape.last().copied()
    }

    /// Fails with [ColourError::ShapeMismatch] unless the last axis has `n` channels
    pub fn ensure_channels(&self, n: usize) -> Result<(), ColourError> {
        match self.channels() {
            Some(c) if c == n => Ok(()),
            found => Err(ColourError::ShapeMismatch {
                expected: n,
                found: found.unwrap_or(0),
            }),
        }
    }

    /// Applies `f` to every element
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> ColourArray {
        ColourArray {
            shape: self.shape.clone(),
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Consuming variant of [ColourArray::map] reusing the storage
    pub fn map_into<F: Fn(f64) -> f64>(mut self, f: F) -> ColourArray {
        self.data.iter_mut().for_each(|x| *x = f(*x));
        self
    }

    /// Applies `f` to every trailing triplet.
    pub fn map_triplets<F: FnMut([f64; 3]) -> [f64; 3]>(
        &self,
        mut f: F,
    ) -> Result<ColourArray, ColourError> {
        self.ensure_channels(3)?;
        let mut data = Vec::with_capacity(self.data.len());
        for chunk in self.data.chunks_exact(3) {
            data.extend_from_slice(&f([chunk[0], chunk[1], chunk[2]]));
        }
        Ok(ColourArray {
            shape: self.shape.clone(),
            data,
        })
    }

    /// Reduces every trailing triplet to a single value, dropping the last axis
    pub fn reduce_triplets<F: FnMut([f64; 3]) -> f64>(
        &self,
        mut f: F,
    ) -> Result<ColourArray, ColourError> {
        self.ensure_channels(3)?;
        let data = self
            .data
            .chunks_exact(3)
            .map(|c| f([c[0], c[1], c[2]]))
            .collect();
        Ok(ColourArray {
            shape: self.shape[..self.shape.len() - 1].to_vec(),
            data,
        })
    }

    /// Largest absolute element-wise difference, `None` if shapes differ
    pub fn max_abs_diff(&self, other: &ColourArray) -> Option<f64> {
        if self.shape != other.shape {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0f64, f64::max),
        )
    }
}

impl From<[f64; 3]> for ColourArray {
    fn from(value: [f64; 3]) -> Self {
        ColourArray {
            shape: vec![3],
            data: value.to_vec(),
        }
    }
}

impl From<f64> for ColourArray {
    fn from(value: f64) -> Self {
        ColourArray::scalar(value)
    }
}

/// Splits the last axis into one array per channel
pub fn tsplit(a: &ColourArray) -> Result<Vec<ColourArray>, ColourError> {
    let Some(channels) = a.channels() else {
        return Err(ColourError::ShapeMismatch {
            expected: 1,
            found: 0,
        });
    };
    let shape = a.shape[..a.shape.len() - 1].to_vec();
    let mut out = Vec::with_capacity(channels);
    for c in 0..channels {
        let data = a.data.iter().skip(c).step_by(channels).copied().collect();
        out.push(ColourArray {
            shape: shape.clone(),
            data,
        });
    }
    Ok(out)
}

/// Stacks same-shaped arrays along a new last axis
pub fn tstack(arrays: &[ColourArray]) -> Result<ColourArray, ColourError> {
    let Some(first) = arrays.first() else {
        return Err(ColourError::ShapeMismatch {
            expected: 1,
            found: 0,
        });
    };
    if let Some(bad) = arrays.iter().find(|a| a.shape != first.shape) {
        return Err(ColourError::IncompatibleShapes(
            first.shape.clone(),
            bad.shape.clone(),
        ));
    }
    let n = arrays.len();
    let mut data = vec![0f64; first.len() * n];
    for (c, a) in arrays.iter().enumerate() {
        for (dst, &src) in data.iter_mut().skip(c).step_by(n).zip(a.data.iter()) {
            *dst = src;
        }
    }
    let mut shape = first.shape.clone();
    shape.push(n);
    Ok(ColourArray { shape, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsplit_tstack_round_trip() {
        let a = ColourArray::new(vec![2, 2, 3], (0..12).map(|x| x as f64).collect()).unwrap();
        let parts = tsplit(&a).unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].shape(), &[2, 2]);
        assert_eq!(parts[1].data(), &[1., 4., 7., 10.]);
        assert_eq!(tstack(&parts).unwrap(), a);
    }

    #[test]
    fn tstack_of_scalars() {
        let stacked = tstack(&[1f64.into(), 2f64.into(), 3f64.into()]).unwrap();
        assert_eq!(stacked, ColourArray::from([1., 2., 3.]));
        let split = tsplit(&stacked).unwrap();
        assert_eq!(split[2], ColourArray::scalar(3.));
    }

    #[test]
    fn tsplit_tstack_four_channels() {
        let a = ColourArray::new(vec![3, 4], (0..12).map(|x| x as f64 * 0.5).collect()).unwrap();
        assert_eq!(tstack(&tsplit(&a).unwrap()).unwrap(), a);
    }

    #[test]
    fn tstack_rejects_mismatched_shapes() {
        let a = ColourArray::from_slice(&[1., 2.]);
        let b = ColourArray::from_slice(&[1., 2., 3.]);
        assert!(matches!(
            tstack(&[a, b]),
            Err(ColourError::IncompatibleShapes(_, _))
        ));
        assert!(tstack(&[]).is_err());
        assert!(tsplit(&ColourArray::scalar(1.)).is_err());
    }

    #[test]
    fn triplet_mapping_checks_channels() {
        let a = ColourArray::from_slice(&[1., 2., 3., 4.]);
        assert_eq!(
            a.map_triplets(|v| v),
            Err(ColourError::ShapeMismatch {
                expected: 3,
                found: 4
            })
        );
        let b = ColourArray::from_triplets(&[[1., 2., 3.], [4., 5., 6.]]);
        let summed = b.reduce_triplets(|v| v[0] + v[1] + v[2]).unwrap();
        assert_eq!(summed.shape(), &[2]);
        assert_eq!(summed.data(), &[6., 15.]);
    }

    #[test]
    fn new_validates_length() {
        assert!(ColourArray::new(vec![2, 3], vec![0.; 5]).is_err());
    }
}
