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
use crate::mlaf::mlaf;
use std::ops::{Add, Div, Mul};

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    pub v: [T; 3],
}

pub type Vector3d = Vector3<f64>;

impl<T> Mul<T> for Vector3<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self {
            v: [self.v[0] * rhs, self.v[1] * rhs, self.v[2] * rhs],
        }
    }
}

impl<T> Div<Vector3<T>> for Vector3<T>
where
    T: Div<Output = T> + Copy,
{
    type Output = Vector3<T>;

    #[inline]
    fn div(self, rhs: Vector3<T>) -> Self::Output {
        Self {
            v: [
                self.v[0] / rhs.v[0],
                self.v[1] / rhs.v[1],
                self.v[2] / rhs.v[2],
            ],
        }
    }
}

impl<T> Add<T> for Vector3<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = Vector3<T>;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        Self {
            v: [self.v[0] + rhs, self.v[1] + rhs, self.v[2] + rhs],
        }
    }
}

/// Matrix math helper
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3d {
    pub v: [[f64; 3]; 3],
}

impl Matrix3d {
    pub const IDENTITY: Matrix3d = Matrix3d {
        v: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn new(v: [[f64; 3]; 3]) -> Matrix3d {
        Matrix3d { v }
    }

    #[inline]
    pub const fn diagonal(d: Vector3d) -> Matrix3d {
        Matrix3d {
            v: [[d.v[0], 0., 0.], [0., d.v[1], 0.], [0., 0., d.v[2]]],
        }
    }

    #[inline]
    pub const fn test_equality(&self, other: Matrix3d, tolerance: f64) -> bool {
        let mut i = 0usize;
        while i < 3 {
            let mut j = 0usize;
            while j < 3 {
                if (self.v[i][j] - other.v[i][j]).abs() > tolerance {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    #[inline]
    pub const fn determinant(&self) -> Option<f64> {
        let v = self.v;
        let a0 = v[0][0] * v[1][1] * v[2][2];
        let a1 = v[0][1] * v[1][2] * v[2][0];
        let a2 = v[0][2] * v[1][0] * v[2][1];

        let s0 = v[0][2] * v[1][1] * v[2][0];
        let s1 = v[0][1] * v[1][0] * v[2][2];
        let s2 = v[0][0] * v[1][2] * v[2][1];

        let j = a0 + a1 + a2 - s0 - s1 - s2;
        if j == 0. {
            return None;
        }
        Some(j)
    }

    #[inline]
    const fn adjugate_scaled(&self, det: f64) -> Matrix3d {
        let v = self.v;
        let a = v[0][0];
        let b = v[0][1];
        let c = v[0][2];
        let d = v[1][0];
        let e = v[1][1];
        let f = v[1][2];
        let g = v[2][0];
        let h = v[2][1];
        let i = v[2][2];

        Matrix3d {
            v: [
                [
                    (e * i - f * h) * det,
                    (c * h - b * i) * det,
                    (b * f - c * e) * det,
                ],
                [
                    (f * g - d * i) * det,
                    (a * i - c * g) * det,
                    (c * d - a * f) * det,
                ],
                [
                    (d * h - e * g) * det,
                    (b * g - a * h) * det,
                    (a * e - b * d) * det,
                ],
            ],
        }
    }

    /// Inverse of the matrix, `None` when it is singular
    #[inline]
    pub const fn inverse(&self) -> Option<Self> {
        match self.determinant() {
            Some(det) => Some(self.adjugate_scaled(1. / det)),
            None => None,
        }
    }

    /// Inverse for constant tables known to be regular.
    ///
    /// A singular matrix yields non-finite entries.
    #[inline]
    pub const fn inverse_const(&self) -> Self {
        let m_det = match self.determinant() {
            None => 0f64,
            Some(v) => v,
        };
        self.adjugate_scaled(1. / m_det)
    }

    #[inline]
    pub const fn mul_vector(&self, other: Vector3d) -> Vector3d {
        let x = self.v[0][0] * other.v[0] + self.v[0][1] * other.v[1] + self.v[0][2] * other.v[2];
        let y = self.v[1][0] * other.v[0] + self.v[1][1] * other.v[1] + self.v[1][2] * other.v[2];
        let z = self.v[2][0] * other.v[0] + self.v[2][1] * other.v[1] + self.v[2][2] * other.v[2];
        Vector3d { v: [x, y, z] }
    }

    #[inline]
    pub fn mul_vector_fused(&self, other: Vector3d) -> Vector3d {
        let x = mlaf(
            mlaf(self.v[0][0] * other.v[0], self.v[0][1], other.v[1]),
            self.v[0][2],
            other.v[2],
        );
        let y = mlaf(
            mlaf(self.v[1][0] * other.v[0], self.v[1][1], other.v[1]),
            self.v[1][2],
            other.v[2],
        );
        let z = mlaf(
            mlaf(self.v[2][0] * other.v[0], self.v[2][1], other.v[1]),
            self.v[2][2],
            other.v[2],
        );
        Vector3d { v: [x, y, z] }
    }

    #[inline]
    pub fn mat_mul(&self, other: Matrix3d) -> Self {
        let mut result = Matrix3d::default();

        for i in 0..3 {
            for j in 0..3 {
                result.v[i][j] = mlaf(
                    mlaf(self.v[i][0] * other.v[0][j], self.v[i][1], other.v[1][j]),
                    self.v[i][2],
                    other.v[2][j],
                );
            }
        }

        result
    }

    #[inline]
    pub const fn mat_mul_const(&self, other: Matrix3d) -> Self {
        let mut result = Matrix3d { v: [[0f64; 3]; 3] };
        let mut i = 0usize;
        while i < 3 {
            let mut j = 0usize;
            while j < 3 {
                result.v[i][j] = self.v[i][0] * other.v[0][j]
                    + self.v[i][1] * other.v[1][j]
                    + self.v[i][2] * other.v[2][j];
                j += 1;
            }
            i += 1;
        }

        result
    }
}

/// Holds CIE XYZ representation
#[repr(C)]
#[derive(Clone, Debug, Copy, Default, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_vector(self) -> Vector3d {
        Vector3d {
            v: [self.x, self.y, self.z],
        }
    }

}

impl Mul<f64> for Xyz {
    type Output = Xyz;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f64> for Xyz {
    type Output = Xyz;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

/// CIE xy chromaticity coordinates
#[derive(Clone, Debug, Copy, PartialEq)]
#[repr(C)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Tristimulus values with unit luminance
    #[inline]
    pub const fn to_xyz(&self) -> Xyz {
        Xyz {
            x: self.x / self.y,
            y: 1f64,
            z: (1f64 - self.x - self.y) / self.y,
        }
    }

    pub const D65: Chromaticity = Chromaticity {
        x: 0.3127,
        y: 0.3290,
    };

    pub const D50: Chromaticity = Chromaticity {
        x: 0.3457,
        y: 0.3585,
    };
}

impl TryFrom<Xyz> for Chromaticity {
    type Error = ColourError;

    #[inline]
    fn try_from(xyz: Xyz) -> Result<Self, Self::Error> {
        let sum = xyz.x + xyz.y + xyz.z;

        if sum == 0.0 {
            return Err(ColourError::NumericDegeneracy(
                "tristimulus values sum to zero",
            ));
        }
        let rec = 1f64 / sum;

        Ok(Chromaticity {
            x: xyz.x * rec,
            y: xyz.y * rec,
        })
    }
}
