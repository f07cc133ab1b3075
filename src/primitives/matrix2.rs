//! 2×2 matrix backed by nalgebra's `Matrix2<f64>`.

use crate::error::{MathError, MathResult};
use crate::primitives::Vec2;
use nalgebra::Matrix2 as NaMatrix2;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A 2×2 matrix of `f64` entries, addressed as `m[(row, col)]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2 {
    data: NaMatrix2<f64>,
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix2[[{:.4}, {:.4}], [{:.4}, {:.4}]]",
            self[(0, 0)],
            self[(0, 1)],
            self[(1, 0)],
            self[(1, 1)]
        )
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<NaMatrix2<f64>> for Matrix2 {
    fn from(data: NaMatrix2<f64>) -> Self {
        Self { data }
    }
}

impl Matrix2 {
    pub fn from_rows(rows: [[f64; 2]; 2]) -> Self {
        Self {
            data: NaMatrix2::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1]),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            data: NaMatrix2::zeros(),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            data: NaMatrix2::identity(),
        }
    }

    #[inline]
    pub fn as_matrix(&self) -> &NaMatrix2<f64> {
        &self.data
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            data: self.data * factor,
        }
    }

    pub fn scale_mut(&mut self, factor: f64) {
        self.data *= factor;
    }

    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            data: self.data * other.data,
        }
    }

    pub fn mul_vec(&self, v: &Vec2) -> Vec2 {
        Vec2::from(self.data * v.as_vector())
    }

    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.transpose(),
        }
    }

    pub fn transpose_mut(&mut self) {
        self.data.transpose_mut();
    }

    pub fn determinant(&self) -> f64 {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Adjugate `[[d, -b], [-c, a]]`.
    pub fn adjoint(&self) -> Self {
        Self::from_rows([
            [self[(1, 1)], -self[(0, 1)]],
            [-self[(1, 0)], self[(0, 0)]],
        ])
    }

    pub fn inverse(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(MathError::ZeroDeterminant);
        }

        Ok(self.adjoint().scale(1.0 / det))
    }

    pub fn inverse_mut(&mut self) -> MathResult<()> {
        *self = self.inverse()?;
        Ok(())
    }

    #[inline]
    pub fn trace(&self) -> f64 {
        self.data.trace()
    }

    pub fn is_equal(&self, other: &Self) -> bool {
        self.data == other.data
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.data - other.data).amax() < tolerance
    }
}

impl Index<(usize, usize)> for Matrix2 {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<(usize, usize)> for Matrix2 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.data[index]
    }
}

impl Add for Matrix2 {
    type Output = Matrix2;

    fn add(self, rhs: Matrix2) -> Matrix2 {
        Matrix2 {
            data: self.data + rhs.data,
        }
    }
}

impl Sub for Matrix2 {
    type Output = Matrix2;

    fn sub(self, rhs: Matrix2) -> Matrix2 {
        Matrix2 {
            data: self.data - rhs.data,
        }
    }
}

impl Mul for Matrix2 {
    type Output = Matrix2;

    fn mul(self, rhs: Matrix2) -> Matrix2 {
        self.multiply(&rhs)
    }
}

impl Mul<Vec2> for Matrix2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.mul_vec(&rhs)
    }
}
