//! 3×3 matrix backed by nalgebra's `Matrix3<f64>`.
//!
//! Entries are addressed semantically as `m[(row, col)]`, independent of
//! nalgebra's column-major storage.

use crate::error::{MathError, MathResult};
use crate::primitives::Vec3;
use nalgebra::Matrix3 as NaMatrix3;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A 3×3 matrix of `f64` entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {
    data: NaMatrix3<f64>,
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3[")?;
        for row in 0..3 {
            writeln!(
                f,
                "  [{:.4}, {:.4}, {:.4}]",
                self[(row, 0)],
                self[(row, 1)],
                self[(row, 2)]
            )?;
        }
        write!(f, "]")
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<NaMatrix3<f64>> for Matrix3 {
    fn from(data: NaMatrix3<f64>) -> Self {
        Self { data }
    }
}

impl From<Matrix3> for NaMatrix3<f64> {
    fn from(m: Matrix3) -> Self {
        m.data
    }
}

impl Matrix3 {
    /// Build from rows: `rows[r][c]` becomes entry `(r, c)`.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self {
            data: NaMatrix3::new(
                rows[0][0], rows[0][1], rows[0][2], //
                rows[1][0], rows[1][1], rows[1][2], //
                rows[2][0], rows[2][1], rows[2][2],
            ),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            data: NaMatrix3::zeros(),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            data: NaMatrix3::identity(),
        }
    }

    /// Entries as `[[row0], [row1], [row2]]`.
    pub fn rows(&self) -> [[f64; 3]; 3] {
        let m = &self.data;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    #[inline]
    pub fn as_matrix(&self) -> &NaMatrix3<f64> {
        &self.data
    }

    pub fn set_zero(&mut self) {
        self.data.fill(0.0);
    }

    pub fn set_identity(&mut self) {
        self.data.fill_with_identity();
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            data: self.data * factor,
        }
    }

    pub fn scale_mut(&mut self, factor: f64) {
        self.data *= factor;
    }

    /// Scale column `c` by component `c` of `factors`.
    pub fn scale_columns(&self, factors: &Vec3) -> Self {
        let mut out = *self;
        for col in 0..3 {
            for row in 0..3 {
                out[(row, col)] *= factors[col];
            }
        }
        out
    }

    /// Matrix product `self * other`.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            data: self.data * other.data,
        }
    }

    /// Matrix-vector product `self * v`.
    #[inline]
    pub fn mul_vec(&self, v: &Vec3) -> Vec3 {
        Vec3::from(self.data * v.as_vector())
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
        self.data.determinant()
    }

    /// Adjugate: the transpose of the cofactor matrix, so that `A · adj(A) = det(A) · I`.
    pub fn adjoint(&self) -> Self {
        let m = self;
        Self::from_rows([
            [
                m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
                -(m[(0, 1)] * m[(2, 2)] - m[(0, 2)] * m[(2, 1)]),
                m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
            ],
            [
                -(m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)]),
                m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
                -(m[(0, 0)] * m[(1, 2)] - m[(0, 2)] * m[(1, 0)]),
            ],
            [
                m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)],
                -(m[(0, 0)] * m[(2, 1)] - m[(0, 1)] * m[(2, 0)]),
                m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
            ],
        ])
    }

    /// Inverse via the adjugate.
    ///
    /// # Errors
    /// [`MathError::ZeroDeterminant`] if the determinant is exactly zero.
    pub fn inverse(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(MathError::ZeroDeterminant);
        }

        Ok(self.adjoint().scale(1.0 / det))
    }

    /// Invert in place; on error the matrix is left untouched.
    pub fn inverse_mut(&mut self) -> MathResult<()> {
        *self = self.inverse()?;
        Ok(())
    }

    #[inline]
    pub fn trace(&self) -> f64 {
        self.data.trace()
    }

    /// Exact entry-wise equality.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.data == other.data
    }

    pub fn is_identity(&self) -> bool {
        self.data == NaMatrix3::identity()
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.data - other.data).amax() < tolerance
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.data[index]
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;

    fn add(self, rhs: Matrix3) -> Matrix3 {
        Matrix3 {
            data: self.data + rhs.data,
        }
    }
}

impl AddAssign for Matrix3 {
    fn add_assign(&mut self, rhs: Matrix3) {
        self.data += rhs.data;
    }
}

impl Sub for Matrix3 {
    type Output = Matrix3;

    fn sub(self, rhs: Matrix3) -> Matrix3 {
        Matrix3 {
            data: self.data - rhs.data,
        }
    }
}

impl SubAssign for Matrix3 {
    fn sub_assign(&mut self, rhs: Matrix3) {
        self.data -= rhs.data;
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        self.multiply(&rhs)
    }
}

impl MulAssign for Matrix3 {
    fn mul_assign(&mut self, rhs: Matrix3) {
        self.data *= rhs.data;
    }
}

impl Mul<f64> for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: f64) -> Matrix3 {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for Matrix3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn sample() -> Matrix3 {
        Matrix3::from_rows([[2.0, -1.0, 0.0], [1.0, 3.0, 2.0], [0.0, 1.0, 4.0]])
    }

    #[test]
    fn test_matrix3_row_major_indexing() {
        let m = sample();
        assert_eq!(m[(0, 1)], -1.0);
        assert_eq!(m[(1, 2)], 2.0);
        assert_eq!(m.rows()[2], [0.0, 1.0, 4.0]);
    }

    #[test]
    fn test_matrix3_multiply_matches_manual_product() {
        let a = sample();
        let b = Matrix3::from_rows([[1.0, 0.0, 2.0], [0.0, 1.0, 0.0], [3.0, 0.0, 1.0]]);
        let product = a * b;

        for i in 0..3 {
            for j in 0..3 {
                let expected: f64 = (0..3).map(|k| a[(i, k)] * b[(k, j)]).sum();
                assert!((product[(i, j)] - expected).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_matrix3_determinant_and_trace() {
        let m = sample();
        // 2*(12-2) + 1*(4-0) + 0 = 24
        assert!((m.determinant() - 24.0).abs() < TOLERANCE);
        assert_eq!(m.trace(), 9.0);
    }

    #[test]
    fn test_matrix3_adjoint_identity() {
        let m = sample();
        let product = m * m.adjoint();
        let expected = Matrix3::identity().scale(m.determinant());
        assert!(product.approx_eq(&expected, 1e-10));
    }

    #[test]
    fn test_matrix3_inverse() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Matrix3::identity(), 1e-10));

        let mut n = m;
        n.inverse_mut().unwrap();
        assert!(n.is_equal(&inv));
    }

    #[test]
    fn test_matrix3_singular_inverse_fails() {
        let singular = Matrix3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert_eq!(singular.inverse(), Err(MathError::ZeroDeterminant));

        let mut m = singular;
        assert!(m.inverse_mut().is_err());
        assert!(m.is_equal(&singular));
    }

    #[test]
    fn test_matrix3_transpose() {
        let mut m = sample();
        let t = m.transpose();
        assert_eq!(t[(0, 1)], m[(1, 0)]);
        m.transpose_mut();
        assert!(m.is_equal(&t));
    }

    #[test]
    fn test_matrix3_identity_checks() {
        let mut m = sample();
        assert!(!m.is_identity());
        m.set_identity();
        assert!(m.is_identity());
        assert!(Matrix3::default().is_identity());
    }

    #[test]
    fn test_matrix3_mul_vec_and_scale_columns() {
        let m = sample();
        let v = m * Vec3::new(1.0, 0.0, 1.0);
        assert!(v.approx_eq(&Vec3::new(2.0, 3.0, 4.0), TOLERANCE));

        let scaled = m.scale_columns(&Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(scaled[(0, 1)], -2.0);
        assert_eq!(scaled[(2, 2)], 0.0);
    }
}
