//! Matrices.

use crate::{
    error::{MathError, Result},
    quaternion::Quaternion,
    vector::Vector3,
};
use approx::{abs_diff_eq, relative_eq};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Read-only access to the elements of a matrix-shaped value.
///
/// Out-of-range access is never clamped or wrapped: [`MatrixView::try_at`]
/// reports it as an error and [`MatrixView::at`] panics.
pub trait MatrixView {
    /// The number of rows and columns.
    fn dims(&self) -> (usize, usize);

    /// The element at the given row and column.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfBounds`] if the row or column lies
    /// outside [`MatrixView::dims`].
    fn try_at(&self, row: usize, col: usize) -> Result<f64>;

    /// The element at the given row and column.
    ///
    /// # Panics
    /// If the row or column lies outside [`MatrixView::dims`].
    fn at(&self, row: usize, col: usize) -> f64 {
        match self.try_at(row, col) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// A view of the transpose of this matrix.
    fn transposed(&self) -> Transposed<'_, Self>
    where
        Self: Sized,
    {
        Transposed { inner: self }
    }
}

/// The transpose of a borrowed [`MatrixView`].
#[derive(Clone, Copy, Debug)]
pub struct Transposed<'a, M> {
    inner: &'a M,
}

/// A 3x3 matrix, stored row by row.
///
/// When obtained from a unit quaternion the matrix is a rotation matrix:
/// orthonormal with determinant +1.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl<M: MatrixView> Transposed<'_, M> {
    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        let (rows, cols) = self.dims();
        if row < rows && col < cols {
            Ok(())
        } else {
            Err(MathError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            })
        }
    }
}

impl<M: MatrixView> MatrixView for Transposed<'_, M> {
    fn dims(&self) -> (usize, usize) {
        let (rows, cols) = self.inner.dims();
        (cols, rows)
    }

    fn try_at(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        self.inner.try_at(col, row)
    }
}

impl Matrix3 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_rows([[0.0; 3]; 3])
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Creates a matrix from nine elements in row-major order.
    #[inline]
    pub const fn from_row_slice(elements: &[f64; 9]) -> Self {
        let e = elements;
        Self::from_rows([[e[0], e[1], e[2]], [e[3], e[4], e[5]], [e[6], e[7], e[8]]])
    }

    /// The rows of the matrix.
    #[inline]
    pub const fn to_rows(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    /// The element at the given row and column.
    ///
    /// # Panics
    /// If the row or column is larger than 2.
    #[inline]
    pub const fn element(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// The row with the given index.
    ///
    /// # Panics
    /// If the index is larger than 2.
    #[inline]
    pub const fn row(&self, index: usize) -> Vector3 {
        let [x, y, z] = self.rows[index];
        Vector3::new(x, y, z)
    }

    /// The column with the given index.
    ///
    /// # Panics
    /// If the index is larger than 2.
    #[inline]
    pub const fn column(&self, index: usize) -> Vector3 {
        Vector3::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
        )
    }

    /// The diagonal elements.
    #[inline]
    pub const fn diagonal(&self) -> Vector3 {
        Vector3::new(self.rows[0][0], self.rows[1][1], self.rows[2][2])
    }

    /// The sum of the diagonal elements.
    #[inline]
    pub fn trace(&self) -> f64 {
        self.rows[0][0] + self.rows[1][1] + self.rows[2][2]
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.row(0).dot(&self.row(1).cross(&self.row(2)))
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub const fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Whether every element differs from the corresponding element of
    /// `other` by strictly less than `epsilon`.
    pub fn approx_equals(&self, other: &Self, epsilon: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }

    /// Whether the matrix is orthonormal with determinant +1, to within
    /// `epsilon` per element of `MᵀM - I` and of the determinant.
    ///
    /// The quaternion conversions never call this; it is offered for callers
    /// who want to validate untrusted input before converting it.
    pub fn is_rotation(&self, epsilon: f64) -> bool {
        (&self.transpose() * self).approx_equals(&Self::identity(), epsilon)
            && (self.determinant() - 1.0).abs() < epsilon
    }

    /// Computes a unit quaternion representing the same rotation as this
    /// matrix. See [`crate::quaternion_from_rotation_matrix`].
    #[inline]
    pub fn to_quaternion(&self) -> Quaternion {
        crate::conversion::quaternion_from_rotation_matrix(self)
    }
}

impl MatrixView for Matrix3 {
    fn dims(&self) -> (usize, usize) {
        (3, 3)
    }

    fn try_at(&self, row: usize, col: usize) -> Result<f64> {
        self.rows
            .get(row)
            .and_then(|elements| elements.get(col))
            .copied()
            .ok_or(MathError::IndexOutOfBounds {
                row,
                col,
                rows: 3,
                cols: 3,
            })
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    #[inline]
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Matrix3> for [[f64; 3]; 3] {
    #[inline]
    fn from(matrix: Matrix3) -> Self {
        matrix.rows
    }
}

impl_binop!(Mul, mul, Matrix3, Matrix3, Matrix3, |a, b| {
    let mut product = Matrix3::zeros();
    for (i, row) in product.rows.iter_mut().enumerate() {
        for (j, element) in row.iter_mut().enumerate() {
            *element = a.row(i).dot(&b.column(j));
        }
    }
    product
});

impl_binop!(Mul, mul, Matrix3, Vector3, Vector3, |a, b| {
    Vector3::new(a.row(0).dot(b), a.row(1).dot(b), a.row(2).dot(b))
});

impl_abs_diff_eq!(Matrix3, |a, b, epsilon| {
    a.rows
        .iter()
        .flatten()
        .zip(b.rows.iter().flatten())
        .all(|(x, y)| abs_diff_eq!(*x, *y, epsilon = epsilon))
});

impl_relative_eq!(Matrix3, |a, b, epsilon, max_relative| {
    a.rows
        .iter()
        .flatten()
        .zip(b.rows.iter().flatten())
        .all(|(x, y)| relative_eq!(*x, *y, epsilon = epsilon, max_relative = max_relative))
});

/// Formats the matrix with one row per line, honoring any requested
/// precision.
impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let row = Vector3::from(*row);
            if let Some(p) = f.precision() {
                write!(f, "{row:.p$}")?;
            } else {
                write!(f, "{row}")?;
            }
        }
        Ok(())
    }
}
