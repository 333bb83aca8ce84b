//! Vectors.

use crate::{
    error::{MathError, Result, nondegenerate_norm},
    matrix::MatrixView,
    quaternion::Quaternion,
};
use approx::{abs_diff_eq, relative_eq};
use bytemuck::{Pod, Zeroable};
use std::{fmt, ops::Index};

/// A 3-dimensional vector.
///
/// Every triple of real numbers is a valid vector, including the zero vector.
/// Operators return new values; [`Vector3::normalize`] is the only method
/// that modifies the vector in place.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 3]", from = "[f64; 3]")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// The number of components.
    pub const LEN: usize = 3;

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a unit vector along the x-axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Creates a unit vector along the y-axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Creates a unit vector along the z-axis.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The number of components, which is always 3.
    #[inline]
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    /// A vector is never empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns a vector with the given scalar added to each component.
    #[inline]
    pub fn add_scalar(&self, scalar: f64) -> Self {
        Self::new(self.x + scalar, self.y + scalar, self.z + scalar)
    }

    /// Returns the vector with each component multiplied by the given scalar.
    #[inline]
    pub fn scaled(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Computes the norm (length) of the vector.
    ///
    /// Intermediate squares do not overflow or underflow, so every finite
    /// nonzero vector has a finite nonzero norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Divides the vector by its norm in place.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateNorm`] if the norm is zero or not
    /// finite. The vector is left unchanged in that case.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Computes the normalized version of the vector.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateNorm`] if the norm is zero or not
    /// finite.
    pub fn normalized(&self) -> Result<Self> {
        let norm = nondegenerate_norm(self.norm())?;
        Ok(Self::new(self.x / norm, self.y / norm, self.z / norm))
    }

    /// Whether every component differs from the corresponding component of
    /// `other` by strictly less than `epsilon`.
    #[inline]
    pub fn approx_equals(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }

    /// Embeds the vector as the vector part of a quaternion with zero scalar
    /// part.
    #[inline]
    pub const fn to_pure_quaternion(&self) -> Quaternion {
        Quaternion::from_vector_part(*self)
    }

    /// The component with the given index, treating the vector as a flat
    /// sequence.
    ///
    /// # Errors
    /// Returns [`MathError::VectorIndexOutOfBounds`] if `index` is not 0, 1
    /// or 2.
    pub fn try_at_vec(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::VectorIndexOutOfBounds {
                index,
                len: Self::LEN,
            }),
        }
    }

    /// The component with the given index.
    ///
    /// # Panics
    /// If `index` is not 0, 1 or 2.
    pub fn at_vec(&self, index: usize) -> f64 {
        match self.try_at_vec(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// A vector viewed as a 3x1 column matrix.
impl MatrixView for Vector3 {
    fn dims(&self) -> (usize, usize) {
        (Self::LEN, 1)
    }

    fn try_at(&self, row: usize, col: usize) -> Result<f64> {
        if col != 0 || row >= Self::LEN {
            return Err(MathError::IndexOutOfBounds {
                row,
                col,
                rows: Self::LEN,
                cols: 1,
            });
        }
        self.try_at_vec(row)
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3, f64, Vector3, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f64, Vector3, Vector3, |a, b| { b.scaled(*a) });

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl Index<usize> for Vector3 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!(
                "{}",
                MathError::VectorIndexOutOfBounds {
                    index,
                    len: Self::LEN
                }
            ),
        }
    }
}

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    abs_diff_eq!(a.x, b.x, epsilon = epsilon)
        && abs_diff_eq!(a.y, b.y, epsilon = epsilon)
        && abs_diff_eq!(a.z, b.z, epsilon = epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    relative_eq!(a.x, b.x, epsilon = epsilon, max_relative = max_relative)
        && relative_eq!(a.y, b.y, epsilon = epsilon, max_relative = max_relative)
        && relative_eq!(a.z, b.z, epsilon = epsilon, max_relative = max_relative)
});

/// Formats the vector as `[x, y, z]`, honoring any requested precision.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "[{:.p$}, {:.p$}, {:.p$}]", self.x, self.y, self.z)
        } else {
            write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-7;

    #[test]
    fn vector3_accessors_work() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn vector3_dot_product_works() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);
        assert_abs_diff_eq!(v1.dot(&v2), 32.0, epsilon = EPSILON);
    }

    #[test]
    fn vector3_cross_product_of_basis_vectors_is_right_handed() {
        assert_eq!(Vector3::unit_x().cross(&Vector3::unit_y()), Vector3::unit_z());
        assert_eq!(Vector3::unit_y().cross(&Vector3::unit_z()), Vector3::unit_x());
        assert_eq!(Vector3::unit_z().cross(&Vector3::unit_x()), Vector3::unit_y());
    }

    #[test]
    fn vector3_cross_product_is_anticommutative() {
        let v1 = Vector3::new(1.0, -2.0, 0.5);
        let v2 = Vector3::new(3.0, 4.0, -6.0);
        assert_abs_diff_eq!(v1.cross(&v2), -v2.cross(&v1), epsilon = EPSILON);
    }

    #[test]
    fn vector3_cross_product_of_parallel_vectors_is_zero() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(v.cross(&v.scaled(2.5)), Vector3::zeros(), epsilon = EPSILON);
        assert_abs_diff_eq!(v.cross(&-v), Vector3::zeros(), epsilon = EPSILON);
    }

    #[test]
    fn vector3_cross_product_is_orthogonal_to_inputs() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(-4.0, 0.5, 2.0);
        let cross = v1.cross(&v2);
        assert_abs_diff_eq!(cross.dot(&v1), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(cross.dot(&v2), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn adding_vectors_works() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(&v1 + &v2, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(v2 - v1, Vector3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn adding_scalar_to_vector_works() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert!(v.add_scalar(3.0).approx_equals(&Vector3::new(4.0, 5.0, 6.0), EPSILON));
    }

    #[test]
    fn scaling_vector_works() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        let expected = Vector3::new(2.0, -4.0, 6.0);
        assert_eq!(v.scaled(2.0), expected);
        assert_eq!(&v * 2.0, expected);
        assert_eq!(2.0 * v, expected);
        assert_eq!(v, Vector3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn computing_vector3_norm_works() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(v.norm(), 14.0_f64.sqrt(), epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm_squared(), 14.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector3_in_place_gives_unit_vector() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.normalize().unwrap();
        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(
            v,
            Vector3::new(1.0, 2.0, 3.0).scaled(14.0_f64.sqrt().recip()),
            epsilon = EPSILON
        );
    }

    #[test]
    fn normalizing_zero_vector3_fails_and_leaves_it_unchanged() {
        let mut v = Vector3::zeros();
        assert_eq!(v.normalize(), Err(MathError::DegenerateNorm { norm: 0.0 }));
        assert_eq!(v, Vector3::zeros());
        assert!(Vector3::zeros().normalized().is_err());
    }

    #[test]
    fn normalizing_non_finite_vector3_fails() {
        assert!(Vector3::new(f64::INFINITY, 0.0, 0.0).normalized().is_err());
        assert!(Vector3::new(f64::NAN, 1.0, 0.0).normalized().is_err());
    }

    #[test]
    fn approx_traits_compare_vector3_componentwise() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let w = v + Vector3::new(0.0, 0.0, 1e-9);
        assert_abs_diff_eq!(v, w, epsilon = 1e-8);
        assert!(!abs_diff_eq!(v, w, epsilon = 1e-10));
        assert!(relative_eq!(v, w, epsilon = 1e-12, max_relative = 1e-8));
        assert!(!relative_eq!(v, w, epsilon = 1e-12, max_relative = 1e-12));
    }

    #[test]
    fn normalizing_very_long_and_very_short_vector3_works() {
        for scale in [1e200, 1e-200, 5e-324, f64::MAX] {
            let v = Vector3::new(scale, 0.0, 0.0).normalized().unwrap();
            assert_eq!(v, Vector3::unit_x());
        }
        let v = Vector3::new(3e200, 4e200, 0.0).normalized().unwrap();
        assert!(v.approx_equals(&Vector3::new(0.6, 0.8, 0.0), EPSILON));
    }

    #[test]
    fn approx_equals_respects_epsilon() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(1.0 + 1e-5, 2.0, 3.0 - 1e-5);
        assert!(v1.approx_equals(&v2, 1e-4));
        assert!(!v1.approx_equals(&v2, 1e-6));
    }

    #[test]
    fn approx_equals_is_strict() {
        let v1 = Vector3::new(0.0, 0.0, 0.0);
        let v2 = Vector3::new(0.5, 0.0, 0.0);
        assert!(!v1.approx_equals(&v2, 0.5));
        assert!(v1.approx_equals(&v2, 0.5 + 1e-12));
    }

    #[test]
    fn converting_to_pure_quaternion_works() {
        let v = Vector3::new(5.0, 3.0, 1.0);
        let q = v.to_pure_quaternion();
        assert_eq!(q.w(), 0.0);
        assert_eq!(q.vector_part(), v);
    }

    #[test]
    fn vector3_behaves_as_column_matrix() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.dims(), (3, 1));
        assert_eq!(v.at(0, 0), 1.0);
        assert_eq!(v.at(2, 0), 3.0);
        assert_eq!(
            v.try_at(3, 0),
            Err(MathError::IndexOutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 1
            })
        );
        assert!(v.try_at(0, 1).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn accessing_vector3_row_out_of_range_panics() {
        Vector3::new(1.0, 2.0, 3.0).at(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn accessing_vector3_column_out_of_range_panics() {
        Vector3::new(1.0, 2.0, 3.0).at(0, 1);
    }

    #[test]
    fn transposed_vector3_is_row_matrix() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let t = v.transposed();
        assert_eq!(t.dims(), (1, 3));
        assert_eq!(t.at(0, 2), v.z());
        assert!(t.try_at(2, 0).is_err());
    }

    #[test]
    fn flat_vector3_access_works() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.at_vec(2), 3.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(
            v.try_at_vec(3),
            Err(MathError::VectorIndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn flat_vector3_access_out_of_range_panics() {
        Vector3::new(1.0, 2.0, 3.0).at_vec(3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn indexing_vector3_out_of_range_panics() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn displaying_vector3_honors_precision() {
        let v = Vector3::new(1.0, -0.5, 2.25);
        assert_eq!(format!("{v}"), "[1, -0.5, 2.25]");
        assert_eq!(format!("{v:.2}"), "[1.00, -0.50, 2.25]");
    }

    #[test]
    fn converting_vector3_to_and_from_array_works() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
    }
}
