//! Quaternions.

use crate::{
    error::{MathError, Result, nondegenerate_norm},
    matrix::Matrix3,
    vector::Vector3,
};
use approx::{abs_diff_eq, relative_eq};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A quaternion with scalar part `w` and vector part `(x, y, z)`.
///
/// A quaternion represents a rotation only when its norm is 1, which this
/// type does not enforce. Use [`UnitQuaternion`] where the unit norm should be
/// guaranteed.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

/// A quaternion of unit norm, representing a rotation in 3D.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Quaternion", into = "Quaternion")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitQuaternion {
    inner: Quaternion,
}

impl Quaternion {
    /// Creates a new quaternion with the given components.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a new quaternion with the given scalar and vector parts.
    #[inline]
    pub const fn from_parts(w: f64, vector_part: Vector3) -> Self {
        Self::new(w, vector_part.x(), vector_part.y(), vector_part.z())
    }

    /// Creates a pure quaternion (zero scalar part) with the given vector
    /// part.
    #[inline]
    pub const fn from_vector_part(vector_part: Vector3) -> Self {
        Self::from_parts(0.0, vector_part)
    }

    /// Creates the identity quaternion `(1, 0, 0, 0)`.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Computes a unit quaternion for the rotation described by the given
    /// rotation matrix. See [`crate::quaternion_from_rotation_matrix`].
    #[inline]
    pub fn from_rotation_matrix(matrix: &Matrix3) -> Self {
        crate::conversion::quaternion_from_rotation_matrix(matrix)
    }

    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The scalar part `w`.
    #[inline]
    pub const fn scalar_part(&self) -> f64 {
        self.w
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn vector_part(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the quaternion with each component multiplied by the given
    /// scalar.
    #[inline]
    pub fn scaled(&self, scalar: f64) -> Self {
        Self::new(
            self.w * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }

    /// Computes the conjugate `(w, -x, -y, -z)`, which is the inverse of a
    /// unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Negates all four components. The result represents the same rotation.
    #[inline]
    pub fn negated(&self) -> Self {
        self.scaled(-1.0)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.w.hypot(self.x).hypot(self.y).hypot(self.z)
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Divides all four components by the norm in place.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateNorm`] if the norm is zero or not
    /// finite. The quaternion is left unchanged in that case.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Computes the normalized version of the quaternion.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateNorm`] if the norm is zero or not
    /// finite.
    pub fn normalized(&self) -> Result<Self> {
        let norm = nondegenerate_norm(self.norm())?;
        Ok(Self::new(
            self.w / norm,
            self.x / norm,
            self.y / norm,
            self.z / norm,
        ))
    }

    /// Whether every component differs from the corresponding component of
    /// `other` by strictly less than `epsilon`.
    #[inline]
    pub fn approx_equals(&self, other: &Self, epsilon: f64) -> bool {
        (self.w - other.w).abs() < epsilon
            && (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }

    /// Rotates the given vector by this quaternion.
    ///
    /// Computes `v + 2/m (r × (s v + r × v))`, with `s` and `r` the scalar and
    /// vector parts and `m` the squared norm. This equals the vector part of
    /// the sandwich product `q v q*` for a unit quaternion without forming
    /// the two Hamilton products, and the division by `m` makes it valid for
    /// any nonzero quaternion. A zero quaternion gives non-finite components.
    #[inline]
    pub fn rotate(&self, vector: &Vector3) -> Vector3 {
        let r = self.vector_part();
        let s = self.w;
        let m = self.norm_squared();
        let inner = vector.scaled(s) + r.cross(vector);
        vector + r.cross(&inner).scaled(2.0 / m)
    }

    /// Computes the rotation matrix corresponding to this quaternion.
    ///
    /// The quaternion must already be normalized; no normalization is
    /// performed here.
    pub fn to_rotation_matrix(&self) -> Matrix3 {
        let Self { w, x, y, z } = *self;
        Matrix3::from_rows([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - z * w),
                2.0 * (x * z + y * w),
            ],
            [
                2.0 * (x * y + z * w),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - x * w),
            ],
            [
                2.0 * (x * z - y * w),
                2.0 * (y * z + x * w),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from([w, x, y, z]: [f64; 4]) -> Self {
        Self::new(w, x, y, z)
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        [quaternion.w, quaternion.x, quaternion.y, quaternion.z]
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.w + b.w, a.x + b.x, a.y + b.y, a.z + b.z)
});

// Hamilton product.
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
    )
});

impl_binop!(Mul, mul, Quaternion, f64, Quaternion, |a, b| {
    a.scaled(*b)
});

impl_binop!(Mul, mul, f64, Quaternion, Quaternion, |a, b| {
    b.scaled(*a)
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| { val.negated() });

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    abs_diff_eq!(a.w, b.w, epsilon = epsilon)
        && abs_diff_eq!(a.x, b.x, epsilon = epsilon)
        && abs_diff_eq!(a.y, b.y, epsilon = epsilon)
        && abs_diff_eq!(a.z, b.z, epsilon = epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    relative_eq!(a.w, b.w, epsilon = epsilon, max_relative = max_relative)
        && relative_eq!(a.x, b.x, epsilon = epsilon, max_relative = max_relative)
        && relative_eq!(a.y, b.y, epsilon = epsilon, max_relative = max_relative)
        && relative_eq!(a.z, b.z, epsilon = epsilon, max_relative = max_relative)
});

/// Formats the quaternion as `(w; x, y, z)`, honoring any requested
/// precision.
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(
                f,
                "({:.p$}; {:.p$}, {:.p$}, {:.p$})",
                self.w, self.x, self.y, self.z
            )
        } else {
            write!(f, "({}; {}, {}, {})", self.w, self.x, self.y, self.z)
        }
    }
}

impl UnitQuaternion {
    /// The unit quaternion for no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::unchecked_from(Quaternion::identity())
    }

    /// Normalizes the given quaternion.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateNorm`] if the quaternion has zero or
    /// non-finite norm.
    pub fn normalized_from(quaternion: Quaternion) -> Result<Self> {
        quaternion.normalized().map(Self::unchecked_from)
    }

    /// Wraps the given quaternion without normalizing it. The caller must
    /// ensure that it has unit norm.
    #[inline]
    pub const fn unchecked_from(quaternion: Quaternion) -> Self {
        Self { inner: quaternion }
    }

    /// Computes the unit quaternion for the rotation described by the given
    /// rotation matrix.
    #[inline]
    pub fn from_rotation_matrix(matrix: &Matrix3) -> Self {
        Self::unchecked_from(Quaternion::from_rotation_matrix(matrix))
    }

    /// The inverse rotation, which for a unit quaternion is the conjugate.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::unchecked_from(self.inner.conjugate())
    }

    /// The same rotation with all components negated.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::unchecked_from(self.inner.negated())
    }

    #[inline]
    pub const fn scalar_part(&self) -> f64 {
        self.inner.scalar_part()
    }

    #[inline]
    pub const fn vector_part(&self) -> Vector3 {
        self.inner.vector_part()
    }

    #[inline]
    pub fn rotate(&self, vector: &Vector3) -> Vector3 {
        self.inner.rotate(vector)
    }

    #[inline]
    pub fn to_rotation_matrix(&self) -> Matrix3 {
        self.inner.to_rotation_matrix()
    }

    #[inline]
    pub const fn to_quaternion(&self) -> Quaternion {
        self.inner
    }

    /// Whether this and `other` describe the same rotation, comparing
    /// against both `other` and its negation with the given tolerance.
    pub fn same_rotation_as(&self, other: &Self, epsilon: f64) -> bool {
        self.inner.approx_equals(&other.inner, epsilon)
            || self.inner.approx_equals(&other.inner.negated(), epsilon)
    }
}

impl Default for UnitQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<Quaternion> for UnitQuaternion {
    type Error = MathError;

    fn try_from(quaternion: Quaternion) -> Result<Self> {
        Self::normalized_from(quaternion)
    }
}

impl From<UnitQuaternion> for Quaternion {
    #[inline]
    fn from(unit: UnitQuaternion) -> Self {
        unit.inner
    }
}

impl_binop!(
    Mul,
    mul,
    UnitQuaternion,
    UnitQuaternion,
    UnitQuaternion,
    |a, b| { UnitQuaternion::unchecked_from(a.inner * b.inner) }
);

impl_abs_diff_eq!(UnitQuaternion, |a, b, epsilon| {
    abs_diff_eq!(a.inner, b.inner, epsilon = epsilon)
});

impl_relative_eq!(UnitQuaternion, |a, b, epsilon, max_relative| {
    relative_eq!(a.inner, b.inner, epsilon = epsilon, max_relative = max_relative)
});

impl fmt::Display for UnitQuaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
