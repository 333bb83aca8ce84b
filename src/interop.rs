//! Conversions to and from [`nalgebra`] types.

use crate::{matrix::Matrix3, quaternion::Quaternion, vector::Vector3};

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(vector: nalgebra::Vector3<f64>) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(vector: Vector3) -> Self {
        Self::new(vector.x(), vector.y(), vector.z())
    }
}

impl From<nalgebra::Matrix3<f64>> for Matrix3 {
    fn from(matrix: nalgebra::Matrix3<f64>) -> Self {
        Self::from_rows(std::array::from_fn(|row| {
            std::array::from_fn(|col| matrix[(row, col)])
        }))
    }
}

impl From<Matrix3> for nalgebra::Matrix3<f64> {
    fn from(matrix: Matrix3) -> Self {
        Self::from_fn(|row, col| matrix.element(row, col))
    }
}

impl From<nalgebra::Quaternion<f64>> for Quaternion {
    fn from(quaternion: nalgebra::Quaternion<f64>) -> Self {
        Self::new(quaternion.w, quaternion.i, quaternion.j, quaternion.k)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f64> {
    fn from(quaternion: Quaternion) -> Self {
        Self::new(quaternion.w(), quaternion.x(), quaternion.y(), quaternion.z())
    }
}
