//! Quaternions, 3D vectors and rotation matrices, with a numerically robust
//! conversion from rotation matrices back to quaternions.

#[macro_use]
mod macros;

pub mod conversion;
pub mod error;
#[cfg(feature = "nalgebra")]
mod interop;
#[cfg(feature = "ron")]
pub mod io;
pub mod job;
pub mod matrix;
pub mod quaternion;
pub mod vector;

#[cfg(test)]
mod testing;

pub use conversion::{argmax, quaternion_from_rotation_matrix};
pub use error::{MathError, Result};
pub use matrix::{Matrix3, MatrixView, Transposed};
pub use quaternion::{Quaternion, UnitQuaternion};
pub use vector::Vector3;
