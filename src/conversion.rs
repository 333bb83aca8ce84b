//! Conversion from rotation matrices to quaternions.

use crate::{matrix::Matrix3, quaternion::Quaternion};

/// Which of the four equivalent formulas recovers the quaternion. Each is
/// named after the candidate value that was largest when it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    M00,
    M11,
    M22,
    Trace,
}

impl Branch {
    /// Picks the formula belonging to the largest of `M00`, `M11`, `M22` and
    /// the trace, preferring the earliest on ties.
    fn select(matrix: &Matrix3) -> Self {
        let candidates = [
            matrix.element(0, 0),
            matrix.element(1, 1),
            matrix.element(2, 2),
            matrix.trace(),
        ];
        match argmax(&candidates) {
            Some(1) => Self::M11,
            Some(2) => Self::M22,
            Some(3) => Self::Trace,
            _ => Self::M00,
        }
    }
}

/// Returns the index of the largest value, or [`None`] if the slice is
/// empty.
///
/// Values are compared with strict greater-than, so the first of several
/// equal maxima wins. A NaN never replaces the current maximum.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let (first, rest) = values.split_first()?;
    let mut max_index = 0;
    let mut max_value = *first;
    for (index, &value) in rest.iter().enumerate() {
        if value > max_value {
            max_index = index + 1;
            max_value = value;
        }
    }
    Some(max_index)
}

/// Computes a unit quaternion representing the same rotation as the given
/// orthonormal matrix.
///
/// The quaternion components can be read off the matrix in four
/// algebraically equivalent ways, each of which divides by a quantity that
/// vanishes for some rotations. The way used here is the one whose leading
/// term (`4q²` for one of the components) is largest, so the unnormalized
/// result is never dominated by cancellation error. The unnormalized result
/// is finally divided by its norm.
///
/// The sign of the result is arbitrary, as `q` and `-q` describe the same
/// rotation. The input is not checked for orthonormality; for matrices that
/// are not rotations the result is meaningless.
pub fn quaternion_from_rotation_matrix(matrix: &Matrix3) -> Quaternion {
    let m = |row, col| matrix.element(row, col);

    let branch = Branch::select(matrix);
    log::trace!("Converting rotation matrix to quaternion using the {branch:?} branch");

    let unnormalized = match branch {
        Branch::M00 => Quaternion::new(
            m(2, 1) - m(1, 2),
            1.0 + m(0, 0) - m(1, 1) - m(2, 2),
            m(0, 1) + m(1, 0),
            m(0, 2) + m(2, 0),
        ),
        Branch::M11 => Quaternion::new(
            m(0, 2) - m(2, 0),
            m(1, 0) + m(0, 1),
            1.0 - m(0, 0) + m(1, 1) - m(2, 2),
            m(1, 2) + m(2, 1),
        ),
        Branch::M22 => Quaternion::new(
            m(1, 0) - m(0, 1),
            m(2, 0) + m(0, 2),
            m(2, 1) + m(1, 2),
            1.0 - m(0, 0) - m(1, 1) + m(2, 2),
        ),
        Branch::Trace => Quaternion::new(
            1.0 + m(0, 0) + m(1, 1) + m(2, 2),
            m(2, 1) - m(1, 2),
            m(0, 2) - m(2, 0),
            m(1, 0) - m(0, 1),
        ),
    };

    // For a rotation matrix the leading term is at least 1, so the norm is
    // never zero here.
    unnormalized.scaled(unnormalized.norm().recip())
}
