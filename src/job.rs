//! Batch rotation jobs.

use crate::{
    conversion::quaternion_from_rotation_matrix,
    error::MathError,
    matrix::Matrix3,
    quaternion::Quaternion,
    vector::Vector3,
};
use std::fmt;
use thiserror::Error;

/// Settings shared by all jobs in a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct JobConfig {
    /// Number of decimals used when printing results.
    pub precision: usize,
    /// Whether input quaternions are normalized before use. When disabled,
    /// the caller is responsible for supplying unit quaternions.
    pub normalize_inputs: bool,
    /// When set, every conversion is verified by converting the result back
    /// and comparing it with the input using this tolerance.
    pub round_trip_tolerance: Option<f64>,
}

/// A single operation on quaternions, vectors or rotation matrices.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Job {
    /// Rotate a vector by a quaternion.
    Rotate {
        quaternion: Quaternion,
        vector: Vector3,
    },
    /// Convert a quaternion to a rotation matrix.
    ToMatrix { quaternion: Quaternion },
    /// Convert a rotation matrix to a quaternion.
    FromMatrix { matrix: Matrix3 },
    /// Multiply the quaternions together, left to right.
    Compose { quaternions: Vec<Quaternion> },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JobOutput {
    Vector(Vector3),
    Matrix(Matrix3),
    Quaternion(Quaternion),
}

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Invalid input quaternion")]
    InvalidQuaternion(#[from] MathError),

    #[error("Composition requires at least one quaternion")]
    EmptyComposition,

    #[error(
        "Quaternion {original} came back as {recovered} after conversion to a matrix \
         (tolerance {tolerance})"
    )]
    QuaternionRoundTrip {
        original: Quaternion,
        recovered: Quaternion,
        tolerance: f64,
    },

    #[error(
        "Matrix did not survive conversion to a quaternion (tolerance {tolerance}):\n\
         {original}\nbecame\n{recovered}"
    )]
    MatrixRoundTrip {
        original: Matrix3,
        recovered: Matrix3,
        tolerance: f64,
    },
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            normalize_inputs: true,
            round_trip_tolerance: None,
        }
    }
}

impl JobConfig {
    fn prepare(&self, quaternion: &Quaternion) -> Result<Quaternion, JobError> {
        if self.normalize_inputs {
            Ok(quaternion.normalized()?)
        } else {
            Ok(*quaternion)
        }
    }
}

impl Job {
    /// A short name for the kind of job.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rotate { .. } => "rotate",
            Self::ToMatrix { .. } => "to-matrix",
            Self::FromMatrix { .. } => "from-matrix",
            Self::Compose { .. } => "compose",
        }
    }

    /// Runs the job with the given configuration.
    ///
    /// # Errors
    /// Returns an error if an input quaternion cannot be normalized, if a
    /// composition has no factors, or if a requested round-trip check fails.
    pub fn execute(&self, config: &JobConfig) -> Result<JobOutput, JobError> {
        log::debug!("Executing {} job", self.name());

        match self {
            Self::Rotate { quaternion, vector } => {
                let quaternion = config.prepare(quaternion)?;
                Ok(JobOutput::Vector(quaternion.rotate(vector)))
            }
            Self::ToMatrix { quaternion } => {
                let quaternion = config.prepare(quaternion)?;
                let matrix = quaternion.to_rotation_matrix();

                if let Some(tolerance) = config.round_trip_tolerance {
                    let recovered = quaternion_from_rotation_matrix(&matrix);
                    if !(recovered.approx_equals(&quaternion, tolerance)
                        || recovered.approx_equals(&quaternion.negated(), tolerance))
                    {
                        return Err(JobError::QuaternionRoundTrip {
                            original: quaternion,
                            recovered,
                            tolerance,
                        });
                    }
                }
                Ok(JobOutput::Matrix(matrix))
            }
            Self::FromMatrix { matrix } => {
                let quaternion = quaternion_from_rotation_matrix(matrix);

                if let Some(tolerance) = config.round_trip_tolerance {
                    let recovered = quaternion.to_rotation_matrix();
                    if !recovered.approx_equals(matrix, tolerance) {
                        return Err(JobError::MatrixRoundTrip {
                            original: *matrix,
                            recovered,
                            tolerance,
                        });
                    }
                }
                Ok(JobOutput::Quaternion(quaternion))
            }
            Self::Compose { quaternions } => {
                let (first, rest) = quaternions
                    .split_first()
                    .ok_or(JobError::EmptyComposition)?;

                let mut product = config.prepare(first)?;
                for quaternion in rest {
                    product = product * config.prepare(quaternion)?;
                }
                Ok(JobOutput::Quaternion(product))
            }
        }
    }
}

/// Runs all the given jobs in order, stopping at the first failure.
///
/// # Errors
/// Returns the index of the failing job together with its error.
pub fn execute_all(
    jobs: &[Job],
    config: &JobConfig,
) -> Result<Vec<JobOutput>, (usize, JobError)> {
    jobs.iter()
        .enumerate()
        .map(|(index, job)| job.execute(config).map_err(|error| (index, error)))
        .collect()
}

impl fmt::Display for JobOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector(vector) => fmt::Display::fmt(vector, f),
            Self::Matrix(matrix) => fmt::Display::fmt(matrix, f),
            Self::Quaternion(quaternion) => fmt::Display::fmt(quaternion, f),
        }
    }
}
