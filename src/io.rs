//! Reading and writing jobs and configurations as RON (Rusty Object Notation).

use crate::job::{Job, JobConfig};
use anyhow::Context;
use std::{fs, path::Path};

/// Reads the RON file at the given path and deserializes the contents into
/// an object of type `T`.
pub fn parse_ron_file<T>(file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: for<'de> serde::de::Deserialize<'de>,
{
    let file_path = file_path.as_ref();

    let text = fs::read_to_string(file_path)
        .with_context(|| format!("Could not open {}", file_path.display()))?;

    ron::from_str::<T>(&text)
        .with_context(|| format!("Invalid syntax in {}", file_path.display()))
}

/// Serializes the given value to RON and writes it to the given path,
/// creating any missing parent directories.
pub fn write_ron_file<T>(value: &T, output_file_path: impl AsRef<Path>) -> anyhow::Result<()>
where
    T: serde::ser::Serialize,
{
    let output_file_path = output_file_path.as_ref();

    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?;

    if let Some(parent) = output_file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_file_path, text)
        .with_context(|| format!("Could not write {}", output_file_path.display()))
}

/// Reads a list of jobs from the RON file at the given path.
pub fn parse_job_file(file_path: impl AsRef<Path>) -> anyhow::Result<Vec<Job>> {
    let jobs: Vec<Job> = parse_ron_file(file_path)?;
    log::debug!("Parsed {} jobs", jobs.len());
    Ok(jobs)
}

/// Reads a job configuration from the RON file at the given path. Missing
/// fields take their default values.
pub fn parse_config_file(file_path: impl AsRef<Path>) -> anyhow::Result<JobConfig> {
    parse_ron_file(file_path)
}
