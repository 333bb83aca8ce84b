use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::Context;
    use clap::{Parser, Subcommand};
    use rotation_algebra::{
        Matrix3, Quaternion, Vector3,
        io::{parse_config_file, parse_job_file, write_ron_file},
        job::{Job, JobConfig, execute_all},
        with_timing_info_logging,
    };
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    #[command(
        about = "Rotate vectors and convert between quaternions and rotation matrices",
        long_about = None
    )]
    struct Cli {
        /// Path to a RON file with the job configuration
        #[arg(short, long, global = true)]
        config: Option<PathBuf>,

        /// Number of decimals to print (overrides the configuration)
        #[arg(short, long, global = true)]
        precision: Option<usize>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Rotate a vector by a quaternion
        Rotate {
            /// Quaternion as `w,x,y,z`
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,

            /// Vector as `x,y,z`
            #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
            vector: Vector3,
        },
        /// Convert a quaternion to a rotation matrix
        ToMatrix {
            /// Quaternion as `w,x,y,z`
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
        },
        /// Convert a rotation matrix to a quaternion
        FromMatrix {
            /// The nine matrix elements in row-major order, comma-separated
            #[arg(value_parser = parse_matrix, allow_hyphen_values = true)]
            matrix: Matrix3,
        },
        /// Multiply quaternions together, left to right
        Compose {
            /// Quaternions as `w,x,y,z`
            #[arg(
                value_parser = parse_quaternion,
                allow_hyphen_values = true,
                num_args = 1..,
                required = true
            )]
            quaternions: Vec<Quaternion>,
        },
        /// Run all jobs in a RON file
        Run {
            /// Path to the job file
            jobs: PathBuf,
        },
        /// Write the default job configuration to a RON file
        DefaultConfig {
            /// Path to write the configuration to
            output: PathBuf,
        },
    }

    fn parse_components<const N: usize>(text: &str) -> Result<[f64; N], String> {
        let components = text
            .split(',')
            .map(|component| component.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| format!("invalid number in `{text}`: {error}"))?;

        let count = components.len();
        components
            .try_into()
            .map_err(|_| format!("expected {N} comma-separated numbers, got {count}"))
    }

    fn parse_quaternion(text: &str) -> Result<Quaternion, String> {
        parse_components::<4>(text).map(Quaternion::from)
    }

    fn parse_vector(text: &str) -> Result<Vector3, String> {
        parse_components::<3>(text).map(Vector3::from)
    }

    fn parse_matrix(text: &str) -> Result<Matrix3, String> {
        parse_components::<9>(text).map(|elements| Matrix3::from_row_slice(&elements))
    }

    fn load_config(cli: &Cli) -> Result<JobConfig> {
        let mut config = match &cli.config {
            Some(path) => parse_config_file(path)?,
            None => JobConfig::default(),
        };
        if let Some(precision) = cli.precision {
            config.precision = precision;
        }
        log::debug!("Using configuration {config:?}");
        Ok(config)
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        let config = load_config(&cli)?;
        let precision = config.precision;

        let jobs = match cli.command {
            Command::Rotate { quaternion, vector } => vec![Job::Rotate { quaternion, vector }],
            Command::ToMatrix { quaternion } => vec![Job::ToMatrix { quaternion }],
            Command::FromMatrix { matrix } => vec![Job::FromMatrix { matrix }],
            Command::Compose { quaternions } => vec![Job::Compose { quaternions }],
            Command::Run { jobs } => parse_job_file(&jobs)?,
            Command::DefaultConfig { output } => {
                return write_ron_file(&JobConfig::default(), &output).with_context(|| {
                    format!("Could not write configuration to {}", output.display())
                });
            }
        };

        let outputs = with_timing_info_logging!("Running {} jobs", jobs.len(); {
            execute_all(&jobs, &config)
        })
        .map_err(|(index, error)| {
            anyhow::Error::from(error).context(format!(
                "Job {index} ({}) failed",
                jobs[index].name()
            ))
        })?;

        for output in outputs {
            println!("{output:.precision$}");
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
