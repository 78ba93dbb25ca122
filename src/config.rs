use crate::error::{Result, SquareSumsError};
use std::{env, path::PathBuf};

const ENV_OUTPUT_DIR: &str = "SQUARE_SUMS_OUTPUT_DIR";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory the progress transcript is written to. `None` means
    /// no transcript file is produced.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `SQUARE_SUMS_OUTPUT_DIR` names the transcript directory; unset or
    /// empty leaves it off.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(output_dir) = env::var(ENV_OUTPUT_DIR) {
            if !output_dir.trim().is_empty() {
                let path = PathBuf::from(output_dir);

                // If the path already exists but is not a directory, reject early.
                if path.exists() && !path.is_dir() {
                    return Err(SquareSumsError::InvalidConfiguration(format!(
                        "Output path is not a directory: {}",
                        path.display()
                    )));
                }

                config.output_dir = Some(path);
            }
        }
        Ok(config)
    }
}
