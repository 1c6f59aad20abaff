use crate::error::{Result, SeedError};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "data/bangladesh_administrative_divisions.json";
pub const DEFAULT_OUTPUT_PATH: &str = "scripts/seed-bd-stations.sql";
pub const DEFAULT_DATABASE: &str = "travio_catalog";
pub const DEFAULT_COUNTRY: &str = "Bangladesh";
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub database: String,
    pub country: String,
    pub sample_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            database: DEFAULT_DATABASE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl Config {
    pub fn with_paths(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input_path: input.as_ref().to_path_buf(),
            output_path: output.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// The database name ends up verbatim in a `\c` directive, so it has to be
    /// a plain identifier.
    pub fn validate(&self) -> Result<()> {
        if self.database.is_empty() {
            return Err(SeedError::Config("Database name is required".to_string()));
        }
        if !self
            .database
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(SeedError::Config(format!(
                "Invalid database name: {}",
                self.database
            )));
        }
        if self.country.trim().is_empty() {
            return Err(SeedError::Config("Country is required".to_string()));
        }
        Ok(())
    }
}
