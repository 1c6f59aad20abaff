use crate::config::Config;
use crate::error::{Result, SeedError};
use crate::loader::load_districts;
use crate::sql::render_upsert;
use crate::stations::build_stations;
use crate::summary::Summary;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SeedReport {
    pub output_path: PathBuf,
    pub summary: Summary,
}

/// Runs the whole batch: load, derive, render, write.
///
/// The seed file is replaced atomically, so a failed run leaves any previous
/// file untouched.
pub fn generate(config: &Config) -> Result<SeedReport> {
    config.validate()?;

    info!("Loading districts from {}", config.input_path.display());
    let districts = load_districts(&config.input_path)?;

    let stations = build_stations(&districts, &config.country);
    let sql = render_upsert(&stations, config);

    write_atomic(&config.output_path, &sql)?;
    info!(
        "Wrote {} stations to {}",
        stations.len(),
        config.output_path.display()
    );

    Ok(SeedReport {
        output_path: config.output_path.clone(),
        summary: Summary::from_stations(&stations, config.sample_size),
    })
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SeedError::io(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).map_err(|e| SeedError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        SeedError::io(path, e)
    })
}
