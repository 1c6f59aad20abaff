use crate::error::{Result, SeedError};
use crate::types::{AdministrativeData, District};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn load_districts<P: AsRef<Path>>(path: P) -> Result<Vec<District>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| SeedError::io(path, e))?;
    let data = parse_districts(&contents)?;
    info!("Loaded {} districts from {}", data.len(), path.display());
    Ok(data)
}

pub fn parse_districts(json: &str) -> Result<Vec<District>> {
    let data: AdministrativeData = serde_json::from_str(json)?;
    Ok(data.districts)
}
