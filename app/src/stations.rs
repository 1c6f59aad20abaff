use crate::codes::assign_codes;
use crate::divisions::division_label;
use crate::keys::derive_key;
use crate::types::{District, Station, StationStatus};
use tracing::info;

/// Builds one station per district, preserving input order.
///
/// Codes are assigned sequentially over the whole batch, so reordering the
/// input can change which district receives a contested code. Keys depend
/// only on the district id.
pub fn build_stations(districts: &[District], country: &str) -> Vec<Station> {
    let codes = assign_codes(districts.iter().map(|d| d.name.as_str()));

    let stations: Vec<Station> = districts
        .iter()
        .zip(codes)
        .map(|(district, code)| Station {
            key: derive_key(&district.id),
            code,
            name: district.name.clone(),
            bn_name: district.bn_name.clone(),
            city: district.name.clone(),
            division: division_label(&district.division_id).to_string(),
            country: country.to_string(),
            latitude: district.lat,
            longitude: district.lon,
            status: StationStatus::Active,
        })
        .collect();

    info!("Built {} stations", stations.len());
    stations
}
