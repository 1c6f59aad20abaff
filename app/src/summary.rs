use crate::types::Station;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSample {
    pub code: String,
    pub name: String,
    pub bn_name: String,
}

/// Human-readable overview of a generated batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub by_division: BTreeMap<String, usize>,
    pub samples: Vec<StationSample>,
}

impl Summary {
    pub fn from_stations(stations: &[Station], sample_size: usize) -> Self {
        let mut by_division = BTreeMap::new();
        for station in stations {
            *by_division.entry(station.division.clone()).or_insert(0) += 1;
        }

        let samples = stations
            .iter()
            .take(sample_size)
            .map(|s| StationSample {
                code: s.code.clone(),
                name: s.name.clone(),
                bn_name: s.bn_name.clone(),
            })
            .collect();

        Self {
            total: stations.len(),
            by_division,
            samples,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Total Stations: {}", self.total)?;

        writeln!(f, "\n📍 Stations by Division:")?;
        for (division, count) in &self.by_division {
            writeln!(f, "   {division}: {count} stations")?;
        }

        writeln!(f, "\n✨ Sample Station Codes:")?;
        for sample in &self.samples {
            writeln!(f, "   {} - {} ({})", sample.code, sample.name, sample.bn_name)?;
        }

        Ok(())
    }
}
