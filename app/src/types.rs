use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Top-level shape of the administrative divisions dataset. Only the
/// `districts` list is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct AdministrativeData {
    pub districts: Vec<District>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct District {
    pub id: String,
    pub division_id: String,
    pub name: String,
    pub bn_name: String,
    pub lat: Coordinate,
    pub lon: Coordinate,
}

/// A latitude or longitude in decimal degrees.
///
/// The upstream dataset stores coordinates as JSON strings (`"23.4682747"`),
/// other exports use plain numbers. Both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate(pub f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = String;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        match raw {
            RawCoordinate::Number(value) => Ok(Self(value)),
            RawCoordinate::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|_| format!("invalid coordinate: {text:?}")),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Active,
}

impl StationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
        }
    }
}

/// One row of the `stations` seed batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub key: Uuid,
    pub code: String,
    pub name: String,
    pub bn_name: String,
    pub city: String,
    pub division: String,
    pub country: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub status: StationStatus,
}
