use serde::{Deserialize, Serialize};

/// Desk category.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeskType {
    Standing,
    Regular,
}

impl DeskType {
    pub fn label(&self) -> &'static str {
        match self {
            DeskType::Standing => "Standing",
            DeskType::Regular => "Regular",
        }
    }
}

/// Current state of a desk.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeskStatus {
    Available,
    Occupied,
    Maintenance,
}

impl DeskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeskStatus::Available => "Available",
            DeskStatus::Occupied => "Occupied",
            DeskStatus::Maintenance => "Maintenance",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DeskStatus::Available)
    }
}

/// A candidate desk returned by the backend.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DeskRecommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub desk_type: DeskType,
    pub area_id: String,
    pub vergesense_area_id: String,
    pub floor: i64,
    pub zone: String,
    pub location_description: String,
    pub features: Vec<String>,
    pub status: DeskStatus,
    /// ISO-8601 timestamp, passed through as sent.
    pub last_used: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpaceType {
    Floor,
    Zone,
    Area,
}

/// A node of the building hierarchy (floor, zone or area).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Space {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub space_type: SpaceType,
    pub capacity: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Body of `POST /query-occupancy`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QueryRequest<'a> {
    pub query_text: &'a str,
}

/// Error body sent by the backend on failure.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ErrorDetail {
    pub detail: Option<String>,
}
