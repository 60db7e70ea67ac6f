//! Occupancy API: wire types and the query client.

mod client;
mod types;

pub use client::{ClientOptions, DEFAULT_API_BASE_URL, OccupancyClient, QueryOccupancy};
pub use types::{
    DeskRecommendation, DeskStatus, DeskType, ErrorDetail, QueryRequest, Space, SpaceType,
};

#[cfg(test)]
pub use client::MockQueryOccupancy;
