//! HTTP client module with error normalization.

mod client;

pub use client::HttpClient;
