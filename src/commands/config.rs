use anyhow::Result;
use log::debug;
use reqwest::Client;

use crate::{
    api::{ClientOptions, OccupancyClient, QueryOccupancy},
    http::HttpClient,
    runtime::Runtime,
};

/// Environment variable holding the API base URL.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

pub const USER_AGENT: &str = "deskfinder-cli";

pub struct Config<R: Runtime, Q: QueryOccupancy> {
    pub runtime: R,
    pub api: Q,
}

impl<R: Runtime> Config<R, OccupancyClient> {
    pub fn new(runtime: R, api_url: Option<String>) -> Result<Self> {
        let options = resolve_options(&runtime, api_url);
        debug!("Using API base URL {}", options.api_base_url);

        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let api = OccupancyClient::new(HttpClient::new(client), options);

        Ok(Self { runtime, api })
    }
}

/// Picks the base URL: explicit flag, then `API_BASE_URL`, then the default.
/// Empty values count as unset.
pub fn resolve_options<R: Runtime>(runtime: &R, api_url: Option<String>) -> ClientOptions {
    api_url
        .filter(|url| !url.is_empty())
        .or_else(|| {
            runtime
                .env_var(API_BASE_URL_ENV)
                .ok()
                .filter(|url| !url.is_empty())
        })
        .map(ClientOptions::new)
        .unwrap_or_default()
}
