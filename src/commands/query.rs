use anyhow::{Result, bail};
use log::debug;
use std::io::Write;

use crate::{
    api::QueryOccupancy,
    render::Renderer,
    runtime::Runtime,
    view::{QuerySession, ViewState},
};

use super::config::Config;

/// Output options for a one-shot query.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    pub color: bool,
    pub json: bool,
}

/// Send one query and print the recommendations.
#[tracing::instrument(skip(runtime, words, api_url))]
pub async fn query<R: Runtime>(
    runtime: R,
    words: &[String],
    api_url: Option<String>,
    options: QueryOptions,
) -> Result<()> {
    let config = Config::new(runtime, api_url)?;
    let text = words.join(" ");
    run_query(&text, config.api, options, &mut std::io::stdout()).await
}

pub async fn run_query<Q: QueryOccupancy, W: Write>(
    query_text: &str,
    api: Q,
    options: QueryOptions,
    out: &mut W,
) -> Result<()> {
    let mut session = QuerySession::new(api);
    let state = session.submit(query_text).await?;

    match state {
        ViewState::Succeeded(desks) => {
            debug!("Query returned {} desk(s)", desks.len());
            if options.json {
                writeln!(out, "{}", serde_json::to_string_pretty(desks)?)?;
            } else {
                writeln!(out, "{}", Renderer::new(options.color).recommendations(desks))?;
            }
            Ok(())
        }
        ViewState::Failed(message) => bail!("{}", message),
        ViewState::Idle | ViewState::Pending => bail!("Query did not complete"),
    }
}
