use anyhow::Result;
use log::debug;
use std::io::Write;

use crate::{
    api::QueryOccupancy,
    render::{PENDING_MESSAGE, Renderer},
    runtime::Runtime,
    view::QuerySession,
};

use super::config::Config;

pub const PROMPT: &str = "Query> ";

/// Interactive loop: read queries from the terminal until EOF or `exit`.
#[tracing::instrument(skip(runtime, api_url))]
pub async fn ask<R: Runtime>(runtime: R, api_url: Option<String>, color: bool) -> Result<()> {
    let config = Config::new(runtime, api_url)?;
    run_ask(
        &config.runtime,
        config.api,
        Renderer::new(color),
        &mut std::io::stdout(),
    )
    .await
}

pub async fn run_ask<R: Runtime, Q: QueryOccupancy, W: Write>(
    runtime: &R,
    api: Q,
    renderer: Renderer,
    out: &mut W,
) -> Result<()> {
    let mut session = QuerySession::new(api);

    while let Some(line) = runtime.read_line(PROMPT)? {
        let command = line.trim();
        if command.eq_ignore_ascii_case("exit") || command.eq_ignore_ascii_case("quit") {
            break;
        }
        if command.is_empty() {
            continue;
        }

        writeln!(out, "{}", PENDING_MESSAGE)?;
        match session.submit(&line).await {
            Ok(state) => writeln!(out, "{}\n", renderer.state(state))?,
            Err(e) => writeln!(out, "{}\n", renderer.alert(&e.to_string()))?,
        }
    }

    debug!("Leaving interactive session");
    Ok(())
}
