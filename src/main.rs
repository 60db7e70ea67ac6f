use anyhow::Result;
use clap::Parser;
use deskfinder::commands::{self, QueryOptions};

/// deskfinder - find a desk by describing it
///
/// Sends a natural-language query to the occupancy API and lists the
/// recommended desks.
///
/// The API base URL comes from --api-url, then the API_BASE_URL environment
/// variable, and defaults to http://localhost:8000/api/v1.
///
/// Examples:
///   deskfinder query standing desk near marketing on floor 3
///   deskfinder ask
#[derive(Parser, Debug)]
#[command(author, version = env!("DESKFINDER_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Occupancy API base URL
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Disable coloured output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Ask for desk recommendations once
    Query(QueryArgs),

    /// Ask for desk recommendations interactively
    Ask,

    /// List the full desk inventory
    Desks,

    /// List floors, zones and areas
    Spaces,
}

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// What you are looking for, e.g. "quiet standing desk on floor 3"
    #[arg(value_name = "TEXT", required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Print the raw recommendations as JSON
    #[arg(long)]
    pub json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = deskfinder::runtime::RealRuntime;
    let color = !cli.no_color;

    match cli.command {
        Commands::Query(args) => {
            let options = QueryOptions {
                color,
                json: args.json,
            };
            commands::query(runtime, &args.text, cli.api_url, options).await?
        }
        Commands::Ask => commands::ask(runtime, cli.api_url, color).await?,
        Commands::Desks => commands::desks(runtime, cli.api_url, color).await?,
        Commands::Spaces => commands::spaces(runtime, cli.api_url, color).await?,
    }
    Ok(())
}
