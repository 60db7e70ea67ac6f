//! CLI actions. Each action resolves its [`config::Config`] and then hands
//! off to a `run_*`/`print_*` function that writes to any `Write`.

mod ask;
pub mod config;
mod inventory;
mod query;

pub use ask::{PROMPT, ask, run_ask};
pub use inventory::{desks, print_desks, print_spaces, spaces};
pub use query::{QueryOptions, query, run_query};
