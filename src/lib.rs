pub mod api;
pub mod commands;
pub mod error;
pub mod http;
pub mod render;
pub mod runtime;
pub mod view;

pub use error::QueryError;
