//! Runtime abstraction for system operations.
//!
//! Commands read the environment and the terminal through [`Runtime`] so
//! they can be exercised with a mock.
//!
//! # Structure
//!
//! - `env` - Environment variables
//! - `user` - User interaction (line prompts)

mod env;
mod user;

use anyhow::Result;
use std::env as std_env;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // User interaction
    /// Show `prompt` and read one line. Returns `None` at end of input.
    /// The trailing newline is stripped.
    fn read_line(&self, prompt: &str) -> Result<Option<String>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        self.read_line_impl(prompt)
    }
}
