pub mod checks;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod ovirt;
pub mod password_store;
pub mod sections;

pub use error::{AgentError, Result};
