pub mod agent;
pub mod check;

pub use agent::handle_agent_command;
pub use check::handle_check_command;
