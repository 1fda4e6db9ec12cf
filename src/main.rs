use std::process::ExitCode;

use clap::Parser;
use log::error;
use ovirt_agent::cli::AgentCli;
use ovirt_agent::commands::handle_agent_command;
use ovirt_agent::output::init_logging;
use ovirt_agent::AgentError;

fn main() -> Result<ExitCode, AgentError> {
    let cli = AgentCli::parse();
    init_logging(cli.verbose);

    match handle_agent_command(&cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // --debug: hand the error to the runtime, which prints its full debug form
        Err(e) if cli.debug => Err(e),
        Err(e) => {
            error!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
