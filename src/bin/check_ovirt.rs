use clap::Parser;
use log::error;
use ovirt_agent::cli::CheckCli;
use ovirt_agent::commands::handle_check_command;
use ovirt_agent::output::init_logging;

fn main() {
    let cli = CheckCli::parse();
    init_logging(cli.verbose);

    if let Err(e) = handle_check_command(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}
