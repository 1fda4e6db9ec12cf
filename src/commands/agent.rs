use std::io;

use log::{debug, info};

use crate::cli::AgentCli;
use crate::client::OvirtClient;
use crate::error::{AgentError, Result};
use crate::ovirt::run_cycle;
use crate::password_store;
use crate::sections::AgentWriter;

fn resolve_password(cli: &AgentCli) -> Result<String> {
    match (&cli.password, &cli.secret) {
        (Some(reference), _) => password_store::resolve_reference(reference),
        (None, Some(secret)) => Ok(secret.clone()),
        (None, None) => Err(AgentError::InvalidParams(
            "either --password or --secret is required".to_string(),
        )),
    }
}

pub fn handle_agent_command(cli: &AgentCli) -> Result<()> {
    let password = resolve_password(cli)?;

    if let Some(fqdn) = &cli.engine_fqdn {
        debug!("Engine FQDN: {}", fqdn);
    }
    info!("Polling {} as {}", cli.engine_url, cli.username);

    let client = OvirtClient::new(
        &cli.engine_url,
        &cli.username,
        &password,
        cli.certfile.as_deref(),
    )?;

    let stdout = io::stdout();
    let mut writer = AgentWriter::new(stdout.lock());
    run_cycle(&client, &mut writer, !cli.no_piggyback)
}
