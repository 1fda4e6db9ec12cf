use std::path::PathBuf;

use clap::{ArgGroup, Parser};

pub const DEFAULT_USERNAME: &str = "admin@internal";

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "agent_ovirt")]
#[command(about = "oVirt special agent: polls the engine REST API and prints monitoring sections")]
#[command(group(ArgGroup::new("credential").required(true).args(["password", "secret"])))]
pub struct AgentCli {
    /// Increase verbosity (for even more output use -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Debug mode: report errors with their full cause chain
    #[arg(long)]
    pub debug: bool,

    /// oVirt Engine FQDN
    #[arg(long)]
    pub engine_fqdn: Option<String>,

    /// oVirt Engine URL, e.g. https://ovirt.example.com/ovirt-engine
    #[arg(long)]
    pub engine_url: String,

    /// oVirt Engine username
    #[arg(short, long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// oVirt Engine password from the password store, as id:path
    #[arg(short, long)]
    pub password: Option<String>,

    /// oVirt Engine password entered manually
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Path to a PEM certificate used to verify the engine
    #[arg(long)]
    pub certfile: Option<PathBuf>,

    /// Disable generation of piggyback data
    #[arg(long)]
    pub no_piggyback: bool,
}

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "check_ovirt")]
#[command(about = "Run the oVirt checks against agent output")]
pub struct CheckCli {
    /// Agent output to read (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// YAML file with check parameters
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Evaluate sections piggybacked to this host or VM instead of the engine
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Output format (json, yaml, or pretty)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_defaults() {
        let cli = AgentCli::try_parse_from(["agent_ovirt", "--engine-url", "https://e", "-s", "pw"])
            .unwrap();
        assert_eq!(cli.username, DEFAULT_USERNAME);
        assert_eq!(cli.secret.as_deref(), Some("pw"));
        assert!(!cli.no_piggyback);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_agent_credential_required() {
        assert!(AgentCli::try_parse_from(["agent_ovirt", "--engine-url", "https://e"]).is_err());
    }

    #[test]
    fn test_agent_credentials_exclusive() {
        let result = AgentCli::try_parse_from([
            "agent_ovirt", "--engine-url", "https://e", "-s", "pw", "-p", "id:/tmp/store",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_agent_full_invocation() {
        let cli = AgentCli::try_parse_from([
            "agent_ovirt",
            "--engine-fqdn", "engine.example",
            "--engine-url", "https://engine.example/ovirt-engine",
            "-u", "monitor@internal",
            "-p", "ovirt:/omd/sites/cmk/var/check_mk/stored_passwords",
            "--certfile", "/etc/ssl/engine.pem",
            "--no-piggyback",
            "-vvv",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.username, "monitor@internal");
        assert_eq!(cli.verbose, 3);
        assert!(cli.debug);
        assert!(cli.no_piggyback);
        assert_eq!(cli.certfile, Some(PathBuf::from("/etc/ssl/engine.pem")));
    }

    #[test]
    fn test_check_defaults() {
        let cli = CheckCli::try_parse_from(["check_ovirt"]).unwrap();
        assert_eq!(cli.format, "pretty");
        assert!(cli.host.is_none());
    }
}
