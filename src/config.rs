//! Rule configuration of the special agent as stored by the monitoring host,
//! and its translation into agent command-line arguments.

use serde::Deserialize;

use crate::cli::DEFAULT_USERNAME;
use crate::error::Result;

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AgentParams {
    #[serde(default)]
    pub engine_fqdn: String,
    pub engine_url: String,
    #[serde(default = "default_username")]
    pub username: String,
    /// Password-store reference (`id:path`).
    pub password: String,
    #[serde(default)]
    pub certfile: String,
    #[serde(default)]
    pub no_piggyback: bool,
}

impl AgentParams {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_arguments(&self) -> Vec<String> {
        let mut args = Vec::new();

        if !self.engine_fqdn.is_empty() {
            args.extend(["--engine-fqdn".to_string(), self.engine_fqdn.clone()]);
        }
        args.extend(["--engine-url".to_string(), self.engine_url.clone()]);
        if !self.username.is_empty() {
            args.extend(["-u".to_string(), self.username.clone()]);
        }
        if !self.password.is_empty() {
            args.extend(["-p".to_string(), self.password.clone()]);
        }
        if !self.certfile.is_empty() {
            args.extend(["--certfile".to_string(), self.certfile.clone()]);
        }
        if self.no_piggyback {
            args.push("--no-piggyback".to_string());
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::AgentCli;
    use clap::Parser;

    #[test]
    fn test_minimal_params() {
        let params = AgentParams::from_yaml(
            "engine_url: https://engine.example/ovirt-engine\npassword: ovirt:/var/stored_passwords\n",
        )
        .unwrap();
        assert_eq!(
            params.to_arguments(),
            vec![
                "--engine-url",
                "https://engine.example/ovirt-engine",
                "-u",
                "admin@internal",
                "-p",
                "ovirt:/var/stored_passwords",
            ]
        );
    }

    #[test]
    fn test_full_params_round_trip_through_cli() {
        let params = AgentParams {
            engine_fqdn: "engine.example".to_string(),
            engine_url: "https://engine.example/ovirt-engine".to_string(),
            username: "monitor@internal".to_string(),
            password: "ovirt:/var/stored_passwords".to_string(),
            certfile: "/etc/ssl/engine.pem".to_string(),
            no_piggyback: true,
        };
        let mut argv = vec!["agent_ovirt".to_string()];
        argv.extend(params.to_arguments());

        let cli = AgentCli::try_parse_from(argv).unwrap();
        assert_eq!(cli.engine_fqdn.as_deref(), Some("engine.example"));
        assert_eq!(cli.username, "monitor@internal");
        assert_eq!(cli.password.as_deref(), Some("ovirt:/var/stored_passwords"));
        assert!(cli.no_piggyback);
    }

    #[test]
    fn test_missing_engine_url_rejected() {
        assert!(AgentParams::from_yaml("password: x:y\n").is_err());
    }
}
