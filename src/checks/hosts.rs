use serde_json::Value;

use crate::checks::params::CheckParams;
use crate::checks::text_or;
use crate::checks::types::{CheckOutput, Service, State};

pub fn discover(_section: &Value) -> Vec<Service> {
    vec![Service::single()]
}

pub fn check(_item: Option<&str>, _params: &CheckParams, section: &Value) -> CheckOutput {
    let mut output = CheckOutput::default();

    output.summary(State::Ok, format!("Status: {}", text_or(&section["status"], "unknown")));
    output.summary(State::Ok, format!("Type: {}", text_or(&section["type"], "unknown")));
    output.summary(
        State::Ok,
        format!(
            "Version: {}",
            text_or(&section["version"]["full_version"], "unknown")
        ),
    );

    if section["hosted_engine"]["local_maintenance"].as_str() == Some("true") {
        output.summary(State::Warn, "Local maintenance active");
    } else {
        output.summary(State::Ok, "Local maintenance off");
    }

    output.notice(State::Ok, "oVirt Host");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_host_check() {
        let section = json!({
            "name": "h1",
            "status": "up",
            "type": "rhel",
            "version": {"full_version": "vdsm-4.50.3.4"},
            "hosted_engine": {"local_maintenance": "false"}
        });
        let output = check(None, &CheckParams::default(), &section);
        assert_eq!(
            output.summaries(),
            vec![
                "Status: up",
                "Type: rhel",
                "Version: vdsm-4.50.3.4",
                "Local maintenance off",
            ]
        );
        assert_eq!(output.state(), State::Ok);
    }

    #[test]
    fn test_local_maintenance_warns() {
        let section = json!({"hosted_engine": {"local_maintenance": "true"}});
        let output = check(None, &CheckParams::default(), &section);
        assert_eq!(output.state(), State::Warn);
        assert_eq!(output.summaries()[0], "Status: unknown");
    }
}
