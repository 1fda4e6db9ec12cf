use serde_json::Value;

use crate::checks::params::CheckParams;
use crate::checks::types::{CheckOutput, Service, State};
use crate::checks::{count_at, text_or};

pub fn discover(_section: &Value) -> Vec<Service> {
    vec![Service::single()]
}

pub fn check(_item: Option<&str>, _params: &CheckParams, section: &Value) -> CheckOutput {
    let mut output = CheckOutput::default();
    let api = &section["api"];
    let summary = &api["summary"];

    let version = text_or(&api["product_info"]["version"]["full_version"], "unknown");
    output.summary(State::Ok, format!("oVirt Engine {}", version));

    for (key, label) in [
        ("hosts", "hosts"),
        ("storage_domains", "storage domains"),
        ("vms", "VMs"),
    ] {
        let counts = &summary[key];
        output.summary(
            State::Ok,
            format!(
                "{} of {} {} active",
                count_at(counts, "active"),
                count_at(counts, "total"),
                label
            ),
        );
    }

    if section["global_maintenance"].as_bool().unwrap_or(false) {
        output.summary(State::Crit, "Global maintenance active");
    } else {
        output.summary(State::Ok, "Global maintenance off");
    }

    output.notice(State::Ok, "oVirt Engine");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overview_check() {
        let section = json!({
            "api": {
                "product_info": {"version": {"full_version": "4.5.4-1.el8"}},
                "summary": {
                    "hosts": {"active": 2, "total": 3},
                    "storage_domains": {"active": "4", "total": "4"},
                    "vms": {"active": 10, "total": 12}
                }
            },
            "global_maintenance": false
        });
        let output = check(None, &CheckParams::default(), &section);
        assert_eq!(
            output.summaries(),
            vec![
                "oVirt Engine 4.5.4-1.el8",
                "2 of 3 hosts active",
                "4 of 4 storage domains active",
                "10 of 12 VMs active",
                "Global maintenance off",
            ]
        );
        assert_eq!(output.state(), State::Ok);
    }

    #[test]
    fn test_global_maintenance_is_critical() {
        let output = check(None, &CheckParams::default(), &json!({"global_maintenance": true}));
        assert_eq!(output.state(), State::Crit);
        assert_eq!(output.summaries()[0], "oVirt Engine unknown");
        assert_eq!(output.summaries()[1], "0 of 0 hosts active");
    }
}
