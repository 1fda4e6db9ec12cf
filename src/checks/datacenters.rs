use serde_json::Value;

use crate::checks::params::CheckParams;
use crate::checks::types::{CheckOutput, Service, State};
use crate::checks::{find_by_name, text_or, version_string};
use crate::ovirt::types::items;

pub fn discover(section: &Value) -> Vec<Service> {
    items(section, "datacenters")
        .iter()
        .map(|dc| Service::item(text_or(&dc["name"], "unknown")))
        .collect()
}

fn status_state(status: &str) -> State {
    match status {
        "up" => State::Ok,
        "maintenance" => State::Warn,
        _ => State::Crit,
    }
}

pub fn check(item: Option<&str>, _params: &CheckParams, section: &Value) -> CheckOutput {
    let mut output = CheckOutput::default();
    let item = item.unwrap_or_default();

    let Some(datacenter) = find_by_name(items(section, "datacenters"), item) else {
        output.summary(State::Unknown, format!("Data Center {} not found", item));
        return output;
    };

    output.summary(
        State::Ok,
        format!("Data Center ID: {}", text_or(&datacenter["id"], "unknown")),
    );

    let status = text_or(&datacenter["status"], "unknown");
    output.summary(status_state(&status), format!("Status: {}", status));

    if let Some(version) = datacenter.get("version") {
        output.summary(State::Ok, format!("Version: {}", version_string(version, "unknown")));
    }

    let supported: Vec<String> = datacenter
        .get("supported_versions")
        .map(|sv| items(sv, "version"))
        .unwrap_or(&[])
        .iter()
        .map(|version| version_string(version, "?"))
        .collect();
    if !supported.is_empty() {
        output.notice(State::Ok, format!("Supported versions: {}", supported.join(", ")));
    }

    if let Some(description) = datacenter["description"].as_str().filter(|d| !d.is_empty()) {
        output.notice(State::Ok, format!("Description: {}", description));
    }

    output
}
