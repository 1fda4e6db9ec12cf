use serde_json::Value;

use crate::checks::params::CheckParams;
use crate::checks::text_or;
use crate::checks::types::{CheckOutput, Service, State};
use crate::ovirt::types::items;

pub fn discover(section: &Value) -> Vec<Service> {
    if section.get("statistics").is_some() {
        vec![Service::single()]
    } else {
        Vec::new()
    }
}

fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn check(_item: Option<&str>, _params: &CheckParams, section: &Value) -> CheckOutput {
    let mut output = CheckOutput::default();

    output.summary(
        State::Ok,
        format!(
            "VM: {}, Type: {}",
            text_or(&section["name"], "Unknown VM"),
            text_or(&section["type"], "Unknown")
        ),
    );

    for stat in items(section, "statistics") {
        let name = text_or(&stat["name"], "unknown");
        let value = numeric(&stat["value"]);

        match name.as_str() {
            "cpu.current.total" => {
                output.summary(State::Ok, format!("CPU usage: {:.1}%", value));
                output.metric("cpu_usage", value);
            }
            "memory.installed" => {
                output.summary(
                    State::Ok,
                    format!("Memory installed: {:.1} MB", value / (1024.0 * 1024.0)),
                );
                output.metric("memory_installed", value);
            }
            "network.current.total" => {
                output.summary(State::Ok, format!("Network usage: {:.1} KB/s", value / 1024.0));
                output.metric("network_usage", value);
            }
            "cpu.current.hypervisor" => {
                output.summary(State::Ok, format!("CPU hypervisor: {:.1}%", value));
                output.metric("cpu_hypervisor", value);
            }
            "cpu.current.guest" => {
                output.summary(State::Ok, format!("CPU guest: {:.1}%", value));
                output.metric("cpu_guest", value);
            }
            _ => {
                let description = text_or(&stat["description"], &name);
                let unit = text_or(&stat["unit"], "");
                output.summary(State::Ok, format!("{}: {} {}", description, value, unit));
                output.metric(name.replace('.', "_"), value);
            }
        }
    }

    output
}
