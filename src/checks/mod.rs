//! Check plugins interpreting the agent's sections.
//!
//! Each section name maps to one [`CheckPlugin`] with a discovery and a check
//! function. [`run_checks`] discovers services on a parsed agent output and
//! evaluates every one of them.

pub mod types;
pub mod parse;
pub mod params;
pub mod overview;
pub mod hosts;
pub mod datacenters;
pub mod clusters;
pub mod storage_domains;
pub mod vmstats;
pub mod snapshots;

use serde::Serialize;
use serde_json::Value;

use crate::ovirt::types::text_of;
use crate::sections;

pub use params::CheckParams;
pub use parse::{parse_agent_output, ParsedSection};
pub use types::{CheckOutput, CheckResult, Metric, Service, State};

pub type DiscoveryFn = fn(&Value) -> Vec<Service>;
pub type CheckFn = fn(Option<&str>, &CheckParams, &Value) -> CheckOutput;

pub struct CheckPlugin {
    pub section: &'static str,
    /// `%s` is replaced by the service item.
    pub service_name: &'static str,
    pub discover: DiscoveryFn,
    pub check: CheckFn,
}

impl CheckPlugin {
    pub fn service_description(&self, service: &Service) -> String {
        match &service.item {
            Some(item) => self.service_name.replace("%s", item),
            None => self.service_name.to_string(),
        }
    }
}

pub const PLUGINS: &[CheckPlugin] = &[
    CheckPlugin {
        section: sections::OVERVIEW,
        service_name: "oVirt Engine",
        discover: overview::discover,
        check: overview::check,
    },
    CheckPlugin {
        section: sections::HOSTS,
        service_name: "oVirt Host",
        discover: hosts::discover,
        check: hosts::check,
    },
    CheckPlugin {
        section: sections::DATACENTERS,
        service_name: "oVirt Data Center %s",
        discover: datacenters::discover,
        check: datacenters::check,
    },
    CheckPlugin {
        section: sections::CLUSTERS,
        service_name: "oVirt Cluster %s",
        discover: clusters::discover,
        check: clusters::check,
    },
    CheckPlugin {
        section: sections::STORAGE_DOMAINS,
        service_name: "oVirt Storage Domain %s",
        discover: storage_domains::discover,
        check: storage_domains::check,
    },
    CheckPlugin {
        section: sections::VMSTATS,
        service_name: "oVirt VM Statistics",
        discover: vmstats::discover,
        check: vmstats::check,
    },
    CheckPlugin {
        section: sections::SNAPSHOTS,
        service_name: "oVirt VM Snapshots",
        discover: snapshots::discover,
        check: snapshots::check,
    },
    CheckPlugin {
        section: sections::SNAPSHOTS_ENGINE,
        service_name: "oVirt Engine Snapshots",
        discover: snapshots::discover_engine,
        check: snapshots::check_engine,
    },
];

pub fn plugin_for(section: &str) -> Option<&'static CheckPlugin> {
    PLUGINS.iter().find(|plugin| plugin.section == section)
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceReport {
    pub service: String,
    pub state: State,
    pub results: Vec<CheckResult>,
    pub metrics: Vec<Metric>,
}

/// Discover and check every service on the sections attributed to `host`
/// (`None` for the engine itself).
pub fn run_checks(
    parsed: &[ParsedSection],
    host: Option<&str>,
    params: &CheckParams,
) -> Vec<ServiceReport> {
    let mut reports = Vec::new();

    for section in parsed.iter().filter(|s| s.piggyback.as_deref() == host) {
        let Some(plugin) = plugin_for(&section.name) else {
            continue;
        };

        for service in (plugin.discover)(&section.payload) {
            let mut output = (plugin.check)(service.item.as_deref(), params, &section.payload);
            if output.results.is_empty() {
                output.summary(State::Unknown, "Item not found in monitoring data");
            }
            reports.push(ServiceReport {
                service: plugin.service_description(&service),
                state: output.state(),
                results: output.results,
                metrics: output.metrics,
            });
        }
    }

    reports
}

/// Text of `value`, or `default` if it is null or missing.
pub(crate) fn text_or(value: &Value, default: &str) -> String {
    if value.is_null() {
        default.to_string()
    } else {
        text_of(value)
    }
}

/// Entity counter from an engine summary, `0` when absent.
pub(crate) fn count_at(counts: &Value, key: &str) -> String {
    text_or(&counts[key], "0")
}

pub(crate) fn version_string(version: &Value, missing: &str) -> String {
    format!(
        "{}.{}",
        text_or(&version["major"], missing),
        text_or(&version["minor"], missing)
    )
}

pub(crate) fn find_by_name<'a>(entities: &'a [Value], name: &str) -> Option<&'a Value> {
    entities
        .iter()
        .find(|entity| entity["name"].as_str() == Some(name))
}
