use regex::Regex;
use serde_json::Value;

use crate::checks::params::{compile_valid_patterns, CheckParams};
use crate::checks::text_or;
use crate::checks::types::{CheckOutput, Service, State};
use crate::ovirt::types::items;

#[derive(Debug, Default, PartialEq)]
pub struct SnapshotTally {
    pub counted: usize,
    pub ignored: usize,
    /// Matched an ignore pattern but were counted because an allow pattern
    /// matched too.
    pub allowed: usize,
}

/// Count snapshots by description: ignore patterns drop a snapshot, allow
/// patterns take precedence over ignore patterns.
pub fn tally_snapshots<'a>(
    descriptions: impl IntoIterator<Item = &'a str>,
    allow: &[Regex],
    ignore: &[Regex],
) -> SnapshotTally {
    let mut tally = SnapshotTally::default();
    for description in descriptions {
        if ignore.iter().any(|re| re.is_match(description)) {
            if allow.iter().any(|re| re.is_match(description)) {
                tally.allowed += 1;
                tally.counted += 1;
            } else {
                tally.ignored += 1;
            }
        } else {
            tally.counted += 1;
        }
    }
    tally
}

pub fn discover(section: &Value) -> Vec<Service> {
    if section.get("snapshots").is_some() {
        vec![Service::single()]
    } else {
        Vec::new()
    }
}

pub fn check(_item: Option<&str>, params: &CheckParams, section: &Value) -> CheckOutput {
    let mut output = CheckOutput::default();
    let snapshots = items(section, "snapshots");

    if snapshots.is_empty() {
        output.summary(State::Ok, "No snapshots found");
        return output;
    }

    let allow = compile_valid_patterns(&params.snapshots.allow);
    let ignore = compile_valid_patterns(&params.snapshots.ignore);

    let tally = tally_snapshots(
        snapshots
            .iter()
            .map(|s| s["description"].as_str().unwrap_or("")),
        &allow,
        &ignore,
    );

    if tally.counted > 0 {
        output.summary(params.snapshots.state, format!("Found {} snapshots", tally.counted));
    } else {
        output.summary(State::Ok, "No snapshots found");
    }

    if tally.ignored > 0 {
        output.notice(
            State::Ok,
            format!("Ignored {} snapshots based on configured patterns", tally.ignored),
        );
    }
    if tally.allowed > 0 {
        output.notice(
            State::Ok,
            format!("Allowed {} snapshots that would otherwise be ignored", tally.allowed),
        );
    }

    output
}

pub fn discover_engine(_section: &Value) -> Vec<Service> {
    vec![Service::single()]
}

pub fn check_engine(_item: Option<&str>, params: &CheckParams, section: &Value) -> CheckOutput {
    let mut output = CheckOutput::default();
    let mut snapshot_count = 0;
    let mut vms_with_snapshots = Vec::new();

    for vm in section.as_array().map(Vec::as_slice).unwrap_or(&[]) {
        let snapshots = items(vm, "snapshots");
        if !snapshots.is_empty() {
            snapshot_count += snapshots.len();
            vms_with_snapshots.push(text_or(&vm["name"], "unknown"));
        }
    }

    if snapshot_count > 0 {
        output.summary(
            params.snapshots_engine.state,
            format!(
                "Found {} snapshots across {} VMs",
                snapshot_count,
                vms_with_snapshots.len()
            ),
        );
        output.notice(
            State::Ok,
            format!("VMs with snapshots: {}", vms_with_snapshots.join(", ")),
        );
    } else {
        output.summary(State::Ok, "No snapshots found");
    }

    output
}
