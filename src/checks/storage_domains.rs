use serde_json::Value;

use crate::checks::params::{CheckParams, FilesystemParams};
use crate::checks::types::{CheckOutput, Service, State};
use crate::checks::text_or;
use crate::ovirt::types::items;

const MIB: f64 = 1024.0 * 1024.0;

fn item_name(domain: &Value) -> String {
    format!(
        "{} id {}",
        text_or(&domain["name"], "unknown"),
        text_or(&domain["id"], "unknown")
    )
}

fn is_inactive(domain: &Value) -> bool {
    domain["status"].as_str() == Some("inactive")
}

/// Byte counters arrive as strings or numbers.
fn bytes(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn render_bytes(value: f64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut scaled = value;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", scaled, UNITS[unit])
}

pub fn discover(section: &Value) -> Vec<Service> {
    items(section, "storage_domains")
        .iter()
        .filter(|domain| !is_inactive(domain))
        .map(|domain| Service::item(item_name(domain)))
        .collect()
}

fn check_filesystem(output: &mut CheckOutput, size_bytes: f64, available_bytes: f64, params: &FilesystemParams) {
    let used_bytes = size_bytes - available_bytes;
    let used_percent = used_bytes / size_bytes * 100.0;
    let (warn, crit) = params.levels;

    let state = if used_percent >= crit {
        State::Crit
    } else if used_percent >= warn {
        State::Warn
    } else {
        State::Ok
    };

    let mut summary = format!(
        "Used: {:.2}% - {} of {}",
        used_percent,
        render_bytes(used_bytes),
        render_bytes(size_bytes)
    );
    if state != State::Ok {
        summary.push_str(&format!(" (warn/crit at {:.2}%/{:.2}% used)", warn, crit));
    }
    output.summary(state, summary);

    output.metric("fs_used", used_bytes / MIB);
    output.metric("fs_free", available_bytes / MIB);
    output.metric("fs_size", size_bytes / MIB);
    output.metric("fs_used_percent", used_percent);
}

pub fn check(item: Option<&str>, params: &CheckParams, section: &Value) -> CheckOutput {
    let mut output = CheckOutput::default();
    let item = item.unwrap_or_default();

    let Some(domain) = items(section, "storage_domains")
        .iter()
        .find(|domain| item_name(domain) == item)
    else {
        return output;
    };

    if is_inactive(domain) {
        output.summary(State::Unknown, "Storage Domain inactive");
        return output;
    }

    let available = bytes(&domain["available"]);
    let size = available + bytes(&domain["used"]);
    if size == 0.0 {
        output.summary(State::Unknown, "Size of Storage Domain not available");
        return output;
    }

    check_filesystem(&mut output, size, available, &params.storage_domains);
    output
}
