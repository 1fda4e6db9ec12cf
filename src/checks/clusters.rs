use serde_json::Value;

use crate::checks::params::CheckParams;
use crate::checks::types::{CheckOutput, Service, State};
use crate::checks::{find_by_name, text_or, version_string};
use crate::ovirt::types::items;

pub fn discover(section: &Value) -> Vec<Service> {
    items(section, "cluster")
        .iter()
        .map(|cluster| Service::item(text_or(&cluster["name"], "unknown")))
        .collect()
}

pub fn check(item: Option<&str>, _params: &CheckParams, section: &Value) -> CheckOutput {
    let mut output = CheckOutput::default();
    let item = item.unwrap_or_default();

    let Some(cluster) = find_by_name(items(section, "cluster"), item) else {
        output.summary(State::Unknown, format!("Cluster {} not found", item));
        return output;
    };

    output.summary(
        State::Ok,
        format!("Cluster ID: {}", text_or(&cluster["id"], "unknown")),
    );

    if let Some(version) = cluster.get("version") {
        output.summary(State::Ok, format!("Version: {}", version_string(version, "unknown")));
    }

    if let Some(datacenter_id) = cluster["data_center"].get("id") {
        output.summary(State::Ok, format!("Data Center ID: {}", text_or(datacenter_id, "None")));
    }

    if let Some(description) = cluster["description"].as_str().filter(|d| !d.is_empty()) {
        output.notice(State::Ok, format!("Description: {}", description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cluster_check() {
        let section = json!({"cluster": [{
            "id": "c1",
            "name": "Default",
            "version": {"major": 4, "minor": 7},
            "description": "",
            "data_center": {"id": "dc1"}
        }]});
        assert_eq!(discover(&section), vec![Service::item("Default")]);

        let output = check(Some("Default"), &CheckParams::default(), &section);
        assert_eq!(
            output.summaries(),
            vec!["Cluster ID: c1", "Version: 4.7", "Data Center ID: dc1"]
        );
        assert_eq!(output.results.len(), 3);
    }

    #[test]
    fn test_cluster_without_datacenter() {
        let section = json!({"cluster": [{"id": "c1", "name": "Detached", "data_center": {"id": null}}]});
        let output = check(Some("Detached"), &CheckParams::default(), &section);
        assert_eq!(output.summaries(), vec!["Cluster ID: c1", "Data Center ID: None"]);
    }

    #[test]
    fn test_missing_cluster() {
        let output = check(Some("x"), &CheckParams::default(), &json!({}));
        assert_eq!(output.state(), State::Unknown);
    }
}
