use serde_json::Value;

use crate::error::{AgentError, Result};
use crate::ovirt::types::{items, project, text_of, HOST_FIELDS};
use crate::sections::{Section, HOSTS};

/// One piggyback section per host, attributed to the host's name.
pub fn collect_host_sections(hosts_data: &Value) -> Result<Vec<Section>> {
    items(hosts_data, "host")
        .iter()
        .map(|host| {
            let projection = project(host, HOST_FIELDS);
            let name = projection
                .get("name")
                .map(text_of)
                .ok_or(AgentError::MissingIdentity { entity: "host" })?;
            Ok(Section::piggybacked(HOSTS, name, Value::Object(projection)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_host_sections() {
        let hosts = json!({"host": [
            {"name": "h1", "status": "up", "cpu": {"cores": 4}},
            {"name": "h2", "status": "maintenance"}
        ]});
        let sections = collect_host_sections(&hosts).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].piggyback.as_deref(), Some("h1"));
        assert_eq!(sections[0].payload, json!({"status": "up", "name": "h1"}));
        assert_eq!(sections[1].piggyback.as_deref(), Some("h2"));
    }

    #[test]
    fn test_host_without_name_fails() {
        let hosts = json!({"host": [{"status": "up"}]});
        assert!(matches!(
            collect_host_sections(&hosts),
            Err(AgentError::MissingIdentity { entity: "host" })
        ));
    }

    #[test]
    fn test_no_hosts() {
        assert!(collect_host_sections(&json!({})).unwrap().is_empty());
    }
}
