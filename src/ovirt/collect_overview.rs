use serde_json::{Map, Value};

use crate::ovirt::types::{items, project, OVERVIEW_API_FIELDS};

/// True if any host reports hosted-engine global maintenance.
///
/// The engine encodes the flag as the string `"true"`; a JSON boolean does
/// not count.
pub fn global_maintenance(hosts_data: &Value) -> bool {
    items(hosts_data, "host").iter().any(|host| {
        host.get("hosted_engine")
            .and_then(|he| he.get("global_maintenance"))
            .and_then(Value::as_str)
            == Some("true")
    })
}

pub fn collect_overview(api_data: &Value, hosts_data: &Value) -> Value {
    let mut overview = Map::new();

    let api = project(api_data, OVERVIEW_API_FIELDS);
    if !api.is_empty() {
        overview.insert("api".to_string(), Value::Object(api));
    }
    overview.insert(
        "global_maintenance".to_string(),
        Value::Bool(global_maintenance(hosts_data)),
    );

    Value::Object(overview)
}
