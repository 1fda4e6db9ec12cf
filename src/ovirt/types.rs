//! Entity schemas: the fields copied forward from each upstream API object.
//!
//! Anything the engine returns beyond these lists is dropped.

use serde_json::{Map, Value};

pub const HOST_FIELDS: &[&str] = &[
    "version",
    "status",
    "summary",
    "type",
    "name",
    "libvirt_version",
    "hosted_engine",
];

pub const DATACENTER_FIELDS: &[&str] = &[
    "id",
    "version",
    "status",
    "description",
    "name",
    "supported_versions",
];

pub const STORAGE_DOMAIN_FIELDS: &[&str] = &[
    "status",
    "name",
    "id",
    "external_status",
    "description",
    "committed",
    "available",
    "used",
    "warning_low_space_indicator",
];

pub const CLUSTER_FIELDS: &[&str] = &["id", "version", "description", "name"];

pub const VM_FIELDS: &[&str] = &["name", "type"];

pub const STATISTIC_FIELDS: &[&str] = &["name", "type", "unit", "description"];

/// Statistic names republished per VM.
pub const VM_STATISTIC_NAMES: &[&str] = &[
    "network.current.total",
    "cpu.current.total",
    "cpu.current.hypervisor",
    "cpu.current.guest",
    "memory.installed",
];

pub const SNAPSHOT_FIELDS: &[&str] = &["snapshot_status", "snapshot_type", "description", "date", "id"];

pub const OVERVIEW_API_FIELDS: &[&str] = &["product_info", "summary"];

/// Copy the allow-listed keys present in `source`, in allow-list order.
///
/// A non-object source yields an empty projection.
pub fn project(source: &Value, fields: &[&str]) -> Map<String, Value> {
    let mut projection = Map::new();
    if let Some(object) = source.as_object() {
        for field in fields {
            if let Some(value) = object.get(*field) {
                projection.insert((*field).to_string(), value.clone());
            }
        }
    }
    projection
}

/// Elements of the array at `source[key]`, or nothing.
pub fn items<'a>(source: &'a Value, key: &str) -> &'a [Value] {
    source
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Null, false, zero and empty strings, arrays and objects carry no data.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Plain text form of a scalar: strings lose their quotes, everything else
/// renders as JSON.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
