use serde_json::{Map, Value};

use crate::client::API_VM_STATISTICS;
use crate::error::{AgentError, Result};
use crate::ovirt::types::{
    items, project, text_of, SNAPSHOT_FIELDS, STATISTIC_FIELDS, VM_FIELDS, VM_STATISTIC_NAMES,
};
use crate::sections::{Section, SNAPSHOTS, VMSTATS};

fn vm_name(projection: &Map<String, Value>) -> Option<String> {
    projection.get("name").map(text_of)
}

/// Reduce one upstream statistic to its descriptive fields plus the current
/// datum, rendered as text.
fn project_statistic(statistic: &Value) -> Result<Map<String, Value>> {
    let mut projection = project(statistic, STATISTIC_FIELDS);

    let first = statistic
        .get("values")
        .map(|values| items(values, "value"))
        .and_then(|values| values.first())
        .ok_or_else(|| AgentError::MalformedResponse {
            endpoint: API_VM_STATISTICS,
            reason: format!(
                "statistic {} has no values",
                statistic.get("name").map(text_of).unwrap_or_default()
            ),
        })?;

    if let Some(datum) = first.as_object().and_then(|entry| entry.values().last()) {
        projection.insert("value".to_string(), Value::String(text_of(datum)));
    }

    Ok(projection)
}

/// Statistics section payload for one VM, or `None` if the engine returned
/// no statistics for it. The `statistics` list is only present when at least
/// one republished statistic was found.
pub fn project_vm_statistics(vm: &Value) -> Result<Option<Map<String, Value>>> {
    let Some(statistics) = vm.get("statistics") else {
        return Ok(None);
    };

    let mut projection = project(vm, VM_FIELDS);
    let kept = items(statistics, "statistic")
        .iter()
        .filter(|stat| {
            stat.get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| VM_STATISTIC_NAMES.contains(&name))
        })
        .map(|stat| project_statistic(stat).map(Value::Object))
        .collect::<Result<Vec<_>>>()?;

    if !kept.is_empty() {
        projection.insert("statistics".to_string(), Value::Array(kept));
    }
    Ok(Some(projection))
}

pub fn collect_vmstat_sections(vms_data: &Value) -> Result<Vec<Section>> {
    let mut sections = Vec::new();
    for vm in items(vms_data, "vm") {
        if let Some(projection) = project_vm_statistics(vm)? {
            let name = vm_name(&projection).ok_or(AgentError::MissingIdentity { entity: "vm" })?;
            sections.push(Section::piggybacked(VMSTATS, name, Value::Object(projection)));
        }
    }
    Ok(sections)
}

pub fn project_vm_snapshots(vm: &Value) -> Map<String, Value> {
    let mut projection = project(vm, VM_FIELDS);

    let snapshots: Vec<Value> = vm
        .get("snapshots")
        .map(|s| items(s, "snapshot"))
        .unwrap_or(&[])
        .iter()
        .map(|snapshot| Value::Object(project(snapshot, SNAPSHOT_FIELDS)))
        .collect();

    if !snapshots.is_empty() {
        projection.insert("snapshots".to_string(), Value::Array(snapshots));
    }
    projection
}

#[derive(Debug, Default)]
pub struct SnapshotInventory {
    /// One entry per VM, with or without snapshots.
    pub engine: Vec<Value>,
    pub per_vm: Vec<Section>,
}

pub fn collect_snapshots(vms_data: &Value, piggyback: bool) -> SnapshotInventory {
    let mut inventory = SnapshotInventory::default();

    for vm in items(vms_data, "vm") {
        let projection = project_vm_snapshots(vm);
        if piggyback {
            if let Some(name) = vm_name(&projection) {
                inventory.per_vm.push(Section::piggybacked(
                    SNAPSHOTS,
                    name,
                    Value::Object(projection.clone()),
                ));
            }
        }
        inventory.engine.push(Value::Object(projection));
    }

    inventory
}
