use serde_json::{json, Value};

use crate::ovirt::types::{is_empty, items, project, CLUSTER_FIELDS};

pub fn collect_clusters(clusters_data: &Value) -> Vec<Value> {
    items(clusters_data, "cluster")
        .iter()
        .filter(|cluster| !is_empty(cluster))
        .map(|cluster| {
            let mut projection = project(cluster, CLUSTER_FIELDS);
            let datacenter_id = cluster
                .get("data_center")
                .and_then(|dc| dc.get("id"))
                .cloned()
                .unwrap_or(Value::Null);
            projection.insert("data_center".to_string(), json!({ "id": datacenter_id }));
            Value::Object(projection)
        })
        .collect()
}

pub fn clusters_payload(clusters: &[Value]) -> Value {
    json!({ "cluster": clusters })
}
