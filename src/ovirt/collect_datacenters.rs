use serde_json::{json, Value};

use crate::ovirt::types::{
    is_empty, items, project, DATACENTER_FIELDS, STORAGE_DOMAIN_FIELDS,
};

#[derive(Debug, Default)]
pub struct DatacenterInventory {
    pub datacenters: Vec<Value>,
    pub storage_domains: Vec<Value>,
}

impl DatacenterInventory {
    pub fn datacenters_payload(&self) -> Value {
        json!({ "datacenters": self.datacenters })
    }

    pub fn storage_domains_payload(&self) -> Value {
        json!({ "storage_domains": self.storage_domains })
    }
}

/// Project datacenters and the storage domains nested under them.
///
/// Each storage domain carries its owning datacenter's name and id.
pub fn collect_datacenters(datacenters_data: &Value) -> DatacenterInventory {
    let mut inventory = DatacenterInventory::default();

    for datacenter in items(datacenters_data, "data_center") {
        if is_empty(datacenter) {
            continue;
        }

        inventory
            .datacenters
            .push(Value::Object(project(datacenter, DATACENTER_FIELDS)));

        let owner = json!({
            "name": datacenter.get("name").cloned().unwrap_or(Value::Null),
            "id": datacenter.get("id").cloned().unwrap_or(Value::Null),
        });

        let domains = datacenter
            .get("storage_domains")
            .map(|sd| items(sd, "storage_domain"))
            .unwrap_or(&[]);

        for storage_domain in domains {
            if is_empty(storage_domain) {
                continue;
            }

            let mut projection = serde_json::Map::new();
            projection.insert("data_center".to_string(), owner.clone());
            projection.extend(project(storage_domain, STORAGE_DOMAIN_FIELDS));
            inventory.storage_domains.push(Value::Object(projection));
        }
    }

    inventory
}
