use log::debug;
use serde_json::{Map, Value};

use crate::client::{
    ApiSource, API_CLUSTERS, API_DATACENTERS, API_HOSTS, API_ROOT, API_VM_SNAPSHOTS,
    API_VM_STATISTICS,
};
use crate::error::Result;
use crate::ovirt::{
    clusters_payload, collect_clusters, collect_datacenters, collect_host_sections,
    collect_overview, collect_snapshots, collect_vmstat_sections,
};
use crate::sections::{
    Section, SectionSink, CLUSTERS, COMPATIBILITY, DATACENTERS, OVERVIEW, SNAPSHOTS_ENGINE,
    STORAGE_DOMAINS,
};

/// Run one poll cycle against `source`, writing every section to `sink`.
///
/// Engine-attributed sections are always written, failed endpoints only
/// thin out their content. Per-entity sections are written only when
/// `piggyback` is set.
pub fn run_cycle<A, S>(source: &A, sink: &mut S, piggyback: bool) -> Result<()>
where
    A: ApiSource + ?Sized,
    S: SectionSink + ?Sized,
{
    let api_data = source.get(API_ROOT);
    let hosts_data = source.get(API_HOSTS);

    sink.write(&Section::engine(OVERVIEW, collect_overview(&api_data, &hosts_data)))?;

    if piggyback {
        for section in collect_host_sections(&hosts_data)? {
            sink.write(&section)?;
        }
    }

    let datacenters = collect_datacenters(&source.get(API_DATACENTERS));
    debug!(
        "{} datacenters, {} storage domains",
        datacenters.datacenters.len(),
        datacenters.storage_domains.len()
    );
    sink.write(&Section::engine(DATACENTERS, datacenters.datacenters_payload()))?;
    sink.write(&Section::engine(STORAGE_DOMAINS, datacenters.storage_domains_payload()))?;

    let clusters = collect_clusters(&source.get(API_CLUSTERS));
    debug!("{} clusters", clusters.len());
    sink.write(&Section::engine(CLUSTERS, clusters_payload(&clusters)))?;

    let vm_statistics = source.get(API_VM_STATISTICS);
    if piggyback {
        for section in collect_vmstat_sections(&vm_statistics)? {
            sink.write(&section)?;
        }
    }

    let snapshots = collect_snapshots(&source.get(API_VM_SNAPSHOTS), piggyback);
    for section in &snapshots.per_vm {
        sink.write(section)?;
    }
    sink.write(&Section::engine(SNAPSHOTS_ENGINE, Value::Array(snapshots.engine)))?;

    let mut compatibility = Map::new();
    if let Some(product_info) = api_data.get("product_info") {
        compatibility.insert("engine".to_string(), product_info.clone());
    }
    compatibility.insert("datacenters".to_string(), Value::Array(datacenters.datacenters));
    compatibility.insert("cluster".to_string(), Value::Array(clusters));
    sink.write(&Section::engine(COMPATIBILITY, Value::Object(compatibility)))?;

    Ok(())
}
