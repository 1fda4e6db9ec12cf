// oVirt engine collection modules
pub mod types;
pub mod collect_overview;
pub mod collect_hosts;
pub mod collect_datacenters;
pub mod collect_clusters;
pub mod collect_vms;
pub mod collector;

// Re-export main collection functions
pub use collect_overview::{collect_overview, global_maintenance};
pub use collect_hosts::collect_host_sections;
pub use collect_datacenters::{collect_datacenters, DatacenterInventory};
pub use collect_clusters::{clusters_payload, collect_clusters};
pub use collect_vms::{collect_snapshots, collect_vmstat_sections, SnapshotInventory};
pub use collector::run_cycle;
