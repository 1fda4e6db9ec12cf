use std::io::Write;

use serde_json::Value;

use crate::error::Result;

pub const OVERVIEW: &str = "ovirt_overview";
pub const HOSTS: &str = "ovirt_hosts";
pub const DATACENTERS: &str = "ovirt_datacenters";
pub const STORAGE_DOMAINS: &str = "ovirt_storage_domains";
pub const CLUSTERS: &str = "ovirt_clusters";
pub const VMSTATS: &str = "ovirt_vmstats";
pub const SNAPSHOTS: &str = "ovirt_snapshots";
pub const SNAPSHOTS_ENGINE: &str = "ovirt_snapshots_engine";
pub const COMPATIBILITY: &str = "ovirt_compatibility";

/// One named unit of monitoring data.
///
/// `piggyback` names the host or VM the data is attributed to; `None` means
/// the polled engine itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: &'static str,
    pub piggyback: Option<String>,
    pub payload: Value,
}

impl Section {
    pub fn engine(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            piggyback: None,
            payload,
        }
    }

    pub fn piggybacked(name: &'static str, target: impl Into<String>, payload: Value) -> Self {
        Self {
            name,
            piggyback: Some(target.into()),
            payload,
        }
    }
}

pub trait SectionSink {
    fn write(&mut self, section: &Section) -> Result<()>;
}

impl SectionSink for Vec<Section> {
    fn write(&mut self, section: &Section) -> Result<()> {
        self.push(section.clone());
        Ok(())
    }
}

/// Writes sections in the agent output format, one JSON line per section.
pub struct AgentWriter<W: Write> {
    out: W,
}

impl<W: Write> AgentWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SectionSink for AgentWriter<W> {
    fn write(&mut self, section: &Section) -> Result<()> {
        if let Some(target) = &section.piggyback {
            writeln!(self.out, "<<<<{}>>>>", target)?;
        }
        writeln!(self.out, "<<<{}:sep(0)>>>", section.name)?;
        writeln!(self.out, "{}", serde_json::to_string(&section.payload)?)?;
        if section.piggyback.is_some() {
            writeln!(self.out, "<<<<>>>>")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
