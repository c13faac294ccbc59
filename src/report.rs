//! Top-level report assembly.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::formats::json::JsonFormatter;
use crate::formats::msgpack::MsgpackFormatter;
use crate::models::{DecodedValue, DeviceProfile, DriveInterface, ReportNode};
use crate::pages::{self, PageContext};
use crate::telemetry::{FarmLog, TimeRestrictedRange};

/// Schema revision stamped as the first key of every report.
pub const FARM_JSON_VERSION: &str = "1.0.0";

/// A fully assembled report, owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    root: ReportNode,
    interface: DriveInterface,
    head_count: usize,
    range: TimeRestrictedRange,
    sections: Vec<&'static str>,
}

impl Report {
    pub fn root(&self) -> &ReportNode {
        &self.root
    }

    pub fn into_root(self) -> ReportNode {
        self.root
    }

    /// Interface the report was decoded for.
    pub fn interface(&self) -> DriveInterface {
        self.interface
    }

    /// Heads rendered in per-head arrays.
    pub fn head_count(&self) -> usize {
        self.head_count
    }

    pub fn time_restricted_range(&self) -> TimeRestrictedRange {
        self.range
    }

    /// Names of the page sections present, in document order.
    pub fn sections(&self) -> &[&'static str] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&ReportNode> {
        self.root.node(name)
    }

    /// Pretty JSON with keys in insertion order.
    pub fn to_json(&self) -> Result<String> {
        let bytes = self.encode_json(true)?;
        String::from_utf8(bytes).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn to_json_compact(&self) -> Result<String> {
        let bytes = self.encode_json(false)?;
        String::from_utf8(bytes).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        let mut buffer = self.output_buffer()?;
        MsgpackFormatter::new()
            .write(&self.root, &mut buffer)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(buffer)
    }

    fn encode_json(&self, pretty: bool) -> Result<Vec<u8>> {
        let mut buffer = self.output_buffer()?;
        JsonFormatter::new(pretty)
            .write(&self.root, &mut buffer)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(buffer)
    }

    fn output_buffer(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        buffer.try_reserve(self.root.estimated_len())?;
        Ok(buffer)
    }
}

fn insert_identity(root: &mut ReportNode, profile: &DeviceProfile) {
    if let Some(identity) = &profile.identity {
        root.insert("Model Name", DecodedValue::Text(identity.model.clone()));
        root.insert("Serial Number", DecodedValue::Text(identity.serial.clone()));
        root.insert(
            "Firmware Version",
            DecodedValue::Text(identity.firmware.clone()),
        );
    }
}

/// Profile override first, then the log's own interface field, then SAS.
fn resolve_interface(log: &FarmLog<'_>, profile: &DeviceProfile) -> DriveInterface {
    if let Some(interface) = profile.interface {
        return interface;
    }
    log.drive_interface().unwrap_or_else(|| {
        warn!("Drive interface field names neither SATA nor SAS, decoding as SAS");
        DriveInterface::Sas
    })
}

/// Decode every page of `log` into a report.
///
/// An interface that is neither given nor detectable decodes as SAS.
///
/// # Errors
///
/// - [`Error::NoDataAvailable`] when no page identifier matched
pub fn assemble(log: &FarmLog<'_>, profile: &DeviceProfile) -> Result<Report> {
    let mut root = ReportNode::new();
    root.insert(
        "FARM JSON Version",
        DecodedValue::Text(FARM_JSON_VERSION.to_string()),
    );
    insert_identity(&mut root, profile);

    let interface = resolve_interface(log, profile);
    let ctx = PageContext {
        interface,
        head_count: log.head_counts().effective(),
        range: log.time_restricted_range(),
    };
    debug!(
        "Assembling FARM report: interface {}, {} heads, range determined: {}",
        ctx.interface,
        ctx.head_count,
        ctx.range.is_determined()
    );

    let sections = pages::assemble_all(log, &ctx);
    if sections.is_empty() {
        return Err(Error::NoDataAvailable);
    }

    let mut names = Vec::with_capacity(sections.len());
    for (name, node) in sections {
        names.push(name);
        root.insert_node(name, node);
    }

    Ok(Report {
        root,
        interface: ctx.interface,
        head_count: ctx.head_count,
        range: ctx.range,
        sections: names,
    })
}

/// Decode a raw FARM buffer straight to pretty JSON.
pub fn render_json(data: &[u8], profile: &DeviceProfile) -> Result<String> {
    let log = FarmLog::new(data)?;
    assemble(&log, profile)?.to_json()
}
