use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::layout::MAX_HEADS;

pub const INVALID: &str = "Invalid";
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveInterface {
    Sata,
    Sas,
}

impl fmt::Display for DriveInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveInterface::Sata => write!(f, "SATA"),
            DriveInterface::Sas => write!(f, "SAS"),
        }
    }
}

impl FromStr for DriveInterface {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sata" | "ata" => Ok(DriveInterface::Sata),
            "sas" | "scsi" => Ok(DriveInterface::Sas),
            other => Err(Error::UnsupportedDevice(format!(
                "unknown drive interface '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    MessagePack,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::MessagePack => "msgpack",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "msgpack" | "messagepack" | "mp" => Ok(ReportFormat::MessagePack),
            other => Err(Error::InvalidFormat(format!(
                "unknown report format '{}'",
                other
            ))),
        }
    }
}

/// Identity strings reported by the device itself, outside the FARM log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub model: String,
    pub serial: String,
    pub firmware: String,
}

/// Metadata about the device that produced a log, supplied by the caller.
///
/// When `interface` is `None` the interface is detected from the log itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceProfile {
    pub interface: Option<DriveInterface>,
    pub identity: Option<DeviceIdentity>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadCounts {
    pub reported: u64,
    pub max_supported: u64,
}

impl HeadCounts {
    /// Heads rendered in per-head arrays: the smallest of the reported count, the log's
    /// maximum and the array capacity.
    pub fn effective(&self) -> usize {
        let limit = self.reported.min(self.max_supported);
        usize::try_from(limit).map_or(MAX_HEADS, |heads| heads.min(MAX_HEADS))
    }
}

/// One decoded field value, produced once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Hex(u64),
    Label(String),
    /// Hours, printed with two decimals
    Duration(f64),
    Float { value: f64, precision: usize },
    Invalid,
    /// "-" marker for an absent slot inside an event record
    Placeholder,
    Omitted,
}

impl DecodedValue {
    pub fn is_omitted(&self) -> bool {
        matches!(self, DecodedValue::Omitted)
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Text(s) | DecodedValue::Label(s) => write!(f, "{}", s),
            DecodedValue::Unsigned(v) => write!(f, "{}", v),
            DecodedValue::Signed(v) => write!(f, "{}", v),
            DecodedValue::Hex(v) => write!(f, "{:X}", v),
            DecodedValue::Duration(hours) => write!(f, "{:.2}", hours),
            DecodedValue::Float { value, precision } => write!(f, "{:.*}", precision, value),
            DecodedValue::Invalid => write!(f, "{}", INVALID),
            DecodedValue::Placeholder => write!(f, "{}", PLACEHOLDER),
            DecodedValue::Omitted => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportEntry {
    Value(DecodedValue),
    Node(ReportNode),
    List(Vec<ReportNode>),
}

/// Ordered name → value mapping. Insertion order is kept in every output format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportNode {
    entries: Vec<(String, ReportEntry)>,
}

impl ReportNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a decoded value. Omitted values are dropped; returns whether anything was added.
    pub fn insert(&mut self, name: impl Into<String>, value: DecodedValue) -> bool {
        if value.is_omitted() {
            return false;
        }
        self.entries.push((name.into(), ReportEntry::Value(value)));
        true
    }

    pub fn insert_node(&mut self, name: impl Into<String>, node: ReportNode) {
        self.entries.push((name.into(), ReportEntry::Node(node)));
    }

    pub fn insert_list(&mut self, name: impl Into<String>, list: Vec<ReportNode>) {
        self.entries.push((name.into(), ReportEntry::List(list)));
    }

    /// A node holding a single nested node, the shape used for array items such as `{"Head 1": {...}}`.
    pub fn wrap(name: impl Into<String>, inner: ReportNode) -> Self {
        let mut node = Self::new();
        node.insert_node(name, inner);
        node
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ReportEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn get(&self, name: &str) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, entry)| entry)
    }

    /// Rendered text of a leaf value.
    pub fn value(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            ReportEntry::Value(value) => Some(value.to_string()),
            _ => None,
        }
    }

    pub fn node(&self, name: &str) -> Option<&ReportNode> {
        match self.get(name)? {
            ReportEntry::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn list(&self, name: &str) -> Option<&[ReportNode]> {
        match self.get(name)? {
            ReportEntry::List(list) => Some(list),
            _ => None,
        }
    }

    /// Whether `name` is used as a key anywhere in this subtree.
    pub fn contains_key_recursive(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, entry)| {
            key == name
                || match entry {
                    ReportEntry::Value(_) => false,
                    ReportEntry::Node(node) => node.contains_key_recursive(name),
                    ReportEntry::List(list) => {
                        list.iter().any(|node| node.contains_key_recursive(name))
                    }
                }
        })
    }

    /// Rough upper bound of the pretty JSON size, used to reserve the output buffer.
    pub fn estimated_len(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, entry)| {
                key.len()
                    + 16
                    + match entry {
                        ReportEntry::Value(value) => value.to_string().len(),
                        ReportEntry::Node(node) => node.estimated_len(),
                        ReportEntry::List(list) => {
                            list.iter().map(|node| node.estimated_len() + 8).sum()
                        }
                    }
            })
            .sum()
    }
}

impl Serialize for ReportNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl Serialize for ReportEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReportEntry::Value(value) => serializer.collect_str(value),
            ReportEntry::Node(node) => node.serialize(serializer),
            ReportEntry::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for node in list {
                    seq.serialize_element(node)?;
                }
                seq.end()
            }
        }
    }
}
