use anyhow::Result;
use rmpv::Value;
use std::io::Write;

use crate::models::{ReportEntry, ReportNode};

/// Writes a report as a MessagePack map, keys in insertion order.
pub struct MsgpackFormatter;

impl MsgpackFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn write<W: Write>(&self, root: &ReportNode, mut out: W) -> Result<()> {
        rmpv::encode::write_value(&mut out, &node_value(root))?;
        Ok(())
    }
}

impl Default for MsgpackFormatter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn node_value(node: &ReportNode) -> Value {
    Value::Map(
        node.entries()
            .map(|(name, entry)| (Value::from(name), entry_value(entry)))
            .collect(),
    )
}

fn entry_value(entry: &ReportEntry) -> Value {
    match entry {
        ReportEntry::Value(value) => Value::from(value.to_string()),
        ReportEntry::Node(node) => node_value(node),
        ReportEntry::List(list) => Value::Array(list.iter().map(node_value).collect()),
    }
}
