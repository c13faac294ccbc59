use anyhow::Result;
use std::io::Write;

use crate::models::ReportNode;

/// Writes a report as JSON, keys in insertion order.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn write<W: Write>(&self, root: &ReportNode, out: W) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(out, root)?;
        } else {
            serde_json::to_writer(out, root)?;
        }
        Ok(())
    }
}
