use super::{custom, unsigned, Entry, PageContext};
use crate::layout::{header, PageKind};
use crate::models::{DecodedValue, ReportNode};
use crate::telemetry::Page;

pub const KIND: PageKind = PageKind::Header;

pub const ITEMS: &[Entry] = &[
    custom(farm_version),
    unsigned("Pages Supported", 3),
    unsigned("Log Size (B)", 4),
    unsigned("Page Size (B)", 5),
    unsigned("Max Drive Heads Supported", header::MAX_HEADS_SUPPORTED),
    unsigned("Max # of Copies", 7),
    unsigned("Reason for Frame Capture", 8),
];

/// "major.minor", gated on both fields.
fn farm_version(page: &Page, _ctx: &PageContext, node: &mut ReportNode) {
    let major = page.field(header::MAJOR_VERSION);
    let minor = page.field(header::MINOR_VERSION);
    if !major.is_supported() || !minor.is_supported() {
        return;
    }
    let value = if major.status().valid && minor.status().valid {
        DecodedValue::Text(format!("{}.{}", major.payload(), minor.payload()))
    } else {
        DecodedValue::Invalid
    };
    node.insert("FARM Version", value);
}
