//! Page assemblers.
//!
//! Each page is described by a table of [`Entry`] items that [`render`] walks in order.
//! Items tagged with an interface are skipped for the other interface, and scale factors that
//! differ between interfaces are written as [`Scale::PerInterface`].

pub mod drive_info;
pub mod environment;
pub mod error_stats;
pub mod header;
pub mod reliability;
pub mod workload;

use log::debug;

use crate::aggregate::{self, HeadFormat};
use crate::decode::{self, BoolLabels, MICROS_PER_MILLI};
use crate::layout::{PageKind, MAX_HEADS};
use crate::models::{DecodedValue, DriveInterface, ReportNode};
use crate::telemetry::{FarmLog, Page, TimeRestrictedRange};
use crate::text;

/// Values shared by every page of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    pub interface: DriveInterface,
    pub head_count: usize,
    pub range: TimeRestrictedRange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Fixed(f64),
    PerInterface { sata: f64, sas: f64 },
}

impl Scale {
    pub fn factor(&self, interface: DriveInterface) -> f64 {
        match *self {
            Scale::Fixed(factor) => factor,
            Scale::PerInterface { sata, .. } if interface == DriveInterface::Sata => sata,
            Scale::PerInterface { sas, .. } => sas,
        }
    }
}

/// Decode rule for a single-field (or fixed group) item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Unsigned,
    Signed,
    Hex,
    Bool(BoolLabels),
    RecordingType,
    /// Microseconds per unit
    Duration(f64),
    Scaled { scale: Scale, signed: bool },
    PackedDate,
    /// Text spread over this many fields
    Ascii(usize),
    /// Two-field identifier rendered as 0x-prefixed hex
    HexPair,
}

/// A block of fields whose support gates a coverage time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Fields { offset: usize, len: usize },
    /// A per-head block, limited to the effective head count
    Heads(usize),
}

/// Renderer for entries that do not fit the table shape.
pub type CustomRender = fn(&Page, &PageContext, &mut ReportNode);

#[derive(Clone, Copy)]
pub enum Item {
    Field {
        label: &'static str,
        offset: usize,
        rule: Rule,
    },
    Heads {
        label: &'static str,
        offset: usize,
        format: HeadFormat,
    },
    HeadStats {
        label: &'static str,
        offset: usize,
        names: [&'static str; 3],
        format: HeadFormat,
    },
    HeadsDeltaOrUnit {
        label: &'static str,
        unit: &'static str,
        offset: usize,
    },
    /// Time the group covers, rendered from the time-restricted range
    Coverage {
        label: &'static str,
        group: &'static [Span],
    },
    Custom(CustomRender),
}

#[derive(Clone, Copy)]
pub struct Entry {
    pub item: Item,
    pub only: Option<DriveInterface>,
}

impl Entry {
    pub const fn sata_only(self) -> Self {
        Self {
            only: Some(DriveInterface::Sata),
            ..self
        }
    }

    pub const fn sas_only(self) -> Self {
        Self {
            only: Some(DriveInterface::Sas),
            ..self
        }
    }

    fn applies_to(&self, interface: DriveInterface) -> bool {
        self.only.map_or(true, |only| only == interface)
    }
}

const fn entry(item: Item) -> Entry {
    Entry { item, only: None }
}

pub const fn field(label: &'static str, offset: usize, rule: Rule) -> Entry {
    entry(Item::Field {
        label,
        offset,
        rule,
    })
}

pub const fn unsigned(label: &'static str, offset: usize) -> Entry {
    field(label, offset, Rule::Unsigned)
}

pub const fn hex(label: &'static str, offset: usize) -> Entry {
    field(label, offset, Rule::Hex)
}

pub const fn scaled(label: &'static str, offset: usize, factor: f64, signed: bool) -> Entry {
    field(
        label,
        offset,
        Rule::Scaled {
            scale: Scale::Fixed(factor),
            signed,
        },
    )
}

pub const fn heads(label: &'static str, offset: usize, format: HeadFormat) -> Entry {
    entry(Item::Heads {
        label,
        offset,
        format,
    })
}

pub const fn head_stats(
    label: &'static str,
    offset: usize,
    names: [&'static str; 3],
    format: HeadFormat,
) -> Entry {
    entry(Item::HeadStats {
        label,
        offset,
        names,
        format,
    })
}

pub const fn heads_delta_or_unit(label: &'static str, unit: &'static str, offset: usize) -> Entry {
    entry(Item::HeadsDeltaOrUnit {
        label,
        unit,
        offset,
    })
}

pub const fn coverage(label: &'static str, group: &'static [Span]) -> Entry {
    entry(Item::Coverage { label, group })
}

pub const fn custom(render: CustomRender) -> Entry {
    entry(Item::Custom(render))
}

pub fn decode_field(page: &Page, offset: usize, rule: Rule, interface: DriveInterface) -> DecodedValue {
    match rule {
        Rule::Unsigned => decode::unsigned(&page.field(offset)),
        Rule::Signed => decode::signed(&page.field(offset)),
        Rule::Hex => decode::hex(&page.field(offset)),
        Rule::Bool(labels) => decode::boolean(&page.field(offset), labels),
        Rule::RecordingType => decode::recording_type(&page.field(offset)),
        Rule::Duration(micros) => decode::duration(&page.field(offset), micros),
        Rule::Scaled { scale, signed } => {
            decode::scaled(&page.field(offset), scale.factor(interface), signed)
        }
        Rule::PackedDate => decode::packed_date(&page.field(offset)),
        Rule::Ascii(count) => text::ascii(page.fields(offset, count)),
        Rule::HexPair => text::hex_pair(&page.field(offset), &page.field(offset + 1)),
    }
}

fn group_supported(page: &Page, group: &[Span], head_count: usize) -> bool {
    group.iter().any(|span| {
        let fields = match *span {
            Span::Fields { offset, len } => page.fields(offset, len),
            Span::Heads(offset) => page.fields(offset, head_count),
        };
        fields.iter().any(|field| field.is_supported())
    })
}

fn render_item(page: &Page, item: &Item, ctx: &PageContext, node: &mut ReportNode) {
    match *item {
        Item::Field {
            label,
            offset,
            rule,
        } => {
            node.insert(label, decode_field(page, offset, rule, ctx.interface));
        }
        Item::Heads {
            label,
            offset,
            format,
        } => {
            if let Some(list) = aggregate::head_array(page.heads(offset), ctx.head_count, format) {
                node.insert_list(label, list);
            } else {
                debug!("{}: no supported heads, omitting", label);
            }
        }
        Item::HeadStats {
            label,
            offset,
            names,
            format,
        } => {
            let fields = page.fields(offset, names.len() * MAX_HEADS);
            if let Some(list) = aggregate::head_stat_array(fields, ctx.head_count, names, format) {
                node.insert_list(label, list);
            } else {
                debug!("{}: no supported heads, omitting", label);
            }
        }
        Item::HeadsDeltaOrUnit {
            label,
            unit,
            offset,
        } => {
            let (name, list) =
                aggregate::head_array_delta_or_unit(label, unit, page.heads(offset), ctx.head_count);
            match list {
                Some(list) => node.insert_list(name, list),
                None => debug!("{}: no supported heads, omitting", name),
            }
        }
        Item::Coverage { label, group } => {
            if !group_supported(page, group, ctx.head_count) {
                return;
            }
            if let Some(range) = ctx.range.as_field() {
                node.insert(label, decode::duration(&range, MICROS_PER_MILLI));
            }
        }
        Item::Custom(render) => render(page, ctx, node),
    }
}

/// Walk a page table. Returns `None` when the page identifier does not match.
pub fn render(page: &Page, items: &[Entry], ctx: &PageContext) -> Option<ReportNode> {
    if !page.matches() {
        debug!(
            "Skipping {}: identifier {:#X} does not match {:#X}",
            page.kind().section_name(),
            page.id(),
            page.kind().expected_id()
        );
        return None;
    }

    let mut node = ReportNode::new();
    for entry in items.iter().filter(|e| e.applies_to(ctx.interface)) {
        render_item(page, &entry.item, ctx, &mut node);
    }
    Some(node)
}

/// Assemble every page section in document order.
pub fn assemble_all(log: &FarmLog<'_>, ctx: &PageContext) -> Vec<(&'static str, ReportNode)> {
    let sections: [(PageKind, &[Entry]); 6] = [
        (header::KIND, header::ITEMS),
        (drive_info::KIND, drive_info::ITEMS),
        (workload::KIND, workload::ITEMS),
        (error_stats::KIND, error_stats::ITEMS),
        (environment::KIND, environment::ITEMS),
        (reliability::KIND, reliability::ITEMS),
    ];

    sections
        .into_iter()
        .filter_map(|(kind, items)| {
            let page = log.page(kind);
            render(&page, items, ctx).map(|node| (kind.section_name(), node))
        })
        .collect()
}
