//! Per-head arrays and the wrapping flash LED history.

use crate::decode;
use crate::field::EncodedField;
use crate::layout::MAX_HEADS;
use crate::models::{DecodedValue, ReportNode};

/// How every head of a per-head array is decoded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadFormat {
    Unsigned,
    UnsignedFactor(f64),
    Signed,
    SignedFactor(f64),
    Hex,
    DeltaFloat,
    /// Microseconds per unit
    Duration(f64),
    /// Health byte plus timestamp, from physical element status
    ElementStatus,
}

fn head_label(index: usize) -> String {
    format!("Head {}", index + 1)
}

fn invalid_entry() -> ReportNode {
    let mut node = ReportNode::new();
    node.insert("value", DecodedValue::Invalid);
    node
}

fn decode_head(field: &EncodedField, format: HeadFormat) -> ReportNode {
    if !field.status().valid {
        return invalid_entry();
    }

    let mut node = ReportNode::new();
    let value = match format {
        HeadFormat::Unsigned => decode::unsigned(field),
        HeadFormat::UnsignedFactor(factor) => decode::scaled(field, factor, false),
        HeadFormat::Signed => decode::signed(field),
        HeadFormat::SignedFactor(factor) => decode::scaled(field, factor, true),
        HeadFormat::Hex => decode::hex(field),
        HeadFormat::DeltaFloat => decode::delta_float(field),
        HeadFormat::Duration(micros) => decode::duration(field, micros),
        HeadFormat::ElementStatus => {
            let (health, timestamp) = decode::element_status(field);
            node.insert("health", DecodedValue::Unsigned(u64::from(health)));
            node.insert("timestamp", DecodedValue::Unsigned(timestamp));
            return node;
        }
    };
    node.insert("value", value);
    node
}

fn collect_heads(heads: Vec<ReportNode>) -> Option<Vec<ReportNode>> {
    if heads.is_empty() {
        None
    } else {
        Some(heads)
    }
}

/// One entry per supported head, labelled "Head N" from 1.
///
/// Returns `None` when no head within `head_count` is supported, in which case the array is
/// left out of the report.
pub fn head_array(
    fields: &[EncodedField],
    head_count: usize,
    format: HeadFormat,
) -> Option<Vec<ReportNode>> {
    let heads = fields
        .iter()
        .take(head_count.min(MAX_HEADS))
        .enumerate()
        .filter(|(_, field)| field.is_supported())
        .map(|(index, field)| ReportNode::wrap(head_label(index), decode_head(field, format)))
        .collect();
    collect_heads(heads)
}

/// Per-head array of three named statistics, laid out `[head][3]`.
///
/// Each head is gated by its first statistic. Only the factor formats are decoded; any other
/// format renders the head as `"value": "Invalid"`.
pub fn head_stat_array(
    fields: &[EncodedField],
    head_count: usize,
    names: [&str; 3],
    format: HeadFormat,
) -> Option<Vec<ReportNode>> {
    let mut heads = Vec::new();
    for (index, stats) in fields
        .chunks_exact(3)
        .take(head_count.min(MAX_HEADS))
        .enumerate()
    {
        let first = &stats[0];
        if !first.is_supported() {
            continue;
        }

        let entry = if !first.status().valid {
            invalid_entry()
        } else {
            match format {
                HeadFormat::UnsignedFactor(factor) | HeadFormat::SignedFactor(factor) => {
                    let is_signed = matches!(format, HeadFormat::SignedFactor(_));
                    let mut node = ReportNode::new();
                    for (name, stat) in names.iter().zip(stats) {
                        node.insert(*name, decode::scaled(stat, factor, is_signed));
                    }
                    node
                }
                _ => invalid_entry(),
            }
        };
        heads.push(ReportNode::wrap(head_label(index), entry));
    }
    collect_heads(heads)
}

/// Per-head array whose encoding is chosen by head 0's flag byte.
///
/// Delta-encoded arrays are named "`label` (% delta)", plain ones "`label` (`unit`)".
pub fn head_array_delta_or_unit(
    label: &str,
    unit: &str,
    fields: &[EncodedField],
    head_count: usize,
) -> (String, Option<Vec<ReportNode>>) {
    if fields.first().is_some_and(EncodedField::has_delta_encoding) {
        (
            format!("{} (% delta)", label),
            head_array(fields, head_count, HeadFormat::DeltaFloat),
        )
    } else {
        (
            format!("{} ({})", label, unit),
            head_array(fields, head_count, HeadFormat::Unsigned),
        )
    }
}

/// The four parallel rings of one actuator's flash LED history.
#[derive(Debug, Clone, Copy)]
pub struct EventLogFields<'a> {
    pub events: &'a [EncodedField],
    pub rw_retries: &'a [EncodedField],
    pub timestamps: &'a [EncodedField],
    pub power_cycles: &'a [EncodedField],
}

/// Slots visited from `last_index` backwards, wrapping from 0 to `capacity - 1`.
///
/// Yields exactly `capacity` distinct slots, or none when `last_index` is out of range.
pub fn event_slots(last_index: u64, capacity: usize) -> Vec<usize> {
    match usize::try_from(last_index) {
        Ok(last) if last < capacity => (0..capacity)
            .map(|step| (last + capacity - step) % capacity)
            .collect(),
        _ => Vec::new(),
    }
}

fn slot_value(ring: &[EncodedField], slot: usize) -> DecodedValue {
    match ring.get(slot) {
        Some(field) if field.status().is_usable() => DecodedValue::Unsigned(field.payload()),
        _ => DecodedValue::Placeholder,
    }
}

pub fn event_log(fields: &EventLogFields<'_>, last_index: u64, capacity: usize) -> Vec<ReportNode> {
    event_slots(last_index, capacity)
        .into_iter()
        .enumerate()
        .map(|(count, slot)| {
            let mut event = ReportNode::new();
            event.insert("FLED", slot_value(fields.events, slot));
            event.insert("RW Retry", slot_value(fields.rw_retries, slot));
            event.insert("Timestamp", slot_value(fields.timestamps, slot));
            event.insert("Power Cycle", slot_value(fields.power_cycles, slot));
            ReportNode::wrap(format!("Flash LED Event # {}", count + 1), event)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldStatus, FLAG_NEGATIVE};

    const INVALID: FieldStatus = FieldStatus {
        supported: true,
        valid: false,
    };

    fn valid(payload: u64) -> EncodedField {
        EncodedField::from_parts(FieldStatus::present(), 0, payload)
    }

    fn absent() -> EncodedField {
        EncodedField::default()
    }

    fn labels(heads: &[ReportNode]) -> Vec<String> {
        heads
            .iter()
            .flat_map(|h| h.keys().map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn test_unsupported_heads_are_skipped() {
        let fields = [valid(10), absent(), valid(30), absent()];
        let heads = head_array(&fields, 4, HeadFormat::Unsigned).unwrap();
        assert_eq!(heads.len(), 2);
        assert_eq!(labels(&heads), vec!["Head 1", "Head 3"]);
        assert_eq!(
            heads[1].node("Head 3").unwrap().value("value").as_deref(),
            Some("30")
        );
    }

    #[test]
    fn test_array_omitted_without_supported_heads() {
        let fields = [absent(), absent()];
        assert!(head_array(&fields, 2, HeadFormat::Unsigned).is_none());
        assert!(head_array(&[], 2, HeadFormat::Unsigned).is_none());
    }

    #[test]
    fn test_head_count_limits_entries() {
        let fields = vec![valid(1); 30];
        assert_eq!(head_array(&fields, 2, HeadFormat::Unsigned).unwrap().len(), 2);
        assert_eq!(
            head_array(&fields, 100, HeadFormat::Unsigned).unwrap().len(),
            MAX_HEADS
        );
        assert!(head_array(&fields, 0, HeadFormat::Unsigned).is_none());
    }

    #[test]
    fn test_invalid_head_renders_placeholder() {
        let fields = [EncodedField::from_parts(INVALID, 0, 5)];
        let heads = head_array(&fields, 1, HeadFormat::Hex).unwrap();
        assert_eq!(
            heads[0].node("Head 1").unwrap().value("value").as_deref(),
            Some("Invalid")
        );
    }

    #[test]
    fn test_element_status_heads() {
        let fields = [valid(0x0000_0065_0000_0102)];
        let heads = head_array(&fields, 1, HeadFormat::ElementStatus).unwrap();
        let head = heads[0].node("Head 1").unwrap();
        assert_eq!(head.value("health").as_deref(), Some("2"));
        assert_eq!(head.value("timestamp").as_deref(), Some("1694498817"));
    }

    #[test]
    fn test_three_stat_array() {
        let fields = [valid(105), valid(110), valid(95), absent(), absent(), absent()];
        let heads = head_stat_array(&fields, 2, ["Z1", "Z2", "Z3"], HeadFormat::UnsignedFactor(0.1))
            .unwrap();
        assert_eq!(heads.len(), 1);
        let head = heads[0].node("Head 1").unwrap();
        assert_eq!(head.keys().collect::<Vec<_>>(), vec!["Z1", "Z2", "Z3"]);
        assert_eq!(head.value("Z1").as_deref(), Some("10.50"));
        assert_eq!(head.value("Z3").as_deref(), Some("9.50"));
    }

    #[test]
    fn test_three_stat_array_rejects_plain_formats() {
        let fields = [valid(1), valid(2), valid(3)];
        let heads = head_stat_array(&fields, 1, ["OD", "ID", "MD"], HeadFormat::Unsigned).unwrap();
        let head = heads[0].node("Head 1").unwrap();
        assert_eq!(head.len(), 1);
        assert_eq!(head.value("value").as_deref(), Some("Invalid"));
    }

    #[test]
    fn test_delta_or_unit_naming() {
        let plain = [valid(1200), valid(1300)];
        let (name, heads) = head_array_delta_or_unit("MR Head Resistance", "ohms", &plain, 2);
        assert_eq!(name, "MR Head Resistance (ohms)");
        assert_eq!(heads.unwrap().len(), 2);

        let minus_two = EncodedField::from_parts(FieldStatus::present(), FLAG_NEGATIVE, 2 << 16);
        let (name, heads) = head_array_delta_or_unit("MR Head Resistance", "ohms", &[minus_two], 1);
        assert_eq!(name, "MR Head Resistance (% delta)");
        let heads = heads.unwrap();
        assert_eq!(
            heads[0].node("Head 1").unwrap().value("value").as_deref(),
            Some("-2.00")
        );
    }

    #[test]
    fn test_event_slots_wrap_backwards() {
        assert_eq!(event_slots(3, 8), vec![3, 2, 1, 0, 7, 6, 5, 4]);
        assert_eq!(event_slots(7, 8), vec![7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(event_slots(0, 8), vec![0, 7, 6, 5, 4, 3, 2, 1]);
        assert!(event_slots(8, 8).is_empty());
        assert!(event_slots(u64::MAX, 8).is_empty());
    }

    #[test]
    fn test_event_log_entries() {
        let events: Vec<EncodedField> = (0..8).map(|i| valid(100 + i)).collect();
        let mut retries = vec![valid(0); 8];
        retries[2] = EncodedField::from_parts(INVALID, 0, 9);
        let timestamps = vec![absent(); 8];
        let cycles: Vec<EncodedField> = (0..8).map(valid).collect();

        let log = EventLogFields {
            events: &events,
            rw_retries: &retries,
            timestamps: &timestamps,
            power_cycles: &cycles,
        };
        let entries = event_log(&log, 3, 8);
        assert_eq!(entries.len(), 8);

        let second = entries[1].node("Flash LED Event # 2").unwrap();
        assert_eq!(second.value("FLED").as_deref(), Some("102"));
        assert_eq!(second.value("RW Retry").as_deref(), Some("-"));
        assert_eq!(second.value("Timestamp").as_deref(), Some("-"));
        assert_eq!(second.value("Power Cycle").as_deref(), Some("2"));

        let fifth = entries[4].node("Flash LED Event # 5").unwrap();
        assert_eq!(fifth.value("FLED").as_deref(), Some("107"));
    }
}
