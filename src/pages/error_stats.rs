use super::{custom, heads, hex, unsigned, Entry, PageContext};
use crate::aggregate::{self, EventLogFields, HeadFormat};
use crate::decode;
use crate::layout::{PageKind, FLASH_LED_CAPACITY};
use crate::models::ReportNode;
use crate::telemetry::Page;

pub const KIND: PageKind = PageKind::ErrorStatistics;

/// Where one actuator keeps its flash LED history.
struct FlashLedLayout {
    name: &'static str,
    total: usize,
    last_index: usize,
    events: usize,
    timestamps: usize,
    power_cycles: usize,
    rw_retries: usize,
}

const FLASH_LED_ACTUATORS: [FlashLedLayout; 2] = [
    FlashLedLayout {
        name: "Actuator 0",
        total: 17,
        last_index: 18,
        events: 19,
        timestamps: 27,
        power_cycles: 35,
        rw_retries: 43,
    },
    FlashLedLayout {
        name: "Actuator 1",
        total: 156,
        last_index: 157,
        events: 158,
        timestamps: 166,
        power_cycles: 174,
        rw_retries: 182,
    },
];

const U64: HeadFormat = HeadFormat::Unsigned;

pub const ITEMS: &[Entry] = &[
    unsigned("# of Unrecoverable Read Errors", 2),
    unsigned("# of Unrecoverable Write Errors", 3),
    unsigned("# of Reallocated Sectors", 4),
    unsigned("# of Reallocated Sectors, Actuator 1", 154),
    unsigned("# of Read Recovery Attempts", 5),
    unsigned("# of Mechanical Start Retries", 6),
    unsigned("# of Reallocation Candidate Sectors", 7),
    unsigned("# of Reallocated Candidate Sectors, Actuator 1", 155),
    unsigned("# of ASR Events", 8).sata_only(),
    unsigned("# of Interface CRC Errors", 9).sata_only(),
    unsigned("Spin Retry Count", 10).sata_only(),
    unsigned("Normalized Spin Retry Count", 11).sata_only(),
    unsigned("Worst Ever Spin Retry Count", 12).sata_only(),
    unsigned("# Of IOEDC Errors", 13).sata_only(),
    unsigned("# Of Command Timeouts", 14).sata_only(),
    unsigned("# Of Command Timeouts > 5 seconds", 15).sata_only(),
    unsigned("# Of Command Timeouts > 7.5 seconds", 16).sata_only(),
    hex("FRU of SMART Trip Most Recent Frame", 8).sas_only(),
    unsigned("Port A Invalid Dword Count", 9).sas_only(),
    unsigned("Port B Invalid Dword Count", 10).sas_only(),
    unsigned("Port A Disparity Error Count", 11).sas_only(),
    unsigned("Port B Disparity Error Count", 12).sas_only(),
    unsigned("Port A Loss of DWord Sync", 13).sas_only(),
    unsigned("Port B Loss of DWord Sync", 14).sas_only(),
    unsigned("Port A Phy Reset Problem", 15).sas_only(),
    unsigned("Port B Phy Reset Problem", 16).sas_only(),
    custom(flash_led_events),
    unsigned("Lifetime # Unrecoverable Read Errors due to ERC", 51),
    heads("Cumulative Lifetime Unrecoverable Read Repeat", 52, U64),
    heads("Cumulative Lifetime Unrecoverable Read Unique", 76, U64),
    hex("SMART Trip Flags 1", 100),
    hex("SMART Trip Flags 2", 101),
    unsigned("# Reallocated Sectors since last FARM TS Frame", 102),
    unsigned("# Reallocated Sectors N to N-1 FARM TS Frame", 103),
    unsigned("# Realloc Candidate Sectors since last FARM TS Frame", 104),
    unsigned("# Reallocation Candidate N to N-1 FARM TS Frame", 105),
    unsigned(
        "# Reallocated Sectors since last FARM TS Frame, Actuator 1",
        190,
    ),
    unsigned("# Reallocated Sectors N to N-1 FARM TS Frame, Actuator 1", 191),
    unsigned(
        "# Reallocation Candidate Sectors since last FARM TS Frame Actuator 1",
        192,
    ),
    unsigned(
        "# Reallocation Candidate N to N-1 FARM TS Frame Actuator 1",
        193,
    ),
    heads("# Unique Unrec sect since last FARM TS Frame", 106, U64),
    heads("# Unique Unrec sect N to N-1 FARM TS Frame", 130, U64),
];

fn actuator_history(page: &Page, layout: &FlashLedLayout) -> Option<ReportNode> {
    let total = page.field(layout.total);
    if !total.status().is_usable() {
        return None;
    }

    let mut actuator = ReportNode::new();
    actuator.insert("Total Flash LED Events", decode::unsigned(&total));

    let last_index = page.field(layout.last_index);
    if last_index.status().is_usable() {
        let rings = EventLogFields {
            events: page.fields(layout.events, FLASH_LED_CAPACITY),
            rw_retries: page.fields(layout.rw_retries, FLASH_LED_CAPACITY),
            timestamps: page.fields(layout.timestamps, FLASH_LED_CAPACITY),
            power_cycles: page.fields(layout.power_cycles, FLASH_LED_CAPACITY),
        };
        actuator.insert_list(
            "Flash LED Events",
            aggregate::event_log(&rings, last_index.payload(), FLASH_LED_CAPACITY),
        );
    }

    Some(ReportNode::wrap(layout.name, actuator))
}

fn flash_led_events(page: &Page, _ctx: &PageContext, node: &mut ReportNode) {
    let actuators: Vec<ReportNode> = FLASH_LED_ACTUATORS
        .iter()
        .filter_map(|layout| actuator_history(page, layout))
        .collect();
    if !actuators.is_empty() {
        node.insert_list("Flash LED Events", actuators);
    }
}
