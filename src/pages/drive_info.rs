use super::{custom, field, heads, hex, unsigned, Entry, PageContext, Rule};
use crate::aggregate::HeadFormat;
use crate::decode::{BoolLabels, MICROS_PER_HOUR, MICROS_PER_MILLI};
use crate::layout::{drive_info, PageKind};
use crate::models::{DecodedValue, ReportNode};
use crate::telemetry::Page;

pub const KIND: PageKind = PageKind::DriveInformation;

pub const SERIAL_NUMBER: usize = 2;
pub const SERIAL_NUMBER_FIELDS: usize = 2;
pub const WORLD_WIDE_NAME: usize = 4;
pub const FIRMWARE_REVISION: usize = 14;
pub const FIRMWARE_REVISION_FIELDS: usize = 2;
pub const DATE_OF_ASSEMBLY: usize = 30;
pub const ELEMENT_STATUS_BY_HEAD: usize = 34;
pub const MODEL_NUMBER: usize = 64;
pub const MODEL_NUMBER_FIELDS: usize = 10;

const HOURS: Rule = Rule::Duration(MICROS_PER_HOUR);
const MILLIS: Rule = Rule::Duration(MICROS_PER_MILLI);

pub const ITEMS: &[Entry] = &[
    field("Model Number", MODEL_NUMBER, Rule::Ascii(MODEL_NUMBER_FIELDS)),
    field("Serial Number", SERIAL_NUMBER, Rule::Ascii(SERIAL_NUMBER_FIELDS)),
    field(
        "Firmware Revision",
        FIRMWARE_REVISION,
        Rule::Ascii(FIRMWARE_REVISION_FIELDS),
    ),
    field("World Wide Name", WORLD_WIDE_NAME, Rule::HexPair),
    field("Date Of Assembly", DATE_OF_ASSEMBLY, Rule::PackedDate),
    custom(drive_interface),
    unsigned("Device Capacity (LBAs)", 7),
    unsigned("Number of LBAs (HSMR SWR capacity)", 74),
    unsigned("Physical Sector Size (B)", 8),
    unsigned("Logical Sector Size (B)", 9),
    unsigned("Device Buffer Size (B)", 10),
    unsigned("Number Of Heads", drive_info::NUMBER_OF_HEADS),
    field("Drive Recording Type", 75, Rule::RecordingType),
    hex("Form Factor", 12),
    unsigned("Rotation Rate", 13),
    hex("ATA Security State", 16),
    hex("ATA Features Supported", 17),
    hex("ATA Features Enabled", 18),
    field("Power On Hours", 19, HOURS),
    field("Spindle Power On Hours", 20, HOURS),
    field("Head Flight Hours", 21, HOURS),
    field("Head Flight Hours, Actuator 1", 78, HOURS),
    unsigned("Head Load Events", 22),
    unsigned("Head Load Events, Actuator 1", 79),
    unsigned("Power Cycle Count", 23),
    unsigned("Hardware Reset Count", 24),
    unsigned("Spin up time (ms)", 25),
    unsigned("Time to ready, last power cycle (ms)", 76),
    unsigned("Time in staggered spinup, last power on sequence (ms)", 77),
    unsigned("NVC Status at Power On", 26).sas_only(),
    unsigned("Time Available to Save User Data To NV Mem", 27).sas_only(),
    field(
        "Lowest POH timestamp (Hours)",
        drive_info::LOWEST_POH_MS,
        MILLIS,
    ),
    field(
        "Highest POH timestamp (Hours)",
        drive_info::HIGHEST_POH_MS,
        MILLIS,
    ),
    field(
        "Depopulation Status",
        31,
        Rule::Bool(BoolLabels::new("Depopulated", "Not Depopulated")),
    ),
    hex("Depopulation Head Mask", 32),
    hex("Regeneration Head Mask", 33),
    heads(
        "Physical Element Status (Health/Timestamp)",
        ELEMENT_STATUS_BY_HEAD,
        HeadFormat::ElementStatus,
    ),
    unsigned("Max # Available Disc Sectors for Reassignment", 58),
    field(
        "HAMR Data Protect Status",
        59,
        Rule::Bool(BoolLabels::new("Data Protect", "No Data Protect")),
    ),
    field("POH of Most Recent FARM TS Frame", 60, MILLIS),
    field("POH of 2nd Most Recent FARM TS Frame", 61, MILLIS),
    unsigned("Seq or Before Req for Active Zone Config", 62),
    unsigned("Seq Write Req Active Zone Config", 63),
];

fn drive_interface(_page: &Page, ctx: &PageContext, node: &mut ReportNode) {
    node.insert(
        "Drive Interface",
        DecodedValue::Label(ctx.interface.to_string()),
    );
}
