use super::{
    coverage, field, head_stats, heads, heads_delta_or_unit, unsigned, Entry, Rule, Span,
};
use crate::aggregate::HeadFormat;
use crate::decode::{BoolLabels, MICROS_PER_SECOND};
use crate::layout::PageKind;

pub const KIND: PageKind = PageKind::Reliability;

const U64: HeadFormat = HeadFormat::Unsigned;

const VELOCITY_OBSERVER: usize = 157;
const VELOCITY_NO_TMD: usize = 181;
const VELOCITY: &[Span] = &[Span::Heads(VELOCITY_OBSERVER), Span::Heads(VELOCITY_NO_TMD)];

const ZONES: [&str; 3] = ["Z1", "Z2", "Z3"];
const DIAMETERS: [&str; 3] = ["OD", "ID", "MD"];

pub const ITEMS: &[Entry] = &[
    unsigned("# DOS Scans Performed", 2),
    unsigned("# LBAs corrected by ISP", 3),
    unsigned("# DOS Scans Performed Actuator 1", 4),
    unsigned("# LBAs corrected by ISP Actuator 1", 5),
    heads("DVGA Skip Write Detect", 6, U64),
    heads("RVGA Skip Write Detect", 30, U64),
    heads("FVGA Skip Write Detect", 54, U64),
    heads("Skip Write Detect Threshold Exceeded", 78, U64),
    unsigned("Read Error Rate", 102).sata_only(),
    unsigned("# Read After Write (RAW) Operations", 102).sas_only(),
    unsigned("Read Error Rate Normalized", 103),
    unsigned("Read Error Rate Worst Ever", 104),
    unsigned("Seek Error Rate", 105),
    unsigned("Seek Error Rate Normalized", 106),
    unsigned("Seek Error Rate Worst Ever", 107),
    unsigned("High Priority Unload Events", 108),
    heads_delta_or_unit("MR Head Resistance", "ohms", 109),
    heads_delta_or_unit("2nd MR Head Resistance", "ohms", 133),
    heads("# of Velocity Observer", VELOCITY_OBSERVER, U64),
    heads("# of Velocity No TMD", VELOCITY_NO_TMD, U64),
    coverage("Time Coverage for Velocity Observer (Hours)", VELOCITY),
    head_stats(
        "H2SAT Trimmed Mean Bits in Error",
        205,
        ZONES,
        HeadFormat::UnsignedFactor(0.10),
    ),
    head_stats(
        "H2SAT Iterations to Converge",
        277,
        ZONES,
        HeadFormat::UnsignedFactor(0.10),
    ),
    heads("Average H2SAT % Codeword at Iteration Level", 349, U64),
    heads("Average H2SAT Amplitude", 373, U64),
    heads(
        "Average H2SAT Asymmetry",
        397,
        HeadFormat::SignedFactor(0.10),
    ),
    head_stats(
        "FAFH Appd Clr Delta (1/1000 A)",
        421,
        DIAMETERS,
        HeadFormat::SignedFactor(0.001),
    ),
    unsigned("# Disc Slip Recalibrations Performed", 493),
    heads("# Reallocated Sectors", 494, U64),
    heads("# Reallocated Candidate Sectors", 518, U64),
    field(
        "Helium Pressure Threshold",
        542,
        Rule::Bool(BoolLabels::new("Tripped", "Not Tripped")),
    ),
    heads("# DOS Ought To Scan", 543, U64),
    heads("# DOS Need To Scan", 567, U64),
    heads("# DOS Write Fault Scans", 591, U64),
    heads(
        "Write Workload Power-on Time (Hours)",
        615,
        HeadFormat::Duration(MICROS_PER_SECOND),
    ),
    unsigned("# LBAs Corrected By Parity Sector", 639),
    unsigned("# LBAs Corrected By Parity Sector Actuator 1", 640),
    unsigned("Primary Super Parity Coverage %", 641),
    unsigned("Primary Super Parity Coverage SMR/HSMR-SWR %", 642),
    unsigned(
        "Primary Super Parity Coverage SMR/HSMR-SWR % Actuator 1",
        643,
    ),
];
