use super::{coverage, field, scaled, unsigned, Entry, Rule, Scale, Span};
use crate::decode::MICROS_PER_MINUTE;
use crate::layout::PageKind;

pub const KIND: PageKind = PageKind::Environment;

/// SAS drives report temperatures in tenths of a degree.
const TEMPERATURE: Rule = Rule::Scaled {
    scale: Scale::PerInterface { sata: 1.0, sas: 0.1 },
    signed: true,
};

const MOTOR_POWER: &[Span] = &[Span::Fields { offset: 16, len: 1 }];
const VOLTAGES: &[Span] = &[Span::Fields { offset: 17, len: 6 }];
const POWERS: &[Span] = &[Span::Fields { offset: 23, len: 6 }];

pub const ITEMS: &[Entry] = &[
    field("Current Temperature (C)", 2, TEMPERATURE),
    field("Highest Temperature (C)", 3, TEMPERATURE),
    field("Lowest Temperature (C)", 4, TEMPERATURE),
    field("Average Short Term Temperature (C)", 5, Rule::Signed),
    field("Average Long Term Temperature (C)", 6, Rule::Signed),
    field("Highest Average Short Term Temperature (C)", 7, Rule::Signed),
    field("Lowest Average Short Term Temperature (C)", 8, Rule::Signed),
    field("Highest Average Long Term Temperature (C)", 9, Rule::Signed),
    field("Lowest Average Long Term Temperature (C)", 10, Rule::Signed),
    field(
        "Time in Over Temperature (Hours)",
        11,
        Rule::Duration(MICROS_PER_MINUTE),
    ),
    field(
        "Time in Under Temperature (Hours)",
        12,
        Rule::Duration(MICROS_PER_MINUTE),
    ),
    unsigned("Specified Max Temperature (C)", 13),
    unsigned("Specified Min Temperature (C)", 14),
    scaled("Current Relative Humidity (%)", 15, 0.1, false),
    field("Current Motor Power Scalar", 16, Rule::Signed),
    coverage("Time Coverage for Motor Power (Hours)", MOTOR_POWER),
    scaled("Current 12v input (V)", 17, 0.001, false),
    scaled("Min 12v input (V)", 18, 0.001, false),
    scaled("Max 12v input (V)", 19, 0.001, false),
    scaled("Current 5v input (V)", 20, 0.001, false),
    scaled("Min 5v input (V)", 21, 0.001, false),
    scaled("Max 5v input (V)", 22, 0.001, false),
    coverage("Time Coverage for 12v & 5v voltage (Hours)", VOLTAGES),
    scaled("Average 12v power (W)", 23, 0.001, false),
    scaled("Min 12v power (W)", 24, 0.001, false),
    scaled("Max 12v power (W)", 25, 0.001, false),
    scaled("Average 5v power (W)", 26, 0.001, false),
    scaled("Min 5v power (W)", 27, 0.001, false),
    scaled("Max 5v power (W)", 28, 0.001, false),
    coverage("Time Coverage for 12v & 5v power (Hours)", POWERS),
];
