//! Scalar decode rules for single FARM fields.
//!
//! Every decoder is gated on the field status first: an unsupported field decodes to
//! [`DecodedValue::Omitted`] and a supported but invalid one to [`DecodedValue::Invalid`].

use crate::field::{EncodedField, FLAG_NEGATIVE};
use crate::models::DecodedValue;

pub const MICROS_PER_HOUR: f64 = 3_600_000_000.0;
pub const MICROS_PER_MINUTE: f64 = 60_000_000.0;
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
pub const MICROS_PER_MILLI: f64 = 1_000.0;

const DELTA_FRACTION_SCALE: f64 = 0.0001;

const RECORDING_SMR: u64 = 0x01;
const RECORDING_CMR: u64 = 0x02;

const BLANK_BYTES: [u8; 2] = [b' ', 0];

/// Labels rendered for a nonzero / zero payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolLabels {
    pub truthy: &'static str,
    pub falsy: &'static str,
}

impl BoolLabels {
    pub const fn new(truthy: &'static str, falsy: &'static str) -> Self {
        Self { truthy, falsy }
    }
}

impl Default for BoolLabels {
    fn default() -> Self {
        Self::new("true", "false")
    }
}

fn gated(field: &EncodedField, decode: impl FnOnce(&EncodedField) -> DecodedValue) -> DecodedValue {
    let status = field.status();
    if !status.supported {
        DecodedValue::Omitted
    } else if !status.valid {
        DecodedValue::Invalid
    } else {
        decode(field)
    }
}

pub fn unsigned(field: &EncodedField) -> DecodedValue {
    gated(field, |f| DecodedValue::Unsigned(f.payload()))
}

pub fn signed(field: &EncodedField) -> DecodedValue {
    gated(field, |f| DecodedValue::Signed(f.signed_payload()))
}

pub fn hex(field: &EncodedField) -> DecodedValue {
    gated(field, |f| DecodedValue::Hex(f.payload()))
}

pub fn boolean(field: &EncodedField, labels: BoolLabels) -> DecodedValue {
    gated(field, |f| {
        let label = if f.payload() != 0 {
            labels.truthy
        } else {
            labels.falsy
        };
        DecodedValue::Label(label.to_string())
    })
}

pub fn recording_type(field: &EncodedField) -> DecodedValue {
    gated(field, |f| {
        let bits = f.payload();
        let smr = bits & RECORDING_SMR != 0;
        let cmr = bits & RECORDING_CMR != 0;
        match (smr, cmr) {
            (true, true) => DecodedValue::Label("SMR, CMR".to_string()),
            (true, false) => DecodedValue::Label("SMR".to_string()),
            (false, true) => DecodedValue::Label("CMR".to_string()),
            (false, false) => DecodedValue::Invalid,
        }
    })
}

/// Payload counted in units of `micros_per_unit` microseconds, rendered in hours.
pub fn duration(field: &EncodedField, micros_per_unit: f64) -> DecodedValue {
    gated(field, |f| {
        let micros = f.payload() as f64 * micros_per_unit;
        DecodedValue::Duration(micros / MICROS_PER_HOUR)
    })
}

/// Delta-encoded float.
///
/// With the percent-delta or negative flag set, bits 16..32 hold a signed whole part and
/// bits 0..16 a fraction in units of 0.0001. The result is negative when the negative flag
/// is set or the whole part itself is negative. Without either flag the low 16 bits are a
/// plain unsigned value.
pub fn delta_float(field: &EncodedField) -> DecodedValue {
    gated(field, |f| {
        let low = f.payload() as u32;
        if f.has_delta_encoding() {
            let whole = (low >> 16) as u16 as i16;
            let fraction = f64::from(low & 0xFFFF);
            let magnitude = f64::from(whole.unsigned_abs()) + fraction * DELTA_FRACTION_SCALE;
            let negative = f.flags() & FLAG_NEGATIVE != 0 || whole < 0;
            DecodedValue::Float {
                value: if negative { -magnitude } else { magnitude },
                precision: 2,
            }
        } else {
            DecodedValue::Unsigned(u64::from(low & 0xFFFF))
        }
    })
}

/// Number of decimals printed for a value scaled by `factor`.
pub fn precision_for(factor: f64) -> usize {
    let factor = factor.abs();
    if factor < 0.00001 {
        5
    } else if factor < 0.0001 {
        4
    } else if factor < 0.001 {
        3
    } else {
        2
    }
}

pub fn scaled(field: &EncodedField, factor: f64, is_signed: bool) -> DecodedValue {
    gated(field, |f| {
        let raw = if is_signed {
            f.signed_payload() as f64
        } else {
            f.payload() as f64
        };
        DecodedValue::Float {
            value: raw * factor,
            precision: precision_for(factor),
        }
    })
}

/// Two ASCII digit pairs in the low dword: year in bytes 0..2, week in bytes 2..4.
pub fn packed_date(field: &EncodedField) -> DecodedValue {
    gated(field, |f| {
        let bytes = f.low_dword_bytes();
        let (year, week) = bytes.split_at(2);
        let blank = |pair: &[u8]| pair.iter().all(|b| BLANK_BYTES.contains(b));
        if blank(year) && blank(week) {
            return DecodedValue::Text("Not set".to_string());
        }
        let chars = |pair: &[u8]| {
            pair.iter()
                .take_while(|&&b| b != 0)
                .map(|&b| char::from(b))
                .collect::<String>()
        };
        DecodedValue::Text(format!("Week {}, 20{}", chars(week), chars(year)))
    })
}

pub fn exponent_unit(code: u64) -> Option<&'static str> {
    match code {
        1 => Some("deci"),
        2 => Some("centi"),
        3 => Some("milli"),
        6 => Some("micro"),
        9 => Some("nano"),
        12 => Some("pico"),
        15 => Some("femto"),
        18 => Some("atto"),
        _ => None,
    }
}

/// Time interval split over an exponent field and a magnitude field.
pub fn time_interval(exponent: &EncodedField, magnitude: &EncodedField) -> DecodedValue {
    let (exp_status, mag_status) = (exponent.status(), magnitude.status());
    if !exp_status.supported || !mag_status.supported {
        return DecodedValue::Omitted;
    }
    if !exp_status.valid || !mag_status.valid {
        return DecodedValue::Invalid;
    }

    let value = magnitude.payload();
    match exponent_unit(exponent.payload()) {
        Some(unit) => DecodedValue::Text(format!("{} {} seconds", value, unit)),
        None => DecodedValue::Text(format!("{} Unknown exponent value", value)),
    }
}

/// Health byte and timestamp packed in a physical element status field.
pub fn element_status(field: &EncodedField) -> (u8, u64) {
    let payload = field.payload();
    ((payload & 0xFF) as u8, (payload >> 8) & 0xFFFF_FFFF)
}
