//! Identifier text spread across several FARM fields.

use crate::field::EncodedField;
use crate::models::DecodedValue;

const BYTES_PER_FIELD: usize = 4;

/// Swap each adjacent byte pair of a field's low dword into reading order.
fn field_chars(field: &EncodedField) -> [u8; BYTES_PER_FIELD] {
    let [b0, b1, b2, b3] = field.low_dword_bytes();
    [b1, b0, b3, b2]
}

fn word_swap(dword: u32) -> u32 {
    dword.rotate_left(16)
}

/// Assemble ASCII text from consecutive fields, gated on the first field's status.
///
/// The text ends at the first NUL byte and surrounding whitespace is trimmed.
pub fn ascii(fields: &[EncodedField]) -> DecodedValue {
    let Some(first) = fields.first() else {
        return DecodedValue::Omitted;
    };
    let status = first.status();
    if !status.supported {
        return DecodedValue::Omitted;
    }
    if !status.valid {
        return DecodedValue::Invalid;
    }

    DecodedValue::Text(assemble(fields))
}

/// Raw assembly without status gating.
pub fn assemble(fields: &[EncodedField]) -> String {
    let bytes: Vec<u8> = fields
        .iter()
        .flat_map(field_chars)
        .take_while(|&b| b != 0)
        .collect();
    let text: String = bytes.into_iter().map(char::from).collect();
    text.trim().to_string()
}

/// World wide name style identifier held in the low dwords of two fields.
pub fn hex_pair(hi: &EncodedField, lo: &EncodedField) -> DecodedValue {
    let status = hi.status();
    if !status.supported {
        return DecodedValue::Omitted;
    }
    if !status.valid {
        return DecodedValue::Invalid;
    }

    let high = u64::from(word_swap(hi.payload() as u32));
    let low = u64::from(word_swap(lo.payload() as u32));
    DecodedValue::Text(format!("0x{:016X}", (high << 32) | low))
}
