//! Encoded 64-bit FARM fields.
//!
//! Every field of the log is one little-endian qword:
//!
//! | byte | meaning                                                       |
//! |------|---------------------------------------------------------------|
//! | 7    | status byte (bit 0 = supported, bit 1 = valid)                |
//! | 6    | encoding flags (bit 0 = percent delta factory, bit 1 = negative) |
//! | 0–5  | 48-bit payload                                                |

/// Status bit set when the device implements the field.
pub const STATUS_SUPPORTED: u8 = 0x01;
/// Status bit set when the payload currently holds a usable value.
pub const STATUS_VALID: u8 = 0x02;

/// Flag bit marking a delta-encoded float expressed as a percentage of the factory value.
pub const FLAG_PERCENT_DELTA: u8 = 0x01;
/// Flag bit marking a negative delta-encoded float.
pub const FLAG_NEGATIVE: u8 = 0x02;

const PAYLOAD_MASK: u64 = 0x0000_FFFF_FFFF_FFFF;
const SIGN_BIT_48: u64 = 1 << 47;
const SIGN_EXTENSION: u64 = 0xFFFF_0000_0000_0000;

/// Support and validity of a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStatus {
    pub supported: bool,
    pub valid: bool,
}

impl FieldStatus {
    pub fn from_byte(status: u8) -> Self {
        Self {
            supported: status & STATUS_SUPPORTED != 0,
            valid: status & STATUS_VALID != 0,
        }
    }

    /// Status of a field that is both supported and valid.
    pub fn present() -> Self {
        Self {
            supported: true,
            valid: true,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.supported && self.valid
    }

    pub fn to_byte(self) -> u8 {
        let mut byte = 0;
        if self.supported {
            byte |= STATUS_SUPPORTED;
        }
        if self.valid {
            byte |= STATUS_VALID;
        }
        byte
    }
}

/// One decoded view of a raw qword, split once at read time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodedField {
    status: FieldStatus,
    flags: u8,
    payload: u64,
}

impl EncodedField {
    pub fn from_raw(raw: u64) -> Self {
        Self {
            status: FieldStatus::from_byte((raw >> 56) as u8),
            flags: (raw >> 48) as u8,
            payload: raw & PAYLOAD_MASK,
        }
    }

    /// Build a field from its parts. Payload bits above 47 are discarded.
    pub fn from_parts(status: FieldStatus, flags: u8, payload: u64) -> Self {
        Self {
            status,
            flags,
            payload: payload & PAYLOAD_MASK,
        }
    }

    pub fn raw(&self) -> u64 {
        (u64::from(self.status.to_byte()) << 56) | (u64::from(self.flags) << 48) | self.payload
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// The 48-bit payload with the status and flag bytes cleared.
    pub fn payload(&self) -> u64 {
        self.payload
    }

    /// The payload as a 48-bit two's complement value, sign-extended to 64 bits.
    pub fn signed_payload(&self) -> i64 {
        if self.payload & SIGN_BIT_48 != 0 {
            (self.payload | SIGN_EXTENSION) as i64
        } else {
            self.payload as i64
        }
    }

    /// Little-endian bytes of the low 32 bits of the payload.
    pub fn low_dword_bytes(&self) -> [u8; 4] {
        (self.payload as u32).to_le_bytes()
    }

    pub fn is_supported(&self) -> bool {
        self.status.supported
    }

    pub fn has_delta_encoding(&self) -> bool {
        self.flags & (FLAG_PERCENT_DELTA | FLAG_NEGATIVE) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_payload_split() {
        let field = EncodedField::from_raw(0x0300_1234_5678_9ABC);
        assert_eq!(field.status(), FieldStatus::present());
        assert_eq!(field.flags(), 0x00);
        assert_eq!(field.payload(), 0x1234_5678_9ABC);
    }

    #[test]
    fn test_supported_but_invalid() {
        let field = EncodedField::from_raw(0x0100_0000_0000_0001);
        assert!(field.is_supported());
        assert!(!field.status().valid);
    }

    #[test]
    fn test_flag_byte_is_not_payload() {
        let field = EncodedField::from_raw(0x0302_0000_0000_0005);
        assert_eq!(field.flags(), FLAG_NEGATIVE);
        assert_eq!(field.payload(), 5);
        assert!(field.has_delta_encoding());
    }

    #[test]
    fn test_sign_extension_of_bit_47() {
        let field = EncodedField::from_parts(FieldStatus::present(), 0, 0x8000_0000_0000);
        assert_eq!(field.signed_payload(), -0x8000_0000_0000);
        assert_eq!(field.signed_payload() as u64, 0xFFFF_8000_0000_0000);

        let minus_one = EncodedField::from_parts(FieldStatus::present(), 0, 0xFFFF_FFFF_FFFF);
        assert_eq!(minus_one.signed_payload(), -1);

        let positive = EncodedField::from_parts(FieldStatus::present(), 0, 0x7FFF_FFFF_FFFF);
        assert_eq!(positive.signed_payload(), 0x7FFF_FFFF_FFFF);
    }

    #[test]
    fn test_raw_rebuild() {
        let raw = 0x0301_0000_C0DE_F00D;
        assert_eq!(EncodedField::from_raw(raw).raw(), raw);
    }

    #[test]
    fn test_unknown_status_bits_ignored() {
        let field = EncodedField::from_raw(0xFC00_0000_0000_0001);
        assert_eq!(field.status(), FieldStatus::default());
    }
}
