use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, warn};
use std::io::Cursor;

use crate::error::{Error, Result};
use crate::field::{EncodedField, FieldStatus};
use crate::layout::{self, PageKind, FIELD_SIZE, MAX_HEADS, PAGE_FIELDS, PAGE_ID, PAGE_SIZE};
use crate::models::{DriveInterface, HeadCounts};

/// Read-only view over a caller-owned FARM log buffer.
#[derive(Debug, Clone, Copy)]
pub struct FarmLog<'a> {
    data: &'a [u8],
}

impl<'a> FarmLog<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::NullInput("telemetry buffer is empty".to_string()));
        }
        let trailing = data.len() % FIELD_SIZE;
        if trailing != 0 {
            warn!(
                "FARM log is {} bytes, ignoring {} trailing bytes of a partial field",
                data.len(),
                trailing
            );
        }
        if data.len() < PAGE_SIZE * PageKind::ALL.len() {
            debug!(
                "FARM log holds {} of {} fields, missing fields read as unsupported",
                data.len() / FIELD_SIZE,
                PAGE_FIELDS * PageKind::ALL.len()
            );
        }
        Ok(Self { data })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Number of complete fields in the buffer.
    pub fn field_count(&self) -> usize {
        self.data.len() / FIELD_SIZE
    }

    /// Decode every field of one page. Fields past the end of the buffer are all-zero.
    pub fn page(&self, kind: PageKind) -> Page {
        let start = kind.index() * PAGE_SIZE;
        let bytes = self
            .data
            .get(start..)
            .map(|rest| &rest[..rest.len().min(PAGE_SIZE)])
            .unwrap_or_default();

        let mut fields = Vec::with_capacity(PAGE_FIELDS);
        let mut cursor = Cursor::new(bytes);
        while let Ok(raw) = cursor.read_u64::<LittleEndian>() {
            fields.push(EncodedField::from_raw(raw));
        }
        fields.resize(PAGE_FIELDS, EncodedField::default());

        Page { kind, fields }
    }

    /// Interface named in the drive information page: a 'T' means SATA, otherwise an 'S' means SAS.
    pub fn drive_interface(&self) -> Option<DriveInterface> {
        let field = self
            .page(PageKind::DriveInformation)
            .field(layout::drive_info::INTERFACE);
        let bytes = field.payload().to_le_bytes();
        if bytes.contains(&b'T') {
            Some(DriveInterface::Sata)
        } else if bytes.contains(&b'S') {
            Some(DriveInterface::Sas)
        } else {
            None
        }
    }

    pub fn head_counts(&self) -> HeadCounts {
        let header = self.page(PageKind::Header);
        let drive_info = self.page(PageKind::DriveInformation);
        HeadCounts {
            reported: drive_info.field(layout::drive_info::NUMBER_OF_HEADS).payload(),
            max_supported: header.field(layout::header::MAX_HEADS_SUPPORTED).payload(),
        }
    }

    pub fn time_restricted_range(&self) -> TimeRestrictedRange {
        let drive_info = self.page(PageKind::DriveInformation);
        TimeRestrictedRange::between(
            &drive_info.field(layout::drive_info::LOWEST_POH_MS),
            &drive_info.field(layout::drive_info::HIGHEST_POH_MS),
        )
    }
}

/// One decoded page of the log.
#[derive(Debug, Clone)]
pub struct Page {
    kind: PageKind,
    fields: Vec<EncodedField>,
}

impl Page {
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn field(&self, offset: usize) -> EncodedField {
        self.fields.get(offset).copied().unwrap_or_default()
    }

    /// Up to `len` consecutive fields starting at `offset`.
    pub fn fields(&self, offset: usize, len: usize) -> &[EncodedField] {
        let start = offset.min(self.fields.len());
        let end = offset.saturating_add(len).min(self.fields.len());
        &self.fields[start..end]
    }

    /// The per-head block starting at `offset`.
    pub fn heads(&self, offset: usize) -> &[EncodedField] {
        self.fields(offset, MAX_HEADS)
    }

    /// The identifier field, the page code or the header signature.
    pub fn id(&self) -> u64 {
        self.field(PAGE_ID).payload()
    }

    pub fn matches(&self) -> bool {
        self.id() == self.kind.expected_id()
    }
}

/// Span between the lowest and highest power-on timestamps of the time-restricted parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRestrictedRange {
    raw: u64,
}

impl TimeRestrictedRange {
    /// Bits 63 and 62 mark a range that could not be determined.
    pub const UNDETERMINED: u64 = (1 << 63) | (1 << 62);

    pub fn between(lowest: &EncodedField, highest: &EncodedField) -> Self {
        let both_usable = lowest.status().is_usable() && highest.status().is_usable();
        let difference = highest.payload().checked_sub(lowest.payload());
        match difference {
            Some(millis) if both_usable && millis != 0 => Self { raw: millis },
            Some(millis) => Self {
                raw: millis | Self::UNDETERMINED,
            },
            None => Self {
                raw: Self::UNDETERMINED,
            },
        }
    }

    pub fn raw(&self) -> u64 {
        self.raw
    }

    pub fn is_determined(&self) -> bool {
        self.raw & Self::UNDETERMINED == 0
    }

    /// Range in milliseconds, when determined.
    pub fn millis(&self) -> Option<u64> {
        self.is_determined().then_some(self.raw)
    }

    /// The range as a supported, valid field so it can pass through the duration decoder.
    pub fn as_field(&self) -> Option<EncodedField> {
        self.millis()
            .map(|millis| EncodedField::from_parts(FieldStatus::present(), 0, millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_field(status: u8, payload: u64) -> u64 {
        (u64::from(status) << 56) | payload
    }

    fn log_bytes(fields: &[(usize, u64)], len: usize) -> Vec<u8> {
        let mut data = vec![0u8; len];
        for &(index, raw) in fields {
            let offset = index * FIELD_SIZE;
            data[offset..offset + FIELD_SIZE].copy_from_slice(&raw.to_le_bytes());
        }
        data
    }

    fn drive_info(offset: usize) -> usize {
        PAGE_FIELDS + offset
    }

    #[test]
    fn test_empty_buffer_is_null_input() {
        assert!(matches!(FarmLog::new(&[]), Err(Error::NullInput(_))));
    }

    #[test]
    fn test_short_buffer_reads_zero_fields() {
        let data = log_bytes(&[(0, raw_field(3, layout::FARM_SIGNATURE))], 20);
        let log = FarmLog::new(&data).unwrap();
        assert_eq!(log.field_count(), 2);

        let header = log.page(PageKind::Header);
        assert!(header.matches());
        assert_eq!(header.field(PAGE_FIELDS + 5), EncodedField::default());

        let workload = log.page(PageKind::Workload);
        assert!(!workload.matches());
        assert!(!workload.field(3).is_supported());
    }

    #[test]
    fn test_fields_window_is_clamped() {
        let data = vec![0u8; PAGE_SIZE];
        let page = FarmLog::new(&data).unwrap().page(PageKind::Header);
        assert_eq!(page.fields(PAGE_FIELDS - 2, 10).len(), 2);
        assert!(page.fields(PAGE_FIELDS + 1, 10).is_empty());
        assert_eq!(page.heads(0).len(), MAX_HEADS);
    }

    #[test]
    fn test_interface_detection() {
        let sata = u64::from_le_bytes(*b"SATA\0\0\0\0");
        let data = log_bytes(&[(drive_info(6), raw_field(3, sata))], 2 * PAGE_SIZE);
        assert_eq!(
            FarmLog::new(&data).unwrap().drive_interface(),
            Some(DriveInterface::Sata)
        );

        let sas = u64::from_le_bytes(*b"SAS\0\0\0\0\0");
        let data = log_bytes(&[(drive_info(6), raw_field(3, sas))], 2 * PAGE_SIZE);
        assert_eq!(
            FarmLog::new(&data).unwrap().drive_interface(),
            Some(DriveInterface::Sas)
        );

        let data = vec![0u8; 2 * PAGE_SIZE];
        assert_eq!(FarmLog::new(&data).unwrap().drive_interface(), None);
    }

    #[test]
    fn test_head_counts() {
        let data = log_bytes(
            &[(6, raw_field(3, 8)), (drive_info(11), raw_field(3, 4))],
            2 * PAGE_SIZE,
        );
        let counts = FarmLog::new(&data).unwrap().head_counts();
        assert_eq!(counts.reported, 4);
        assert_eq!(counts.max_supported, 8);
        assert_eq!(counts.effective(), 4);
    }

    #[test]
    fn test_time_restricted_range() {
        let present = |payload| EncodedField::from_parts(FieldStatus::present(), 0, payload);

        let range = TimeRestrictedRange::between(&present(1_000), &present(3_601_000));
        assert_eq!(range.millis(), Some(3_600_000));
        assert_eq!(range.as_field().unwrap().payload(), 3_600_000);

        let empty = TimeRestrictedRange::between(&present(5), &present(5));
        assert!(!empty.is_determined());
        assert!(empty.as_field().is_none());

        let underflow = TimeRestrictedRange::between(&present(10), &present(5));
        assert_eq!(underflow.raw(), TimeRestrictedRange::UNDETERMINED);

        let unsupported = TimeRestrictedRange::between(&EncodedField::default(), &present(50));
        assert!(!unsupported.is_determined());
        assert_eq!(
            unsupported.raw() & !TimeRestrictedRange::UNDETERMINED,
            50
        );
    }
}
