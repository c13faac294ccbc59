/// Test utilities for building FARM log buffers
use byteorder::{LittleEndian, WriteBytesExt};
use farm_report::layout::{PageKind, PAGE_FIELDS, PAGE_ID};

#[allow(dead_code)]
pub const SUPPORTED: u8 = 0x01;
#[allow(dead_code)]
pub const PRESENT: u8 = 0x03;

/// Builder for creating FARM log test buffers
#[allow(dead_code)]
pub struct FarmLogBuilder {
    fields: Vec<u64>,
}

#[allow(dead_code)]
impl FarmLogBuilder {
    /// Create a log with all six pages identified and every other field unsupported
    pub fn new() -> Self {
        let mut builder = Self::blank();
        for kind in PageKind::ALL {
            builder.put(kind, PAGE_ID, PRESENT, 0, kind.expected_id());
        }
        builder
    }

    /// Create a log of all-zero fields, with no page identified
    pub fn blank() -> Self {
        Self {
            fields: vec![0; PAGE_FIELDS * PageKind::ALL.len()],
        }
    }

    fn put(&mut self, kind: PageKind, offset: usize, status: u8, flags: u8, payload: u64) {
        let raw = (u64::from(status) << 56)
            | (u64::from(flags) << 48)
            | (payload & 0x0000_FFFF_FFFF_FFFF);
        self.fields[kind.index() * PAGE_FIELDS + offset] = raw;
    }

    /// Set a field with an explicit status byte
    pub fn field(mut self, kind: PageKind, offset: usize, status: u8, payload: u64) -> Self {
        self.put(kind, offset, status, 0, payload);
        self
    }

    /// Set a supported, valid field
    pub fn present(self, kind: PageKind, offset: usize, payload: u64) -> Self {
        self.field(kind, offset, PRESENT, payload)
    }

    /// Set a supported, valid field with an encoding flag byte
    pub fn flagged(mut self, kind: PageKind, offset: usize, flags: u8, payload: u64) -> Self {
        self.put(kind, offset, PRESENT, flags, payload);
        self
    }

    /// Store a full 64-bit word as-is
    pub fn raw(mut self, kind: PageKind, offset: usize, raw: u64) -> Self {
        self.fields[kind.index() * PAGE_FIELDS + offset] = raw;
        self
    }

    /// Spread `text` over consecutive fields, four byte-swapped characters per field
    pub fn ascii(mut self, kind: PageKind, offset: usize, text: &str, count: usize) -> Self {
        let mut bytes = text.as_bytes().to_vec();
        bytes.resize(count * 4, 0);
        for (index, chunk) in bytes.chunks_exact(4).enumerate() {
            let dword = u32::from_le_bytes([chunk[1], chunk[0], chunk[3], chunk[2]]);
            self.put(kind, offset + index, PRESENT, 0, u64::from(dword));
        }
        self
    }

    /// Mark the drive as SATA or SAS the way the drive information page does
    pub fn interface(self, name: &str) -> Self {
        let mut bytes = [0u8; 8];
        for (slot, byte) in bytes.iter_mut().zip(name.bytes().take(6)) {
            *slot = byte;
        }
        self.present(
            PageKind::DriveInformation,
            6,
            u64::from_le_bytes(bytes),
        )
    }

    /// Set both the log's maximum and the drive's reported head count
    pub fn heads(self, count: u64) -> Self {
        self.present(PageKind::Header, 6, count)
            .present(PageKind::DriveInformation, 11, count)
    }

    /// Set the FARM version in the header
    pub fn version(self, major: u64, minor: u64) -> Self {
        self.present(PageKind::Header, 1, major)
            .present(PageKind::Header, 2, minor)
    }

    /// Set the lowest and highest POH timestamps, in milliseconds
    pub fn poh_range(self, lowest_ms: u64, highest_ms: u64) -> Self {
        self.present(PageKind::DriveInformation, 28, lowest_ms)
            .present(PageKind::DriveInformation, 29, highest_ms)
    }

    /// Corrupt a page identifier so the page is skipped
    pub fn mismatch(self, kind: PageKind) -> Self {
        self.present(kind, PAGE_ID, 0x7F)
    }

    /// Build the final byte buffer
    pub fn build(self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.fields.len() * 8);
        for raw in self.fields {
            data.write_u64::<LittleEndian>(raw).unwrap();
        }
        data
    }

    /// Build and keep only the first `len` bytes
    pub fn build_truncated(self, len: usize) -> Vec<u8> {
        let mut data = self.build();
        data.truncate(len);
        data
    }
}
