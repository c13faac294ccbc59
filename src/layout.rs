//! Fixed geometry of a FARM log.

/// Bytes per encoded field.
pub const FIELD_SIZE: usize = 8;
/// Fields per page.
pub const PAGE_FIELDS: usize = 2048;
pub const PAGE_SIZE: usize = PAGE_FIELDS * FIELD_SIZE;

/// Structural capacity of every per-head array.
pub const MAX_HEADS: usize = 24;
/// Slots in each actuator's flash LED ring.
pub const FLASH_LED_CAPACITY: usize = 8;

/// ASCII "FARM" as stored in the header signature payload.
pub const FARM_SIGNATURE: u64 = 0x4641_524D;

/// Offset of the page identifier (or the header signature) within every page.
pub const PAGE_ID: usize = 0;

pub mod header {
    pub const MAJOR_VERSION: usize = 1;
    pub const MINOR_VERSION: usize = 2;
    pub const MAX_HEADS_SUPPORTED: usize = 6;
}

pub mod drive_info {
    pub const INTERFACE: usize = 6;
    pub const NUMBER_OF_HEADS: usize = 11;
    pub const LOWEST_POH_MS: usize = 28;
    pub const HIGHEST_POH_MS: usize = 29;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Header,
    DriveInformation,
    Workload,
    ErrorStatistics,
    Environment,
    Reliability,
}

impl PageKind {
    /// Every page in document order.
    pub const ALL: [PageKind; 6] = [
        PageKind::Header,
        PageKind::DriveInformation,
        PageKind::Workload,
        PageKind::ErrorStatistics,
        PageKind::Environment,
        PageKind::Reliability,
    ];

    /// Page code stored in the identifier field. The header is identified by its signature.
    pub fn code(self) -> u64 {
        match self {
            PageKind::Header => 0,
            PageKind::DriveInformation => 1,
            PageKind::Workload => 2,
            PageKind::ErrorStatistics => 3,
            PageKind::Environment => 4,
            PageKind::Reliability => 5,
        }
    }

    /// Position of the page in the log.
    pub fn index(self) -> usize {
        self.code() as usize
    }

    pub fn expected_id(self) -> u64 {
        match self {
            PageKind::Header => FARM_SIGNATURE,
            other => other.code(),
        }
    }

    pub fn section_name(self) -> &'static str {
        match self {
            PageKind::Header => "FARM Log Header",
            PageKind::DriveInformation => "FARM Log Drive Information",
            PageKind::Workload => "FARM Log Workload Statistics",
            PageKind::ErrorStatistics => "FARM Log Error Statistics",
            PageKind::Environment => "FARM Log Environmental Statistics",
            PageKind::Reliability => "FARM Log Reliability Statistics",
        }
    }
}
