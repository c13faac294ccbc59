//! # FARM Report
//!
//! A Rust library for decoding FARM (Field Accessible Reliability Metrics) device telemetry logs
//! and assembling them into a hierarchical, human-readable report.
//!
//! ## Features
//!
//! - **Status-aware decoding**: unsupported fields are dropped, invalid ones render as `"Invalid"`
//! - **Zero-copy input**: pages are read straight from a borrowed byte buffer
//! - **SATA and SAS layouts**: interface-specific fields and scale factors
//! - **Per-head arrays**: head counts clamped to what the log actually reports
//! - **Ordered output**: JSON or MessagePack with keys in document order
//!
//! ## Quick Start
//!
//! ```no_run
//! use farm_report::{FarmReader, ReportWriter};
//!
//! // Decode a FARM log dump
//! let reader = FarmReader::from_file("farm.bin")?;
//! let report = reader.report()?;
//!
//! println!("Decoded {} sections", report.sections().len());
//!
//! // Write to JSON
//! ReportWriter::new("output_directory")
//!     .write(&report, "farm")?;
//! # Ok::<(), farm_report::Error>(())
//! ```
//!
//! ## Field Encoding
//!
//! Every field is a little-endian 64-bit word:
//!
//! - **Byte 7**: status (bit 0 supported, bit 1 valid)
//! - **Byte 6**: encoding flags (bit 0 percent delta, bit 1 negative)
//! - **Bytes 0-5**: 48-bit payload
//!
//! ## Output Formats
//!
//! ### MessagePack
//!
//! ```no_run
//! use farm_report::{FarmReader, ReportFormat, ReportWriter};
//!
//! let report = FarmReader::from_file("farm.bin")?.report()?;
//!
//! let stats = ReportWriter::new("./output")
//!     .format(ReportFormat::MessagePack)
//!     .write_with_stats(&report, "farm")?;
//!
//! println!("{}", stats.summary());
//! # Ok::<(), farm_report::Error>(())
//! ```
//!
//! ## Advanced Usage
//!
//! ### Borrowed Buffers
//!
//! When the log already lives in memory, skip the reader and assemble directly:
//!
//! ```no_run
//! use farm_report::{assemble, DeviceProfile, DriveInterface, FarmLog};
//!
//! let buffer: Vec<u8> = std::fs::read("farm.bin")?;
//! let log = FarmLog::new(&buffer)?;
//! let profile = DeviceProfile {
//!     interface: Some(DriveInterface::Sata),
//!     identity: None,
//! };
//! let report = assemble(&log, &profile)?;
//! # Ok::<(), farm_report::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, Error>`:
//!
//! ```no_run
//! use farm_report::{FarmReader, Error};
//!
//! match FarmReader::from_file("farm.bin").and_then(|reader| reader.report()) {
//!     Ok(report) => {
//!         // Use the report...
//!     }
//!     Err(Error::NullInput(msg)) => {
//!         eprintln!("Empty log: {}", msg);
//!     }
//!     Err(Error::NoDataAvailable) => {
//!         eprintln!("No FARM pages found");
//!     }
//!     Err(err) => {
//!         eprintln!("Error: {}", err);
//!     }
//! }
//! # Ok::<(), farm_report::Error>(())
//! ```

// Public API modules
pub mod error;
pub mod reader;
pub mod report;
pub mod writer;

// Re-export commonly used types
pub use error::{Error, Result};
pub use reader::{FarmReader, FarmReaderBuilder};
pub use report::{assemble, render_json, Report};
pub use telemetry::{FarmLog, Page, TimeRestrictedRange};
pub use writer::{ReportWriter, ReportWriterBuilder, WriteStats};

// Re-export models for users who need them
pub use models::{
    DecodedValue, DeviceIdentity, DeviceProfile, DriveInterface, ReportEntry, ReportFormat,
    ReportNode,
};

// Internal modules (public but not part of the high-level API)
pub mod aggregate;
pub mod decode;
pub mod field;
pub mod formats;
pub mod layout;
pub mod models;
pub mod pages;
pub mod telemetry;
pub mod text;
