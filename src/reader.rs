//! High-level API for reading FARM logs.

use crate::error::Result;
use crate::models::{DeviceIdentity, DeviceProfile, DriveInterface, HeadCounts};
use crate::report::{self, Report};
use crate::telemetry::FarmLog;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A reader for FARM log buffers that provides a high-level API for decoding.
///
/// # Examples
///
/// ```no_run
/// use farm_report::FarmReader;
///
/// // Read from a file
/// let reader = FarmReader::from_file("farm.bin")?;
/// let report = reader.report()?;
/// println!("{}", report.to_json()?);
/// # Ok::<(), farm_report::Error>(())
/// ```
pub struct FarmReader {
    data: Vec<u8>,
    profile: DeviceProfile,
}

impl FarmReader {
    /// Create a new FARM reader from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a raw FARM log dump
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is empty.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Self::from_bytes(data)
    }

    /// Create a new FARM reader from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NullInput`] if `data` is empty.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        // Empty input is rejected here rather than on every report.
        FarmLog::new(&data)?;

        Ok(Self {
            data,
            profile: DeviceProfile::default(),
        })
    }

    /// Replace the device profile used during assembly.
    pub fn with_profile(mut self, profile: DeviceProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Borrowed view over the raw fields.
    pub fn log(&self) -> Result<FarmLog<'_>> {
        FarmLog::new(&self.data)
    }

    /// Interface named by the log itself, ignoring the profile.
    pub fn detected_interface(&self) -> Option<DriveInterface> {
        self.log().ok().and_then(|log| log.drive_interface())
    }

    pub fn head_counts(&self) -> HeadCounts {
        self.log()
            .map(|log| log.head_counts())
            .unwrap_or_default()
    }

    /// Decode every page into a report.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoDataAvailable`] if no page matched.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use farm_report::FarmReader;
    ///
    /// let report = FarmReader::from_file("farm.bin")?.report()?;
    /// for section in report.sections() {
    ///     println!("Section: {}", section);
    /// }
    /// # Ok::<(), farm_report::Error>(())
    /// ```
    pub fn report(&self) -> Result<Report> {
        let log = self.log()?;
        report::assemble(&log, &self.profile)
    }

    /// Decode straight to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        self.report()?.to_json()
    }
}

/// Builder for configuring FARM decoding options.
///
/// # Examples
///
/// ```no_run
/// use farm_report::{DriveInterface, FarmReaderBuilder};
///
/// let reader = FarmReaderBuilder::new()
///     .interface(DriveInterface::Sas)
///     .from_file("farm.bin")?;
/// let report = reader.report()?;
/// # Ok::<(), farm_report::Error>(())
/// ```
pub struct FarmReaderBuilder {
    profile: DeviceProfile,
}

impl FarmReaderBuilder {
    /// Create a new reader builder with default options.
    pub fn new() -> Self {
        Self {
            profile: DeviceProfile::default(),
        }
    }

    /// Force the drive interface instead of detecting it from the log.
    pub fn interface(mut self, interface: DriveInterface) -> Self {
        self.profile.interface = Some(interface);
        self
    }

    /// Model, serial and firmware strings placed at the top of the report.
    pub fn identity(mut self, identity: DeviceIdentity) -> Self {
        self.profile.identity = Some(identity);
        self
    }

    /// Build a reader from a file path.
    pub fn from_file<P: AsRef<Path>>(self, path: P) -> Result<FarmReader> {
        Ok(FarmReader::from_file(path)?.with_profile(self.profile))
    }

    /// Build a reader from raw bytes.
    pub fn from_bytes(self, data: Vec<u8>) -> Result<FarmReader> {
        Ok(FarmReader::from_bytes(data)?.with_profile(self.profile))
    }
}

impl Default for FarmReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
