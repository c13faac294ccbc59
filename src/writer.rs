//! High-level API for writing assembled reports to disk.

use crate::error::{Error, Result};
use crate::models::ReportFormat;
use crate::report::Report;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Writer for saving a [`Report`] as JSON or MessagePack.
///
/// # Examples
///
/// ```no_run
/// use farm_report::{FarmReader, ReportWriter};
///
/// let report = FarmReader::from_file("farm.bin")?.report()?;
///
/// ReportWriter::new("output_dir")
///     .write(&report, "farm")?;
/// # Ok::<(), farm_report::Error>(())
/// ```
pub struct ReportWriter {
    output_directory: PathBuf,
    format: ReportFormat,
    pretty: bool,
}

impl ReportWriter {
    /// Create a writer that saves pretty JSON into `output_directory`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use farm_report::ReportWriter;
    ///
    /// let writer = ReportWriter::new("./output");
    /// ```
    pub fn new<P: AsRef<Path>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.as_ref().to_path_buf(),
            format: ReportFormat::Json,
            pretty: true,
        }
    }

    /// Set the output format. Default is JSON.
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Indent JSON output. Ignored for MessagePack. Default is `true`.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path the report for `stem` is written to.
    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.output_directory
            .join(format!("{}.{}", stem, self.format.extension()))
    }

    fn encode(&self, report: &Report) -> Result<Vec<u8>> {
        match self.format {
            ReportFormat::Json if self.pretty => Ok(report.to_json()?.into_bytes()),
            ReportFormat::Json => Ok(report.to_json_compact()?.into_bytes()),
            ReportFormat::MessagePack => report.to_msgpack(),
        }
    }

    /// Write the report to `<output_directory>/<stem>.<ext>`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output directory cannot be created
    /// - The report cannot be serialized
    /// - The file cannot be written
    pub fn write(&self, report: &Report, stem: &str) -> Result<PathBuf> {
        self.write_with_stats(report, stem).map(|stats| stats.path)
    }

    /// Write the report and return statistics about the write operation.
    pub fn write_with_stats(&self, report: &Report, stem: &str) -> Result<WriteStats> {
        let bytes = self.encode(report)?;

        fs::create_dir_all(&self.output_directory)?;
        let path = self.output_path(stem);
        fs::write(&path, &bytes)?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());

        Ok(WriteStats {
            path,
            format: self.format,
            bytes_written: bytes.len(),
            num_sections: report.sections().len(),
        })
    }
}

/// Statistics about a report write operation.
#[derive(Debug, Clone)]
pub struct WriteStats {
    /// File the report was written to
    pub path: PathBuf,
    pub format: ReportFormat,
    pub bytes_written: usize,
    /// Page sections present in the report
    pub num_sections: usize,
}

impl WriteStats {
    /// Get a human-readable summary of the write operation.
    pub fn summary(&self) -> String {
        format!(
            "Wrote {} section(s), {} bytes of {} to {}",
            self.num_sections,
            self.bytes_written,
            self.format.extension(),
            self.path.display()
        )
    }
}

/// Builder for configuring report write options.
///
/// # Examples
///
/// ```no_run
/// use farm_report::{FarmReader, ReportFormat, ReportWriterBuilder};
///
/// let report = FarmReader::from_file("farm.bin")?.report()?;
///
/// ReportWriterBuilder::new()
///     .output_directory("./output")
///     .format(ReportFormat::MessagePack)
///     .build()?
///     .write(&report, "farm")?;
/// # Ok::<(), farm_report::Error>(())
/// ```
pub struct ReportWriterBuilder {
    output_directory: Option<PathBuf>,
    format: ReportFormat,
    pretty: bool,
}

impl ReportWriterBuilder {
    /// Create a new report writer builder with default options.
    pub fn new() -> Self {
        Self {
            output_directory: None,
            format: ReportFormat::Json,
            pretty: true,
        }
    }

    /// Set the output directory.
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the output format.
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set whether JSON output is indented.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Build the report writer.
    ///
    /// # Errors
    ///
    /// Returns an error if output_directory was not set.
    pub fn build(self) -> Result<ReportWriter> {
        let output_directory = self
            .output_directory
            .ok_or_else(|| Error::NullInput("Output directory not set".to_string()))?;

        Ok(ReportWriter {
            output_directory,
            format: self.format,
            pretty: self.pretty,
        })
    }
}

impl Default for ReportWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
