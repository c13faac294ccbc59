//! Command-line interface for the FARM report decoder.
//!
//! This binary converts raw FARM log dumps to JSON or MessagePack reports.

use anyhow::Result;
use clap::Parser;
use farm_report::{
    assemble, DeviceProfile, DriveInterface, FarmLog, ReportFormat, ReportWriter,
};
use log::{info, LevelFilter};
use memmap2::Mmap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Decode FARM telemetry logs into JSON or MessagePack reports",
    long_about = "Decodes raw FARM (Field Accessible Reliability Metrics) log dumps into a \
                  hierarchical report.\n\n\
                  Fields a drive does not support are left out of the report; fields it \
                  supports but could not measure are reported as \"Invalid\"."
)]
struct Args {
    /// FARM log file, or a directory of them
    #[arg(value_name = "IN")]
    input: String,

    /// Root output directory for the reports
    #[arg(short, long, value_name = "OUT_ROOT")]
    out_root: String,

    /// Report format (json or msgpack)
    #[arg(short, long, default_value = "json")]
    format: ReportFormat,

    /// Drive interface (sata or sas); detected from the log when omitted
    #[arg(short, long)]
    interface: Option<DriveInterface>,

    /// Extension of the log files to pick up from a directory
    #[arg(long, default_value = "bin")]
    extension: String,

    /// Write single-line JSON
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn convert_one_file(input_file: &Path, writer: &ReportWriter, profile: &DeviceProfile) -> Result<()> {
    let file_name = input_file.to_string_lossy();
    info!("📄 Processing: {}", file_name);

    let start_time = Instant::now();

    let file = File::open(input_file)?;
    let mmap = unsafe { Mmap::map(&file)? };
    let log = FarmLog::new(&mmap)?;

    info!("   ├─ Size: {} fields", log.field_count());
    match log.drive_interface() {
        Some(interface) => info!("   ├─ Interface: {}", interface),
        None => info!("   ├─ Interface: not reported"),
    }

    let t0 = Instant::now();
    let report = assemble(&log, profile)?;
    info!(
        "   ├─ Decoded {} section(s), {} heads in {:.2?}",
        report.sections().len(),
        report.head_count(),
        t0.elapsed()
    );

    let stem = input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("farm");
    let stats = writer.write_with_stats(&report, stem)?;

    info!("   ├─ {}", stats.summary());
    info!("   └─ ✓ Total time: {:.2?}\n", start_time.elapsed());

    Ok(())
}

fn collect_inputs(in_path: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if in_path.is_file() {
        return Ok(vec![in_path.to_path_buf()]);
    }
    if !in_path.is_dir() {
        anyhow::bail!("'{}' is not a file or directory", in_path.display());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(in_path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some(extension))
        .collect();
    files.sort();
    Ok(files)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let in_path = Path::new(&args.input);
    let farm_files = collect_inputs(in_path, &args.extension)?;

    if farm_files.is_empty() {
        info!("No .{} files found in {}", args.extension, args.input);
        return Ok(());
    }

    info!("");
    info!("╔════════════════════════════════════════════╗");
    info!("║         FARM Log → Report Decoder          ║");
    info!("╚════════════════════════════════════════════╝");
    info!("");
    info!("📂 Found {} FARM log(s) in {}", farm_files.len(), args.input);
    info!("📁 Output directory: {}", args.out_root);
    info!("📊 Format: {}", args.format.extension());
    info!("");

    let profile = DeviceProfile {
        interface: args.interface,
        identity: None,
    };
    let writer = ReportWriter::new(&args.out_root)
        .format(args.format)
        .pretty(!args.compact);

    let total_start = Instant::now();
    let mut failures = 0;

    for (idx, input_file) in farm_files.iter().enumerate() {
        info!("[{}/{}]", idx + 1, farm_files.len());

        if let Err(e) = convert_one_file(input_file, &writer, &profile) {
            log::error!("   └─ ✗ Error: {}", e);
            log::error!("");
            failures += 1;
            continue;
        }
    }

    info!("═══════════════════════════════════════════");
    info!(
        "🏁 {} of {} file(s) decoded in {:.2?}",
        farm_files.len() - failures,
        farm_files.len(),
        total_start.elapsed()
    );
    info!("");

    Ok(())
}
