use crate::models::config::Config;
use crate::models::error::Result;
use crate::models::property::PropertySet;
use crate::service::extract::extract_metadata;
use crate::service::run_tracker::{start_run, ActiveRun};
use crate::service::upload::Collector;
use crate::utils::progress::create_spinner;
use crate::utils::report::print_records;
use log::{error, info};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Suppress the spinner and the per-record listing
    pub quiet: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary {
    pub run_id: String,
    pub files_count: u64,
    pub paths_scanned: usize,
}

/// Start a run, walk and upload every configured path in order, then end the run.
///
/// Any failure is returned as soon as it happens. The run is then never ended,
/// so the collector keeps it open; its id is logged for reconciliation.
pub fn run_scan<C: Collector + ?Sized>(
    config: &Config,
    collector: &C,
    options: ScanOptions,
) -> Result<ScanSummary> {
    let properties = config.property_set();
    let run = start_run(collector)?;
    let run_id = run.id().to_string();

    match scan_paths(&config.paths, &properties, &run, collector, options) {
        Ok(files_count) => {
            run.end(collector, files_count)?;
            Ok(ScanSummary {
                run_id,
                files_count,
                paths_scanned: config.paths.len(),
            })
        }
        Err(e) => {
            error!("Run {} aborted and will not be reported as ended: {}", run_id, e);
            Err(e)
        }
    }
}

fn scan_paths<C: Collector + ?Sized>(
    paths: &[String],
    properties: &PropertySet,
    run: &ActiveRun,
    collector: &C,
    options: ScanOptions,
) -> Result<u64> {
    let mut files_count = 0;
    for (idx, path) in paths.iter().enumerate() {
        info!("[{}/{}] Scanning {}", idx + 1, paths.len(), path);
        files_count = process_path(
            Path::new(path),
            properties,
            run,
            collector,
            files_count,
            options,
        )?;
    }
    Ok(files_count)
}

/// Walk one path and upload its records. Returns `files_so_far` plus the files found here.
fn process_path<C: Collector + ?Sized>(
    path: &Path,
    properties: &PropertySet,
    run: &ActiveRun,
    collector: &C,
    files_so_far: u64,
    options: ScanOptions,
) -> Result<u64> {
    let spinner = (!options.quiet).then(|| create_spinner(&format!("Scanning {}", path.display())));

    let extraction = match extract_metadata(path, properties, run.id(), spinner.as_ref()) {
        Ok(extraction) => extraction,
        Err(e) => {
            if let Some(pb) = &spinner {
                pb.abandon_with_message(format!("Failed to scan {}", path.display()));
            }
            return Err(e);
        }
    };

    if let Some(pb) = spinner {
        pb.finish_with_message(format!(
            "Scanned {}: {} entries, {} files",
            path.display(),
            extraction.records.len(),
            extraction.files_count
        ));
    }
    if !options.quiet {
        print_records(&extraction.records, properties);
    }

    collector.upload_metadata(&extraction.records)?;
    Ok(files_so_far + extraction.files_count)
}
