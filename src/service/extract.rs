use crate::models::error::{Result, ScanError};
use crate::models::metadata_record::MetadataRecord;
use crate::models::property::{Property, PropertySet};
use crate::service::hash::checksum_file;
use crate::utils::directory::{extension_of, file_name_of, walk_entries};
use chrono::{DateTime, Local};
use indicatif::ProgressBar;
use log::{debug, info};
use std::io;
use std::path::Path;
use walkdir::DirEntry;

/// Records produced by walking one configured path
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<MetadataRecord>,
    /// Non-directory entries visited
    pub files_count: u64,
}

/// Walk `root` and build one record per entry, filling in only the requested properties.
/// The first unreadable entry aborts the walk.
pub fn extract_metadata(
    root: &Path,
    properties: &PropertySet,
    run_id: &str,
    progress: Option<&ProgressBar>,
) -> Result<Extraction> {
    info!("Extracting metadata from {}", root.display());
    let mut extraction = Extraction::default();

    for entry in walk_entries(root) {
        let entry = entry?;
        let is_dir = entry.file_type().is_dir();
        debug!("Visiting {}", entry.path().display());

        extraction
            .records
            .push(build_record(&entry, is_dir, properties, run_id)?);
        if !is_dir {
            extraction.files_count += 1;
        }

        if let Some(pb) = progress {
            pb.set_message(format!(
                "Scanning {} ({} files)",
                root.display(),
                extraction.files_count
            ));
        }
    }

    info!(
        "Found {} entries ({} files) in {}",
        extraction.records.len(),
        extraction.files_count,
        root.display()
    );
    Ok(extraction)
}

fn build_record(
    entry: &DirEntry,
    is_dir: bool,
    properties: &PropertySet,
    run_id: &str,
) -> Result<MetadataRecord> {
    let path = entry.path();
    let mut record = MetadataRecord::new(run_id);

    // Not following links, so this is the link's own metadata
    let metadata = if properties.contains(Property::Filesize)
        || properties.contains(Property::LastModified)
    {
        Some(
            entry
                .metadata()
                .map_err(|cause| metadata_error(path, io::Error::from(cause)))?,
        )
    } else {
        None
    };

    for property in properties.iter() {
        if is_dir && property.skips_directories() {
            continue;
        }
        match (property, &metadata) {
            (Property::Path, _) => record.path = path.to_string_lossy().into_owned(),
            (Property::Filesize, Some(metadata)) => record.filesize = metadata.len(),
            (Property::LastModified, Some(metadata)) => {
                let modified = metadata
                    .modified()
                    .map_err(|cause| metadata_error(path, cause))?;
                record.last_modified = Some(DateTime::<Local>::from(modified));
            }
            (Property::Filename, _) => record.filename = file_name_of(path),
            (Property::Extension, _) => record.extension = extension_of(path),
            (Property::Checksum, _) => record.checksum = checksum_file(path)?,
            (Property::Filesize | Property::LastModified, None) => {}
        }
    }

    Ok(record)
}

fn metadata_error(path: &Path, cause: io::Error) -> ScanError {
    ScanError::Metadata {
        path: path.to_path_buf(),
        cause,
    }
}
