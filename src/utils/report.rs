use crate::models::metadata_record::MetadataRecord;
use crate::models::property::{Property, PropertySet};
use crate::utils::progress::format_bytes;
use chrono::SecondsFormat;

/// Console lines for the requested properties of one record
pub fn format_record(record: &MetadataRecord, properties: &PropertySet) -> Vec<String> {
    properties
        .iter()
        .map(|property| match property {
            Property::Path => format!("Path: {}", record.path),
            Property::Filesize => format!(
                "Filesize: {} ({})",
                format_bytes(record.filesize),
                record.filesize
            ),
            Property::LastModified => format!(
                "LastModified: {}",
                record
                    .last_modified
                    .map(|modified| modified.to_rfc3339_opts(SecondsFormat::Secs, false))
                    .unwrap_or_default()
            ),
            Property::Filename => format!("Filename: {}", record.filename),
            Property::Extension => format!("Extension: {}", record.extension),
            Property::Checksum => format!("Checksum: {}", record.checksum),
        })
        .collect()
}

pub fn print_records(records: &[MetadataRecord], properties: &PropertySet) {
    for record in records {
        for line in format_record(record, properties) {
            println!("{}", line);
        }
        println!();
    }
}
