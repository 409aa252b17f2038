use chrono::{DateTime, Local};
use serde::Serialize;

/// One filesystem entry observed during a walk. Fields that were not requested stay at their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub path: String,
    pub filesize: u64,
    pub last_modified: Option<DateTime<Local>>,
    pub filename: String,
    pub extension: String,
    pub checksum: String,
    pub run_id: String,
}

impl MetadataRecord {
    pub fn new(run_id: &str) -> Self {
        Self {
            run_id: run_id.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serializes_with_collector_field_names() {
        let record = MetadataRecord {
            path: "/tmp/a/f.txt".to_string(),
            filesize: 4,
            last_modified: Some(Local.timestamp_opt(1_700_000_000, 0).unwrap()),
            filename: "f.txt".to_string(),
            extension: "txt".to_string(),
            checksum: "abc".to_string(),
            run_id: "run-1".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "path",
            "filesize",
            "lastModified",
            "filename",
            "extension",
            "checksum",
            "runId",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(json["filesize"], 4);
        assert_eq!(json["runId"], "run-1");
        assert!(json["lastModified"].as_str().unwrap().starts_with("20"));
    }

    #[test]
    fn test_new_record_only_carries_run_id() {
        let record = MetadataRecord::new("run-1");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["path"], "");
        assert_eq!(json["filesize"], 0);
        assert!(json["lastModified"].is_null());
        assert_eq!(json["checksum"], "");
        assert_eq!(json["runId"], "run-1");
    }
}
