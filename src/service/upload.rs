use crate::models::error::{Result, ScanError};
use crate::models::metadata_record::MetadataRecord;
use crate::models::run::Run;
use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use std::time::Duration;

pub const RUN_RESOURCE: &str = "/run";
pub const METADATA_RESOURCE: &str = "/metadata";

/// Destination for run lifecycle and metadata reports.
/// Implementations only fail on transport problems; collector-side rejections are logged.
pub trait Collector {
    /// Report a newly started run
    fn create_run(&self, run: &Run) -> Result<()>;

    /// Report the completion of a run, keyed by its id
    fn update_run(&self, run: &Run) -> Result<()>;

    /// Upload the records of one configured path
    fn upload_metadata(&self, records: &[MetadataRecord]) -> Result<()>;
}

/// Sends reports to `http://{server}:{port}` as JSON. Requests wait on the collector without a deadline.
pub struct HttpCollector {
    base_url: String,
    http_client: Client,
}

impl HttpCollector {
    pub fn new(base_url: String) -> Result<Self> {
        // The blocking client defaults to a 30s total timeout
        let http_client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(ScanError::HttpClient)?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Serializes `payload`, sends it and returns the collector's status code
    fn send<T: Serialize + ?Sized>(
        &self,
        method: Method,
        resource: &str,
        payload_name: &'static str,
        payload: &T,
    ) -> Result<u16> {
        let url = format!("{}{}", self.base_url, resource);
        let body = serde_json::to_vec(payload).map_err(|cause| ScanError::Serialize {
            payload: payload_name,
            cause,
        })?;
        let method_name = method.to_string();

        let response = self
            .http_client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|cause| ScanError::Transport {
                method: method_name.clone(),
                url: url.clone(),
                cause,
            })?;

        let status = response.status();
        if status.is_success() {
            info!("{} {} response status: {}", method_name, url, status);
        } else {
            warn!(
                "{} {} was not accepted by the collector, response status: {}",
                method_name, url, status
            );
        }
        Ok(status.as_u16())
    }
}

impl Collector for HttpCollector {
    fn create_run(&self, run: &Run) -> Result<()> {
        self.send(Method::POST, RUN_RESOURCE, "run", run)?;
        Ok(())
    }

    fn update_run(&self, run: &Run) -> Result<()> {
        self.send(Method::PUT, RUN_RESOURCE, "run", run)?;
        Ok(())
    }

    fn upload_metadata(&self, records: &[MetadataRecord]) -> Result<()> {
        self.send(Method::POST, METADATA_RESOURCE, "metadata", records)?;
        Ok(())
    }
}

/// Logs what would be reported without any network I/O
pub struct DryRunCollector;

impl DryRunCollector {
    fn describe<T: Serialize + ?Sized>(
        method: &str,
        resource: &str,
        payload_name: &'static str,
        payload: &T,
    ) -> Result<()> {
        let body = serde_json::to_vec(payload).map_err(|cause| ScanError::Serialize {
            payload: payload_name,
            cause,
        })?;
        info!(
            "[DRY RUN] Would send {} {} ({} bytes)",
            method,
            resource,
            body.len()
        );
        Ok(())
    }
}

impl Collector for DryRunCollector {
    fn create_run(&self, run: &Run) -> Result<()> {
        Self::describe("POST", RUN_RESOURCE, "run", run)
    }

    fn update_run(&self, run: &Run) -> Result<()> {
        Self::describe("PUT", RUN_RESOURCE, "run", run)
    }

    fn upload_metadata(&self, records: &[MetadataRecord]) -> Result<()> {
        Self::describe("POST", METADATA_RESOURCE, "metadata", records)
    }
}
