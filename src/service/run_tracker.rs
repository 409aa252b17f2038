use crate::models::error::{Result, ScanError};
use crate::models::run::Run;
use crate::service::upload::Collector;
use chrono::{DateTime, Local};
use log::info;
use uuid::Uuid;

/// A run that has been reported as started and not yet ended
#[derive(Debug)]
pub struct ActiveRun {
    id: String,
    started_at: DateTime<Local>,
}

impl ActiveRun {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reports the run as finished. Consumes the handle so a run is ended at most once.
    pub fn end<C: Collector + ?Sized>(self, collector: &C, files_count: u64) -> Result<()> {
        let ended_at = Local::now();
        collector.update_run(&Run::ended(&self.id, ended_at, files_count))?;
        info!(
            "Run {} ended after {}s with {} files",
            self.id,
            (ended_at - self.started_at).num_seconds(),
            files_count
        );
        Ok(())
    }
}

/// Generates a run id and reports the start of the run before anything is walked
pub fn start_run<C: Collector + ?Sized>(collector: &C) -> Result<ActiveRun> {
    start_run_on(collector, &machine_name()?)
}

pub fn start_run_on<C: Collector + ?Sized>(collector: &C, machine_name: &str) -> Result<ActiveRun> {
    let run = ActiveRun {
        id: Uuid::new_v4().to_string(),
        started_at: Local::now(),
    };
    collector.create_run(&Run::started(&run.id, machine_name, run.started_at))?;
    info!("Run {} started on {}", run.id, machine_name);
    Ok(run)
}

pub fn machine_name() -> Result<String> {
    let name = hostname::get().map_err(ScanError::MachineName)?;
    Ok(name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_collector::{spawn_collector, unused_port};
    use crate::service::upload::HttpCollector;

    #[test]
    fn test_start_and_end_report_the_same_run() {
        let collector = spawn_collector(2, 200);
        let client = HttpCollector::new(collector.base_url()).unwrap();

        let run = start_run_on(&client, "scanner-01").unwrap();
        let run_id = run.id().to_string();
        run.end(&client, 7).unwrap();

        let requests = collector.finish();
        let start = requests[0].json();
        let end = requests[1].json();

        assert_eq!(requests[0].method, "POST");
        assert_eq!(start["id"], run_id.as_str());
        assert_eq!(start["machineName"], "scanner-01");
        assert!(start["start"].is_string());
        assert!(start["end"].is_null());
        assert_eq!(start["filesCount"], 0);

        assert_eq!(requests[1].method, "PUT");
        assert_eq!(end["id"], run_id.as_str());
        assert_eq!(end["machineName"], "");
        assert!(end["start"].is_null());
        assert!(end["end"].is_string());
        assert_eq!(end["filesCount"], 7);
    }

    #[test]
    fn test_run_ids_are_unique() {
        let collector = spawn_collector(2, 200);
        let client = HttpCollector::new(collector.base_url()).unwrap();

        let first = start_run_on(&client, "host").unwrap();
        let second = start_run_on(&client, "host").unwrap();
        collector.finish();

        assert_ne!(first.id(), second.id());
        assert!(Uuid::parse_str(first.id()).is_ok());
    }

    #[test]
    fn test_failed_start_report_is_fatal() {
        let client = HttpCollector::new(format!("http://127.0.0.1:{}", unused_port())).unwrap();

        let result = start_run_on(&client, "host");

        assert!(matches!(result, Err(ScanError::Transport { .. })));
    }

    #[test]
    fn test_machine_name_is_not_empty() {
        assert!(!machine_name().unwrap().is_empty());
    }
}
