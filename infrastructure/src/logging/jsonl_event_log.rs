//! JSONL file writer for session events.
//!
//! Each [`EventRecord`] is serialized as a single JSON line. Once the file
//! holds more than `max_records` lines it is rewritten with only the newest
//! ones, so the log stays bounded across runs.

use finruimte_application::ports::event_log::{EventLog, EventRecord};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Bounded JSONL event log.
///
/// Thread-safe via a `Mutex` around the current line count. Every write is
/// best-effort: failures are reported through `tracing` and swallowed.
pub struct JsonlEventLog {
    path: PathBuf,
    max_records: usize,
    count: Mutex<usize>,
}

impl JsonlEventLog {
    /// Open (or prepare) the log at `path`.
    ///
    /// Creates parent directories if they don't exist. Returns `None` if the
    /// directory cannot be created.
    pub fn new(path: impl AsRef<Path>, max_records: usize) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!(
                "Could not create event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let count = read_lines(path).map(|lines| lines.len()).unwrap_or(0);
        debug!("Event log {} holds {} records", path.display(), count);

        Some(Self {
            path: path.to_path_buf(),
            max_records: max_records.max(1),
            count: Mutex::new(count),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    /// Read back every stored record, oldest first.
    ///
    /// Lines that do not parse are skipped with a warning. A missing file
    /// yields an empty list.
    pub fn export(&self) -> io::Result<Vec<EventRecord>> {
        let _guard = self.count.lock();
        let lines = match read_lines(&self.path) {
            Ok(lines) => lines,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Ok(lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed event on line {}: {}", i + 1, e);
                    None
                }
            })
            .collect())
    }

    /// Remove every stored record.
    pub fn clear(&self) -> io::Result<()> {
        let mut count = self.count.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        *count = 0;
        Ok(())
    }

    fn append(&self, line: &str, count: &mut usize) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        *count += 1;

        if *count > self.max_records {
            *count = self.truncate_to_newest()?;
        }
        Ok(())
    }

    /// Rewrite the file keeping the newest `max_records` lines.
    fn truncate_to_newest(&self) -> io::Result<usize> {
        let lines = read_lines(&self.path)?;
        let keep = &lines[lines.len().saturating_sub(self.max_records)..];

        let tmp = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&tmp)?;
            for line in keep {
                writeln!(file, "{}", line)?;
            }
            file.flush()?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!(
            "Trimmed event log {} to {} records",
            self.path.display(),
            keep.len()
        );
        Ok(keep.len())
    }
}

impl EventLog for JsonlEventLog {
    fn log(&self, record: EventRecord) {
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize {} event: {}", record.kind, e);
                return;
            }
        };

        let Ok(mut count) = self.count.lock() else {
            return;
        };
        if let Err(e) = self.append(&line, &mut count) {
            warn!("Could not write event log {}: {}", self.path.display(), e);
        }
    }
}

fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file)
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finruimte_application::ports::event_log::EventKind;
    use finruimte_application::{RunEstimateInput, RunEstimateUseCase};
    use finruimte_domain::{
        AnswerSet, Bucket, ExistingFinancing, HeadroomRange, Profitability, Purpose, RevenueBand,
        YesNo,
    };
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn record(session: &str, kind: EventKind) -> EventRecord {
        EventRecord::now(session, kind, json!({ "step": "scope" }))
    }

    #[test]
    fn test_writes_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let log = JsonlEventLog::new(&path, 10).unwrap();

        log.log(record("s1", EventKind::SessionStart));
        log.log(record("s1", EventKind::StepView));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "session_start");
        assert_eq!(first["session_id"], "s1");
        assert!(first["ts"].is_i64());
        assert_eq!(first["payload"]["step"], "scope");
    }

    #[test]
    fn test_keeps_newest_records_when_over_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let log = JsonlEventLog::new(&path, 3).unwrap();

        for i in 0..7 {
            log.log(record(&format!("s{}", i), EventKind::StepView));
        }

        let ids: Vec<String> = log
            .export()
            .unwrap()
            .into_iter()
            .map(|r| r.session_id)
            .collect();
        assert_eq!(ids, vec!["s4", "s5", "s6"]);
        assert!(!path.with_extension("jsonl.tmp").exists());
    }

    #[test]
    fn test_cap_applies_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        {
            let log = JsonlEventLog::new(&path, 2).unwrap();
            log.log(record("a", EventKind::StepView));
            log.log(record("b", EventKind::StepView));
        }

        let log = JsonlEventLog::new(&path, 2).unwrap();
        log.log(record("c", EventKind::StepView));

        let ids: Vec<String> = log
            .export()
            .unwrap()
            .into_iter()
            .map(|r| r.session_id)
            .collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_export_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let log = JsonlEventLog::new(&path, 10).unwrap();

        log.log(record("s1", EventKind::Exit));
        fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap()
            .write_all(b"not json\n")
            .unwrap();
        log.log(record("s1", EventKind::ResultView));

        let kinds: Vec<EventKind> = log.export().unwrap().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![EventKind::Exit, EventKind::ResultView]);
    }

    #[test]
    fn test_export_of_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlEventLog::new(dir.path().join("none.jsonl"), 10).unwrap();
        assert!(log.export().unwrap().is_empty());
    }

    #[test]
    fn test_clear_removes_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");
        let log = JsonlEventLog::new(&path, 10).unwrap();

        log.log(record("s1", EventKind::StepView));
        assert!(path.exists());

        log.clear().unwrap();
        assert!(!path.exists());
        assert!(log.export().unwrap().is_empty());

        // Clearing twice is fine
        log.clear().unwrap();
    }

    #[test]
    fn test_zero_cap_keeps_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlEventLog::new(dir.path().join("events.jsonl"), 0).unwrap();
        assert_eq!(log.max_records(), 1);

        log.log(record("a", EventKind::StepView));
        log.log(record("b", EventKind::StepView));
        assert_eq!(log.export().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_write_does_not_affect_estimate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let log = JsonlEventLog::new(&path, 10).unwrap();

        // A directory where the file should be makes every append fail
        fs::create_dir(&path).unwrap();
        log.log(record("s1", EventKind::StepView));
        assert!(path.is_dir());

        let answers = AnswerSet::new()
            .with_active_12_months(YesNo::Yes)
            .with_revenue_band(RevenueBand::From100kTo250k)
            .with_profitability(Profitability::Profit)
            .with_existing_financing(ExistingFinancing::None)
            .with_guarantee(YesNo::Yes)
            .with_purpose(Purpose::Investment);
        let estimate = RunEstimateUseCase::new()
            .with_event_log(Arc::new(log))
            .execute(RunEstimateInput::new("s1", answers));

        assert!(estimate.eligibility.is_eligible());
        assert_eq!(estimate.outcome.bucket, Bucket::A);
        assert_eq!(
            estimate.outcome.range,
            Some(HeadroomRange::new(31_000, 145_000))
        );
    }

    #[test]
    fn test_unusable_directory_gives_no_log() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        assert!(JsonlEventLog::new(blocker.join("events.jsonl"), 10).is_none());
    }
}
