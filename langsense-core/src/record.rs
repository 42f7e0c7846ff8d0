//! Detection history records and the persistence seam

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::net::IpAddr;
use std::sync::{Mutex, PoisonError};

use crate::detector::DetectionResult;
use crate::stats::{StatsAggregator, StatsSummary};

/// Longest input text kept in a record, in characters
pub const MAX_INPUT_CHARS: usize = 10_000;
/// Longest user agent kept in a record, in characters
pub const MAX_USER_AGENT_CHARS: usize = 500;

/// Who asked for a detection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallerInfo {
    pub ip_address: Option<IpAddr>,
    #[serde(default)]
    pub user_agent: String,
}

impl CallerInfo {
    pub fn new(ip_address: Option<IpAddr>, user_agent: &str) -> Self {
        Self {
            ip_address,
            user_agent: truncate_chars(user_agent, MAX_USER_AGENT_CHARS).to_string(),
        }
    }
}

/// One stored detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub input_text: String,
    #[serde(flatten)]
    pub result: DetectionResult,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller: Option<CallerInfo>,
}

impl DetectionRecord {
    /// Record stamped with the current time; long input is truncated
    pub fn new(input_text: &str, result: DetectionResult) -> Self {
        Self::at(input_text, result, Utc::now())
    }

    /// Record with an explicit timestamp
    pub fn at(input_text: &str, result: DetectionResult, created_at: DateTime<Utc>) -> Self {
        Self {
            input_text: truncate_chars(input_text, MAX_INPUT_CHARS).to_string(),
            result,
            created_at,
            caller: None,
        }
    }

    pub fn with_caller(mut self, caller: CallerInfo) -> Self {
        self.caller = Some(caller);
        self
    }
}

impl fmt::Display for DetectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}%) - {}",
            self.result.language,
            self.result.confidence,
            self.created_at.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Destination for detection records
pub trait DetectionSink {
    type Error;

    fn store(&self, record: DetectionRecord) -> Result<(), Self::Error>;
}

/// In-process sink that keeps every record and the daily statistics
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<SinkState>,
}

#[derive(Debug, Default)]
struct SinkState {
    records: Vec<DetectionRecord>,
    stats: StatsAggregator,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, SinkState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.state().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to `limit` records, newest first
    pub fn recent(&self, limit: usize) -> Vec<DetectionRecord> {
        let state = self.state();
        let mut records = state.records.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        records
    }

    /// Copy of the accumulated statistics
    pub fn stats(&self) -> StatsAggregator {
        self.state().stats.clone()
    }

    /// Summary with activity since `recent_days` before the latest record
    pub fn summary(&self, recent_days: u32) -> StatsSummary {
        let state = self.state();
        let today = state
            .records
            .iter()
            .map(|r| r.created_at.date_naive())
            .max()
            .unwrap_or_else(|| Utc::now().date_naive());
        state.stats.summary(today, recent_days)
    }
}

impl DetectionSink for MemorySink {
    type Error = Infallible;

    fn store(&self, record: DetectionRecord) -> Result<(), Self::Error> {
        let mut state = self.state();
        state.stats.record_detection(&record);
        state.records.push(record);
        Ok(())
    }
}

/// Longest prefix of `text` with at most `max` characters
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
