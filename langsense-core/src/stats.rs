//! Daily detection statistics

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::aggregate::round2;
use crate::record::DetectionRecord;
use crate::Language;

/// Counters for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub total_detections: u64,
    pub hindi_count: u64,
    pub english_count: u64,
    pub hinglish_count: u64,
    pub unknown_count: u64,
    pub avg_confidence: f64,
}

impl DailyStats {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            total_detections: 0,
            hindi_count: 0,
            english_count: 0,
            hinglish_count: 0,
            unknown_count: 0,
            avg_confidence: 0.0,
        }
    }

    /// Count one detection and fold its confidence into the running average
    pub fn record(&mut self, language: Language, confidence: f64) {
        self.total_detections += 1;
        match language {
            Language::Hindi => self.hindi_count += 1,
            Language::English => self.english_count += 1,
            Language::Hinglish => self.hinglish_count += 1,
            Language::Unknown => self.unknown_count += 1,
        }

        let n = self.total_detections as f64;
        self.avg_confidence = (self.avg_confidence * (n - 1.0) + confidence) / n;
    }

    pub fn count(&self, language: Language) -> u64 {
        match language {
            Language::Hindi => self.hindi_count,
            Language::English => self.english_count,
            Language::Hinglish => self.hinglish_count,
            Language::Unknown => self.unknown_count,
        }
    }
}

/// Confidence ranges reported in a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfidenceBucket {
    NinetyPlus,
    Eighties,
    Seventies,
    Sixties,
    BelowSixty,
}

impl ConfidenceBucket {
    pub const ALL: [ConfidenceBucket; 5] = [
        ConfidenceBucket::NinetyPlus,
        ConfidenceBucket::Eighties,
        ConfidenceBucket::Seventies,
        ConfidenceBucket::Sixties,
        ConfidenceBucket::BelowSixty,
    ];

    pub fn of(confidence: f64) -> Self {
        if confidence >= 90.0 {
            ConfidenceBucket::NinetyPlus
        } else if confidence >= 80.0 {
            ConfidenceBucket::Eighties
        } else if confidence >= 70.0 {
            ConfidenceBucket::Seventies
        } else if confidence >= 60.0 {
            ConfidenceBucket::Sixties
        } else {
            ConfidenceBucket::BelowSixty
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceBucket::NinetyPlus => "90-100%",
            ConfidenceBucket::Eighties => "80-89%",
            ConfidenceBucket::Seventies => "70-79%",
            ConfidenceBucket::Sixties => "60-69%",
            ConfidenceBucket::BelowSixty => "Below 60%",
        }
    }
}

/// Number of detections per confidence range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfidenceDistribution {
    #[serde(rename = "90-100%")]
    pub ninety_plus: u64,
    #[serde(rename = "80-89%")]
    pub eighties: u64,
    #[serde(rename = "70-79%")]
    pub seventies: u64,
    #[serde(rename = "60-69%")]
    pub sixties: u64,
    #[serde(rename = "Below 60%")]
    pub below_sixty: u64,
}

impl ConfidenceDistribution {
    pub fn add(&mut self, confidence: f64) {
        *self.slot(ConfidenceBucket::of(confidence)) += 1;
    }

    pub fn get(&self, bucket: ConfidenceBucket) -> u64 {
        match bucket {
            ConfidenceBucket::NinetyPlus => self.ninety_plus,
            ConfidenceBucket::Eighties => self.eighties,
            ConfidenceBucket::Seventies => self.seventies,
            ConfidenceBucket::Sixties => self.sixties,
            ConfidenceBucket::BelowSixty => self.below_sixty,
        }
    }

    fn slot(&mut self, bucket: ConfidenceBucket) -> &mut u64 {
        match bucket {
            ConfidenceBucket::NinetyPlus => &mut self.ninety_plus,
            ConfidenceBucket::Eighties => &mut self.eighties,
            ConfidenceBucket::Seventies => &mut self.seventies,
            ConfidenceBucket::Sixties => &mut self.sixties,
            ConfidenceBucket::BelowSixty => &mut self.below_sixty,
        }
    }
}

/// Count and share of one label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub count: u64,
    pub percentage: f64,
}

/// Aggregate view over all recorded detections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_detections: u64,
    /// Labels seen at least once
    pub language_distribution: BTreeMap<Language, LanguageShare>,
    pub confidence_distribution: ConfidenceDistribution,
    pub avg_confidence: f64,
    /// Per-day counters, newest first
    pub recent_activity: Vec<DailyStats>,
}

/// Accumulates detections into per-day statistics
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    days: BTreeMap<NaiveDate, DailyStats>,
    distribution: ConfidenceDistribution,
    confidence_sum: f64,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a detection made on `date`
    pub fn record(&mut self, date: NaiveDate, language: Language, confidence: f64) {
        self.days
            .entry(date)
            .or_insert_with(|| DailyStats::new(date))
            .record(language, confidence);
        self.distribution.add(confidence);
        self.confidence_sum += confidence;
    }

    /// Count a stored record on its UTC calendar day
    pub fn record_detection(&mut self, record: &DetectionRecord) {
        self.record(
            record.created_at.date_naive(),
            record.result.language,
            record.result.confidence,
        );
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DailyStats> {
        self.days.get(&date)
    }

    /// Every day with at least one detection, oldest first
    pub fn days(&self) -> impl Iterator<Item = &DailyStats> {
        self.days.values()
    }

    pub fn total(&self) -> u64 {
        self.days.values().map(|d| d.total_detections).sum()
    }

    /// Summarize everything, with daily activity from `recent_days` before
    /// `today` up to `today`
    pub fn summary(&self, today: NaiveDate, recent_days: u32) -> StatsSummary {
        let total = self.total();

        let mut language_distribution = BTreeMap::new();
        for language in Language::ALL {
            let count: u64 = self.days.values().map(|d| d.count(language)).sum();
            if count > 0 {
                let percentage = round2(count as f64 / total as f64 * 100.0);
                language_distribution.insert(language, LanguageShare { count, percentage });
            }
        }

        let avg_confidence = if total == 0 {
            0.0
        } else {
            round2(self.confidence_sum / total as f64)
        };

        let since = today
            .checked_sub_days(Days::new(u64::from(recent_days)))
            .unwrap_or(NaiveDate::MIN);
        let recent_activity = self
            .days
            .range(since..=today)
            .rev()
            .map(|(_, day)| day.clone())
            .collect();

        StatsSummary {
            total_detections: total,
            language_distribution,
            confidence_distribution: self.distribution,
            avg_confidence,
            recent_activity,
        }
    }
}
