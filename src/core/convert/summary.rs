//! Conversion summary and reporting

use crate::core::flatten::FlattenStats;
use std::time::Duration;

/// Summary of one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Data rows written (header excluded)
    pub records_written: usize,

    /// Extension values whose sub-field is not a known column
    pub unknown_subtype_values: usize,

    /// Repeated family-member values beyond the slot capacity
    pub overflow_values: usize,

    /// Data found after the last record terminator was discarded
    pub partial_record_discarded: bool,

    /// Duration of the conversion
    pub duration: Duration,
}

impl ConversionSummary {
    pub fn from_stats(stats: &FlattenStats) -> Self {
        Self {
            records_written: stats.records,
            unknown_subtype_values: stats.unknown_subtype_values,
            overflow_values: stats.overflow_values,
            partial_record_discarded: stats.partial_record_discarded,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Total values silently dropped
    pub fn dropped_values(&self) -> usize {
        self.unknown_subtype_values + self.overflow_values
    }

    /// True when nothing from the input was left out of the output
    pub fn is_lossless(&self) -> bool {
        self.dropped_values() == 0 && !self.partial_record_discarded
    }

    /// Records per second, 0 for an instantaneous run
    pub fn throughput(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.records_written as f64 / secs
    }
}
