use serde::{Deserialize, Serialize};

use crate::viewmodel::{DelayBucket, TimeSlot, Zone};

/// The pre-aggregated statistics document served by the edge key-value
/// endpoint. Display-only: nothing here is validated beyond the shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticsDocument {
    #[serde(default)]
    pub arrivals: DirectionStats,
    #[serde(default)]
    pub departures: DirectionStats,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DirectionStats {
    #[serde(rename = "flightsPerDay", default)]
    pub flights_per_day: i64,
    #[serde(rename = "daysTracked", default)]
    pub days_tracked: i64,
    #[serde(rename = "averageDelay", default)]
    pub average_delay: f64,
    #[serde(default)]
    pub delays: DelayCounts,
    #[serde(rename = "timeOfDay", default)]
    pub time_of_day: TimeOfDayStats,
    #[serde(default)]
    pub schengen: SchengenStats,
    #[serde(default)]
    pub heatmap: HeatmapStats,
    #[serde(rename = "weeklyData", default)]
    pub weekly_data: Vec<WeeklyPoint>,
}

/// One set of delay-bucket percentages; conventionally sums to ~100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DelayCounts {
    #[serde(rename = "onTime", default)]
    pub on_time: f64,
    #[serde(default)]
    pub minor: f64,
    #[serde(default)]
    pub medium: f64,
    #[serde(default)]
    pub major: f64,
}

impl DelayCounts {
    pub fn get(&self, bucket: DelayBucket) -> f64 {
        match bucket {
            DelayBucket::OnTime => self.on_time,
            DelayBucket::Minor => self.minor,
            DelayBucket::Medium => self.medium,
            DelayBucket::Major => self.major,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeOfDayStats {
    #[serde(default)]
    pub early: Option<DelayCounts>,
    #[serde(default)]
    pub morning: Option<DelayCounts>,
    #[serde(default)]
    pub afternoon: Option<DelayCounts>,
    #[serde(default)]
    pub evening: Option<DelayCounts>,
}

impl TimeOfDayStats {
    pub fn slot(&self, slot: TimeSlot) -> Option<&DelayCounts> {
        match slot {
            TimeSlot::Early => self.early.as_ref(),
            TimeSlot::Morning => self.morning.as_ref(),
            TimeSlot::Afternoon => self.afternoon.as_ref(),
            TimeSlot::Evening => self.evening.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchengenStats {
    #[serde(default)]
    pub schengen: DelayCounts,
    #[serde(rename = "nonSchengen", default)]
    pub non_schengen: DelayCounts,
}

impl SchengenStats {
    pub fn zone(&self, zone: Zone) -> &DelayCounts {
        match zone {
            Zone::Schengen => &self.schengen,
            Zone::External => &self.non_schengen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatmapStats {
    #[serde(default)]
    pub schengen: SlotMinutes,
    #[serde(rename = "nonSchengen", default)]
    pub non_schengen: SlotMinutes,
}

impl HeatmapStats {
    pub fn zone(&self, zone: Zone) -> &SlotMinutes {
        match zone {
            Zone::Schengen => &self.schengen,
            Zone::External => &self.non_schengen,
        }
    }
}

/// Average delay minutes per time slot; a missing slot reads as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SlotMinutes {
    #[serde(default)]
    pub early: Option<f64>,
    #[serde(default)]
    pub morning: Option<f64>,
    #[serde(default)]
    pub afternoon: Option<f64>,
    #[serde(default)]
    pub evening: Option<f64>,
}

impl SlotMinutes {
    pub fn slot(&self, slot: TimeSlot) -> Option<f64> {
        match slot {
            TimeSlot::Early => self.early,
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub week: String,
    #[serde(rename = "onTime", default)]
    pub on_time: f64,
    #[serde(default)]
    pub minor: f64,
    #[serde(default)]
    pub medium: f64,
    #[serde(default)]
    pub major: f64,
}

impl WeeklyPoint {
    pub fn buckets(&self) -> DelayCounts {
        DelayCounts {
            on_time: self.on_time,
            minor: self.minor,
            medium: self.medium,
            major: self.major,
        }
    }
}

/// Server reply: the document plus when the server last pulled it upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightStatsDto {
    #[serde(rename = "fetchedAt")]
    pub fetched_at: String,
    pub document: StatisticsDocument,
}

/// Client-visible failure modes of the data channel. Both are terminal for
/// the current render cycle; the rest of the page stays interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    /// Network error or non-success response from the backend.
    FetchFailed,
    /// The backend answered, but with an empty/null document.
    DataUnavailable,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::FetchFailed => write!(f, "Failed to fetch data"),
            FetchError::DataUnavailable => write!(f, "No flight data available yet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_document() {
        let raw = r#"{
            "arrivals": {
                "flightsPerDay": 120,
                "daysTracked": 31,
                "averageDelay": 16.0,
                "delays": {"onTime": 73, "minor": 17, "medium": 8, "major": 2},
                "timeOfDay": {
                    "early": {"onTime": 80, "minor": 12, "medium": 6, "major": 2}
                },
                "schengen": {
                    "schengen": {"onTime": 78, "minor": 14, "medium": 6, "major": 2},
                    "nonSchengen": {"onTime": 70, "minor": 18, "medium": 9, "major": 3}
                },
                "heatmap": {
                    "schengen": {"early": 4, "morning": 12},
                    "nonSchengen": {"early": 10}
                },
                "weeklyData": [
                    {"week": "Sep 1", "onTime": 78, "minor": 14, "medium": 6, "major": 2}
                ]
            },
            "departures": {}
        }"#;
        let doc: StatisticsDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.arrivals.flights_per_day, 120);
        assert_eq!(doc.arrivals.delays.on_time, 73.0);
        assert_eq!(doc.arrivals.time_of_day.early.unwrap().minor, 12.0);
        assert_eq!(doc.arrivals.heatmap.schengen.morning, Some(12.0));
        assert_eq!(doc.arrivals.heatmap.non_schengen.evening, None);
        assert_eq!(doc.arrivals.weekly_data[0].week, "Sep 1");
        // a fully absent direction degrades to zeros, not an error
        assert_eq!(doc.departures.flights_per_day, 0);
        assert!(doc.departures.time_of_day.early.is_none());
    }

    #[test]
    fn bucket_lookup_is_total() {
        let counts = DelayCounts {
            on_time: 75.0,
            minor: 15.0,
            medium: 7.0,
            major: 3.0,
        };
        assert_eq!(counts.get(DelayBucket::OnTime), 75.0);
        assert_eq!(counts.get(DelayBucket::Minor), 15.0);
        assert_eq!(counts.get(DelayBucket::Medium), 7.0);
        assert_eq!(counts.get(DelayBucket::Major), 3.0);
    }

    #[test]
    fn fetch_error_messages() {
        assert_eq!(FetchError::FetchFailed.to_string(), "Failed to fetch data");
        assert_eq!(
            FetchError::DataUnavailable.to_string(),
            "No flight data available yet"
        );
    }
}
