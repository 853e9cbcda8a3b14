//! Pure reshaping of a `DirectionStats` into the structures the display
//! widgets consume. Everything here is deterministic and total over
//! well-formed input: missing optional fields degrade to 0 rather than fail.

use serde::{Deserialize, Serialize};

use crate::shared::types::{DelayCounts, DirectionStats, StatisticsDocument, WeeklyPoint};

/// The two flight categories tracked for the airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Arrivals,
    Departures,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Arrivals => "Arrivals",
            Direction::Departures => "Departures",
        }
    }
}

pub fn select_direction(doc: &StatisticsDocument, direction: Direction) -> &DirectionStats {
    match direction {
        Direction::Arrivals => &doc.arrivals,
        Direction::Departures => &doc.departures,
    }
}

/// Coarse time-of-day partition, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Early,
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Early,
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
    ];

    /// Key used in the wire document.
    pub fn key(&self) -> &'static str {
        match self {
            TimeSlot::Early => "early",
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Early => "Early",
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }
}

/// Schengen status of the other end of the flight. Schengen renders first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Schengen,
    External,
}

impl Zone {
    pub const ALL: [Zone; 2] = [Zone::Schengen, Zone::External];

    /// Key used in the wire document.
    pub fn key(&self) -> &'static str {
        match self {
            Zone::Schengen => "schengen",
            Zone::External => "nonSchengen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Zone::Schengen => "Schengen",
            Zone::External => "External",
        }
    }
}

/// The four delay buckets, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayBucket {
    OnTime,
    Minor,
    Medium,
    Major,
}

impl DelayBucket {
    pub const ALL: [DelayBucket; 4] = [
        DelayBucket::OnTime,
        DelayBucket::Minor,
        DelayBucket::Medium,
        DelayBucket::Major,
    ];

    pub fn fill(&self) -> &'static str {
        match self {
            DelayBucket::OnTime => ON_TIME_FILL,
            DelayBucket::Minor => MINOR_FILL,
            DelayBucket::Medium => MEDIUM_FILL,
            DelayBucket::Major => MAJOR_FILL,
        }
    }

    /// Long form, used in the delay-breakdown card.
    pub fn label(&self) -> &'static str {
        match self {
            DelayBucket::OnTime => "On Time",
            DelayBucket::Minor => "5-30 Minutes",
            DelayBucket::Medium => "31-60 Minutes",
            DelayBucket::Major => "60+ Minutes",
        }
    }

    /// Short form, used in chart legends.
    pub fn short_label(&self) -> &'static str {
        match self {
            DelayBucket::OnTime => "On Time",
            DelayBucket::Minor => "5-30m",
            DelayBucket::Medium => "31-60m",
            DelayBucket::Major => ">60m",
        }
    }

    /// Text color that reads against `fill()`: dark on the two light fills,
    /// light on the two dark ones.
    pub fn text(&self) -> &'static str {
        match self {
            DelayBucket::OnTime | DelayBucket::Minor => TEXT_DARK,
            DelayBucket::Medium | DelayBucket::Major => TEXT_LIGHT,
        }
    }
}

pub const ON_TIME_FILL: &str = "#10B981"; // green-500
pub const MINOR_FILL: &str = "#F59E0B"; // yellow-500
pub const MEDIUM_FILL: &str = "#F97316"; // orange-500
pub const MAJOR_FILL: &str = "#EF4444"; // red-500

const TEXT_DARK: &str = "#1F2937";
const TEXT_LIGHT: &str = "#FFFFFF";

/// One labelled row of bucket percentages, as drawn by the stacked bar charts.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub label: String,
    pub values: DelayCounts,
}

/// Four rows in fixed Early/Morning/Afternoon/Evening order; a slot absent
/// from the document yields an all-zero row.
pub fn time_of_day_series(stats: &DirectionStats) -> Vec<SeriesRow> {
    TimeSlot::ALL
        .iter()
        .map(|slot| SeriesRow {
            label: slot.label().to_string(),
            values: stats
                .time_of_day
                .slot(*slot)
                .copied()
                .unwrap_or_default(),
        })
        .collect()
}

/// Exactly two rows, Schengen first, External second.
pub fn schengen_series(stats: &DirectionStats) -> [SeriesRow; 2] {
    Zone::ALL.map(|zone| SeriesRow {
        label: zone.label().to_string(),
        values: *stats.schengen.zone(zone),
    })
}

/// Weekly percentages in document order; insertion order is chronological.
pub fn weekly_series(stats: &DirectionStats) -> &[WeeklyPoint] {
    &stats.weekly_data
}

/// The 2x4 zone x time-slot grid of average delay minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatMatrix {
    cells: [[f64; 4]; 2],
}

impl HeatMatrix {
    pub fn build(stats: &DirectionStats) -> Self {
        let mut cells = [[0.0; 4]; 2];
        for (zi, zone) in Zone::ALL.iter().enumerate() {
            let minutes = stats.heatmap.zone(*zone);
            for (si, slot) in TimeSlot::ALL.iter().enumerate() {
                cells[zi][si] = minutes.slot(*slot).unwrap_or(0.0);
            }
        }
        HeatMatrix { cells }
    }

    pub fn get(&self, zone: Zone, slot: TimeSlot) -> f64 {
        let zi = match zone {
            Zone::Schengen => 0,
            Zone::External => 1,
        };
        let si = match slot {
            TimeSlot::Early => 0,
            TimeSlot::Morning => 1,
            TimeSlot::Afternoon => 2,
            TimeSlot::Evening => 3,
        };
        self.cells[zi][si]
    }
}

pub fn heat_matrix(stats: &DirectionStats) -> HeatMatrix {
    HeatMatrix::build(stats)
}

/// Background and text color for one heat-map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fill: &'static str,
    pub text: &'static str,
}

/// Four-bucket step function over average delay minutes.
pub fn bucket_for_delay(minutes: f64) -> DelayBucket {
    if minutes <= 5.0 {
        DelayBucket::OnTime
    } else if minutes <= 30.0 {
        DelayBucket::Minor
    } else if minutes <= 60.0 {
        DelayBucket::Medium
    } else {
        DelayBucket::Major
    }
}

/// Colors for a heat-map cell: the bucket's fill, with the text flipping to
/// the light variant above 30 minutes where the fills get dark.
pub fn classify_delay(minutes: f64) -> CellStyle {
    let bucket = bucket_for_delay(minutes);
    CellStyle {
        fill: bucket.fill(),
        text: bucket.text(),
    }
}

/// Everything one render of the dashboard needs, derived once from the
/// selected direction's stats.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub flights_per_day: i64,
    pub days_tracked: i64,
    pub average_delay: f64,
    pub delays: DelayCounts,
    pub time_of_day: Vec<SeriesRow>,
    pub schengen: [SeriesRow; 2],
    pub heat: HeatMatrix,
    pub weekly: Vec<SeriesRow>,
}

impl ViewModel {
    pub fn build(stats: &DirectionStats) -> Self {
        ViewModel {
            flights_per_day: stats.flights_per_day,
            days_tracked: stats.days_tracked,
            average_delay: stats.average_delay,
            delays: stats.delays,
            time_of_day: time_of_day_series(stats),
            schengen: schengen_series(stats),
            heat: heat_matrix(stats),
            weekly: weekly_series(stats)
                .iter()
                .map(|p| SeriesRow {
                    label: p.week.clone(),
                    values: p.buckets(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> DirectionStats {
        serde_json::from_value(serde_json::json!({
            "flightsPerDay": 128,
            "daysTracked": 30,
            "averageDelay": 18.0,
            "delays": {"onTime": 80, "minor": 12, "medium": 5, "major": 3},
            "timeOfDay": {
                "early": {"onTime": 70, "minor": 20, "medium": 7, "major": 3},
                "morning": {"onTime": 75, "minor": 15, "medium": 7, "major": 3},
                "afternoon": {"onTime": 68, "minor": 22, "medium": 7, "major": 3},
                "evening": {"onTime": 60, "minor": 25, "medium": 10, "major": 5}
            },
            "schengen": {
                "schengen": {"onTime": 85, "minor": 10, "medium": 3, "major": 2},
                "nonSchengen": {"onTime": 75, "minor": 15, "medium": 7, "major": 3}
            },
            "heatmap": {
                "schengen": {"early": 4, "morning": 12, "afternoon": 22, "evening": 35},
                "nonSchengen": {"early": 10, "morning": 18, "afternoon": 40}
            },
            "weeklyData": [
                {"week": "W1", "onTime": 82, "minor": 11, "medium": 5, "major": 2},
                {"week": "W2", "onTime": 70, "minor": 18, "medium": 8, "major": 4}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn time_of_day_rows_are_ordered_and_preserved() {
        let rows = time_of_day_series(&sample_stats());
        assert_eq!(rows.len(), 4);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Early", "Morning", "Afternoon", "Evening"]);
        assert_eq!(rows[0].values.on_time, 70.0);
        assert_eq!(rows[0].values.minor, 20.0);
        assert_eq!(rows[3].values.major, 5.0);
    }

    #[test]
    fn missing_time_slot_zero_fills() {
        let mut stats = sample_stats();
        stats.time_of_day.afternoon = None;
        let rows = time_of_day_series(&stats);
        assert_eq!(rows[2].label, "Afternoon");
        assert_eq!(rows[2].values, DelayCounts::default());
        // neighbors untouched
        assert_eq!(rows[1].values.on_time, 75.0);
    }

    #[test]
    fn schengen_rows_fixed_order() {
        let rows = schengen_series(&sample_stats());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Schengen");
        assert_eq!(rows[1].label, "External");
        assert_eq!(rows[0].values.on_time, 85.0);
        assert_eq!(rows[1].values.on_time, 75.0);
    }

    #[test]
    fn heat_matrix_zero_fills_missing_cell() {
        let matrix = heat_matrix(&sample_stats());
        assert_eq!(matrix.get(Zone::External, TimeSlot::Evening), 0.0);
        assert_eq!(matrix.get(Zone::Schengen, TimeSlot::Early), 4.0);
        assert_eq!(matrix.get(Zone::Schengen, TimeSlot::Evening), 35.0);
        assert_eq!(matrix.get(Zone::External, TimeSlot::Afternoon), 40.0);
    }

    #[test]
    fn wire_keys_are_stable() {
        let slot_keys: Vec<&str> = TimeSlot::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(slot_keys, ["early", "morning", "afternoon", "evening"]);
        assert_eq!(Zone::Schengen.key(), "schengen");
        assert_eq!(Zone::External.key(), "nonSchengen");
    }

    #[test]
    fn classify_delay_thresholds() {
        assert_eq!(classify_delay(5.0).fill, ON_TIME_FILL);
        assert_eq!(classify_delay(6.0).fill, MINOR_FILL);
        assert_eq!(classify_delay(30.0).fill, MINOR_FILL);
        assert_eq!(classify_delay(31.0).fill, MEDIUM_FILL);
        assert_eq!(classify_delay(60.0).fill, MEDIUM_FILL);
        assert_eq!(classify_delay(61.0).fill, MAJOR_FILL);
    }

    #[test]
    fn classify_delay_text_flips_above_thirty() {
        assert_eq!(classify_delay(30.0).text, "#1F2937");
        assert_eq!(classify_delay(31.0).text, "#FFFFFF");
    }

    #[test]
    fn cell_style_comes_from_bucket_colors() {
        let cases = [
            (3.0, DelayBucket::OnTime),
            (20.0, DelayBucket::Minor),
            (45.0, DelayBucket::Medium),
            (90.0, DelayBucket::Major),
        ];
        for (minutes, bucket) in cases {
            assert_eq!(bucket_for_delay(minutes), bucket);
            let style = classify_delay(minutes);
            assert_eq!(style.fill, bucket.fill());
            assert_eq!(style.text, bucket.text());
        }
    }

    #[test]
    fn weekly_series_passes_through_in_order() {
        let stats = sample_stats();
        let weeks = weekly_series(&stats);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week, "W1");
        assert_eq!(weeks[1].week, "W2");
        assert_eq!(weeks[1].minor, 18.0);
    }

    #[test]
    fn end_to_end_departures_view_model() {
        let doc: StatisticsDocument = serde_json::from_value(serde_json::json!({
            "departures": {
                "delays": {"onTime": 80, "minor": 12, "medium": 5, "major": 3},
                "timeOfDay": {
                    "early": {"onTime": 70, "minor": 20, "medium": 7, "major": 3}
                },
                "schengen": {
                    "schengen": {"onTime": 85, "minor": 10, "medium": 3, "major": 2},
                    "nonSchengen": {"onTime": 75, "minor": 15, "medium": 7, "major": 3}
                },
                "heatmap": {
                    "schengen": {"early": 4},
                    "nonSchengen": {"early": 10}
                },
                "weeklyData": [
                    {"week": "W1", "onTime": 82, "minor": 11, "medium": 5, "major": 2}
                ]
            }
        }))
        .unwrap();
        let vm = ViewModel::build(select_direction(&doc, Direction::Departures));
        assert_eq!(vm.delays.on_time, 80.0);
        assert_eq!(vm.heat.get(Zone::Schengen, TimeSlot::Early), 4.0);
        assert_eq!(vm.heat.get(Zone::External, TimeSlot::Early), 10.0);
        assert_eq!(vm.weekly.len(), 1);
        assert_eq!(vm.weekly[0].label, "W1");
        assert_eq!(vm.time_of_day.len(), 4);
        // slots absent from the document come back zeroed
        assert_eq!(vm.time_of_day[1].values, DelayCounts::default());
    }
}
