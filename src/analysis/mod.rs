// Analysis module - per-topic aggregation of the accident table
//
// Each topic maps to one pure function over the shared Dataset. The match
// in `aggregate` is exhaustive over `Topic`, so every menu entry is
// guaranteed a handler.
//
// Results are plain data (serde-serializable) and carry no rendering state;
// the TUI and the headless report both consume them.

pub mod counts;
pub mod crosstab;
pub mod hierarchy;
pub mod hourly;

pub use counts::ValueCount;
pub use crosstab::CrossTab;
pub use hierarchy::Hierarchy;
pub use hourly::{HeatMatrix, HourlyCounts};

use crate::dataset::{columns, Dataset};
use crate::topic::Topic;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while producing a topic's aggregation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("the dataset has no records to summarize")]
    EmptyDataset,
}

/// Headline numbers and breakdowns for the overall view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallSummary {
    pub total_records: usize,
    /// Most frequent weather label (sentinel included)
    pub top_weather: String,
    /// Most frequent hour of day
    pub peak_hour: u8,
    pub severity: Vec<ValueCount>,
    pub weekly: Vec<ValueCount>,
}

/// Chart-ready output of one topic
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "topic", rename_all = "kebab-case")]
pub enum Aggregation {
    Overall(OverallSummary),
    DrunkDriver(CrossTab),
    Weather(CrossTab),
    Roads(Hierarchy),
    WeeklyHours(HeatMatrix),
    PeakHours(HourlyCounts),
}

impl Aggregation {
    /// Topic that produced this aggregation
    pub fn topic(&self) -> Topic {
        match self {
            Aggregation::Overall(_) => Topic::OverallAnalysis,
            Aggregation::DrunkDriver(_) => Topic::DrunkDriverAnalysis,
            Aggregation::Weather(_) => Topic::WeatherAnalysis,
            Aggregation::Roads(_) => Topic::RoadsAnalysis,
            Aggregation::WeeklyHours(_) => Topic::WeeklyHoursAnalysis,
            Aggregation::PeakHours(_) => Topic::PeakHoursAnalysis,
        }
    }
}

/// Compute the aggregation for `topic`
pub fn aggregate(topic: Topic, dataset: &Dataset) -> Result<Aggregation, AnalysisError> {
    let aggregation = match topic {
        Topic::OverallAnalysis => Aggregation::Overall(overall(dataset)?),
        Topic::DrunkDriverAnalysis => Aggregation::DrunkDriver(fitness_by_severity(dataset)),
        Topic::WeatherAnalysis => Aggregation::Weather(weather_by_severity(dataset)),
        Topic::RoadsAnalysis => Aggregation::Roads(road_light_hierarchy(dataset)),
        Topic::WeeklyHoursAnalysis => Aggregation::WeeklyHours(weekly_hours(dataset)),
        Topic::PeakHoursAnalysis => Aggregation::PeakHours(peak_hours(dataset)),
    };
    tracing::debug!("Aggregated {} over {} rows", topic.slug(), dataset.len());
    Ok(aggregation)
}

/// Totals, modes and breakdowns for the overall view
pub fn overall(dataset: &Dataset) -> Result<OverallSummary, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    let records = dataset.records();

    let top_weather = counts::mode(records.iter().map(|r| r.weather_conditions.as_str()))
        .ok_or(AnalysisError::EmptyDataset)?;
    let peak_hour =
        counts::mode(records.iter().map(|r| r.hour)).ok_or(AnalysisError::EmptyDataset)?;

    Ok(OverallSummary {
        total_records: records.len(),
        top_weather: top_weather.to_string(),
        peak_hour,
        severity: counts::value_counts(
            records.iter().filter_map(|r| r.accident_severity.as_deref()),
        ),
        weekly: counts::value_counts(records.iter().filter_map(|r| r.day_of_week.as_deref())),
    })
}

pub fn fitness_by_severity(dataset: &Dataset) -> CrossTab {
    CrossTab::build(
        columns::FITNESS_OF_CASUALITY,
        columns::ACCIDENT_SEVERITY,
        dataset.records().iter().map(|r| {
            (
                r.fitness_of_casuality.as_str(),
                r.accident_severity.as_deref(),
            )
        }),
    )
}

pub fn weather_by_severity(dataset: &Dataset) -> CrossTab {
    CrossTab::build(
        columns::WEATHER_CONDITIONS,
        columns::ACCIDENT_SEVERITY,
        dataset
            .records()
            .iter()
            .map(|r| (r.weather_conditions.as_str(), r.accident_severity.as_deref())),
    )
}

pub fn road_light_hierarchy(dataset: &Dataset) -> Hierarchy {
    Hierarchy::build(
        dataset
            .records()
            .iter()
            .map(|r| (r.road_surface_type.as_str(), r.light_conditions.as_str())),
    )
}

pub fn weekly_hours(dataset: &Dataset) -> HeatMatrix {
    HeatMatrix::build(
        dataset
            .records()
            .iter()
            .map(|r| (r.hour, r.day_of_week.as_deref())),
    )
}

pub fn peak_hours(dataset: &Dataset) -> HourlyCounts {
    HourlyCounts::build(dataset.records().iter().map(|r| r.hour))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::dataset_from;
    use crate::dataset::NOT_SPECIFIED;

    fn five_rows() -> Dataset {
        dataset_from(&[
            "17:02:00,Monday,Asphalt roads,Daylight,Raining,Normal,Slight Injury",
            "17:40:00,Monday,Asphalt roads,Daylight,Raining,Drunk,Serious Injury",
            "08:15:00,Sunday,Asphalt roads,Darkness - lights lit,Raining,Normal,Slight Injury",
            "23:00:00,Friday,Asphalt roads,Daylight,,Normal,Fatal injury",
            "17:05:00,Friday,Asphalt roads,,,Drunk,Slight Injury",
        ])
    }

    #[test]
    fn overall_reflects_populated_weather() {
        let ds = five_rows();
        let blanks = ds
            .records()
            .iter()
            .filter(|r| r.weather_conditions == NOT_SPECIFIED)
            .count();
        assert_eq!(blanks, 2);

        let summary = overall(&ds).unwrap();
        assert_eq!(summary.total_records, 5);
        assert_eq!(summary.top_weather, "Raining");
        assert_eq!(summary.peak_hour, 17);
    }

    #[test]
    fn overall_breakdowns() {
        let summary = overall(&five_rows()).unwrap();

        assert_eq!(summary.severity[0].value, "Slight Injury");
        assert_eq!(summary.severity[0].count, 3);
        assert_eq!(summary.severity.iter().map(|c| c.count).sum::<usize>(), 5);

        let days: Vec<(&str, usize)> = summary
            .weekly
            .iter()
            .map(|c| (c.value.as_str(), c.count))
            .collect();
        assert_eq!(days, vec![("Monday", 2), ("Friday", 2), ("Sunday", 1)]);
    }

    #[test]
    fn overall_weather_tie_uses_sorted_order() {
        let ds = dataset_from(&[
            "10:00:00,Monday,a,b,Snow,d,e",
            "11:00:00,Monday,a,b,Fog,d,e",
        ]);
        let summary = overall(&ds).unwrap();
        assert_eq!(summary.top_weather, "Fog");
        assert_eq!(summary.peak_hour, 10);
    }

    #[test]
    fn overall_on_empty_dataset_errors() {
        assert_eq!(overall(&Dataset::default()), Err(AnalysisError::EmptyDataset));
        assert_eq!(
            aggregate(Topic::OverallAnalysis, &Dataset::default()),
            Err(AnalysisError::EmptyDataset)
        );
    }

    #[test]
    fn other_topics_tolerate_empty_dataset() {
        let empty = Dataset::default();
        for topic in Topic::ALL.into_iter().skip(1) {
            assert!(aggregate(topic, &empty).is_ok(), "{topic} failed");
        }
    }

    #[test]
    fn aggregation_matches_requested_topic() {
        let ds = five_rows();
        for topic in Topic::ALL {
            assert_eq!(aggregate(topic, &ds).unwrap().topic(), topic);
        }
    }

    #[test]
    fn drunk_driver_crosstab() {
        let tab = fitness_by_severity(&five_rows());
        assert_eq!(tab.rows, vec!["Normal", "Drunk"]);
        assert_eq!(
            tab.columns,
            vec!["Slight Injury", "Serious Injury", "Fatal injury"]
        );
        assert_eq!(tab.counts, vec![vec![2, 0, 1], vec![1, 1, 0]]);
        assert_eq!(tab.total(), 5);
    }

    #[test]
    fn weather_crosstab_includes_sentinel() {
        let tab = weather_by_severity(&five_rows());
        assert_eq!(tab.rows, vec!["Raining", NOT_SPECIFIED]);
        assert_eq!(tab.row_total(1), 2);
    }

    #[test]
    fn roads_single_surface_sums_to_total() {
        let ds = five_rows();
        let tree = road_light_hierarchy(&ds);

        assert_eq!(tree.branches.len(), 1);
        assert_eq!(tree.branches[0].label, "Asphalt roads");
        let leaf_sum: usize = tree.branches[0].leaves.iter().map(|l| l.count).sum();
        assert_eq!(leaf_sum, ds.len());
        assert!(tree.branches[0]
            .leaves
            .iter()
            .any(|l| l.label == NOT_SPECIFIED));
    }

    #[test]
    fn weekly_hours_matrix() {
        let matrix = weekly_hours(&five_rows());
        assert_eq!(matrix.days, vec!["Monday", "Friday", "Sunday"]);
        assert_eq!(matrix.get(0, 17), 2);
        assert_eq!(matrix.get(1, 17), 1);
        assert_eq!(matrix.get(1, 23), 1);
        assert_eq!(matrix.get(2, 8), 1);
        assert_eq!(matrix.total(), 5);
    }

    #[test]
    fn peak_hours_sum_to_row_count() {
        let ds = five_rows();
        let hourly = peak_hours(&ds);
        assert_eq!(hourly.buckets.len(), 24);
        assert_eq!(hourly.total(), ds.len());
        assert_eq!(hourly.buckets[17].accidents, 3);
        assert_eq!(hourly.buckets[12].accidents, 0);
    }

    #[test]
    fn aggregation_serializes_with_topic_tag() {
        let agg = aggregate(Topic::PeakHoursAnalysis, &five_rows()).unwrap();
        let json = serde_json::to_value(&agg).unwrap();
        assert_eq!(json["topic"], "peak-hours");
        assert_eq!(json["buckets"].as_array().unwrap().len(), 24);
    }
}
