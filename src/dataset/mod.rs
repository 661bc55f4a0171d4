// Dataset module - loading and normalizing the accident table
//
// The whole table is read once at startup, every `Time` value is parsed,
// the hour of day is derived, and the four categorical columns the charts
// group by get a sentinel instead of blanks. After that the Dataset is
// read-only and shared with every aggregation.

mod cache;
mod time;

pub use cache::DatasetCache;
pub use time::Timestamp;

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder for missing categorical values
pub const NOT_SPECIFIED: &str = "Not Specified";

/// Cell values treated as missing
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Column names the loader requires
pub mod columns {
    pub const TIME: &str = "Time";
    pub const DAY_OF_WEEK: &str = "Day_of_week";
    pub const ROAD_SURFACE_TYPE: &str = "Road_surface_type";
    pub const LIGHT_CONDITIONS: &str = "Light_conditions";
    pub const WEATHER_CONDITIONS: &str = "Weather_conditions";
    pub const FITNESS_OF_CASUALITY: &str = "Fitness_of_casuality";
    pub const ACCIDENT_SEVERITY: &str = "Accident_severity";
}

/// Errors that can occur while loading the dataset
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column `{0}` is missing")]
    MissingColumn(&'static str),

    #[error("line {line}: cannot parse time value {value:?}")]
    InvalidTime { line: u64, value: String },
}

/// One row of the accident table after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccidentRecord {
    pub time: Timestamp,
    /// Hour of day derived from `time`, 0..=23
    pub hour: u8,
    pub day_of_week: Option<String>,
    pub road_surface_type: String,
    pub light_conditions: String,
    pub weather_conditions: String,
    pub fitness_of_casuality: String,
    pub accident_severity: Option<String>,
}

/// The normalized accident table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<AccidentRecord>,
}

/// Positions of the required columns in the header row
struct ColumnIndex {
    time: usize,
    day_of_week: usize,
    road_surface_type: usize,
    light_conditions: usize,
    weather_conditions: usize,
    fitness_of_casuality: usize,
    accident_severity: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DataLoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DataLoadError::MissingColumn(name))
        };

        Ok(Self {
            time: find(columns::TIME)?,
            day_of_week: find(columns::DAY_OF_WEEK)?,
            road_surface_type: find(columns::ROAD_SURFACE_TYPE)?,
            light_conditions: find(columns::LIGHT_CONDITIONS)?,
            weather_conditions: find(columns::WEATHER_CONDITIONS)?,
            fitness_of_casuality: find(columns::FITNESS_OF_CASUALITY)?,
            accident_severity: find(columns::ACCIDENT_SEVERITY)?,
        })
    }
}

impl Dataset {
    /// Load and normalize the table at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                DataLoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DataLoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let dataset = Self::from_reader(file)?;
        tracing::info!(
            "Loaded {} accident records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse and normalize a CSV table from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        // Short rows are padded with missing cells rather than rejected
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let index = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        for result in rdr.records() {
            let row = result?;
            records.push(Self::normalize_row(&row, &index)?);
        }

        tracing::debug!("Parsed {} rows", records.len());
        Ok(Self { records })
    }

    fn normalize_row(
        row: &csv::StringRecord,
        index: &ColumnIndex,
    ) -> Result<AccidentRecord, DataLoadError> {
        let cell = |i: usize| row.get(i).unwrap_or("");

        let raw_time = cell(index.time);
        let time = Timestamp::parse(raw_time).ok_or_else(|| DataLoadError::InvalidTime {
            line: row.position().map(|p| p.line()).unwrap_or(0),
            value: raw_time.to_string(),
        })?;

        Ok(AccidentRecord {
            hour: time.hour(),
            time,
            day_of_week: optional(cell(index.day_of_week)),
            road_surface_type: or_not_specified(cell(index.road_surface_type)),
            light_conditions: or_not_specified(cell(index.light_conditions)),
            weather_conditions: or_not_specified(cell(index.weather_conditions)),
            fitness_of_casuality: or_not_specified(cell(index.fitness_of_casuality)),
            accident_severity: optional(cell(index.accident_severity)),
        })
    }

    /// All records, in file order
    pub fn records(&self) -> &[AccidentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<AccidentRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = AccidentRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

fn is_missing(value: &str) -> bool {
    MISSING_MARKERS.contains(&value)
}

fn optional(value: &str) -> Option<String> {
    (!is_missing(value)).then(|| value.to_string())
}

fn or_not_specified(value: &str) -> String {
    optional(value).unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const HEADER: &str = "Time,Day_of_week,Road_surface_type,Light_conditions,Weather_conditions,Fitness_of_casuality,Accident_severity\n";

    /// Build a Dataset from CSV body lines (header is prepended)
    pub(crate) fn dataset_from(rows: &[&str]) -> Dataset {
        let mut csv = HEADER.to_string();
        for row in rows {
            csv.push_str(row);
            csv.push('\n');
        }
        Dataset::from_reader(csv.as_bytes()).expect("fixture should parse")
    }

    #[test]
    fn test_empty_categoricals_become_sentinel() {
        let ds = dataset_from(&[
            "17:02:00,Monday,Asphalt roads,Daylight,Normal,Normal,Slight Injury",
            "17:02:00,Monday,Asphalt roads,Daylight,Normal,Normal,Slight Injury",
            "17:02:00,Monday,Asphalt roads,Daylight,Normal,Normal,Slight Injury",
            "01:06:00,Sunday,,,,,Serious Injury",
            "01:06:00,Sunday,,,,,Serious Injury",
        ]);

        assert_eq!(ds.len(), 5);
        for rec in &ds.records()[3..] {
            assert_eq!(rec.weather_conditions, NOT_SPECIFIED);
            assert_eq!(rec.road_surface_type, NOT_SPECIFIED);
            assert_eq!(rec.light_conditions, NOT_SPECIFIED);
            assert_eq!(rec.fitness_of_casuality, NOT_SPECIFIED);
        }
        for rec in &ds.records()[..3] {
            assert_eq!(rec.weather_conditions, "Normal");
            assert_eq!(rec.road_surface_type, "Asphalt roads");
        }
    }

    #[test]
    fn test_na_tokens_count_as_missing() {
        let ds = dataset_from(&[
            "10:00:00,NA,NaN,null,N/A,None,Fatal injury",
            "10:00:00,Friday,n/a,<NA>,#N/A,nan,NULL",
        ]);

        let first = &ds.records()[0];
        assert_eq!(first.day_of_week, None);
        assert_eq!(first.road_surface_type, NOT_SPECIFIED);
        assert_eq!(first.light_conditions, NOT_SPECIFIED);
        assert_eq!(first.weather_conditions, NOT_SPECIFIED);
        assert_eq!(first.fitness_of_casuality, NOT_SPECIFIED);
        assert_eq!(first.accident_severity.as_deref(), Some("Fatal injury"));

        let second = &ds.records()[1];
        assert_eq!(second.day_of_week.as_deref(), Some("Friday"));
        assert_eq!(second.accident_severity, None);
    }

    #[test]
    fn test_other_values_untouched() {
        let ds = dataset_from(&["23:10:00, Monday ,Gravel roads,Darkness - no lighting,Raining, Drunk,Slight Injury"]);
        let rec = &ds.records()[0];

        // Whitespace is data, not missing
        assert_eq!(rec.day_of_week.as_deref(), Some(" Monday "));
        assert_eq!(rec.fitness_of_casuality, " Drunk");
        assert_eq!(rec.light_conditions, "Darkness - no lighting");
    }

    #[test]
    fn test_hour_matches_timestamp() {
        let ds = dataset_from(&[
            "00:00:00,Monday,a,b,c,d,e",
            "9:15:00,Monday,a,b,c,d,e",
            "2021-03-04 23:59:00,Monday,a,b,c,d,e",
        ]);

        let hours: Vec<u8> = ds.records().iter().map(|r| r.hour).collect();
        assert_eq!(hours, vec![0, 9, 23]);
        for rec in ds.records() {
            assert_eq!(rec.hour, rec.time.hour());
            assert!(rec.hour <= 23);
        }
    }

    #[test]
    fn test_malformed_time_fails() {
        let csv = format!("{HEADER}17:02:00,Monday,a,b,c,d,e\nlate evening,Monday,a,b,c,d,e\n");
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        match err {
            DataLoadError::InvalidTime { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "late evening");
            }
            other => panic!("expected InvalidTime, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_time_fails() {
        let csv = format!("{HEADER},Monday,a,b,c,d,e\n");
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(DataLoadError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_missing_column_fails() {
        let csv = "Time,Day_of_week,Road_surface_type,Light_conditions,Fitness_of_casuality,Accident_severity\n17:00:00,Monday,a,b,d,e\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn(columns::WEATHER_CONDITIONS)
        ));
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let csv = "Accident_severity,Casualties,Weather_conditions,Time,Light_conditions,Day_of_week,Fitness_of_casuality,Road_surface_type\n\
                   Slight Injury,2,Normal,08:30:00,Daylight,Tuesday,Normal,Asphalt roads\n";
        let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
        let rec = &ds.records()[0];

        assert_eq!(rec.hour, 8);
        assert_eq!(rec.day_of_week.as_deref(), Some("Tuesday"));
        assert_eq!(rec.road_surface_type, "Asphalt roads");
        assert_eq!(rec.accident_severity.as_deref(), Some("Slight Injury"));
    }

    #[test]
    fn test_short_row_fills_missing_cells() {
        let ds = dataset_from(&[
            "17:02:00,Monday,Asphalt roads,Daylight",
            "08:00:00,Friday,Gravel roads,Daylight,Normal,Normal,Slight Injury",
        ]);

        assert_eq!(ds.len(), 2);
        let short = &ds.records()[0];
        assert_eq!(short.hour, 17);
        assert_eq!(short.day_of_week.as_deref(), Some("Monday"));
        assert_eq!(short.road_surface_type, "Asphalt roads");
        assert_eq!(short.weather_conditions, NOT_SPECIFIED);
        assert_eq!(short.fitness_of_casuality, NOT_SPECIFIED);
        assert_eq!(short.accident_severity, None);
    }

    #[test]
    fn test_row_too_short_for_time_fails() {
        let csv = "Day_of_week,Road_surface_type,Light_conditions,Weather_conditions,Fitness_of_casuality,Accident_severity,Time\nMonday,a,b\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(DataLoadError::InvalidTime { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load("definitely/not/here/traffic_accidents.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound { .. }));
    }

    #[test]
    fn test_load_is_deterministic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            format!("{HEADER}17:02:00,Monday,Asphalt roads,Daylight,,Normal,Slight Injury\n06:00:00,,,Darkness,Raining,Drunk,Fatal injury\n")
                .as_bytes(),
        )
        .unwrap();

        let first = Dataset::load(file.path()).unwrap();
        let second = Dataset::load(file.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let ds = Dataset::from_reader(HEADER.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }
}
