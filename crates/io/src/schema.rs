//! Table schema: column layout and row conversions.

use chrono::{NaiveDate, NaiveTime};
use selene_events::{DailyLunarRecord, EclipseEvent, EclipseKind, Phase, Visibility};

use crate::error::TableError;

/// Column names, in table order.
pub const COLUMNS: [&str; 11] = [
    "Date",
    "Phase",
    "Illumination_%",
    "Moon_Rise",
    "Moon_Set",
    "Up_All_Day",
    "Down_All_Day",
    "Eclipse_Type",
    "Eclipse_Depth_%",
    "Eclipse_Time",
    "Supermoon",
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

fn fmt_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn fmt_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Encodes a record as one table row, in column order.
pub(crate) fn record_to_row(record: &DailyLunarRecord) -> [String; 11] {
    let (eclipse_type, eclipse_depth, eclipse_time) = match record.eclipse() {
        Some(event) => (
            event.kind.name().to_string(),
            format!("{:.1}", event.depth_pct),
            event.instant.format(TIME_FORMAT).to_string(),
        ),
        None => ("None".to_string(), String::new(), String::new()),
    };

    [
        record.date().format(DATE_FORMAT).to_string(),
        record.phase().name().to_string(),
        format!("{:.1}", record.illumination_pct()),
        fmt_time(record.moonrise()),
        fmt_time(record.moonset()),
        fmt_bool(record.up_all_day()).to_string(),
        fmt_bool(record.down_all_day()).to_string(),
        eclipse_type,
        eclipse_depth,
        eclipse_time,
        fmt_bool(record.supermoon()).to_string(),
    ]
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn invalid_row(line: usize, reason: String) -> TableError {
    TableError::InvalidRow { line, reason }
}

fn parse_date(line: usize, field: &str) -> Result<NaiveDate, TableError> {
    NaiveDate::parse_from_str(field, DATE_FORMAT)
        .map_err(|e| invalid_row(line, format!("invalid date {field:?}: {e}")))
}

fn parse_time(line: usize, column: &str, field: &str) -> Result<NaiveTime, TableError> {
    NaiveTime::parse_from_str(field, TIME_FORMAT)
        .map_err(|e| invalid_row(line, format!("invalid {column} time {field:?}: {e}")))
}

fn parse_time_opt(
    line: usize,
    column: &str,
    field: &str,
) -> Result<Option<NaiveTime>, TableError> {
    if field.is_empty() {
        Ok(None)
    } else {
        parse_time(line, column, field).map(Some)
    }
}

fn parse_bool(line: usize, column: &str, field: &str) -> Result<bool, TableError> {
    match field {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(invalid_row(
            line,
            format!("invalid {column} flag {other:?}: expected True or False"),
        )),
    }
}

fn parse_pct(line: usize, column: &str, field: &str) -> Result<f64, TableError> {
    field
        .parse::<f64>()
        .map_err(|e| invalid_row(line, format!("invalid {column} value {field:?}: {e}")))
}

/// Decodes one table row back into a record, re-validating every
/// data-model invariant through the record constructor.
pub(crate) fn row_to_record(
    line: usize,
    row: &csv::StringRecord,
) -> Result<DailyLunarRecord, TableError> {
    if row.len() != COLUMNS.len() {
        return Err(invalid_row(
            line,
            format!("expected {} columns, got {}", COLUMNS.len(), row.len()),
        ));
    }

    let date = parse_date(line, &row[0])?;
    let phase = Phase::from_name(&row[1]).map_err(|e| invalid_row(line, e.to_string()))?;
    let illumination = parse_pct(line, "Illumination_%", &row[2])?;
    let rise = parse_time_opt(line, "Moon_Rise", &row[3])?;
    let set = parse_time_opt(line, "Moon_Set", &row[4])?;
    let up_all_day = parse_bool(line, "Up_All_Day", &row[5])?;
    let down_all_day = parse_bool(line, "Down_All_Day", &row[6])?;

    let eclipse = match &row[7] {
        "None" => {
            if !row[8].is_empty() || !row[9].is_empty() {
                return Err(invalid_row(
                    line,
                    "eclipse depth/time present without an eclipse type".to_string(),
                ));
            }
            None
        }
        kind_name => {
            let kind =
                EclipseKind::from_name(kind_name).map_err(|e| invalid_row(line, e.to_string()))?;
            if row[8].is_empty() || row[9].is_empty() {
                return Err(invalid_row(
                    line,
                    "eclipse fields must be present together".to_string(),
                ));
            }
            let depth_pct = parse_pct(line, "Eclipse_Depth_%", &row[8])?;
            let instant = parse_time(line, "Eclipse_Time", &row[9])?;
            Some(EclipseEvent {
                kind,
                depth_pct,
                instant,
            })
        }
    };

    let visibility = match (up_all_day, down_all_day) {
        (true, true) => {
            return Err(invalid_row(line, "both all-day flags set".to_string()));
        }
        (true, false) | (false, true) if rise.is_some() || set.is_some() => {
            return Err(invalid_row(
                line,
                "rise/set recorded alongside an all-day flag".to_string(),
            ));
        }
        (true, false) => Visibility::UpAllDay,
        (false, true) => Visibility::DownAllDay,
        (false, false) => Visibility::Crossings { rise, set },
    };

    let supermoon = parse_bool(line, "Supermoon", &row[10])?;

    DailyLunarRecord::new(date, phase, illumination, visibility, eclipse, supermoon)
        .map_err(|e| invalid_row(line, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DailyLunarRecord {
        DailyLunarRecord::new(
            NaiveDate::from_ymd_opt(2024, 9, 18).unwrap(),
            Phase::Full,
            99.9,
            Visibility::Crossings {
                rise: Some(NaiveTime::from_hms_opt(18, 4, 12).unwrap()),
                set: Some(NaiveTime::from_hms_opt(5, 31, 40).unwrap()),
            },
            Some(EclipseEvent {
                kind: EclipseKind::Partial,
                depth_pct: 8.5,
                instant: NaiveTime::from_hms_opt(2, 44, 0).unwrap(),
            }),
            true,
        )
        .unwrap()
    }

    fn to_string_record(row: [String; 11]) -> csv::StringRecord {
        csv::StringRecord::from(row.to_vec())
    }

    #[test]
    fn encode_eclipse_row() {
        let row = record_to_row(&sample_record());
        assert_eq!(
            row,
            [
                "2024-09-18",
                "Full Moon",
                "99.9",
                "18:04:12",
                "05:31:40",
                "False",
                "False",
                "Partial",
                "8.5",
                "02:44:00",
                "True",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn encode_quiet_row_leaves_eclipse_cells_empty() {
        let record = DailyLunarRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            Phase::LastQuarter,
            48.0,
            Visibility::DownAllDay,
            None,
            false,
        )
        .unwrap();
        let row = record_to_row(&record);
        assert_eq!(row[3], "");
        assert_eq!(row[4], "");
        assert_eq!(row[6], "True");
        assert_eq!(row[7], "None");
        assert_eq!(row[8], "");
        assert_eq!(row[9], "");
    }

    #[test]
    fn decode_round_trips_encoded_row() {
        let record = sample_record();
        let row = to_string_record(record_to_row(&record));
        let decoded = row_to_record(2, &row).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn decode_rejects_bad_date() {
        let mut row = record_to_row(&sample_record());
        row[0] = "2024-13-01".to_string();
        let err = row_to_record(2, &to_string_record(row)).unwrap_err();
        assert!(matches!(err, TableError::InvalidRow { line: 2, .. }));
    }

    #[test]
    fn decode_rejects_both_all_day_flags() {
        let record = DailyLunarRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            Phase::New,
            1.0,
            Visibility::UpAllDay,
            None,
            false,
        )
        .unwrap();
        let mut row = record_to_row(&record);
        row[6] = "True".to_string();
        let err = row_to_record(3, &to_string_record(row)).unwrap_err();
        assert!(err.to_string().contains("both all-day flags"));
    }

    #[test]
    fn decode_rejects_times_alongside_flag() {
        let mut row = record_to_row(&sample_record());
        row[5] = "True".to_string();
        let err = row_to_record(4, &to_string_record(row)).unwrap_err();
        assert!(err.to_string().contains("all-day flag"));
    }

    #[test]
    fn decode_rejects_lone_eclipse_depth() {
        let mut row = record_to_row(&sample_record());
        row[9] = String::new();
        let err = row_to_record(5, &to_string_record(row)).unwrap_err();
        assert!(err.to_string().contains("together"));
    }

    #[test]
    fn decode_rejects_depth_without_type() {
        let mut row = record_to_row(&sample_record());
        row[7] = "None".to_string();
        let err = row_to_record(6, &to_string_record(row)).unwrap_err();
        assert!(err.to_string().contains("without an eclipse type"));
    }

    #[test]
    fn decode_rejects_short_row() {
        let row = csv::StringRecord::from(vec!["2024-01-01", "Full Moon"]);
        let err = row_to_record(7, &row).unwrap_err();
        assert!(err.to_string().contains("expected 11 columns"));
    }
}
