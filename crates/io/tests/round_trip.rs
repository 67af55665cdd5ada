//! Integration tests: round-trip daily lunar records through CSV read/write.

use chrono::{NaiveDate, NaiveTime};
use selene_events::{DailyLunarRecord, EclipseEvent, EclipseKind, Phase, Visibility};
use selene_io::{COLUMNS, LunarDataset, TableError, read_table, write_table};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

/// Helper: five consecutive days exercising every row shape. Percentages
/// use one decimal so the text form re-parses to the identical `f64`.
fn sample_records() -> Vec<DailyLunarRecord> {
    vec![
        DailyLunarRecord::new(
            date(2024, 9, 16),
            Phase::WaxingGibbous,
            97.4,
            Visibility::Crossings {
                rise: Some(time(17, 2, 55)),
                set: Some(time(3, 18, 7)),
            },
            None,
            false,
        )
        .expect("fixture is valid"),
        DailyLunarRecord::new(
            date(2024, 9, 17),
            Phase::WaxingGibbous,
            99.3,
            Visibility::Crossings {
                rise: Some(time(17, 31, 0)),
                set: None,
            },
            None,
            false,
        )
        .expect("fixture is valid"),
        DailyLunarRecord::new(
            date(2024, 9, 18),
            Phase::Full,
            99.9,
            Visibility::Crossings {
                rise: Some(time(18, 4, 12)),
                set: Some(time(5, 31, 40)),
            },
            Some(EclipseEvent {
                kind: EclipseKind::Partial,
                depth_pct: 8.5,
                instant: time(2, 44, 0),
            }),
            true,
        )
        .expect("fixture is valid"),
        DailyLunarRecord::new(
            date(2024, 9, 19),
            Phase::WaningGibbous,
            98.1,
            Visibility::UpAllDay,
            None,
            false,
        )
        .expect("fixture is valid"),
        DailyLunarRecord::new(
            date(2024, 9, 20),
            Phase::WaningGibbous,
            94.6,
            Visibility::DownAllDay,
            None,
            false,
        )
        .expect("fixture is valid"),
    ]
}

#[test]
fn round_trip_preserves_every_row_shape() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("lunar.csv");

    let records = sample_records();
    write_table(&path, &records).expect("write succeeds");

    let read_back = read_table(&path).expect("read succeeds");
    assert_eq!(read_back, records);
}

#[test]
fn written_file_has_expected_header_and_cells() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("lunar.csv");

    write_table(&path, &sample_records()).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read file");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], COLUMNS.join(","));
    assert_eq!(
        lines[3],
        "2024-09-18,Full Moon,99.9,18:04:12,05:31:40,False,False,Partial,8.5,02:44:00,True"
    );
    assert_eq!(
        lines[4],
        "2024-09-19,Waning Gibbous,98.1,,,True,False,None,,,False"
    );
}

#[test]
fn write_is_deterministic() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let first = dir.path().join("a.csv");
    let second = dir.path().join("b.csv");

    let records = sample_records();
    write_table(&first, &records).expect("write succeeds");
    write_table(&second, &records).expect("write succeeds");

    let a = std::fs::read(&first).expect("read file");
    let b = std::fs::read(&second).expect("read file");
    assert_eq!(a, b);
}

#[test]
fn read_table_file_not_found() {
    let result = read_table(std::path::Path::new("/tmp/nonexistent_selene_table.csv"));
    assert!(result.is_err());
    match result.unwrap_err() {
        TableError::FileNotFound { path } => {
            assert!(path.to_str().unwrap().contains("nonexistent_selene_table"));
        }
        other => panic!("expected FileNotFound, got: {other}"),
    }
}

#[test]
fn read_table_rejects_foreign_header() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("foreign.csv");
    std::fs::write(&path, "Day,Phase\n2024-01-01,Full Moon\n").expect("write file");

    let result = read_table(&path);
    match result.unwrap_err() {
        TableError::HeaderMismatch { expected, got } => {
            assert_eq!(expected, COLUMNS.join(","));
            assert_eq!(got, "Day,Phase");
        }
        other => panic!("expected HeaderMismatch, got: {other}"),
    }
}

#[test]
fn read_table_rejects_tampered_row() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("tampered.csv");

    write_table(&path, &sample_records()).expect("write succeeds");

    // Corrupt the illumination cell on the first data row.
    let text = std::fs::read_to_string(&path).expect("read file");
    let tampered = text.replacen("97.4", "140.0", 1);
    std::fs::write(&path, tampered).expect("write file");

    let result = read_table(&path);
    match result.unwrap_err() {
        TableError::InvalidRow { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("illumination"), "reason: {reason}");
        }
        other => panic!("expected InvalidRow, got: {other}"),
    }
}

#[test]
fn dataset_loads_written_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("lunar.csv");

    let records = sample_records();
    write_table(&path, &records).expect("write succeeds");

    let dataset = LunarDataset::load(&path).expect("load succeeds");
    assert_eq!(dataset.len(), records.len());
    assert_eq!(dataset.first_date(), date(2024, 9, 16));
    assert_eq!(dataset.last_date(), date(2024, 9, 20));
    assert_eq!(dataset.records(), records.as_slice());
}

#[test]
fn dataset_load_rejects_date_gap() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("gap.csv");

    let mut records = sample_records();
    records.remove(2);
    write_table(&path, &records).expect("write succeeds");

    let result = LunarDataset::load(&path);
    assert!(matches!(
        result,
        Err(TableError::NonConsecutive { prev, next })
            if prev == date(2024, 9, 17) && next == date(2024, 9, 19)
    ));
}
