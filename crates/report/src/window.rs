//! Window selection over the dataset.

use chrono::NaiveDate;
use selene_events::DailyLunarRecord;
use selene_io::LunarDataset;

use crate::error::ReportError;

/// Nominal report window length in days.
pub const WINDOW_DAYS: usize = 30;

/// Selects the report window starting at `start`.
///
/// The window covers `start` through `start + 29`, clipped to the
/// dataset's final date. A clipped window is not an error; the
/// aggregates simply cover fewer days.
///
/// # Errors
///
/// Returns [`ReportError::StartOutOfRange`] if `start` falls before the
/// first or after the last covered date.
pub fn select_window(
    dataset: &LunarDataset,
    start: NaiveDate,
) -> Result<&[DailyLunarRecord], ReportError> {
    let first = dataset.first_date();
    let last = dataset.last_date();
    if start < first || start > last {
        return Err(ReportError::StartOutOfRange { start, first, last });
    }

    let offset = (start - first).num_days() as usize;
    let end = (offset + WINDOW_DAYS).min(dataset.len());
    Ok(&dataset.records()[offset..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use selene_events::{Phase, Visibility};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset(start: NaiveDate, n: usize) -> LunarDataset {
        let mut records = Vec::with_capacity(n);
        let mut day = start;
        for _ in 0..n {
            records.push(
                DailyLunarRecord::new(
                    day,
                    Phase::New,
                    1.0,
                    Visibility::Crossings {
                        rise: Some(NaiveTime::from_hms_opt(6, 0, 0).unwrap()),
                        set: None,
                    },
                    None,
                    false,
                )
                .unwrap(),
            );
            day = day.succ_opt().unwrap();
        }
        LunarDataset::from_records(records).unwrap()
    }

    #[test]
    fn test_full_window_from_interior_start() {
        let data = dataset(date(2024, 1, 1), 90);
        let window = select_window(&data, date(2024, 2, 1)).unwrap();
        assert_eq!(window.len(), WINDOW_DAYS);
        assert_eq!(window[0].date(), date(2024, 2, 1));
        assert_eq!(window[29].date(), date(2024, 3, 1));
    }

    #[test]
    fn test_window_clips_at_dataset_end() {
        let data = dataset(date(2024, 1, 1), 40);
        let window = select_window(&data, date(2024, 2, 1)).unwrap();
        // Days 32..=40 of the dataset: nine days remain.
        assert_eq!(window.len(), 9);
        assert_eq!(window[0].date(), date(2024, 2, 1));
        assert_eq!(window.last().unwrap().date(), date(2024, 2, 9));
    }

    #[test]
    fn test_start_on_last_date_yields_one_day() {
        let data = dataset(date(2024, 1, 1), 40);
        let window = select_window(&data, date(2024, 2, 9)).unwrap();
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_start_before_first_rejected() {
        let data = dataset(date(2024, 1, 1), 40);
        let err = select_window(&data, date(2023, 12, 31)).unwrap_err();
        assert!(matches!(
            err,
            ReportError::StartOutOfRange { start, first, last }
                if start == date(2023, 12, 31)
                    && first == date(2024, 1, 1)
                    && last == date(2024, 2, 9)
        ));
    }

    #[test]
    fn test_start_after_last_rejected() {
        let data = dataset(date(2024, 1, 1), 40);
        let err = select_window(&data, date(2024, 2, 10)).unwrap_err();
        assert!(matches!(err, ReportError::StartOutOfRange { .. }));
    }
}
