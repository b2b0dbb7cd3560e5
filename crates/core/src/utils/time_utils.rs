use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Calendar day of `instant` as seen in the timezone `tz`.
///
/// Journal entries are stamped with the writer's local day, not the UTC day.
pub fn local_date_from_utc<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Today's date in the process's local timezone.
pub fn today() -> NaiveDate {
    local_date_from_utc(Utc::now(), &Local)
}

/// Current UTC time without offset, as stored in timestamp columns.
pub fn now_naive() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_local_date_crosses_midnight() {
        let instant = Utc.with_ymd_and_hms(2024, 7, 8, 23, 30, 0).unwrap();
        let ahead = FixedOffset::east_opt(2 * 3600).unwrap();
        let behind = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(
            local_date_from_utc(instant, &ahead),
            NaiveDate::from_ymd_opt(2024, 7, 9).unwrap()
        );
        assert_eq!(
            local_date_from_utc(instant, &behind),
            NaiveDate::from_ymd_opt(2024, 7, 8).unwrap()
        );
    }
}
