//! Date helpers for `dd/mm/yyyy` literals
//!
//! Literals use 1-based months, like normal people. Decoding comes in two
//! flavours: [`date_like_normal_people`] rolls out-of-range components over into
//! the neighbouring month or year, [`checked_date`] refuses them.

use crate::error::DateError;
use crate::settings::DateValidation;
use chrono::{Datelike, Days, Local, Months, NaiveDate};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Split a `dd/mm/yyyy` literal into `(day, month, year)`
pub fn split_date(literal: &str) -> Result<(u32, u32, i32), DateError> {
    let malformed = || DateError::Malformed(literal.to_string());

    let mut parts = literal.split('/');
    let (Some(dd), Some(mm), Some(yyyy), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let day = dd.trim().parse::<u32>().map_err(|_| malformed())?;
    let month = mm.trim().parse::<u32>().map_err(|_| malformed())?;
    let year = yyyy.trim().parse::<i32>().map_err(|_| malformed())?;
    Ok((day, month, year))
}

/// Build a date with calendar rollover
///
/// Month 13 is January of the next year, day 32 spills into the next month and
/// a zero day or month steps back one unit. Returns `None` only when the result
/// falls outside the representable range.
pub fn date_like_normal_people(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let january = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let month_start = match month {
        0 => january.checked_sub_months(Months::new(1))?,
        m => january.checked_add_months(Months::new(m - 1))?,
    };
    match day {
        0 => month_start.checked_sub_days(Days::new(1)),
        d => month_start.checked_add_days(Days::new(u64::from(d - 1))),
    }
}

/// Build a date, rejecting anything that would need rollover or lies in a past year
pub fn checked_date(
    year: i32,
    month: u32,
    day: u32,
    today: NaiveDate,
) -> Result<NaiveDate, DateError> {
    if day == 0 || day > 31 {
        return Err(DateError::InvalidDay(day));
    }
    if month == 0 || month > 12 {
        return Err(DateError::InvalidMonth(month));
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateError::NonexistentDate { day, month, year })?;
    if year < today.year() {
        return Err(DateError::YearInPast {
            year,
            current: today.year(),
        });
    }
    Ok(date)
}

/// Decode a `dd/mm/yyyy` literal
///
/// # Arguments
/// * `literal` - The date literal as matched by the tokenizer
/// * `today` - Reference date, used for the past-year check
/// * `validation` - Whether suspicious dates are rolled over or rejected
///
/// # Returns
/// The decoded date. In lenient mode an error only means that no date could be
/// built at all.
pub fn decode_date(
    literal: &str,
    today: NaiveDate,
    validation: DateValidation,
) -> Result<NaiveDate, DateError> {
    let (day, month, year) = split_date(literal)?;
    match validation {
        DateValidation::strict => checked_date(year, month, day, today),
        DateValidation::lenient => {
            if let Err(issue) = checked_date(year, month, day, today) {
                tracing::warn!("suspicious date '{}': {}", literal, issue);
            }
            date_like_normal_people(year, month, day)
                .ok_or(DateError::NonexistentDate { day, month, year })
        }
    }
}

/// Whole days from `today` to `date`, negative when `date` has passed
pub fn diff_in_days(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// English weekday name, e.g. "Monday"
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_split_date() {
        assert_eq!(split_date("01/02/2024").unwrap(), (1, 2, 2024));
        assert_eq!(split_date("1/2/2024").unwrap(), (1, 2, 2024));
    }

    // Wrong segment count or non-numeric segments
    #[test]
    fn test_split_date_malformed() {
        assert!(matches!(split_date("01/02"), Err(DateError::Malformed(_))));
        assert!(matches!(
            split_date("01/02/2024/5"),
            Err(DateError::Malformed(_))
        ));
        assert!(matches!(split_date("aa/02/2024"), Err(DateError::Malformed(_))));
        assert!(matches!(split_date(""), Err(DateError::Malformed(_))));
    }

    #[test]
    fn test_date_like_normal_people() {
        assert_eq!(date_like_normal_people(2020, 1, 1), Some(ymd(2020, 1, 1)));
        assert_eq!(date_like_normal_people(2024, 2, 29), Some(ymd(2024, 2, 29)));
    }

    // Out-of-range components roll over like a calendar would
    #[test]
    fn test_date_rollover() {
        assert_eq!(date_like_normal_people(2020, 13, 1), Some(ymd(2021, 1, 1)));
        assert_eq!(date_like_normal_people(2020, 1, 32), Some(ymd(2020, 2, 1)));
        assert_eq!(date_like_normal_people(2023, 2, 29), Some(ymd(2023, 3, 1)));
        assert_eq!(date_like_normal_people(2020, 1, 0), Some(ymd(2019, 12, 31)));
        assert_eq!(date_like_normal_people(2020, 0, 1), Some(ymd(2019, 12, 1)));
        assert_eq!(date_like_normal_people(9999, 99, 99), Some(ymd(10007, 6, 7)));
    }

    #[test]
    fn test_checked_date() {
        let today = ymd(2024, 6, 1);
        assert_eq!(checked_date(2024, 6, 30, today), Ok(ymd(2024, 6, 30)));
        assert_eq!(checked_date(2024, 6, 32, today), Err(DateError::InvalidDay(32)));
        assert_eq!(checked_date(2024, 6, 0, today), Err(DateError::InvalidDay(0)));
        assert_eq!(checked_date(2024, 13, 1, today), Err(DateError::InvalidMonth(13)));
        assert_eq!(
            checked_date(2024, 2, 31, today),
            Err(DateError::NonexistentDate {
                day: 31,
                month: 2,
                year: 2024
            })
        );
        assert_eq!(
            checked_date(2023, 12, 31, today),
            Err(DateError::YearInPast {
                year: 2023,
                current: 2024
            })
        );
    }

    #[test]
    fn test_decode_date_modes() {
        let today = ymd(2020, 1, 5);
        assert_eq!(
            decode_date("32/01/2020", today, DateValidation::lenient),
            Ok(ymd(2020, 2, 1))
        );
        assert_eq!(
            decode_date("32/01/2020", today, DateValidation::strict),
            Err(DateError::InvalidDay(32))
        );
        // Past years are only rejected in strict mode
        assert_eq!(
            decode_date("31/12/2019", today, DateValidation::lenient),
            Ok(ymd(2019, 12, 31))
        );
        assert!(decode_date("31/12/2019", today, DateValidation::strict).is_err());
    }

    #[test]
    fn test_diff_in_days() {
        let today = ymd(2020, 1, 5);
        assert_eq!(diff_in_days(ymd(2020, 1, 1), today), -4);
        assert_eq!(diff_in_days(ymd(2020, 1, 5), today), 0);
        assert_eq!(diff_in_days(ymd(2020, 2, 5), today), 31);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(ymd(2020, 1, 1)), "Wednesday");
    }
}
