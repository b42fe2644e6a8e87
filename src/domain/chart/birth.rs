//! Validated birth input: the only place a chart request can be rejected.

use chrono::format::{self, ParseError, ParseErrorKind, ParseResult, Parsed, StrftimeItems};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::foundation::ValidationError;

/// Calendar years the engine accepts.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=2100;

const DATE_FORMAT: &str = "YYYY-MM-DD";
const TIME_FORMAT: &str = "HH:MM";

/// Gender of the chart owner; decides the luck-cycle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parses `male`/`female` (case-insensitive), `m`/`f`, or `男`/`女`.
    pub fn parse(value: &str) -> Result<Gender, ValidationError> {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Gender::Male),
            "female" | "f" | "女" => Ok(Gender::Female),
            _ => Err(ValidationError::input_format("gender", "male or female")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Birth data that has passed boundary validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthInput {
    local_time: NaiveDateTime,
    longitude: f64,
    latitude: Option<f64>,
    gender: Gender,
}

impl BirthInput {
    /// Validates an already-typed local time and coordinates.
    ///
    /// Latitude is accepted and range-checked but no computation uses it.
    pub fn new(
        local_time: NaiveDateTime,
        longitude: f64,
        latitude: Option<f64>,
        gender: Gender,
    ) -> Result<Self, ValidationError> {
        let year = local_time.year();
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(ValidationError::input_range(
                "year",
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end(),
                year,
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::input_range("longitude", -180, 180, longitude));
        }
        if let Some(lat) = latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ValidationError::input_range("latitude", -90, 90, lat));
            }
        }
        Ok(Self {
            local_time,
            longitude,
            latitude,
            gender,
        })
    }

    /// Parses `YYYY-MM-DD` / `HH:MM` strings and validates everything.
    pub fn parse(
        birth_date: &str,
        birth_time: &str,
        longitude: f64,
        latitude: Option<f64>,
        gender: Gender,
    ) -> Result<Self, ValidationError> {
        let local_time = parse_local_datetime(birth_date, birth_time)?;
        Self::new(local_time, longitude, latitude, gender)
    }

    pub fn local_time(&self) -> NaiveDateTime {
        self.local_time
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}

/// Parses a `YYYY-MM-DD` date plus minute-precision `HH:MM` clock time.
///
/// Structural problems are `InputFormat` errors; well-formed but impossible
/// values (month 13, 25:00, February 30) are `InputRange` errors.
pub fn parse_local_datetime(
    birth_date: &str,
    birth_time: &str,
) -> Result<NaiveDateTime, ValidationError> {
    let date = parse_date(birth_date)?;
    let time = parse_time(birth_time)?;
    Ok(NaiveDateTime::new(date, time))
}

/// Runs a strftime pattern into `Parsed`, keeping whatever fields were
/// accepted before a failure.
fn parse_fields<T>(
    value: &str,
    pattern: &str,
    resolve: impl FnOnce(&Parsed) -> ParseResult<T>,
) -> (Parsed, ParseResult<T>) {
    let mut parsed = Parsed::new();
    let outcome = format::parse(&mut parsed, value.trim(), StrftimeItems::new(pattern))
        .and_then(|()| resolve(&parsed));
    (parsed, outcome)
}

fn is_range_failure(err: &ParseError) -> bool {
    matches!(err.kind(), ParseErrorKind::OutOfRange | ParseErrorKind::Impossible)
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let (parsed, outcome) = parse_fields(value, "%Y-%m-%d", Parsed::to_naive_date);
    match outcome {
        Ok(date) => Ok(date),
        Err(err) if is_range_failure(&err) => Err(date_range_error(&parsed, value)),
        Err(_) => Err(ValidationError::input_format("birth_date", DATE_FORMAT)),
    }
}

/// Names the first date field chrono refused. A field rejected during the
/// scan is never stored, so the raw input stands in for its value.
fn date_range_error(parsed: &Parsed, value: &str) -> ValidationError {
    let Some(month) = parsed.month() else {
        return ValidationError::input_range("month", 1, 12, value.trim());
    };
    let last_day = parsed
        .year()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day());
    match parsed.day() {
        Some(day) => ValidationError::input_range("day", 1, last_day, day),
        None => ValidationError::input_range("day", 1, last_day, value.trim()),
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let (parsed, outcome) = parse_fields(value, "%H:%M", Parsed::to_naive_time);
    match outcome {
        Ok(time) => Ok(time),
        Err(err) if is_range_failure(&err) => {
            if parsed.hour_mod_12().is_none() {
                Err(ValidationError::input_range("hour", 0, 23, value.trim()))
            } else {
                Err(ValidationError::input_range("minute", 0, 59, value.trim()))
            }
        }
        Err(_) => Err(ValidationError::input_format("birth_time", TIME_FORMAT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use chrono::Timelike;

    #[test]
    fn parse_accepts_well_formed_input() {
        let input = BirthInput::parse("1990-05-15", "14:30", 116.4074, Some(39.9), Gender::Male)
            .unwrap();
        assert_eq!(input.local_time().date(), NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert_eq!(input.local_time().hour(), 14);
        assert_eq!(input.local_time().minute(), 30);
        assert_eq!(input.gender(), Gender::Male);
    }

    #[test]
    fn parse_accepts_single_digit_components() {
        let dt = parse_local_datetime("2001-2-3", "7:05").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2001, 2, 3).unwrap());
        assert_eq!(dt.hour(), 7);
    }

    #[test]
    fn malformed_date_is_format_error() {
        for bad in ["1990/05/15", "15-05-1990", "1990-05", "abcd-ef-gh", "", "1990-05-15T"] {
            let err = parse_local_datetime(bad, "12:00").unwrap_err();
            assert!(
                matches!(err, ValidationError::InputFormat { ref field, .. } if field == "birth_date"),
                "{:?} gave {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn malformed_time_is_format_error() {
        for bad in ["12", "12:", "12:00:00", "noon", "-1:30", "12h30"] {
            let err = parse_local_datetime("1990-05-15", bad).unwrap_err();
            assert!(matches!(err, ValidationError::InputFormat { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn impossible_values_are_range_errors() {
        assert_eq!(
            parse_local_datetime("1990-13-01", "12:00").unwrap_err(),
            ValidationError::input_range("month", 1, 12, "1990-13-01")
        );
        assert_eq!(
            parse_local_datetime("1990-02-29", "12:00").unwrap_err(),
            ValidationError::input_range("day", 1, 28, 29)
        );
        assert_eq!(
            parse_local_datetime("1990-04-31", "12:00").unwrap_err(),
            ValidationError::input_range("day", 1, 30, 31)
        );
        assert_eq!(
            parse_local_datetime("1990-05-15", "24:00").unwrap_err(),
            ValidationError::input_range("hour", 0, 23, "24:00")
        );
        assert_eq!(
            parse_local_datetime("1990-05-15", "12:60").unwrap_err(),
            ValidationError::input_range("minute", 0, 59, "12:60")
        );
    }

    #[test]
    fn day_beyond_any_month_names_the_month_length() {
        let err = parse_local_datetime("1990-06-32", "12:00").unwrap_err();
        assert_eq!(err, ValidationError::input_range("day", 1, 30, "1990-06-32"));
    }

    #[test]
    fn format_and_range_problems_are_told_apart() {
        let code = |date: &str, time: &str| parse_local_datetime(date, time).unwrap_err().code();
        assert_eq!(code("1990-5-40", "12:00"), ErrorCode::InputRange);
        assert_eq!(code("1990-5-x", "12:00"), ErrorCode::InputFormat);
        assert_eq!(code("1990-05-15", "99:00"), ErrorCode::InputRange);
        assert_eq!(code("1990-05-15", "9.30"), ErrorCode::InputFormat);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let dt = parse_local_datetime(" 1990-05-15 ", " 14:30\n").unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn leap_day_is_accepted_in_leap_year() {
        assert!(parse_local_datetime("2000-02-29", "00:00").is_ok());
    }

    #[test]
    fn year_outside_supported_range_is_rejected() {
        let err = BirthInput::parse("1850-01-01", "12:00", 120.0, None, Gender::Female)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InputRange { ref field, .. } if field == "year"));
    }

    #[test]
    fn coordinates_are_range_checked() {
        let err = BirthInput::parse("1990-05-15", "12:00", 181.0, None, Gender::Male).unwrap_err();
        assert!(matches!(err, ValidationError::InputRange { ref field, .. } if field == "longitude"));

        let err = BirthInput::parse("1990-05-15", "12:00", f64::NAN, None, Gender::Male)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InputRange { .. }));

        let err = BirthInput::parse("1990-05-15", "12:00", 100.0, Some(-91.0), Gender::Male)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InputRange { ref field, .. } if field == "latitude"));
    }

    #[test]
    fn gender_parse_accepts_aliases() {
        assert_eq!(Gender::parse("Male").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("m").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("男").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("FEMALE").unwrap(), Gender::Female);
        assert_eq!(Gender::parse("女").unwrap(), Gender::Female);
        assert!(Gender::parse("other").is_err());
    }
}
