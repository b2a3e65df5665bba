//! Date and time strings as submitted by clients, and the single timestamp they
//! are stored as.

use time::{macros::format_description, Date, PrimitiveDateTime, Time};

use crate::error::{AppError, AppResult};

/// Serde adapter rendering a timestamp as `YYYY-MM-DDTHH:MM`.
pub mod minute_timestamp {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{macros::format_description, PrimitiveDateTime};

    pub fn serialize<S: Serializer>(at: &PrimitiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        let text = at
            .format(format_description!("[year]-[month]-[day]T[hour]:[minute]"))
            .map_err(serde::ser::Error::custom)?;
        s.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<PrimitiveDateTime, D::Error> {
        let text = String::deserialize(d)?;
        PrimitiveDateTime::parse(
            &text,
            format_description!("[year]-[month]-[day]T[hour]:[minute]"),
        )
        .map_err(serde::de::Error::custom)
    }
}

/// Combines `YYYY-MM-DD` and `HH:MM` (24-hour, zero-padded) into one timestamp.
pub fn combine(date: &str, time: &str) -> AppResult<PrimitiveDateTime> {
    let day = Date::parse(date, format_description!("[year]-[month]-[day]"))
        .map_err(|e| AppError::Parse(format!("date {date:?} is not YYYY-MM-DD: {e}")))?;
    let clock = Time::parse(time, format_description!("[hour]:[minute]"))
        .map_err(|e| AppError::Parse(format!("time {time:?} is not HH:MM: {e}")))?;
    Ok(PrimitiveDateTime::new(day, clock))
}

pub fn format_date(at: PrimitiveDateTime) -> String {
    // Formatting a plain date cannot fail.
    at.date()
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

pub fn format_time(at: PrimitiveDateTime) -> String {
    at.time()
        .format(format_description!("[hour]:[minute]"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn combines_date_and_time() {
        let at = combine("2024-03-01", "09:30").unwrap();
        assert_eq!(at, datetime!(2024-03-01 09:30));
    }

    #[test]
    fn formatting_recovers_the_inputs() {
        for (date, time) in [
            ("2024-02-29", "00:00"),
            ("1999-12-31", "23:59"),
            ("2030-07-04", "12:05"),
        ] {
            let at = combine(date, time).unwrap();
            assert_eq!(format_date(at), date);
            assert_eq!(format_time(at), time);
            assert_eq!(combine(&format_date(at), &format_time(at)).unwrap(), at);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for (date, time) in [
            ("2024/03/01", "09:30"),
            ("2024-13-01", "09:30"),
            ("2023-02-29", "09:30"),
            ("2024-03-01", "9:30am"),
            ("2024-03-01", "24:00"),
            ("2024-03-01", "09:30:15"),
            ("", "09:30"),
            ("2024-03-01", ""),
        ] {
            let err = combine(date, time).unwrap_err();
            assert!(matches!(err, AppError::Parse(_)), "{date} {time}");
        }
    }

    #[test]
    fn serializes_with_minute_precision() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(with = "minute_timestamp")]
            at: PrimitiveDateTime,
        }
        let json = serde_json::to_string(&Wrapper {
            at: datetime!(2024-03-02 10:00),
        })
        .unwrap();
        assert_eq!(json, r#"{"at":"2024-03-02T10:00"}"#);
    }
}
