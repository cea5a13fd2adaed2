//! CSV ingest and validation.
//!
//! This module is responsible for turning the upstream daily CSV into typed
//! [`Record`]s that are safe to filter and render.
//!
//! Design goals:
//! - **Strict rows**: exactly 8 fields, all numeric fields valid integers
//! - **One lenient field**: unrecognized prefecture names fold into a sentinel
//! - **Atomic ingest**: the first bad row fails the whole parse, so rendering
//!   either sees every row or none

use std::io::Read;

use chrono::{FixedOffset, TimeZone};
use csv::StringRecord;

use crate::domain::{Prefecture, Record};
use crate::error::{AppError, ErrorKind};

/// Expected number of fields in each row of the daily CSV.
pub const EXPECTED_FIELDS: usize = 8;

/// Parse the daily CSV into records, skipping the header row.
///
/// Field layout: `year, month, day, prefecture, infected, hospitalized,
/// discharged, dead`. Whitespace around fields is trimmed and irregular
/// quoting is tolerated, matching the upstream data's quirks. Dates are
/// constructed at midnight in `tz`.
pub fn parse_records<R: Read>(input: R, tz: FixedOffset) -> Result<Vec<Record>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after the header
        // - CSV is 1-based line numbers
        let line = idx + 2;

        let raw = result.map_err(|e| {
            AppError::new(
                ErrorKind::MalformedRow,
                format!("CSV read error at line {line}: {e}"),
            )
        })?;

        records.push(parse_row(&raw, line, tz)?);
    }

    Ok(records)
}

fn parse_row(raw: &StringRecord, line: usize, tz: FixedOffset) -> Result<Record, AppError> {
    if raw.len() != EXPECTED_FIELDS {
        return Err(AppError::new(
            ErrorKind::MalformedRow,
            format!(
                "Number of fields ({}) at line {line} is wrong: {:?}",
                raw.len(),
                raw.iter().collect::<Vec<_>>(),
            ),
        ));
    }

    let year: i32 = parse_int(raw, 0, "year", line)?;
    let month: u32 = parse_int(raw, 1, "month", line)?;
    let day: u32 = parse_int(raw, 2, "day", line)?;
    let prefecture = Prefecture::from_name(field(raw, 3));
    let infected: u32 = parse_int(raw, 4, "infected", line)?;
    let hospitalized: u32 = parse_int(raw, 5, "hospitalized", line)?;
    let discharged: u32 = parse_int(raw, 6, "discharged", line)?;
    let dead: u32 = parse_int(raw, 7, "dead", line)?;

    let date = tz
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| {
            AppError::new(
                ErrorKind::InvalidDate,
                format!("Invalid calendar date {year}-{month}-{day} at line {line}"),
            )
        })?;

    Ok(Record {
        date,
        prefecture,
        infected,
        hospitalized,
        discharged,
        dead,
    })
}

fn field<'a>(raw: &'a StringRecord, idx: usize) -> &'a str {
    // Callers check the field count first.
    raw.get(idx).unwrap_or("")
}

fn parse_int<T>(raw: &StringRecord, idx: usize, name: &str, line: usize) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = field(raw, idx);
    value.parse().map_err(|e| {
        AppError::new(
            ErrorKind::InvalidNumber,
            format!("Invalid {name} '{value}' at line {line}: {e}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::jst;

    const HEADER: &str = "年,月,日,都道府県,感染者数,入院者数,退院者数,死亡者数";

    fn parse(rows: &[&str]) -> Result<Vec<Record>, AppError> {
        let mut body = String::from(HEADER);
        for row in rows {
            body.push('\n');
            body.push_str(row);
        }
        parse_records(body.as_bytes(), jst())
    }

    #[test]
    fn parses_well_formed_rows() {
        let records = parse(&[
            "2020,3,15,東京都,10,5,3,1",
            "2020,3,16,北海道,7,4,2,0",
        ])
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].prefecture, Prefecture::Tokyo);
        assert_eq!(records[0].infected, 10);
        assert_eq!(records[0].hospitalized, 5);
        assert_eq!(records[0].discharged, 3);
        assert_eq!(records[0].dead, 1);
        assert_eq!(records[0].date.to_string(), "2020-03-15 00:00:00 +09:00");
        assert_eq!(records[1].prefecture, Prefecture::Hokkaido);
    }

    #[test]
    fn header_row_is_never_parsed_as_data() {
        let records = parse(&[]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn unrecognized_prefecture_is_tolerated() {
        let records = parse(&["2020,4,1,沖縄県,2,1,1,0"]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prefecture, Prefecture::Unknown);
    }

    #[test]
    fn wrong_field_count_fails_the_whole_parse() {
        let err = parse(&[
            "2020,3,15,東京都,10,5,3,1",
            "2020,3,16,東京都,12,6,4",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedRow);
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn extra_fields_also_fail() {
        let err = parse(&["2020,3,15,東京都,10,5,3,1,99"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRow);
    }

    #[test]
    fn non_numeric_count_fails_the_whole_parse() {
        let err = parse(&[
            "2020,3,15,北海道,abc,5,3,1",
            "2020,3,16,東京都,12,6,4,0",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
        assert!(err.to_string().contains("infected"), "{err}");
    }

    #[test]
    fn non_numeric_date_field_fails() {
        let err = parse(&["2020,三,15,東京都,10,5,3,1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
        assert!(err.to_string().contains("month"), "{err}");
    }

    #[test]
    fn negative_count_fails() {
        let err = parse(&["2020,3,15,東京都,-1,5,3,1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
    }

    #[test]
    fn impossible_calendar_date_fails() {
        let err = parse(&["2020,13,1,東京都,10,5,3,1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
    }

    #[test]
    fn whitespace_around_fields_is_trimmed() {
        let records = parse(&[" 2020 , 3 , 15 , 東京都 , 10 , 5 , 3 , 1"]).unwrap();
        assert_eq!(records[0].prefecture, Prefecture::Tokyo);
        assert_eq!(records[0].infected, 10);
    }

    #[test]
    fn quoted_fields_are_accepted() {
        let records = parse(&["2020,3,15,\"東京都\",10,5,3,1"]).unwrap();
        assert_eq!(records[0].prefecture, Prefecture::Tokyo);
    }
}
