//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - constructed transiently during a single parse pass
//! - compared by value in tests
//! - rendered without further lookups

use chrono::{DateTime, FixedOffset, TimeZone, Weekday};

/// Offset of Japan Standard Time from UTC, in seconds.
pub const JST_OFFSET_SECONDS: i32 = 9 * 60 * 60;

/// The fixed UTC+9 offset used for all date construction and rendering.
///
/// The offset is carried as configuration (see [`Calendar::tz`]) rather than
/// installed process-wide, so nothing outside the date-construction path is
/// affected by it.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECONDS).expect("UTC+9 is within the valid offset range")
}

/// Prefectures named in the daily dataset, plus an `Unknown` fallback.
///
/// The upstream CSV spells these in Japanese; [`Prefecture::from_name`] maps
/// any unrecognized spelling to `Unknown` instead of failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefecture {
    Hokkaido,
    Tokyo,
    Osaka,
    Yamanashi,
    Unknown,
}

impl Prefecture {
    /// Map a prefecture name as spelled in the dataset.
    pub fn from_name(name: &str) -> Self {
        match name {
            "北海道" => Prefecture::Hokkaido,
            "東京都" => Prefecture::Tokyo,
            "大阪府" => Prefecture::Osaka,
            "山梨県" => Prefecture::Yamanashi,
            _ => Prefecture::Unknown,
        }
    }

    /// The dataset spelling of this prefecture.
    pub fn display_name(self) -> &'static str {
        match self {
            Prefecture::Hokkaido => "北海道",
            Prefecture::Tokyo => "東京都",
            Prefecture::Osaka => "大阪府",
            Prefecture::Yamanashi => "山梨県",
            Prefecture::Unknown => "不明",
        }
    }
}

/// One parsed row of the daily prefecture dataset.
///
/// Records are immutable value objects: they are built once from a validated
/// CSV row, carried through filtering and rendering, and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Midnight of the reporting day, in the configured offset.
    pub date: DateTime<FixedOffset>,
    pub prefecture: Prefecture,
    pub infected: u32,
    pub hospitalized: u32,
    pub discharged: u32,
    pub dead: u32,
}

/// Report configuration.
///
/// `start_day` and `begin_date` describe the intended week layout and report
/// start; the renderer does not consult them yet and filters by prefecture
/// only. `tz` is passed to date construction so no process-global time-zone
/// state is needed.
#[derive(Debug, Clone)]
pub struct Calendar {
    /// First day of a rendered week.
    pub start_day: Weekday,
    /// Earliest date the report is meant to cover.
    pub begin_date: DateTime<FixedOffset>,
    /// Offset applied when constructing row dates.
    pub tz: FixedOffset,
}

impl Calendar {
    pub fn new() -> Self {
        let tz = jst();
        let begin_date = tz
            .with_ymd_and_hms(2020, 3, 1, 0, 0, 0)
            .single()
            .expect("2020-03-01 exists in a fixed-offset zone");
        Self {
            start_day: Weekday::Mon,
            begin_date,
            tz,
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefecture_names_round_trip() {
        for pref in [
            Prefecture::Hokkaido,
            Prefecture::Tokyo,
            Prefecture::Osaka,
            Prefecture::Yamanashi,
        ] {
            assert_eq!(Prefecture::from_name(pref.display_name()), pref);
        }
    }

    #[test]
    fn unrecognized_prefecture_folds_into_unknown() {
        assert_eq!(Prefecture::from_name("沖縄県"), Prefecture::Unknown);
        assert_eq!(Prefecture::from_name(""), Prefecture::Unknown);
        assert_eq!(Prefecture::from_name("Tokyo"), Prefecture::Unknown);
        assert_eq!(Prefecture::Unknown.display_name(), "不明");
    }

    #[test]
    fn calendar_defaults() {
        let cal = Calendar::new();
        assert_eq!(cal.start_day, Weekday::Mon);
        assert_eq!(cal.tz, jst());
        assert_eq!(cal.begin_date.to_string(), "2020-03-01 00:00:00 +09:00");
    }
}
