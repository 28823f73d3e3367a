//! Reservation timestamps and the viewer's time zone.
//!
//! Remote records carry their date as free text (usually ISO 8601, sometimes
//! with a `Z` suffix, sometimes a bare local wall-clock time). Every accepted
//! form is resolved once into a local [`NaiveDateTime`] in the viewer's zone,
//! so calendar-day comparison and chronological sorting work on the same
//! representation.

use std::fmt;

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc,
};
use serde::{Serialize, Serializer};

/// Naive date-time layouts, interpreted as viewer-local wall clock.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts, resolved to local midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Offset-carrying layouts not covered by RFC 3339 (no seconds).
const ZONED_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// The viewer's time zone.
///
/// `Local` follows the host's zone rules per instant, so daylight-saving
/// changes land each timestamp on its true local day. `Fixed` is a constant
/// offset for embedding and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl ViewerZone {
    /// The host's local zone.
    #[must_use]
    pub const fn local() -> Self {
        Self::Local
    }

    /// UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Wrap an explicit offset.
    #[must_use]
    pub const fn from_offset(offset: FixedOffset) -> Self {
        Self::Fixed(offset)
    }

    /// Offset east of UTC in whole hours, `None` when out of range.
    #[must_use]
    pub fn east_hours(hours: i32) -> Option<Self> {
        FixedOffset::east_opt(hours * 3600).map(Self::Fixed)
    }

    /// UTC offset in effect at `instant`.
    #[must_use]
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            Self::Local => *instant.with_timezone(&Local).offset(),
            Self::Fixed(offset) => *offset,
        }
    }

    /// Convert an instant to local wall-clock time.
    #[must_use]
    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Local => instant.with_timezone(&Local).naive_local(),
            Self::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }

    /// Current local wall-clock time.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.to_local(Utc::now())
    }

    /// Current local calendar day.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl fmt::Display for ViewerZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Fixed(offset) => write!(f, "UTC{offset}"),
        }
    }
}

/// Parse a raw date string into local wall-clock time.
///
/// Accepts RFC 3339 (offset or `Z`, optional fraction), the same without
/// seconds, naive `T`/space/slash separated date-times, and date-only values
/// (local midnight). Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(raw: &str, zone: ViewerZone) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(zone.to_local(dt.with_timezone(&Utc)));
    }

    if let Some(utc_text) = trimmed.strip_suffix(['Z', 'z']) {
        return parse_naive(utc_text).map(|naive| zone.to_local(naive.and_utc()));
    }

    for format in ZONED_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Some(zone.to_local(dt.with_timezone(&Utc)));
        }
    }

    parse_naive(trimmed)
}

/// Resolve Unix epoch milliseconds into local wall-clock time.
#[must_use]
pub fn timestamp_from_millis(millis: i64, zone: ViewerZone) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|instant| zone.to_local(instant))
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// The `date` field of a reservation.
///
/// Keeps the text exactly as received (used for search and for display of
/// unparseable values) next to the parsed local timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservationDate {
    raw: String,
    local: Option<NaiveDateTime>,
}

impl ReservationDate {
    /// Parse raw text in the given zone.
    pub fn parse(raw: impl Into<String>, zone: ViewerZone) -> Self {
        let raw = raw.into();
        let local = parse_timestamp(&raw, zone);
        Self { raw, local }
    }

    /// Build from epoch milliseconds (numeric payload values).
    #[must_use]
    pub fn from_epoch_millis(millis: i64, zone: ViewerZone) -> Self {
        Self {
            raw: millis.to_string(),
            local: timestamp_from_millis(millis, zone),
        }
    }

    /// Build from an already-resolved local timestamp.
    #[must_use]
    pub fn from_local(local: NaiveDateTime) -> Self {
        Self {
            raw: local.format("%Y-%m-%dT%H:%M:%S").to_string(),
            local: Some(local),
        }
    }

    /// Text as received from the remote source.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed local wall-clock time, `None` when unparseable.
    #[must_use]
    pub const fn local(&self) -> Option<NaiveDateTime> {
        self.local
    }

    /// Local calendar day, `None` when unparseable.
    #[must_use]
    pub fn calendar_day(&self) -> Option<NaiveDate> {
        self.local.map(|dt| dt.date())
    }

    /// Whether the raw text could be parsed.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.local.is_some()
    }
}

impl fmt::Display for ReservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for ReservationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
