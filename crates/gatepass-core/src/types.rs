use crate::{
    Result,
    constants::{DATE_FORMAT, LABEL_ENTRY, LABEL_EXIT, MAX_UID_BYTES, MIN_UID_BYTES, TIME_FORMAT},
    error::Error,
};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical tag identifier.
///
/// A `TagUid` is the normalized form of an RFID tag's unique identifier:
/// uppercase hex byte pairs separated by single spaces (e.g. `"35 F2 B3 02"`).
/// Both construction paths normalize, so comparison is case-insensitive by
/// construction and two `TagUid`s are equal exactly when they denote the
/// same credential.
///
/// # Examples
///
/// ```
/// use gatepass_core::TagUid;
///
/// let from_reader = TagUid::from_bytes(&[0x35, 0xF2, 0xB3, 0x02]).unwrap();
/// let from_config: TagUid = "35 f2 b3 02".parse().unwrap();
/// assert_eq!(from_reader, from_config);
/// assert_eq!(from_reader.as_str(), "35 F2 B3 02");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagUid(String);

impl TagUid {
    /// Create a tag UID from raw reader bytes.
    ///
    /// # Errors
    /// Returns `Error::InvalidTagFormat` if the byte count is outside the
    /// accepted range (1-10 bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if !(MIN_UID_BYTES..=MAX_UID_BYTES).contains(&bytes.len()) {
            return Err(Error::InvalidTagFormat(format!(
                "UID must be {MIN_UID_BYTES}-{MAX_UID_BYTES} bytes, got {}",
                bytes.len()
            )));
        }

        let canonical = bytes
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        Ok(TagUid(canonical))
    }

    /// Parse a tag UID from text.
    ///
    /// Accepts hex byte pairs separated by whitespace (`"35 f2 b3 02"`) or a
    /// contiguous even-length hex string (`"35F2B302"`). The input is
    /// normalized, so case and spacing do not affect equality.
    ///
    /// # Errors
    /// Returns `Error::InvalidTagFormat` if the input is empty, contains
    /// non-hex characters, has an odd-length run, or decodes to a byte count
    /// outside the accepted range.
    pub fn parse(s: &str) -> Result<Self> {
        let mut bytes = Vec::new();
        for token in s.split_whitespace() {
            if !token.is_ascii() {
                return Err(Error::InvalidTagFormat(format!(
                    "Non-ASCII character in UID '{s}'"
                )));
            }
            if token.len() % 2 != 0 {
                return Err(Error::InvalidTagFormat(format!(
                    "Odd-length hex run '{token}' in UID '{s}'"
                )));
            }
            for i in (0..token.len()).step_by(2) {
                let pair = &token[i..i + 2];
                let byte = u8::from_str_radix(pair, 16).map_err(|_| {
                    Error::InvalidTagFormat(format!("Invalid hex pair '{pair}' in UID '{s}'"))
                })?;
                bytes.push(byte);
            }
        }
        Self::from_bytes(&bytes)
    }

    /// Get the canonical UID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bytes in the UID.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.0.split(' ').count()
    }
}

impl fmt::Display for TagUid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TagUid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TagUid::parse(s)
    }
}

/// Access action recorded for a scan.
///
/// The two actions alternate per identity: the first valid scan is an
/// `Entry`, the next an `Exit`, after which the identity's cycle is
/// complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessAction {
    Entry,
    Exit,
}

impl AccessAction {
    /// Wire label for the event record (`"entrada"` / `"salida"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AccessAction::Entry => LABEL_ENTRY,
            AccessAction::Exit => LABEL_EXIT,
        }
    }

    /// The action that follows this one in a valid cycle.
    #[inline]
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            AccessAction::Entry => AccessAction::Exit,
            AccessAction::Exit => AccessAction::Entry,
        }
    }

    /// Returns `true` if the action is an entry.
    #[inline]
    #[must_use]
    pub fn is_entry(self) -> bool {
        matches!(self, AccessAction::Entry)
    }
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccessAction::Entry => write!(f, "Entry"),
            AccessAction::Exit => write!(f, "Exit"),
        }
    }
}

/// Timestamp for the event record (`DD/MM/YYYY` date, `HH:MM:SS` time).
///
/// Wraps a local-clock instant and renders the two wire fields separately,
/// matching the deployed record format.
///
/// # Examples
///
/// ```
/// use gatepass_core::EventTimestamp;
///
/// let ts = EventTimestamp::parse("10/05/2025", "12:46:06").unwrap();
/// assert_eq!(ts.date(), "10/05/2025");
/// assert_eq!(ts.time(), "12:46:06");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTimestamp(DateTime<Local>);

impl EventTimestamp {
    /// Create a timestamp from the current local time.
    #[must_use]
    pub fn now() -> Self {
        EventTimestamp(Local::now())
    }

    /// Create a timestamp from a DateTime instance.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Local>) -> Self {
        EventTimestamp(dt)
    }

    /// Parse from the wire pair: date `"10/05/2025"`, time `"12:46:06"`.
    ///
    /// # Errors
    /// Returns `Error::InvalidTimestamp` if either field does not match its
    /// format, or if the combination is not a valid local time (DST gaps).
    /// Ambiguous local times (DST fall-back) resolve to the earlier
    /// occurrence.
    pub fn parse(date: &str, time: &str) -> Result<Self> {
        let d = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| Error::InvalidTimestamp(format!("Invalid date '{date}': {e}")))?;
        let t = NaiveTime::parse_from_str(time, TIME_FORMAT)
            .map_err(|e| Error::InvalidTimestamp(format!("Invalid time '{time}': {e}")))?;

        let local_dt = Local
            .from_local_datetime(&d.and_time(t))
            .earliest()
            .ok_or_else(|| {
                Error::InvalidTimestamp(format!(
                    "Invalid local time '{date} {time}' (possibly during DST transition)"
                ))
            })?;

        Ok(EventTimestamp(local_dt))
    }

    /// Format the date field (`DD/MM/YYYY`).
    #[must_use]
    pub fn date(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    /// Format the time field (`HH:MM:SS`).
    #[must_use]
    pub fn time(&self) -> String {
        self.0.format(TIME_FORMAT).to_string()
    }

    /// Get the inner DateTime reference.
    #[must_use]
    pub fn inner(&self) -> &DateTime<Local> {
        &self.0
    }
}

impl fmt::Display for EventTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.date(), self.time())
    }
}
