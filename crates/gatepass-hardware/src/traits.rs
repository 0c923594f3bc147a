//! Hardware device trait definitions.
//!
//! These traits establish the contract between the scan loop and its
//! peripherals (tag reader, RGB indicator), enabling substitution between
//! mock and real hardware implementations.
//!
//! All traits use native `async fn` methods (Edition 2024 RPITIT) and are
//! therefore not object-safe; consume them through generic type parameters.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::types::{DeviceInfo, LedColor};
use gatepass_core::TagUid;

/// A single tag read produced by a reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagScan {
    /// Canonical UID of the scanned tag.
    pub uid: TagUid,

    /// When the tag was read.
    pub read_at: chrono::DateTime<chrono::Utc>,
}

impl TagScan {
    /// Create a scan stamped with the current time.
    pub fn new(uid: TagUid) -> Self {
        Self {
            uid,
            read_at: chrono::Utc::now(),
        }
    }

    /// Create a scan with an explicit timestamp (tests, replay).
    pub fn at(uid: TagUid, read_at: chrono::DateTime<chrono::Utc>) -> Self {
        Self { uid, read_at }
    }
}

/// Tag reader device abstraction.
///
/// Represents an RFID/NFC reader that detects tags in its field and yields
/// one [`TagScan`] per presentation.
///
/// # Examples
///
/// ```no_run
/// use gatepass_hardware::traits::TagReader;
/// use gatepass_hardware::error::Result;
///
/// async fn wait_for_tag<R: TagReader>(reader: &mut R) -> Result<String> {
///     let scan = reader.next_scan().await?;
///     Ok(scan.uid.to_string())
/// }
/// ```
pub trait TagReader: Send + Sync {
    /// Wait for the next tag presentation.
    ///
    /// Blocks asynchronously until a tag enters the reader's field.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The device is disconnected
    /// - A communication error occurs
    async fn next_scan(&mut self) -> Result<TagScan>;

    /// Get device information.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while querying
    /// device information.
    async fn device_info(&self) -> Result<DeviceInfo>;
}

/// RGB indicator abstraction.
///
/// One color is shown per scan outcome, held by the caller for a dwell
/// interval, then cleared. The indicator carries no access-control logic.
pub trait Indicator: Send + Sync {
    /// Display a color.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be driven.
    async fn show(&mut self, color: LedColor) -> Result<()>;

    /// Turn the indicator off.
    ///
    /// Equivalent to `show(LedColor::Off)`; provided separately so
    /// implementations can release PWM channels when idle.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be driven.
    async fn clear(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_scan_carries_uid() {
        let uid: TagUid = "35 F2 B3 02".parse().unwrap();
        let scan = TagScan::new(uid.clone());
        assert_eq!(scan.uid, uid);
    }

    #[test]
    fn test_tag_scan_explicit_timestamp() {
        use chrono::TimeZone;

        let uid: TagUid = "AA".parse().unwrap();
        let at = chrono::Utc.with_ymd_and_hms(2025, 1, 15, 12, 30, 0).unwrap();
        let scan = TagScan::at(uid, at);
        assert_eq!(scan.read_at, at);
    }
}
