//! Mock tag reader implementation for testing and development.

use crate::{
    Result,
    traits::{TagReader, TagScan},
    types::DeviceInfo,
};
use gatepass_core::TagUid;
use tokio::sync::mpsc;

/// Mock tag reader driven through a channel handle.
///
/// The reader side implements [`TagReader`]; the paired
/// [`MockReaderHandle`] injects tag presentations from tests or from the
/// demo script.
///
/// # Examples
///
/// ```
/// use gatepass_hardware::mock::MockReader;
/// use gatepass_hardware::traits::TagReader;
///
/// #[tokio::main]
/// async fn main() -> gatepass_hardware::Result<()> {
///     let (mut reader, handle) = MockReader::new();
///
///     handle.present_tag(&[0x35, 0xF2, 0xB3, 0x02]).await?;
///
///     let scan = reader.next_scan().await?;
///     assert_eq!(scan.uid.as_str(), "35 F2 B3 02");
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockReader {
    /// Channel receiver for injected scans
    scan_rx: mpsc::Receiver<TagScan>,

    /// Device name
    name: String,
}

impl MockReader {
    /// Create a new mock reader with the default name.
    ///
    /// Returns a tuple of (MockReader, MockReaderHandle); the handle can be
    /// cloned and moved into tasks that simulate tag presentations.
    pub fn new() -> (Self, MockReaderHandle) {
        Self::with_name("Mock Tag Reader".to_string())
    }

    /// Create a new mock reader with a custom name.
    pub fn with_name(name: String) -> (Self, MockReaderHandle) {
        let (scan_tx, scan_rx) = mpsc::channel(32);

        let reader = Self {
            scan_rx,
            name: name.clone(),
        };

        let handle = MockReaderHandle { scan_tx, name };

        (reader, handle)
    }
}

impl TagReader for MockReader {
    async fn next_scan(&mut self) -> Result<TagScan> {
        self.scan_rx
            .recv()
            .await
            .ok_or_else(|| crate::HardwareError::disconnected(self.name.clone()))
    }

    async fn device_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(self.name.clone(), "Mock"))
    }
}

/// Handle for injecting tag presentations into a [`MockReader`].
#[derive(Debug, Clone)]
pub struct MockReaderHandle {
    /// Channel sender for scans
    scan_tx: mpsc::Sender<TagScan>,

    /// Device name
    name: String,
}

impl MockReaderHandle {
    /// Present a tag by raw UID bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not form a valid UID or if the
    /// reader has been dropped.
    pub async fn present_tag(&self, uid_bytes: &[u8]) -> Result<()> {
        let uid = TagUid::from_bytes(uid_bytes)?;
        self.present_uid(uid).await
    }

    /// Present a tag by canonical UID.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader has been dropped and the channel is
    /// closed.
    pub async fn present_uid(&self, uid: TagUid) -> Result<()> {
        self.scan_tx
            .send(TagScan::new(uid))
            .await
            .map_err(|_| crate::HardwareError::disconnected(self.name.clone()))
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_present_and_read() {
        let (mut reader, handle) = MockReader::new();

        handle.present_tag(&[0x04, 0xAB, 0xCD, 0xEF]).await.unwrap();

        let scan = reader.next_scan().await.unwrap();
        assert_eq!(scan.uid.as_str(), "04 AB CD EF");
    }

    #[tokio::test]
    async fn test_scans_arrive_in_order() {
        let (mut reader, handle) = MockReader::new();

        handle.present_tag(&[0x01, 0x02, 0x03, 0x04]).await.unwrap();
        handle.present_tag(&[0x05, 0x06, 0x07, 0x08]).await.unwrap();

        assert_eq!(reader.next_scan().await.unwrap().uid.as_str(), "01 02 03 04");
        assert_eq!(reader.next_scan().await.unwrap().uid.as_str(), "05 06 07 08");
    }

    #[tokio::test]
    async fn test_invalid_uid_rejected() {
        let (_reader, handle) = MockReader::new();

        let result = handle.present_tag(&[]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_after_handle_dropped() {
        let (mut reader, handle) = MockReader::new();
        drop(handle);

        let result = reader.next_scan().await;
        assert!(matches!(
            result,
            Err(crate::HardwareError::Disconnected { .. })
        ));
    }

    #[tokio::test]
    async fn test_handle_clone_feeds_same_reader() {
        let (mut reader, handle) = MockReader::new();
        let handle2 = handle.clone();

        handle.present_tag(&[0x01, 0x02, 0x03, 0x04]).await.unwrap();
        handle2.present_tag(&[0x05, 0x06, 0x07, 0x08]).await.unwrap();

        assert_eq!(reader.next_scan().await.unwrap().uid.as_str(), "01 02 03 04");
        assert_eq!(reader.next_scan().await.unwrap().uid.as_str(), "05 06 07 08");
    }

    #[tokio::test]
    async fn test_device_info() {
        let (reader, _handle) = MockReader::with_name("Front Door".to_string());
        let info = reader.device_info().await.unwrap();
        assert_eq!(info.name, "Front Door");
        assert_eq!(info.model, "Mock");
    }
}
