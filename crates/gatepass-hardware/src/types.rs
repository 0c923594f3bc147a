//! Common types shared across hardware device implementations.

use serde::{Deserialize, Serialize};

/// Generic device information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device name (e.g., "MFRC522", "MockReader").
    pub name: String,

    /// Device model identifier.
    pub model: String,

    /// Optional firmware version string.
    pub firmware_version: Option<String>,
}

impl DeviceInfo {
    /// Create a new DeviceInfo with required fields.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            firmware_version: None,
        }
    }

    /// Set the firmware version.
    pub fn with_firmware_version(mut self, firmware_version: impl Into<String>) -> Self {
        self.firmware_version = Some(firmware_version.into());
        self
    }
}

/// Colors for the RGB status indicator.
///
/// Each registered participant carries an indicator color; rejection and
/// no-pass outcomes use fixed colors. `Custom` covers arbitrary RGB triples
/// coming from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum LedColor {
    /// Indicator off.
    Off,

    /// Red (rejected scans).
    Red,

    /// Green.
    Green,

    /// Blue.
    Blue,

    /// White (no-pass scans).
    White,

    /// Custom RGB color (red, green, blue).
    Custom(u8, u8, u8),
}

impl LedColor {
    /// Create a custom RGB color.
    ///
    /// Triples that match a named color collapse to it, so colors loaded
    /// from configuration compare equal to the named constants.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        match (r, g, b) {
            (0, 0, 0) => Self::Off,
            (255, 0, 0) => Self::Red,
            (0, 255, 0) => Self::Green,
            (0, 0, 255) => Self::Blue,
            (255, 255, 255) => Self::White,
            _ => Self::Custom(r, g, b),
        }
    }

    /// Get the RGB components of the color.
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Off => (0, 0, 0),
            Self::Red => (255, 0, 0),
            Self::Green => (0, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::White => (255, 255, 255),
            Self::Custom(r, g, b) => (*r, *g, *b),
        }
    }

    /// Returns `true` if the indicator is off.
    pub fn is_off(&self) -> bool {
        self.as_rgb() == (0, 0, 0)
    }
}

impl From<[u8; 3]> for LedColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}
