//! Mock RGB indicator implementation for testing and development.

use crate::{Result, traits::Indicator, types::LedColor};
use std::sync::{Arc, Mutex};

/// Shared state between a [`MockIndicator`] and its handle.
#[derive(Debug, Default)]
struct IndicatorState {
    current: Option<LedColor>,
    history: Vec<LedColor>,
}

/// Mock indicator that records every color it displays.
///
/// The paired [`MockIndicatorHandle`] lets tests inspect the current color
/// and the full display history while the scan loop owns the device.
///
/// # Examples
///
/// ```
/// use gatepass_hardware::mock::MockIndicator;
/// use gatepass_hardware::traits::Indicator;
/// use gatepass_hardware::types::LedColor;
///
/// #[tokio::main]
/// async fn main() -> gatepass_hardware::Result<()> {
///     let (mut indicator, handle) = MockIndicator::new();
///
///     indicator.show(LedColor::Green).await?;
///     assert_eq!(handle.current(), Some(LedColor::Green));
///
///     indicator.clear().await?;
///     assert_eq!(handle.current(), Some(LedColor::Off));
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockIndicator {
    state: Arc<Mutex<IndicatorState>>,
}

impl MockIndicator {
    /// Create a new mock indicator and its inspection handle.
    pub fn new() -> (Self, MockIndicatorHandle) {
        let state = Arc::new(Mutex::new(IndicatorState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            MockIndicatorHandle { state },
        )
    }

    fn record(&self, color: LedColor) {
        // Lock never crosses an await point, so a poisoned mutex is the
        // only failure mode; treat it as a test bug.
        let mut state = self.state.lock().expect("indicator state poisoned");
        state.current = Some(color);
        state.history.push(color);
    }
}

impl Indicator for MockIndicator {
    async fn show(&mut self, color: LedColor) -> Result<()> {
        self.record(color);
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        self.record(LedColor::Off);
        Ok(())
    }
}

/// Handle for inspecting a [`MockIndicator`] from tests.
#[derive(Debug, Clone)]
pub struct MockIndicatorHandle {
    state: Arc<Mutex<IndicatorState>>,
}

impl MockIndicatorHandle {
    /// The color currently displayed, or `None` if nothing was shown yet.
    pub fn current(&self) -> Option<LedColor> {
        self.state.lock().expect("indicator state poisoned").current
    }

    /// Every color displayed so far, in order (including clears).
    pub fn history(&self) -> Vec<LedColor> {
        self.state
            .lock()
            .expect("indicator state poisoned")
            .history
            .clone()
    }
}
