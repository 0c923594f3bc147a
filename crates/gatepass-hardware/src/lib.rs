//! Hardware device abstraction layer for the gatepass access-control system.
//!
//! This crate provides trait-based seams for the two peripherals the scan
//! loop touches: the tag reader that produces scans and the RGB indicator
//! that renders per-scan feedback. Mock implementations allow development
//! and testing without physical hardware.
//!
//! # Design Philosophy
//!
//! - **Async-first**: device operations are `async fn` in traits (Edition
//!   2024 RPITIT), so a real reader blocking on a radio and a mock reader
//!   blocking on a channel look identical to the caller.
//! - **Generics over trait objects**: RPITIT traits are not object-safe;
//!   consumers take `R: TagReader` / `I: Indicator` type parameters.
//! - **Error-aware**: all operations return [`Result<T>`][error::Result]
//!   with device-level failure detail.
//!
//! # Example
//!
//! ```no_run
//! use gatepass_hardware::traits::{Indicator, TagReader};
//! use gatepass_hardware::types::LedColor;
//! use gatepass_hardware::error::Result;
//!
//! async fn flash_on_scan<R: TagReader, I: Indicator>(
//!     reader: &mut R,
//!     indicator: &mut I,
//! ) -> Result<String> {
//!     let scan = reader.next_scan().await?;
//!     indicator.show(LedColor::Green).await.ok();
//!     Ok(scan.uid.to_string())
//! }
//! ```

pub mod error;
pub mod mock;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{HardwareError, Result};
pub use traits::{Indicator, TagReader, TagScan};
pub use types::{DeviceInfo, LedColor};
