//! Common HID plumbing for OpenPad gamepad decoders
//!
//! This crate provides the pieces shared by every report layout: the fixed-size
//! raw report buffer, bit-field access into it, the identity a device reports at
//! discovery time, and the matcher that decides whether a layout applies.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device_info;
pub mod device_matcher;
pub mod hid_traits;
pub mod raw_report;
pub mod report_bits;

pub use device_info::*;
pub use device_matcher::*;
pub use hid_traits::*;
pub use raw_report::*;
pub use report_bits::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("Invalid report size: expected {expected}, got {actual}")]
    InvalidReportSize { expected: usize, actual: usize },

    #[error("Invalid report format: {0}")]
    InvalidReport(String),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to read from device: {0}")]
    ReadError(String),

    #[error("Device disconnected")]
    Disconnected,
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;
