//! Table-driven decoding of fixed-size HID input reports.
//!
//! A [`ReportLayout`] is a list of [`ControlDescriptor`] records, each naming
//! one logical control and describing where its bits live and how to turn them
//! into a number. A single generic routine walks the table, so supporting a new
//! controller means writing a new table (or a JSON layout file), not new code.
//!
//! ## Design
//! Layouts are validated once, when built or loaded, and are immutable after
//! that. Decoding is pure: it reads a [`RawReport`], keeps no caches, and
//! cannot fail, so one layout can be shared freely across threads.
//!
//! Devices are bound to layouts through an explicit [`LayoutRegistry`] the
//! host builds at startup; there is no global registration.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod descriptor;
pub mod layout;
pub mod registry;
pub mod state;
pub mod transform;
mod validate;

pub use descriptor::{ControlDescriptor, ControlLayout, ValueKind};
pub use layout::ReportLayout;
pub use registry::{BindingState, DeviceBinding, LayoutConfig, LayoutRegistry, RegisteredLayout};
pub use state::DecodedState;
pub use transform::{AxisTransform, DiscreteRange};

pub use openpad_hid_common::{
    DeviceIdentity, DeviceMatcher, HID_FORMAT, HidCommonError, REPORT_LEN, RawReport,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Report error: {0}")]
    Report(#[from] HidCommonError),

    #[error("Layout {0} defines no controls")]
    EmptyLayout(String),

    #[error("Duplicate control name: {0}")]
    DuplicateControl(String),

    #[error("Control {name} ends at bit {end_bit}, past the {report_bits}-bit report")]
    ControlOutOfBounds {
        name: String,
        end_bit: usize,
        report_bits: usize,
    },

    #[error("Control {name} has unsupported bit width {bit_width}")]
    InvalidBitWidth { name: String, bit_width: u8 },

    #[error("Control {name} has bit offset {bit_offset}; must be below 8")]
    InvalidBitOffset { name: String, bit_offset: u8 },

    #[error("Control {name}: discrete value {value} does not fit a {bit_width}-bit field")]
    DiscreteRangeOutOfField {
        name: String,
        value: u32,
        bit_width: u8,
    },

    #[error("Control {name} has invalid clamp window [{min}, {max}]")]
    InvalidClampWindow { name: String, min: f32, max: f32 },

    #[error("Control {name} has non-finite normalization parameters")]
    InvalidNormalization { name: String },

    #[error("Controls {first} and {second} overlap without aliasing the same field")]
    OverlappingControls { first: String, second: String },

    #[error("Layout already registered: {0}")]
    DuplicateLayout(String),

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    #[error("Layout configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchemaError::OverlappingControls {
            first: "buttonEast".to_string(),
            second: "buttonSouth".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Controls buttonEast and buttonSouth overlap without aliasing the same field"
        );

        let err = SchemaError::from(HidCommonError::InvalidReportSize {
            expected: 32,
            actual: 31,
        });
        assert_eq!(
            err.to_string(),
            "Report error: Invalid report size: expected 32, got 31"
        );
    }
}
