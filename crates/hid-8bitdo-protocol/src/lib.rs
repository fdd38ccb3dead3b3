//! HID report layout and device identification for the 8BitDo SN30 Pro.
//!
//! 8BitDo (Shenzhen 8BitDo Tech Co., Ltd.) uses VID `0x2DC8`. In HID mode the
//! SN30 Pro enumerates as PID `0x6101` and sends 32-byte input reports.
//!
//! ## Design
//! The controller is described entirely by a control table
//! ([`sn30_pro_controls`]); decoding goes through the generic
//! [`openpad_report_schema::ReportLayout::decode`]. The crate adds no I/O of
//! its own. [`Sn30ProState`] is an optional typed view over the decoded
//! values.
//!
//! The d-pad is a 4-bit hat: `0` up, then clockwise in steps of 45 degrees,
//! `8` neutral. Each arrow control covers three hat values, so a diagonal
//! presses both neighbouring arrows.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod ids;
pub mod layout;
pub mod report;
pub mod types;

pub use ids::{PID_SN30_PRO, VENDOR_ID, is_8bitdo, is_sn30_pro, sn30_pro_matcher};
pub use layout::{LAYOUT_NAME, controls, layout_config, register, sn30_pro_controls, sn30_pro_layout};
pub use report::{DPAD_NEUTRAL, PRODUCT_NAME, REPORT_LEN, STICK_CENTER};
pub use types::{DpadDirection, Sn30ProButtons, Sn30ProState, StickState};
