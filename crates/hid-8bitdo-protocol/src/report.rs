//! SN30 Pro input report byte map.
//!
//! The controller sends 32-byte reports. Byte 0 is the report ID and is not
//! decoded; bytes 10..32 carry nothing this layout reads.

pub use openpad_hid_common::{HID_FORMAT, REPORT_LEN};

/// Product string the controller reports over USB.
pub const PRODUCT_NAME: &str = "8Bitdo SN30 Pro";

pub const REPORT_ID_OFFSET: usize = 0;
/// Hat switch in bits 0..4; the upper nibble is unused.
pub const DPAD_OFFSET: usize = 1;
pub const LEFT_STICK_X_OFFSET: usize = 2;
pub const LEFT_STICK_Y_OFFSET: usize = 3;
pub const RIGHT_STICK_X_OFFSET: usize = 4;
pub const RIGHT_STICK_Y_OFFSET: usize = 5;
pub const RIGHT_TRIGGER_OFFSET: usize = 6;
pub const LEFT_TRIGGER_OFFSET: usize = 7;
pub const BUTTONS1_OFFSET: usize = 8;
pub const BUTTONS2_OFFSET: usize = 9;

pub const DPAD_BITS: u8 = 4;
/// Hat value with no direction held.
pub const DPAD_NEUTRAL: u8 = 8;
/// Stick byte at rest.
pub const STICK_CENTER: u8 = 0x80;

/// Bit positions in byte 8.
pub mod buttons1 {
    /// Face button labelled "A".
    pub const EAST: u8 = 0;
    /// Face button labelled "B".
    pub const SOUTH: u8 = 1;
    /// Face button labelled "X".
    pub const NORTH: u8 = 3;
    /// Face button labelled "Y".
    pub const WEST: u8 = 4;
    pub const LEFT_SHOULDER: u8 = 6;
    pub const RIGHT_SHOULDER: u8 = 7;
}

/// Bit positions in byte 9.
pub mod buttons2 {
    /// Digital trigger click, independent of the analog trigger byte.
    pub const LEFT_TRIGGER: u8 = 0;
    pub const RIGHT_TRIGGER: u8 = 1;
    /// "Share" on the controller face.
    pub const SELECT: u8 = 2;
    /// "Options" on the controller face.
    pub const START: u8 = 3;
    pub const LEFT_STICK_PRESS: u8 = 5;
    pub const RIGHT_STICK_PRESS: u8 = 6;
}
