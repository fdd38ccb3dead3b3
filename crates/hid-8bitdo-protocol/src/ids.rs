//! 8BitDo USB vendor and product ID constants.
//!
//! VID `0x2DC8` is assigned to Shenzhen 8BitDo Tech Co., Ltd.

use openpad_hid_common::DeviceMatcher;

/// 8BitDo USB Vendor ID.
pub const VENDOR_ID: u16 = 0x2DC8;

/// SN30 Pro gamepad in its HID (DirectInput) mode.
pub const PID_SN30_PRO: u16 = 0x6101;

/// Returns `true` if the VID/PID pair identifies an SN30 Pro.
pub fn is_sn30_pro(vid: u16, pid: u16) -> bool {
    vid == VENDOR_ID && pid == PID_SN30_PRO
}

/// Returns `true` for any device carrying the 8BitDo vendor ID.
pub fn is_8bitdo(vid: u16) -> bool {
    vid == VENDOR_ID
}

/// Matcher accepting exactly the SN30 Pro on the HID transport.
pub fn sn30_pro_matcher() -> DeviceMatcher {
    DeviceMatcher::hid(VENDOR_ID, PID_SN30_PRO)
}
