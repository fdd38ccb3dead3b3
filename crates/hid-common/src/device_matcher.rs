//! Exact-identity device matching
//!
//! A [`DeviceMatcher`] is configuration data: the interface string and the
//! vendor/product pair a layout was written for. It never does partial or
//! revision-aware matching; all three fields must be equal.

use crate::{DeviceIdentity, HID_INTERFACE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceMatcher {
    #[serde(default = "default_interface")]
    pub interface: String,
    pub vendor_id: u16,
    pub product_id: u16,
}

fn default_interface() -> String {
    HID_INTERFACE.to_string()
}

impl DeviceMatcher {
    pub fn new(interface: impl Into<String>, vendor_id: u16, product_id: u16) -> Self {
        Self {
            interface: interface.into(),
            vendor_id,
            product_id,
        }
    }

    /// Matcher for a device on the HID interface.
    pub fn hid(vendor_id: u16, product_id: u16) -> Self {
        Self::new(HID_INTERFACE, vendor_id, product_id)
    }

    /// Returns `true` iff transport, vendor ID and product ID are all equal.
    pub fn matches(&self, identity: &DeviceIdentity) -> bool {
        identity.transport == self.interface
            && identity.vendor_id == self.vendor_id
            && identity.product_id == self.product_id
    }
}
