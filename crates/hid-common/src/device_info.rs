//! Identity a device reports at discovery time

use serde::{Deserialize, Serialize};

/// Transport/interface string reported by HID devices.
pub const HID_INTERFACE: &str = "HID";

/// What a connected device tells the host about itself.
///
/// Only `transport`, `vendor_id` and `product_id` take part in matching; the
/// remaining fields are descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub transport: String,
    pub vendor_id: u16,
    pub product_id: u16,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl DeviceIdentity {
    pub fn new(transport: impl Into<String>, vendor_id: u16, product_id: u16) -> Self {
        Self {
            transport: transport.into(),
            vendor_id,
            product_id,
            serial_number: None,
            manufacturer: None,
            product_name: None,
            path: None,
        }
    }

    /// Identity of a device on the HID interface.
    pub fn hid(vendor_id: u16, product_id: u16) -> Self {
        Self::new(HID_INTERFACE, vendor_id, product_id)
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn has_ids(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }

    pub fn display_name(&self) -> String {
        self.product_name
            .clone()
            .or_else(|| self.manufacturer.clone())
            .unwrap_or_else(|| format!("{:04x}:{:04x}", self.vendor_id, self.product_id))
    }
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self::hid(0, 0)
    }
}
