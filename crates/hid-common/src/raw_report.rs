//! Fixed-size raw input report
//!
//! Every report handled by OpenPad layouts is exactly [`REPORT_LEN`] bytes.
//! Byte 0 carries the report ID on transports that send one; the remaining
//! bytes carry control data. Length is checked once, when the report is built,
//! so decoding from a [`RawReport`] never has to fail.

use crate::{HidCommonError, HidCommonResult, read_bits, write_bits};

/// Size of a raw input report in bytes, report ID included.
pub const REPORT_LEN: usize = 32;

/// Size of the control payload that follows the report ID byte.
pub const PAYLOAD_LEN: usize = REPORT_LEN - 1;

/// FourCC-style format tag carried by HID input reports.
pub const HID_FORMAT: &str = "HID";

/// One raw input report, exactly [`REPORT_LEN`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawReport {
    bytes: [u8; REPORT_LEN],
}

impl RawReport {
    pub const fn new(bytes: [u8; REPORT_LEN]) -> Self {
        Self { bytes }
    }

    pub const fn zeroed() -> Self {
        Self {
            bytes: [0u8; REPORT_LEN],
        }
    }

    /// Build a report from a payload whose transport stripped the report ID.
    ///
    /// The payload lands at bytes 1.. and byte 0 is left at zero.
    pub fn from_payload(payload: &[u8]) -> HidCommonResult<Self> {
        if payload.len() != PAYLOAD_LEN {
            return Err(HidCommonError::InvalidReportSize {
                expected: PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let mut bytes = [0u8; REPORT_LEN];
        if let Some(dst) = bytes.get_mut(1..) {
            dst.copy_from_slice(payload);
        }
        Ok(Self { bytes })
    }

    pub fn report_id(&self) -> u8 {
        self.bytes.first().copied().unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8; REPORT_LEN] {
        &self.bytes
    }

    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Overwrite one byte. Writes past the end leave the report unchanged;
    /// use [`RawReport::write_bits`] when the caller needs to know.
    pub fn set_byte(&mut self, offset: usize, value: u8) -> &mut Self {
        if let Some(byte) = self.bytes.get_mut(offset) {
            *byte = value;
        }
        self
    }

    /// Set or clear one bit. An offset past the end or a `bit` above 7 leaves
    /// the report unchanged; use [`RawReport::write_bits`] when the caller
    /// needs to know.
    pub fn set_bit(&mut self, offset: usize, bit: u8, value: bool) -> &mut Self {
        let _written = write_bits(&mut self.bytes, offset, bit, 1, u32::from(value));
        self
    }

    /// Read a bit field; `None` when it does not fit inside the report.
    pub fn read_bits(&self, byte_offset: usize, bit_offset: u8, bit_width: u8) -> Option<u32> {
        read_bits(&self.bytes, byte_offset, bit_offset, bit_width)
    }

    /// Write a bit field; `None` (and no change) when it does not fit.
    pub fn write_bits(
        &mut self,
        byte_offset: usize,
        bit_offset: u8,
        bit_width: u8,
        value: u32,
    ) -> Option<()> {
        write_bits(&mut self.bytes, byte_offset, bit_offset, bit_width, value)
    }
}

impl Default for RawReport {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<[u8; REPORT_LEN]> for RawReport {
    fn from(bytes: [u8; REPORT_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for RawReport {
    type Error = HidCommonError;

    fn try_from(data: &[u8]) -> HidCommonResult<Self> {
        let bytes: [u8; REPORT_LEN] =
            data.try_into()
                .map_err(|_wrong_len| HidCommonError::InvalidReportSize {
                    expected: REPORT_LEN,
                    actual: data.len(),
                })?;
        Ok(Self { bytes })
    }
}

impl AsRef<[u8]> for RawReport {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
