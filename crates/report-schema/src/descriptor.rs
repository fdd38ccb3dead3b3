//! Per-control layout metadata.

use crate::transform::{AxisTransform, DiscreteRange};
use openpad_hid_common::{RawReport, field_end_bit, field_max};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Widest field an axis or integer control may use.
pub const MAX_NUMERIC_BITS: u8 = 16;

/// Role a control plays for the host's input model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlLayout {
    /// Digital button backed by one bit.
    Button,
    /// Button pressed when a shared field falls in a numeric range.
    DiscreteButton,
    /// Composite direction pad reporting its raw hat value.
    Dpad,
    /// Analog axis or half-axis of a stick.
    Axis,
    /// Analog button such as a trigger.
    AnalogButton,
}

/// How the extracted field becomes a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueKind {
    /// 1 when the bit is set, otherwise 0.
    BitFlag,
    /// 1 when the field falls in the range, otherwise 0.
    DiscreteButton(DiscreteRange),
    /// Float produced by an [`AxisTransform`].
    NormalizedAxis(AxisTransform),
    /// The field value itself.
    Integer,
}

impl ValueKind {
    /// Bit flags own their bits; every other kind may alias a shared field.
    pub fn can_alias(&self) -> bool {
        !matches!(self, Self::BitFlag)
    }
}

/// One logical control of a report layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControlDescriptor {
    pub name: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Cow<'static, str>>,
    pub layout: ControlLayout,
    pub byte_offset: usize,
    #[serde(default)]
    pub bit_offset: u8,
    #[serde(default = "byte_width")]
    pub bit_width: u8,
    pub value_kind: ValueKind,
    /// Raw field value at rest, used to build neutral reports.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub default_state: u32,
}

fn byte_width() -> u8 {
    8
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl ControlDescriptor {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        layout: ControlLayout,
        byte_offset: usize,
        bit_offset: u8,
        bit_width: u8,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            layout,
            byte_offset,
            bit_offset,
            bit_width,
            value_kind,
            default_state: 0,
        }
    }

    /// Digital button on a single bit.
    pub fn button(name: impl Into<Cow<'static, str>>, byte_offset: usize, bit: u8) -> Self {
        Self::new(
            name,
            ControlLayout::Button,
            byte_offset,
            bit,
            1,
            ValueKind::BitFlag,
        )
    }

    /// Range-decoded button over a shared field.
    pub fn discrete(
        name: impl Into<Cow<'static, str>>,
        byte_offset: usize,
        bit_offset: u8,
        bit_width: u8,
        range: DiscreteRange,
    ) -> Self {
        Self::new(
            name,
            ControlLayout::DiscreteButton,
            byte_offset,
            bit_offset,
            bit_width,
            ValueKind::DiscreteButton(range),
        )
    }

    /// Axis over a whole byte.
    pub fn axis(
        name: impl Into<Cow<'static, str>>,
        byte_offset: usize,
        transform: AxisTransform,
    ) -> Self {
        Self::new(
            name,
            ControlLayout::Axis,
            byte_offset,
            0,
            8,
            ValueKind::NormalizedAxis(transform),
        )
    }

    pub fn with_display_name(mut self, display_name: impl Into<Cow<'static, str>>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_layout(mut self, layout: ControlLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_default_state(mut self, default_state: u32) -> Self {
        self.default_state = default_state;
        self
    }

    /// Composite this control belongs to, e.g. `dpad` for `dpad/up`.
    pub fn group(&self) -> Option<&str> {
        self.name.split_once('/').map(|(group, _)| group)
    }

    pub fn field_max(&self) -> u32 {
        field_max(self.bit_width)
    }

    /// First bit past the field, counted from the start of the report.
    pub fn end_bit(&self) -> Option<usize> {
        field_end_bit(self.byte_offset, self.bit_offset, self.bit_width)
    }

    pub(crate) fn start_bit(&self) -> usize {
        self.byte_offset
            .saturating_mul(8)
            .saturating_add(usize::from(self.bit_offset))
    }

    /// Same field, and both kinds allowed to share it.
    pub fn is_alias_of(&self, other: &Self) -> bool {
        self.byte_offset == other.byte_offset
            && self.bit_offset == other.bit_offset
            && self.bit_width == other.bit_width
            && self.value_kind.can_alias()
            && other.value_kind.can_alias()
    }

    /// Raw field value in `report`; zero when the field does not fit.
    pub fn read_raw(&self, report: &RawReport) -> u32 {
        report
            .read_bits(self.byte_offset, self.bit_offset, self.bit_width)
            .unwrap_or_default()
    }

    /// Decoded value of this control. Total for validated descriptors.
    pub fn decode(&self, report: &RawReport) -> f32 {
        let raw = self.read_raw(report);
        match &self.value_kind {
            ValueKind::BitFlag => flag(raw != 0),
            ValueKind::DiscreteButton(range) => flag(range.contains(raw)),
            ValueKind::Integer => f32::from(saturate_u16(raw)),
            ValueKind::NormalizedAxis(axis) => {
                axis.apply(saturate_u16(raw), saturate_u16(self.field_max()))
            }
        }
    }
}

fn flag(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}

fn saturate_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn button_reads_single_bit() {
        let east = ControlDescriptor::button("buttonEast", 8, 0);
        let mut report = RawReport::zeroed();
        assert!(east.decode(&report).abs() < EPS);

        report.set_bit(8, 0, true);
        assert!((east.decode(&report) - 1.0).abs() < EPS);

        report.set_byte(8, 0xFE);
        assert!(east.decode(&report).abs() < EPS);
    }

    #[test]
    fn discrete_reads_low_nibble_only() {
        let right = ControlDescriptor::discrete("dpad/right", 1, 0, 4, DiscreteRange::new(1, 3));
        let mut report = RawReport::zeroed();
        report.set_byte(1, 0xF2);
        assert!((right.decode(&report) - 1.0).abs() < EPS);
    }

    #[test]
    fn integer_passes_field_through() {
        let dpad = ControlDescriptor::new("dpad", ControlLayout::Dpad, 1, 0, 4, ValueKind::Integer);
        let mut report = RawReport::zeroed();
        report.set_byte(1, 0x38);
        assert!((dpad.decode(&report) - 8.0).abs() < EPS);
    }

    #[test]
    fn axis_uses_field_width() {
        let wide = ControlDescriptor::new(
            "wide",
            ControlLayout::Axis,
            2,
            0,
            16,
            ValueKind::NormalizedAxis(AxisTransform::UNIT),
        );
        let mut report = RawReport::zeroed();
        report.set_byte(2, 0xFF).set_byte(3, 0xFF);
        assert!((wide.decode(&report) - 1.0).abs() < EPS);

        report.set_byte(3, 0x00);
        assert!((wide.decode(&report) - 255.0 / 65535.0).abs() < EPS);
    }

    #[test]
    fn group_is_prefix_before_slash() {
        let up = ControlDescriptor::discrete("dpad/up", 1, 0, 4, DiscreteRange::new(0, 0));
        assert_eq!(up.group(), Some("dpad"));
        assert_eq!(ControlDescriptor::button("start", 9, 3).group(), None);
    }

    #[test]
    fn aliasing_requires_same_field_and_aliasable_kinds() {
        let x = ControlDescriptor::axis("leftStick/x", 2, AxisTransform::UNIT);
        let right = ControlDescriptor::axis("leftStick/right", 2, AxisTransform::UNIT.upper_half());
        let y = ControlDescriptor::axis("leftStick/y", 3, AxisTransform::UNIT);
        let flag = ControlDescriptor::new("flag", ControlLayout::Button, 2, 0, 8, ValueKind::BitFlag);

        assert!(x.is_alias_of(&right));
        assert!(!x.is_alias_of(&y));
        assert!(!x.is_alias_of(&flag));
    }

    #[test]
    fn json_shape() -> Result<(), serde_json::Error> {
        let select = ControlDescriptor::button("select", 9, 2).with_display_name("Share");
        let json = serde_json::to_value(&select)?;
        assert_eq!(
            json,
            serde_json::json!({
                "name": "select",
                "display_name": "Share",
                "layout": "button",
                "byte_offset": 9,
                "bit_offset": 2,
                "bit_width": 1,
                "value_kind": { "kind": "bit_flag" }
            })
        );

        let back: ControlDescriptor = serde_json::from_value(json)?;
        assert_eq!(back, select);
        Ok(())
    }
}
