//! Decoded control values for one report.

use crate::layout::ReportLayout;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Value at or above which a button-like control counts as pressed.
pub const PRESS_POINT: f32 = 0.5;

/// One value per control of the layout that produced it, in table order.
///
/// Built fresh by [`ReportLayout::decode`] and never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedState<'a> {
    layout: &'a ReportLayout,
    values: Vec<f32>,
}

impl<'a> DecodedState<'a> {
    pub(crate) fn new(layout: &'a ReportLayout, values: Vec<f32>) -> Self {
        Self { layout, values }
    }

    pub fn layout(&self) -> &'a ReportLayout {
        self.layout
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.layout
            .index_of(name)
            .and_then(|index| self.values.get(index).copied())
    }

    pub fn is_pressed(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| value >= PRESS_POINT)
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f32)> + '_ {
        self.layout
            .controls()
            .iter()
            .map(|c| c.name.as_ref())
            .zip(self.values.iter().copied())
    }

    /// Names of the controls that differ from `other` (same layout assumed).
    pub fn changed_from<'s>(&'s self, other: &'s DecodedState<'_>) -> impl Iterator<Item = &'a str> + 's {
        self.iter()
            .zip(other.values.iter())
            .filter(|((_, value), previous)| value.to_bits() != previous.to_bits())
            .map(|((name, _), _)| name)
    }
}

impl Serialize for DecodedState<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::ControlDescriptor;
    use crate::transform::AxisTransform;
    use crate::{RawReport, ReportLayout, SchemaResult};

    fn layout() -> SchemaResult<ReportLayout> {
        ReportLayout::new(
            "pair",
            vec![
                ControlDescriptor::button("a", 8, 0),
                ControlDescriptor::axis("t", 6, AxisTransform::UNIT),
            ],
        )
    }

    #[test]
    fn is_pressed_uses_press_point() -> SchemaResult<()> {
        let layout = layout()?;
        let mut report = RawReport::zeroed();
        report.set_bit(8, 0, true).set_byte(6, 0x7F);

        let state = layout.decode(&report);
        assert!(state.is_pressed("a"));
        assert!(!state.is_pressed("t"));
        assert!(!state.is_pressed("missing"));

        report.set_byte(6, 0x80);
        assert!(layout.decode(&report).is_pressed("t"));
        Ok(())
    }

    #[test]
    fn iter_follows_table_order() -> SchemaResult<()> {
        let layout = layout()?;
        let state = layout.decode(&RawReport::zeroed());
        let names: Vec<&str> = state.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "t"]);
        Ok(())
    }

    #[test]
    fn changed_from_lists_differences() -> SchemaResult<()> {
        let layout = layout()?;
        let before = layout.decode(&RawReport::zeroed());
        let mut report = RawReport::zeroed();
        report.set_byte(6, 0x10);
        let after = layout.decode(&report);

        let changed: Vec<&str> = after.changed_from(&before).collect();
        assert_eq!(changed, vec!["t"]);
        assert_eq!(before.changed_from(&before).count(), 0);
        Ok(())
    }

    #[test]
    fn serializes_as_object() -> SchemaResult<()> {
        let layout = layout()?;
        let mut report = RawReport::zeroed();
        report.set_bit(8, 0, true).set_byte(6, 0xFF);

        let json = serde_json::to_string(&layout.decode(&report))?;
        assert_eq!(json, r#"{"a":1.0,"t":1.0}"#);
        Ok(())
    }
}
