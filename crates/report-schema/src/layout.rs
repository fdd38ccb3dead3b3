//! Validated report layouts and the generic decode routine.

use crate::descriptor::ControlDescriptor;
use crate::state::DecodedState;
use crate::validate::validate_controls;
use crate::{SchemaError, SchemaResult, ValueKind};
use openpad_hid_common::{HID_FORMAT, RawReport};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A named table of controls describing one report format.
///
/// Construction validates the table, including deserialization; afterwards
/// the layout is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReportLayoutDef")]
pub struct ReportLayout {
    name: String,
    format: String,
    report_id: Option<u8>,
    controls: Vec<ControlDescriptor>,
}

/// Wire shape of a layout before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ReportLayoutDef {
    name: String,
    #[serde(default = "default_format")]
    format: String,
    #[serde(default)]
    report_id: Option<u8>,
    controls: Vec<ControlDescriptor>,
}

fn default_format() -> String {
    HID_FORMAT.to_string()
}

impl TryFrom<ReportLayoutDef> for ReportLayout {
    type Error = SchemaError;

    fn try_from(def: ReportLayoutDef) -> SchemaResult<Self> {
        let layout = Self {
            name: def.name,
            format: def.format,
            report_id: def.report_id,
            controls: def.controls,
        };
        layout.validate()?;
        Ok(layout)
    }
}

impl ReportLayout {
    pub fn new(name: impl Into<String>, controls: Vec<ControlDescriptor>) -> SchemaResult<Self> {
        let layout = Self {
            name: name.into(),
            format: default_format(),
            report_id: None,
            controls,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Expect a specific value in byte 0. Informational only: decoding
    /// ignores byte 0 either way.
    pub fn with_report_id(mut self, report_id: u8) -> Self {
        self.report_id = Some(report_id);
        self
    }

    pub fn validate(&self) -> SchemaResult<()> {
        validate_controls(&self.name, &self.controls).inspect_err(|err| {
            warn!(layout = %self.name, error = %err, "rejected report layout");
        })
    }

    /// Load and validate a layout from JSON.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        // Parse the raw shape first so validation failures keep their variant.
        let def: ReportLayoutDef = serde_json::from_str(json).inspect_err(|err| {
            warn!(error = %err, "failed to parse report layout");
        })?;
        let layout = Self::try_from(def)?;
        debug!(
            layout = %layout.name,
            controls = layout.controls.len(),
            "loaded report layout"
        );
        Ok(layout)
    }

    pub fn to_json_pretty(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn report_id(&self) -> Option<u8> {
        self.report_id
    }

    pub fn controls(&self) -> &[ControlDescriptor] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn control(&self, name: &str) -> Option<&ControlDescriptor> {
        self.controls.iter().find(|c| c.name == name)
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.controls.iter().position(|c| c.name == name)
    }

    /// Whether byte 0 carries the expected report ID (always true when the
    /// layout does not name one).
    pub fn accepts(&self, report: &RawReport) -> bool {
        self.report_id
            .is_none_or(|expected| report.report_id() == expected)
    }

    /// Decode every control of the table from `report`.
    pub fn decode(&self, report: &RawReport) -> DecodedState<'_> {
        let values = self.controls.iter().map(|c| c.decode(report)).collect();
        DecodedState::new(self, values)
    }

    /// A report with every control at its rest state.
    pub fn neutral_report(&self) -> RawReport {
        let mut report = RawReport::zeroed();
        if let Some(id) = self.report_id {
            report.set_byte(0, id);
        }
        // Every layout is validated on construction, so each field and its
        // default state fit the report.
        for control in self.controls.iter().filter(|c| c.default_state != 0) {
            let _fits = report.write_bits(
                control.byte_offset,
                control.bit_offset,
                control.bit_width,
                control.default_state,
            );
        }
        report
    }

    /// Names of the controls that read their value through a range or flag.
    pub fn button_names(&self) -> impl Iterator<Item = &str> {
        self.controls
            .iter()
            .filter(|c| {
                matches!(
                    c.value_kind,
                    ValueKind::BitFlag | ValueKind::DiscreteButton(_)
                )
            })
            .map(|c| c.name.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ControlLayout;
    use crate::transform::{AxisTransform, DiscreteRange};

    fn small_layout() -> SchemaResult<ReportLayout> {
        ReportLayout::new(
            "small",
            vec![
                ControlDescriptor::new("hat", ControlLayout::Dpad, 1, 0, 4, ValueKind::Integer)
                    .with_default_state(8),
                ControlDescriptor::discrete("hat/up", 1, 0, 4, DiscreteRange::wrapping(7, 1, 8, 7)),
                ControlDescriptor::axis("x", 2, AxisTransform::UNIT).with_default_state(0x80),
                ControlDescriptor::button("fire", 3, 5),
            ],
        )
    }

    #[test]
    fn new_validates() {
        let result = ReportLayout::new(
            "bad",
            vec![
                ControlDescriptor::button("a", 3, 0),
                ControlDescriptor::button("a", 3, 1),
            ],
        );
        assert!(matches!(result, Err(SchemaError::DuplicateControl(_))));
    }

    #[test]
    fn decode_yields_one_value_per_control() -> SchemaResult<()> {
        let layout = small_layout()?;
        let mut report = RawReport::zeroed();
        report.set_byte(1, 0x01).set_byte(2, 0xFF).set_bit(3, 5, true);

        let state = layout.decode(&report);
        assert_eq!(state.len(), layout.len());
        assert_eq!(state.get("hat"), Some(1.0));
        assert_eq!(state.get("hat/up"), Some(1.0));
        assert_eq!(state.get("x"), Some(1.0));
        assert_eq!(state.get("fire"), Some(1.0));
        assert_eq!(state.get("missing"), None);
        Ok(())
    }

    #[test]
    fn neutral_report_writes_defaults() -> SchemaResult<()> {
        let layout = small_layout()?.with_report_id(0x03);
        let report = layout.neutral_report();
        assert_eq!(report.byte(0), Some(0x03));
        assert_eq!(report.byte(1), Some(0x08));
        assert_eq!(report.byte(2), Some(0x80));
        assert_eq!(report.byte(3), Some(0x00));

        let state = layout.decode(&report);
        assert_eq!(state.get("hat/up"), Some(0.0));
        Ok(())
    }

    #[test]
    fn accepts_checks_report_id_when_set() -> SchemaResult<()> {
        let layout = small_layout()?;
        let mut report = RawReport::zeroed();
        report.set_byte(0, 0x11);
        assert!(layout.accepts(&report));

        let layout = layout.with_report_id(0x01);
        assert!(!layout.accepts(&report));
        report.set_byte(0, 0x01);
        assert!(layout.accepts(&report));
        Ok(())
    }

    #[test]
    fn json_round_trip_keeps_layout() -> SchemaResult<()> {
        let layout = small_layout()?;
        let json = layout.to_json_pretty()?;
        let loaded = ReportLayout::from_json(&json)?;
        assert_eq!(loaded, layout);
        assert_eq!(loaded.format(), "HID");
        Ok(())
    }

    #[test]
    fn from_json_validates() {
        let json = r#"{
            "name": "overlap",
            "controls": [
                {"name": "a", "layout": "button", "byte_offset": 8, "bit_width": 1, "value_kind": {"kind": "bit_flag"}},
                {"name": "b", "layout": "axis", "byte_offset": 8, "value_kind": {"kind": "normalized_axis"}}
            ]
        }"#;
        assert!(matches!(
            ReportLayout::from_json(json),
            Err(SchemaError::OverlappingControls { .. })
        ));
    }

    #[test]
    fn from_json_reports_syntax_errors() {
        assert!(matches!(
            ReportLayout::from_json("{\"name\": "),
            Err(SchemaError::Config(_))
        ));
    }

    #[test]
    fn neutral_report_holds_every_default_state() -> SchemaResult<()> {
        let layout = small_layout()?;
        let report = layout.neutral_report();
        for control in layout.controls() {
            assert_eq!(
                control.read_raw(&report),
                control.default_state,
                "{}",
                control.name
            );
        }
        Ok(())
    }

    #[test]
    fn serde_deserialize_validates() {
        let json = r#"{
            "name": "past-end",
            "controls": [
                {"name": "x", "layout": "axis", "byte_offset": 40, "value_kind": {"kind": "normalized_axis"}}
            ]
        }"#;
        assert!(matches!(serde_json::from_str::<ReportLayout>(json), Err(_)));
        assert!(matches!(
            ReportLayout::from_json(json),
            Err(SchemaError::ControlOutOfBounds { .. })
        ));
    }

    #[test]
    fn button_names_skip_axes() -> SchemaResult<()> {
        let layout = small_layout()?;
        let names: Vec<&str> = layout.button_names().collect();
        assert_eq!(names, vec!["hat/up", "fire"]);
        Ok(())
    }
}
