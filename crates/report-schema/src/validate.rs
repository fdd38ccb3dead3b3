//! Structural checks run once when a layout is built or loaded.

use crate::descriptor::{ControlDescriptor, MAX_NUMERIC_BITS, ValueKind};
use crate::{SchemaError, SchemaResult};
use openpad_hid_common::{MAX_FIELD_BITS, REPORT_LEN};
use std::collections::HashSet;

pub(crate) fn validate_controls(layout_name: &str, controls: &[ControlDescriptor]) -> SchemaResult<()> {
    if controls.is_empty() {
        return Err(SchemaError::EmptyLayout(layout_name.to_string()));
    }

    let mut names = HashSet::with_capacity(controls.len());
    for control in controls {
        if !names.insert(control.name.as_ref()) {
            return Err(SchemaError::DuplicateControl(control.name.to_string()));
        }
        validate_control(control)?;
    }

    validate_overlaps(controls)
}

fn validate_control(control: &ControlDescriptor) -> SchemaResult<()> {
    let name = || control.name.to_string();

    if control.bit_offset >= 8 {
        return Err(SchemaError::InvalidBitOffset {
            name: name(),
            bit_offset: control.bit_offset,
        });
    }

    let max_width = match control.value_kind {
        ValueKind::BitFlag => 1,
        ValueKind::DiscreteButton(_) => MAX_FIELD_BITS,
        ValueKind::NormalizedAxis(_) | ValueKind::Integer => MAX_NUMERIC_BITS,
    };
    if control.bit_width == 0 || control.bit_width > max_width {
        return Err(SchemaError::InvalidBitWidth {
            name: name(),
            bit_width: control.bit_width,
        });
    }

    let report_bits = REPORT_LEN * 8;
    let end_bit = control.end_bit().unwrap_or(usize::MAX);
    if end_bit > report_bits {
        return Err(SchemaError::ControlOutOfBounds {
            name: name(),
            end_bit,
            report_bits,
        });
    }

    if control.default_state > control.field_max() {
        return Err(SchemaError::DiscreteRangeOutOfField {
            name: name(),
            value: control.default_state,
            bit_width: control.bit_width,
        });
    }

    match &control.value_kind {
        ValueKind::DiscreteButton(range) => {
            if let Some(value) = range.bounds().find(|v| *v > control.field_max()) {
                return Err(SchemaError::DiscreteRangeOutOfField {
                    name: name(),
                    value,
                    bit_width: control.bit_width,
                });
            }
        }
        ValueKind::NormalizedAxis(axis) => {
            let finite = [
                axis.normalize_min,
                axis.normalize_max,
                axis.zero_point,
                axis.clamp_min,
                axis.clamp_max,
            ]
            .iter()
            .all(|v| v.is_finite());
            if !finite {
                return Err(SchemaError::InvalidNormalization { name: name() });
            }
            if axis.clamp_min > axis.clamp_max {
                return Err(SchemaError::InvalidClampWindow {
                    name: name(),
                    min: axis.clamp_min,
                    max: axis.clamp_max,
                });
            }
        }
        ValueKind::BitFlag | ValueKind::Integer => {}
    }

    Ok(())
}

/// Any two controls whose bits intersect must alias the same field.
fn validate_overlaps(controls: &[ControlDescriptor]) -> SchemaResult<()> {
    for (index, first) in controls.iter().enumerate() {
        for second in controls.iter().skip(index + 1) {
            if bits_intersect(first, second) && !first.is_alias_of(second) {
                return Err(SchemaError::OverlappingControls {
                    first: first.name.to_string(),
                    second: second.name.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn bits_intersect(a: &ControlDescriptor, b: &ControlDescriptor) -> bool {
    let (Some(a_end), Some(b_end)) = (a.end_bit(), b.end_bit()) else {
        return true;
    };
    a.start_bit() < b_end && b.start_bit() < a_end
}
