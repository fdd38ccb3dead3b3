//! The hat switch decodes into overlapping arrow controls: every odd value is
//! a diagonal and presses both neighbours, 8 presses nothing.

use openpad_hid_8bitdo_protocol::{DpadDirection, Sn30ProState, controls, sn30_pro_layout};
use openpad_report_schema::{RawReport, SchemaError};

/// (hat, up, right, down, left)
const TRUTH_TABLE: [(u8, bool, bool, bool, bool); 9] = [
    (0, true, false, false, false),
    (1, true, true, false, false),
    (2, false, true, false, false),
    (3, false, true, true, false),
    (4, false, false, true, false),
    (5, false, false, true, true),
    (6, false, false, false, true),
    (7, true, false, false, true),
    (8, false, false, false, false),
];

fn hat_report(hat: u8) -> RawReport {
    let mut report = RawReport::zeroed();
    report.set_byte(1, hat);
    report
}

#[test]
fn arrows_follow_truth_table() -> Result<(), SchemaError> {
    let layout = sn30_pro_layout()?;
    for (hat, up, right, down, left) in TRUTH_TABLE {
        let state = layout.decode(&hat_report(hat));
        assert_eq!(state.is_pressed(controls::DPAD_UP), up, "hat={hat} up");
        assert_eq!(state.is_pressed(controls::DPAD_RIGHT), right, "hat={hat} right");
        assert_eq!(state.is_pressed(controls::DPAD_DOWN), down, "hat={hat} down");
        assert_eq!(state.is_pressed(controls::DPAD_LEFT), left, "hat={hat} left");
    }
    Ok(())
}

#[test]
fn composite_reports_raw_hat() -> Result<(), SchemaError> {
    let layout = sn30_pro_layout()?;
    for hat in 0..=8u8 {
        let state = layout.decode(&hat_report(hat));
        assert_eq!(state.get(controls::DPAD), Some(f32::from(hat)));
    }
    Ok(())
}

#[test]
fn typed_direction_matches_hat() -> Result<(), SchemaError> {
    let layout = sn30_pro_layout()?;
    for hat in 0..=8u8 {
        let state = Sn30ProState::from_decoded(&layout.decode(&hat_report(hat)));
        assert_eq!(state.dpad, DpadDirection::from_hat(hat), "hat={hat}");
    }
    Ok(())
}

#[test]
fn upper_nibble_is_ignored() -> Result<(), SchemaError> {
    let layout = sn30_pro_layout()?;
    let state = layout.decode(&hat_report(0xF2));
    assert_eq!(state.get(controls::DPAD), Some(2.0));
    assert!(state.is_pressed(controls::DPAD_RIGHT));
    assert!(!state.is_pressed(controls::DPAD_UP));
    Ok(())
}

#[test]
fn unused_hat_values_press_nothing() -> Result<(), SchemaError> {
    let layout = sn30_pro_layout()?;
    for hat in 9..=15u8 {
        let state = layout.decode(&hat_report(hat));
        let arrows = [
            controls::DPAD_UP,
            controls::DPAD_RIGHT,
            controls::DPAD_DOWN,
            controls::DPAD_LEFT,
        ];
        assert!(
            arrows.iter().all(|name| !state.is_pressed(name)),
            "hat={hat}"
        );
    }
    Ok(())
}
