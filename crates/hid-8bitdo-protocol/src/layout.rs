//! The SN30 Pro control table.
//!
//! Everything the controller reports is described here as data; decoding is
//! done by the generic [`ReportLayout::decode`].

use crate::ids::sn30_pro_matcher;
use crate::report::{
    BUTTONS1_OFFSET, BUTTONS2_OFFSET, DPAD_BITS, DPAD_NEUTRAL, DPAD_OFFSET, LEFT_STICK_X_OFFSET,
    LEFT_STICK_Y_OFFSET, LEFT_TRIGGER_OFFSET, RIGHT_STICK_X_OFFSET, RIGHT_STICK_Y_OFFSET,
    RIGHT_TRIGGER_OFFSET, STICK_CENTER, buttons1, buttons2,
};
use openpad_report_schema::{
    AxisTransform, ControlDescriptor, ControlLayout, DiscreteRange, LayoutConfig, LayoutRegistry,
    ReportLayout, SchemaResult, ValueKind,
};

/// Registry and layout name.
pub const LAYOUT_NAME: &str = "8bitdo-sn30-pro";

/// Control names as they appear in a decoded state.
pub mod controls {
    pub const DPAD: &str = "dpad";
    pub const DPAD_UP: &str = "dpad/up";
    pub const DPAD_RIGHT: &str = "dpad/right";
    pub const DPAD_DOWN: &str = "dpad/down";
    pub const DPAD_LEFT: &str = "dpad/left";

    pub const LEFT_STICK_X: &str = "leftStick/x";
    pub const LEFT_STICK_Y: &str = "leftStick/y";
    pub const LEFT_STICK_LEFT: &str = "leftStick/left";
    pub const LEFT_STICK_RIGHT: &str = "leftStick/right";
    pub const LEFT_STICK_UP: &str = "leftStick/up";
    pub const LEFT_STICK_DOWN: &str = "leftStick/down";

    pub const RIGHT_STICK_X: &str = "rightStick/x";
    pub const RIGHT_STICK_Y: &str = "rightStick/y";
    pub const RIGHT_STICK_LEFT: &str = "rightStick/left";
    pub const RIGHT_STICK_RIGHT: &str = "rightStick/right";
    pub const RIGHT_STICK_UP: &str = "rightStick/up";
    pub const RIGHT_STICK_DOWN: &str = "rightStick/down";

    pub const LEFT_TRIGGER: &str = "leftTrigger";
    pub const RIGHT_TRIGGER: &str = "rightTrigger";
    pub const LEFT_TRIGGER_BUTTON: &str = "leftTriggerButton";
    pub const RIGHT_TRIGGER_BUTTON: &str = "rightTriggerButton";

    pub const BUTTON_WEST: &str = "buttonWest";
    pub const BUTTON_SOUTH: &str = "buttonSouth";
    pub const BUTTON_EAST: &str = "buttonEast";
    pub const BUTTON_NORTH: &str = "buttonNorth";
    pub const LEFT_SHOULDER: &str = "leftShoulder";
    pub const RIGHT_SHOULDER: &str = "rightShoulder";
    pub const SELECT: &str = "select";
    pub const START: &str = "start";
    pub const LEFT_STICK_PRESS: &str = "leftStickPress";
    pub const RIGHT_STICK_PRESS: &str = "rightStickPress";
}

use controls::*;

/// Hat ranges: odd values are diagonals and press both neighbours.
const DPAD_UP_RANGE: DiscreteRange = DiscreteRange::wrapping(7, 1, DPAD_NEUTRAL as u32, 7);
const DPAD_RIGHT_RANGE: DiscreteRange = DiscreteRange::new(1, 3);
const DPAD_DOWN_RANGE: DiscreteRange = DiscreteRange::new(3, 5);
const DPAD_LEFT_RANGE: DiscreteRange = DiscreteRange::new(5, 7);

fn dpad_arrow(name: &'static str, range: DiscreteRange) -> ControlDescriptor {
    ControlDescriptor::discrete(name, DPAD_OFFSET, 0, DPAD_BITS, range)
        .with_default_state(u32::from(DPAD_NEUTRAL))
}

fn stick_axis(name: &'static str, offset: usize, transform: AxisTransform) -> ControlDescriptor {
    ControlDescriptor::axis(name, offset, transform).with_default_state(u32::from(STICK_CENTER))
}

/// The six controls of one stick: full axes plus the four half-axes.
///
/// HID reports y growing downward, so `y` is inverted to read 1.0 when the
/// stick is pushed up.
fn stick(
    names: [&'static str; 6],
    x_offset: usize,
    y_offset: usize,
) -> [ControlDescriptor; 6] {
    let [x, y, left, right, up, down] = names;
    let positive_half = AxisTransform::UNIT.upper_half();
    let negative_half = AxisTransform::UNIT.inverted().upper_half();
    [
        stick_axis(x, x_offset, AxisTransform::UNIT),
        stick_axis(y, y_offset, AxisTransform::UNIT.inverted()),
        stick_axis(left, x_offset, negative_half),
        stick_axis(right, x_offset, positive_half),
        stick_axis(up, y_offset, negative_half),
        stick_axis(down, y_offset, positive_half),
    ]
}

fn trigger(name: &'static str, offset: usize) -> ControlDescriptor {
    ControlDescriptor::axis(name, offset, AxisTransform::UNIT)
        .with_layout(ControlLayout::AnalogButton)
}

/// Every control of the SN30 Pro report, in decode order.
pub fn sn30_pro_controls() -> Vec<ControlDescriptor> {
    let mut table = vec![
        ControlDescriptor::new(
            DPAD,
            ControlLayout::Dpad,
            DPAD_OFFSET,
            0,
            DPAD_BITS,
            ValueKind::Integer,
        )
        .with_default_state(u32::from(DPAD_NEUTRAL)),
        dpad_arrow(DPAD_UP, DPAD_UP_RANGE),
        dpad_arrow(DPAD_RIGHT, DPAD_RIGHT_RANGE),
        dpad_arrow(DPAD_DOWN, DPAD_DOWN_RANGE),
        dpad_arrow(DPAD_LEFT, DPAD_LEFT_RANGE),
    ];

    table.extend(stick(
        [
            LEFT_STICK_X,
            LEFT_STICK_Y,
            LEFT_STICK_LEFT,
            LEFT_STICK_RIGHT,
            LEFT_STICK_UP,
            LEFT_STICK_DOWN,
        ],
        LEFT_STICK_X_OFFSET,
        LEFT_STICK_Y_OFFSET,
    ));
    table.extend(stick(
        [
            RIGHT_STICK_X,
            RIGHT_STICK_Y,
            RIGHT_STICK_LEFT,
            RIGHT_STICK_RIGHT,
            RIGHT_STICK_UP,
            RIGHT_STICK_DOWN,
        ],
        RIGHT_STICK_X_OFFSET,
        RIGHT_STICK_Y_OFFSET,
    ));

    table.extend([
        trigger(LEFT_TRIGGER, LEFT_TRIGGER_OFFSET),
        trigger(RIGHT_TRIGGER, RIGHT_TRIGGER_OFFSET),
        ControlDescriptor::button(LEFT_TRIGGER_BUTTON, BUTTONS2_OFFSET, buttons2::LEFT_TRIGGER),
        ControlDescriptor::button(RIGHT_TRIGGER_BUTTON, BUTTONS2_OFFSET, buttons2::RIGHT_TRIGGER),
        ControlDescriptor::button(BUTTON_WEST, BUTTONS1_OFFSET, buttons1::WEST)
            .with_display_name("Y"),
        ControlDescriptor::button(BUTTON_SOUTH, BUTTONS1_OFFSET, buttons1::SOUTH)
            .with_display_name("B"),
        ControlDescriptor::button(BUTTON_EAST, BUTTONS1_OFFSET, buttons1::EAST)
            .with_display_name("A"),
        ControlDescriptor::button(BUTTON_NORTH, BUTTONS1_OFFSET, buttons1::NORTH)
            .with_display_name("X"),
        ControlDescriptor::button(LEFT_SHOULDER, BUTTONS1_OFFSET, buttons1::LEFT_SHOULDER),
        ControlDescriptor::button(RIGHT_SHOULDER, BUTTONS1_OFFSET, buttons1::RIGHT_SHOULDER),
        ControlDescriptor::button(SELECT, BUTTONS2_OFFSET, buttons2::SELECT)
            .with_display_name("Share"),
        ControlDescriptor::button(START, BUTTONS2_OFFSET, buttons2::START)
            .with_display_name("Options"),
        ControlDescriptor::button(LEFT_STICK_PRESS, BUTTONS2_OFFSET, buttons2::LEFT_STICK_PRESS),
        ControlDescriptor::button(
            RIGHT_STICK_PRESS,
            BUTTONS2_OFFSET,
            buttons2::RIGHT_STICK_PRESS,
        ),
    ]);

    table
}

/// The validated SN30 Pro layout.
pub fn sn30_pro_layout() -> SchemaResult<ReportLayout> {
    ReportLayout::new(LAYOUT_NAME, sn30_pro_controls())
}

/// Layout plus matcher, ready for [`LayoutRegistry::initialize`].
pub fn layout_config() -> SchemaResult<LayoutConfig> {
    Ok(LayoutConfig {
        name: LAYOUT_NAME.to_string(),
        matcher: sn30_pro_matcher(),
        layout: sn30_pro_layout()?,
    })
}

pub fn register(registry: &mut LayoutRegistry) -> SchemaResult<()> {
    let config = layout_config()?;
    registry.register(config.name, config.matcher, config.layout)
}
