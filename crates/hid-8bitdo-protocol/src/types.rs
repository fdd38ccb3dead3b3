//! Typed view over a decoded SN30 Pro state.

use crate::layout::controls::*;
use openpad_report_schema::DecodedState;
use serde::{Deserialize, Serialize};

/// Hat direction, reconstructed from the four arrow controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DpadDirection {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    #[default]
    Neutral,
}

impl DpadDirection {
    /// Raw hat value as sent by the controller.
    pub fn from_hat(value: u8) -> Self {
        match value {
            0 => Self::Up,
            1 => Self::UpRight,
            2 => Self::Right,
            3 => Self::DownRight,
            4 => Self::Down,
            5 => Self::DownLeft,
            6 => Self::Left,
            7 => Self::UpLeft,
            _ => Self::Neutral,
        }
    }

    /// Direction for a set of held arrows. Opposite arrows held together
    /// cannot come from a hat switch and read as neutral.
    pub fn from_arrows(up: bool, right: bool, down: bool, left: bool) -> Self {
        match (up, right, down, left) {
            (true, false, false, false) => Self::Up,
            (true, true, false, false) => Self::UpRight,
            (false, true, false, false) => Self::Right,
            (false, true, true, false) => Self::DownRight,
            (false, false, true, false) => Self::Down,
            (false, false, true, true) => Self::DownLeft,
            (false, false, false, true) => Self::Left,
            (true, false, false, true) => Self::UpLeft,
            _ => Self::Neutral,
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, Self::Up | Self::UpRight | Self::UpLeft)
    }

    pub fn is_right(self) -> bool {
        matches!(self, Self::Right | Self::UpRight | Self::DownRight)
    }

    pub fn is_down(self) -> bool {
        matches!(self, Self::Down | Self::DownRight | Self::DownLeft)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Self::Left | Self::UpLeft | Self::DownLeft)
    }
}

/// One analog stick. `y` reads 1.0 when pushed up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StickState {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sn30ProButtons {
    pub west: bool,
    pub south: bool,
    pub east: bool,
    pub north: bool,
    pub left_shoulder: bool,
    pub right_shoulder: bool,
    pub left_trigger: bool,
    pub right_trigger: bool,
    pub select: bool,
    pub start: bool,
    pub left_stick: bool,
    pub right_stick: bool,
}

impl Sn30ProButtons {
    pub fn count(&self) -> usize {
        [
            self.west,
            self.south,
            self.east,
            self.north,
            self.left_shoulder,
            self.right_shoulder,
            self.left_trigger,
            self.right_trigger,
            self.select,
            self.start,
            self.left_stick,
            self.right_stick,
        ]
        .iter()
        .filter(|pressed| **pressed)
        .count()
    }
}

/// Controller state with named fields instead of string lookups.
///
/// Analog trigger values and the digital trigger buttons are read from their
/// own fields and are not reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sn30ProState {
    pub dpad: DpadDirection,
    pub left_stick: StickState,
    pub right_stick: StickState,
    pub left_trigger: f32,
    pub right_trigger: f32,
    pub buttons: Sn30ProButtons,
}

impl Sn30ProState {
    /// Build from a state decoded with the SN30 Pro layout. Controls the
    /// state does not carry read as released.
    pub fn from_decoded(state: &DecodedState<'_>) -> Self {
        let value = |name: &str| state.get(name).unwrap_or_default();
        let pressed = |name: &str| state.is_pressed(name);

        Self {
            dpad: DpadDirection::from_arrows(
                pressed(DPAD_UP),
                pressed(DPAD_RIGHT),
                pressed(DPAD_DOWN),
                pressed(DPAD_LEFT),
            ),
            left_stick: StickState {
                x: value(LEFT_STICK_X),
                y: value(LEFT_STICK_Y),
            },
            right_stick: StickState {
                x: value(RIGHT_STICK_X),
                y: value(RIGHT_STICK_Y),
            },
            left_trigger: value(LEFT_TRIGGER),
            right_trigger: value(RIGHT_TRIGGER),
            buttons: Sn30ProButtons {
                west: pressed(BUTTON_WEST),
                south: pressed(BUTTON_SOUTH),
                east: pressed(BUTTON_EAST),
                north: pressed(BUTTON_NORTH),
                left_shoulder: pressed(LEFT_SHOULDER),
                right_shoulder: pressed(RIGHT_SHOULDER),
                left_trigger: pressed(LEFT_TRIGGER_BUTTON),
                right_trigger: pressed(RIGHT_TRIGGER_BUTTON),
                select: pressed(SELECT),
                start: pressed(START),
                left_stick: pressed(LEFT_STICK_PRESS),
                right_stick: pressed(RIGHT_STICK_PRESS),
            },
        }
    }
}

impl From<&DecodedState<'_>> for Sn30ProState {
    fn from(state: &DecodedState<'_>) -> Self {
        Self::from_decoded(state)
    }
}
