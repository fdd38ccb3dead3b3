//! Value transforms applied to extracted report fields.

use serde::{Deserialize, Serialize};

/// Numeric sub-range of a shared integer field that counts as "pressed".
///
/// When `min <= max` the range is the plain interval `min..=max`. When
/// `min > max` the range wraps: it covers `min..=wrap_at` and everything from
/// the bottom of the field up to `max`, except `null_value`. `wrap_at` falls
/// back to `min` when unset or equal to `null_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscreteRange {
    pub min: u32,
    pub max: u32,
    #[serde(default)]
    pub null_value: Option<u32>,
    #[serde(default)]
    pub wrap_at: Option<u32>,
}

impl DiscreteRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max,
            null_value: None,
            wrap_at: None,
        }
    }

    pub const fn wrapping(min: u32, max: u32, null_value: u32, wrap_at: u32) -> Self {
        Self {
            min,
            max,
            null_value: Some(null_value),
            wrap_at: Some(wrap_at),
        }
    }

    pub fn wraps(&self) -> bool {
        self.min > self.max
    }

    fn effective_wrap(&self) -> u32 {
        match self.wrap_at {
            Some(wrap) if self.null_value != Some(wrap) => wrap,
            _ => self.min,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        if self.wraps() {
            let wrap = self.effective_wrap();
            (value >= self.min && value <= wrap)
                || (self.null_value != Some(value) && value <= self.max)
        } else {
            value >= self.min && value <= self.max
        }
    }

    /// Every bound this range refers to, for width checks.
    pub(crate) fn bounds(&self) -> impl Iterator<Item = u32> + '_ {
        [Some(self.min), Some(self.max), self.null_value, self.wrap_at]
            .into_iter()
            .flatten()
    }
}

/// Raw-to-float mapping for an axis field.
///
/// With `u = raw / max_raw`:
/// 1. `invert` reflects `u` about `zero_point`;
/// 2. `u` is clamped to the window `[clamp_min, clamp_max]`;
/// 3. the window is stretched onto `[normalize_min, normalize_max]`.
///
/// A window narrower than `[0, 1]` yields a half-range control that reads
/// `normalize_min` outside the window and ramps up inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisTransform {
    #[serde(default)]
    pub normalize_min: f32,
    #[serde(default = "one")]
    pub normalize_max: f32,
    #[serde(default = "half")]
    pub zero_point: f32,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub clamp_min: f32,
    #[serde(default = "one")]
    pub clamp_max: f32,
}

fn one() -> f32 {
    1.0
}

fn half() -> f32 {
    0.5
}

impl AxisTransform {
    /// Identity mapping onto `[0, 1]` centered at 0.5.
    pub const UNIT: Self = Self {
        normalize_min: 0.0,
        normalize_max: 1.0,
        zero_point: 0.5,
        invert: false,
        clamp_min: 0.0,
        clamp_max: 1.0,
    };

    pub const fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    pub const fn with_clamp(mut self, clamp_min: f32, clamp_max: f32) -> Self {
        self.clamp_min = clamp_min;
        self.clamp_max = clamp_max;
        self
    }

    pub const fn with_normalize(mut self, normalize_min: f32, normalize_max: f32) -> Self {
        self.normalize_min = normalize_min;
        self.normalize_max = normalize_max;
        self
    }

    /// Window covering the half of the travel above `zero_point`.
    pub const fn upper_half(self) -> Self {
        let zero = self.zero_point;
        self.with_clamp(zero, 1.0)
    }

    pub fn apply(&self, raw: u16, max_raw: u16) -> f32 {
        if max_raw == 0 {
            return self.normalize_min;
        }

        let mut unit = f32::from(raw) / f32::from(max_raw);
        if self.invert {
            unit = 2.0 * self.zero_point - unit;
        }
        let unit = unit.max(self.clamp_min).min(self.clamp_max);

        let window = self.clamp_max - self.clamp_min;
        let t = if window > f32::EPSILON {
            (unit - self.clamp_min) / window
        } else {
            0.0
        };
        self.normalize_min + t * (self.normalize_max - self.normalize_min)
    }
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self::UNIT
    }
}
