use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const ROTATION_RANGE: RangeInclusive<f64> = 0.0..=360.0;
pub const TRANSLATION_RANGE: RangeInclusive<f64> = -100.0..=100.0;
pub const SCALE_RANGE: RangeInclusive<f64> = 0.0..=5.0;
pub const SCALE_STEP: f64 = 0.1;
pub const SHEAR_RANGE: RangeInclusive<f64> = -1.0..=1.0;
pub const SHEAR_STEP: f64 = 0.1;

/// Slider-controlled inputs to the transform pipelines.
///
/// Shear is carried so the UI can show it, but neither pipeline reads it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub rotation_deg: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub shear_x: f64,
    pub shear_y: f64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            rotation_deg: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            shear_x: 0.0,
            shear_y: 0.0,
        }
    }
}

fn clamp_to(v: f64, range: &RangeInclusive<f64>) -> f64 {
    if v.is_nan() {
        return *range.start();
    }
    v.clamp(*range.start(), *range.end())
}

impl TransformParams {
    /// Copy with every field clamped into its slider range. NaN maps to the
    /// range start.
    pub fn clamped(self) -> Self {
        Self {
            rotation_deg: clamp_to(self.rotation_deg, &ROTATION_RANGE),
            translate_x: clamp_to(self.translate_x, &TRANSLATION_RANGE),
            translate_y: clamp_to(self.translate_y, &TRANSLATION_RANGE),
            scale_x: clamp_to(self.scale_x, &SCALE_RANGE),
            scale_y: clamp_to(self.scale_y, &SCALE_RANGE),
            shear_x: clamp_to(self.shear_x, &SHEAR_RANGE),
            shear_y: clamp_to(self.shear_y, &SHEAR_RANGE),
        }
    }
}
