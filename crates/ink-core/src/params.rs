//! Tunable trail parameters.
//!
//! `TrailParams::default()` reproduces the constants in [`crate::constants`].
//! Front-ends may override individual values by key (see [`TrailParams::set`])
//! and must call [`TrailParams::validated`] before handing them to the engine.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("blob cap must be at least 1")]
    ZeroCapacity,
    #[error("blob cap {0} exceeds {}", MAX_BLOBS)]
    TooManyBlobs(usize),
    #[error("smoothing factor {0} is outside (0, 1]")]
    Smoothing(f32),
    #[error("{name} range [{min}, {max}] is empty or not positive")]
    Range {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} {value} is below the minimum of {floor}")]
    BelowFloor {
        name: &'static str,
        value: f32,
        floor: f32,
    },
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
    #[error("could not parse `{value}` for `{key}`")]
    Parse { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailParams {
    pub max_blobs: usize,
    pub smoothing: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_life: f32,
    pub max_life: f32,
    pub min_spacing: f32,
    pub max_spacing: f32,
    pub taper: f32,
    pub head_radius_scale: f32,
    pub head_life_scale: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            max_blobs: MAX_BLOBS,
            smoothing: BASE_SMOOTHING,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_life: MIN_LIFE,
            max_life: MAX_LIFE,
            min_spacing: MIN_SPACING,
            max_spacing: MAX_SPACING,
            taper: EXPONENTIAL_TAPER,
            head_radius_scale: HEAD_RADIUS_SCALE,
            head_life_scale: HEAD_LIFE_SCALE,
        }
    }
}

impl TrailParams {
    /// Keys accepted by [`TrailParams::set`].
    pub const KEYS: &'static [&'static str] = &[
        "max-blobs",
        "smoothing",
        "min-radius",
        "max-radius",
        "min-life",
        "max-life",
        "min-spacing",
        "max-spacing",
        "taper",
    ];

    /// Apply a single textual override. The result is not validated.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ParamsError> {
        let parse_err = || ParamsError::Parse {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        if key == "max-blobs" {
            self.max_blobs = value.parse().map_err(|_| parse_err())?;
            return Ok(());
        }
        let slot = match key {
            "smoothing" => &mut self.smoothing,
            "min-radius" => &mut self.min_radius,
            "max-radius" => &mut self.max_radius,
            "min-life" => &mut self.min_life,
            "max-life" => &mut self.max_life,
            "min-spacing" => &mut self.min_spacing,
            "max-spacing" => &mut self.max_spacing,
            "taper" => &mut self.taper,
            _ => return Err(ParamsError::UnknownKey(key.to_string())),
        };
        *slot = value.parse().map_err(|_| parse_err())?;
        Ok(())
    }

    pub fn validated(self) -> Result<Self, ParamsError> {
        if self.max_blobs == 0 {
            return Err(ParamsError::ZeroCapacity);
        }
        if self.max_blobs > MAX_BLOBS {
            return Err(ParamsError::TooManyBlobs(self.max_blobs));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ParamsError::Smoothing(self.smoothing));
        }
        check_range("radius", self.min_radius, self.max_radius)?;
        check_range("life", self.min_life, self.max_life)?;
        check_range("spacing", self.min_spacing, self.max_spacing)?;
        check_floor("min life", self.min_life, LIFE_FLOOR)?;
        check_floor("min spacing", self.min_spacing, SPACING_FLOOR)?;
        check_positive("taper", self.taper)?;
        check_positive("head radius scale", self.head_radius_scale)?;
        check_positive("head life scale", self.head_life_scale)?;
        Ok(self)
    }
}

fn check_range(name: &'static str, min: f32, max: f32) -> Result<(), ParamsError> {
    if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
        Ok(())
    } else {
        Err(ParamsError::Range { name, min, max })
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

fn check_floor(name: &'static str, value: f32, floor: f32) -> Result<(), ParamsError> {
    if value >= floor {
        Ok(())
    } else {
        Err(ParamsError::BelowFloor { name, value, floor })
    }
}
