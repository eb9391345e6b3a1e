use crate::constants::*;
use crate::surface::Rgba;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("overlay alpha must lie in [0, 1], got {0}")]
    OverlayAlpha(f32),
    #[error("decline phrase list is empty")]
    NoPhrases,
}

/// Runtime knobs for a scene. `Default` gives the shipped look.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub heart_scale: f32,
    pub heart_depth: f32,
    pub size_max: f32,
    pub hue_base: f32,
    pub hue_span: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub focal_length: f32,
    pub time_step: f32,
    pub pulse_frequency: f32,
    pub pulse_amplitude: f32,
    pub seek_factor: f32,
    pub celebration_jitter: f32,
    pub camera_drift_y: f32,
    pub camera_smoothing: f32,
    pub pointer_gain: f32,
    pub trail: Rgba,
    pub evasion_padding: f32,
    pub evasion_scale_step: f32,
    pub phrases: &'static [&'static str],
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            heart_scale: HEART_SCALE,
            heart_depth: HEART_DEPTH,
            size_max: PARTICLE_SIZE_MAX,
            hue_base: PARTICLE_HUE_BASE,
            hue_span: PARTICLE_HUE_SPAN,
            saturation: PARTICLE_SATURATION,
            lightness: PARTICLE_LIGHTNESS,
            focal_length: FOCAL_LENGTH,
            time_step: SIM_TIME_STEP,
            pulse_frequency: PULSE_FREQUENCY,
            pulse_amplitude: PULSE_AMPLITUDE,
            seek_factor: SEEK_FACTOR,
            celebration_jitter: CELEBRATION_JITTER,
            camera_drift_y: CAMERA_DRIFT_Y,
            camera_smoothing: CAMERA_SMOOTHING,
            pointer_gain: POINTER_GAIN,
            trail: Rgba {
                r: TRAIL_COLOR[0],
                g: TRAIL_COLOR[1],
                b: TRAIL_COLOR[2],
                a: TRAIL_ALPHA,
            },
            evasion_padding: EVASION_PADDING_PX,
            evasion_scale_step: EVASION_SCALE_STEP,
            phrases: DECLINE_PHRASES,
        }
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NotFinite { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParamsError::Negative { name, value })
    }
}

impl SceneParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        positive("heart_scale", self.heart_scale)?;
        positive("focal_length", self.focal_length)?;
        positive("time_step", self.time_step)?;
        non_negative("heart_depth", self.heart_depth)?;
        non_negative("size_max", self.size_max)?;
        non_negative("hue_span", self.hue_span)?;
        non_negative("pulse_amplitude", self.pulse_amplitude)?;
        non_negative("seek_factor", self.seek_factor)?;
        non_negative("celebration_jitter", self.celebration_jitter)?;
        non_negative("camera_smoothing", self.camera_smoothing)?;
        non_negative("evasion_padding", self.evasion_padding)?;
        non_negative("evasion_scale_step", self.evasion_scale_step)?;
        non_negative("saturation", self.saturation)?;
        non_negative("lightness", self.lightness)?;
        finite("hue_base", self.hue_base)?;
        finite("pulse_frequency", self.pulse_frequency)?;
        finite("camera_drift_y", self.camera_drift_y)?;
        finite("pointer_gain", self.pointer_gain)?;
        if !(0.0..=1.0).contains(&self.trail.a) {
            return Err(ParamsError::OverlayAlpha(self.trail.a));
        }
        if self.phrases.is_empty() {
            return Err(ParamsError::NoPhrases);
        }
        Ok(())
    }
}
