use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use crate::error::{self, Result};

/// Inclusive-exclusive range used for randomized spawn parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FloatRange {
    pub lo: f32,
    pub hi: f32,
}

impl FloatRange {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }
}

impl From<std::ops::Range<f32>> for FloatRange {
    fn from(other: std::ops::Range<f32>) -> Self {
        Self::new(other.start, other.end)
    }
}

/// Tuning shared by both light prop variants
#[derive(Debug, Clone, PartialEq)]
pub struct PropTuning<'a> {
    pub model: &'a str,
    pub glow_sprite: &'a str,
    pub glow_scale: f32,
    /// Seconds for a fade to complete
    pub fade_time: f32,
    /// Glow brightness at the end of a fade in
    pub max_brightness: f32,
    /// Height of the glow above the prop origin
    pub glow_height: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FungiConfig {
    pub model: String,
    pub glow_sprite: String,
    pub glow_scale: f32,
    pub fade_time: f32,
    pub max_brightness: f32,
    pub model_scale: FloatRange,
}

impl Default for FungiConfig {
    fn default() -> Self {
        Self {
            model: "models/fungus_light.mdl".into(),
            glow_sprite: "sprites/glow03.vmt".into(),
            glow_scale: 2.0,
            fade_time: 2.0,
            max_brightness: 120.0,
            model_scale: (0.75..1.5).into(),
        }
    }
}

impl FungiConfig {
    pub fn tuning(&self) -> PropTuning<'_> {
        PropTuning {
            model: &self.model,
            glow_sprite: &self.glow_sprite,
            glow_scale: self.glow_scale,
            fade_time: self.fade_time,
            max_brightness: self.max_brightness,
            // fungi are solid models with no box of their own
            glow_height: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StalkConfig {
    pub model: String,
    pub glow_sprite: String,
    pub glow_scale: f32,
    pub fade_time: f32,
    pub max_brightness: f32,
    /// Seconds a stalk stays lowered after the last player touch
    pub hide_time: f32,
    pub trigger_min: [f32; 3],
    pub trigger_max: [f32; 3],
}

impl Default for StalkConfig {
    fn default() -> Self {
        Self {
            model: "models/light.mdl".into(),
            glow_sprite: "sprites/glow03.vmt".into(),
            glow_scale: 1.0,
            fade_time: 2.0,
            max_brightness: 120.0,
            hide_time: 5.0,
            trigger_min: [-80.0, -80.0, 0.0],
            trigger_max: [80.0, 80.0, 32.0],
        }
    }
}

impl StalkConfig {
    pub fn tuning(&self) -> PropTuning<'_> {
        PropTuning {
            model: &self.model,
            glow_sprite: &self.glow_sprite,
            glow_scale: self.glow_scale,
            fade_time: self.fade_time,
            max_brightness: self.max_brightness,
            // halfway up the trigger box
            glow_height: (self.trigger_min[2] + self.trigger_max[2]) * 0.5,
        }
    }
}

/// Length in seconds of each activity's sequence at playback rate 1
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SequenceDurations {
    pub idle: f32,
    pub crouch: f32,
    pub crouch_idle: f32,
    pub stand: f32,
}

impl Default for SequenceDurations {
    fn default() -> Self {
        Self {
            idle: 3.0,
            crouch: 1.0,
            crouch_idle: 2.0,
            stand: 1.0,
        }
    }
}

/// Everything tunable about the light props, loaded from `light_props.ron`
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightPropsConfig {
    /// Seconds between two thinks of the same prop
    pub think_interval: f64,
    pub fungi: FungiConfig,
    pub stalk: StalkConfig,
    pub sequences: SequenceDurations,
    pub playback_rate: FloatRange,
    pub initial_cycle: FloatRange,

    // used when a placement leaves the key-value out
    pub default_light_color: [u8; 4],
    pub default_radius: f32,

    pub rng_seed: Option<u64>,
}

impl Default for LightPropsConfig {
    fn default() -> Self {
        Self {
            think_interval: 0.1,
            fungi: FungiConfig::default(),
            stalk: StalkConfig::default(),
            sequences: SequenceDurations::default(),
            playback_rate: (0.5..1.5).into(),
            initial_cycle: (0.0..0.9).into(),
            default_light_color: [255, 255, 255, 100],
            default_radius: 256.0,
            rng_seed: None,
        }
    }
}

impl LightPropsConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        error::load_ron(path.as_ref())
    }

    pub fn from_ron_str(text: &str) -> Result<Self> {
        ron::from_str(text).map_err(|source| crate::error::PropsError::Ron {
            path: "<inline>".into(),
            source,
        })
    }
}
