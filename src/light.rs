use std::collections::HashMap;

use bevy::color::ColorToPacked;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::LightPropsConfig;
use crate::error::{PropsError, Result};

pub const KEY_LIGHT_COLOR: &str = "lightcolor";
pub const KEY_RADIUS: &str = "radius";

/// Light settings a level designer placed on a prop
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LightKeyValues {
    pub color: Srgba,
    pub radius: f32,
}

impl LightKeyValues {
    /// Reads `lightcolor` and `radius` out of a placement's key-values,
    /// falling back to the configured defaults for missing keys
    pub fn from_keyvalues(
        keyvalues: &HashMap<String, String>,
        config: &LightPropsConfig,
    ) -> Result<Self> {
        let color = match keyvalues.get(KEY_LIGHT_COLOR) {
            Some(value) => parse_color32(KEY_LIGHT_COLOR, value)?,
            None => {
                let [r, g, b, a] = config.default_light_color;
                Srgba::rgba_u8(r, g, b, a)
            }
        };

        let radius = match keyvalues.get(KEY_RADIUS) {
            Some(value) => value
                .trim()
                .parse::<f32>()
                .map_err(|_| invalid(KEY_RADIUS, value, "expected a number"))?,
            None => config.default_radius,
        };

        for key in keyvalues.keys() {
            if key != KEY_LIGHT_COLOR && key != KEY_RADIUS {
                debug!("ignoring unknown key-value `{}`", key);
            }
        }

        Ok(Self { color, radius })
    }

    /// Color channels as the 0-255 values editors and clients use
    #[inline]
    pub fn channels(&self) -> [u8; 4] {
        self.color.to_u8_array()
    }
}

fn invalid(key: &str, value: &str, reason: &'static str) -> PropsError {
    PropsError::InvalidKeyValue {
        key: key.into(),
        value: value.into(),
        reason,
    }
}

/// Parses an editor color like `"255 200 64"` or `"255 200 64 128"`.
/// Alpha defaults to 255 when left out.
pub fn parse_color32(key: &str, value: &str) -> Result<Srgba> {
    let channels = value
        .split_whitespace()
        .map(|part| part.parse::<u8>())
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|_| invalid(key, value, "channels must be integers in 0..=255"))?;

    match channels[..] {
        [r, g, b] => Ok(Srgba::rgba_u8(r, g, b, 255)),
        [r, g, b, a] => Ok(Srgba::rgba_u8(r, g, b, a)),
        _ => Err(invalid(key, value, "expected 3 or 4 channels")),
    }
}

/// Light state mirrored to the client-side dynamic light renderer
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicLight {
    pub enabled: bool,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub radius: f32,
}

impl DynamicLight {
    pub fn from_keyvalues(keyvalues: &LightKeyValues) -> Self {
        let [r, g, b, _] = keyvalues.channels();
        Self {
            enabled: true,
            r,
            g,
            b,
            radius: keyvalues.radius,
        }
    }
}

/// Sent whenever a prop's mirrored light state changes
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicLightChanged {
    pub entity: Entity,
    pub light: DynamicLight,
}

impl DynamicLightChanged {
    /// Encodes the update as the RON payload sent to render clients
    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::to_string(self)?)
    }
}

/// Publishes mirrored light state, once per actual change
pub fn publish_dynamic_lights(
    lights: Query<(Entity, &DynamicLight), Changed<DynamicLight>>,
    mut changes: EventWriter<DynamicLightChanged>,
) {
    for (entity, light) in lights.iter() {
        debug!(
            "light {:?}: enabled={} rgb=({}, {}, {}) radius={}",
            entity, light.enabled, light.r, light.g, light.b, light.radius
        );
        changes.write(DynamicLightChanged {
            entity,
            light: *light,
        });
    }
}
