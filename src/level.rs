use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use bevy::prelude::*;
use serde::Deserialize;

use crate::config::LightPropsConfig;
use crate::error::{self, PropsError, Result};
use crate::light::LightKeyValues;
use crate::outputs::OutputFired;
use crate::prop::{PropPlacement, PropRng};
use crate::{fungi, stalk};

/// Entity classes a level can place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    LightFungi,
    LightStalk,
}

impl EntityClass {
    pub fn classname(&self) -> &'static str {
        match self {
            EntityClass::LightFungi => fungi::CLASSNAME,
            EntityClass::LightStalk => stalk::CLASSNAME,
        }
    }
}

impl FromStr for EntityClass {
    type Err = PropsError;

    fn from_str(classname: &str) -> Result<Self> {
        match classname {
            fungi::CLASSNAME => Ok(EntityClass::LightFungi),
            stalk::CLASSNAME => Ok(EntityClass::LightStalk),
            other => Err(PropsError::UnknownClass(other.to_owned())),
        }
    }
}

/// One entity placed by the level designer
#[derive(Debug, Clone, Deserialize)]
pub struct Placement {
    pub classname: String,
    pub origin: [f32; 3],
    #[serde(default)]
    pub keyvalues: HashMap<String, String>,
}

/// All light prop placements of a level
#[derive(Resource, Debug, Clone, Default, Deserialize)]
pub struct LevelFile {
    pub name: String,
    pub entities: Vec<Placement>,
}

impl LevelFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        error::load_ron(path.as_ref())
    }
}

/// Spawns a single placement through its entity class
pub fn spawn_placement(
    commands: &mut Commands,
    rng: &mut PropRng,
    config: &LightPropsConfig,
    outputs: &mut EventWriter<OutputFired>,
    placement: &Placement,
    now: f64,
) -> Result<Entity> {
    let class = placement.classname.parse::<EntityClass>()?;
    let placement = PropPlacement {
        origin: Vec3::from_array(placement.origin),
        keyvalues: LightKeyValues::from_keyvalues(&placement.keyvalues, config)?,
        now,
    };

    Ok(match class {
        EntityClass::LightFungi => fungi::spawn_light_fungi(commands, rng, config, &placement),
        EntityClass::LightStalk => {
            stalk::spawn_light_stalk(commands, rng, config, &placement, outputs)
        }
    })
}

/// Spawns every placement of the loaded level, skipping the ones that fail
pub fn spawn_level(
    mut commands: Commands,
    level: Option<Res<LevelFile>>,
    config: Res<LightPropsConfig>,
    mut rng: ResMut<PropRng>,
    time: Res<Time>,
    mut outputs: EventWriter<OutputFired>,
) {
    let Some(level) = level else {
        return;
    };
    let now = time.elapsed_secs_f64();

    let mut spawned = 0;
    for (index, placement) in level.entities.iter().enumerate() {
        match spawn_placement(&mut commands, &mut rng, &config, &mut outputs, placement, now) {
            Ok(_) => spawned += 1,
            Err(e) => warn!(
                "level {}: skipping entity #{} ({}): {}",
                level.name, index, placement.classname, e
            ),
        }
    }

    info!(
        "level {}: spawned {} of {} light props",
        level.name,
        spawned,
        level.entities.len()
    );
}
