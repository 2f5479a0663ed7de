use bevy::prelude::*;

use crate::config::LightPropsConfig;
use crate::prop::{self, PropPlacement, PropRng};

pub const CLASSNAME: &str = "npc_lightfungi";

/// Stationary glowing fungus. Always lit; it breathes through its idle
/// animation but never reacts to anything.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct LightFungi;

pub fn spawn_light_fungi(
    commands: &mut Commands,
    rng: &mut PropRng,
    config: &LightPropsConfig,
    placement: &PropPlacement,
) -> Entity {
    // randomized so clusters don't look like copies of one model
    let model_scale = rng.sample(config.fungi.model_scale);
    let fungi = prop::spawn_light_prop(
        commands,
        rng,
        config,
        &config.fungi.tuning(),
        placement,
        model_scale,
    );
    commands.entity(fungi).insert(LightFungi);

    debug!(
        "spawned {} {:?} at {} (scale {:.2})",
        CLASSNAME, fungi, placement.origin, model_scale
    );
    fungi
}
