use bevy::prelude::*;

use crate::config::LightPropsConfig;
use crate::light::{self, DynamicLightChanged};
use crate::outputs::{self, OutputFired};
use crate::prop::{self, PropRng};
use crate::touch::{self, TouchEvent};
use crate::{level, stalk, think};

/// Ordering of the light prop systems within a frame
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightPropsSet {
    /// Trigger overlaps and the reactions to them
    Touch,
    /// Per-prop think: animation, stalk behavior, fades
    Think,
    /// Publishing state for renderers and wired outputs
    Mirror,
}

/// Plugin for the `npc_lightfungi` and `npc_lightstalk` props
///
/// Uses the app's `LightPropsConfig` if one was inserted beforehand, and
/// spawns the placements of a `LevelFile` resource on startup. The host app
/// provides `Time`.
pub struct LightPropsPlugin;

impl Plugin for LightPropsPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<LightPropsConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(PropRng::from_config(&config))
            .insert_resource(config)
            .add_event::<TouchEvent>()
            .add_event::<OutputFired>()
            .add_event::<DynamicLightChanged>()
            .configure_sets(
                Update,
                (
                    LightPropsSet::Touch,
                    LightPropsSet::Think,
                    LightPropsSet::Mirror,
                )
                    .chain(),
            )
            .add_systems(Startup, level::spawn_level)
            .add_systems(
                Update,
                (
                    (touch::detect_trigger_touches, stalk::handle_stalk_touches)
                        .chain()
                        .in_set(LightPropsSet::Touch),
                    (
                        think::schedule_thinks,
                        prop::advance_activities,
                        stalk::stalk_think,
                        prop::fade_glows,
                    )
                        .chain()
                        .in_set(LightPropsSet::Think),
                    (light::publish_dynamic_lights, outputs::log_fired_outputs)
                        .in_set(LightPropsSet::Mirror),
                ),
            );

        info!("Light props plugin initialized");
    }
}
