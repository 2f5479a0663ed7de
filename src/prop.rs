use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activity::{Activity, ActivityClock};
use crate::config::{FloatRange, LightPropsConfig, PropTuning};
use crate::fade::FadeController;
use crate::glow::{self, GlowHandle, GlowSprite};
use crate::light::{DynamicLight, LightKeyValues};
use crate::think::Think;

/// Model a prop displays, and how much it is scaled
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PropModel {
    pub model: String,
    pub scale: f32,
}

/// Source of the per-prop variation (playback rate, start cycle, scale)
#[derive(Resource)]
pub struct PropRng(pub StdRng);

impl PropRng {
    pub fn from_config(config: &LightPropsConfig) -> Self {
        match config.rng_seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }

    pub fn sample(&mut self, range: FloatRange) -> f32 {
        if range.hi <= range.lo {
            return range.lo;
        }
        self.0.gen_range(range.lo..range.hi)
    }
}

/// Where and how a prop is being placed
#[derive(Debug, Clone, Copy)]
pub struct PropPlacement {
    pub origin: Vec3,
    pub keyvalues: LightKeyValues,
    pub now: f64,
}

/// Spawns the parts every light prop has: model, mirrored light, fade,
/// activity clock, think schedule and the attached glow sprite
pub(crate) fn spawn_light_prop(
    commands: &mut Commands,
    rng: &mut PropRng,
    config: &LightPropsConfig,
    tuning: &PropTuning<'_>,
    placement: &PropPlacement,
    model_scale: f32,
) -> Entity {
    let activity = ActivityClock::new(Activity::Idle, placement.now)
        .with_playback_rate(rng.sample(config.playback_rate))
        .with_cycle(rng.sample(config.initial_cycle));

    let prop = commands
        .spawn((
            Transform::from_translation(placement.origin),
            PropModel {
                model: tuning.model.to_owned(),
                scale: model_scale,
            },
            placement.keyvalues,
            DynamicLight::from_keyvalues(&placement.keyvalues),
            FadeController::new(tuning.fade_time, tuning.max_brightness),
            activity,
            Think::starting_at(placement.now, config.think_interval),
        ))
        .id();

    glow::attach_glow(
        commands,
        prop,
        GlowSprite::new(tuning.glow_sprite, placement.keyvalues.color)
            .with_scale(tuning.glow_scale),
        tuning.glow_height,
    );

    prop
}

/// Steps every thinking prop's animation forward
pub fn advance_activities(
    time: Res<Time>,
    config: Res<LightPropsConfig>,
    mut props: Query<(&Think, &mut ActivityClock)>,
) {
    let now = time.elapsed_secs_f64();
    for (think, mut clock) in props.iter_mut() {
        if think.is_due() {
            clock.advance(now, &config.sequences);
        }
    }
}

/// Runs the fade of every thinking prop and mirrors it to the glow and light
pub fn fade_glows(
    time: Res<Time>,
    mut props: Query<(&Think, &mut FadeController, &GlowHandle, &mut DynamicLight)>,
    mut glows: Query<&mut GlowSprite>,
) {
    let now = time.elapsed_secs_f64();
    for (think, mut fade, handle, mut light) in props.iter_mut() {
        if !think.is_due() || !fade.is_fading() {
            continue;
        }
        // a prop whose glow is gone holds its fade where it is
        let Ok(mut glow) = glows.get_mut(handle.0) else {
            continue;
        };

        if let Some(step) = fade.tick(now) {
            glow::apply_fade_step(&mut glow, &step);
            if light.enabled != step.light_enabled {
                light.enabled = step.light_enabled;
            }
        }
    }
}
