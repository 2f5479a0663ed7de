use bevy::prelude::*;

use crate::activity::{Activity, ActivityClock};
use crate::config::LightPropsConfig;
use crate::fade::FadeController;
use crate::outputs::{LightOutput, OutputFired};
use crate::prop::{self, PropPlacement, PropRng};
use crate::think::Think;
use crate::touch::{Player, TouchEvent, TriggerBounds};

pub const CLASSNAME: &str = "npc_lightstalk";

/// Light stalk that ducks and goes dark when the player walks into it, then
/// rises and fades back in once the player has left it alone long enough.
#[derive(Component, Debug, Clone)]
pub struct LightStalk {
    /// Time after which a lowered stalk rises again
    pub hide_end_time: f64,
    pub hide_time: f32,
}

impl LightStalk {
    pub fn new(hide_time: f32) -> Self {
        Self {
            hide_end_time: 0.0,
            hide_time,
        }
    }
}

pub fn spawn_light_stalk(
    commands: &mut Commands,
    rng: &mut PropRng,
    config: &LightPropsConfig,
    placement: &PropPlacement,
    outputs: &mut EventWriter<OutputFired>,
) -> Entity {
    let tuning = config.stalk.tuning();
    let stalk = prop::spawn_light_prop(commands, rng, config, &tuning, placement, 1.0);

    let mut fade = FadeController::new(tuning.fade_time, tuning.max_brightness);
    light_rise(stalk, &mut fade, placement.now, outputs);

    commands.entity(stalk).insert((
        LightStalk::new(config.stalk.hide_time),
        TriggerBounds::new(
            Vec3::from_array(config.stalk.trigger_min),
            Vec3::from_array(config.stalk.trigger_max),
        ),
        fade,
    ));

    debug!("spawned {} {:?} at {}", CLASSNAME, stalk, placement.origin);
    stalk
}

fn light_rise(
    stalk: Entity,
    fade: &mut FadeController,
    now: f64,
    outputs: &mut EventWriter<OutputFired>,
) {
    outputs.write(OutputFired::new(stalk, LightOutput::OnRise));
    fade.begin_fade_in(now);
}

fn light_lower(
    stalk: Entity,
    fade: &mut FadeController,
    now: f64,
    outputs: &mut EventWriter<OutputFired>,
) {
    outputs.write(OutputFired::new(stalk, LightOutput::OnLower));
    fade.begin_fade_out(now);
}

/// Lowers stalks the player touches. Only the player counts, and every touch
/// pushes the stalk's rise time back.
pub fn handle_stalk_touches(
    time: Res<Time>,
    mut touches: EventReader<TouchEvent>,
    players: Query<(), With<Player>>,
    mut stalks: Query<(&mut LightStalk, &mut ActivityClock, &mut FadeController)>,
    mut outputs: EventWriter<OutputFired>,
) {
    let now = time.elapsed_secs_f64();
    for touch in touches.read() {
        if !players.contains(touch.other) {
            continue;
        }
        let Ok((mut stalk, mut clock, mut fade)) = stalks.get_mut(touch.entity) else {
            continue;
        };

        stalk.hide_end_time = now + f64::from(stalk.hide_time);
        if matches!(clock.activity(), Activity::Idle | Activity::Stand) {
            debug!("{:?} lowering", touch.entity);
            clock.set_activity(Activity::Crouch);
            light_lower(touch.entity, &mut fade, now, &mut outputs);
        }
    }
}

/// Per-think activity transitions of every stalk
pub fn stalk_think(
    time: Res<Time>,
    mut stalks: Query<(Entity, &Think, &LightStalk, &mut ActivityClock, &mut FadeController)>,
    mut outputs: EventWriter<OutputFired>,
) {
    let now = time.elapsed_secs_f64();
    for (entity, think, stalk, mut clock, mut fade) in stalks.iter_mut() {
        if !think.is_due() {
            continue;
        }

        match clock.activity() {
            Activity::Crouch if clock.is_finished() => {
                clock.set_activity(Activity::CrouchIdle);
            }
            Activity::CrouchIdle if now > stalk.hide_end_time => {
                debug!("{:?} rising", entity);
                clock.set_activity(Activity::Stand);
                light_rise(entity, &mut fade, now, &mut outputs);
            }
            Activity::Stand if clock.is_finished() => {
                clock.set_activity(Activity::Idle);
            }
            _ => {}
        }
    }
}
