//! Headless app harness for driving light props through time in tests

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use crate::activity::{Activity, ActivityClock};
use crate::config::LightPropsConfig;
use crate::fade::FadeController;
use crate::fungi;
use crate::glow::{GlowHandle, GlowSprite};
use crate::light::{DynamicLight, DynamicLightChanged, LightKeyValues};
use crate::outputs::{LightOutput, OutputFired};
use crate::plugin::{LightPropsPlugin, LightPropsSet};
use crate::prop::{PropPlacement, PropRng};
use crate::stalk::{self, LightStalk};
use crate::touch::Player;

pub const STEP: f64 = 0.05;

#[derive(Resource, Default)]
struct Recorded {
    outputs: Vec<(Entity, LightOutput)>,
    light_changes: Vec<DynamicLightChanged>,
}

fn record(
    mut recorded: ResMut<Recorded>,
    mut outputs: EventReader<OutputFired>,
    mut light_changes: EventReader<DynamicLightChanged>,
) {
    recorded
        .outputs
        .extend(outputs.read().map(|fired| (fired.caller, fired.output)));
    recorded.light_changes.extend(light_changes.read().copied());
}

pub struct TestWorld {
    pub app: App,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::with_config(LightPropsConfig {
            rng_seed: Some(1),
            ..Default::default()
        })
    }

    pub fn with_config(config: LightPropsConfig) -> Self {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<Recorded>()
            .insert_resource(config)
            .add_plugins(LightPropsPlugin)
            .add_systems(Update, record.after(LightPropsSet::Mirror));
        Self { app }
    }

    pub fn now(&self) -> f64 {
        self.app.world().resource::<Time>().elapsed_secs_f64()
    }

    /// Runs one frame without moving the clock
    pub fn settle(&mut self) {
        self.app.update();
    }

    pub fn step(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f64(STEP));
        self.app.update();
    }

    pub fn run_until(&mut self, until: f64) {
        while self.now() + STEP * 0.5 < until {
            self.step();
        }
    }

    fn placement(&self, origin: Vec3) -> PropPlacement {
        let config = self.app.world().resource::<LightPropsConfig>();
        let [r, g, b, a] = config.default_light_color;
        PropPlacement {
            origin,
            keyvalues: LightKeyValues {
                color: Srgba::rgba_u8(r, g, b, a),
                radius: config.default_radius,
            },
            now: self.now(),
        }
    }

    pub fn spawn_stalk(&mut self, origin: Vec3) -> Entity {
        let placement = self.placement(origin);
        let stalk = self
            .app
            .world_mut()
            .run_system_once(
                move |mut commands: Commands,
                      mut rng: ResMut<PropRng>,
                      config: Res<LightPropsConfig>,
                      mut outputs: EventWriter<OutputFired>| {
                    stalk::spawn_light_stalk(
                        &mut commands,
                        &mut rng,
                        &config,
                        &placement,
                        &mut outputs,
                    )
                },
            )
            .unwrap();
        self.settle();
        stalk
    }

    pub fn spawn_fungi(&mut self, origin: Vec3) -> Entity {
        let placement = self.placement(origin);
        let fungi = self
            .app
            .world_mut()
            .run_system_once(
                move |mut commands: Commands,
                      mut rng: ResMut<PropRng>,
                      config: Res<LightPropsConfig>| {
                    fungi::spawn_light_fungi(&mut commands, &mut rng, &config, &placement)
                },
            )
            .unwrap();
        self.settle();
        fungi
    }

    /// Puts something on top of `prop` for a single frame
    pub fn touch(&mut self, prop: Entity, is_player: bool) {
        let at = *self.app.world().get::<Transform>(prop).unwrap();
        let toucher = self.app.world_mut().spawn(at).id();
        if is_player {
            self.app.world_mut().entity_mut(toucher).insert(Player);
        }
        self.settle();
        self.app.world_mut().despawn(toucher);
    }

    pub fn set_playback_rate(&mut self, prop: Entity, rate: f32) {
        self.app
            .world_mut()
            .get_mut::<ActivityClock>(prop)
            .unwrap()
            .playback_rate = rate;
    }

    pub fn take_outputs(&mut self) -> Vec<(Entity, LightOutput)> {
        std::mem::take(&mut self.app.world_mut().resource_mut::<Recorded>().outputs)
    }

    pub fn take_light_changes(&mut self) -> Vec<DynamicLightChanged> {
        std::mem::take(&mut self.app.world_mut().resource_mut::<Recorded>().light_changes)
    }

    pub fn activity(&self, prop: Entity) -> Activity {
        self.app.world().get::<ActivityClock>(prop).unwrap().activity()
    }

    pub fn fade(&self, prop: Entity) -> FadeController {
        self.app.world().get::<FadeController>(prop).unwrap().clone()
    }

    pub fn stalk(&self, prop: Entity) -> LightStalk {
        self.app.world().get::<LightStalk>(prop).unwrap().clone()
    }

    pub fn light(&self, prop: Entity) -> DynamicLight {
        *self.app.world().get::<DynamicLight>(prop).unwrap()
    }

    pub fn glow_entity(&self, prop: Entity) -> Entity {
        self.app.world().get::<GlowHandle>(prop).unwrap().0
    }

    pub fn glow(&self, prop: Entity) -> GlowSprite {
        let glow = self.glow_entity(prop);
        self.app.world().get::<GlowSprite>(glow).unwrap().clone()
    }
}
