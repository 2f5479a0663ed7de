use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use light_props::light::DynamicLightChanged;
use light_props::outputs::OutputFired;
use light_props::touch::Player;
use light_props::{LevelFile, LightPropsConfig, LightPropsPlugin};

const CONFIG_PATH: &str = "assets/light_props.ron";
const LEVEL_PATH: &str = "assets/levels/grotto.ron";

/// Seconds the demo runs before exiting
const RUN_TIME: f32 = 20.0;

fn main() -> AppExit {
    let config = match LightPropsConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return AppExit::error();
        }
    };
    let level = match LevelFile::load(LEVEL_PATH) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .insert_resource(config)
        .insert_resource(level)
        .add_plugins(LightPropsPlugin)
        .add_systems(Startup, spawn_wanderer)
        .add_systems(Update, (walk_wanderer, report, quit_after_run_time))
        .run()
}

/// Player stand-in pacing back and forth through the grotto
#[derive(Component)]
struct Wanderer {
    from: Vec3,
    to: Vec3,
    speed: f32,
    heading_out: bool,
}

fn spawn_wanderer(mut commands: Commands) {
    let from = Vec3::new(-400.0, 0.0, 16.0);
    commands.spawn((
        Player,
        Transform::from_translation(from),
        Wanderer {
            from,
            to: Vec3::new(400.0, 0.0, 16.0),
            speed: 120.0,
            heading_out: true,
        },
    ));
    info!("Wanderer spawned");
}

fn walk_wanderer(time: Res<Time>, mut query: Query<(&mut Wanderer, &mut Transform)>) {
    for (mut wanderer, mut transform) in query.iter_mut() {
        let goal = if wanderer.heading_out {
            wanderer.to
        } else {
            wanderer.from
        };
        let step = wanderer.speed * time.delta_secs();
        let delta = goal - transform.translation;

        if delta.length() <= step {
            transform.translation = goal;
            wanderer.heading_out = !wanderer.heading_out;
        } else {
            transform.translation += delta.normalize() * step;
        }
    }
}

fn report(
    time: Res<Time>,
    mut outputs: EventReader<OutputFired>,
    mut lights: EventReader<DynamicLightChanged>,
) {
    for fired in outputs.read() {
        info!(
            "[{:.1}s] {:?} fired {}",
            time.elapsed_secs(),
            fired.caller,
            fired.output.as_str()
        );
    }
    for change in lights.read() {
        match change.to_ron() {
            Ok(payload) => info!("[{:.1}s] light update {}", time.elapsed_secs(), payload),
            Err(e) => warn!("dropping light update for {:?}: {}", change.entity, e),
        }
    }
}

fn quit_after_run_time(time: Res<Time>, mut exit: EventWriter<AppExit>) {
    if time.elapsed_secs() >= RUN_TIME {
        info!("Demo finished");
        exit.write(AppExit::Success);
    }
}
