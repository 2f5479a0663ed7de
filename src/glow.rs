use bevy::prelude::*;

use crate::fade::FadeStep;

/// How the renderer composites a sprite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    Normal,
    #[default]
    Glow,
}

/// Extra render effect applied on top of the render mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFx {
    None,
    #[default]
    GlowShell,
}

/// Decorative billboard glow attached to a light prop.
///
/// The glow lives on its own entity, a child of the prop. Props keep a
/// [`GlowHandle`] to it and only ever change its brightness after spawning it.
#[derive(Component, Debug, Clone)]
pub struct GlowSprite {
    pub sprite: String,
    pub render_mode: RenderMode,
    pub render_fx: RenderFx,
    pub color: Srgba,
    /// 0-255 render amount, like the color's alpha channel
    pub brightness: f32,
    pub scale: f32,
    /// Model attachment point on the prop
    pub attachment: u8,
}

impl GlowSprite {
    /// A glow tinted with `color`, starting out as bright as the color's alpha
    pub fn new(sprite: impl Into<String>, color: Srgba) -> Self {
        Self {
            sprite: sprite.into(),
            render_mode: RenderMode::Glow,
            render_fx: RenderFx::GlowShell,
            color,
            brightness: color.alpha * 255.0,
            scale: 1.0,
            attachment: 1,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Non-owning reference from a prop to its glow sprite entity
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowHandle(pub Entity);

/// Spawns the glow as a child of `prop`, `height` above its origin, and links
/// it back with a [`GlowHandle`]
pub fn attach_glow(
    commands: &mut Commands,
    prop: Entity,
    glow: GlowSprite,
    height: f32,
) -> Entity {
    let glow = commands
        .spawn((glow, Transform::from_xyz(0.0, 0.0, height), ChildOf(prop)))
        .id();
    commands.entity(prop).insert(GlowHandle(glow));
    glow
}

/// Pushes a fade step onto the glow
pub fn apply_fade_step(glow: &mut GlowSprite, step: &FadeStep) {
    glow.brightness = step.brightness;
}
