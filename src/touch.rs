use bevy::prelude::*;

use crate::glow::GlowSprite;

/// Marks the entity the light stalks react to
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Player;

/// Non-solid box around a prop that reports touches instead of blocking
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TriggerBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl TriggerBounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Whether a world-space point lies inside the box placed at `origin`
    pub fn contains(&self, origin: Vec3, point: Vec3) -> bool {
        let local = point - origin;
        local.cmpge(self.min).all() && local.cmple(self.max).all()
    }
}

/// `other` is overlapping `entity`'s trigger this frame
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    pub entity: Entity,
    pub other: Entity,
}

/// Reports a touch for every entity inside a trigger, every frame it stays there
pub fn detect_trigger_touches(
    triggers: Query<(Entity, &TriggerBounds, &Transform)>,
    // glows ride along on their props and never touch anything
    toucher: Query<(Entity, &Transform), (Without<TriggerBounds>, Without<GlowSprite>)>,
    mut touches: EventWriter<TouchEvent>,
) {
    for (entity, bounds, trigger_transform) in triggers.iter() {
        for (other, other_transform) in toucher.iter() {
            if bounds.contains(trigger_transform.translation, other_transform.translation) {
                touches.write(TouchEvent { entity, other });
            }
        }
    }
}
