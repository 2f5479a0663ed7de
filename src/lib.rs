//! Light fungi and light stalk props for Bevy
//!
//! Both props carry a glow sprite and a mirrored dynamic light. Fungi just
//! sit there glowing; stalks duck and go dark when the player touches them,
//! then rise and fade back in.

pub mod activity;
pub mod config;
pub mod error;
pub mod fade;
pub mod fungi;
pub mod glow;
pub mod level;
pub mod light;
pub mod outputs;
pub mod plugin;
pub mod prop;
pub mod stalk;
pub mod think;
pub mod touch;

#[cfg(test)]
mod testing;

pub use config::LightPropsConfig;
pub use error::PropsError;
pub use level::LevelFile;
pub use plugin::{LightPropsPlugin, LightPropsSet};
