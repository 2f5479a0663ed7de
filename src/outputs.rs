use bevy::prelude::*;

/// Outputs a level designer can wire from a light stalk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightOutput {
    OnRise,
    OnLower,
}

impl LightOutput {
    /// Name used in level files
    pub fn as_str(&self) -> &'static str {
        match self {
            LightOutput::OnRise => "OnRise",
            LightOutput::OnLower => "OnLower",
        }
    }
}

/// An output fired by a prop; whatever is wired to it reacts downstream
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFired {
    pub caller: Entity,
    pub output: LightOutput,
}

impl OutputFired {
    pub fn new(caller: Entity, output: LightOutput) -> Self {
        Self { caller, output }
    }
}

pub fn log_fired_outputs(mut fired: EventReader<OutputFired>) {
    for event in fired.read() {
        debug!("{:?} fired {}", event.caller, event.output.as_str());
    }
}
