use serde::Deserialize;
use serde_json::Value;

use crate::api::PLUGIN_ID;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StepId {
    EnableSpi,
    AddUser,
    IncreaseBuffer,
    SetFrequency,
}

/// Wizard order. The last entry supplies the secret for the finish action.
pub const ALL_STEPS: [StepId; 4] = [
    StepId::EnableSpi,
    StepId::AddUser,
    StepId::IncreaseBuffer,
    StepId::SetFrequency,
];

impl StepId {
    pub fn command(self) -> &'static str {
        match self {
            StepId::EnableSpi => "enable_spi",
            StepId::AddUser => "adduser",
            StepId::IncreaseBuffer => "increase_buffer",
            StepId::SetFrequency => "set_frequency",
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            StepId::EnableSpi => "enableSPIStep",
            StepId::AddUser => "addUserStep",
            StepId::IncreaseBuffer => "increaseBufferStep",
            StepId::SetFrequency => "setFrequencyStep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StepId::EnableSpi => "Enable SPI",
            StepId::AddUser => "Add User",
            StepId::IncreaseBuffer => "Increase Buffer",
            StepId::SetFrequency => "Set Frequency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPhase {
    #[default]
    Unknown,
    Pending,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub phase: StepPhase,
}

impl Step {
    pub fn unknown(id: StepId) -> Self {
        Self {
            id,
            phase: StepPhase::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Incomplete,
    Complete,
    Finished,
}

/// Server-reported truth about wizard progress. Received after every
/// wizard-related command and on initial panel show, applied once, then
/// discarded. The server may omit fields; absent flags read as incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub spi_enabled: bool,
    #[serde(default)]
    pub adduser_done: bool,
    #[serde(default)]
    pub buffer_increased: bool,
    #[serde(default)]
    pub frequency_set: bool,
}

impl StatusSnapshot {
    pub fn is_complete(&self, id: StepId) -> bool {
        match id {
            StepId::EnableSpi => self.spi_enabled,
            StepId::AddUser => self.adduser_done,
            StepId::IncreaseBuffer => self.buffer_increased,
            StepId::SetFrequency => self.frequency_set,
        }
    }
}

/// Extracts the snapshot from the envelope the host delivers when the
/// wizard panel becomes visible: `{"rgb_status": {"details": {...}}}`.
pub fn details_from_response(response: &Value) -> Option<StatusSnapshot> {
    let details = response.get(PLUGIN_ID)?.get("details")?;
    serde_json::from_value(details.clone()).ok()
}
