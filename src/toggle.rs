use serde_json::json;

use crate::api::{CommandClient, SwitchReply, PLUGIN_ID};
use crate::host::BindingHooks;

const FLIPSWITCH_COMMAND: &str = "flipswitch";

/// Current value of the remote switch. `Unknown` is the explicit initial
/// state and is kept whenever the first query fails or never resolves, so
/// the control never claims a value it has not seen from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchState {
    #[default]
    Unknown,
    On,
    Off,
}

impl SwitchState {
    fn from_lights_on(lights_on: bool) -> Self {
        if lights_on {
            SwitchState::On
        } else {
            SwitchState::Off
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SwitchState::Unknown => "unknown",
            SwitchState::On => "on",
            SwitchState::Off => "off",
        }
    }
}

/// Mirrors and mutates one remote binary switch. State changes only on a
/// server round trip; there is no optimistic flip.
pub struct ToggleController<C: CommandClient> {
    client: C,
    url: String,
    state: SwitchState,
}

impl<C: CommandClient> ToggleController<C> {
    pub fn new(client: C) -> Self {
        let url = client.build_url(PLUGIN_ID);
        Self {
            client,
            url,
            state: SwitchState::Unknown,
        }
    }

    pub fn state(&self) -> SwitchState {
        self.state
    }

    pub fn css_class(&self) -> &'static str {
        self.state.css_class()
    }

    /// Sends the flip command and applies the returned state regardless of
    /// the prior value. A failed round trip keeps the state as-is.
    pub fn flip_switch(&mut self) {
        match self.client.send_command(PLUGIN_ID, FLIPSWITCH_COMMAND, json!({})) {
            Ok(body) => match serde_json::from_value::<SwitchReply>(body) {
                Ok(reply) => self.state = SwitchState::from_lights_on(reply.lights_on),
                Err(err) => tracing::warn!(error = %err, "flipswitch reply was malformed"),
            },
            Err(err) => tracing::warn!(error = %err, "flipswitch request failed"),
        }
    }
}

impl<C: CommandClient> BindingHooks for ToggleController<C> {
    fn on_before_binding(&mut self) {
        match self.client.get_state(&self.url) {
            Ok(reply) => self.state = SwitchState::from_lights_on(reply.lights_on),
            Err(err) => {
                tracing::debug!(error = %err, "switch state query failed; staying unknown")
            }
        }
    }
}
