use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::api::{CommandClient, PLUGIN_ID};
use crate::host::WizardHooks;
use crate::shared::banner::ErrorBanner;
use crate::wizard::state::{
    details_from_response, StatusSnapshot, Step, StepId, StepPhase, WizardPhase, ALL_STEPS,
};
use crate::wizard::view::{project_wizard_view, WizardViewModel};

const REBOOT_COMMAND: &str = "reboot";

/// Drives the fixed set of setup steps to completion and gates wizard
/// navigation on "all steps complete". Completion is only ever taken from a
/// server snapshot; a successful submission feeds its response snapshot back
/// through `apply_snapshot` rather than flipping any flag directly.
pub struct WizardController<C: CommandClient> {
    client: C,
    steps: Vec<Step>,
    secrets: BTreeMap<StepId, String>,
    banner: Option<ErrorBanner>,
    finished: bool,
}

impl<C: CommandClient> WizardController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            steps: ALL_STEPS.iter().copied().map(Step::unknown).collect(),
            secrets: BTreeMap::new(),
            banner: None,
            finished: false,
        }
    }

    /// Records the current value of a step's secret input. The presentation
    /// layer pushes this in on every input change; the server validates it.
    pub fn set_secret(&mut self, id: StepId, value: impl Into<String>) {
        self.secrets.insert(id, value.into());
    }

    pub fn secret(&self, id: StepId) -> &str {
        self.secrets.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Declarative re-render from a fresh snapshot. The snapshot is fully
    /// authoritative: a flag that regressed demotes its step back to
    /// `Pending`. Repeated application of the same snapshot is a no-op.
    pub fn apply_snapshot(&mut self, snapshot: &StatusSnapshot) {
        self.banner = if snapshot.errors.is_empty() {
            None
        } else {
            Some(ErrorBanner::soft(snapshot.errors.clone()))
        };
        for step in &mut self.steps {
            step.phase = if snapshot.is_complete(step.id) {
                StepPhase::Complete
            } else {
                StepPhase::Pending
            };
        }
    }

    /// Submits one step with its current secret. Completed steps have no
    /// handler and ignore the call. Failures are absorbed: a generic line is
    /// surfaced on the banner and the step stays pending for resubmission.
    pub fn submit_step(&mut self, id: StepId) {
        if self.step_phase(id) == StepPhase::Complete {
            return;
        }
        let payload = json!({ "password": self.secret(id) });
        match self.client.send_command(PLUGIN_ID, id.command(), payload) {
            Ok(body) => match serde_json::from_value::<StatusSnapshot>(body) {
                Ok(snapshot) => self.apply_snapshot(&snapshot),
                Err(err) => self.surface_failure(id, &err.to_string()),
            },
            Err(err) => self.surface_failure(id, &err.to_string()),
        }
    }

    fn surface_failure(&mut self, id: StepId, detail: &str) {
        tracing::warn!(step = id.command(), detail, "step submission failed");
        self.banner = Some(ErrorBanner::soft(vec![format!(
            "{} failed: {detail}",
            id.label()
        )]));
    }

    /// Local gate consulted by the host before a tab change or finish. Never
    /// re-queries the server; it trusts the last applied snapshot. A refusal
    /// escalates whatever banner is showing to the hard-stop class, adding an
    /// empty hard banner when none is up.
    pub fn can_advance(&mut self) -> bool {
        if self.steps.iter().all(|s| s.phase == StepPhase::Complete) {
            return true;
        }
        let mut banner = self.banner.take().unwrap_or_default();
        banner.escalate();
        self.banner = Some(banner);
        tracing::debug!("wizard advance blocked; steps incomplete");
        false
    }

    /// Terminal action, called by the host once after the gate has passed.
    /// Sends `reboot` with the last step's secret. The remote system restarts
    /// and usually drops the connection, so the outcome is not surfaced.
    pub fn finish(&mut self) {
        let payload = json!({ "password": self.secret(StepId::SetFrequency) });
        if let Err(err) = self.client.send_command(PLUGIN_ID, REBOOT_COMMAND, payload) {
            tracing::debug!(error = %err, "reboot dispatch ended without a clean response");
        }
        self.finished = true;
    }

    pub fn phase(&self) -> WizardPhase {
        if self.finished {
            WizardPhase::Finished
        } else if self.steps.iter().all(|s| s.phase == StepPhase::Complete) {
            WizardPhase::Complete
        } else {
            WizardPhase::Incomplete
        }
    }

    pub fn step_phase(&self, id: StepId) -> StepPhase {
        self.steps
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.phase)
            .unwrap_or_default()
    }

    pub fn banner(&self) -> Option<&ErrorBanner> {
        self.banner.as_ref()
    }

    pub fn view(&self) -> WizardViewModel {
        project_wizard_view(&self.steps, self.banner.as_ref())
    }
}

impl<C: CommandClient> WizardHooks for WizardController<C> {
    fn on_wizard_details(&mut self, response: &Value) {
        match details_from_response(response) {
            Some(snapshot) => self.apply_snapshot(&snapshot),
            None => tracing::warn!("wizard details payload was missing or malformed"),
        }
    }

    fn on_before_wizard_tab_change(&mut self) -> bool {
        self.can_advance()
    }

    fn on_before_wizard_finish(&mut self) -> bool {
        self.can_advance()
    }

    fn on_wizard_finish(&mut self) {
        self.finish();
    }
}
