use crate::shared::banner::{project_banner, BannerView, ErrorBanner};
use crate::wizard::state::{Step, StepPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    pub element_id: &'static str,
    pub label: &'static str,
    pub css_class: &'static str,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardViewModel {
    pub banner: Option<BannerView>,
    pub steps: Vec<StepRow>,
}

/// Pure projection of controller state. The host rebuilds its markup from
/// this on every update; nothing here is diffed or retained.
pub fn project_wizard_view(steps: &[Step], banner: Option<&ErrorBanner>) -> WizardViewModel {
    WizardViewModel {
        banner: banner.map(project_banner),
        steps: steps
            .iter()
            .map(|step| StepRow {
                element_id: step.id.element_id(),
                label: step.id.label(),
                css_class: if step.phase == StepPhase::Complete {
                    "complete"
                } else {
                    ""
                },
                submit_enabled: step.phase != StepPhase::Complete,
            })
            .collect(),
    }
}
