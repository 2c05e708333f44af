pub mod controller;
pub mod state;
pub mod view;

pub use controller::WizardController;
pub use state::{
    details_from_response, StatusSnapshot, Step, StepId, StepPhase, WizardPhase, ALL_STEPS,
};
pub use view::{project_wizard_view, StepRow, WizardViewModel};
