use serde_json::Value;

/// Hook surface the host's wizard drives. The host delivers details when the
/// panel becomes visible, consults the gate predicates before a tab change
/// or finish (a `false` return blocks the transition), and calls the finish
/// hook exactly once after the finish gate has passed.
pub trait WizardHooks {
    fn on_wizard_details(&mut self, response: &Value);
    fn on_before_wizard_tab_change(&mut self) -> bool;
    fn on_before_wizard_finish(&mut self) -> bool;
    fn on_wizard_finish(&mut self);
}

/// Hook called once when a bound control becomes visible.
pub trait BindingHooks {
    fn on_before_binding(&mut self);
}

/// Registration metadata the host keeps in its view-model registry.
/// Construction stays with the host; controllers take their capabilities by
/// constructor injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModelRegistration {
    pub name: &'static str,
    pub dependencies: &'static [&'static str],
    pub elements: &'static [&'static str],
}

pub const REGISTRATIONS: [ViewModelRegistration; 2] = [
    ViewModelRegistration {
        name: "RGBStatusWizardViewModel",
        dependencies: &["wizardViewModel"],
        elements: &["#wizard_plugin_rgb_status"],
    },
    ViewModelRegistration {
        name: "RGBStatusNavbarViewModel",
        dependencies: &[],
        elements: &["#navbar_plugin_rgb_status"],
    },
];
