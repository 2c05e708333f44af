/// Error banner shared by the wizard's snapshot errors, synthesized
/// transport failures, and gate refusals. A hard-stop banner may carry no
/// message lines at all; the class alone marks the blocked transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    messages: Vec<String>,
    hard_stop: bool,
}

impl ErrorBanner {
    pub fn soft(messages: Vec<String>) -> Self {
        Self {
            messages,
            hard_stop: false,
        }
    }

    pub fn hard(messages: Vec<String>) -> Self {
        Self {
            messages,
            hard_stop: true,
        }
    }

    pub fn escalate(&mut self) {
        self.hard_stop = true;
    }

    pub fn is_hard(&self) -> bool {
        self.hard_stop
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn css_classes(&self) -> &'static str {
        if self.hard_stop {
            "alert errors"
        } else {
            "alert"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub lines: Vec<String>,
    pub css_classes: String,
    pub scroll_into_view: bool,
}

pub fn project_banner(banner: &ErrorBanner) -> BannerView {
    BannerView {
        lines: banner.messages().to_vec(),
        css_classes: banner.css_classes().to_string(),
        scroll_into_view: true,
    }
}
