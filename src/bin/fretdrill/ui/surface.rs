//! Terminal-side state the drill writes into

use fretdrill::session::{ControlSurface, START_LABEL};

/// What the drill last told the UI to show.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    pub display: String,
    pub selector_enabled: bool,
    pub toggle_label: String,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            display: String::new(),
            selector_enabled: true,
            toggle_label: START_LABEL.to_string(),
        }
    }
}

impl ControlSurface for TerminalSurface {
    fn show(&mut self, text: &str) {
        self.display.clear();
        self.display.push_str(text);
    }

    fn append(&mut self, text: &str) {
        self.display.push_str(text);
    }

    fn set_string_selector_enabled(&mut self, enabled: bool) {
        self.selector_enabled = enabled;
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle_label = label.to_string();
    }
}
