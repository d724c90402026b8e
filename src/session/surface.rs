/// Display text shown after the last note of a session.
pub const COMPLETE_MESSAGE: &str = "Session Complete!";

/// Toggle labels.
pub const START_LABEL: &str = "Start";
pub const STOP_LABEL: &str = "Stop";

/// The UI the drill writes to.
///
/// Reads (tempo, string choice) flow the other way: the UI pushes them into
/// the drill between sessions.
pub trait ControlSurface {
    /// Replace the current-pitch display.
    fn show(&mut self, text: &str);

    /// Append to the current-pitch display.
    fn append(&mut self, text: &str);

    fn set_string_selector_enabled(&mut self, enabled: bool);

    fn set_toggle_label(&mut self, label: &str);
}

impl<S: ControlSurface + ?Sized> ControlSurface for Box<S> {
    fn show(&mut self, text: &str) {
        (**self).show(text)
    }

    fn append(&mut self, text: &str) {
        (**self).append(text)
    }

    fn set_string_selector_enabled(&mut self, enabled: bool) {
        (**self).set_string_selector_enabled(enabled)
    }

    fn set_toggle_label(&mut self, label: &str) {
        (**self).set_toggle_label(label)
    }
}
