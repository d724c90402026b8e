//! Session sequencing: tempo, timed tasks, and the drill state machine.

/// The drill state machine and selection context.
pub mod drill;
/// Cooperative task queue with per-session cancellation.
pub mod scheduler;
/// What the drill writes to the UI.
pub mod surface;
/// Beats per minute and the announce interval.
pub mod tempo;

pub use drill::{Drill, DrillConfig, SessionState};
pub use scheduler::{Scheduler, SessionId, Task};
pub use surface::{ControlSurface, COMPLETE_MESSAGE, START_LABEL, STOP_LABEL};
pub use tempo::Tempo;
