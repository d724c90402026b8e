use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrillError {
    #[error("cannot change the {0} while a session is running")]
    SessionRunning(&'static str),

    #[error("pitch table has {len} entries but the string window needs {needed}")]
    TableTooShort { needed: usize, len: usize },

    #[error("no speech program found (tried {tried})")]
    VoiceNotFound { tried: String },

    #[error("speech program `{program}` is not usable")]
    VoiceUnavailable {
        program: String,
        #[source]
        source: which::Error,
    },
}
