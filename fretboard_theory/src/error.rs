// Error type for pitch-class lookups.
//
// A name outside the 12 canonical pitch classes is the only thing that can
// go wrong inside the engine. Callers at the request boundary use
// `params::sanitize_root`, which defaults instead of surfacing this.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A note name that is not one of C, C#, D, ... B.
    #[error("invalid note name '{0}'")]
    InvalidNote(String),

    /// Same lookup failure, reported for a name used as a root.
    #[error("invalid root note '{0}'")]
    InvalidRoot(String),
}
