//! Process exit status for a run.

/// How a run ended; maps to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No anonymous read or write access found.
    Secure,
    /// Anonymous read and/or write access found.
    Insecure,
    /// Anything unexpected outside the per-request error handling.
    Error,
    InvalidUrl,
    /// Ctrl-C.
    Interrupted,
}

impl Outcome {
    pub fn from_insecure(insecure: bool) -> Self {
        if insecure {
            Outcome::Insecure
        } else {
            Outcome::Secure
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Outcome::Secure => 0,
            Outcome::Insecure | Outcome::Error => 1,
            Outcome::InvalidUrl => 2,
            Outcome::Interrupted => 130,
        }
    }
}
