//! Run context configuration

/// Configuration for a driver run.
///
/// Passed into [`crate::driver::run`]; controls whether individual
/// script steps are recorded.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Whether to record each step of the run (for debugging)
    pub trace: bool,
}

impl RunContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that records every step.
    pub fn traced() -> Self {
        Self { trace: true }
    }
}
