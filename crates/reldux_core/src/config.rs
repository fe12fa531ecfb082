//! Session configuration.

/// What an `update` does when its target row does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRowPolicy {
    /// Abort the whole batch with `CoreError::NoSuchRow`.
    #[default]
    Fail,
    /// Skip the step; the rest of the batch still runs.
    Ignore,
    /// Apply the patch over a row holding only the id and store the result.
    Upsert,
}

/// Configuration shared by every session a schema opens.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Policy for updates of missing rows.
    pub missing_row: MissingRowPolicy,

    /// Whether `run()` checks the starting snapshot against the schema
    /// before applying anything.
    pub validate_snapshot: bool,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the missing row policy.
    #[must_use]
    pub const fn missing_row(mut self, policy: MissingRowPolicy) -> Self {
        self.missing_row = policy;
        self
    }

    /// Sets whether to validate the starting snapshot on `run()`.
    #[must_use]
    pub const fn validate_snapshot(mut self, value: bool) -> Self {
        self.validate_snapshot = value;
        self
    }
}
