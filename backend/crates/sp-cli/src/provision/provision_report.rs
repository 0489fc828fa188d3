use std::fmt;

/// What happened to a single input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Create call succeeded; carries the server-assigned id when returned
    Created(Option<String>),
    /// Dry run: the user is absent and would have been created
    WouldCreate,
    /// A user with the same userName already exists
    Skipped,
    /// userName already seen earlier in this batch
    Duplicate,
    /// Row has no userName
    Invalid,
    /// Lookup or create call failed
    Failed,
}

/// Per-run tally of row outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub created: usize,
    pub would_create: usize,
    pub skipped: usize,
    pub duplicate: usize,
    pub invalid: usize,
    pub failed: usize,
}

impl ProvisionReport {
    pub fn record(&mut self, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::Created(_) => self.created += 1,
            RowOutcome::WouldCreate => self.would_create += 1,
            RowOutcome::Skipped => self.skipped += 1,
            RowOutcome::Duplicate => self.duplicate += 1,
            RowOutcome::Invalid => self.invalid += 1,
            RowOutcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.would_create + self.skipped + self.duplicate + self.invalid + self.failed
    }

    /// A run succeeds when no lookup or create call failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for ProvisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows: {} created, {} would be created, {} already existed, {} duplicate, {} invalid, {} failed",
            self.total(),
            self.created,
            self.would_create,
            self.skipped,
            self.duplicate,
            self.invalid,
            self.failed
        )
    }
}
