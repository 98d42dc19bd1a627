use std::ops::AddAssign;

/// DiffCounter - tally of merge decisions
///
/// - `unchanged`: attribute present in both records with the same value
/// - `updated`: attribute present in both records with differing values
/// - `added`: attribute present in only one of two matched records
/// - `merged`: entity copied verbatim because it exists in one document only
///
/// Counters only ever grow; partial counters produced by the individual
/// merge steps are combined with `+=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffCounter {
    pub unchanged: usize,
    pub updated: usize,
    pub added: usize,
    pub merged: usize,
}

impl DiffCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the merge produced anything that differs from either input
    pub fn has_differences(&self) -> bool {
        self.updated + self.added + self.merged > 0
    }
}

impl AddAssign for DiffCounter {
    fn add_assign(&mut self, other: Self) {
        self.unchanged += other.unchanged;
        self.updated += other.updated;
        self.added += other.added;
        self.merged += other.merged;
    }
}
