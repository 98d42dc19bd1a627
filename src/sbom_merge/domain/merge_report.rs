use super::diff_counter::DiffCounter;

/// Two same-named packages that declare different versions
///
/// Such a pair is never attribute-merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConflict {
    pub name: String,
    pub first_version: String,
    pub second_version: String,
}

impl std::fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Version mismatch for {} - {} {}",
            self.name, self.first_version, self.second_version
        )
    }
}

/// MergeReport - what the reconciliation engine decided
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub counter: DiffCounter,
    pub version_conflicts: Vec<VersionConflict>,
    /// Number of file pairs matched by name and reconciled
    pub reconciled_files: usize,
    /// Number of package pairs matched by name and reconciled
    pub reconciled_packages: usize,
}

impl MergeReport {
    pub fn has_differences(&self) -> bool {
        self.counter.has_differences()
    }
}
