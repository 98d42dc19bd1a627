use super::entity_set_merge::{merge_entity_sets, EntitySetMerge};
use crate::sbom_merge::domain::{EntityKind, PackageKey, Record, VersionConflict};

/// PackageSetMerger - merges the package collections of two documents
///
/// Packages are matched by name and keyed by (name, version). A name match
/// whose two records both declare a non-empty version, and the versions
/// differ, is never reconciled: the first document's package is dropped for
/// this merge, the second document's package is kept as an unmatched entity
/// and a `VersionConflict` is reported.
pub struct PackageSetMerger;

impl PackageSetMerger {
    pub fn merge(first: &[Record], second: &[Record]) -> EntitySetMerge<PackageKey> {
        merge_entity_sets(
            EntityKind::Package,
            first,
            second,
            PackageKey::of,
            Self::version_conflict,
        )
    }

    /// Returns the conflict if both packages declare differing non-empty versions
    pub fn version_conflict(first: &Record, second: &Record) -> Option<VersionConflict> {
        match (first.version(), second.version()) {
            (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() && a != b => {
                Some(VersionConflict {
                    name: first.name().to_string(),
                    first_version: a.to_string(),
                    second_version: b.to_string(),
                })
            }
            _ => None,
        }
    }
}
