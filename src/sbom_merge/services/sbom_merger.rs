use super::file_set_merger::FileSetMerger;
use super::package_set_merger::PackageSetMerger;
use super::relationship_rebuilder::RelationshipRebuilder;
use super::root_synthesizer::SyntheticRoot;
use crate::sbom_merge::domain::{MergeReport, MergedDocument, PackageKey, SbomDocument};
use indexmap::IndexMap;

/// SbomMerger - the reconciliation engine
///
/// Pure function over two parsed documents and a synthetic root: no I/O,
/// no shared state. Returns the merged document together with the report
/// of what was decided.
pub struct SbomMerger;

impl SbomMerger {
    /// Merges `second` into `first`
    ///
    /// Output layout:
    /// - packages: the synthetic root first, then the merged packages
    /// - relationships: the `DESCRIBES` edge, the rebuilt edges of `first`,
    ///   the rebuilt edges of `second`, then one `CONTAINS` edge per merged
    ///   package
    pub fn merge(
        first: &SbomDocument,
        second: &SbomDocument,
        root: SyntheticRoot,
    ) -> (MergedDocument, MergeReport) {
        let mut report = MergeReport::default();

        let files = FileSetMerger::merge(&first.files, &second.files);
        report.counter += files.counter;
        report.reconciled_files = files.reconciled;

        let merged_packages = PackageSetMerger::merge(&first.packages, &second.packages);
        report.counter += merged_packages.counter;
        report.reconciled_packages = merged_packages.reconciled;
        report.version_conflicts = merged_packages.conflicts;
        tracing::debug!(
            files = report.reconciled_files,
            packages = report.reconciled_packages,
            "entities matched by name"
        );

        let root_name = root.name().to_string();
        let mut packages: IndexMap<PackageKey, _> =
            IndexMap::with_capacity(merged_packages.entities.len() + 1);
        packages.insert(PackageKey::of(&root.package), root.package);
        packages.extend(merged_packages.entities);

        let mut relationships = Vec::with_capacity(
            first.relationships.len() + second.relationships.len() + packages.len() + 1,
        );
        relationships.push(root.describes);
        relationships.extend(RelationshipRebuilder::rebuild(first));
        relationships.extend(RelationshipRebuilder::rebuild(second));
        relationships.extend(RelationshipRebuilder::contains_edges(
            &root_name,
            packages.keys(),
        ));

        let merged = MergedDocument {
            files: files.entities,
            packages,
            relationships,
            root_package: root_name,
            document_root: root.document_root,
        };

        (merged, report)
    }
}
