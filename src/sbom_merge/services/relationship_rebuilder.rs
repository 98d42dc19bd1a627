use crate::sbom_merge::domain::{EntityKind, PackageKey, Relationship, SbomDocument, CONTAINS};
use std::collections::HashSet;

/// RelationshipRebuilder - re-derives relationship edges for the merged document
///
/// Edges are resolved against the entities of the document they came from,
/// not against the merged collections. An edge whose source or target names
/// no file or package of its own document is dropped without error.
pub struct RelationshipRebuilder;

impl RelationshipRebuilder {
    /// Rebuilds the edges of one source document, in document order
    pub fn rebuild(document: &SbomDocument) -> Vec<Relationship> {
        let files: HashSet<&str> = document.files.iter().map(|f| f.name()).collect();
        let packages: HashSet<&str> = document.packages.iter().map(|p| p.name()).collect();

        let resolve = |name: &str| {
            if files.contains(name) {
                Some(EntityKind::File)
            } else if packages.contains(name) {
                Some(EntityKind::Package)
            } else {
                None
            }
        };

        document
            .relationships
            .iter()
            .filter_map(|rel| {
                let source_kind = resolve(rel.source())?;
                let target_kind = resolve(rel.target())?;
                Some(
                    Relationship::new(rel.source(), rel.relationship_type(), rel.target())
                        .with_kinds(source_kind, target_kind),
                )
            })
            .collect()
    }

    /// One `CONTAINS` edge from the root package to every merged package,
    /// the root package included
    pub fn contains_edges<'a>(
        root_package: &str,
        packages: impl IntoIterator<Item = &'a PackageKey>,
    ) -> Vec<Relationship> {
        packages
            .into_iter()
            .map(|key| {
                Relationship::new(root_package, CONTAINS, key.name.as_str())
                    .with_kinds(EntityKind::Package, EntityKind::Package)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_merge::domain::{Record, DEPENDS_ON};

    fn document() -> SbomDocument {
        SbomDocument::new(
            vec![Record::named("src/main.c")],
            vec![
                Record::named("app").with("version", "1.0"),
                Record::named("libfoo").with("version", "2.0"),
            ],
            vec![
                Relationship::new("SPDXRef-DOCUMENT", "DESCRIBES", "app"),
                Relationship::new("app", DEPENDS_ON, "libfoo"),
                Relationship::new("app", CONTAINS, "src/main.c"),
                Relationship::new("app", DEPENDS_ON, "libmissing"),
            ],
        )
    }

    #[test]
    fn test_resolved_edges_keep_type_and_order() {
        let edges = RelationshipRebuilder::rebuild(&document());

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].source(), "app");
        assert_eq!(edges[0].relationship_type(), "DEPENDS_ON");
        assert_eq!(edges[0].target(), "libfoo");
        assert_eq!(edges[0].source_kind(), Some(EntityKind::Package));
        assert_eq!(edges[0].target_kind(), Some(EntityKind::Package));

        assert_eq!(edges[1].target(), "src/main.c");
        assert_eq!(edges[1].target_kind(), Some(EntityKind::File));
    }

    #[test]
    fn test_unresolvable_endpoints_are_dropped() {
        let edges = RelationshipRebuilder::rebuild(&document());
        assert!(edges.iter().all(|e| e.target() != "libmissing"));
        assert!(edges.iter().all(|e| e.source() != "SPDXRef-DOCUMENT"));
    }

    #[test]
    fn test_self_edge_resolves() {
        let doc = SbomDocument::new(
            vec![],
            vec![Record::named("app")],
            vec![Relationship::new("app", "DEPENDS_ON", "app")],
        );
        assert_eq!(RelationshipRebuilder::rebuild(&doc).len(), 1);
    }

    #[test]
    fn test_file_classification_wins_over_package() {
        let doc = SbomDocument::new(
            vec![Record::named("shared")],
            vec![Record::named("shared"), Record::named("app")],
            vec![Relationship::new("app", CONTAINS, "shared")],
        );
        let edges = RelationshipRebuilder::rebuild(&doc);
        assert_eq!(edges[0].target_kind(), Some(EntityKind::File));
    }

    #[test]
    fn test_empty_document_has_no_edges() {
        assert!(RelationshipRebuilder::rebuild(&SbomDocument::default()).is_empty());
    }

    #[test]
    fn test_contains_edges() {
        let keys = vec![
            PackageKey::new("ROOT", None),
            PackageKey::new("libfoo", Some("1.0".to_string())),
        ];
        let edges = RelationshipRebuilder::contains_edges("ROOT", &keys);

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].to_string(), "ROOT CONTAINS ROOT");
        assert_eq!(edges[1].to_string(), "ROOT CONTAINS libfoo");
        assert!(edges
            .iter()
            .all(|e| e.source_kind() == Some(EntityKind::Package)));
    }
}
