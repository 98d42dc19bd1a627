use super::record::EntityKind;

pub const DESCRIBES: &str = "DESCRIBES";
pub const CONTAINS: &str = "CONTAINS";
pub const DEPENDS_ON: &str = "DEPENDS_ON";

/// Relationship - typed directed edge between two named entities
///
/// `source_kind`/`target_kind` are derived while rebuilding edges against a
/// document. They are `None` for endpoints that are not entities, such as
/// the synthetic document root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship {
    source: String,
    relationship_type: String,
    target: String,
    source_kind: Option<EntityKind>,
    target_kind: Option<EntityKind>,
}

impl Relationship {
    pub fn new(
        source: impl Into<String>,
        relationship_type: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            relationship_type: relationship_type.into(),
            target: target.into(),
            source_kind: None,
            target_kind: None,
        }
    }

    pub fn with_kinds(mut self, source_kind: EntityKind, target_kind: EntityKind) -> Self {
        self.source_kind = Some(source_kind);
        self.target_kind = Some(target_kind);
        self
    }

    pub fn with_target_kind(mut self, target_kind: EntityKind) -> Self {
        self.target_kind = Some(target_kind);
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn relationship_type(&self) -> &str {
        &self.relationship_type
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn source_kind(&self) -> Option<EntityKind> {
        self.source_kind
    }

    pub fn target_kind(&self) -> Option<EntityKind> {
        self.target_kind
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.source, self.relationship_type, self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_relationship_has_no_kinds() {
        let rel = Relationship::new("app", DEPENDS_ON, "libfoo");
        assert_eq!(rel.source(), "app");
        assert_eq!(rel.relationship_type(), "DEPENDS_ON");
        assert_eq!(rel.target(), "libfoo");
        assert!(rel.source_kind().is_none());
        assert!(rel.target_kind().is_none());
    }

    #[test]
    fn test_with_kinds() {
        let rel = Relationship::new("app", CONTAINS, "main.c")
            .with_kinds(EntityKind::Package, EntityKind::File);
        assert_eq!(rel.source_kind(), Some(EntityKind::Package));
        assert_eq!(rel.target_kind(), Some(EntityKind::File));
    }

    #[test]
    fn test_display() {
        let rel = Relationship::new("SBOM-root", DESCRIBES, "root");
        assert_eq!(rel.to_string(), "SBOM-root DESCRIBES root");
    }
}
