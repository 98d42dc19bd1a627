use super::record::Record;
use super::relationship::Relationship;
use indexmap::IndexMap;

/// Concrete interchange dialect and encoding an input document was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    SpdxTagValue,
    SpdxJson,
    SpdxYaml,
    CycloneDxJson,
}

impl DocumentType {
    pub fn is_spdx(&self) -> bool {
        !matches!(self, DocumentType::CycloneDxJson)
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::SpdxTagValue => write!(f, "spdx (tag-value)"),
            DocumentType::SpdxJson => write!(f, "spdx (json)"),
            DocumentType::SpdxYaml => write!(f, "spdx (yaml)"),
            DocumentType::CycloneDxJson => write!(f, "cyclonedx (json)"),
        }
    }
}

/// SbomDocument - files, packages and relationships of one input document
///
/// Collections keep the order in which the parser produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SbomDocument {
    pub files: Vec<Record>,
    pub packages: Vec<Record>,
    pub relationships: Vec<Relationship>,
}

impl SbomDocument {
    pub fn new(
        files: Vec<Record>,
        packages: Vec<Record>,
        relationships: Vec<Relationship>,
    ) -> Self {
        Self {
            files,
            packages,
            relationships,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.packages.is_empty() && self.relationships.is_empty()
    }
}

/// Key of a merged package: same-named packages with different versions
/// are distinct entities
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageKey {
    pub name: String,
    pub version: Option<String>,
}

impl PackageKey {
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    pub fn of(record: &Record) -> Self {
        Self::new(record.name(), record.version().map(String::from))
    }
}

impl std::fmt::Display for PackageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

/// MergedDocument - output of the reconciliation engine
///
/// Files are keyed by name, packages by (name, version). Both maps keep
/// first-insertion order; a later write to an existing key replaces the
/// value in place.
#[derive(Debug, Clone, Default)]
pub struct MergedDocument {
    pub files: IndexMap<String, Record>,
    pub packages: IndexMap<PackageKey, Record>,
    pub relationships: Vec<Relationship>,
    /// Name of the synthetic root package
    pub root_package: String,
    /// Identifier of the synthetic document root that DESCRIBES the root package
    pub document_root: String,
}

impl MergedDocument {
    pub fn root(&self) -> Option<&Record> {
        self.packages
            .iter()
            .find(|(key, _)| key.name == self.root_package)
            .map(|(_, record)| record)
    }

    /// True when `name` is a merged file, a merged package or the synthetic root
    pub fn has_entity(&self, name: &str) -> bool {
        name == self.root_package
            || self.files.contains_key(name)
            || self.packages.keys().any(|key| key.name == name)
    }
}
