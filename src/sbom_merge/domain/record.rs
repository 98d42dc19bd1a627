use indexmap::IndexMap;
use std::hash::{Hash, Hasher};

/// Sentinel meaning "no claim is made about this attribute"
pub const NOASSERTION: &str = "NOASSERTION";

/// Kind of entity a record or relationship endpoint refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    File,
    Package,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::File => "file",
            EntityKind::Package => "package",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record - open attribute mapping describing a file or a package
///
/// The attribute set is not a fixed schema: parsers store whatever they
/// find and every attribute survives merging. Attribute order is the
/// insertion order, which keeps generated output stable.
///
/// Equality (and hashing) ignores attribute order, so two records are
/// equal when they carry the same attribute/value pairs.
#[derive(Debug, Clone, Default)]
pub struct Record {
    attributes: IndexMap<String, Option<String>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record with only the `name` attribute set
    pub fn named(name: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.set_value("name", name);
        record
    }

    /// Builder-style setter, mostly used by parsers and tests
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_value(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        self.attributes.insert(key.into(), value);
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, Some(value.into()));
    }

    /// Returns the value of an attribute; absent attributes and attributes
    /// without a value both yield `None`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(|v| v.as_deref())
    }

    /// Returns the raw slot for an attribute: `None` if the attribute is not
    /// present, `Some(None)` if present without a value
    pub fn slot(&self, key: &str) -> Option<Option<&str>> {
        self.attributes.get(key).map(|v| v.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn name(&self) -> &str {
        self.get("name").unwrap_or_default()
    }

    pub fn version(&self) -> Option<&str> {
        self.get("version")
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality is order-independent
        self.attributes == other.attributes
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut entries: Vec<(&String, &Option<String>)> = self.attributes.iter().collect();
        entries.sort_unstable();
        entries.hash(state);
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.set_value(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_named_record() {
        let record = Record::named("libfoo");
        assert_eq!(record.name(), "libfoo");
        assert_eq!(record.len(), 1);
        assert!(record.version().is_none());
    }

    #[test]
    fn test_missing_name_is_empty() {
        let record = Record::new();
        assert_eq!(record.name(), "");
        assert!(record.is_empty());
    }

    #[test]
    fn test_slot_distinguishes_absent_and_valueless() {
        let mut record = Record::named("libfoo");
        record.set("comment", None);

        assert_eq!(record.slot("comment"), Some(None));
        assert_eq!(record.slot("version"), None);
        assert!(record.get("comment").is_none());
        assert!(record.contains("comment"));
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut record = Record::named("a").with("version", "1.0").with("type", "library");
        record.set_value("version", "2.0");

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["name", "version", "type"]);
        assert_eq!(record.version(), Some("2.0"));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Record::named("libfoo").with("version", "1.0");
        let b = Record::new().with("version", "1.0").with("name", "libfoo");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_inequality_on_value() {
        let a = Record::named("libfoo").with("version", "1.0");
        let b = Record::named("libfoo").with("version", "1.1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_iterator() {
        let record: Record = [("name", "x"), ("licenseDeclared", "MIT")]
            .into_iter()
            .collect();
        assert_eq!(record.get("licenseDeclared"), Some("MIT"));
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::File.to_string(), "file");
        assert_eq!(EntityKind::Package.to_string(), "package");
    }
}
