use crate::sbom_merge::domain::Record;
use std::collections::HashMap;

/// IdentityMatcher - finds the record in another document that corresponds
/// to a given record
///
/// Files and packages are both matched by `name` alone; the package version
/// check happens afterwards in the package set merger.
///
/// When the searched collection holds several records with the same name,
/// the first one in iteration order is the match.
pub struct IdentityMatcher<'a> {
    records: &'a [Record],
    by_name: HashMap<&'a str, usize>,
    by_value: HashMap<&'a Record, usize>,
}

impl<'a> IdentityMatcher<'a> {
    /// Indexes `records` by name and by full value
    pub fn new(records: &'a [Record]) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_value = HashMap::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            by_name.entry(record.name()).or_insert(idx);
            by_value.entry(record).or_insert(idx);
        }

        Self {
            records,
            by_name,
            by_value,
        }
    }

    /// Returns the first record named `name` and its position
    pub fn find_by_name(&self, name: &str) -> Option<(usize, &'a Record)> {
        self.by_name
            .get(name)
            .map(|&idx| (idx, &self.records[idx]))
    }

    /// Returns the matching record for `record`, by name
    pub fn find_match(&self, record: &Record) -> Option<(usize, &'a Record)> {
        self.find_by_name(record.name())
    }

    /// Returns the position of a record equal to `record` in every attribute
    pub fn position_of_equal(&self, record: &Record) -> Option<usize> {
        self.by_value.get(record).copied()
    }

    pub fn contains_equal(&self, record: &Record) -> bool {
        self.by_value.contains_key(record)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }
}
