use super::entity_set_merge::{merge_entity_sets, EntitySetMerge};
use crate::sbom_merge::domain::{EntityKind, Record};

/// FileSetMerger - merges the file collections of two documents
///
/// Files are matched and keyed by name.
pub struct FileSetMerger;

impl FileSetMerger {
    pub fn merge(first: &[Record], second: &[Record]) -> EntitySetMerge<String> {
        merge_entity_sets(
            EntityKind::File,
            first,
            second,
            |record| record.name().to_string(),
            |_, _| None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, checksum: &str) -> Record {
        Record::named(name)
            .with("checksum", checksum)
            .with("licenseConcluded", "NOASSERTION")
    }

    #[test]
    fn test_disjoint_files_are_all_copied() {
        let first = vec![file("src/a.c", "SHA1: 01")];
        let second = vec![file("src/b.c", "SHA1: 02")];

        let result = FileSetMerger::merge(&first, &second);

        let names: Vec<&str> = result.entities.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["src/a.c", "src/b.c"]);
        assert_eq!(result.counter.merged, 2);
        assert_eq!(result.counter.unchanged, 0);
    }

    #[test]
    fn test_name_match_is_reconciled() {
        let first = vec![file("src/a.c", "SHA1: 01")];
        let second = vec![Record::named("src/a.c")
            .with("checksum", "SHA1: 01")
            .with("licenseConcluded", "MIT")
            .with("copyrightText", "(c) Acme")];

        let result = FileSetMerger::merge(&first, &second);

        assert_eq!(result.entities.len(), 1);
        let merged = &result.entities["src/a.c"];
        assert_eq!(merged.get("licenseConcluded"), Some("MIT"));
        assert_eq!(merged.get("copyrightText"), Some("(c) Acme"));
        assert_eq!(result.reconciled, 1);
        assert_eq!(result.counter.unchanged, 2);
        assert_eq!(result.counter.updated, 1);
        assert_eq!(result.counter.added, 1);
        assert_eq!(result.counter.merged, 0);
    }

    #[test]
    fn test_identical_files_merge_once() {
        let first = vec![file("src/a.c", "SHA1: 01")];
        let second = first.clone();

        let result = FileSetMerger::merge(&first, &second);

        assert_eq!(result.entities.len(), 1);
        assert!(!result.counter.has_differences());
    }

    #[test]
    fn test_empty_first_document_copies_second() {
        let second = vec![file("src/a.c", "SHA1: 01"), file("src/b.c", "SHA1: 02")];

        let result = FileSetMerger::merge(&[], &second);

        assert_eq!(result.entities.len(), 2);
        assert_eq!(result.counter.merged, 2);
        assert_eq!(result.counter.unchanged, 0);
        assert!(result.counter.has_differences());
    }

    #[test]
    fn test_same_name_in_second_overwrites_key() {
        let second = vec![file("src/a.c", "SHA1: 01"), file("src/a.c", "SHA1: 02")];

        let result = FileSetMerger::merge(&[], &second);

        assert_eq!(result.entities.len(), 1);
        assert_eq!(result.entities["src/a.c"].get("checksum"), Some("SHA1: 02"));
    }
}
