use super::attribute_reconciler::AttributeReconciler;
use super::identity_matcher::IdentityMatcher;
use crate::sbom_merge::domain::{DiffCounter, EntityKind, Record, VersionConflict};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, info};

/// Outcome of merging two entity collections of the same kind
#[derive(Debug, Clone)]
pub struct EntitySetMerge<K: Hash + Eq> {
    pub entities: IndexMap<K, Record>,
    pub counter: DiffCounter,
    pub reconciled: usize,
    pub conflicts: Vec<VersionConflict>,
}

/// Merge pass shared by the file and package set mergers
///
/// 1. Every record of `first` is kept. If `second` holds an identical record
///    the pair is reconciled (all attributes unchanged). Otherwise the first
///    same-named record of `second` is reconciled with it, unless `veto`
///    rejects the pair; a vetoed first record is dropped. Without any name
///    match the record is copied verbatim and counted as merged.
/// 2. Records of `second` that are neither identical to a record of `first`
///    nor consumed by a name match in step 1 are copied verbatim and counted
///    as merged.
///
/// Records are stored under `key_of`; a later record with an existing key
/// replaces the earlier one in place.
pub(crate) fn merge_entity_sets<K, F, V>(
    kind: EntityKind,
    first: &[Record],
    second: &[Record],
    key_of: F,
    veto: V,
) -> EntitySetMerge<K>
where
    K: Hash + Eq,
    F: Fn(&Record) -> K,
    V: Fn(&Record, &Record) -> Option<VersionConflict>,
{
    let first_index = IdentityMatcher::new(first);
    let second_index = IdentityMatcher::new(second);

    let mut entities = IndexMap::with_capacity(first.len() + second.len());
    let mut counter = DiffCounter::new();
    let mut reconciled = 0;
    let mut conflicts = Vec::new();
    let mut consumed: HashSet<usize> = HashSet::new();

    for record in first {
        if let Some(idx) = second_index.position_of_equal(record) {
            let result = AttributeReconciler::reconcile(record, &second[idx]);
            counter += result.counter;
            entities.insert(key_of(&result.record), result.record);
            continue;
        }

        match second_index.find_match(record) {
            Some((idx, candidate)) => {
                if let Some(conflict) = veto(record, candidate) {
                    info!("[ERROR] {}", conflict);
                    conflicts.push(conflict);
                    continue;
                }
                let result = AttributeReconciler::reconcile(record, candidate);
                counter += result.counter;
                reconciled += 1;
                consumed.insert(idx);
                entities.insert(key_of(&result.record), result.record);
            }
            None => {
                debug!("{} {}: UNIQUE 1", kind, record.name());
                counter.merged += 1;
                entities.insert(key_of(record), record.clone());
            }
        }
    }

    for (idx, record) in second.iter().enumerate() {
        if consumed.contains(&idx) || first_index.contains_equal(record) {
            continue;
        }
        debug!("{} {}: UNIQUE 2", kind, record.name());
        counter.merged += 1;
        entities.insert(key_of(record), record.clone());
    }

    EntitySetMerge {
        entities,
        counter,
        reconciled,
        conflicts,
    }
}
