use crate::sbom_merge::domain::{DiffCounter, Record};
use crate::sbom_merge::policies::ConflictResolution;
use tracing::debug;

/// How a single attribute was treated when two records were reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChange {
    /// Present in both with equal values
    Unchanged,
    /// Present in both with differing values
    Updated,
    /// Present only in the first record
    Additional,
    /// Present only in the second record
    New,
}

/// Result of reconciling two matched records
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub record: Record,
    pub changes: Vec<(String, AttributeChange)>,
    pub counter: DiffCounter,
}

impl Reconciliation {
    pub fn change_of(&self, attribute: &str) -> Option<AttributeChange> {
        self.changes
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, change)| *change)
    }
}

/// AttributeReconciler - merges the attributes of two matched records
///
/// The merged record holds the union of both attribute sets: first-record
/// attributes in their original order, followed by attributes only the
/// second record has. Differing values are settled by `ConflictResolution`.
pub struct AttributeReconciler;

impl AttributeReconciler {
    pub fn reconcile(first: &Record, second: &Record) -> Reconciliation {
        let mut record = Record::new();
        let mut changes = Vec::with_capacity(first.len().max(second.len()));
        let mut counter = DiffCounter::new();

        for (attribute, value) in first.iter() {
            let change = match second.slot(attribute) {
                Some(other) if other == value => {
                    record.set(attribute, value.map(String::from));
                    counter.unchanged += 1;
                    AttributeChange::Unchanged
                }
                Some(other) => {
                    let resolved = ConflictResolution::resolve(value, other);
                    debug!(
                        "{}: {} {:?} {:?} CHANGED TO {:?}",
                        first.name(),
                        attribute,
                        value,
                        other,
                        resolved
                    );
                    record.set(attribute, resolved.map(String::from));
                    counter.updated += 1;
                    AttributeChange::Updated
                }
                None => {
                    record.set(attribute, value.map(String::from));
                    counter.added += 1;
                    AttributeChange::Additional
                }
            };
            changes.push((attribute.to_string(), change));
        }

        for (attribute, value) in second.iter() {
            if first.contains(attribute) {
                continue;
            }
            debug!("{}: {} ---- {:?} NEW", first.name(), attribute, value);
            record.set(attribute, value.map(String::from));
            counter.added += 1;
            changes.push((attribute.to_string(), AttributeChange::New));
        }

        Reconciliation {
            record,
            changes,
            counter,
        }
    }
}
