use crate::sbom_merge::domain::NOASSERTION;

/// ConflictResolution policy for attributes that differ between two matched records
///
/// The policy is deliberately first-operand biased: the value from the first
/// document wins unless it is the `NOASSERTION` sentinel, in which case the
/// second document's value is taken. It is not a "most specific wins" rule;
/// a specific value in the second document never replaces a specific value
/// in the first.
pub struct ConflictResolution;

impl ConflictResolution {
    /// Picks the merged value for an attribute present in both records with
    /// differing values
    pub fn resolve<'a>(first: Option<&'a str>, second: Option<&'a str>) -> Option<&'a str> {
        if first == Some(NOASSERTION) {
            second
        } else {
            first
        }
    }
}
