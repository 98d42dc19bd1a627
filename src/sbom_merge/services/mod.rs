mod attribute_reconciler;
mod entity_set_merge;
mod file_set_merger;
mod identity_matcher;
mod metadata_generator;
mod package_set_merger;
mod relationship_rebuilder;
mod root_synthesizer;
mod sbom_merger;

pub use attribute_reconciler::{AttributeChange, AttributeReconciler, Reconciliation};
pub use entity_set_merge::EntitySetMerge;
pub use file_set_merger::FileSetMerger;
pub use identity_matcher::IdentityMatcher;
pub use metadata_generator::{MetadataGenerator, TOOL_NAME};
pub use package_set_merger::PackageSetMerger;
pub use relationship_rebuilder::RelationshipRebuilder;
pub use root_synthesizer::{RootSynthesizer, SyntheticRoot};
pub use sbom_merger::SbomMerger;
