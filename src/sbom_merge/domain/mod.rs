pub mod diff_counter;
pub mod document;
pub mod merge_report;
pub mod record;
pub mod relationship;
pub mod sbom_metadata;

pub use diff_counter::DiffCounter;
pub use document::{DocumentType, MergedDocument, PackageKey, SbomDocument};
pub use merge_report::{MergeReport, VersionConflict};
pub use record::{EntityKind, Record, NOASSERTION};
pub use relationship::{Relationship, CONTAINS, DEPENDS_ON, DESCRIBES};
pub use sbom_metadata::SbomMetadata;
