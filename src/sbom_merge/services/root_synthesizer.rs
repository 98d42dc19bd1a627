use crate::sbom_merge::domain::{EntityKind, Record, Relationship, DESCRIBES, NOASSERTION};
use std::path::Path;

/// Prefix marking the synthetic root package as a merge artifact
pub const ROOT_PACKAGE_PREFIX: &str = "MERGETOOL";

/// Prefix of the synthetic document root identifier
pub const DOCUMENT_ROOT_PREFIX: &str = "SBOM";

/// The fabricated package anchoring a merged document
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticRoot {
    pub package: Record,
    pub document_root: String,
    pub describes: Relationship,
}

impl SyntheticRoot {
    pub fn name(&self) -> &str {
        self.package.name()
    }
}

/// RootSynthesizer - creates the root package representing the merge itself
pub struct RootSynthesizer;

impl RootSynthesizer {
    /// Builds the root package and its `DESCRIBES` edge from the two input
    /// document paths
    ///
    /// The name is derived only from the file names, so the same inputs
    /// always yield the same root.
    pub fn synthesize(first: &Path, second: &Path) -> SyntheticRoot {
        let name = Self::root_package_name(first, second);
        let document_root = format!("{}-{}", DOCUMENT_ROOT_PREFIX, name);

        let mut package = Record::named(name.clone());
        package.set_value("type", "application");
        package.set_value("filesAnalyzed", "false");
        package.set_value("licenseDeclared", NOASSERTION);
        package.set_value("licenseConcluded", NOASSERTION);
        package.set_value("supplier_type", "UNKNOWN");
        package.set_value("supplier", NOASSERTION);

        let describes = Relationship::new(document_root.clone(), DESCRIBES, name)
            .with_target_kind(EntityKind::Package);

        SyntheticRoot {
            package,
            document_root,
            describes,
        }
    }

    /// `MERGETOOL-<first>-<second>` with each file name made identifier-safe
    pub fn root_package_name(first: &Path, second: &Path) -> String {
        format!(
            "{}-{}-{}",
            ROOT_PACKAGE_PREFIX,
            Self::safe_file_name(first),
            Self::safe_file_name(second)
        )
    }

    fn safe_file_name(path: &Path) -> String {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        file_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
}
