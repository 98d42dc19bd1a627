use crate::ports::outbound::SbomFormatter;
use crate::sbom_merge::domain::{MergedDocument, Record, SbomMetadata, DESCRIBES, NOASSERTION};
use crate::shared::error::SbomError;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bom {
    bom_format: String,
    spec_version: String,
    serial_number: String,
    version: u32,
    metadata: Metadata,
    components: Vec<Component>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize)]
struct Dependency {
    #[serde(rename = "ref")]
    bom_ref: String,
    #[serde(rename = "dependsOn", skip_serializing_if = "Vec::is_empty")]
    depends_on: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Tools,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<Component>,
}

#[derive(Debug, Serialize)]
struct Tools {
    components: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "type")]
    component_type: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supplier: Option<Supplier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hashes: Vec<Hash>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<License>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
}

#[derive(Debug, Serialize)]
struct Supplier {
    name: String,
}

#[derive(Debug, Serialize)]
struct Hash {
    alg: String,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum License {
    Single { license: LicenseContent },
    Expression { expression: String },
}

#[derive(Debug, Serialize)]
struct LicenseContent {
    id: String,
}

/// Component types defined by CycloneDX 1.6
const COMPONENT_TYPES: &[&str] = &[
    "application",
    "framework",
    "library",
    "container",
    "platform",
    "operating-system",
    "device",
    "device-driver",
    "firmware",
    "file",
    "machine-learning-model",
    "data",
    "cryptographic-asset",
];

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// This adapter implements the SbomFormatter port for CycloneDX format.
/// The synthetic root package becomes `metadata.component`; relationships
/// other than `DESCRIBES` become dependency entries grouped by source.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, document: &MergedDocument, metadata: &SbomMetadata) -> Result<String> {
        let refs = BomRefs::assign(document);

        let mut root = None;
        let mut components = Vec::with_capacity(document.packages.len() + document.files.len());
        for (index, record) in document.packages.values().enumerate() {
            let component = self.build_component(record, refs.package(index).to_string(), None);
            if record.name() == document.root_package && root.is_none() {
                root = Some(component);
            } else {
                components.push(component);
            }
        }
        for (index, record) in document.files.values().enumerate() {
            components.push(self.build_component(
                record,
                refs.file(index).to_string(),
                Some("file"),
            ));
        }

        let bom = Bom {
            bom_format: "CycloneDX".to_string(),
            spec_version: "1.6".to_string(),
            serial_number: metadata.serial_number().to_string(),
            version: 1,
            metadata: self.build_metadata(metadata, root),
            components,
            dependencies: self.build_dependencies(document, &refs),
        };

        serde_json::to_string_pretty(&bom).map_err(|e| {
            SbomError::OutputGenerationError {
                format: "CycloneDX JSON".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl CycloneDxFormatter {
    fn build_metadata(&self, metadata: &SbomMetadata, component: Option<Component>) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp().to_string(),
            tools: Tools {
                components: vec![Tool {
                    component_type: "application".to_string(),
                    name: metadata.tool_name().to_string(),
                    version: metadata.tool_version().to_string(),
                }],
            },
            component,
        }
    }

    /// Build a component from a merged record
    fn build_component(&self, record: &Record, bom_ref: String, kind: Option<&str>) -> Component {
        let component_type = kind
            .map(String::from)
            .or_else(|| {
                record
                    .get("type")
                    .map(|t| t.to_lowercase().replace('_', "-"))
                    .filter(|t| COMPONENT_TYPES.contains(&t.as_str()))
            })
            .unwrap_or_else(|| "library".to_string());

        Component {
            component_type,
            bom_ref,
            name: record.name().to_string(),
            version: record.version().map(String::from),
            supplier: asserted(record.get("supplier")).map(|name| Supplier {
                name: name.to_string(),
            }),
            description: record.get("description").map(String::from),
            hashes: self.build_hashes(record.get("checksum")),
            licenses: asserted(record.get("licenseConcluded"))
                .or_else(|| asserted(record.get("licenseDeclared")))
                .map(|l| vec![self.build_license(l)])
                .unwrap_or_default(),
            purl: record.get("purl").map(String::from),
        }
    }

    /// Build a license entry, using an expression for compound licenses
    fn build_license(&self, license: &str) -> License {
        if license.contains(' ') {
            License::Expression {
                expression: license.to_string(),
            }
        } else {
            License::Single {
                license: LicenseContent {
                    id: license.to_string(),
                },
            }
        }
    }

    /// Build hashes from `SHA1: abc, SHA256: def`, skipping unknown algorithms
    fn build_hashes(&self, checksum: Option<&str>) -> Vec<Hash> {
        let Some(checksum) = checksum else {
            return Vec::new();
        };
        checksum
            .split(", ")
            .filter_map(|entry| entry.split_once(':'))
            .filter_map(|(alg, content)| {
                let alg = match alg.trim() {
                    "MD5" => "MD5",
                    "SHA1" => "SHA-1",
                    "SHA256" => "SHA-256",
                    "SHA384" => "SHA-384",
                    "SHA512" => "SHA-512",
                    "SHA3-256" => "SHA3-256",
                    "SHA3-512" => "SHA3-512",
                    "BLAKE2b-256" => "BLAKE2b-256",
                    "BLAKE3" => "BLAKE3",
                    _ => return None,
                };
                Some(Hash {
                    alg: alg.to_string(),
                    content: content.trim().to_string(),
                })
            })
            .collect()
    }

    /// Build dependencies grouped by source, in first-appearance order
    fn build_dependencies(&self, document: &MergedDocument, refs: &BomRefs) -> Vec<Dependency> {
        let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
        for rel in &document.relationships {
            if rel.relationship_type() == DESCRIBES {
                continue;
            }
            let (Some(source), Some(target)) =
                (refs.resolve(rel.source()), refs.resolve(rel.target()))
            else {
                continue;
            };
            if source == target {
                continue;
            }
            let targets = grouped.entry(source.to_string()).or_default();
            if !targets.iter().any(|t| t == target) {
                targets.push(target.to_string());
            }
        }

        grouped
            .into_iter()
            .map(|(bom_ref, depends_on)| Dependency {
                bom_ref,
                depends_on,
            })
            .collect()
    }
}

fn asserted(value: Option<&str>) -> Option<&str> {
    value.filter(|v| *v != NOASSERTION && !v.is_empty())
}

/// bom-refs of a merged document
///
/// Packages are referenced as `name@version`, files as `file:name`. A name
/// shared by a file and a package resolves to the file.
struct BomRefs {
    files: Vec<String>,
    packages: Vec<String>,
    by_name: HashMap<String, usize>,
    all: Vec<String>,
}

impl BomRefs {
    fn assign(document: &MergedDocument) -> Self {
        let packages: Vec<String> = document.packages.keys().map(|k| k.to_string()).collect();
        let files: Vec<String> = document
            .files
            .keys()
            .map(|name| format!("file:{}", name))
            .collect();

        let mut all = Vec::with_capacity(packages.len() + files.len());
        let mut by_name = HashMap::new();
        for (key, bom_ref) in document.packages.keys().zip(&packages) {
            all.push(bom_ref.clone());
            by_name.entry(key.name.clone()).or_insert(all.len() - 1);
        }
        for (name, bom_ref) in document.files.keys().zip(&files) {
            all.push(bom_ref.clone());
            by_name.insert(name.clone(), all.len() - 1);
        }

        Self {
            files,
            packages,
            by_name,
            all,
        }
    }

    fn file(&self, index: usize) -> &str {
        &self.files[index]
    }

    fn package(&self, index: usize) -> &str {
        &self.packages[index]
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(|&i| self.all[i].as_str())
    }
}
