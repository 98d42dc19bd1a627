use crate::ports::outbound::{ParsedSbom, SbomParser};
use crate::sbom_merge::domain::{DocumentType, Record, Relationship, SbomDocument, DEPENDS_ON};
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Bom {
    bom_format: String,
    #[serde(default)]
    spec_version: String,
    #[serde(default)]
    metadata: Option<Metadata>,
    #[serde(default)]
    components: Vec<Component>,
    #[serde(default)]
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    #[serde(default)]
    component: Option<Component>,
}

#[derive(Debug, Deserialize)]
struct Component {
    #[serde(rename = "type", default)]
    component_type: Option<String>,
    #[serde(rename = "bom-ref", default)]
    bom_ref: Option<String>,
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    supplier: Option<Supplier>,
    #[serde(default)]
    licenses: Vec<LicenseChoice>,
    #[serde(default)]
    hashes: Vec<Hash>,
    #[serde(default)]
    purl: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    components: Vec<Component>,
}

#[derive(Debug, Deserialize)]
struct Supplier {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LicenseChoice {
    #[serde(default)]
    license: Option<License>,
    #[serde(default)]
    expression: Option<String>,
}

#[derive(Debug, Deserialize)]
struct License {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Hash {
    alg: String,
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Dependency {
    #[serde(rename = "ref")]
    bom_ref: String,
    #[serde(default)]
    depends_on: Vec<String>,
}

/// CycloneDxParser adapter for CycloneDX JSON documents
///
/// Components of type `file` become files, every other component becomes a
/// package. Nested components are flattened in document order.
pub struct CycloneDxParser;

impl CycloneDxParser {
    pub fn new() -> Self {
        Self
    }

    fn convert(bom: Bom) -> SbomDocument {
        let mut files = Vec::new();
        let mut packages = Vec::new();
        let mut names: HashMap<String, String> = HashMap::new();

        let mut pending: Vec<Component> = Vec::new();
        if let Some(component) = bom.metadata.and_then(|m| m.component) {
            pending.push(component);
        }
        pending.extend(bom.components);

        // Depth-first so nested components follow their parent
        pending.reverse();
        while let Some(mut component) = pending.pop() {
            let children = std::mem::take(&mut component.components);
            pending.extend(children.into_iter().rev());

            if let Some(bom_ref) = &component.bom_ref {
                names.insert(bom_ref.clone(), component.name.clone());
            }
            let is_file = component.component_type.as_deref() == Some("file");
            let record = Self::component_record(component);
            if is_file {
                files.push(record);
            } else {
                packages.push(record);
            }
        }

        let resolve = |r: &str| names.get(r).cloned().unwrap_or_else(|| r.to_string());
        let relationships = bom
            .dependencies
            .iter()
            .flat_map(|dep| {
                dep.depends_on.iter().map(|target| {
                    Relationship::new(resolve(&dep.bom_ref), DEPENDS_ON, resolve(target))
                })
            })
            .collect();

        SbomDocument::new(files, packages, relationships)
    }

    fn component_record(component: Component) -> Record {
        let mut record = Record::named(component.name);
        if let Some(bom_ref) = component.bom_ref {
            record.set_value("id", bom_ref);
        }
        if let Some(version) = component.version {
            record.set_value("version", version);
        }
        if let Some(kind) = component.component_type {
            record.set_value("type", kind.to_uppercase());
        }
        if let Some(name) = component.supplier.and_then(|s| s.name) {
            record.set_value("supplier", name);
        }
        if let Some(license) = license_expression(&component.licenses) {
            record.set_value("licenseConcluded", license);
        }
        if !component.hashes.is_empty() {
            let checksum = component
                .hashes
                .iter()
                .map(|h| format!("{}: {}", h.alg.replace('-', ""), h.content))
                .collect::<Vec<_>>()
                .join(", ");
            record.set_value("checksum", checksum);
        }
        if let Some(purl) = component.purl {
            record.set_value("purl", purl);
        }
        if let Some(description) = component.description {
            record.set_value("description", description);
        }
        record
    }
}

/// Joins the licenses of a component into one SPDX expression
fn license_expression(licenses: &[LicenseChoice]) -> Option<String> {
    let parts: Vec<String> = licenses
        .iter()
        .filter_map(|choice| {
            choice.expression.clone().or_else(|| {
                choice
                    .license
                    .as_ref()
                    .and_then(|l| l.id.clone().or_else(|| l.name.clone()))
            })
        })
        .collect();
    match parts.len() {
        0 => None,
        1 => parts.into_iter().next(),
        _ => Some(parts.join(" AND ")),
    }
}

impl Default for CycloneDxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomParser for CycloneDxParser {
    fn detect(&self, content: &str) -> bool {
        let trimmed = content.trim_start();
        trimmed.starts_with('{') && trimmed.contains("\"bomFormat\"")
    }

    fn parse(&self, content: &str) -> Result<ParsedSbom> {
        let bom: Bom = serde_json::from_str(content).map_err(|e| SbomError::Validation {
            message: format!("invalid CycloneDX JSON: {}", e),
        })?;
        if bom.bom_format != "CycloneDX" {
            return Err(SbomError::Validation {
                message: format!("unexpected bomFormat '{}'", bom.bom_format),
            }
            .into());
        }

        tracing::debug!(
            version = %bom.spec_version,
            components = bom.components.len(),
            dependencies = bom.dependencies.len(),
            "parsed CycloneDX document"
        );

        Ok(ParsedSbom::new(
            Self::convert(bom),
            DocumentType::CycloneDxJson,
        ))
    }

    fn format_name(&self) -> &'static str {
        "CycloneDX"
    }
}
