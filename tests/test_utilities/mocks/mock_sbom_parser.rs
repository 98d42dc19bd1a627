use sbom_merge::prelude::*;
use std::collections::HashMap;

/// Mock SbomParser mapping raw content to prepared documents
#[derive(Default)]
pub struct MockSbomParser {
    documents: HashMap<String, SbomDocument>,
}

impl MockSbomParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, content: &str, document: SbomDocument) -> Self {
        self.documents.insert(content.to_string(), document);
        self
    }
}

impl SbomParser for MockSbomParser {
    fn detect(&self, content: &str) -> bool {
        self.documents.contains_key(content)
    }

    fn parse(&self, content: &str) -> Result<ParsedSbom> {
        match self.documents.get(content) {
            Some(document) => Ok(ParsedSbom::new(document.clone(), DocumentType::SpdxJson)),
            None => anyhow::bail!("mock parser has no document for this content"),
        }
    }

    fn format_name(&self) -> &'static str {
        "mock"
    }
}
