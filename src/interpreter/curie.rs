//! CURIE table - expands `prefix:suffix` relation names.

use super::one_or_many;
use crate::core::model::CurieDefinition;
use crate::error::Error;
use crate::Result;
use serde_json::{Map, Value};

const REL_PLACEHOLDER: &str = "{rel}";

/// CURIEs declared by one document. Built fresh per interpretation.
#[derive(Debug, Clone, Default)]
pub struct CurieTable {
    definitions: Vec<CurieDefinition>,
}

impl CurieTable {
    /// Collects the `curies` relation of a `_links` section.
    pub fn from_links(links: Option<&Map<String, Value>>) -> Self {
        let mut table = Self::default();
        let Some(curies) = links.and_then(|links| links.get("curies")) else {
            return table;
        };

        for entry in one_or_many(curies) {
            match serde_json::from_value::<CurieDefinition>(entry.clone()) {
                Ok(definition) if !definition.name.is_empty() => table.register(definition),
                Ok(_) => tracing::debug!("skipping curie with empty name"),
                Err(err) => tracing::debug!(error = %err, "skipping malformed curie"),
            }
        }
        table
    }

    /// Adds a definition unless its name is already taken.
    pub fn register(&mut self, definition: CurieDefinition) {
        if self.get(&definition.name).is_none() {
            self.definitions.push(definition);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CurieDefinition> {
        self.definitions.iter().find(|def| def.name == name)
    }

    pub fn definitions(&self) -> &[CurieDefinition] {
        &self.definitions
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Expands `rel` into its fully-qualified form.
    ///
    /// Absolute URLs, unprefixed names and unknown prefixes pass through
    /// unchanged. Fails only when a matching CURIE's template lacks `{rel}`.
    pub fn expand(&self, rel: &str) -> Result<String> {
        if rel.contains("://") {
            return Ok(rel.to_string());
        }
        let Some((prefix, suffix)) = rel.split_once(':') else {
            return Ok(rel.to_string());
        };
        let Some(definition) = self.get(prefix) else {
            return Ok(rel.to_string());
        };

        if !definition.template.contains(REL_PLACEHOLDER) {
            return Err(Error::InvalidCurieTemplate {
                name: definition.name.clone(),
                template: definition.template.clone(),
            });
        }
        Ok(definition.template.replace(REL_PLACEHOLDER, suffix))
    }
}
