//! Link extractor - flattens `_links` and `_embedded` into one link list.

use super::{one_or_many, InterpretContext, Interpreter, CURIES};
use crate::core::model::{Link, LinkAttributes, Representation};
use crate::{HalClient, Result};
use serde_json::{Map, Value};

/// Extractor for the relations of a document.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkExtractor;

impl LinkExtractor {
    /// Links from `_links` in document order, followed by links for every
    /// `_embedded` resource.
    pub fn extract(
        links: Option<&Map<String, Value>>,
        embedded: Option<&Map<String, Value>>,
        context: &InterpretContext,
        client: &HalClient,
    ) -> Result<Vec<Link>> {
        let mut output = Vec::new();

        for (rel, value) in links.into_iter().flatten() {
            if rel == CURIES {
                continue;
            }
            let fully_qualified_rel = context.curies().expand(rel)?;
            for object in one_or_many(value) {
                output.push(Self::extract_link(rel, &fully_qualified_rel, object, context));
            }
        }

        for (rel, value) in embedded.into_iter().flatten() {
            let fully_qualified_rel = context.curies().expand(rel)?;
            for document in one_or_many(value) {
                let options = client.embedded_options(context.base());
                let nested = Interpreter::new(document, client, options).extract_repr()?;
                output.push(Self::embedded_link(rel, &fully_qualified_rel, nested));
            }
        }

        Ok(output)
    }

    fn extract_link(
        rel: &str,
        fully_qualified_rel: &str,
        object: &Value,
        context: &InterpretContext,
    ) -> Link {
        let raw_href = object.get("href").and_then(Value::as_str);
        let templated = object
            .get("templated")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let attributes = serde_json::from_value::<LinkAttributes>(object.clone()).unwrap_or_default();

        if raw_href.is_none() {
            tracing::debug!(rel, "link object has no href");
        }

        Link {
            literal_rel: rel.to_string(),
            fully_qualified_rel: fully_qualified_rel.to_string(),
            raw_href: raw_href.map(str::to_string),
            target: raw_href.map(|href| context.resolve(href, templated)),
            templated,
            attributes,
            embedded: None,
        }
    }

    /// The outer rel always comes from the embedding key; only the target is
    /// taken from the nested resource's own `self` link.
    fn embedded_link(rel: &str, fully_qualified_rel: &str, nested: Representation) -> Link {
        let self_link = nested
            .all_links()
            .iter()
            .find(|link| !link.is_embedded() && link.literal_rel() == "self");

        let (raw_href, target, templated) = match self_link {
            Some(link) => (link.raw_href.clone(), link.target.clone(), link.templated),
            None => (None, None, false),
        };

        Link {
            literal_rel: rel.to_string(),
            fully_qualified_rel: fully_qualified_rel.to_string(),
            raw_href,
            target,
            templated,
            attributes: LinkAttributes::default(),
            embedded: Some(Box::new(nested)),
        }
    }
}
