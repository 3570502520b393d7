//! Interpreter modules for HAL document interpretation.

mod context;
mod curie;
mod links;
mod properties;
pub mod resolver;

use crate::core::model::{Link, Representation};
use crate::{HalClient, InterpretOptions, Result};
use serde_json::{Map, Value};
use url::Url;

pub use self::context::InterpretContext;
pub use self::curie::CurieTable;
pub use self::links::LinkExtractor;
pub use self::properties::PropertyExtractor;

pub(crate) const LINKS: &str = "_links";
pub(crate) const EMBEDDED: &str = "_embedded";
pub(crate) const CURIES: &str = "curies";

/// Normalizes a HAL member that may hold one item or an array of items.
pub(crate) fn one_or_many(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Null => Vec::new(),
        single => vec![single],
    }
}

/// Interprets one parsed HAL document.
///
/// Every operation is a pure function of the constructor inputs; the
/// document is never modified. Embedded documents are interpreted by fresh
/// interpreters sharing the same client, so nesting depth is bounded only
/// by the call stack.
pub struct Interpreter<'a> {
    document: &'a Value,
    client: &'a HalClient,
    options: InterpretOptions,
}

impl<'a> Interpreter<'a> {
    pub fn new(document: &'a Value, client: &'a HalClient, options: InterpretOptions) -> Self {
        Self {
            document,
            client,
            options,
        }
    }

    pub fn extract_props(&self) -> Map<String, Value> {
        PropertyExtractor::extract(self.document)
    }

    pub fn extract_links(&self) -> Result<Vec<Link>> {
        LinkExtractor::extract(
            self.section(LINKS),
            self.section(EMBEDDED),
            &self.context(),
            self.client,
        )
    }

    pub fn extract_repr(&self) -> Result<Representation> {
        let context = self.context();
        let links =
            LinkExtractor::extract(self.section(LINKS), self.section(EMBEDDED), &context, self.client)?;

        Ok(Representation {
            properties: self.extract_props(),
            links,
            href: context.base().cloned(),
            curies: context.curies().definitions().to_vec(),
        })
    }

    /// The base URL relative hrefs in this document resolve against.
    pub fn context_url(&self) -> Option<Url> {
        self.context().base().cloned()
    }

    fn context(&self) -> InterpretContext {
        InterpretContext::new(self.section(LINKS), &self.options)
    }

    fn section(&self, key: &str) -> Option<&'a Map<String, Value>> {
        self.document.get(key).and_then(Value::as_object)
    }
}
