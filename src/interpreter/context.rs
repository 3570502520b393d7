use super::{one_or_many, resolver, CurieTable};
use crate::core::model::Target;
use crate::InterpretOptions;
use serde_json::{Map, Value};
use url::Url;

const SELF_REL: &str = "self";

/// Per-document state shared by the extractors: the base URL for relative
/// hrefs and the document's CURIEs.
#[derive(Debug, Clone, Default)]
pub struct InterpretContext {
    base: Option<Url>,
    curies: CurieTable,
}

impl InterpretContext {
    pub fn new(links: Option<&Map<String, Value>>, options: &InterpretOptions) -> Self {
        Self {
            base: resolve_base(links, options),
            curies: CurieTable::from_links(links),
        }
    }

    /// Base URL for relative hrefs, which is also the document's own href.
    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    pub fn curies(&self) -> &CurieTable {
        &self.curies
    }

    pub fn resolve(&self, raw: &str, templated: bool) -> Target {
        resolver::resolve(raw, templated, self.base.as_ref())
    }
}

/// Picks the document base: own `self` link (resolved against the supplied
/// context if relative), then `context_url`, then `content_location`.
fn resolve_base(links: Option<&Map<String, Value>>, options: &InterpretOptions) -> Option<Url> {
    let fallback = options
        .context_url
        .as_ref()
        .or(options.content_location.as_ref());

    if let Some(href) = self_href(links) {
        match resolver::resolve(href, false, fallback) {
            Target::Url { url, .. } => {
                tracing::trace!(base = %url, "context from self link");
                return Some(url);
            }
            other => tracing::debug!(href = other.as_str(), "self link is not absolute"),
        }
    }

    if let Some(url) = fallback {
        tracing::trace!(base = %url, "context from options");
    }
    fallback.cloned()
}

fn self_href(links: Option<&Map<String, Value>>) -> Option<&str> {
    let link = one_or_many(links?.get(SELF_REL)?).into_iter().next()?;
    if link.get("templated").and_then(Value::as_bool).unwrap_or(false) {
        return None;
    }
    link.get("href").and_then(Value::as_str)
}
