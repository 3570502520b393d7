//! URI resolver - resolves hrefs and URI templates against a context URL.

use crate::core::model::{Target, UriTemplate};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn has_scheme(raw: &str) -> bool {
    static SCHEME: OnceLock<Regex> = OnceLock::new();
    SCHEME
        .get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("regex"))
        .is_match(raw)
}

/// Resolves `raw` against `context`.
///
/// Absolute hrefs come back unchanged. A relative href with no context is
/// kept as [`Target::Relative`].
pub fn resolve(raw: &str, templated: bool, context: Option<&Url>) -> Target {
    if templated {
        return Target::Template(resolve_template(raw, context));
    }

    if let Ok(url) = Url::parse(raw) {
        return Target::Url {
            href: raw.to_string(),
            url,
        };
    }

    match context.map(|base| base.join(raw)) {
        Some(Ok(url)) => Target::Url {
            href: url.as_str().to_string(),
            url,
        },
        Some(Err(err)) => {
            tracing::debug!(href = raw, error = %err, "href could not be resolved");
            Target::Relative(raw.to_string())
        }
        None => {
            tracing::debug!(href = raw, "no context url for relative href");
            Target::Relative(raw.to_string())
        }
    }
}

/// Resolves the literal prefix of a template, up to its first expression,
/// and re-attaches the rest untouched.
pub fn resolve_template(raw: &str, context: Option<&Url>) -> UriTemplate {
    if has_scheme(raw) {
        return UriTemplate::new(raw);
    }
    let Some(base) = context else {
        tracing::debug!(href = raw, "no context url for relative template");
        return UriTemplate::new(raw);
    };

    let split = raw.find('{').unwrap_or(raw.len());
    let (prefix, expressions) = raw.split_at(split);
    if prefix.is_empty() {
        return UriTemplate::new(raw);
    }

    match base.join(prefix) {
        Ok(url) => UriTemplate::new(format!("{}{}", url.as_str(), expressions)),
        Err(err) => {
            tracing::debug!(href = raw, error = %err, "template could not be resolved");
            UriTemplate::new(raw)
        }
    }
}
