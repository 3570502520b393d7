use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::OnceLock;
use url::Url;

/// An RFC 6570 URI template kept as an opaque pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriTemplate {
    pattern: String,
}

impl UriTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Variable names referenced by the template's expressions, in order of
    /// first appearance.
    pub fn variable_names(&self) -> Vec<&str> {
        static EXPRESSION: OnceLock<Regex> = OnceLock::new();
        let expression =
            EXPRESSION.get_or_init(|| Regex::new(r"\{[+#./;?&=,!@|]?([^}]*)\}").expect("regex"));

        let mut names: Vec<&str> = Vec::new();
        for captures in expression.captures_iter(&self.pattern) {
            let Some(list) = captures.get(1) else {
                continue;
            };
            for spec in list.as_str().split(',') {
                let name = spec
                    .split(':')
                    .next()
                    .unwrap_or_default()
                    .trim_end_matches('*');
                if !name.is_empty() && !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Where a link points once its href has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Absolute URL. `href` is the text as declared when the document
    /// already gave an absolute href, otherwise the resolved URL's text.
    Url { href: String, url: Url },
    /// Relative reference left as-is because no context URL was available.
    Relative(String),
    /// URI template, resolved against the context but not expanded.
    Template(UriTemplate),
}

impl Target {
    pub fn as_str(&self) -> &str {
        match self {
            Target::Url { href, .. } => href,
            Target::Relative(raw) => raw,
            Target::Template(template) => template.pattern(),
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Target::Url { .. })
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Target::Url { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn as_template(&self) -> Option<&UriTemplate> {
        match self {
            Target::Template(template) => Some(template),
            _ => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional descriptive members of a HAL link object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// A CURIE declared in a document's `curies` relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurieDefinition {
    pub name: String,
    #[serde(rename = "href")]
    pub template: String,
}

/// One relation of a representation: either an addressable link from
/// `_links` or a resource co-located under `_embedded`.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub(crate) literal_rel: String,
    pub(crate) fully_qualified_rel: String,
    pub(crate) raw_href: Option<String>,
    pub(crate) target: Option<Target>,
    pub(crate) templated: bool,
    pub(crate) attributes: LinkAttributes,
    pub(crate) embedded: Option<Box<Representation>>,
}

impl Link {
    /// Relation name exactly as it appeared in the document.
    pub fn literal_rel(&self) -> &str {
        &self.literal_rel
    }

    /// Relation name after CURIE expansion.
    pub fn fully_qualified_rel(&self) -> &str {
        &self.fully_qualified_rel
    }

    pub fn raw_href(&self) -> Option<&str> {
        self.raw_href.as_deref()
    }

    /// Resolved target, absent for anonymous embedded resources and link
    /// objects without an `href`.
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn target_url(&self) -> Option<&str> {
        self.target.as_ref().map(Target::as_str)
    }

    pub fn is_templated(&self) -> bool {
        self.templated
    }

    pub fn attributes(&self) -> &LinkAttributes {
        &self.attributes
    }

    pub fn embedded(&self) -> Option<&Representation> {
        self.embedded.as_deref()
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }

    /// True when `rel` equals either the literal or the fully-qualified
    /// relation name.
    pub fn matches_rel(&self, rel: &str) -> bool {
        self.literal_rel == rel || self.fully_qualified_rel == rel
    }
}

/// The interpreted form of one HAL document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Representation {
    pub(crate) properties: Map<String, Value>,
    pub(crate) links: Vec<Link>,
    pub(crate) href: Option<Url>,
    pub(crate) curies: Vec<CurieDefinition>,
}

impl Representation {
    /// Every top-level member except `_links` and `_embedded`.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Absolute URL identifying this representation, if any.
    pub fn href(&self) -> Option<&Url> {
        self.href.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.href.is_none()
    }

    /// All links, `_links` first and `_embedded` second, in document order.
    pub fn all_links(&self) -> &[Link] {
        &self.links
    }

    pub fn links_for<'a>(&'a self, rel: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.matches_rel(rel))
    }

    /// Embedded representations under `rel`, whether or not they are
    /// addressable.
    pub fn related(&self, rel: &str) -> Vec<&Representation> {
        self.links
            .iter()
            .filter(|link| link.matches_rel(rel))
            .filter_map(Link::embedded)
            .collect()
    }

    pub fn has_related(&self, rel: &str) -> bool {
        self.links_for(rel).next().is_some()
    }

    pub fn curies(&self) -> &[CurieDefinition] {
        &self.curies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_template_variable_names() {
        let template = UriTemplate::new("http://example.com/{id}/items{?q,page,q}{&sort*}{/p:3}");
        assert_eq!(template.variable_names(), vec!["id", "q", "page", "sort", "p"]);
    }

    #[test]
    fn test_target_string_forms() {
        let url = Target::Url {
            href: "HTTP://Example.COM".to_string(),
            url: Url::parse("HTTP://Example.COM").unwrap(),
        };
        assert_eq!(url.as_str(), "HTTP://Example.COM");
        assert_eq!(url.as_url().map(Url::as_str), Some("http://example.com/"));
        assert!(url.is_absolute());

        let relative = Target::Relative("/a".to_string());
        assert_eq!(relative.to_string(), "/a");
        assert!(relative.as_url().is_none());

        let template = Target::Template(UriTemplate::new("/a{?q}"));
        assert_eq!(template.as_template().map(UriTemplate::pattern), Some("/a{?q}"));
    }

    #[test]
    fn test_related_outlives_rel_argument() {
        let repr = Representation {
            links: vec![Link {
                literal_rel: "item".to_string(),
                fully_qualified_rel: "item".to_string(),
                raw_href: None,
                target: None,
                templated: false,
                attributes: LinkAttributes::default(),
                embedded: Some(Box::default()),
            }],
            ..Default::default()
        };

        let found = {
            let rel = String::from("item");
            repr.related(&rel)
        };
        assert_eq!(found.len(), 1);
        assert!(found[0].is_anonymous());
    }

    #[test]
    fn test_link_matches_either_rel() {
        let link = Link {
            literal_rel: "ex:bar".to_string(),
            fully_qualified_rel: "http://example.com/rels/bar".to_string(),
            raw_href: None,
            target: None,
            templated: false,
            attributes: LinkAttributes::default(),
            embedded: None,
        };
        assert!(link.matches_rel("ex:bar"));
        assert!(link.matches_rel("http://example.com/rels/bar"));
        assert!(!link.matches_rel("bar"));
    }
}
