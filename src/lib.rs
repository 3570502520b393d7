//! # hal-interp
//!
//! Interprets HAL+JSON documents into properties and typed links, with
//! CURIE expansion and relative URL resolution.
//!
//! ## Example
//!
//! ```
//! use hal_interp::{HalClient, InterpretOptions};
//!
//! let options = InterpretOptions::default()
//!     .with_context_url("http://example.com/orders")
//!     .unwrap();
//!
//! let repr = HalClient::default()
//!     .interpret_str(r#"{"total": 3, "_links": {"next": {"href": "/orders?page=2"}}}"#, options)
//!     .unwrap();
//!
//! assert_eq!(repr.property("total"), Some(&serde_json::json!(3)));
//! let next = repr.links_for("next").next().unwrap();
//! assert_eq!(next.target_url(), Some("http://example.com/orders?page=2"));
//! ```

pub mod client;
pub mod core;
pub mod error;
pub mod interpreter;
pub mod render;

pub use client::{ClientOptions, EmbeddedContext, HalClient};
pub use crate::core::model::{CurieDefinition, Link, LinkAttributes, Representation, Target, UriTemplate};
pub use error::{Error, Result};
pub use interpreter::Interpreter;

use url::Url;

/// Options for interpreting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpretOptions {
    /// Base URL used when the document has no absolute `self` link.
    pub context_url: Option<Url>,
    /// Lower-priority fallback base, e.g. an HTTP `Content-Location` value.
    pub content_location: Option<Url>,
}

impl InterpretOptions {
    pub fn with_context_url(mut self, url: &str) -> Result<Self> {
        self.context_url = Some(parse_absolute(url)?);
        Ok(self)
    }

    pub fn with_content_location(mut self, url: &str) -> Result<Self> {
        self.content_location = Some(parse_absolute(url)?);
        Ok(self)
    }
}

fn parse_absolute(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
