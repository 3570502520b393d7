//! Client front end that owns interpretation settings.

use crate::core::model::Representation;
use crate::interpreter::Interpreter;
use crate::{InterpretOptions, Result};
use serde_json::Value;
use std::io::Read;
use url::Url;

/// How embedded documents pick their context URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmbeddedContext {
    /// Embedded documents start without a context; only their own `self`
    /// link gives them one.
    #[default]
    Isolated,
    /// Embedded documents fall back to the parent's base URL.
    Inherit,
}

/// Options shared by every interpretation made through a [`HalClient`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub embedded_context: EmbeddedContext,
}

/// Entry point for interpreting HAL documents.
#[derive(Debug, Clone, Default)]
pub struct HalClient {
    options: ClientOptions,
}

impl HalClient {
    pub fn new(options: ClientOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn interpreter<'a>(
        &'a self,
        document: &'a Value,
        options: InterpretOptions,
    ) -> Interpreter<'a> {
        Interpreter::new(document, self, options)
    }

    /// Interprets an already-parsed document.
    pub fn interpret(&self, document: &Value, options: InterpretOptions) -> Result<Representation> {
        self.interpreter(document, options).extract_repr()
    }

    /// Parses JSON text and interprets it.
    pub fn interpret_str(&self, text: &str, options: InterpretOptions) -> Result<Representation> {
        let document: Value = serde_json::from_str(text)?;
        self.interpret(&document, options)
    }

    /// Reads JSON from `reader` and interprets it.
    pub fn interpret_reader<R: Read>(
        &self,
        reader: R,
        options: InterpretOptions,
    ) -> Result<Representation> {
        let document: Value = serde_json::from_reader(reader)?;
        self.interpret(&document, options)
    }

    /// Options for a document embedded in a parent whose base is `parent_base`.
    pub(crate) fn embedded_options(&self, parent_base: Option<&Url>) -> InterpretOptions {
        match self.options.embedded_context {
            EmbeddedContext::Isolated => InterpretOptions::default(),
            EmbeddedContext::Inherit => InterpretOptions {
                context_url: parent_base.cloned(),
                content_location: None,
            },
        }
    }
}
