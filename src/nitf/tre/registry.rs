//! Tag to handler registry

use std::collections::HashMap;
use log::debug;

use crate::nitf::tre::description::{DescriptionHandler, TreDescriptions};
use crate::nitf::tre::{TreHandler, TreLookup};

/// Lookup that never resolves a handler, so every TRE is stored raw
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHandlers;

impl TreLookup for NoHandlers {
    fn lookup(&self, _tag: &str) -> Option<&dyn TreHandler> {
        None
    }
}

/// Handlers registered by tag
#[derive(Default)]
pub struct TreRegistry {
    handlers: HashMap<String, Box<dyn TreHandler + Send + Sync>>,
}

impl TreRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the descriptions shipped with the crate
    pub fn with_builtin_descriptions() -> Self {
        Self::from_descriptions(TreDescriptions::builtin())
    }

    /// Registry with one description handler per described tag
    pub fn from_descriptions(descriptions: &TreDescriptions) -> Self {
        let mut registry = Self::new();
        registry.add_descriptions(descriptions);
        registry
    }

    /// Adds a description handler for each described tag
    pub fn add_descriptions(&mut self, descriptions: &TreDescriptions) {
        for (tag, description) in &descriptions.descriptions {
            self.register(tag, Box::new(DescriptionHandler::new(description.clone())));
        }
    }

    /// Registers a handler, replacing any previous handler for `tag`
    pub fn register(&mut self, tag: &str, handler: Box<dyn TreHandler + Send + Sync>) {
        debug!("Registering {} handler for TRE {}", handler.name(), tag);
        self.handlers.insert(tag.to_string(), handler);
    }

    /// Whether a handler is registered for `tag`
    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl TreLookup for TreRegistry {
    fn lookup(&self, tag: &str) -> Option<&dyn TreHandler> {
        self.handlers
            .get(tag)
            .map(|handler| handler.as_ref() as &dyn TreHandler)
    }
}
