//! Lookup tools and their registry.
//!
//! Each tool is a unit struct implementing [`LookupTool`]: a stable name, the
//! destination it belongs to, the description handed to the language model
//! and the lookup itself. [`default_registry`] holds every tool.
//!
//! ```ignore
//! use longdata_core::{LookupConfig, default_registry};
//!
//! let config = LookupConfig::from_folder(Path::new("data"));
//! let table = default_registry().invoke("animal_information", "dog;body mass", &config)?;
//! ```

mod anage;
mod geneage;
mod longevitymap;

use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, info_span};

use crate::{LookupConfig, LookupError};

pub use anage::{
    AnimalInformation, AnimalsMinMaxInformation, animal_information, animals_min_max_information,
};
pub use geneage::{GeneInformation, gene_information};
pub use longevitymap::{RsidInformation, get_references, rsid_information};

/// Topic group a question is routed to; each owns one or more tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Anage,
    Geneage,
    Longevitymap,
}

impl Destination {
    pub const ALL: [Destination; 3] = [Self::Anage, Self::Geneage, Self::Longevitymap];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Anage => "anage",
            Self::Geneage => "geneage",
            Self::Longevitymap => "longevitymap",
        }
    }

    /// Routing description shown to the language model.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Anage => "Good for answering questions about animals biology",
            Self::Geneage => "Good for answering questions about longevity genes",
            Self::Longevitymap => "Good for answering questions about rsid",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named lookup callable with a single free-text input.
pub trait LookupTool: Send + Sync {
    /// Stable tool name (e.g. `animal_information`).
    fn name(&self) -> &'static str;

    fn destination(&self) -> Destination;

    /// Usage text for the language model: input format and output layout.
    fn description(&self) -> &'static str;

    /// Runs the lookup and returns the serialized table.
    ///
    /// # Errors
    ///
    /// Fails on malformed input, unreadable datasets, or filter errors.
    fn run(&self, input: &str, config: &LookupConfig) -> Result<String, LookupError>;
}

/// Tools indexed by name, in registration order.
pub struct ToolRegistry {
    tools: Vec<Box<dyn LookupTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registers a tool; a tool with the same name is replaced in place.
    pub fn register(&mut self, tool: Box<dyn LookupTool>) {
        match self.tools.iter().position(|t| t.name() == tool.name()) {
            Some(index) => self.tools[index] = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn LookupTool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name.trim())
            .map(Box::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn LookupTool> {
        self.tools.iter().map(Box::as_ref)
    }

    pub fn for_destination(&self, destination: Destination) -> Vec<&dyn LookupTool> {
        self.iter()
            .filter(|tool| tool.destination() == destination)
            .collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Runs the tool called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownTool`] for unregistered names, otherwise
    /// whatever the tool returns.
    pub fn invoke(
        &self,
        name: &str,
        input: &str,
        config: &LookupConfig,
    ) -> Result<String, LookupError> {
        let tool = self
            .get(name)
            .ok_or_else(|| LookupError::UnknownTool(name.to_string()))?;
        let span = info_span!("tool", tool = tool.name(), destination = %tool.destination());
        let _guard = span.enter();
        let start = Instant::now();
        let output = tool.run(input, config)?;
        info!(
            tool = tool.name(),
            lines = output.lines().count(),
            duration_ms = start.elapsed().as_millis(),
            "lookup complete"
        );
        Ok(output)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AnimalInformation));
        registry.register(Box::new(AnimalsMinMaxInformation));
        registry.register(Box::new(GeneInformation));
        registry.register(Box::new(RsidInformation));
        registry
    }
}

/// Shared registry holding every built-in tool.
pub fn default_registry() -> &'static ToolRegistry {
    static REGISTRY: OnceLock<ToolRegistry> = OnceLock::new();
    REGISTRY.get_or_init(ToolRegistry::default)
}
