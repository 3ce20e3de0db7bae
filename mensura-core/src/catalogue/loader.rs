//! Unit catalogue loading and lookup
//!
//! The catalogue ships embedded in the binary and is parsed exactly once,
//! on first use. It is immutable for the remainder of the process and safe
//! to share read-only across pipeline instances.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use thiserror::Error;

use super::types::UnitDefinition;

static CATALOGUE: OnceLock<Arc<Catalogue>> = OnceLock::new();

const EMBEDDED_CATALOGUE: &str = include_str!("../../../configs/units.toml");

/// Errors raised while loading a catalogue file.
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// The TOML could not be parsed into catalogue entries
    #[error("invalid unit catalogue: {0}")]
    Invalid(#[from] toml::de::Error),

    /// An entry listed no notation to look it up by
    #[error("catalogue entry without notations (names: {0:?})")]
    MissingNotation(Vec<String>),
}

#[derive(serde::Deserialize)]
struct CatalogueFile {
    #[serde(rename = "unit", default)]
    units: Vec<UnitDefinition>,
}

/// The unit-definition catalogue: symbol and name lookup over immutable
/// [`UnitDefinition`] entries.
#[derive(Debug)]
pub struct Catalogue {
    definitions: Vec<UnitDefinition>,
    by_notation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl Catalogue {
    /// Parse a catalogue from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogueError> {
        let file: CatalogueFile = toml::from_str(text)?;
        let mut by_notation = HashMap::new();
        let mut by_name = HashMap::new();

        for (index, definition) in file.units.iter().enumerate() {
            if definition.notations.is_empty() {
                return Err(CatalogueError::MissingNotation(definition.names.clone()));
            }
            for notation in &definition.notations {
                by_notation.entry(notation.clone()).or_insert(index);
            }
            for name in &definition.names {
                by_name.entry(name.to_lowercase()).or_insert(index);
            }
        }

        Ok(Self {
            definitions: file.units,
            by_notation,
            by_name,
        })
    }

    /// The process-wide embedded catalogue, loaded on first use
    pub fn global() -> Arc<Catalogue> {
        CATALOGUE
            .get_or_init(|| {
                Arc::new(
                    Catalogue::from_toml_str(EMBEDDED_CATALOGUE)
                        .expect("failed to load embedded unit catalogue"),
                )
            })
            .clone()
    }

    /// Look up a definition by notation (case-sensitive)
    pub fn find_definition(&self, notation: &str) -> Option<&UnitDefinition> {
        self.by_notation
            .get(notation)
            .map(|&index| &self.definitions[index])
    }

    /// Look up a definition by spelled-out name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&UnitDefinition> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| &self.definitions[index])
    }

    /// All definitions, in file order
    pub fn definitions(&self) -> &[UnitDefinition] {
        &self.definitions
    }
}
