//! The city list
//!
//! An ordered, read-only sequence of city names fixed at startup.
//! The built-in list stands in for an API response; a JSON file
//! (array of strings) can be injected instead via the CLI.

use crate::error::{CitySiftError, Result};
use std::path::Path;

/// Built-in city names, in display order.
const BUILTIN_CITIES: &[&str] = &[
    "New York",
    "London",
    "Oslo",
    "Warsaw",
    "Frankfurt",
    "Prag",
    "Berlin",
    "Philadelphia",
    "Sao Paulo",
    "Milan",
    "Manila",
    "Tokyo",
    "Los Angeles",
    "Paris",
    "Portland",
];

/// Fixed, ordered city list. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    names: Vec<String>,
}

impl Dataset {
    /// The built-in list of cities.
    pub fn builtin() -> Self {
        Self::from_names(BUILTIN_CITIES.iter().map(|s| s.to_string()).collect())
    }

    /// Dataset over an injected list of names, kept in the given order.
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load a city list from a JSON file containing an array of strings.
    ///
    /// Order is preserved exactly as written in the file. An empty
    /// array is rejected.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CitySiftError::DatasetOpenError(path.to_path_buf(), e))?;
        let names = parse_city_json(&raw)
            .map_err(|e| CitySiftError::DatasetParseError(path.to_path_buf(), e))?;
        if names.is_empty() {
            return Err(CitySiftError::EmptyDataset(path.to_path_buf()));
        }
        Ok(Self::from_names(names))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// City name at `index`, in dataset order.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

fn parse_city_json(raw: &str) -> std::result::Result<Vec<String>, serde_json::Error> {
    serde_json::from_str::<Vec<String>>(raw)
}
