//! Read-only movie catalog.
//!
//! The catalog is loaded once at startup, either from the JSON bundled into
//! the binary or from a file named by `CATALOG_PATH`, and is never modified
//! afterwards. Requests share it through a reference counted slice.

use crate::models::movie::Movie;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/movies.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, immutable sequence of movies.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Arc<[Movie]>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: movies.into(),
        }
    }

    /// Parse a catalog from a JSON array of movie records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Ok(Self::new(movies))
    }

    /// The catalog shipped with the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load from `path` if given, otherwise fall back to the bundled catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let Some(path) = path else {
            return Self::bundled();
        };

        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
