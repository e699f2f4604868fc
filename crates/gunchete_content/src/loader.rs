//! # Content Loading
//!
//! Reads a content tree from disk into a [`Registry`]:
//!
//! ```text
//! <root>/items/*.toml
//! <root>/weapons/*.toml
//! <root>/armor/*.toml
//! <root>/explosives/*.toml
//! ```
//!
//! Each file holds exactly one definition. Missing subdirectories are skipped.
//! Weapons, armor and explosives are registered before items so that the
//! final reference check sees the whole tree.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{ContentError, ContentResult};
use crate::registry::Registry;

/// Reads and parses a single TOML file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, `Parse` if it is not valid for `T`.
pub fn read_toml<T: DeserializeOwned>(path: &Path) -> ContentResult<T> {
    let text = fs::read_to_string(path).map_err(|e| ContentError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    toml::from_str(&text).map_err(|e| ContentError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Lists `*.toml` files in `dir`, sorted by path. A missing directory yields nothing.
fn toml_files(dir: &Path) -> ContentResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "content directory absent, skipping");
        return Ok(Vec::new());
    }

    let io_err = |e: std::io::Error| ContentError::Io {
        path: dir.display().to_string(),
        message: e.to_string(),
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_each<T, F>(dir: &Path, mut register: F) -> ContentResult<usize>
where
    T: DeserializeOwned,
    F: FnMut(T) -> ContentResult<()>,
{
    let files = toml_files(dir)?;
    for path in &files {
        register(read_toml(path)?)?;
    }
    Ok(files.len())
}

impl Registry {
    /// Loads every definition under `root` and verifies item references.
    ///
    /// # Errors
    ///
    /// Returns the first I/O, parse, validation, duplicate or dangling
    /// reference error encountered.
    pub fn load_dir(root: impl AsRef<Path>) -> ContentResult<Self> {
        let root = root.as_ref();
        let mut registry = Self::new();

        let weapons = load_each(&root.join("weapons"), |def| registry.register_weapon(def))?;
        let armors = load_each(&root.join("armor"), |def| registry.register_armor(def))?;
        let explosives = load_each(&root.join("explosives"), |def| registry.register_explosive(def))?;
        let items = load_each(&root.join("items"), |def| registry.register_item(def))?;

        registry.verify_references()?;

        info!(
            root = %root.display(),
            items,
            weapons,
            armors,
            explosives,
            "content loaded"
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_is_empty() {
        let registry = Registry::load_dir("/nonexistent/gunchete/content").unwrap();
        assert_eq!(registry.item_count(), 0);
        assert!(registry.all_weapons().is_empty());
    }

    #[test]
    fn test_read_toml_missing_file() {
        let result: ContentResult<toml::Table> = read_toml(Path::new("/nonexistent/file.toml"));
        assert!(matches!(result, Err(ContentError::Io { .. })));
    }
}
