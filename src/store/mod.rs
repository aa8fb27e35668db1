//! Record Store: the on-disk layout of the database and the loaders and
//! writers that move records between it and memory.
//!
//! Elements live one per file under the elements directory; reactions live
//! one file per category under the reactions directory, next to the master
//! reaction index. Derived index files live under the indexes directory.

use std::path::{Path, PathBuf};

pub mod error;
mod reader;
mod writer;

pub use error::Error;
pub use reader::{
    ElementFile, RawDocument, ReactionFile, load_element_files, load_elements,
    load_elements_lenient, load_reaction_files, load_reaction_files_lenient, load_reactions,
    load_reactions_lenient, read_element_documents, read_reaction_documents, reaction_records,
};
pub use writer::{persist_elements, render_json, write_json};

use crate::config::LayoutConfig;
use crate::model::element::Element;

pub const PERIODIC_TABLE_FILE: &str = "periodic-table.json";
pub const BY_CATEGORY_FILE: &str = "by-category.json";
pub const BY_PROPERTY_FILE: &str = "by-property.json";

/// Resolved locations of every file family in a database root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub elements_dir: PathBuf,
    pub reactions_dir: PathBuf,
    pub indexes_dir: PathBuf,
    reaction_index_name: String,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>, config: &LayoutConfig) -> Self {
        let root = root.into();
        Self {
            elements_dir: root.join(&config.elements),
            reactions_dir: root.join(&config.reactions),
            indexes_dir: root.join(&config.indexes),
            reaction_index_name: config.reaction_index.clone(),
            root,
        }
    }

    /// Layout with the default directory names under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::new(root, &LayoutConfig::default())
    }

    pub fn reaction_index_path(&self) -> PathBuf {
        self.reactions_dir.join(&self.reaction_index_name)
    }

    pub fn periodic_table_path(&self) -> PathBuf {
        self.indexes_dir.join(PERIODIC_TABLE_FILE)
    }

    pub fn by_category_path(&self) -> PathBuf {
        self.indexes_dir.join(BY_CATEGORY_FILE)
    }

    pub fn by_property_path(&self) -> PathBuf {
        self.indexes_dir.join(BY_PROPERTY_FILE)
    }

    /// Whether `path` is the master reaction index rather than a category file.
    pub fn is_reaction_index(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name == self.reaction_index_name.as_str())
    }
}

/// Resolves an element by atomic number, symbol, or name.
///
/// An identifier that parses as an integer is matched against atomic
/// numbers only. Anything else is compared case-insensitively with each
/// element's symbol and name, and the first match in catalog order wins.
pub fn lookup_element<'a>(elements: &'a [Element], identifier: &str) -> Option<&'a Element> {
    let identifier = identifier.trim();

    if let Ok(z) = identifier.parse::<i64>() {
        return elements.iter().find(|e| i64::from(e.atomic_number) == z);
    }

    elements.iter().find(|e| e.matches_label(identifier))
}
