use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::Layout;
use super::error::Error;
use crate::model::element::Element;
use crate::model::reaction::Reaction;

/// An element record together with the file it was read from.
///
/// `document` is the record exactly as parsed, including keys the typed
/// [`Element`] does not model; rewrites start from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFile {
    pub path: PathBuf,
    pub element: Element,
    pub document: Value,
}

/// All reactions declared in one category file, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionFile {
    pub path: PathBuf,
    /// File stem, e.g. `industrial` for `industrial.json`.
    pub name: String,
    pub reactions: Vec<Reaction>,
}

/// A parsed but untyped JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub path: PathBuf,
    pub value: Value,
}

/// Every `*.json` file directly inside `dir`, sorted by path.
fn json_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    if !dir.is_dir() {
        return Err(Error::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn read_document(path: &Path) -> Result<Value, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::malformed(path, e.to_string()))
}

fn read_documents(paths: Vec<PathBuf>) -> Result<Vec<RawDocument>, Error> {
    paths
        .into_iter()
        .map(|path| {
            debug!(path = %path.display(), "reading document");
            let value = read_document(&path)?;
            Ok(RawDocument { path, value })
        })
        .collect()
}

/// Reads every element file as untyped JSON.
///
/// Fails on the first file that is not valid JSON at all; shape errors are
/// left for the caller to judge.
pub fn read_element_documents(layout: &Layout) -> Result<Vec<RawDocument>, Error> {
    read_documents(json_files(&layout.elements_dir)?)
}

/// Reads every reaction category file (the master index excluded) as untyped JSON.
pub fn read_reaction_documents(layout: &Layout) -> Result<Vec<RawDocument>, Error> {
    let paths = json_files(&layout.reactions_dir)?
        .into_iter()
        .filter(|p| !layout.is_reaction_index(p))
        .collect();
    read_documents(paths)
}

/// The reaction records of a category document.
///
/// Accepts a bare array or an object with a `reactions` array.
pub fn reaction_records(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("reactions").and_then(Value::as_array),
        _ => None,
    }
}

fn parse_element(doc: RawDocument) -> Result<ElementFile, Error> {
    let element = Element::deserialize(&doc.value)
        .map_err(|e| Error::malformed(&doc.path, e.to_string()))?;
    Ok(ElementFile {
        path: doc.path,
        element,
        document: doc.value,
    })
}

/// Loads every element record with its path, sorted by atomic number.
///
/// Any unreadable or malformed record fails the whole load.
pub fn load_element_files(layout: &Layout) -> Result<Vec<ElementFile>, Error> {
    let mut files = read_element_documents(layout)?
        .into_iter()
        .map(parse_element)
        .collect::<Result<Vec<_>, _>>()?;
    files.sort_by_key(|f| f.element.atomic_number);
    info!(count = files.len(), "loaded element records");
    Ok(files)
}

/// Loads every element record, sorted by atomic number.
pub fn load_elements(layout: &Layout) -> Result<Vec<Element>, Error> {
    Ok(load_element_files(layout)?
        .into_iter()
        .map(|f| f.element)
        .collect())
}

/// Loads element records for advisory use, skipping records that fail to
/// read or parse.
///
/// A missing elements directory is still an error.
pub fn load_elements_lenient(layout: &Layout) -> Result<Vec<Element>, Error> {
    let mut elements = Vec::new();
    for path in json_files(&layout.elements_dir)? {
        let parsed = read_document(&path)
            .and_then(|value| parse_element(RawDocument { path: path.clone(), value }));
        match parsed {
            Ok(file) => elements.push(file.element),
            Err(e) => warn!("skipping element record: {}", e),
        }
    }
    elements.sort_by_key(|e| e.atomic_number);
    Ok(elements)
}

fn parse_reaction_file(doc: RawDocument, lenient: bool) -> Result<ReactionFile, Error> {
    let name = doc
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(records) = reaction_records(&doc.value) else {
        return Err(Error::malformed(
            &doc.path,
            "expected an array of reactions or an object with a 'reactions' array",
        ));
    };

    let mut reactions = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        match Reaction::deserialize(record) {
            Ok(rxn) => reactions.push(rxn),
            Err(e) => {
                let id = record.get("id").and_then(Value::as_str).unwrap_or("?");
                let details = format!("reaction #{} ({}): {}", idx + 1, id, e);
                if lenient {
                    warn!(path = %doc.path.display(), "skipping {}", details);
                } else {
                    return Err(Error::malformed(&doc.path, details));
                }
            }
        }
    }

    Ok(ReactionFile {
        path: doc.path,
        name,
        reactions,
    })
}

/// Loads every reaction category file in path order.
pub fn load_reaction_files(layout: &Layout) -> Result<Vec<ReactionFile>, Error> {
    let files = read_reaction_documents(layout)?
        .into_iter()
        .map(|doc| parse_reaction_file(doc, false))
        .collect::<Result<Vec<_>, _>>()?;
    info!(files = files.len(), "loaded reaction files");
    Ok(files)
}

/// Loads every reaction as one flat sequence in file-then-declaration order.
pub fn load_reactions(layout: &Layout) -> Result<Vec<Reaction>, Error> {
    Ok(load_reaction_files(layout)?
        .into_iter()
        .flat_map(|f| f.reactions)
        .collect())
}

/// Best-effort variant of [`load_reaction_files`] for the query path.
///
/// Unreadable files and individual malformed records are skipped with a
/// warning.
pub fn load_reaction_files_lenient(layout: &Layout) -> Result<Vec<ReactionFile>, Error> {
    let mut files = Vec::new();
    for path in json_files(&layout.reactions_dir)? {
        if layout.is_reaction_index(&path) {
            continue;
        }
        let parsed = read_document(&path)
            .and_then(|value| parse_reaction_file(RawDocument { path, value }, true));
        match parsed {
            Ok(file) => files.push(file),
            Err(e) => warn!("skipping reaction file: {}", e),
        }
    }
    Ok(files)
}

/// Best-effort variant of [`load_reactions`].
pub fn load_reactions_lenient(layout: &Layout) -> Result<Vec<Reaction>, Error> {
    Ok(load_reaction_files_lenient(layout)?
        .into_iter()
        .flat_map(|f| f.reactions)
        .collect())
}
