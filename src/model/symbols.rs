use std::collections::HashMap;

use super::element::Element;

/// Immutable symbol ↔ atomic number ↔ name lookup built from an element catalog.
///
/// Constructed once per run and passed to the components that need to
/// resolve element symbols (cross-reference checks, reaction id checks).
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    by_symbol: HashMap<String, (u32, String)>,
    by_number: HashMap<u32, String>,
}

impl SymbolTable {
    pub fn from_elements<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Self {
        let mut table = Self::default();
        for e in elements {
            table
                .by_symbol
                .entry(e.symbol.clone())
                .or_insert_with(|| (e.atomic_number, e.name.clone()));
            table
                .by_number
                .entry(e.atomic_number)
                .or_insert_with(|| e.symbol.clone());
        }
        table
    }

    /// Symbol membership is case-sensitive: `"Fe"` is known, `"FE"` is not.
    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    pub fn atomic_number(&self, symbol: &str) -> Option<u32> {
        self.by_symbol.get(symbol).map(|(z, _)| *z)
    }

    pub fn name(&self, symbol: &str) -> Option<&str> {
        self.by_symbol.get(symbol).map(|(_, name)| name.as_str())
    }

    pub fn symbol(&self, atomic_number: u32) -> Option<&str> {
        self.by_number.get(&atomic_number).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}
