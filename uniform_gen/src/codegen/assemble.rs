use uniform_types::{CatalogEntry, CollectionKind, EntryKey, FunctionFamily};

use super::helpers::{collection_closing, collection_opening};
use super::literal::function_literal;
use super::rewrite::{rewrite_body, LocationIndex};

/* Render one family's exported collection as text lines, in entry order */
pub fn assemble_collection(
    family: FunctionFamily,
    entries: &[CatalogEntry<'_>],
    location_index: LocationIndex,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(collection_opening(family));

    for entry in entries {
        let body = rewrite_body(family, *entry, location_index);
        let literal = function_literal(family.signature(), family.wrap_style(), &body);

        let line = match (family.collection_kind(), entry.key) {
            (CollectionKind::Table, EntryKey::Named(key)) => format!("'{}': {},", key, literal),
            (CollectionKind::Table, EntryKey::Index(index)) => format!("'{}': {},", index, literal),
            (CollectionKind::List, _) => format!("{},", literal),
        };
        lines.push(line);
    }

    lines.push(collection_closing(family).to_string());
    lines
}
