//! Location rewrite for location-aware template bodies.
//!
//! Setter bodies refer to the uniform's binding slot with the bare
//! identifier `location`. Generated setters receive the slot through the
//! `ud` parameter, so every occurrence is replaced with a lookup through it.
//!
//! The replacement is a literal substring replacement. It does not respect
//! identifier boundaries: `locationOffset` or a `location` inside a string
//! literal is rewritten as well. Catalogs must not contain such text; the
//! `lint` command reports it.

use clap::ValueEnum;
use std::borrow::Cow;
use uniform_types::{CatalogEntry, EntryKey, FunctionFamily, LOCATION_TOKEN};

/// What the generated `ud[...]` lookup is indexed by.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum LocationIndex {
    /// The generated function's `name` parameter, i.e. `ud[name].location`
    #[default]
    Name,
    /// The catalog key of the entry, e.g. `ud[FLOAT].location`. Only valid
    /// TypeScript when every key is an identifier in scope.
    Key,
}

/* Qualified access path replacing the bare `location` token */
pub fn qualified_location(key: EntryKey<'_>, index: LocationIndex) -> String {
    match (index, key) {
        (LocationIndex::Name, _) => "ud[name].location".to_string(),
        (LocationIndex::Key, EntryKey::Named(name)) => format!("ud[{}].location", name),
        (LocationIndex::Key, EntryKey::Index(position)) => format!("ud[{}].location", position),
    }
}

/* Replace every `location` substring in `body` with the qualified path */
pub fn rewrite_location(body: &str, key: EntryKey<'_>, index: LocationIndex) -> String {
    body.replace(LOCATION_TOKEN, &qualified_location(key, index))
}

/* Body of an entry as it should appear in the generated literal */
pub fn rewrite_body<'a>(
    family: FunctionFamily,
    entry: CatalogEntry<'a>,
    index: LocationIndex,
) -> Cow<'a, str> {
    if family.is_location_aware() {
        Cow::Owned(rewrite_location(entry.body.as_str(), entry.key, index))
    } else {
        Cow::Borrowed(entry.body.as_str())
    }
}
