use indexmap::IndexMap;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/* ============================================================================
   Template Bodies
   ============================================================================ */

/* Opaque source text describing one value-upload operation. Never parsed. */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct TemplateBody(String);

impl TemplateBody {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /* True when the body holds nothing but whitespace */
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for TemplateBody {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for TemplateBody {
    fn from(body: String) -> Self {
        Self(body)
    }
}

impl AsRef<str> for TemplateBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/* ============================================================================
   Catalogs
   ============================================================================ */

/* Type key -> body. Insertion order is the enumeration order. */
pub type KeyedCatalog = IndexMap<String, TemplateBody>;

/* One uniform parser descriptor. Each pass reads only the fields it needs. */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParserDescriptor {
    /* Uniform type this parser handles (e.g. "mat3x3<f32>") */
    #[serde(rename = "type", default)]
    pub uniform_type: String,

    /* Immediate-mode upload body */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniform: Option<TemplateBody>,

    /* Uniform buffer upload body, used when no WGSL specific body exists */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubo: Option<TemplateBody>,

    /* Uniform buffer upload body for the WGSL layout */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubo_wgsl: Option<TemplateBody>,

    /* Uniform buffer upload body for the STD140 layout */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubo_std40: Option<TemplateBody>,
}

impl ParserDescriptor {
    pub fn new(uniform_type: impl Into<String>) -> Self {
        Self {
            uniform_type: uniform_type.into(),
            ..Default::default()
        }
    }

    pub fn with_uniform(mut self, body: impl Into<TemplateBody>) -> Self {
        self.uniform = Some(body.into());
        self
    }

    pub fn with_ubo(mut self, body: impl Into<TemplateBody>) -> Self {
        self.ubo = Some(body.into());
        self
    }

    pub fn with_ubo_wgsl(mut self, body: impl Into<TemplateBody>) -> Self {
        self.ubo_wgsl = Some(body.into());
        self
    }

    pub fn with_ubo_std40(mut self, body: impl Into<TemplateBody>) -> Self {
        self.ubo_std40 = Some(body.into());
        self
    }

    /* Buffer upload body: WGSL first, generic `ubo` as fallback */
    pub fn buffer_body(&self) -> Option<&TemplateBody> {
        self.ubo_wgsl.as_ref().or(self.ubo.as_ref())
    }
}

/* Catalogs consumed by the uniform function pass */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniformCatalogs {
    pub single_setters: KeyedCatalog,
    pub array_setters: KeyedCatalog,
    pub parsers: Vec<ParserDescriptor>,
}

/* Catalogs consumed by the uniform buffer function pass */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UboCatalogs {
    pub parsers: Vec<ParserDescriptor>,
    pub wgsl_setters: KeyedCatalog,
    pub std40_setters: KeyedCatalog,
}

/* ============================================================================
   Catalog Entries
   ============================================================================ */

/* Position of an entry within its catalog */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKey<'a> {
    Named(&'a str),
    Index(usize),
}

impl fmt::Display for EntryKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKey::Named(name) => f.write_str(name),
            EntryKey::Index(index) => write!(f, "#{}", index),
        }
    }
}

/* A single (key-or-index, body) pair, borrowed from its catalog */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    pub key: EntryKey<'a>,
    pub body: &'a TemplateBody,
}

impl<'a> CatalogEntry<'a> {
    pub fn named(key: &'a str, body: &'a TemplateBody) -> Self {
        Self {
            key: EntryKey::Named(key),
            body,
        }
    }

    pub fn indexed(index: usize, body: &'a TemplateBody) -> Self {
        Self {
            key: EntryKey::Index(index),
            body,
        }
    }
}

/* Entries of a keyed catalog in enumeration order */
pub fn keyed_entries(catalog: &KeyedCatalog) -> Vec<CatalogEntry<'_>> {
    catalog
        .iter()
        .map(|(key, body)| CatalogEntry::named(key, body))
        .collect()
}
