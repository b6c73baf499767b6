use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use uniform_types::{FunctionFamily, KeyedCatalog, ParserDescriptor, UboCatalogs, UniformCatalogs};

use crate::error::CatalogError;

pub const CATALOG_EXTENSION: &str = "yaml";

/* Directory holding one YAML file per catalog */
#[derive(Debug, Clone)]
pub struct CatalogDir {
    root: PathBuf,
}

impl CatalogDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /* Path of the catalog a family reads its bodies from */
    pub fn path_for(&self, family: FunctionFamily) -> PathBuf {
        self.root
            .join(family.catalog_name())
            .with_extension(CATALOG_EXTENSION)
    }

    /* Load a type-key -> body catalog, keeping document order */
    pub fn load_keyed(&self, family: FunctionFamily) -> Result<KeyedCatalog, CatalogError> {
        load_yaml(&self.path_for(family))
    }

    /* Load the ordered list of uniform parser descriptors */
    pub fn load_parsers(&self) -> Result<Vec<ParserDescriptor>, CatalogError> {
        load_yaml(&self.path_for(FunctionFamily::UniformParser))
    }

    /* Load everything the uniform function pass consumes */
    pub fn load_uniform_catalogs(&self) -> Result<UniformCatalogs, CatalogError> {
        Ok(UniformCatalogs {
            single_setters: self.load_keyed(FunctionFamily::SingleSetter)?,
            array_setters: self.load_keyed(FunctionFamily::ArraySetter)?,
            parsers: self.load_parsers()?,
        })
    }

    /* Load everything the uniform buffer function pass consumes */
    pub fn load_ubo_catalogs(&self) -> Result<UboCatalogs, CatalogError> {
        Ok(UboCatalogs {
            parsers: self.load_parsers()?,
            wgsl_setters: self.load_keyed(FunctionFamily::UboSingleWgsl)?,
            std40_setters: self.load_keyed(FunctionFamily::UboSingleStd40)?,
        })
    }
}

/* Read and deserialize one catalog file. A blank file is an empty catalog. */
fn load_yaml<T: DeserializeOwned + Default>(path: &Path) -> Result<T, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        tracing::debug!("catalog {} is empty", path.display());
        return Ok(T::default());
    }

    let parsed = serde_yml::from_str(&content).map_err(|source| CatalogError::Shape {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("loaded catalog {}", path.display());
    Ok(parsed)
}
