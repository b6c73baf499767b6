pub mod assemble;
pub mod helpers;
pub mod literal;
pub mod rewrite;

use std::path::{Path, PathBuf};
use uniform_loader::{lint_ubo_catalogs, lint_uniform_catalogs, CatalogDir, LintFinding};
use uniform_types::{
    keyed_entries, CatalogEntry, FunctionFamily, ParserDescriptor, Signature, TemplateBody,
    UboCatalogs, UniformCatalogs,
};

use crate::error::{GenerateError, GenerateResult};
use assemble::assemble_collection;
use helpers::{alias_declaration, HEADER};
use rewrite::LocationIndex;

pub const DEFAULT_CATALOG_DIR: &str = "catalogs";
pub const DEFAULT_OUTPUT_DIR: &str = "src/unsafe-eval";

#[derive(Debug, Clone, Copy, Default)]
pub struct CodeGeneratorOptions {
    pub location_index: LocationIndex,
}

/* ============================================================================
   Generator Passes
   ============================================================================ */

/* Render the uniform function module */
pub fn generate_uniform_module(
    catalogs: &UniformCatalogs,
    options: &CodeGeneratorOptions,
) -> GenerateResult<String> {
    let mut parsers = parser_entries(FunctionFamily::UniformParser, &catalogs.parsers, |parser| {
        (parser.uniform.as_ref(), "uniform")
    })?;

    let blocks = Pass::Uniform.families().map(|family| {
        let entries = match family {
            FunctionFamily::SingleSetter => keyed_entries(&catalogs.single_setters),
            FunctionFamily::ArraySetter => keyed_entries(&catalogs.array_setters),
            FunctionFamily::UniformParser => std::mem::take(&mut parsers),
            /* not part of this pass */
            _ => Vec::new(),
        };
        (family, entries)
    });

    Ok(render_module(Signature::Uniform, &blocks, options))
}

/* Render the uniform buffer function module */
pub fn generate_ubo_module(
    catalogs: &UboCatalogs,
    options: &CodeGeneratorOptions,
) -> GenerateResult<String> {
    /* Fallback is decided per descriptor */
    let mut parsers = parser_entries(FunctionFamily::UboParser, &catalogs.parsers, |parser| {
        (parser.buffer_body(), "uboWgsl or ubo")
    })?;

    let blocks = Pass::Ubo.families().map(|family| {
        let entries = match family {
            FunctionFamily::UboParser => std::mem::take(&mut parsers),
            FunctionFamily::UboSingleWgsl => keyed_entries(&catalogs.wgsl_setters),
            FunctionFamily::UboSingleStd40 => keyed_entries(&catalogs.std40_setters),
            _ => Vec::new(),
        };
        (family, entries)
    });

    Ok(render_module(Signature::Ubo, &blocks, options))
}

fn parser_entries<'a>(
    family: FunctionFamily,
    parsers: &'a [ParserDescriptor],
    select: impl Fn(&'a ParserDescriptor) -> (Option<&'a TemplateBody>, &'static str),
) -> GenerateResult<Vec<CatalogEntry<'a>>> {
    parsers
        .iter()
        .enumerate()
        .map(|(index, parser)| match select(parser) {
            (Some(body), _) => Ok(CatalogEntry::indexed(index, body)),
            (None, field) => Err(GenerateError::MissingBody {
                family,
                index,
                uniform_type: parser.uniform_type.clone(),
                field,
            }),
        })
        .collect()
}

fn render_module(
    signature: Signature,
    blocks: &[(FunctionFamily, Vec<CatalogEntry<'_>>)],
    options: &CodeGeneratorOptions,
) -> String {
    let mut out: Vec<String> = vec![HEADER.to_string(), alias_declaration(signature).to_string()];

    for (family, entries) in blocks {
        debug_assert_eq!(family.signature(), signature);
        out.extend(assemble_collection(*family, entries, options.location_index));
    }

    out.join("\n")
}

/* ============================================================================
   Pass Selection
   ============================================================================ */

/* One generated module, with its own catalogs and destination */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Uniform,
    Ubo,
}

impl Pass {
    /* Passes in the order they run */
    pub const ALL: [Pass; 2] = [Pass::Uniform, Pass::Ubo];

    pub fn file_name(self) -> &'static str {
        match self {
            Pass::Uniform => "uniformSyncFunctions.ts",
            Pass::Ubo => "uboSyncFunctions.ts",
        }
    }

    pub fn output_path(self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }

    /* Families in the order their collections appear in the module */
    pub fn families(self) -> [FunctionFamily; 3] {
        match self {
            Pass::Uniform => [
                FunctionFamily::SingleSetter,
                FunctionFamily::ArraySetter,
                FunctionFamily::UniformParser,
            ],
            Pass::Ubo => [
                FunctionFamily::UboParser,
                FunctionFamily::UboSingleWgsl,
                FunctionFamily::UboSingleStd40,
            ],
        }
    }

    /* Lint the catalogs this pass consumes */
    pub fn lint(self, catalog_dir: &CatalogDir) -> GenerateResult<Vec<LintFinding>> {
        Ok(match self {
            Pass::Uniform => lint_uniform_catalogs(&catalog_dir.load_uniform_catalogs()?),
            Pass::Ubo => lint_ubo_catalogs(&catalog_dir.load_ubo_catalogs()?),
        })
    }

    /* Load this pass's catalogs and render its module. Nothing is written. */
    pub fn render(
        self,
        catalog_dir: &CatalogDir,
        options: &CodeGeneratorOptions,
    ) -> GenerateResult<String> {
        match self {
            Pass::Uniform => {
                let catalogs = catalog_dir.load_uniform_catalogs()?;
                warn_findings(self, &lint_uniform_catalogs(&catalogs));
                generate_uniform_module(&catalogs, options)
            }
            Pass::Ubo => {
                let catalogs = catalog_dir.load_ubo_catalogs()?;
                warn_findings(self, &lint_ubo_catalogs(&catalogs));
                generate_ubo_module(&catalogs, options)
            }
        }
    }
}

fn warn_findings(pass: Pass, findings: &[LintFinding]) {
    for finding in findings {
        tracing::warn!(module = pass.file_name(), "{}", finding);
    }
}
