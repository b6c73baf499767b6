/* Generate command - render both modules and write (or check) them */

use clap::Args;
use std::path::{Path, PathBuf};
use uniform_gen::codegen::{DEFAULT_CATALOG_DIR, DEFAULT_OUTPUT_DIR};
use uniform_gen::{check_module, write_module, CheckStatus, CodeGeneratorOptions, LocationIndex, Pass};
use uniform_loader::CatalogDir;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
  /// Directory containing the catalog YAML files
  #[arg(short = 'c', long = "catalog-dir", value_name = "DIR", default_value = DEFAULT_CATALOG_DIR)]
  pub catalog_dir: PathBuf,

  /// Directory the generated modules are written to (must exist)
  #[arg(short = 'o', long = "output", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
  pub output_dir: PathBuf,

  /// What the rewritten `ud[...]` lookup in setter bodies is indexed by
  #[arg(long = "location-index", value_enum, default_value_t = LocationIndex::Name)]
  pub location_index: LocationIndex,

  /// Compare against the files on disk instead of writing them
  #[arg(long = "check")]
  pub check: bool,
}

impl Default for GenerateArgs {
  fn default() -> Self {
    Self {
      catalog_dir: PathBuf::from(DEFAULT_CATALOG_DIR),
      output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
      location_index: LocationIndex::default(),
      check: false,
    }
  }
}

/* Execute the generate command. Each pass is its own failure domain. */
pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
  let catalog_dir = CatalogDir::new(&args.catalog_dir);
  let options = CodeGeneratorOptions {
    location_index: args.location_index,
  };

  tracing::debug!(
    catalog_dir = %args.catalog_dir.display(),
    output_dir = %args.output_dir.display(),
    location_index = ?args.location_index,
    check = args.check,
    "starting generation"
  );

  let mut failed = Vec::new();
  for pass in Pass::ALL {
    if let Err(err) = run_pass(pass, &catalog_dir, &args.output_dir, &options, args.check) {
      tracing::error!("{}: {:#}", pass.file_name(), err);
      failed.push(pass.file_name());
    }
  }

  if !failed.is_empty() {
    anyhow::bail!("generation failed for {}", failed.join(", "));
  }

  Ok(())
}

fn run_pass(
  pass: Pass,
  catalog_dir: &CatalogDir,
  output_dir: &Path,
  options: &CodeGeneratorOptions,
  check: bool,
) -> anyhow::Result<()> {
  let path = pass.output_path(output_dir);
  let content = pass.render(catalog_dir, options)?;

  if check {
    match check_module(&path, &content)? {
      CheckStatus::UpToDate => tracing::info!("[✓] {} is up to date", path.display()),
      CheckStatus::Stale => anyhow::bail!("{} is out of date", path.display()),
      CheckStatus::Missing => anyhow::bail!("{} does not exist", path.display()),
    }
    return Ok(());
  }

  write_module(&path, &content)?;
  tracing::info!("[✓] Generated {}", path.display());
  Ok(())
}
