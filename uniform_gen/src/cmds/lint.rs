/* Lint command - report catalog content the generator would mangle */

use clap::Args;
use std::path::PathBuf;
use uniform_gen::codegen::DEFAULT_CATALOG_DIR;
use uniform_gen::Pass;
use uniform_loader::CatalogDir;

#[derive(Args, Debug, Clone)]
pub struct LintArgs {
  /// Directory containing the catalog YAML files
  #[arg(short = 'c', long = "catalog-dir", value_name = "DIR", default_value = DEFAULT_CATALOG_DIR)]
  pub catalog_dir: PathBuf,
}

/* Execute the lint command. A pass whose catalogs fail to load does not stop the other. */
pub fn run(args: LintArgs) -> anyhow::Result<()> {
  let catalog_dir = CatalogDir::new(&args.catalog_dir);
  let mut total = 0;
  let mut failed = Vec::new();

  for pass in Pass::ALL {
    match pass.lint(&catalog_dir) {
      Ok(findings) => {
        for finding in &findings {
          println!("warning: {}", finding);
        }
        total += findings.len();
      }
      Err(err) => {
        println!("error: {}", err);
        failed.push(pass.file_name());
      }
    }
  }

  if !failed.is_empty() {
    anyhow::bail!(
      "could not lint catalogs for {} ({} finding(s) in the rest)",
      failed.join(", "),
      total
    );
  }

  if total > 0 {
    anyhow::bail!("{} catalog finding(s) in {}", total, catalog_dir.root().display());
  }

  println!("[✓] Catalogs in {} are clean", catalog_dir.root().display());
  Ok(())
}
