use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cmds;

use cmds::generate::GenerateArgs;
use cmds::lint::LintArgs;

#[derive(Parser)]
#[command(name = "uniform-gen")]
#[command(about = "Generates the uniform and uniform buffer sync function modules", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log at debug level regardless of RUST_LOG
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate both sync function modules (the default when no command is given)
    Generate(GenerateArgs),

    /// Check catalog content for text the location rewrite would mangle
    Lint(LintArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => cmds::generate::run(args)?,
        Commands::Lint(args) => cmds::lint::run(args)?,
    }

    Ok(())
}
