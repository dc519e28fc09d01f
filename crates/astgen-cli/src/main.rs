//! astgen CLI - generate AST type definitions from arrow expressions.

use astgen_driver::{Family, GeneratorConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// astgen - Rust AST definitions from arrow expressions
#[derive(Parser)]
#[command(name = "astgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Indentation for generated members: `tab`, a number of spaces, or literal text
    #[arg(long, global = true)]
    indent: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every built-in family under a project root
    Generate {
        /// Project root (default: $ASTGEN_ROOT or the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Print one built-in family to stdout
    Print {
        /// Family name (expr, stmt)
        family: Family,
    },

    /// Render a JSON request file
    Render {
        /// Request file
        file: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check request files for malformed arrow expressions
    Check {
        /// Request file(s)
        files: Vec<PathBuf>,
    },

    /// Show how a single arrow expression parses
    Parse {
        /// Arrow expression, e.g. "Unary -> operator: Token, right: Box<Expr>"
        line: String,
    },

    /// List the built-in families
    Families,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let mut config = GeneratorConfig::from_env();
    if let Some(indent) = &cli.indent {
        config.indent = astgen_driver::parse_indent(indent);
    }

    match cli.command {
        Commands::Generate { root } => {
            if let Some(root) = root {
                config.root = root;
            }
            commands::generate::run(&config)
        }
        Commands::Print { family } => commands::print::run(family, &config),
        Commands::Render { file, output } => commands::render::run(&file, output.as_deref(), &config),
        Commands::Check { files } => commands::check::run(&files),
        Commands::Parse { line } => commands::parse::run(&line),
        Commands::Families => commands::families::run(&config),
    }
}
