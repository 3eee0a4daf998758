use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rustc_hash::FxHashSet;
use tracing_subscriber::EnvFilter;

use tonto::project::{self, ImportLoader, LoadError, LoadOptions, LoadedModel};
use tonto::report;

/// Environment variable holding the log filter
const LOG_ENV: &str = "TONTO_LOG";

/// TONTO ontology language front end.
#[derive(Parser)]
#[command(name = "tonto", version, about = "TONTO lexer, parser and pattern validator")]
struct Cli {
    /// Log at debug level unless TONTO_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token table and counts by kind
    Tokens {
        /// Path to the .tonto source file
        file: PathBuf,
    },

    /// Report syntax errors and summarize the model
    Parse {
        /// Path to the .tonto source file
        file: PathBuf,
    },

    /// Merge imports, then run the pattern and reference checks
    Check {
        /// Path to the root .tonto source file
        file: PathBuf,
        /// Extra directory searched for imports (repeatable)
        #[arg(long = "include", value_name = "DIR")]
        include: Vec<PathBuf>,
        /// Validate the root file alone
        #[arg(long)]
        no_imports: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    // Keep a subscriber that is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Tokens { file } => cmd_tokens(&file),
        Commands::Parse { file } => cmd_parse(&file),
        Commands::Check {
            file,
            include,
            no_imports,
        } => cmd_check(&file, include, no_imports),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

/// Each command returns `Ok(true)` when the input had no syntax errors.
fn cmd_tokens(file: &Path) -> Result<bool, LoadError> {
    project::file_loader::validate_extension(file, &LoadOptions::default())?;
    let text = project::file_loader::load_file(file)?;
    let tokenized = tonto::tokenize(&text);
    print!("{}", report::TokenTable(&tokenized));
    if !tokenized.errors.is_empty() {
        println!();
        print!("{}", report::ErrorList::new(None, &tokenized.errors));
    }
    Ok(tokenized.errors.is_empty())
}

fn cmd_parse(file: &Path) -> Result<bool, LoadError> {
    let parsed = project::load_and_parse(file, &LoadOptions::default())?;
    print!("{}", report::ErrorList::new(Some(file), &parsed.parse.errors));
    println!();
    print!("{}", report::Summary(&parsed.parse.model));
    Ok(parsed.parse.ok())
}

fn cmd_check(file: &Path, include: Vec<PathBuf>, no_imports: bool) -> Result<bool, LoadError> {
    let options = LoadOptions {
        search_paths: include,
        ..LoadOptions::default()
    };

    let LoadedModel { model, report: imports } = if no_imports {
        let parsed = project::load_and_parse(file, &options)?;
        LoadedModel {
            model: parsed.parse.model,
            report: project::ImportReport {
                files: vec![project::FileReport {
                    path: parsed.path,
                    errors: parsed.parse.errors,
                }],
                unresolved: Vec::new(),
            },
        }
    } else {
        ImportLoader::new(options).load(file, &mut FxHashSet::default())?
    };

    for file_report in &imports.files {
        print!(
            "{}",
            report::ErrorList::new(Some(&file_report.path), &file_report.errors)
        );
    }
    for unresolved in &imports.unresolved {
        println!(
            "{}: line {}: unresolved import '{}'",
            unresolved.from.display(),
            unresolved.line,
            unresolved.name
        );
    }

    let findings = tonto::validate(&model);
    println!();
    print!("{}", report::FindingList(&findings));
    println!("\n{}", report::Tally(&findings));

    let references = tonto::check_references(&model);
    if !references.is_empty() {
        println!();
        print!("{}", report::FindingList(&references));
    }

    Ok(!imports.has_syntax_errors())
}
