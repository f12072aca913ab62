use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use tensecheck::{
    Error, ResourceStore, TenseChecker, TenseClassifier, TensecheckConfig,
};

const USAGE: &str = "Usage: tensecheck <directory_path>";

#[derive(Parser)]
#[command(name = "tensecheck")]
#[command(version, about = "check that release notes are written in past tense", long_about = None)]
struct Cli {
    /// directory holding the release note yaml files
    directory: PathBuf,

    /// configuration file (defaults to tensecheck.toml in the directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// where language resources are cached (defaults to ~/nltk_data)
    #[arg(long, env = "TENSECHECK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// never download language resources
    #[arg(long)]
    offline: bool,

    /// exit with an error if any error-level issue was found
    #[arg(long)]
    strict: bool,

    /// print a summary line after the diagnostics
    #[arg(long)]
    summary: bool,

    /// enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("tensecheck")
        .build();

    // stdout is reserved for diagnostics
    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                eprint!("{}", err);
                println!("{}", USAGE);
                std::process::exit(1);
            }
        },
    }
}

fn main() -> Result<()> {
    let cli = parse_args();
    initialize_logger(cli.debug)?;
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    if !cli.directory.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: cli.directory.clone(),
        }
        .into());
    }

    let mut config = match &cli.config {
        Some(path) => TensecheckConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => TensecheckConfig::load_or_default(&cli.directory),
    };

    if let Some(data_dir) = cli.data_dir {
        config.resources.data_dir = Some(data_dir);
    }
    if cli.offline {
        config.resources.offline = true;
    }

    let store = ResourceStore::from_config(&config.resources)
        .context("failed to locate the language resource directory")?;
    let resources = store
        .ensure_all()
        .context("failed to initialize language resources")?;
    let classifier = TenseClassifier::from_resources(&resources, &config.notes.past_tense_tags)
        .context("failed to load language resources")?;

    let analysis = TenseChecker::check_directory(
        &cli.directory,
        &config.notes,
        &config.severity,
        &classifier,
    )
    .with_context(|| format!("failed to check {}", cli.directory.display()))?;

    analysis.display_diagnostics();
    if cli.summary {
        analysis.display_summary();
    }

    if cli.strict && analysis.has_errors() {
        // return error to cause non-zero exit code
        anyhow::bail!("check failed with {} error(s)", analysis.total_errors);
    }

    Ok(())
}
