use clap::{Parser, Subcommand};
use page_updater::update::{Mode, PageUpdater};
use page_updater::{config, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "page-updater")]
#[command(about = "Add the hamburger menu and normalized navigation to portfolio pages")]
#[command(long_about = "\
Add the hamburger menu and normalized navigation to portfolio pages

For each page in the list (education, experience, projects, publications,
contact by default):

  1. Insert the hamburger button and overlay before the
     '<!-- Sidebar Navigation -->' comment, unless 'menu-toggle' is present
  2. Rewrite '<aside class=\"sidebar\">' to '<aside class=\"sidebar\" id=\"sidebar\">'
  3. Replace the first '<nav class=\"sidebar-nav\">...</nav>' block with the
     standard navigation, the page's own link marked 'active'
  4. Save the page in place

Missing pages are reported and skipped. Running twice changes nothing.

Run 'page-updater gen-config' to print a documented page-updater.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing the pages
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,

    /// Config file (defaults to page-updater.toml in --dir when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log each edit step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Edit every page in place (the default)
    Update,
    /// Show what would change without writing anything
    Check,
    /// Print a stock page-updater.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Update) {
        Command::Update => run_batch(&cli.dir, cli.config.as_deref(), Mode::Write)?,
        Command::Check => run_batch(&cli.dir, cli.config.as_deref(), Mode::DryRun)?,
        Command::GenConfig => print!("{}", config::stock_config_toml()),
    }

    Ok(())
}

/// Load config, then process every page, printing each outcome as it lands.
fn run_batch(
    dir: &Path,
    config_path: Option<&Path>,
    mode: Mode,
) -> Result<(), config::ConfigError> {
    let site_config = config::load_config(dir, config_path)?;
    let updater = PageUpdater::new(site_config)?;
    updater.run(dir, mode, |outcome| output::print_outcome(outcome, mode));
    output::print_completion(mode);
    Ok(())
}

/// Diagnostics go to stderr so the report on stdout stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
