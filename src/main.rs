use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use minus::Pager;
use simp::areas::project::Project;
use simp::artifacts::core::PagedOutput;
use simp::commands::sort::SortOptions;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_ENV: &str = "SIMP_LOG";

#[derive(Parser)]
#[command(
    name = "simp",
    version = "0.9.1",
    about = "Sort the import directives in Python source files",
    long_about = "simp sorts the import block at the top of Python source files simply: \
    comments in the block move above it, duplicate imports are dropped and the rest \
    are sorted. Without flags it only lists the files that would change.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        index = 1,
        default_value = ".",
        help = "One or more Python files or directories with Python files"
    )]
    targets: Vec<String>,
    #[arg(
        short,
        long,
        help = "Make the changes and commit them. Implies --execute"
    )]
    commit: bool,
    #[arg(short, long, help = "Print diffs for each changed file")]
    diffs: bool,
    #[arg(
        short = 'x',
        long,
        help = "Actually make the changes to the Python files, otherwise just list them"
    )]
    execute: bool,
    #[arg(
        short,
        long,
        help = "Exit with the number of files that need changes instead of listing them"
    )]
    fail: bool,
    #[arg(
        long,
        default_value_t = 2,
        help = "Unchanged lines shown around each change with --diffs"
    )]
    context: usize,
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let options = SortOptions::new(
        cli.targets,
        cli.commit,
        cli.diffs,
        cli.execute,
        cli.fail,
        cli.context,
    );

    let pwd = std::env::current_dir()?;
    let use_pager = options.diffs
        && std::env::var_os("NO_PAGER").is_none()
        && std::io::stdout().is_terminal();
    let paged = use_pager.then(|| PagedOutput::new(Pager::new()));
    let writer: Box<dyn std::io::Write> = match &paged {
        Some(paged) => paged.writer(),
        None => Box::new(std::io::stdout()),
    };

    let project = Project::new(&pwd.to_string_lossy(), writer, Box::new(std::io::stderr()))?;
    let code = project.sort(&options)?;

    if let Some(paged) = paged {
        paged.show()?;
    }

    Ok(ExitCode::from(code))
}
