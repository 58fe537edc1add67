//! linkgraph CLI entry point.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkgraph::job::{GenerateJob, WatchEvent, Watcher};
use linkgraph::serve::{self, DEFAULT_LISTEN};
use linkgraph::{Error, OutputFormat};

/// Input directory argument that asks for the path on stdin.
const PROMPT_FOR_DIR: &str = "?";

/// Dependency graph definition to a static HTML/SVG diagram.
#[derive(Parser, Debug)]
#[command(
    name = "linkgraph",
    version = env!("LINKGRAPH_VERSION"),
    about = "Dependency graph definition to a static HTML/SVG diagram"
)]
struct Cli {
    /// Input directory; the output is written next to the graph file ("?" reads it from stdin)
    #[arg(short = 'i', long = "indir")]
    input_dir: PathBuf,

    /// Graph definition file name inside the input directory
    #[arg(short = 'g', long = "graph", default_value = "graph.yaml")]
    graph: String,

    /// Output file name inside the input directory
    #[arg(short = 'o', long = "out", default_value = "index.html")]
    output: String,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Regenerate the output whenever the graph file changes
    #[arg(short = 'w', long = "watch", conflicts_with = "serve")]
    watch: bool,

    /// Polling interval for --watch, in milliseconds
    #[arg(long = "interval-ms", default_value = "500")]
    interval_ms: u64,

    /// Serve the input directory over HTTP, regenerating the output on each request for it
    #[arg(short = 's', long = "serve")]
    serve: bool,

    /// Listen address for --serve (":port" listens on every interface)
    #[arg(short = 'l', long = "listen", default_value = DEFAULT_LISTEN)]
    listen: String,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The input directory as given, or read from stdin when it is `?`.
fn resolve_input_dir(arg: &Path) -> io::Result<PathBuf> {
    if arg.as_os_str() != PROMPT_FOR_DIR {
        return Ok(arg.to_path_buf());
    }
    eprint!("Enter input directory => ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

/// Map a run result to the process exit code: 2 for layout faults, 1 for
/// anything else that failed.
fn exit_code(result: Result<(), Error>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_fault() => {
            tracing::error!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Poll until a layout fault ends the loop. User-input errors are logged
/// and the loop waits for the next edit.
fn watch(mut watcher: Watcher, interval: Duration) -> ExitCode {
    tracing::info!(
        graph = %watcher.job().graph.display(),
        "watching for changes (ctrl-c to quit)"
    );
    loop {
        match watcher.poll() {
            Ok(WatchEvent::Rejected(e)) => tracing::warn!("{e}; waiting for the next change"),
            Ok(WatchEvent::Generated | WatchEvent::Unchanged) => {}
            Err(e) => return exit_code(Err(e)),
        }
        thread::sleep(interval);
    }
}

fn run_server(dir: PathBuf, listen: &str, job: GenerateJob) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => return exit_code(Err(e.into())),
    };
    exit_code(runtime.block_on(serve::serve(dir, listen, job)))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input_dir = match resolve_input_dir(&cli.input_dir) {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!("unable to read input directory: {e}");
            return ExitCode::FAILURE;
        }
    };
    if !input_dir.is_dir() {
        tracing::error!(dir = %input_dir.display(), "input dir not accessible");
        return ExitCode::FAILURE;
    }

    let job = GenerateJob::new(
        input_dir.join(&cli.graph),
        input_dir.join(&cli.output),
        cli.format,
    );
    if cli.serve {
        return run_server(input_dir, &cli.listen, job);
    }
    if cli.watch {
        return watch(Watcher::new(job), Duration::from_millis(cli.interval_ms.max(1)));
    }
    exit_code(job.run())
}
