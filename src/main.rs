use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordscan::engine::config::{ScanConfig, DEFAULT_INPUT};
use wordscan::output::ConsoleReporter;
use wordscan::App;

#[derive(Parser)]
#[command(author, version, about = "Print every whitespace-separated token in a file", long_about = None)]
struct Cli {
    /// File to tokenize
    #[arg(default_value = DEFAULT_INPUT)]
    path: PathBuf,

    /// Log each token as it is scanned
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for ScanConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.path,
            verbose: cli.verbose,
        }
    }
}

fn main() {
    let config = ScanConfig::from(Cli::parse());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(config);
    let mut reporter = ConsoleReporter::stdout();

    if let Err(e) = app.run(&mut reporter) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
