//! quiz CLI: asks the questions in a CSV file and reports a score.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use quiz_core::error::QuizError;

mod run;

const DEFAULT_LOG_FILTER: &str = "quiz=warn,quiz_core=warn";

#[derive(Parser)]
#[command(name = "quiz", version, about = "Timed question/answer quiz from a CSV file")]
struct Cli {
    /// A CSV file in the format of 'question,answer' [default: problems.csv]
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Time limit for the quiz in seconds [default: 30]
    #[arg(long = "timeLimit", visible_alias = "time-limit", value_name = "SECS")]
    time_limit: Option<u64>,

    /// Run without a time limit
    #[arg(long, conflicts_with = "time_limit")]
    no_timer: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Quiz output owns stdout; diagnostics stay on stderr and quiet by default.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = run::execute(run::Overrides {
        csv: cli.csv,
        time_limit_secs: cli.time_limit,
        no_timer: cli.no_timer,
        config: cli.config,
    })
    .await;

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        let code = e.downcast_ref::<QuizError>().map_or(1, QuizError::exit_code);
        process::exit(code);
    }
}
