//! dyscalc console — adaptive two-choice quiz sessions over a JSON pool,
//! plus a self-play simulation mode.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use dyscalc_algo::{EngineConfig, EngineError, ThetaEngine};
use dyscalc_cli::pool::PoolError;
use dyscalc_cli::session::{self, SessionError, SessionOptions};
use dyscalc_cli::sim::{self, SimOptions};
use dyscalc_cli::{logging, pool};

#[derive(Parser)]
#[command(name = "dyscalc", version, about = "Adaptive dyscalculia quiz console")]
struct Cli {
    /// Log level filter (overrides RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive quiz session over a pool file
    Run {
        /// Path to the quiz pool JSON
        #[arg(long, default_value = "quiz_data.json")]
        pool: PathBuf,

        /// Learner identifier
        #[arg(long, default_value = "child_cli")]
        learner: String,

        /// Stop after this many questions
        #[arg(long)]
        max_questions: Option<usize>,
    },

    /// Run a non-interactive self-play simulation
    Simulate {
        /// Learner identifier
        #[arg(long, default_value = "child_sim")]
        learner: String,

        /// Number of pick/update rounds
        #[arg(long, default_value = "30")]
        rounds: usize,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let _log_guard = logging::init_tracing(&cli.log_level);

    if let Err(err) = run(cli.command) {
        tracing::error!(error = %err, "exiting with error");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    let config = EngineConfig::from_env();
    if let Some(bound) = config.theta_clip {
        tracing::info!(bound, "θ clipping enabled");
    }
    let engine = ThetaEngine::with_config(config);

    match command {
        Commands::Run {
            pool: pool_path,
            learner,
            max_questions,
        } => {
            let entries = pool::load_quiz_pool(&pool_path)?;
            tracing::info!(
                items = entries.len(),
                path = %pool_path.display(),
                "quiz pool loaded"
            );

            let options = SessionOptions {
                learner_id: learner,
                max_questions,
            };
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let summary =
                session::run_session(&engine, &entries, &options, &mut input, &mut output)?;
            tracing::info!(
                questions = summary.questions_asked,
                theta = summary.final_theta,
                level = summary.final_level,
                "session finished"
            );
        }
        Commands::Simulate { learner, rounds } => {
            let options = SimOptions {
                learner_id: learner,
                rounds,
            };
            sim::run_simulation(&engine, &options)?;
        }
    }
    Ok(())
}
