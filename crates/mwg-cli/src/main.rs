use mwg_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; a missing state dir must not
    // stop a run, so fall back to stderr.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and run the pipeline.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("mwg error: {:#}", err);
        std::process::exit(1);
    }
}
