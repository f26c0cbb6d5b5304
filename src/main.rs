// src/main.rs

use gr::engine::SequenceOutcome;
use gr::report::SHUTDOWN_GRACE;
use gr::{cli, logging, run};

/// Exit code after Ctrl-C (128 + SIGINT).
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() {
    let code = match run_main().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("gr error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

async fn run_main() -> anyhow::Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;

    // A listener that fails to install must not end the run.
    let interrupted = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    // Dropping the run future on Ctrl-C drops the child, which kills it, and
    // the live display, whose loops then stop on their own.
    tokio::select! {
        outcome = run(args) => {
            let outcome = outcome?;
            report_failure(&outcome);
            Ok(outcome.exit_code())
        }
        () = interrupted => {
            tokio::time::sleep(SHUTDOWN_GRACE).await;
            println!();
            eprintln!("gr: interrupted");
            Ok(INTERRUPTED_EXIT_CODE)
        }
    }
}

fn report_failure(outcome: &SequenceOutcome) {
    if let Some(failed) = outcome.first_failure() {
        eprintln!("gr: task '{}' failed: {}", failed.task, failed.outcome);
        if !outcome.skipped.is_empty() {
            let skipped: Vec<_> = outcome.skipped.iter().map(|t| t.tag()).collect();
            eprintln!("gr: not run: {}", skipped.join(", "));
        }
    }
}
