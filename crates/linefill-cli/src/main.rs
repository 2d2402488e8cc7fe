use std::process::ExitCode;

use linefill_engine::logging::{init_logging, LoggingConfig};

mod args;

use args::CliArgs;

const LOG_FALLBACK: &str = "warn,linefill=info,linefill_engine=info";

fn main() -> ExitCode {
    let args = match CliArgs::parse(std::env::args()) {
        Ok(args) => args,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::FAILURE;
        }
    };

    // Keep codec crates quiet unless RUST_LOG asks otherwise.
    init_logging(LoggingConfig::with_fallback(LOG_FALLBACK));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = args.into_run_config();
    log::debug!("{config:?}");
    linefill_engine::run(&config)?;
    Ok(())
}
