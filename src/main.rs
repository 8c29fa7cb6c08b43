// SPDX-License-Identifier: MPL-2.0
use floorboard::app::{self, Flags};
use std::process::ExitCode;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const HELP: &str = "\
Floorboard - manufacturing plant operations dashboard

USAGE:
  floorboard [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  -v, --verbose        Enable debug logging
  -h, --help           Print this help

ENVIRONMENT:
  FLOORBOARD_CONFIG_DIR   Config directory, overridden by --config-dir
  RUST_LOG                Log filter, overrides --verbose
";

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "floorboard=debug,warn"
    } else {
        "floorboard=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let lang: Option<String> = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(verbose);

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("floorboard-timers")
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            tracing::error!(%error, "failed to start timer runtime");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        lang,
        config_dir,
        runtime: runtime.handle().clone(),
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application error");
            ExitCode::FAILURE
        }
    }
}
