//! FOSSify - Main entry point
//!
//! Parses the mode, wires the adb channel, terminal confirmation and console
//! reporter into the executor, and maps the outcome to an exit status.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use fossify::cli::Cli;
use fossify::console;
use fossify::{
    AdbChannel, Catalog, ConsoleReporter, Executor, FossifyError, LineConfirm, Result, RunReport,
};

/// Initialize the tracing subscriber. `RUST_LOG` wins unless `--verbose` is set.
fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let catalog = Catalog::builtin();

    let cli = match Cli::try_parse_normalized(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, &catalog),
    };

    init_logger(cli.verbose);
    info!("FOSSify starting in {} mode", cli.mode());

    // Children are killed and the process exits 130 on SIGINT/SIGTERM/SIGHUP
    if let Err(e) = fossify::process_guard::init_signal_handlers() {
        warn!("Failed to initialize signal handlers: {}", e);
    }
    debug!("Signal handlers initialized");

    match run(&cli, &catalog) {
        Ok(report) => {
            debug!(tally = ?report.tally, "run complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            match &e {
                // The reporter already explained this one
                FossifyError::ConnectionAbsent => {}
                FossifyError::Interrupted => println!("\n\n⚠️  {}", e),
                _ => {
                    error!("{}", e);
                    eprintln!("\n❌ {}", e);
                }
            }
            exit_status(e.exit_code())
        }
    }
}

fn run(cli: &Cli, catalog: &Catalog) -> Result<RunReport> {
    let settings = cli.settings()?;
    debug!(?settings, "effective settings");

    let channel = AdbChannel::new(settings);
    let executor = Executor::new(catalog, &channel);
    let mut confirm = LineConfirm::stdin();
    let mut reporter = ConsoleReporter::stdout();

    let report = executor.run(cli.mode(), &mut confirm, &mut reporter)?;

    if let Some(path) = &cli.report {
        report.save_to_file(path)?;
        println!("\n  📝 Report written to {}", path.display());
    }
    Ok(report)
}

/// Report a command-line error together with the usage banner
fn usage_error(e: clap::Error, catalog: &Catalog) -> ExitCode {
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = e.print();
        return ExitCode::SUCCESS;
    }

    match (e.kind(), e.get(ContextKind::InvalidArg)) {
        (ErrorKind::UnknownArgument, Some(ContextValue::String(arg))) => {
            println!("❌ Unknown mode: {}", arg.to_lowercase());
        }
        (ErrorKind::MissingRequiredArgument, _) => {}
        _ => {
            let _ = e.print();
        }
    }
    print!("{}", console::usage(catalog));
    exit_status(1)
}

fn exit_status(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
