mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::Cli;
use crate::commands::generate::GenerateArgs;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_app(cli) {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 topgen v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if cli.list {
        info!("Dispatching to 'list' command.");
        commands::list::run();
        return Ok(());
    }

    let args = match (cli.monomers, cli.output) {
        (Some(monomers), Some(output)) => GenerateArgs {
            monomers,
            output,
            source: cli.source,
        },
        _ => {
            return Err(CliError::Argument(
                "expected <MONOMERS> <OUTPUT>".to_string(),
            ));
        }
    };

    info!("Dispatching to 'generate' command.");
    let result = commands::generate::run(args);
    match &result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }
    result
}
