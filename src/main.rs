//! hop - machine environment descriptor
//!
//! Tells tools and agents where things live on this machine.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hop::cli::{Cli, Commands};
use hop::commands::{self, Context};
use hop::error::{HopError, Result};

/// Log filter variable; `-v` raises the default to debug
const LOG_ENV: &str = "HOP_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "hop=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn dispatch(cli: Cli) -> Result<()> {
    let ctx = Context {
        config: cli.config,
        format: cli.format,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Where => commands::locate::run(&ctx),
        Commands::Show => commands::show::run(&ctx),
        Commands::Projects(args) => commands::projects::run_list(&ctx, &args),
        Commands::Project(args) => commands::projects::run_show(&ctx, &args),
        Commands::Systems => commands::systems::run_list(&ctx),
        Commands::System(args) => commands::systems::run_show(&ctx, &args),
        Commands::Bundles => commands::bundles::run_list(&ctx),
        Commands::Bundle(args) => commands::bundles::run_show(&ctx, &args),
        Commands::Infra => commands::infra::run(&ctx),
        Commands::Accounts => commands::accounts::run_list(&ctx),
        Commands::Account(args) => commands::accounts::run_show(&ctx, &args),
        Commands::Audit(args) => commands::audit::run(&ctx, &args),
        Commands::Validate => commands::validate::run(&ctx),
        Commands::Normalize => commands::validate::run_normalize(&ctx),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

fn report(err: &HopError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = dispatch(cli) {
        report(&e);
        std::process::exit(e.exit_code());
    }
}
