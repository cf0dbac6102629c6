use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("gnc error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = gnc_config::GncConfig::load_with_dotenv().context("failed to load gnc configuration")?;
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let mut ctx = context::AppContext::init(config, cwd);

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags)
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("GNC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(flags.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
