use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod validate;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("cpic_lint=debug,info")
    } else {
        EnvFilter::new("cpic_lint=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Validate(args) => {
            let all_passed = cli::validate::run(&args, cli.format, cli.verbose)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        cli::Commands::Assemblies(args) => {
            cli::assemblies::run(&args, cli.format)?;
        }
    }

    Ok(())
}
