use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use raspis::cli::args::{Cli, Commands};
use raspis::cli::commands::{self, Context};
use raspis::error::ScheduleError;

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let output = match cli.command {
        // Parsing needs no configuration or stored data.
        Commands::Parse { text } => commands::parse(&text, cli.output.unwrap_or_default())?,
        command => {
            let ctx = Context::load(cli.output).context("failed to load configuration")?;
            ctx.config.general.color.apply();
            tracing::debug!(root = %ctx.paths.root.display(), format = ?ctx.format, "starting");
            dispatch(&ctx, command)?
        },
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn dispatch(ctx: &Context, command: Commands) -> Result<String, ScheduleError> {
    match command {
        Commands::Parse { text } => commands::parse(&text, ctx.format),
        Commands::Calendar { month } => commands::calendar(ctx, month),
        Commands::Day { date } => commands::day(ctx, date),
        Commands::Electives(args) => commands::electives(ctx, args.command),
        Commands::Note(args) => commands::note(ctx, args.command),
        Commands::Task(args) => commands::task(ctx, args.command),
    }
}
