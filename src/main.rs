use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use lomodoro::cli::args::{Cli, Commands};
use lomodoro::cli::commands;
use lomodoro::config::{ColorSetting, Config};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let output = match cli.command {
        Commands::Start(args) => commands::start(&config, args)?,
        Commands::History { limit, phase } => {
            commands::history(limit, phase.as_deref(), format)?
        }
        Commands::Report { period } => commands::report(&period, format)?,
        Commands::Media(args) => commands::media(&config, args.command, format)?,
        Commands::Theme(args) => commands::theme(&config, args.command, format)?,
        Commands::Config(args) => commands::config(&config, args.command, format)?,
        Commands::Clear { force } => commands::clear(force, format)?,
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
