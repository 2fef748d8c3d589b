//! Main entry point for the skelanim CLI

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set verbosity
    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if cli.quiet {
        log::set_max_level(log::LevelFilter::Error);
    }

    // Execute command
    match cli.command {
        Commands::Info { file, detailed } => commands::info::execute(&file, detailed),
        Commands::Sample {
            file,
            clip,
            time,
            full,
            format,
        } => commands::pose::sample(&file, clip, time, full, format),
        Commands::Blend {
            file,
            from,
            to,
            factor,
            time,
            end_time,
            format,
        } => commands::pose::blend(&file, from, to, factor, time, end_time.unwrap_or(time), format),
        Commands::Sweep { file, clip, frames } => commands::pose::sweep(&file, clip, frames),
    }
}
