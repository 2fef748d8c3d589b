//! Root CLI structure for skelanim

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skelanim")]
#[command(about = "Inspect and sample skeletal animation rigs", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// How bone matrices are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block of rows per bone
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display bones, nodes and clips of a rig document
    Info {
        /// Path to the rig JSON file
        file: PathBuf,

        /// List every node and bone
        #[arg(short, long)]
        detailed: bool,
    },

    /// Evaluate one clip at a point in time
    Sample {
        /// Path to the rig JSON file
        file: PathBuf,

        /// Clip index
        #[arg(short, long, default_value = "0")]
        clip: usize,

        /// Time in seconds
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        time: f32,

        /// Visit every node instead of only bone ancestors
        #[arg(long)]
        full: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Evaluate a blend of two clips
    Blend {
        /// Path to the rig JSON file
        file: PathBuf,

        /// Start clip index
        #[arg(long)]
        from: usize,

        /// End clip index
        #[arg(long)]
        to: usize,

        /// Blend factor in [0, 1]
        #[arg(long)]
        factor: f32,

        /// Time in seconds for the start clip
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        time: f32,

        /// Time in seconds for the end clip (defaults to --time)
        #[arg(long, allow_hyphen_values = true)]
        end_time: Option<f32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Evaluate evenly spaced frames across one loop of a clip
    Sweep {
        /// Path to the rig JSON file
        file: PathBuf,

        /// Clip index
        #[arg(short, long, default_value = "0")]
        clip: usize,

        /// Number of frames
        #[arg(short = 'n', long, default_value = "8")]
        frames: usize,
    },
}
