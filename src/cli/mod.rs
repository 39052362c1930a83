use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod error;
pub mod handler;
pub mod output;

/// classdir - build train/validation and k-fold layouts from class directories
#[derive(Parser, Debug)]
#[command(name = "classdir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override config directory path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (TRACE level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every layout command
#[derive(Args, Debug, Clone, Default)]
pub struct PlacementArgs {
    /// Output root (default: a sibling of the input directory)
    #[arg(long, value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// Copy files instead of creating symbolic links
    #[arg(long)]
    pub copy: bool,

    /// Per-file console output (0 = silent)
    #[arg(long, value_name = "LEVEL")]
    pub verbosity: Option<u8>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge class directories of several datasets into one
    Merge {
        /// Dataset roots; the first one decides which classes exist
        #[arg(required = true, num_args = 1..)]
        sources: Vec<PathBuf>,

        /// Joins source names when no base directory is given
        #[arg(long)]
        separator: Option<String>,

        #[command(flatten)]
        placement: PlacementArgs,
    },

    /// Partition every class into k disjoint folds
    Kfold {
        /// Dataset root with one directory per class
        original: PathBuf,

        /// Number of folds (k)
        #[arg(long, short = 'k')]
        n_splits: Option<usize>,

        /// Fold directory name pattern, e.g. "fold_{:02}"
        #[arg(long)]
        fold_pattern: Option<String>,

        /// Shuffle seed for a reproducible assignment
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        placement: PlacementArgs,
    },

    /// Build k train/validation pairs for cross-validation
    CrossValidate {
        /// Dataset root with one directory per class
        original: PathBuf,

        /// Number of folds (k)
        #[arg(long, short = 'k')]
        n_splits: Option<usize>,

        /// Train directory name pattern, e.g. "train_{:02}"
        #[arg(long)]
        train_pattern: Option<String>,

        /// Validation directory name pattern, e.g. "validation_{:02}"
        #[arg(long)]
        validation_pattern: Option<String>,

        /// Shuffle seed for a reproducible assignment
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        placement: PlacementArgs,
    },

    /// Shuffle every class and split it into train and validation
    Split {
        /// Dataset root with one directory per class
        original: PathBuf,

        /// Share of each class that goes to train
        #[arg(long)]
        train_ratio: Option<f64>,

        /// Train directory name
        #[arg(long)]
        train_name: Option<String>,

        /// Validation directory name
        #[arg(long)]
        validation_name: Option<String>,

        /// Shuffle seed for a reproducible assignment
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        placement: PlacementArgs,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}
