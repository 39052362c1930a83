use super::error;
use super::output;
use super::{Commands, PlacementArgs};
use crate::app::config::Config;
use crate::dataset::{
    kfold_cv_preprocess, kfold_split, merge, rng_from_seed, train_test_split,
};
use crate::file::link::PlaceOptions;
use crate::transaction::Transaction;
use crate::util::name_pattern::NamePattern;
use anyhow::Result;
use serde::Serialize;

/// Handle a CLI command and return exit code
///
/// Owns the single top-level transaction of this invocation: it commits
/// after the command succeeds, and any error leaves it rolled back before
/// the exit code is returned.
pub fn handle_command(command: Commands, config: &Config) -> i32 {
    let mut tx = Transaction::new();

    match run(command, config, &mut tx) {
        Ok(()) => {
            tx.commit();
            error::SUCCESS
        }
        Err(e) => {
            // Operation guards already rolled back; this covers handler-level failures
            tx.rollback();
            eprintln!("Error: {:#}", e);
            error::exit_code(&e)
        }
    }
}

fn run(command: Commands, config: &Config, tx: &mut Transaction) -> Result<()> {
    match command {
        Commands::Merge {
            sources,
            separator,
            placement,
        } => {
            let mut options = config.merge_options();
            if let Some(separator) = separator {
                options.separator = separator;
            }
            options.base_dir = placement.base_dir.clone();
            options.place = place_options(config, &placement);

            let report = merge(tx, &sources, &options)?;
            print_report(&report, placement.json, output::format_merge);
        }

        Commands::Kfold {
            original,
            n_splits,
            fold_pattern,
            seed,
            placement,
        } => {
            let mut options = config.kfold_options();
            if let Some(n_splits) = n_splits {
                options.n_splits = n_splits;
            }
            if let Some(pattern) = fold_pattern {
                options.fold_pattern = NamePattern::parse(&pattern)?;
            }
            options.base_dir = placement.base_dir.clone();
            options.place = place_options(config, &placement);

            let mut rng = rng_from_seed(seed.or(config.general.seed));
            let report = kfold_split(tx, &original, &options, &mut rng)?;
            print_report(&report, placement.json, output::format_kfold);
        }

        Commands::CrossValidate {
            original,
            n_splits,
            train_pattern,
            validation_pattern,
            seed,
            placement,
        } => {
            let mut options = config.cross_validation_options();
            if let Some(n_splits) = n_splits {
                options.n_splits = n_splits;
            }
            if let Some(pattern) = train_pattern {
                options.train_pattern = NamePattern::parse(&pattern)?;
            }
            if let Some(pattern) = validation_pattern {
                options.validation_pattern = NamePattern::parse(&pattern)?;
            }
            options.base_dir = placement.base_dir.clone();
            options.place = place_options(config, &placement);

            let mut rng = rng_from_seed(seed.or(config.general.seed));
            let report = kfold_cv_preprocess(tx, &original, &options, &mut rng)?;
            print_report(&report, placement.json, output::format_cross_validation);
        }

        Commands::Split {
            original,
            train_ratio,
            train_name,
            validation_name,
            seed,
            placement,
        } => {
            let mut options = config.train_test_options();
            if let Some(ratio) = train_ratio {
                options.train_ratio = ratio;
            }
            if let Some(name) = train_name {
                options.train_name = name;
            }
            if let Some(name) = validation_name {
                options.validation_name = name;
            }
            options.base_dir = placement.base_dir.clone();
            options.place = place_options(config, &placement);

            let mut rng = rng_from_seed(seed.or(config.general.seed));
            let report = train_test_split(tx, &original, &options, &mut rng)?;
            print_report(&report, placement.json, output::format_train_test);
        }

        Commands::ShowConfig => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

/// CLI flags override the configured defaults
fn place_options(config: &Config, placement: &PlacementArgs) -> PlaceOptions {
    let mut place = config.place_options();
    if placement.copy {
        place.copy = true;
    }
    if let Some(verbosity) = placement.verbosity {
        place.verbosity = verbosity;
    }
    // Keep JSON output machine-readable
    if placement.json {
        place.verbosity = 0;
    }
    place
}

fn print_report<T: Serialize>(report: &T, json: bool, human: fn(&T) -> String) {
    if json {
        println!("{}", output::format_json(report));
    } else {
        println!("{}", human(report));
    }
}
