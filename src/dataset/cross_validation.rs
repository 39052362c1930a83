use super::kfold::kfold_split;
use super::merge::merge;
use super::options::{CrossValidationOptions, KFoldOptions, MergeOptions};
use super::report::{CrossValidationReport, FoldPair};
use crate::error::{LayoutError, LayoutResult};
use crate::file::naming::{resolve_base_dir, DEFAULT_BASENAME};
use crate::transaction::Transaction;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Builds `n_splits` train/validation pairs for k-fold cross-validation.
///
/// First the validation folds are produced by [`kfold_split`] under the base
/// directory. Then `train_i` is the [`merge`] of every validation fold except
/// `validation_i`. Both phases share `tx`, so a failure in the merge phase
/// also removes the validation folds.
pub fn kfold_cv_preprocess<R: Rng + ?Sized>(
    tx: &mut Transaction,
    original_dir: &Path,
    options: &CrossValidationOptions,
    rng: &mut R,
) -> LayoutResult<CrossValidationReport> {
    tx.guard(|tx| {
        if options.n_splits < 2 {
            return Err(LayoutError::invalid(
                "cross-validation needs n_splits of at least 2",
            ));
        }

        let base_dir = resolve_base_dir(original_dir, options.base_dir.as_deref(), DEFAULT_BASENAME);

        let kfold_options = KFoldOptions {
            n_splits: options.n_splits,
            base_dir: Some(base_dir.clone()),
            fold_pattern: options.validation_pattern.clone(),
            place: options.place,
        };
        let validation = kfold_split(tx, original_dir, &kfold_options, rng)?;
        let mut tally = validation.tally;

        let mut pairs = Vec::with_capacity(options.n_splits);
        for (i, validation_dir) in validation.folds.iter().enumerate() {
            let index = i + 1;
            let others: Vec<&PathBuf> = validation
                .folds
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, fold)| fold)
                .collect();

            let train_dir = base_dir.join(options.train_pattern.format(index));
            let merge_options = MergeOptions {
                base_dir: Some(train_dir.clone()),
                place: options.place,
                ..MergeOptions::default()
            };
            let merged = merge(tx, &others, &merge_options)?;
            tally.absorb(merged.tally);

            pairs.push(FoldPair {
                index,
                train: train_dir,
                validation: validation_dir.clone(),
            });
        }

        tracing::info!(
            "Built {} cross-validation pairs at {:?}",
            pairs.len(),
            base_dir
        );

        Ok(CrossValidationReport {
            base_dir,
            pairs,
            fold_sizes: validation.fold_sizes,
            tally,
        })
    })
}
