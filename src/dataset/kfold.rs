use super::options::KFoldOptions;
use super::partition::round_robin;
use super::report::{KFoldReport, PlacementTally};
use crate::error::{LayoutError, LayoutResult};
use crate::file::link::place;
use crate::file::listing::{list_classes, list_files};
use crate::file::naming::{resolve_base_dir, DEFAULT_BASENAME};
use crate::transaction::Transaction;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Partitions every class of `original_dir` into `n_splits` disjoint folds.
///
/// Layout: `<base>/<fold_pattern(i)>/<class>/<file>` for `i` in `1..=n_splits`.
/// Each class is shuffled independently and dealt round-robin, so fold sizes
/// within a class differ by at most one.
pub fn kfold_split<R: Rng + ?Sized>(
    tx: &mut Transaction,
    original_dir: &Path,
    options: &KFoldOptions,
    rng: &mut R,
) -> LayoutResult<KFoldReport> {
    tx.guard(|tx| {
        let n_splits = options.n_splits;
        if n_splits == 0 {
            return Err(LayoutError::invalid("n_splits must be at least 1"));
        }

        let base_dir = resolve_base_dir(original_dir, options.base_dir.as_deref(), DEFAULT_BASENAME);
        tx.create_dir(&base_dir)?;

        let classes = list_classes(original_dir)?;

        let folds: Vec<PathBuf> = (1..=n_splits)
            .map(|i| base_dir.join(options.fold_pattern.format(i)))
            .collect();
        for fold in &folds {
            tx.create_dir(fold)?;
        }

        let mut fold_sizes = BTreeMap::new();
        let mut tally = PlacementTally::default();

        for class in &classes {
            let src_class_dir = original_dir.join(class);
            let mut files = list_files(&src_class_dir)?;
            files.shuffle(rng);

            let shards = round_robin(&files, n_splits);
            let mut sizes = Vec::with_capacity(n_splits);
            for (fold, shard) in folds.iter().zip(&shards) {
                let dst_class_dir = fold.join(class);
                tx.create_dir(&dst_class_dir)?;
                for file in shard {
                    let placement = place(
                        &src_class_dir.join(file),
                        &dst_class_dir.join(file),
                        options.place,
                    )?;
                    tally.record(placement);
                }
                sizes.push(shard.len());
            }
            tracing::debug!("Class {:?} fold sizes: {:?}", class, sizes);
            fold_sizes.insert(class.to_string_lossy().into_owned(), sizes);
        }

        tracing::info!(
            "Split {:?} into {} folds at {:?} ({} files)",
            original_dir,
            n_splits,
            base_dir,
            tally.total()
        );

        Ok(KFoldReport {
            base_dir,
            folds,
            fold_sizes,
            tally,
        })
    })
}
