//! What each layout operation built

use crate::file::link::Placement;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Count of files linked versus copied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlacementTally {
    pub linked: usize,
    pub copied: usize,
}

impl PlacementTally {
    pub fn record(&mut self, placement: Placement) {
        match placement {
            Placement::Linked => self.linked += 1,
            Placement::Copied => self.copied += 1,
        }
    }

    pub fn absorb(&mut self, other: PlacementTally) {
        self.linked += other.linked;
        self.copied += other.copied;
    }

    pub fn total(&self) -> usize {
        self.linked + self.copied
    }
}

/// Result of [`merge`](super::merge)
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub base_dir: PathBuf,
    /// Files placed per class, summed over all sources
    pub classes: BTreeMap<String, usize>,
    pub tally: PlacementTally,
}

/// Result of [`kfold_split`](super::kfold_split)
#[derive(Debug, Clone, Serialize)]
pub struct KFoldReport {
    pub base_dir: PathBuf,
    /// Fold directories in index order
    pub folds: Vec<PathBuf>,
    /// Files per fold, per class, in fold order
    pub fold_sizes: BTreeMap<String, Vec<usize>>,
    pub tally: PlacementTally,
}

/// One train/validation pair of a cross-validation layout
#[derive(Debug, Clone, Serialize)]
pub struct FoldPair {
    /// 1-based fold index
    pub index: usize,
    pub train: PathBuf,
    pub validation: PathBuf,
}

/// Result of [`kfold_cv_preprocess`](super::kfold_cv_preprocess)
#[derive(Debug, Clone, Serialize)]
pub struct CrossValidationReport {
    pub base_dir: PathBuf,
    pub pairs: Vec<FoldPair>,
    /// Per-class validation sizes, one entry per fold
    pub fold_sizes: BTreeMap<String, Vec<usize>>,
    pub tally: PlacementTally,
}

/// Files per side for one class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SplitCounts {
    pub train: usize,
    pub validation: usize,
}

/// Result of [`train_test_split`](super::train_test_split)
#[derive(Debug, Clone, Serialize)]
pub struct TrainTestReport {
    pub base_dir: PathBuf,
    pub train_dir: PathBuf,
    pub validation_dir: PathBuf,
    pub classes: BTreeMap<String, SplitCounts>,
    pub tally: PlacementTally,
}
