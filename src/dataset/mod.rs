//! Dataset layout operations
//!
//! Each operation borrows a [`Transaction`](crate::transaction::Transaction),
//! builds its directory skeleton through it, and places source files as
//! symlinks or copies. A failure anywhere rolls back the transaction before
//! the error is returned. Nothing is committed here; the caller decides when
//! the tree becomes permanent.

pub mod cross_validation;
pub mod kfold;
pub mod merge;
pub mod options;
pub mod partition;
pub mod report;

pub use cross_validation::kfold_cv_preprocess;
pub use kfold::kfold_split;
pub use merge::merge;
pub use options::{CrossValidationOptions, KFoldOptions, MergeOptions, TrainTestOptions};
pub use partition::rng_from_seed;
pub use report::{
    CrossValidationReport, FoldPair, KFoldReport, MergeReport, PlacementTally, SplitCounts,
    TrainTestReport,
};
pub use train_test::train_test_split;
