pub mod app;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod file;
pub mod transaction;
pub mod util;

pub use app::config::Config;
pub use dataset::{
    kfold_cv_preprocess, kfold_split, merge, rng_from_seed, train_test_split,
    CrossValidationOptions, KFoldOptions, MergeOptions, TrainTestOptions,
};
pub use error::{ErrorKind, LayoutError, LayoutResult};
pub use file::{PlaceOptions, Placement};
pub use transaction::Transaction;
