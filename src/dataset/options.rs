use crate::file::link::PlaceOptions;
use crate::file::naming::DEFAULT_SEPARATOR;
use crate::util::name_pattern::NamePattern;
use std::path::PathBuf;

/// Options for [`merge`](super::merge)
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Output root; defaults to a sibling of the first source named after all sources
    pub base_dir: Option<PathBuf>,
    /// Joins source basenames when `base_dir` is not given
    pub separator: String,
    pub place: PlaceOptions,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            base_dir: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            place: PlaceOptions::new(false, 1),
        }
    }
}

/// Options for [`kfold_split`](super::kfold_split)
#[derive(Debug, Clone)]
pub struct KFoldOptions {
    pub n_splits: usize,
    pub base_dir: Option<PathBuf>,
    /// Fold directory names, expanded with 1-based indices
    pub fold_pattern: NamePattern,
    pub place: PlaceOptions,
}

impl Default for KFoldOptions {
    fn default() -> Self {
        Self {
            n_splits: 5,
            base_dir: None,
            fold_pattern: NamePattern::zero_padded("fold_", 2),
            place: PlaceOptions::new(false, 1),
        }
    }
}

/// Options for [`kfold_cv_preprocess`](super::kfold_cv_preprocess)
#[derive(Debug, Clone)]
pub struct CrossValidationOptions {
    pub n_splits: usize,
    pub base_dir: Option<PathBuf>,
    pub train_pattern: NamePattern,
    pub validation_pattern: NamePattern,
    pub place: PlaceOptions,
}

impl Default for CrossValidationOptions {
    fn default() -> Self {
        Self {
            n_splits: 5,
            base_dir: None,
            train_pattern: NamePattern::zero_padded("train_", 2),
            validation_pattern: NamePattern::zero_padded("validation_", 2),
            place: PlaceOptions::new(false, 1),
        }
    }
}

/// Options for [`train_test_split`](super::train_test_split)
#[derive(Debug, Clone)]
pub struct TrainTestOptions {
    /// Share of each class routed to the train side, in `[0, 1]`
    pub train_ratio: f64,
    pub base_dir: Option<PathBuf>,
    pub train_name: String,
    pub validation_name: String,
    pub place: PlaceOptions,
}

impl Default for TrainTestOptions {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            base_dir: None,
            train_name: "train".to_string(),
            validation_name: "validation".to_string(),
            place: PlaceOptions::new(false, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let kfold = KFoldOptions::default();
        assert_eq!(kfold.n_splits, 5);
        assert_eq!(kfold.fold_pattern.format(1), "fold_01");
        assert!(!kfold.place.copy);
        assert_eq!(kfold.place.verbosity, 1);

        let cv = CrossValidationOptions::default();
        assert_eq!(cv.train_pattern.as_str(), "train_{:02}");
        assert_eq!(cv.validation_pattern.format(3), "validation_03");

        let split = TrainTestOptions::default();
        assert!((split.train_ratio - 0.8).abs() < f64::EPSILON);
        assert_eq!(split.train_name, "train");
        assert_eq!(split.validation_name, "validation");

        assert_eq!(MergeOptions::default().separator, "-");
    }
}
