use super::config::Config;

/// Validation errors for configuration values
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// k-fold needs at least one fold
    ZeroSplits,
    /// Cross-validation needs at least two folds
    TooFewCrossValidationSplits(usize),
    /// Train ratio outside [0, 1]
    TrainRatioOutOfRange(f64),
    /// Train and validation directories would collide
    DuplicateSplitNames(String),
    /// Directory name is empty or contains a path separator
    InvalidDirectoryName(String),
    /// Train and validation patterns expand to the same names
    DuplicateCrossValidationPatterns(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroSplits => write!(f, "kfold.n_splits must be at least 1"),
            ValidationError::TooFewCrossValidationSplits(n) => write!(
                f,
                "cross_validation.n_splits must be at least 2 (got {})",
                n
            ),
            ValidationError::TrainRatioOutOfRange(ratio) => write!(
                f,
                "train_test.train_ratio must be within [0, 1] (got {})",
                ratio
            ),
            ValidationError::DuplicateSplitNames(name) => write!(
                f,
                "train_test.train_name and validation_name are both '{}'",
                name
            ),
            ValidationError::InvalidDirectoryName(name) => {
                write!(f, "'{}' is not a valid directory name", name)
            }
            ValidationError::DuplicateCrossValidationPatterns(pattern) => write!(
                f,
                "cross_validation train and validation patterns are both '{}'",
                pattern
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// Validate configuration values that serde cannot check on its own
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.kfold.n_splits == 0 {
        errors.push(ValidationError::ZeroSplits);
    }

    let cv = &config.cross_validation;
    if cv.n_splits < 2 {
        errors.push(ValidationError::TooFewCrossValidationSplits(cv.n_splits));
    }
    if cv.train_pattern == cv.validation_pattern {
        errors.push(ValidationError::DuplicateCrossValidationPatterns(
            cv.train_pattern.to_string(),
        ));
    }

    let tt = &config.train_test;
    if !(0.0..=1.0).contains(&tt.train_ratio) {
        errors.push(ValidationError::TrainRatioOutOfRange(tt.train_ratio));
    }
    for name in [&tt.train_name, &tt.validation_name] {
        if !is_plain_name(name) {
            errors.push(ValidationError::InvalidDirectoryName(name.clone()));
        }
    }
    if tt.train_name == tt.validation_name {
        errors.push(ValidationError::DuplicateSplitNames(tt.train_name.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
