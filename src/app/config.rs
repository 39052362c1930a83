use crate::dataset::options::{
    CrossValidationOptions, KFoldOptions, MergeOptions, TrainTestOptions,
};
use crate::file::link::PlaceOptions;
use crate::file::naming::DEFAULT_SEPARATOR;
use crate::util::name_pattern::NamePattern;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration (saved to <config_dir>/settings.toml)
///
/// Every section falls back to its defaults, so a file only needs the keys
/// it wants to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub merge: MergeConfig,
    #[serde(default)]
    pub kfold: KFoldConfig,
    #[serde(default)]
    pub cross_validation: CrossValidationConfig,
    #[serde(default)]
    pub train_test: TrainTestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Always copy instead of symlinking
    #[serde(default)]
    pub copy: bool,
    /// Per-file console lines (0 = silent)
    #[serde(default = "default_verbosity")]
    pub verbosity: u8,
    /// Shuffle seed; unset means a fresh random order every run
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_verbosity() -> u8 {
    1
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            copy: false,
            verbosity: default_verbosity(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KFoldConfig {
    #[serde(default = "default_n_splits")]
    pub n_splits: usize,
    #[serde(default = "default_fold_pattern")]
    pub fold_pattern: NamePattern,
}

fn default_n_splits() -> usize {
    5
}

fn default_fold_pattern() -> NamePattern {
    NamePattern::zero_padded("fold_", 2)
}

impl Default for KFoldConfig {
    fn default() -> Self {
        Self {
            n_splits: default_n_splits(),
            fold_pattern: default_fold_pattern(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossValidationConfig {
    #[serde(default = "default_n_splits")]
    pub n_splits: usize,
    #[serde(default = "default_train_pattern")]
    pub train_pattern: NamePattern,
    #[serde(default = "default_validation_pattern")]
    pub validation_pattern: NamePattern,
}

fn default_train_pattern() -> NamePattern {
    NamePattern::zero_padded("train_", 2)
}

fn default_validation_pattern() -> NamePattern {
    NamePattern::zero_padded("validation_", 2)
}

impl Default for CrossValidationConfig {
    fn default() -> Self {
        Self {
            n_splits: default_n_splits(),
            train_pattern: default_train_pattern(),
            validation_pattern: default_validation_pattern(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainTestConfig {
    #[serde(default = "default_train_ratio")]
    pub train_ratio: f64,
    #[serde(default = "default_train_name")]
    pub train_name: String,
    #[serde(default = "default_validation_name")]
    pub validation_name: String,
}

fn default_train_ratio() -> f64 {
    0.8
}

fn default_train_name() -> String {
    "train".to_string()
}

fn default_validation_name() -> String {
    "validation".to_string()
}

impl Default for TrainTestConfig {
    fn default() -> Self {
        Self {
            train_ratio: default_train_ratio(),
            train_name: default_train_name(),
            validation_name: default_validation_name(),
        }
    }
}

impl Config {
    /// Load configuration from the resolved config directory.
    ///
    /// A missing directory or file yields defaults.
    pub fn load() -> anyhow::Result<Self> {
        match crate::util::paths::get_app_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate configuration from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        if !path.exists() {
            tracing::info!("Config not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .context(format!("Failed to parse {:?}", path))?;

        if let Err(errors) = crate::app::settings::validate_config(&config) {
            return Err(anyhow::anyhow!(
                "Invalid config {:?}: {}",
                path,
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Render as TOML (used by `show-config`)
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn place_options(&self) -> PlaceOptions {
        PlaceOptions::new(self.general.copy, self.general.verbosity)
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            base_dir: None,
            separator: self.merge.separator.clone(),
            place: self.place_options(),
        }
    }

    pub fn kfold_options(&self) -> KFoldOptions {
        KFoldOptions {
            n_splits: self.kfold.n_splits,
            base_dir: None,
            fold_pattern: self.kfold.fold_pattern.clone(),
            place: self.place_options(),
        }
    }

    pub fn cross_validation_options(&self) -> CrossValidationOptions {
        CrossValidationOptions {
            n_splits: self.cross_validation.n_splits,
            base_dir: None,
            train_pattern: self.cross_validation.train_pattern.clone(),
            validation_pattern: self.cross_validation.validation_pattern.clone(),
            place: self.place_options(),
        }
    }

    pub fn train_test_options(&self) -> TrainTestOptions {
        TrainTestOptions {
            train_ratio: self.train_test.train_ratio,
            base_dir: None,
            train_name: self.train_test.train_name.clone(),
            validation_name: self.train_test.validation_name.clone(),
            place: self.place_options(),
        }
    }
}
