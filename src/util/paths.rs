use std::path::PathBuf;
use std::sync::RwLock;

/// Environment variable consulted after the `--config` override
pub const CONFIG_DIR_ENV: &str = "CLASSDIR_CONFIG_DIR";

/// File name of the settings file inside the config directory
pub const SETTINGS_FILE: &str = "settings.toml";

// Global config directory override (for --config flag and tests)
static CONFIG_DIR_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Set config directory override (used by --config flag and tests)
pub fn set_config_dir_override(path: Option<PathBuf>) {
    let mut override_path = CONFIG_DIR_OVERRIDE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *override_path = path;
}

/// Get current config directory override
pub fn get_config_dir_override() -> Option<PathBuf> {
    CONFIG_DIR_OVERRIDE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Find config directory by searching in priority order:
/// 1. Override from --config flag or set_config_dir_override() (highest priority)
/// 2. Environment variable CLASSDIR_CONFIG_DIR
/// 3. User config directory (`~/.config/classdir/` on Unix, `%APPDATA%\classdir\` on Windows)
///
/// Unlike layout operations this never creates anything; a directory that
/// does not exist simply yields no settings file.
pub fn find_config_directory() -> Option<PathBuf> {
    if let Some(override_path) = get_config_dir_override() {
        tracing::debug!("Using config directory override: {:?}", override_path);
        return Some(override_path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_DIR_ENV) {
        if !env_path.is_empty() {
            tracing::debug!("Using config directory from {}: {:?}", CONFIG_DIR_ENV, env_path);
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|base| base.join("classdir"))
}

/// Get absolute path to settings.toml
pub fn get_app_config_path() -> Option<PathBuf> {
    find_config_directory().map(|dir| dir.join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    // Helper function to ensure clean test state
    fn reset_test_state() {
        set_config_dir_override(None);
        unsafe { std::env::remove_var(CONFIG_DIR_ENV) };
    }

    #[test]
    #[serial]
    fn test_override_wins() {
        reset_test_state();
        let temp_dir = TempDir::new().unwrap();
        unsafe { std::env::set_var(CONFIG_DIR_ENV, "/somewhere/else") };
        set_config_dir_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(
            get_app_config_path(),
            Some(temp_dir.path().join(SETTINGS_FILE))
        );
        reset_test_state();
    }

    #[test]
    #[serial]
    fn test_env_var_used_without_override() {
        reset_test_state();
        unsafe { std::env::set_var(CONFIG_DIR_ENV, "/etc/classdir-test") };

        assert_eq!(
            find_config_directory(),
            Some(PathBuf::from("/etc/classdir-test"))
        );
        reset_test_state();
    }

    #[test]
    #[serial]
    fn test_override_roundtrip() {
        reset_test_state();
        let path = PathBuf::from("/tmp/classdir-config");
        set_config_dir_override(Some(path.clone()));
        assert_eq!(get_config_dir_override(), Some(path));
        set_config_dir_override(None);
        assert_eq!(get_config_dir_override(), None);
    }

    #[test]
    #[serial]
    fn test_lookup_does_not_create_directory() {
        reset_test_state();
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("not-there");
        set_config_dir_override(Some(missing.clone()));

        assert_eq!(find_config_directory(), Some(missing.clone()));
        assert!(!missing.exists());
        reset_test_state();
    }
}
