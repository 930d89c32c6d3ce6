//! Environment configuration module

use std::env;
use std::path::Path;
use std::str::FromStr;

/// Load variables from a dotenv file into the process environment.
///
/// Variables already set in the environment are not overwritten. A missing or
/// unreadable file is not fatal: the process environment is used as is.
/// Returns whether the file was loaded.
pub fn load_config(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Loaded environment file");
            true
        }
        Err(err) if err.not_found() => {
            tracing::debug!(
                path = %path.display(),
                "Environment file not found, using system environment"
            );
            false
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Failed to load environment file, using system environment"
            );
            false
        }
    }
}

/// Get an environment variable, or `fallback` when it is not set
pub fn get_env(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Get an environment variable parsed as `T`, or `fallback` when it is not set
/// or does not parse
pub fn get_env_as<T>(key: &str, fallback: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, value = %raw, error = %err, "Invalid environment value, using fallback");
                fallback
            }
        },
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_config_reads_file() {
        let path = env::temp_dir().join(format!(".env.apperr-test-{}", std::process::id()));
        fs::write(&path, "APPERR_TEST_KEY=TEST_VALUE").unwrap();

        let loaded = load_config(&path);
        let _ = fs::remove_file(&path);

        assert!(loaded);
        assert_eq!(env::var("APPERR_TEST_KEY").unwrap(), "TEST_VALUE");
    }

    #[test]
    fn test_load_config_missing_file_keeps_system_env() {
        env::set_var("APPERR_SYSTEM_KEY", "SYSTEM_VALUE");

        let loaded = load_config("nonexistent.env");

        assert!(!loaded);
        assert_eq!(env::var("APPERR_SYSTEM_KEY").unwrap(), "SYSTEM_VALUE");
        env::remove_var("APPERR_SYSTEM_KEY");
    }

    #[test]
    fn test_get_env_returns_value() {
        env::set_var("APPERR_EXISTING_KEY", "EXISTING_VALUE");
        assert_eq!(get_env("APPERR_EXISTING_KEY", "DEFAULT_VALUE"), "EXISTING_VALUE");
        env::remove_var("APPERR_EXISTING_KEY");
    }

    #[test]
    fn test_get_env_returns_fallback() {
        assert_eq!(get_env("APPERR_NON_EXISTING_KEY", "DEFAULT_VALUE"), "DEFAULT_VALUE");
    }

    #[test]
    fn test_get_env_as_parses_or_falls_back() {
        env::set_var("APPERR_BOOL_KEY", "true");
        env::set_var("APPERR_BAD_PORT", "not-a-port");

        assert!(get_env_as("APPERR_BOOL_KEY", false));
        assert_eq!(get_env_as::<u16>("APPERR_BAD_PORT", 8080), 8080);
        assert_eq!(get_env_as::<u16>("APPERR_MISSING_PORT", 9090), 9090);

        env::remove_var("APPERR_BOOL_KEY");
        env::remove_var("APPERR_BAD_PORT");
    }
}
