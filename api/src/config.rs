use apperr_shared::config::env::get_env_as;

/// Error response configuration options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorConfig {
    /// Log 4xx responses at `warn` instead of `debug`
    pub log_client_errors: bool,
}

impl ErrorConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            log_client_errors: get_env_as("APPERR_LOG_CLIENT_ERRORS", false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quiet() {
        assert!(!ErrorConfig::default().log_client_errors);
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("APPERR_LOG_CLIENT_ERRORS", "true");
        assert!(ErrorConfig::from_env().log_client_errors);
        std::env::remove_var("APPERR_LOG_CLIENT_ERRORS");
    }
}
