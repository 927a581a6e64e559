use crate::config::types::{AnalyzerConfig, Config, OutputConfig};
use crate::ConfigError;

const MAX_WORKERS: usize = 256;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_analyzer_config(&config.analyzer)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates analyzer configuration
fn validate_analyzer_config(config: &AnalyzerConfig) -> Result<(), ConfigError> {
    if config.max_workers < 1 || config.max_workers > MAX_WORKERS {
        return Err(ConfigError::Validation(format!(
            "max_workers must be between 1 and {}, got {}",
            MAX_WORKERS, config.max_workers
        )));
    }

    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.max_batch_size < 1 {
        return Err(ConfigError::Validation(format!(
            "max_batch_size must be >= 1, got {}",
            config.max_batch_size
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    validate_google_agents(&config.google_agents)?;

    Ok(())
}

/// Validates the Google agent list
fn validate_google_agents(agents: &[String]) -> Result<(), ConfigError> {
    if agents.is_empty() {
        return Err(ConfigError::Validation(
            "google_agents must list at least one agent".to_string(),
        ));
    }

    for agent in agents {
        if agent.is_empty() {
            return Err(ConfigError::Validation(
                "google_agents entries cannot be empty".to_string(),
            ));
        }

        // Same character set robots.txt product tokens use
        if !agent
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::Validation(format!(
                "google agent '{}' must contain only letters, digits, '-' or '_'",
                agent
            )));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
