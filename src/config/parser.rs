use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Hash recorded for analyses run without a configuration file
pub const DEFAULT_CONFIG_HASH: &str = "default";

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use robots_audit::config::load_config;
///
/// let config = load_config(Path::new("robots-audit.toml")).unwrap();
/// println!("Timeout: {}s", config.analyzer.timeout_secs);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Saved analyses record this hash so results can be traced back to the
/// settings that produced them.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::GOOGLE_AGENTS;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[analyzer]
max-workers = 10
timeout-secs = 5
max-batch-size = 50
user-agent = "AuditBot/2.0"
google-agents = ["Googlebot", "AdsBot-Google"]

[output]
database-path = "./test.db"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.analyzer.max_workers, 10);
        assert_eq!(config.analyzer.timeout_secs, 5);
        assert_eq!(config.analyzer.max_batch_size, 50);
        assert_eq!(config.analyzer.user_agent, "AuditBot/2.0");
        assert_eq!(config.analyzer.google_agents, vec!["Googlebot", "AdsBot-Google"]);
        assert_eq!(config.output.database_path, "./test.db");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.analyzer.max_workers, 25);
        assert_eq!(config.analyzer.timeout_secs, 15);
        assert_eq!(config.analyzer.max_batch_size, 200);
        assert_eq!(config.analyzer.google_agents.len(), GOOGLE_AGENTS.len());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let file = create_temp_config("[analyzer]\nmax-workers = 5\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.analyzer.max_workers, 5);
        assert_eq!(config.analyzer.timeout_secs, 15);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/robots-audit.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[analyzer]\nmax-workers = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_load_config_with_hash() {
        let file = create_temp_config("[output]\ndatabase-path = \"x.db\"\n");
        let (config, hash) = load_config_with_hash(file.path()).unwrap();
        assert_eq!(config.output.database_path, "x.db");
        assert_eq!(hash.len(), 64);
    }
}
