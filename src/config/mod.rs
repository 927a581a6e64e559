//! Configuration module for Robots-Audit
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every setting has a default, so running without a file is valid.
//!
//! # Example
//!
//! ```no_run
//! use robots_audit::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robots-audit.toml")).unwrap();
//! println!("Analyzer will use {} workers", config.analyzer.max_workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalyzerConfig, Config, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, DEFAULT_CONFIG_HASH};
pub use validation::validate;
