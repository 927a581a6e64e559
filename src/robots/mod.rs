//! Robots.txt analysis module
//!
//! This module holds the Google agent set, the robots-exclusion evaluator and
//! the block scanner that extracts Google-specific disallow rules.

mod agents;
mod extractor;
mod parser;

pub use agents::{default_google_agents, GOOGLE_AGENTS};
pub use extractor::{extract_google_rules, is_significant, DisallowRule, RuleExtraction};
pub use parser::ParsedRobots;
