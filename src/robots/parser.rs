//! Robots-exclusion evaluation
//!
//! This module answers "may this agent fetch this URL?" using the robotstxt
//! crate, which implements Google's matching rules (wildcards, Allow
//! precedence, longest match).

use robotstxt::DefaultMatcher;

/// Parsed robots.txt data
///
/// A thin wrapper around the robotstxt crate's matcher.
#[derive(Debug, Clone)]
pub struct ParsedRobots {
    /// Raw robots.txt content
    content: String,
}

impl ParsedRobots {
    /// Creates a new ParsedRobots from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Checks if a URL is allowed for the given user agent
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to check, either absolute or a path such as "/"
    /// * `user_agent` - The user agent token
    ///
    /// # Returns
    ///
    /// * `true` - If the URL is allowed
    /// * `false` - If the URL is disallowed
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.content.trim().is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}
