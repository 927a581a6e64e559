//! Google agent rule extraction
//!
//! Scans robots.txt content for `User-agent` blocks naming a Google crawler
//! and collects the disallow patterns inside them. The robots-exclusion
//! evaluator is consulted separately for each agent so that rules the block
//! scan does not interpret (wildcard groups, Allow precedence) still mark the
//! site as disallowed.

use crate::robots::ParsedRobots;
use serde::{Deserialize, Serialize};

/// A disallow pattern found in a block for one Google agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisallowRule {
    /// The Google agent name, as spelled in the agent list
    pub agent: String,

    /// The disallow path pattern
    pub rule: String,
}

/// Outcome of rule extraction for one robots.txt file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleExtraction {
    /// True if any Google agent is blocked from the root or has a significant rule
    pub google_disallowed: bool,

    /// Significant rules in agent-list order, then document order
    pub disallow_rules: Vec<DisallowRule>,
}

/// A single robots.txt line, reduced to what extraction needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive<'a> {
    UserAgent(&'a str),
    Disallow(&'a str),
    Other,
}

/// Extracts Google-specific disallow information from robots.txt content
///
/// For every agent in `agents` (matched case-insensitively):
///
/// 1. The evaluator is asked whether the agent may fetch `base_url`; a
///    negative answer sets `google_disallowed`.
/// 2. Every `Disallow` line inside one of the agent's blocks contributes a
///    [`DisallowRule`] when its pattern is significant (non-empty and not a
///    bare `/`), also setting `google_disallowed`.
///
/// A block starts after a `User-agent` line naming the agent and ends at the
/// next `User-agent` line naming the same agent, or at end of file.
/// Declarations for other agents do not end it. Identical rules found under
/// repeated declarations are all kept.
///
/// # Arguments
///
/// * `content` - Raw robots.txt text
/// * `base_url` - The site base URL whose root is evaluated
/// * `agents` - Google agent names to look for
pub fn extract_google_rules<S: AsRef<str>>(
    content: &str,
    base_url: &str,
    agents: &[S],
) -> RuleExtraction {
    let robots = ParsedRobots::from_content(content);
    let directives = tokenize(content);
    let mut extraction = RuleExtraction::default();

    for agent in agents {
        let agent = agent.as_ref();

        if !robots.is_allowed(base_url, agent) {
            tracing::debug!("{} may not fetch {}", agent, base_url);
            extraction.google_disallowed = true;
        }

        for pattern in block_disallow_patterns(&directives, agent) {
            extraction.disallow_rules.push(DisallowRule {
                agent: agent.to_string(),
                rule: pattern.to_string(),
            });
            extraction.google_disallowed = true;
        }
    }

    extraction
}

/// Returns true if a disallow pattern counts as a real restriction
///
/// Empty values and a bare `/` are not reported as rules. A bare `/` still
/// blocks the root, which the evaluator reports on its own.
pub fn is_significant(pattern: &str) -> bool {
    !pattern.is_empty() && pattern != "/"
}

/// Reduces robots.txt content to user-agent and disallow directives
fn tokenize(content: &str) -> Vec<Directive<'_>> {
    content
        .lines()
        .map(|line| {
            // Everything after '#' is a comment
            let line = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };

            match line.split_once(':') {
                Some((key, value)) => {
                    let key = key.trim();
                    let value = value.trim();
                    if key.eq_ignore_ascii_case("user-agent") {
                        Directive::UserAgent(value)
                    } else if key.eq_ignore_ascii_case("disallow") {
                        Directive::Disallow(value)
                    } else {
                        Directive::Other
                    }
                }
                None => Directive::Other,
            }
        })
        .collect()
}

/// Collects significant disallow patterns from every block of one agent
fn block_disallow_patterns<'a>(directives: &[Directive<'a>], agent: &str) -> Vec<&'a str> {
    let mut in_block = false;
    let mut patterns = Vec::new();

    for directive in directives {
        match *directive {
            Directive::UserAgent(name) if name.eq_ignore_ascii_case(agent) => {
                in_block = true;
            }
            Directive::Disallow(pattern) if in_block && is_significant(pattern) => {
                patterns.push(pattern);
            }
            _ => {}
        }
    }

    patterns
}
