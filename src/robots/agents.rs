//! Known Google crawler identifiers

/// User-agent tokens operated by Google, in reporting order
///
/// Rules extracted from a robots.txt file are reported in this order.
pub const GOOGLE_AGENTS: &[&str] = &[
    "Googlebot",
    "Googlebot-Image",
    "Googlebot-Mobile",
    "Googlebot-News",
    "Googlebot-Video",
    "Google",
    "AdsBot-Google",
    "AdsBot-Google-Mobile",
    "APIs-Google",
    "DuplexWeb-Google",
    "FeedFetcher-Google",
    "Google-Read-Aloud",
    "Mediapartners-Google",
    "Storebot-Google",
];

/// Returns the default Google agent list as owned strings
pub fn default_google_agents() -> Vec<String> {
    GOOGLE_AGENTS.iter().map(|agent| agent.to_string()).collect()
}
