use crate::UrlError;
use url::Url;

/// Schemes accepted as already present on user input
const KNOWN_SCHEME_PREFIXES: &[&str] = &["http://", "https://"];

/// Normalizes user input into a site base URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prepend `http://` unless the input already starts with `http://` or
///    `https://` (compared case-insensitively)
/// 3. Parse the URL; reject if malformed or host-less
/// 4. Keep only `scheme://host[:port]`, dropping path, query and fragment
///
/// Host resolvability is not checked. The url crate lowercases the host and
/// drops default ports while parsing.
///
/// # Arguments
///
/// * `input` - The raw URL string entered by the user
///
/// # Returns
///
/// * `Ok(String)` - The base URL, without a trailing slash
/// * `Err(UrlError)` - The input could not be parsed into scheme and host
///
/// # Examples
///
/// ```
/// use robots_audit::url::normalize_base_url;
///
/// let base = normalize_base_url("Example.com/some/page?q=1#top").unwrap();
/// assert_eq!(base, "http://example.com");
/// ```
pub fn normalize_base_url(input: &str) -> Result<String, UrlError> {
    let trimmed = input.trim();

    let candidate = if has_known_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    // http and https always have a tuple origin
    Ok(url.origin().ascii_serialization())
}

/// Resolves the robots.txt location for a base URL
///
/// Uses URL-join semantics, so a trailing slash on the base is not doubled.
///
/// # Examples
///
/// ```
/// use robots_audit::url::robots_txt_url;
///
/// let robots = robots_txt_url("https://example.com/").unwrap();
/// assert_eq!(robots, "https://example.com/robots.txt");
/// ```
pub fn robots_txt_url(base_url: &str) -> Result<String, UrlError> {
    let base = Url::parse(base_url).map_err(|e| UrlError::Parse(e.to_string()))?;
    let robots = base
        .join("/robots.txt")
        .map_err(|e| UrlError::Parse(e.to_string()))?;
    Ok(robots.into())
}

fn has_known_scheme(input: &str) -> bool {
    KNOWN_SCHEME_PREFIXES.iter().any(|prefix| {
        input
            .get(..prefix.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
    })
}
