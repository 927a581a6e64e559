//! URL handling module for Robots-Audit
//!
//! This module turns raw user input into site base URLs, derives the
//! robots.txt location for a site, and reads URL lists.

mod list;
mod normalize;

pub use list::{limit_batch, parse_url_list};
pub use normalize::{normalize_base_url, robots_txt_url};
