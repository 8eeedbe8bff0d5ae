// src/location.rs

//! Reading and writing the pattern carried in the page address.
//!
//! The page URL is the only persisted state: the `pattern` query parameter is
//! read once at startup, set when sharing and removed when clearing.

use crate::error::LocationError;
use crate::pattern::{self, Grid};
use log::error;
use url::Url;

/// Default name of the query parameter holding the pattern.
pub const PATTERN_PARAM: &str = "pattern";

fn parse(href: &str) -> Result<Url, LocationError> {
    Url::parse(href).map_err(|source| LocationError::Parse {
        href: href.to_string(),
        source,
    })
}

/// Returns the value of `param` in `href`, if present.
pub fn pattern_param(href: &str, param: &str) -> Result<Option<String>, LocationError> {
    let url = parse(href)?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned()))
}

/// Decodes the grid carried in `href`.
///
/// An unparsable address is logged and yields the default grid, exactly like
/// a missing or malformed parameter.
pub fn initial_grid(href: &str, param: &str) -> Grid {
    match pattern_param(href, param) {
        Ok(candidate) => pattern::decode(candidate.as_deref()),
        Err(e) => {
            error!("URL parsing failed: {}", e);
            Grid::default()
        }
    }
}

/// Rebuilds the query of `url` with `param` set to `value`, or removed when
/// `value` is `None`.
///
/// An existing `param` keeps its position; repeats of it are dropped. A new
/// one goes last.
fn rewrite_query(url: &mut Url, param: &str, value: Option<&str>) {
    let mut pending = value;
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter_map(|(key, old)| {
            if key == param {
                pending.take().map(|new| (key.into_owned(), new.to_string()))
            } else {
                Some((key.into_owned(), old.into_owned()))
            }
        })
        .collect();
    if let Some(new) = pending {
        pairs.push((param.to_string(), new.to_string()));
    }

    if pairs.is_empty() {
        url.set_query(None);
        return;
    }

    let mut query = url.query_pairs_mut();
    query.clear();
    for (key, value) in &pairs {
        query.append_pair(key, value);
    }
}

/// The address to share: `href` with `param` set to `pattern`.
///
/// Other query parameters and the fragment are kept.
pub fn share_url(href: &str, param: &str, pattern: &str) -> Result<Url, LocationError> {
    let mut url = parse(href)?;
    rewrite_query(&mut url, param, Some(pattern));
    Ok(url)
}

/// The address after clearing: `href` with `param` removed.
///
/// When no parameters remain the `?` is dropped as well.
pub fn cleared_url(href: &str, param: &str) -> Result<Url, LocationError> {
    let mut url = parse(href)?;
    rewrite_query(&mut url, param, None);
    Ok(url)
}
