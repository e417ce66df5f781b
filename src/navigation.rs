//! Address handling for the URL field and engine navigation events.

/// Turns the URL field's text into an address to load.
///
/// Returns `None` for blank input. Anything that does not already start
/// with `http://` or `https://` gets an `http://` prefix, so
/// `example.com` loads `http://example.com`.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_web_url(trimmed) {
        return Some(trimmed.to_string());
    }
    Some(format!("http://{}", trimmed))
}

/// True for `http://` and `https://` addresses.
pub fn is_web_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Host part of a web address, used as a tab label until the page reports
/// its own title.
pub fn title_from_url(url: &str) -> String {
    let host = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("");
    if host.is_empty() {
        url.to_string()
    } else {
        host.to_string()
    }
}
