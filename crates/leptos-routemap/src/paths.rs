//! Path-string helpers shared by history modes and href rendering.

/// Joins a prefix and a nested path into a single absolute path.
pub fn combine_paths(prefix: &str, nested: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let nested = nested.trim_start_matches('/');

    let prefix_is_root = prefix.is_empty() || prefix == "/";
    let nested_is_root = nested.is_empty() || nested == "/";

    match (prefix_is_root, nested_is_root) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", nested),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}/{}", prefix, nested),
    }
}

/// Canonical form of a base prefix: leading `/`, no trailing `/`.
///
/// The root base is `/`.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Splits a URL at the first `#`, returning the part before it and the
/// fragment, if any.
pub fn split_fragment(url: &str) -> (&str, Option<&str>) {
    match url.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (url, None),
    }
}

/// Ensures a route path is absolute, treating the empty string as the root.
pub fn ensure_absolute(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_handles_root_on_either_side() {
        assert_eq!(combine_paths("/", "/"), "/");
        assert_eq!(combine_paths("/", "/about"), "/about");
        assert_eq!(combine_paths("/console", "/"), "/console");
        assert_eq!(combine_paths("/console", "/about"), "/console/about");
    }

    #[test]
    fn combine_is_slash_insensitive() {
        assert_eq!(combine_paths("/console/", "about"), "/console/about");
        assert_eq!(combine_paths("", "about"), "/about");
    }

    #[test]
    fn base_is_normalized() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("console"), "/console");
        assert_eq!(normalize_base("/console/"), "/console");
    }

    #[test]
    fn fragment_splitting() {
        assert_eq!(split_fragment("/app#/about"), ("/app", Some("/about")));
        assert_eq!(split_fragment("/app"), ("/app", None));
        assert_eq!(split_fragment("/app#"), ("/app", Some("")));
    }

    #[test]
    fn paths_are_made_absolute() {
        assert_eq!(ensure_absolute(""), "/");
        assert_eq!(ensure_absolute("about"), "/about");
        assert_eq!(ensure_absolute("/about"), "/about");
    }
}
