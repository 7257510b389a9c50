//! History-mode strategies: how route paths map onto browser URLs.

use crate::paths::{combine_paths, ensure_absolute, normalize_base, split_fragment};

/// Strategy a router uses to reflect navigation in the URL bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryMode {
    /// Real pathnames under a base prefix, driven by the history API.
    Browser { base: String },
    /// Route paths carried in the `#` fragment; the page URL itself stays
    /// at the base.
    Hash { base: String },
}

impl HistoryMode {
    pub fn browser(base: &str) -> Self {
        Self::Browser {
            base: normalize_base(base),
        }
    }

    pub fn hash(base: &str) -> Self {
        Self::Hash {
            base: normalize_base(base),
        }
    }

    /// The normalized base prefix.
    pub fn base(&self) -> &str {
        match self {
            Self::Browser { base } | Self::Hash { base } => base,
        }
    }

    /// Renders a route path as an application URL.
    pub fn href(&self, path: &str) -> String {
        let path = ensure_absolute(path);
        match self {
            Self::Browser { base } => combine_paths(base, &path),
            Self::Hash { base } => format!("{}#{}", base, path),
        }
    }

    /// Extracts the route path from an application URL.
    ///
    /// In browser mode the base prefix is stripped from the pathname; a URL
    /// outside the base is returned unchanged. In hash mode the route lives
    /// in the fragment, defaulting to `/` when absent.
    pub fn strip(&self, url: &str) -> String {
        match self {
            Self::Browser { base } => {
                let (path, _) = split_fragment(url);
                strip_base(base, path)
            }
            Self::Hash { base: _ } => match split_fragment(url).1 {
                Some(fragment) => ensure_absolute(fragment),
                None => "/".to_string(),
            },
        }
    }
}

fn strip_base(base: &str, path: &str) -> String {
    if base == "/" {
        return ensure_absolute(path);
    }
    match path.strip_prefix(base) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        // Either no base prefix or a false boundary ("/console" vs
        // "/consoles"): leave the path alone.
        _ => ensure_absolute(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_href_applies_base() {
        let mode = HistoryMode::browser("/");
        assert_eq!(mode.href("/about"), "/about");
        let mode = HistoryMode::browser("/console/");
        assert_eq!(mode.href("/about"), "/console/about");
        assert_eq!(mode.href("/"), "/console");
    }

    #[test]
    fn browser_strip_inverts_href() {
        let mode = HistoryMode::browser("/console");
        for path in ["/", "/about", "/dashboard"] {
            assert_eq!(mode.strip(&mode.href(path)), path);
        }
    }

    #[test]
    fn browser_strip_leaves_foreign_paths_alone() {
        let mode = HistoryMode::browser("/console");
        assert_eq!(mode.strip("/consoles/about"), "/consoles/about");
        assert_eq!(mode.strip("/other"), "/other");
    }

    #[test]
    fn hash_href_puts_route_in_fragment() {
        let mode = HistoryMode::hash("/");
        assert_eq!(mode.href("/about"), "/#/about");
        let mode = HistoryMode::hash("/console");
        assert_eq!(mode.href("/about"), "/console#/about");
    }

    #[test]
    fn hash_strip_reads_fragment_only() {
        let mode = HistoryMode::hash("/");
        assert_eq!(mode.strip("/#/about"), "/about");
        assert_eq!(mode.strip("/console#/dashboard"), "/dashboard");
        assert_eq!(mode.strip("/console"), "/");
    }

    #[test]
    fn hash_round_trips() {
        let mode = HistoryMode::hash("/console");
        for path in ["/", "/about", "/query/42"] {
            assert_eq!(mode.strip(&mode.href(path)), path);
        }
    }
}
