//! Static description of a single route table entry.

/// How a route's view binding is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// A direct component reference, available at mount time.
    Eager,
    /// An async thunk, evaluated when the route is first activated.
    Deferred,
}

/// One entry of a route table: a URL path pattern, a unique symbolic name
/// and the kind of view binding.
///
/// Patterns are `/`-separated. A segment starting with `:` captures any
/// non-empty segment; everything else matches literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    path: &'static str,
    name: &'static str,
    kind: ViewKind,
}

impl RouteDescriptor {
    /// An entry whose view is a direct component reference.
    pub const fn new(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            kind: ViewKind::Eager,
        }
    }

    /// An entry whose view is produced by a deferred loader.
    pub const fn deferred(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            kind: ViewKind::Deferred,
        }
    }

    pub const fn path(&self) -> &'static str {
        self.path
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn is_deferred(&self) -> bool {
        self.kind == ViewKind::Deferred
    }

    /// Whether this pattern matches `candidate`, segment by segment.
    ///
    /// `candidate` must already be a bare path (no query or fragment).
    pub fn matches(&self, candidate: &str) -> bool {
        let mut want = segments(self.path);
        let mut got = segments(candidate);
        loop {
            match (want.next(), got.next()) {
                (None, None) => return true,
                (Some(w), Some(g)) => {
                    if !w.starts_with(':') && w != g {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_pattern_matches_exactly() {
        let route = RouteDescriptor::new("/dashboard", "dashboard");
        assert!(route.matches("/dashboard"));
        assert!(route.matches("dashboard/"));
        assert!(!route.matches("/dashboard/settings"));
        assert!(!route.matches("/login"));
    }

    #[test]
    fn root_pattern_matches_only_root() {
        let route = RouteDescriptor::new("/", "home");
        assert!(route.matches("/"));
        assert!(!route.matches("/login"));
    }

    #[test]
    fn param_segment_matches_any_value() {
        let route = RouteDescriptor::new("/query/:id", "query_detail");
        assert!(route.matches("/query/42"));
        assert!(route.matches("/query/latest"));
        assert!(!route.matches("/query"));
        assert!(!route.matches("/query/42/edit"));
    }

    #[test]
    fn deferred_flag_is_carried() {
        assert!(RouteDescriptor::deferred("/about", "about").is_deferred());
        assert!(!RouteDescriptor::new("/about", "about").is_deferred());
        assert_eq!(
            RouteDescriptor::deferred("/about", "about").kind(),
            ViewKind::Deferred
        );
    }
}
