//! The router object produced by the factory.

use crate::descriptor::RouteDescriptor;
use crate::history::HistoryMode;
use crate::table::{MatchError, RouteTable, TableError};
use crate::Routable;

/// Runtime router: the route table plus the history strategy it is served
/// under. Constructed once at application startup.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    history: HistoryMode,
}

impl Router {
    pub fn new(table: RouteTable, history: HistoryMode) -> Self {
        log::debug!(
            "router ready: {} routes, base `{}`",
            table.len(),
            history.base()
        );
        Self { table, history }
    }

    /// Builds the router straight from a route enum's declared table.
    pub fn of<R: Routable>(history: HistoryMode) -> Result<Self, TableError> {
        Ok(Self::new(RouteTable::of::<R>()?, history))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &HistoryMode {
        &self.history
    }

    /// Resolves an application URL to a route entry, applying the history
    /// strategy before matching.
    pub fn resolve(&self, url: &str) -> Result<&RouteDescriptor, MatchError> {
        let path = self.history.strip(url);
        self.recognize(&path)
    }

    /// Matches a bare route path against the table.
    pub fn recognize(&self, path: &str) -> Result<&RouteDescriptor, MatchError> {
        self.table
            .recognize(path)
            .ok_or_else(|| MatchError::NoMatch(path.to_string()))
    }

    /// Renders a route path as an application URL under the configured
    /// history mode and base.
    pub fn href(&self, path: &str) -> String {
        self.history.href(path)
    }

    /// Renders the URL of the route registered under `name`.
    pub fn href_for(&self, name: &str) -> Result<String, MatchError> {
        Ok(self.href(self.table.path_for(name)?))
    }

    /// The pattern registered under `name`.
    pub fn path_for(&self, name: &str) -> Result<&'static str, MatchError> {
        self.table.path_for(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(history: HistoryMode) -> Router {
        let table = RouteTable::new([
            RouteDescriptor::new("/", "home"),
            RouteDescriptor::new("/login", "login"),
            RouteDescriptor::deferred("/about", "about"),
            RouteDescriptor::new("/dashboard", "dashboard"),
        ])
        .expect("table is valid");
        Router::new(table, history)
    }

    #[test]
    fn resolves_urls_under_a_browser_base() {
        let router = router(HistoryMode::browser("/console"));
        let entry = router.resolve("/console/dashboard").expect("configured");
        assert_eq!(entry.name(), "dashboard");
        assert_eq!(router.resolve("/console").map(|e| e.name()), Ok("home"));
    }

    #[test]
    fn resolves_hash_urls() {
        let router = router(HistoryMode::hash("/"));
        assert_eq!(router.resolve("/#/login").map(|e| e.name()), Ok("login"));
        assert_eq!(router.resolve("/").map(|e| e.name()), Ok("home"));
    }

    #[test]
    fn unmatched_urls_report_the_stripped_path() {
        let router = router(HistoryMode::browser("/"));
        assert_eq!(
            router.resolve("/unknown"),
            Err(MatchError::NoMatch("/unknown".to_string()))
        );
    }

    #[test]
    fn hrefs_are_name_addressable() {
        let router = router(HistoryMode::browser("/console"));
        assert_eq!(router.href_for("about"), Ok("/console/about".to_string()));
        assert_eq!(
            router.href_for("missing"),
            Err(MatchError::UnknownName("missing".to_string()))
        );
    }
}
