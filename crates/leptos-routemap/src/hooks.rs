//! Navigation helpers and the router context singleton.

use std::fmt::Display;
use std::ops::Deref;
use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::router::Router;
use crate::table::MatchError;

/// Anything that can be turned into a navigable path string: raw paths or
/// route enum values (via their `Display` rendering).
pub trait IntoPath {
    fn into_path(self) -> String;
}

impl<T: Display> IntoPath for T {
    fn into_path(self) -> String {
        self.to_string()
    }
}

/// Extends the navigator returned by `use_navigate` with path-like inputs.
pub trait NavigateExt: Fn(&str, NavigateOptions) {
    fn navigate_to<P: IntoPath>(&self, pathlike: P) {
        (self)(&pathlike.into_path(), NavigateOptions::default());
    }

    fn navigate_with_options<P: IntoPath>(&self, pathlike: P, options: NavigateOptions) {
        (self)(&pathlike.into_path(), options);
    }
}

impl<F> NavigateExt for F where F: Fn(&str, NavigateOptions) {}

/// Shared handle to the router singleton, provided once at app startup.
#[derive(Clone)]
pub struct RouterContext(Arc<Router>);

impl RouterContext {
    /// Navigates to the route registered under a symbolic name.
    ///
    /// Must be called from within the reactive tree, like `use_navigate`
    /// itself.
    pub fn navigate_by_name(&self, name: &str) -> Result<(), MatchError> {
        let href = self.0.href_for(name)?;
        let navigate = use_navigate();
        navigate(&href, NavigateOptions::default());
        Ok(())
    }
}

impl Deref for RouterContext {
    type Target = Router;

    fn deref(&self) -> &Router {
        &self.0
    }
}

/// Installs the router singleton into the Leptos context tree.
pub fn provide_router(router: Router) {
    provide_context(RouterContext(Arc::new(router)));
}

pub fn use_router() -> Option<RouterContext> {
    use_context::<RouterContext>()
}

/// Like [`use_router`], but panics when no router was provided.
pub fn expect_router() -> RouterContext {
    use_router().expect("a router should be provided before calling expect_router")
}
