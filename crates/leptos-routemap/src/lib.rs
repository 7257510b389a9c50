//! Table-driven named routing for Leptos.
//!
//! A route table is data: an ordered list of [`RouteDescriptor`] entries,
//! each pairing a URL path pattern with a unique symbolic name and an eager
//! or deferred view binding. `#[derive(Routable)]` turns a plain enum into
//! that table plus the `leptos_router` mounting code, and
//! [`Router`] is the runtime object a factory produces from the table, a
//! [`history::HistoryMode`] and a base URL.

pub mod descriptor;
pub mod history;
pub mod hooks;
pub mod lazy;
pub mod outlet;
pub mod paths;
pub mod router;
pub mod table;

use std::str::FromStr;

pub use descriptor::{RouteDescriptor, ViewKind};
pub use router::Router;
pub use table::{MatchError, RouteTable, TableError};

/// A route enum backed by a static descriptor table.
///
/// Implemented via `#[derive(Routable)]`; the derive also provides
/// [`FromStr`] (path recognition), `Display` (path rendering) and a
/// `From<impl AsRef<str>>` conversion that falls back to the variant marked
/// `#[fallback]`.
pub trait Routable: Sized {
    /// Descriptors in declaration order. Matching is first-match-wins over
    /// this order.
    const ROUTES: &'static [RouteDescriptor];

    /// Mounts every route under a `leptos_router` `Routes` component.
    fn routes() -> impl ::leptos::IntoView;

    /// Same tree mounted under `FlatRoutes`.
    fn flat_routes() -> impl ::leptos::IntoView;

    /// The view of the `#[fallback]` variant.
    fn fallback() -> impl ::leptos::IntoView;

    /// The descriptor this value was declared with.
    fn descriptor(&self) -> &'static RouteDescriptor;

    /// Symbolic name used for programmatic navigation.
    fn route_name(&self) -> &'static str {
        self.descriptor().name()
    }

    /// The declared path pattern.
    fn route_path(&self) -> &'static str {
        self.descriptor().path()
    }

    /// First route whose pattern matches `path`, if any.
    fn recognize(path: &str) -> Option<Self>
    where
        Self: FromStr,
    {
        Self::from_str(path).ok()
    }
}

pub mod prelude {
    pub use leptos_routemap_macro::*;

    pub use crate::descriptor::{RouteDescriptor, ViewKind};
    pub use crate::history::HistoryMode;
    pub use crate::hooks::{
        expect_router, provide_router, use_router, IntoPath, NavigateExt, RouterContext,
    };
    pub use crate::lazy::{LazyView, LoadError};
    pub use crate::outlet::{view_ctor, Deferred, ViewCtor};
    pub use crate::paths::combine_paths;
    pub use crate::router::Router;
    pub use crate::table::{MatchError, RouteTable, TableError};
    pub use crate::Routable;
}
