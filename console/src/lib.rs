//! SQL chat console shell: the route table and application root.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Html, Meta, Title};
use leptos_router::components::{Router, A};
use leptos_routemap::prelude::*;

pub mod config;
pub mod pages;

use pages::{DashboardView, HomeView, LoginView, NotFoundView};

/// Client-side route table. `/about` is deferred: its view definition is
/// produced on first navigation and cached from then on.
#[derive(Routable, Clone, PartialEq, Eq, Debug)]
#[routes(transition = false)]
pub enum AppRoute {
    #[route(path = "/")]
    Home,

    #[route(path = "/login")]
    Login,

    #[route(path = "/about", lazy = "crate::pages::about::load")]
    About,

    #[route(path = "/dashboard")]
    Dashboard,

    #[fallback]
    #[route(path = "/404")]
    NotFound,
}

/// Builds the router singleton from the route table, browser history and
/// the build-time base URL.
pub fn build_router() -> Result<Router, TableError> {
    Router::of::<AppRoute>(HistoryMode::browser(config::base_url()))
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    match build_router() {
        Ok(router) => provide_router(router),
        Err(err) => log::error!("route table rejected: {err}"),
    }
    view! {
        <Html attr:lang="en" />
        <Title text="SQL Chat Console" />
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Router>
            <NavBar />
            <main class="console-main">{move || AppRoute::routes()}</main>
        </Router>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let router = expect_router();
    view! {
        <nav class="console-nav">
            <A href=router.href(AppRoute::Home.route_path())>"Home"</A>
            <A href=router.href(AppRoute::Dashboard.route_path())>"Dashboard"</A>
            <A href=router.href(AppRoute::About.route_path())>"About"</A>
            <A href=router.href(AppRoute::Login.route_path())>"Sign In"</A>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn recognizes_all_configured_paths() {
        for (path, name) in [
            ("/", "home"),
            ("/login", "login"),
            ("/about", "about"),
            ("/dashboard", "dashboard"),
        ] {
            let route = AppRoute::from_str(path).expect("path is configured");
            assert_eq!(route.route_name(), name);
            assert_eq!(route.route_path(), path);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert!(AppRoute::from_str("/unknown").is_err());
        assert_eq!(AppRoute::from("/unknown"), AppRoute::NotFound);
    }

    #[test]
    fn names_and_paths_are_pairwise_distinct() {
        let names: HashSet<&str> = AppRoute::ROUTES.iter().map(|r| r.name()).collect();
        let paths: HashSet<&str> = AppRoute::ROUTES.iter().map(|r| r.path()).collect();
        assert_eq!(names.len(), AppRoute::ROUTES.len());
        assert_eq!(paths.len(), AppRoute::ROUTES.len());
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(AppRoute::Home.to_string(), "/");
        assert_eq!(AppRoute::Dashboard.to_string(), "/dashboard");
        assert_eq!(AppRoute::NotFound.to_string(), "/404");
    }

    #[test]
    fn about_is_the_only_deferred_entry() {
        let deferred: Vec<&str> = AppRoute::ROUTES
            .iter()
            .filter(|r| r.is_deferred())
            .map(|r| r.name())
            .collect();
        assert_eq!(deferred, ["about"]);
    }

    #[test]
    fn router_factory_builds_and_resolves() {
        let router = build_router().expect("table is valid");
        assert_eq!(router.resolve("/dashboard").map(|e| e.name()), Ok("dashboard"));
        assert!(matches!(
            router.resolve("/unknown"),
            Err(MatchError::NoMatch(_))
        ));
        assert_eq!(router.href_for("about"), Ok("/about".to_string()));
    }
}
