use leptos_routemap::prelude::*;
use std::str::FromStr;

#[derive(Routable, PartialEq, Debug)]
#[routes(view_prefix = "", view_suffix = "View", transition = false)]
pub enum TestRoutes {
    #[route(path = "/")]
    Home,

    #[route(path = "/query/new", name = "query_new")]
    NewQuery,

    #[route(path = "/query/:id")]
    QueryDetail { id: u64 },

    #[route(path = "/about", lazy = "load_about")]
    About,

    #[fallback]
    #[route(path = "/404")]
    NotFound,
}

// Stub views; the mounting code references them but tests never render.
fn HomeView() -> &'static str {
    "home"
}
fn NewQueryView() -> &'static str {
    "query_new"
}
fn QueryDetailView() -> &'static str {
    "query_detail"
}
fn NotFoundView() -> &'static str {
    "notfound"
}

async fn load_about() -> Result<ViewCtor, LoadError> {
    Ok(view_ctor(|| "about"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_home() {
        let route = TestRoutes::from_str("/").unwrap();
        assert_eq!(route, TestRoutes::Home);
    }

    #[test]
    fn test_from_str_static_segments() {
        let route = TestRoutes::from_str("/about").unwrap();
        assert_eq!(route, TestRoutes::About);
    }

    #[test]
    fn test_from_str_param() {
        let route = TestRoutes::from_str("/query/42").unwrap();
        assert_eq!(route, TestRoutes::QueryDetail { id: 42 });
    }

    #[test]
    fn test_from_str_prefers_earlier_declaration() {
        // `/query/new` is declared before `/query/:id`, so the static entry
        // wins even though the param pattern also matches.
        let route = TestRoutes::from_str("/query/new").unwrap();
        assert_eq!(route, TestRoutes::NewQuery);
    }

    #[test]
    fn test_from_str_unparseable_param_fails() {
        let result = TestRoutes::from_str("/query/abc");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str_ignores_query_string() {
        let route = TestRoutes::from_str("/query/7?from=nav").unwrap();
        assert_eq!(route, TestRoutes::QueryDetail { id: 7 });
    }

    #[test]
    fn test_from_str_unknown_fails() {
        let result = TestRoutes::from_str("/unknown");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_with_fallback() {
        let route: TestRoutes = "/unknown/path".into();
        assert_eq!(route, TestRoutes::NotFound);
    }

    #[test]
    fn test_from_valid_route() {
        let route: TestRoutes = "/about".into();
        assert_eq!(route, TestRoutes::About);
    }

    #[test]
    fn test_display_renders_paths() {
        assert_eq!(TestRoutes::Home.to_string(), "/");
        assert_eq!(TestRoutes::NewQuery.to_string(), "/query/new");
        assert_eq!(TestRoutes::QueryDetail { id: 42 }.to_string(), "/query/42");
    }

    #[test]
    fn test_route_names_default_to_snake_case() {
        assert_eq!(TestRoutes::QueryDetail { id: 1 }.route_name(), "query_detail");
        assert_eq!(TestRoutes::NotFound.route_name(), "not_found");
    }

    #[test]
    fn test_route_name_override() {
        assert_eq!(TestRoutes::NewQuery.route_name(), "query_new");
    }

    #[test]
    fn test_descriptor_table_keeps_declaration_order() {
        let paths: Vec<&str> = TestRoutes::ROUTES.iter().map(|r| r.path()).collect();
        assert_eq!(paths, ["/", "/query/new", "/query/:id", "/about", "/404"]);
    }

    #[test]
    fn test_lazy_attribute_marks_descriptor_deferred() {
        assert!(TestRoutes::About.descriptor().is_deferred());
        assert!(!TestRoutes::Home.descriptor().is_deferred());
    }
}
