//! Build-time configuration for the console shell.

/// Base URL prefix the console is served under, fixed at build time via the
/// `CONSOLE_BASE_URL` environment variable.
pub fn base_url() -> &'static str {
    option_env!("CONSOLE_BASE_URL").unwrap_or("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_root() {
        assert_eq!(base_url(), "/");
    }
}
