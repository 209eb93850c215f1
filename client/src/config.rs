//! Client Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use tb_access::DEFAULT_LANDING_ROUTE;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile document of the signed-in user. `None` starts signed out.
    pub principal_file: Option<PathBuf>,

    /// Navigation tree document
    pub navigation_file: PathBuf,

    /// Route table document (optional)
    pub routes_file: Option<PathBuf>,

    /// Permission catalog document (optional)
    pub catalog_file: Option<PathBuf>,

    /// Refuse to start when the catalog reports unknown names (default: false)
    pub strict_catalog: bool,

    /// Redirect target for signed-in users denied a route (default: "/dashboard")
    pub landing_route: String,

    /// Redirect target for signed-out users (default: "/login")
    pub login_route: String,

    /// Path used to highlight the active navigation entry (default: "/dashboard")
    pub current_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            principal_file: env::var("TB_PRINCIPAL_FILE").ok().map(PathBuf::from),
            navigation_file: env::var("TB_NAVIGATION_FILE")
                .map(PathBuf::from)
                .context("TB_NAVIGATION_FILE must be set")?,
            routes_file: env::var("TB_ROUTES_FILE").ok().map(PathBuf::from),
            catalog_file: env::var("TB_CATALOG_FILE").ok().map(PathBuf::from),
            strict_catalog: env::var("TB_STRICT_CATALOG")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            landing_route: env::var("TB_LANDING_ROUTE")
                .unwrap_or_else(|_| DEFAULT_LANDING_ROUTE.into()),
            login_route: env::var("TB_LOGIN_ROUTE").unwrap_or_else(|_| "/login".into()),
            current_path: env::var("TB_CURRENT_PATH")
                .unwrap_or_else(|_| DEFAULT_LANDING_ROUTE.into()),
        })
    }

    /// Check if a catalog is configured.
    #[must_use]
    pub const fn has_catalog(&self) -> bool {
        self.catalog_file.is_some()
    }

    /// Create a default configuration for testing.
    ///
    /// Points at the documents under `client/fixtures/`.
    #[must_use]
    pub fn default_for_test() -> Self {
        let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        Self {
            principal_file: Some(fixtures.join("principal.json")),
            navigation_file: fixtures.join("navigation.json"),
            routes_file: Some(fixtures.join("routes.json")),
            catalog_file: Some(fixtures.join("catalog.json")),
            strict_catalog: false,
            landing_route: DEFAULT_LANDING_ROUTE.into(),
            login_route: "/login".into(),
            current_path: DEFAULT_LANDING_ROUTE.into(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "TB_PRINCIPAL_FILE",
        "TB_NAVIGATION_FILE",
        "TB_ROUTES_FILE",
        "TB_CATALOG_FILE",
        "TB_STRICT_CATALOG",
        "TB_LANDING_ROUTE",
        "TB_LOGIN_ROUTE",
        "TB_CURRENT_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_navigation_file_required() {
        clear_env();
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TB_NAVIGATION_FILE"));
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        env::set_var("TB_NAVIGATION_FILE", "nav.json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.navigation_file, PathBuf::from("nav.json"));
        assert_eq!(config.principal_file, None);
        assert!(!config.strict_catalog);
        assert!(!config.has_catalog());
        assert_eq!(config.landing_route, "/dashboard");
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.current_path, "/dashboard");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("TB_NAVIGATION_FILE", "nav.json");
        env::set_var("TB_CATALOG_FILE", "catalog.json");
        env::set_var("TB_STRICT_CATALOG", "yes");
        env::set_var("TB_LANDING_ROUTE", "/home");
        env::set_var("TB_CURRENT_PATH", "/tasks/4");

        let config = Config::from_env().unwrap();
        assert!(config.has_catalog());
        assert!(config.strict_catalog);
        assert_eq!(config.landing_route, "/home");
        assert_eq!(config.current_path, "/tasks/4");

        clear_env();
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
