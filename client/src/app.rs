//! Client application state.

use anyhow::{bail, Result};
use tb_access::{
    active_trail, filter_visible, CatalogError, CatalogIssue, Guarded, NavigationNode,
    PermissionCatalog, SessionStore,
};
use tracing::{info, warn};

use crate::config::Config;
use crate::loader;
use crate::render::{render_mobile, render_sidebar};
use crate::routes::{resolve_route, Entrypoints, RouteEntry, Screen};

/// Application state shared across views.
pub struct App {
    config: Config,
    store: SessionStore,
    navigation: Vec<NavigationNode>,
    routes: Vec<RouteEntry>,
}

impl App {
    /// Load every configured document and publish the initial session.
    pub fn load(config: Config) -> Result<Self> {
        let navigation = loader::load_navigation(&config.navigation_file)?;
        let routes = match &config.routes_file {
            Some(path) => loader::load_routes(path)?,
            None => Vec::new(),
        };

        if let Some(path) = &config.catalog_file {
            let catalog = loader::load_catalog(path)?;
            check_catalog(&catalog, &navigation, &routes, config.strict_catalog)?;
        }

        let store = SessionStore::new();
        if let Some(path) = &config.principal_file {
            store.login(loader::load_principal(path)?);
        }

        info!(
            nav_entries = navigation.len(),
            routes = routes.len(),
            "client state loaded"
        );

        Ok(Self {
            config,
            store,
            navigation,
            routes,
        })
    }

    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Navigation entries visible to the current session.
    #[must_use]
    pub fn visible_navigation(&self) -> Vec<NavigationNode> {
        let session = self.store.snapshot();
        filter_visible(&self.navigation, &session.evaluator())
    }

    /// Resolve a configured route. `None` when no route has this path.
    #[must_use]
    pub fn open(&self, path: &str) -> Option<Guarded<Screen>> {
        let route = self.routes.iter().find(|r| r.path == path)?;
        let session = self.store.snapshot();
        Some(resolve_route(&session, route, self.entrypoints()))
    }

    /// Text report of the sidebar, mobile menu and route table.
    #[must_use]
    pub fn report(&self) -> String {
        let session = self.store.snapshot();
        let visible = filter_visible(&self.navigation, &session.evaluator());
        let trail = active_trail(&visible, &self.config.current_path);

        let user = session
            .principal()
            .map_or("(signed out)", |p| p.display_name.as_str());
        let permissions: Vec<&str> = session.permissions().iter().collect();

        let mut out = format!(
            "User: {user}\nPermissions: {}\n\nSidebar:\n{}\n\nMobile:\n{}\n",
            permissions.join(", "),
            render_sidebar(&visible, &trail),
            render_mobile(&visible),
        );

        if !self.routes.is_empty() {
            out.push_str("\nRoutes:\n");
            for route in &self.routes {
                let outcome = resolve_route(&session, route, self.entrypoints());
                out.push_str(&format!("{} => {}\n", route.path, describe(&outcome)));
            }
        }
        out
    }

    fn entrypoints(&self) -> Entrypoints<'_> {
        Entrypoints {
            login: &self.config.login_route,
            landing: &self.config.landing_route,
        }
    }
}

fn describe(outcome: &Guarded<Screen>) -> String {
    match outcome {
        Guarded::View(Screen::Page(path) | Screen::Notice(path)) => format!("render {path}"),
        Guarded::Fallback(Screen::Notice(msg) | Screen::Page(msg)) => format!("fallback: {msg}"),
        Guarded::Redirect(redirect) => format!("redirect {}", redirect.to),
    }
}

/// Validate every configured requirement against the catalog.
///
/// Issues are logged; in strict mode they abort startup.
fn check_catalog(
    catalog: &PermissionCatalog,
    navigation: &[NavigationNode],
    routes: &[RouteEntry],
    strict: bool,
) -> Result<()> {
    let mut issues: Vec<CatalogIssue> = catalog.validate_navigation(navigation);
    for route in routes {
        issues.extend(catalog.validate_requirement(&route.requirement, &format!("route {}", route.path)));
    }

    for issue in &issues {
        warn!(%issue, "access configuration references unknown name");
    }

    if strict && !issues.is_empty() {
        bail!(CatalogError::Invalid(issues));
    }
    Ok(())
}
