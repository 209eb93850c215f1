//! Document loading for the profile, navigation, route and catalog files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tb_access::{NavigationNode, PermissionCatalog, Principal};
use tracing::debug;

use crate::routes::RouteEntry;

/// Read and parse a JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded document");
    Ok(value)
}

pub fn load_principal(path: &Path) -> Result<Principal> {
    load_json(path)
}

pub fn load_navigation(path: &Path) -> Result<Vec<NavigationNode>> {
    load_json(path)
}

pub fn load_routes(path: &Path) -> Result<Vec<RouteEntry>> {
    load_json(path)
}

pub fn load_catalog(path: &Path) -> Result<PermissionCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    PermissionCatalog::from_json(&raw)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))
}
