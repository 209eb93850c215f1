//! Known permission and role names.
//!
//! Requirements reference permissions by free-form name, so a misspelled
//! name silently denies access. Validating the navigation tree and route
//! table against a catalog at startup turns those typos into reported
//! issues. Evaluation itself never consults the catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{CatalogError, CatalogIssue};
use crate::navigation::NavigationNode;
use crate::requirement::{AccessRequirement, Clause};

/// Set of permission and role names issued by the identity service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCatalog {
    #[serde(default)]
    permissions: HashSet<SmolStr>,
    #[serde(default)]
    roles: HashSet<SmolStr>,
}

impl PermissionCatalog {
    pub fn new<P, R, S, T>(permissions: P, roles: R) -> Self
    where
        P: IntoIterator<Item = S>,
        R: IntoIterator<Item = T>,
        S: Into<SmolStr>,
        T: Into<SmolStr>,
    {
        Self {
            permissions: permissions.into_iter().map(Into::into).collect(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a `{ "permissions": [..], "roles": [..] }` document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn knows_permission(&self, name: &str) -> bool {
        self.permissions.contains(name)
    }

    #[must_use]
    pub fn knows_role(&self, name: &str) -> bool {
        self.roles.contains(name)
    }

    /// Report unknown names referenced by `requirement`.
    #[must_use]
    pub fn validate_requirement(
        &self,
        requirement: &AccessRequirement,
        location: &str,
    ) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for clause in requirement.clauses() {
            if let Clause::Role(name) = clause {
                if !self.knows_role(name) {
                    issues.push(CatalogIssue::UnknownRole {
                        name: name.clone(),
                        location: location.to_string(),
                    });
                }
                continue;
            }
            for name in clause.permission_names() {
                if !self.knows_permission(name) {
                    issues.push(CatalogIssue::UnknownPermission {
                        name: name.clone(),
                        location: location.to_string(),
                    });
                }
            }
        }
        issues
    }

    /// Report unknown names anywhere in a navigation tree.
    ///
    /// Locations are title paths such as `Ratings > Final Ratings`.
    #[must_use]
    pub fn validate_navigation(&self, nodes: &[NavigationNode]) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        self.walk(nodes, "", &mut issues);
        issues
    }

    /// Fail with every issue found in `nodes`, if any.
    pub fn ensure_navigation(&self, nodes: &[NavigationNode]) -> Result<(), CatalogError> {
        let issues = self.validate_navigation(nodes);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid(issues))
        }
    }

    fn walk(&self, nodes: &[NavigationNode], parent: &str, issues: &mut Vec<CatalogIssue>) {
        for node in nodes {
            let location = if parent.is_empty() {
                node.title.clone()
            } else {
                format!("{parent} > {}", node.title)
            };
            issues.extend(self.validate_requirement(&node.requirement, &location));
            self.walk(&node.children, &location, issues);
        }
    }
}
