//! Declarative access requirements attached to routes and navigation nodes.
//!
//! A requirement is either [`AccessRequirement::None`] or a conjunction of at
//! most one clause per [`Clause`] kind. Clauses are kept in evaluation order
//! (single permission, permission list, role) so evaluation can stop at the
//! first failing clause.
//!
//! Configuration files use a flat object:
//!
//! ```json
//! { "permissions": ["view rating configs", "create task ratings"], "requireAll": false }
//! ```
//!
//! with the optional keys `permission`, `permissions`, `requireAll` and
//! `role`. An empty object means no requirement.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// One predicate of a requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Clause {
    /// The named permission must be held.
    Permission(SmolStr),
    /// At least one of the names must be held. An empty list never passes.
    AnyPermission(Vec<SmolStr>),
    /// Every name must be held. An empty list always passes.
    AllPermissions(Vec<SmolStr>),
    /// The principal must be assigned the named role.
    Role(SmolStr),
}

impl Clause {
    /// Position of the clause kind in evaluation order.
    const fn rank(&self) -> u8 {
        match self {
            Self::Permission(_) => 0,
            Self::AnyPermission(_) | Self::AllPermissions(_) => 1,
            Self::Role(_) => 2,
        }
    }

    /// Permission names referenced by this clause.
    pub fn permission_names(&self) -> &[SmolStr] {
        match self {
            Self::Permission(name) => std::slice::from_ref(name),
            Self::AnyPermission(names) | Self::AllPermissions(names) => names,
            Self::Role(_) => &[],
        }
    }
}

/// Gate attached to a protected route or navigation node.
///
/// [`AccessRequirement::Gated`] can only be built through the constructors
/// below, so a gated requirement always holds at least one clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RequirementSpec", into = "RequirementSpec")]
pub enum AccessRequirement {
    /// No requirement; always allows.
    #[default]
    None,
    /// Every clause must pass.
    Gated(Clauses),
}

/// Non-empty clause list with at most one clause per kind, in evaluation
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clauses(Vec<Clause>);

impl Clauses {
    #[must_use]
    pub fn as_slice(&self) -> &[Clause] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Clauses {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AccessRequirement {
    /// Require a single permission.
    pub fn permission(name: impl Into<SmolStr>) -> Self {
        Self::None.and(Clause::Permission(name.into()))
    }

    /// Require at least one of the listed permissions.
    pub fn any_permission<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self::None.and(Clause::AnyPermission(
            names.into_iter().map(Into::into).collect(),
        ))
    }

    /// Require every listed permission.
    pub fn all_permissions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self::None.and(Clause::AllPermissions(
            names.into_iter().map(Into::into).collect(),
        ))
    }

    /// Require a role.
    pub fn role(name: impl Into<SmolStr>) -> Self {
        Self::None.and(Clause::Role(name.into()))
    }

    /// Add a role clause to this requirement.
    #[must_use]
    pub fn and_role(self, name: impl Into<SmolStr>) -> Self {
        self.and(Clause::Role(name.into()))
    }

    /// Add a clause, replacing any existing clause of the same kind.
    #[must_use]
    pub fn and(self, clause: Clause) -> Self {
        let mut clauses = match self {
            Self::None => Vec::with_capacity(1),
            Self::Gated(Clauses(clauses)) => clauses,
        };
        clauses.retain(|c| c.rank() != clause.rank());
        clauses.push(clause);
        clauses.sort_by_key(Clause::rank);
        Self::Gated(Clauses(clauses))
    }

    /// Clauses in evaluation order. Empty for [`AccessRequirement::None`].
    pub fn clauses(&self) -> &[Clause] {
        match self {
            Self::None => &[],
            Self::Gated(clauses) => clauses.as_slice(),
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Flat configuration shape of a requirement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequirementSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    permission: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    permissions: Option<Vec<SmolStr>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    require_all: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<SmolStr>,
}

impl From<RequirementSpec> for AccessRequirement {
    fn from(spec: RequirementSpec) -> Self {
        let mut requirement = Self::None;
        if let Some(name) = spec.permission {
            requirement = requirement.and(Clause::Permission(name));
        }
        if let Some(names) = spec.permissions {
            requirement = requirement.and(if spec.require_all {
                Clause::AllPermissions(names)
            } else {
                Clause::AnyPermission(names)
            });
        }
        if let Some(name) = spec.role {
            requirement = requirement.and(Clause::Role(name));
        }
        requirement
    }
}

impl From<AccessRequirement> for RequirementSpec {
    fn from(requirement: AccessRequirement) -> Self {
        let mut spec = Self::default();
        for clause in requirement.clauses() {
            match clause {
                Clause::Permission(name) => spec.permission = Some(name.clone()),
                Clause::AnyPermission(names) => {
                    spec.permissions = Some(names.clone());
                    spec.require_all = false;
                }
                Clause::AllPermissions(names) => {
                    spec.permissions = Some(names.clone());
                    spec.require_all = true;
                }
                Clause::Role(name) => spec.role = Some(name.clone()),
            }
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_none() {
        let requirement: AccessRequirement = serde_json::from_str("{}").unwrap();
        assert_eq!(requirement, AccessRequirement::None);
        assert!(requirement.is_none());
    }

    #[test]
    fn test_single_permission_from_config() {
        let requirement: AccessRequirement =
            serde_json::from_str(r#"{"permission": "view roles"}"#).unwrap();
        assert_eq!(requirement, AccessRequirement::permission("view roles"));
    }

    #[test]
    fn test_permission_list_mode() {
        let any: AccessRequirement =
            serde_json::from_str(r#"{"permissions": ["a", "b"], "requireAll": false}"#).unwrap();
        assert_eq!(any, AccessRequirement::any_permission(["a", "b"]));

        let any_by_default: AccessRequirement =
            serde_json::from_str(r#"{"permissions": ["a", "b"]}"#).unwrap();
        assert_eq!(any_by_default, any);

        let all: AccessRequirement =
            serde_json::from_str(r#"{"permissions": ["a", "b"], "requireAll": true}"#).unwrap();
        assert_eq!(all, AccessRequirement::all_permissions(["a", "b"]));
    }

    #[test]
    fn test_clauses_kept_in_evaluation_order() {
        let requirement: AccessRequirement = serde_json::from_str(
            r#"{"role": "admin", "permissions": ["x"], "permission": "view users"}"#,
        )
        .unwrap();

        assert_eq!(
            requirement.clauses(),
            &[
                Clause::Permission("view users".into()),
                Clause::AnyPermission(vec!["x".into()]),
                Clause::Role("admin".into()),
            ]
        );
    }

    #[test]
    fn test_builder_order_independent() {
        let a = AccessRequirement::role("admin").and(Clause::Permission("view users".into()));
        let b = AccessRequirement::permission("view users").and_role("admin");
        assert_eq!(a, b);
    }

    #[test]
    fn test_and_replaces_clause_of_same_kind() {
        let requirement = AccessRequirement::any_permission(["a"])
            .and(Clause::AllPermissions(vec!["b".into(), "c".into()]));
        assert_eq!(requirement, AccessRequirement::all_permissions(["b", "c"]));
    }

    #[test]
    fn test_serializes_to_flat_shape() {
        let requirement = AccessRequirement::all_permissions(["a"]).and_role("admin");
        let json = serde_json::to_value(&requirement).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"permissions": ["a"], "requireAll": true, "role": "admin"})
        );

        let none = serde_json::to_value(AccessRequirement::None).unwrap();
        assert_eq!(none, serde_json::json!({}));
    }

    #[test]
    fn test_gated_holds_one_clause_per_kind_in_order() {
        let requirement = AccessRequirement::role("admin")
            .and(Clause::Permission("a".into()))
            .and(Clause::Permission("b".into()))
            .and_role("manager");

        let AccessRequirement::Gated(clauses) = &requirement else {
            panic!("expected a gated requirement");
        };
        assert_eq!(
            clauses.as_slice(),
            &[
                Clause::Permission("b".into()),
                Clause::Role("manager".into()),
            ]
        );
        assert!(!requirement.is_none());
    }

    #[test]
    fn test_composite_survives_config_round_trip() {
        let requirements = [
            AccessRequirement::None,
            AccessRequirement::permission("view users").and_role("admin"),
            AccessRequirement::role("admin").and(Clause::Permission("b".into())),
            AccessRequirement::permission("a")
                .and(Clause::AllPermissions(vec!["x".into(), "y".into()]))
                .and_role("manager"),
            AccessRequirement::any_permission(Vec::<&str>::new()),
        ];
        for requirement in requirements {
            let json = serde_json::to_string(&requirement).unwrap();
            let parsed: AccessRequirement = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, requirement, "{json}");
        }
    }

    #[test]
    fn test_permission_names_per_clause() {
        assert_eq!(
            Clause::Permission("a".into()).permission_names(),
            &[SmolStr::from("a")]
        );
        assert!(Clause::Role("admin".into()).permission_names().is_empty());
    }
}
