//! Authorization predicates over an effective permission set.

use smol_str::SmolStr;

use crate::requirement::{AccessRequirement, Clause};
use crate::resolver::EffectivePermissions;

/// Answers access questions for one session snapshot.
///
/// Holds borrowed data only; building one is free and it can be shared by
/// every consumer rendering from the same snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    permissions: &'a EffectivePermissions,
    roles: &'a [SmolStr],
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub const fn new(permissions: &'a EffectivePermissions, roles: &'a [SmolStr]) -> Self {
        Self { permissions, roles }
    }

    /// True iff `name` is in the effective set.
    #[must_use]
    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.contains(name)
    }

    /// True iff at least one of `names` is held.
    ///
    /// An empty list returns `false`: an empty permission list in a
    /// configuration must never open access.
    #[must_use]
    pub fn has_any_permission<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|name| self.has_permission(name.as_ref()))
    }

    /// True iff every one of `names` is held. An empty list returns `true`.
    #[must_use]
    pub fn has_all_permissions<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|name| self.has_permission(name.as_ref()))
    }

    /// Exact, case-sensitive role membership.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }

    /// Evaluate a requirement.
    #[must_use]
    pub fn evaluate(&self, requirement: &AccessRequirement) -> bool {
        self.explain(requirement).is_allowed()
    }

    /// Evaluate a requirement and report the first clause that failed.
    ///
    /// Clauses are checked in order (single permission, permission list,
    /// role) and evaluation stops at the first failure.
    #[must_use]
    pub fn explain<'r>(&self, requirement: &'r AccessRequirement) -> Decision<'r> {
        for clause in requirement.clauses() {
            let passed = match clause {
                Clause::Permission(name) => self.has_permission(name),
                Clause::AnyPermission(names) => self.has_any_permission(names),
                Clause::AllPermissions(names) => self.has_all_permissions(names),
                Clause::Role(role) => self.has_role(role),
            };
            if !passed {
                tracing::debug!(?clause, "access requirement denied");
                return Decision::Denied(clause);
            }
        }
        Decision::Allowed
    }
}

/// Outcome of evaluating a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<'r> {
    Allowed,
    /// Denied by the given clause.
    Denied(&'r Clause),
}

impl Decision<'_> {
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}
