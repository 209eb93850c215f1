//! Permission resolution logic.
//!
//! Computes the effective permission set of a principal.

use std::collections::HashSet;

use smol_str::SmolStr;

use crate::models::Principal;

/// Deduplicated union of a principal's direct and role-inherited permissions.
///
/// Names keep the order in which they were first seen: direct grants first,
/// then each role in assignment order. Order never affects access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectivePermissions {
    ordered: Vec<SmolStr>,
    index: HashSet<SmolStr>,
}

impl EffectivePermissions {
    /// The empty set held by unauthenticated sessions.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check membership of a permission name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Iterate permission names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(SmolStr::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    fn insert(&mut self, name: &SmolStr) {
        if self.index.insert(name.clone()) {
            self.ordered.push(name.clone());
        }
    }
}

impl<'a> IntoIterator for &'a EffectivePermissions {
    type Item = &'a SmolStr;
    type IntoIter = std::slice::Iter<'a, SmolStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}

/// Compute the effective permission set for a principal.
///
/// Resolution order:
/// 1. No principal yields the empty set
/// 2. Direct grants in the order the profile lists them
/// 3. Role permissions, role by role
///
/// A name reachable through several sources is kept once. The result is
/// always rebuilt from scratch so a revoked role cannot leave stale entries.
#[must_use]
pub fn aggregate(principal: Option<&Principal>) -> EffectivePermissions {
    let mut effective = EffectivePermissions::empty();

    let Some(principal) = principal else {
        return effective;
    };

    for permission in &principal.permissions {
        effective.insert(&permission.name);
    }

    for role in &principal.roles {
        for permission in &role.permissions {
            effective.insert(&permission.name);
        }
    }

    effective
}
