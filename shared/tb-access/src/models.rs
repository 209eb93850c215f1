//! Principal, role and permission types as delivered by the profile service.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use uuid::Uuid;

/// A single named permission (e.g. `"view tasks"`).
///
/// The profile service sends permissions as objects with a numeric id and a
/// name. Only the name participates in access decisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// Catalog id assigned by the identity service, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Unique permission name.
    pub name: SmolStr,
}

impl Permission {
    /// Create a permission carrying only a name.
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A named role owning a set of permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: SmolStr,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    /// Create a role from a name and a list of permission names.
    pub fn new<I, S>(name: impl Into<SmolStr>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().map(Permission::named).collect(),
        }
    }
}

/// The authenticated user whose access is being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// User ID.
    pub id: Uuid,
    /// Username (unique).
    pub username: String,
    /// Display name.
    pub display_name: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Permissions granted directly to the user.
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Roles assigned to the user.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Principal {
    /// Create a principal with no grants and no roles.
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: Uuid::new_v4(),
            display_name: username.clone(),
            username,
            email: None,
            avatar_url: None,
            permissions: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Add direct permission grants.
    #[must_use]
    pub fn with_permissions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.permissions
            .extend(names.into_iter().map(Permission::named));
        self
    }

    /// Assign a role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Names of the assigned roles, in assignment order.
    pub fn role_names(&self) -> impl Iterator<Item = &SmolStr> {
        self.roles.iter().map(|r| &r.name)
    }

    /// Apply a partial profile update. Permission data is never touched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(display_name) = update.display_name {
            self.display_name = display_name;
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = avatar_url;
        }
    }
}

/// Partial update of the display fields of a principal.
///
/// `avatar_url: Some(None)` clears the avatar.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<Option<String>>,
}
