//! Taskboard Access Core
//!
//! Decides what a signed-in user may see: which permissions they hold, which
//! navigation entries are visible and whether a protected route renders.
//!
//! - [`resolver`]: effective permission set from direct grants and roles
//! - [`evaluator`]: permission, any/all and role predicates
//! - [`navigation`]: visibility filter for the navigation tree
//! - [`guard`]: route guard with fallback or redirect
//! - [`session`]: atomically replaced session snapshots
//! - [`catalog`]: startup validation of configured names
//!
//! These decisions only shape the UI. The backend enforces authorization
//! on its own.

pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod guard;
pub mod models;
pub mod navigation;
pub mod requirement;
pub mod resolver;
pub mod session;

pub use catalog::PermissionCatalog;
pub use error::{CatalogError, CatalogIssue};
pub use evaluator::{Decision, Evaluator};
pub use guard::{Guarded, Redirect, RouteGuard, DEFAULT_LANDING_ROUTE};
pub use models::{Permission, Principal, ProfileUpdate, Role};
pub use navigation::{active_trail, filter_visible, flatten_links, NavigationNode};
pub use requirement::{AccessRequirement, Clause, Clauses};
pub use resolver::{aggregate, EffectivePermissions};
pub use session::{Session, SessionStore};
