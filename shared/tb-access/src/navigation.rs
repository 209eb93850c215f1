//! Navigation tree visibility.
//!
//! The sidebar and the mobile menu both render from the same configured
//! tree, filtered for the current session with [`filter_visible`].

use serde::{Deserialize, Serialize};

use crate::evaluator::Evaluator;
use crate::requirement::AccessRequirement;

/// One entry of the configured navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNode {
    pub title: String,
    /// Direct destination of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "AccessRequirement::is_none")]
    pub requirement: AccessRequirement,
    /// Ordered children. Empty means the node is a leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    /// A leaf linking to `href`.
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            icon: None,
            requirement: AccessRequirement::None,
            children: Vec::new(),
        }
    }

    /// A group without a destination of its own.
    pub fn group(title: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            title: title.into(),
            href: None,
            icon: None,
            requirement: AccessRequirement::None,
            children,
        }
    }

    #[must_use]
    pub fn requiring(mut self, requirement: AccessRequirement) -> Self {
        self.requirement = requirement;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether the node renders as an expandable group.
    ///
    /// Only nodes without a destination expand; a node with both a
    /// destination and children renders as a plain link.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.href.is_none() && !self.children.is_empty()
    }

    fn matches_path(&self, path: &str) -> bool {
        let Some(href) = self.href.as_deref() else {
            return false;
        };
        if href == path {
            return true;
        }
        // "/" only matches itself, otherwise it would prefix every path
        href != "/"
            && path.starts_with(href)
            && path[href.len()..].starts_with('/')
    }
}

/// Return the visible subset of `nodes`, preserving order.
///
/// Per node:
/// 1. A failing requirement hides the node and its whole subtree
/// 2. A passing leaf is visible
/// 3. A passing node with children is visible iff at least one child is
///
/// Same inputs always give the same output, and filtering an already
/// filtered tree returns it unchanged.
#[must_use]
pub fn filter_visible(nodes: &[NavigationNode], evaluator: &Evaluator<'_>) -> Vec<NavigationNode> {
    nodes
        .iter()
        .filter_map(|node| visible_node(node, evaluator))
        .collect()
}

fn visible_node(node: &NavigationNode, evaluator: &Evaluator<'_>) -> Option<NavigationNode> {
    if !evaluator.evaluate(&node.requirement) {
        return None;
    }

    if node.children.is_empty() {
        return Some(node.clone());
    }

    let children = filter_visible(&node.children, evaluator);
    if children.is_empty() {
        tracing::debug!(title = %node.title, "hiding navigation group without visible children");
        return None;
    }

    Some(NavigationNode {
        title: node.title.clone(),
        href: node.href.clone(),
        icon: node.icon.clone(),
        requirement: node.requirement.clone(),
        children,
    })
}

/// Titles from the root down to the entry matching `path`.
///
/// An entry matches when its destination equals the path or is a
/// path-segment prefix of it (`/tasks` matches `/tasks/42`). The longest
/// matching destination wins; the first in tree order breaks ties. Returns
/// an empty trail when nothing matches.
#[must_use]
pub fn active_trail<'n>(nodes: &'n [NavigationNode], path: &str) -> Vec<&'n str> {
    let mut trail = Vec::new();
    let mut best: Option<(usize, Vec<&'n str>)> = None;
    collect_active(nodes, path, &mut trail, &mut best);
    best.map(|(_, trail)| trail).unwrap_or_default()
}

fn collect_active<'n>(
    nodes: &'n [NavigationNode],
    path: &str,
    trail: &mut Vec<&'n str>,
    best: &mut Option<(usize, Vec<&'n str>)>,
) {
    for node in nodes {
        trail.push(&node.title);

        if node.matches_path(path) {
            let len = node.href.as_deref().map_or(0, str::len);
            if !matches!(best, Some((best_len, _)) if *best_len >= len) {
                *best = Some((len, trail.clone()));
            }
        }
        collect_active(&node.children, path, trail, best);

        trail.pop();
    }
}

/// Depth-first list of the entries that render as links.
///
/// Used by the mobile menu, which shows a flat list. Groups contribute their
/// children; a link with children contributes only itself.
#[must_use]
pub fn flatten_links(nodes: &[NavigationNode]) -> Vec<&NavigationNode> {
    let mut links = Vec::new();
    for node in nodes {
        if node.href.is_some() {
            links.push(node);
        } else {
            links.extend(flatten_links(&node.children));
        }
    }
    links
}
