//! Text rendering of the filtered navigation.
//!
//! Both renderers take an already filtered tree; they never evaluate
//! requirements themselves.

use tb_access::{flatten_links, NavigationNode};

/// Render the sidebar.
///
/// Groups on the active trail are expanded (`▾`) and list their children;
/// other groups are collapsed (`▸`). Links show their destination and the
/// active entry is marked with `*`.
#[must_use]
pub fn render_sidebar(nodes: &[NavigationNode], active: &[&str]) -> String {
    let mut lines = Vec::new();
    sidebar_lines(nodes, Some(active), 0, &mut lines);
    lines.join("\n")
}

fn sidebar_lines(
    nodes: &[NavigationNode],
    active: Option<&[&str]>,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        // Remaining trail below this node, if the node is on the trail
        let below = active.and_then(|trail| match trail.split_first() {
            Some((title, rest)) if *title == node.title => Some(rest),
            _ => None,
        });

        if node.is_expandable() {
            let marker = if below.is_some() { '▾' } else { '▸' };
            lines.push(format!("{indent}{marker} {}", node.title));
            if below.is_some() {
                sidebar_lines(&node.children, below, depth + 1, lines);
            }
            continue;
        }

        let href = node.href.as_deref().unwrap_or("#");
        let current = if below.is_some_and(|rest| rest.is_empty()) {
            " *"
        } else {
            ""
        };
        lines.push(format!("{indent}• {} ({href}){current}", node.title));
    }
}

/// Render the mobile menu as a flat list of links.
#[must_use]
pub fn render_mobile(nodes: &[NavigationNode]) -> String {
    flatten_links(nodes)
        .iter()
        .map(|node| {
            let href = node.href.as_deref().unwrap_or("#");
            match &node.icon {
                Some(icon) => format!("[{icon}] {} -> {href}", node.title),
                None => format!("{} -> {href}", node.title),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<NavigationNode> {
        vec![
            NavigationNode::link("Dashboard", "/dashboard").with_icon("home"),
            NavigationNode::group(
                "Ratings",
                vec![
                    NavigationNode::link("Rating Configs", "/ratings/configs"),
                    NavigationNode::link("Final Ratings", "/ratings/final"),
                ],
            ),
        ]
    }

    #[test]
    fn test_sidebar_collapsed_groups() {
        let out = render_sidebar(&tree(), &["Dashboard"]);
        assert_eq!(out, "• Dashboard (/dashboard) *\n▸ Ratings");
    }

    #[test]
    fn test_sidebar_expands_active_group() {
        let out = render_sidebar(&tree(), &["Ratings", "Final Ratings"]);
        assert_eq!(
            out,
            "• Dashboard (/dashboard)\n\
             ▾ Ratings\n  \
             • Rating Configs (/ratings/configs)\n  \
             • Final Ratings (/ratings/final) *"
        );
    }

    #[test]
    fn test_mobile_menu_is_flat() {
        let out = render_mobile(&tree());
        assert_eq!(
            out,
            "[home] Dashboard -> /dashboard\n\
             Rating Configs -> /ratings/configs\n\
             Final Ratings -> /ratings/final"
        );
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        assert!(render_sidebar(&[], &[]).is_empty());
        assert!(render_mobile(&[]).is_empty());
    }
}
