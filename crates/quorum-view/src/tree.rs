//! Display tree rendering
//!
//! Turns a classified roster or the guild/folder hierarchy into a tree of
//! labeled, colored, expandable nodes. Trees are rebuilt from scratch on
//! every render; no node identity survives a rebuild, and consumers may
//! rely only on the ordering/grouping contract.

use quorum_common::Theme;
use quorum_core::{GuildFolder, SnapshotQuery, Status};

use crate::roster::{MemberEntry, Roster};

/// One node of a display tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    /// Opaque color lookup value for the toolkit; None means default
    pub color: Option<String>,
    pub expanded: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: None,
            expanded: false,
            children: Vec::new(),
        }
    }

    /// Builder-style color setter
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Append a child node
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// The node's children in display order
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Expand this node and every descendant
    pub fn expand_all(&mut self) {
        self.expanded = true;
        for child in &mut self.children {
            child.expand_all();
        }
    }
}

/// A freshly built display tree
///
/// The root node itself is never shown; its children are the top-level
/// rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTree {
    pub root: TreeNode,
}

impl DisplayTree {
    /// Create a tree with an empty, invisible root
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: TreeNode::new(""),
        }
    }

    /// Total node count excluding the root
    pub fn len(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            node.children().iter().map(|c| 1 + count(c)).sum()
        }
        count(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }
}

impl Default for DisplayTree {
    fn default() -> Self {
        Self::new()
    }
}

fn member_node(entry: &MemberEntry, theme: &Theme) -> TreeNode {
    TreeNode::new(format!("{}{}", theme.status.glyph, entry.name))
        .with_color(theme.status.color(entry.status))
}

/// Render a classified roster as a display tree
///
/// Group nodes carry a `"{name} ({count})"` label and the role color;
/// ungrouped online members sit at the top level; the offline group is
/// always the last top-level node, even with no children. Everything is
/// expanded.
pub fn render_roster(roster: &Roster, theme: &Theme) -> DisplayTree {
    let mut tree = DisplayTree::new();

    for group in &roster.groups {
        let mut node = TreeNode::new(format!("{} ({})", group.label, group.members.len()));
        node.color = group.color.clone();
        for entry in &group.members {
            node.add_child(member_node(entry, theme));
        }
        tree.root.add_child(node);
    }

    for entry in &roster.ungrouped {
        tree.root.add_child(member_node(entry, theme));
    }

    let mut offline = TreeNode::new(theme.offline_label.clone())
        .with_color(theme.status.color(Status::Offline));
    for entry in &roster.offline {
        offline.add_child(member_node(entry, theme));
    }
    tree.root.add_child(offline);

    tree.root.expand_all();
    tree
}

/// Render the guild/folder sidebar as a display tree
///
/// A "Direct Messages" node comes first, then folders in user order. A
/// sentinel single-guild folder renders as a bare guild node. A guild id
/// the snapshot cannot resolve is logged and skipped; the rebuild itself
/// never fails.
pub fn render_guild_hierarchy(
    folders: &[GuildFolder],
    source: &impl SnapshotQuery,
    theme: &Theme,
) -> DisplayTree {
    let mut tree = DisplayTree::new();

    tree.root.add_child(
        TreeNode::new(theme.sidebar.dm_label.clone()).with_color(theme.sidebar.dm_color.clone()),
    );

    for folder in folders {
        if folder.is_bare_guild() {
            if let Some(node) = guild_node(folder.guild_ids[0], source) {
                tree.root.add_child(node);
            }
            continue;
        }

        let color = folder
            .color
            .map(|c| format!("{c:06x}"))
            .unwrap_or_else(|| theme.sidebar.folder_color.clone());
        let mut node = TreeNode::new(folder.display_name()).with_color(color);
        for guild_id in &folder.guild_ids {
            if let Some(child) = guild_node(*guild_id, source) {
                node.add_child(child);
            }
        }
        tree.root.add_child(node);
    }

    tree.root.expand_all();
    tree
}

fn guild_node(guild_id: quorum_core::Snowflake, source: &impl SnapshotQuery) -> Option<TreeNode> {
    match source.guild(guild_id) {
        Ok(guild) => Some(TreeNode::new(guild.name)),
        Err(err) => {
            tracing::error!(
                guild_id = %guild_id,
                err = %err,
                "Failed to resolve guild for hierarchy"
            );
            None
        }
    }
}
