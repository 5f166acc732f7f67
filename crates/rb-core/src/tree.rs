//! Relation tree.
//!
//! The relation forest starts as the report's top-level related fields and
//! grows one node at a time as the children of a node are fetched. Each node
//! gets a path-based [`NodeId`] when it is created; merges locate their
//! target by that id.

use rb_model::RelatedField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a relation node: the lookup path from the root model,
/// e.g. `author__publisher`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Lookup separator between path segments.
    pub const SEPARATOR: &'static str = "__";

    pub fn root(field_name: &str) -> Self {
        Self(field_name.to_string())
    }

    pub fn child(&self, field_name: &str) -> Self {
        Self(format!("{}{}{}", self.0, Self::SEPARATOR, field_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of relations between the root model and this node (roots are 1).
    pub fn depth(&self) -> usize {
        self.0.split(Self::SEPARATOR).count()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One node of the relation forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationNode {
    pub id: NodeId,
    pub field: RelatedField,
    /// Empty until the children of this node have been fetched.
    pub children: Vec<RelationNode>,
}

impl RelationNode {
    pub fn root(field: RelatedField) -> Self {
        Self {
            id: NodeId::root(&field.field_name),
            field,
            children: Vec::new(),
        }
    }

    pub fn child(parent: &NodeId, field: RelatedField) -> Self {
        Self {
            id: parent.child(&field.field_name),
            field,
            children: Vec::new(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Rebuild `forest` with the children of `parent` replaced by `children`.
///
/// Every node is copied, touched or not. When no node carries `parent` the
/// result equals the input.
pub fn populate_children(
    forest: &[RelationNode],
    parent: &NodeId,
    children: &[RelatedField],
) -> Vec<RelationNode> {
    forest
        .iter()
        .map(|node| replace_children(node, parent, children))
        .collect()
}

fn replace_children(node: &RelationNode, parent: &NodeId, children: &[RelatedField]) -> RelationNode {
    let children = if node.id == *parent {
        children
            .iter()
            .cloned()
            .map(|child| RelationNode::child(&node.id, child))
            .collect()
    } else {
        populate_children(&node.children, parent, children)
    };
    RelationNode {
        id: node.id.clone(),
        field: node.field.clone(),
        children,
    }
}

/// Depth-first search for a node by id.
pub fn find<'a>(forest: &'a [RelationNode], id: &NodeId) -> Option<&'a RelationNode> {
    forest.iter().find_map(|node| {
        if node.id == *id {
            Some(node)
        } else {
            find(&node.children, id)
        }
    })
}

pub fn node_count(forest: &[RelationNode]) -> usize {
    forest
        .iter()
        .map(|node| 1 + node_count(&node.children))
        .sum()
}
