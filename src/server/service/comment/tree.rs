//! Reply-tree construction.
//!
//! Turns the flat comment rows of one post into nested nodes. Top-level comments are
//! depth 1; a node at depth `max_depth` keeps its responses as bare ids. Each row is
//! consumed once, so a corrupted parent chain cannot recurse forever.

use std::collections::HashMap;

use crate::server::model::comment::{CommentNode, CommentResponse};

/// Builds the reply trees of a post.
///
/// # Arguments
/// - `rows` - Every comment row of the post, in creation order
/// - `max_depth` - Number of levels resolved into nodes, at least 1
///
/// # Returns
/// Top-level comments in creation order, each with resolved responses.
pub fn build(rows: Vec<entity::comment::Model>, max_depth: usize) -> Vec<CommentNode> {
    let mut children: HashMap<String, Vec<String>> = HashMap::new();
    let mut roots = Vec::new();
    for row in &rows {
        match &row.parent_id {
            Some(parent_id) => children
                .entry(parent_id.clone())
                .or_default()
                .push(row.id.clone()),
            None => roots.push(row.id.clone()),
        }
    }

    let mut rows: HashMap<String, entity::comment::Model> =
        rows.into_iter().map(|row| (row.id.clone(), row)).collect();

    roots
        .into_iter()
        .filter_map(|id| resolve(&id, 1, max_depth.max(1), &mut rows, &children))
        .collect()
}

fn resolve(
    id: &str,
    depth: usize,
    max_depth: usize,
    rows: &mut HashMap<String, entity::comment::Model>,
    children: &HashMap<String, Vec<String>>,
) -> Option<CommentNode> {
    let row = rows.remove(id)?;
    let child_ids = children.get(id).cloned().unwrap_or_default();

    let responses = if depth < max_depth {
        child_ids
            .into_iter()
            .filter_map(|child_id| {
                resolve(&child_id, depth + 1, max_depth, rows, children)
                    .map(|node| CommentResponse::Resolved(Box::new(node)))
            })
            .collect()
    } else {
        child_ids
            .into_iter()
            .map(CommentResponse::Unresolved)
            .collect()
    };

    Some(CommentNode::from_entity(row, responses))
}
