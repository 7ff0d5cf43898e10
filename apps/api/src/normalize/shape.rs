//! Shape validation and defaulting over the parsed JSON value.
//!
//! Strict where identity matters (`nodes` must be an array, every node needs
//! a non-empty string `id`), lenient everywhere else: unknown statuses
//! default, `links` may be missing entirely, and malformed link elements are
//! skipped rather than failing the request.

use std::collections::HashSet;

use serde_json::Value;
use tracing::warn;

use crate::models::graph::{SkillLink, SkillStatus};
use crate::normalize::NormalizeError;

/// A node that has passed shape validation but not yet been placed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedNode {
    pub id: String,
    pub status: SkillStatus,
}

/// Validates the parsed value and produces shaped nodes plus links.
///
/// Link `source`/`target` are passed through without existence-checking
/// against the node set; see [`filter_orphan_links`] for the stricter pass.
pub fn shape_graph(value: &Value) -> Result<(Vec<ShapedNode>, Vec<SkillLink>), NormalizeError> {
    let raw_nodes = value.get("nodes").and_then(Value::as_array).ok_or_else(|| {
        NormalizeError::Shape("top-level `nodes` is missing or not an array".to_string())
    })?;

    let mut seen = HashSet::new();
    let mut nodes = Vec::with_capacity(raw_nodes.len());
    for (i, raw) in raw_nodes.iter().enumerate() {
        let id = raw.get("id").and_then(Value::as_str).ok_or_else(|| {
            NormalizeError::Shape(format!("node at index {i} has no string `id`"))
        })?;
        if id.is_empty() {
            return Err(NormalizeError::Shape(format!(
                "node at index {i} has an empty `id`"
            )));
        }
        // Identity is the id string: first occurrence wins.
        if !seen.insert(id.to_string()) {
            warn!("dropping duplicate node id '{id}' at index {i}");
            continue;
        }
        nodes.push(ShapedNode {
            id: id.to_string(),
            status: parse_status(raw.get("status")),
        });
    }

    let raw_links = match value.get("links").and_then(Value::as_array) {
        Some(arr) => arr.as_slice(),
        None => &[],
    };
    let mut links = Vec::with_capacity(raw_links.len());
    for (i, raw) in raw_links.iter().enumerate() {
        let source = raw.get("source").and_then(Value::as_str);
        let target = raw.get("target").and_then(Value::as_str);
        let (Some(source), Some(target)) = (source, target) else {
            warn!("skipping link at index {i} without string source/target");
            continue;
        };
        let id = match raw.get("id").and_then(Value::as_str) {
            Some(existing) if !existing.is_empty() => existing.to_string(),
            _ => format!("e{i}"),
        };
        links.push(SkillLink {
            id,
            source: source.to_string(),
            target: target.to_string(),
        });
    }

    Ok((nodes, links))
}

/// Missing or unrecognized status defaults to `future`.
fn parse_status(value: Option<&Value>) -> SkillStatus {
    match value.and_then(Value::as_str) {
        Some("owned") => SkillStatus::Owned,
        Some("next") => SkillStatus::Next,
        Some("future") => SkillStatus::Future,
        _ => SkillStatus::default(),
    }
}

/// Optional post-validation pass: drop links naming a nonexistent node.
pub fn filter_orphan_links(nodes: &[ShapedNode], links: &mut Vec<SkillLink>) {
    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let before = links.len();
    links.retain(|l| ids.contains(l.source.as_str()) && ids.contains(l.target.as_str()));
    if links.len() < before {
        warn!(
            "orphan filter removed {} dangling link(s)",
            before - links.len()
        );
    }
}
