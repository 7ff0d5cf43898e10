// Response normalization pipeline.
// raw model text → extracted JSON → repaired → parsed → shaped → laid out.
// Every stage is a pure, independently testable Result-returning transform;
// the first failure aborts the whole request.

pub mod extract;
pub mod layout;
pub mod repair;
pub mod shape;

use serde_json::Value;
use thiserror::Error;

use crate::models::graph::SkillGraph;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("extraction failed: {0}")]
    Extraction(String),

    #[error("JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected shape: {0}")]
    Shape(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Drop links whose source or target names no node in the graph.
    /// Off by default — normalization itself is permissive about orphans.
    pub filter_orphan_links: bool,
}

/// Normalizes raw model output into a typed `SkillGraph` with default options.
#[allow(dead_code)] // handlers thread options from config; this is the plain entry point
pub fn normalize(raw: &str) -> Result<SkillGraph, NormalizeError> {
    normalize_with(raw, NormalizeOptions::default())
}

/// Runs the full pipeline: extract → repair → parse → shape → layout.
pub fn normalize_with(raw: &str, options: NormalizeOptions) -> Result<SkillGraph, NormalizeError> {
    let candidate = extract::extract_json(raw)?;
    let repaired = repair::repair(candidate);
    let value: Value = serde_json::from_str(&repaired)?;
    let (nodes, mut links) = shape::shape_graph(&value)?;
    if options.filter_orphan_links {
        shape::filter_orphan_links(&nodes, &mut links);
    }
    Ok(SkillGraph {
        nodes: layout::place(nodes),
        links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::SkillStatus;

    #[test]
    fn test_round_trip_single_node_fenced_block() {
        let raw = "Here is your graph:\n```json\n{\"nodes\":[{\"id\":\"A\",\"status\":\"owned\"}],\"links\":[]}\n```\nGood luck!";
        let graph = normalize(raw).unwrap();

        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].id, "A");
        assert_eq!(graph.nodes[0].status, SkillStatus::Owned);
        assert_eq!(graph.nodes[0].position.x, 50.0);
        assert_eq!(graph.nodes[0].position.y, 50.0);
        assert!(graph.links.is_empty());
    }

    #[test]
    fn test_brace_fallback_yields_empty_graph() {
        let raw = "The graph is {\"nodes\":[],\"links\":[]} as requested.";
        let graph = normalize(raw).unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.links.is_empty());
    }

    #[test]
    fn test_no_braces_is_extraction_error() {
        let raw = "I could not produce a graph, sorry.";
        assert!(matches!(
            normalize(raw),
            Err(NormalizeError::Extraction(_))
        ));
    }

    #[test]
    fn test_unbalanced_braces_is_parse_error_not_default_graph() {
        let raw = "result: {\"nodes\": [}";
        assert!(matches!(normalize(raw), Err(NormalizeError::Parse(_))));
    }

    #[test]
    fn test_missing_nodes_field_is_shape_error() {
        let raw = "{\"links\":[]}";
        assert!(matches!(normalize(raw), Err(NormalizeError::Shape(_))));
    }

    #[test]
    fn test_comments_and_trailing_commas_are_repaired() {
        let raw = r#"```json
{
  // the learner's graph
  "nodes": [
    { "id": "Rust", "status": "owned" },
    { "id": "Tokio", "status": "next" },
  ],
  "links": [
    { "source": "Rust", "target": "Tokio" },
  ],
}
```"#;
        let graph = normalize(raw).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.links.len(), 1);
        assert_eq!(graph.links[0].id, "e0");
    }

    #[test]
    fn test_synthetic_link_ids_in_input_order() {
        let raw = r#"{"nodes":[{"id":"A"},{"id":"B"},{"id":"C"}],
            "links":[{"source":"A","target":"B"},{"source":"B","target":"C"}]}"#;
        let graph = normalize(raw).unwrap();
        let ids: Vec<&str> = graph.links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["e0", "e1"]);
    }

    #[test]
    fn test_orphan_filter_drops_dangling_links() {
        let raw = r#"{"nodes":[{"id":"A"},{"id":"B"}],
            "links":[{"source":"A","target":"B"},{"source":"A","target":"Ghost"}]}"#;

        let permissive = normalize(raw).unwrap();
        assert_eq!(permissive.links.len(), 2);

        let strict = normalize_with(
            raw,
            NormalizeOptions {
                filter_orphan_links: true,
            },
        )
        .unwrap();
        assert_eq!(strict.links.len(), 1);
        assert_eq!(strict.links[0].target, "B");
    }
}
