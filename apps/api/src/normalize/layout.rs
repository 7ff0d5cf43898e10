//! Grid layout — assigns each node a deterministic canvas position.
//!
//! Content-independent: positions depend only on sequence order, never on
//! graph topology. Force-directed or hierarchical layering is the rendering
//! layer's job.

use crate::models::graph::{Position, SkillNode};
use crate::normalize::shape::ShapedNode;

const SPACING: f64 = 200.0;
const OFFSET: f64 = 50.0;

/// Number of columns for an `n`-node grid. Never zero, so the row/column
/// arithmetic is safe even for degenerate inputs.
pub fn grid_size(n: usize) -> usize {
    ((n as f64).sqrt().ceil() as usize).max(1)
}

/// Places nodes row-major on the grid, in sequence order.
pub fn place(nodes: Vec<ShapedNode>) -> Vec<SkillNode> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let grid = grid_size(nodes.len());
    nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| {
            let row = i / grid;
            let col = i % grid;
            SkillNode {
                id: node.id,
                status: node.status,
                position: Position {
                    x: col as f64 * SPACING + OFFSET,
                    y: row as f64 * SPACING + OFFSET,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::SkillStatus;

    fn shaped(n: usize) -> Vec<ShapedNode> {
        (0..n)
            .map(|i| ShapedNode {
                id: format!("skill-{i}"),
                status: SkillStatus::Future,
            })
            .collect()
    }

    #[test]
    fn test_grid_size_is_ceil_sqrt() {
        assert_eq!(grid_size(1), 1);
        assert_eq!(grid_size(2), 2);
        assert_eq!(grid_size(4), 2);
        assert_eq!(grid_size(5), 3);
        assert_eq!(grid_size(9), 3);
        assert_eq!(grid_size(10), 4);
    }

    #[test]
    fn test_grid_size_zero_is_clamped() {
        assert_eq!(grid_size(0), 1);
    }

    #[test]
    fn test_empty_input_short_circuits() {
        assert!(place(Vec::new()).is_empty());
    }

    #[test]
    fn test_single_node_at_origin_offset() {
        let placed = place(shaped(1));
        assert_eq!(placed[0].position, Position { x: 50.0, y: 50.0 });
    }

    #[test]
    fn test_five_nodes_wrap_on_three_columns() {
        let placed = place(shaped(5));
        let positions: Vec<(f64, f64)> = placed
            .iter()
            .map(|n| (n.position.x, n.position.y))
            .collect();
        assert_eq!(
            positions,
            vec![
                (50.0, 50.0),
                (250.0, 50.0),
                (450.0, 50.0),
                (50.0, 250.0),
                (250.0, 250.0),
            ]
        );
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(place(shaped(7)), place(shaped(7)));
    }

    #[test]
    fn test_no_two_indices_share_a_cell() {
        for n in 1..=30 {
            let placed = place(shaped(n));
            let mut cells: Vec<(u64, u64)> = placed
                .iter()
                .map(|node| (node.position.x as u64, node.position.y as u64))
                .collect();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), n, "collision for n = {n}");
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let placed = place(shaped(3));
        let ids: Vec<&str> = placed.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["skill-0", "skill-1", "skill-2"]);
    }
}
