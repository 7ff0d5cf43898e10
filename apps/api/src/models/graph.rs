//! Skill-pathway graph types — the normalized output handed to the caller.

use serde::{Deserialize, Serialize};

/// Lifecycle tag of a skill relative to the learner.
///
/// `Future` is the default: a node whose status the model omitted or
/// mislabeled is treated as a future goal rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    /// Already held by the learner.
    Owned,
    /// Immediate next target.
    Next,
    /// Everything beyond the immediate next step.
    #[default]
    Future,
}

/// Canvas position assigned by the grid layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A unit of competency in the pathway graph. Identity is the `id` string —
/// the node set never contains two nodes with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: String,
    pub status: SkillStatus,
    pub position: Position,
}

/// A directed prerequisite edge between two skill nodes.
///
/// `source`/`target` name node ids but are not existence-checked during
/// normalization; dangling references survive unless the orphan filter runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLink {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The full normalized graph. Built fresh per request and never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGraph {
    pub nodes: Vec<SkillNode>,
    pub links: Vec<SkillLink>,
}
