use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::FENCED_JSON_SYSTEM;
use crate::models::graph::SkillGraph;
use crate::normalize::{normalize_with, NormalizeOptions};
use crate::pathway::prompt_builder::build_pathway_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayRequest {
    /// Arbitrary JSON values accepted; non-string entries are filtered out
    /// rather than rejected.
    #[serde(default)]
    pub current_skills: Vec<Value>,
    #[serde(default)]
    pub target_role: Option<String>,
    #[serde(default)]
    pub target_domain: Option<String>,
}

/// POST /api/v1/pathway
///
/// One outbound model call per request, awaited; the normalizer is pure, so
/// concurrent requests share nothing but the transport client.
pub async fn handle_generate_pathway(
    State(state): State<AppState>,
    Json(req): Json<PathwayRequest>,
) -> Result<Json<SkillGraph>, AppError> {
    let skills: Vec<String> = req
        .current_skills
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();

    // An empty string means "not set" on the wire — the UI sends both target
    // fields unconditionally.
    let role = req.target_role.as_deref().filter(|s| !s.is_empty());
    let domain = req.target_domain.as_deref().filter(|s| !s.is_empty());

    let prompt = build_pathway_prompt(&skills, role, domain, state.config.next_policy)?;
    let reply = state.llm.complete(FENCED_JSON_SYSTEM, &prompt).await?;
    let graph = normalize_with(
        &reply,
        NormalizeOptions {
            filter_orphan_links: state.config.filter_orphan_links,
        },
    )?;

    info!(
        "pathway generated: {} nodes, {} links",
        graph.nodes.len(),
        graph.links.len()
    );

    Ok(Json(graph))
}
