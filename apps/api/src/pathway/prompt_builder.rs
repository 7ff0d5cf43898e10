//! Prompt Builder — assembles the pathway-generation prompt from the
//! learner's skills and an optional target role or domain.

use crate::config::NextPolicy;
use crate::errors::AppError;
use crate::pathway::prompts::{
    LINK_COVERAGE_INSTRUCTION, SCHEMA_INSTRUCTION, STATUS_RULES_MULTI_NEXT,
    STATUS_RULES_SINGLE_NEXT,
};

/// Builds the user prompt. Deterministic, no side effects.
///
/// Goal precedence: role, else domain, else a broad graph clustered by
/// domain. Fails when the skill list is empty — the caller has already
/// filtered out non-string entries.
pub fn build_pathway_prompt(
    skills: &[String],
    target_role: Option<&str>,
    target_domain: Option<&str>,
    policy: NextPolicy,
) -> Result<String, AppError> {
    if skills.is_empty() {
        return Err(AppError::Validation(
            "Provide currentSkills as a non-empty string array".to_string(),
        ));
    }

    let mut prompt = format!("I have these current skills: {}.", skills.join(", "));
    if let Some(role) = target_role {
        prompt.push_str(&format!(" My goal is the role of {role}."));
    } else if let Some(domain) = target_domain {
        prompt.push_str(&format!(" I want to focus on the domain {domain}."));
    } else {
        prompt.push_str(" Generate a broad skill graph clustered by domain.");
    }

    prompt.push_str("\n\n");
    prompt.push_str(match policy {
        NextPolicy::Single => STATUS_RULES_SINGLE_NEXT,
        NextPolicy::Multi => STATUS_RULES_MULTI_NEXT,
    });
    prompt.push_str("\n\n");
    prompt.push_str(LINK_COVERAGE_INSTRUCTION);
    prompt.push_str("\n\n");
    prompt.push_str(SCHEMA_INSTRUCTION);

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_contains_every_skill_verbatim() {
        let prompt = build_pathway_prompt(
            &skills(&["Rust", "SQL", "Distributed Systems"]),
            None,
            None,
            NextPolicy::Single,
        )
        .unwrap();
        for skill in ["Rust", "SQL", "Distributed Systems"] {
            assert!(prompt.contains(skill), "missing skill '{skill}'");
        }
    }

    #[test]
    fn test_role_appears_verbatim_and_wins_over_domain() {
        let prompt = build_pathway_prompt(
            &skills(&["Rust"]),
            Some("Platform Engineer"),
            Some("databases"),
            NextPolicy::Single,
        )
        .unwrap();
        assert!(prompt.contains("My goal is the role of Platform Engineer."));
        assert!(!prompt.contains("I want to focus on the domain"));
    }

    #[test]
    fn test_domain_used_when_role_absent() {
        let prompt = build_pathway_prompt(
            &skills(&["Rust"]),
            None,
            Some("databases"),
            NextPolicy::Single,
        )
        .unwrap();
        assert!(prompt.contains("I want to focus on the domain databases."));
    }

    #[test]
    fn test_broad_graph_fallback() {
        let prompt =
            build_pathway_prompt(&skills(&["Rust"]), None, None, NextPolicy::Single).unwrap();
        assert!(prompt.contains("Generate a broad skill graph clustered by domain."));
    }

    #[test]
    fn test_empty_skills_is_validation_error() {
        let result = build_pathway_prompt(&[], Some("Engineer"), None, NextPolicy::Single);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_single_next_policy_wording() {
        let prompt =
            build_pathway_prompt(&skills(&["Rust"]), None, None, NextPolicy::Single).unwrap();
        assert!(prompt.contains("the single next skill I should learn"));
    }

    #[test]
    fn test_multi_next_policy_wording() {
        let prompt =
            build_pathway_prompt(&skills(&["Rust"]), None, None, NextPolicy::Multi).unwrap();
        assert!(prompt.contains("every skill I am ready to learn right now"));
    }

    #[test]
    fn test_requests_fenced_json_block() {
        let prompt =
            build_pathway_prompt(&skills(&["Rust"]), None, None, NextPolicy::Single).unwrap();
        assert!(prompt.contains("```json"));
        assert!(prompt.contains(r#""nodes""#));
        assert!(prompt.contains(r#""links""#));
    }

    #[test]
    fn test_mentions_link_coverage_and_start_root() {
        let prompt =
            build_pathway_prompt(&skills(&["Rust"]), None, None, NextPolicy::Single).unwrap();
        assert!(prompt.contains("at least one link"));
        assert!(prompt.contains(r#""Start""#));
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let a = build_pathway_prompt(
            &skills(&["Rust", "SQL"]),
            Some("Backend Engineer"),
            None,
            NextPolicy::Multi,
        )
        .unwrap();
        let b = build_pathway_prompt(
            &skills(&["Rust", "SQL"]),
            Some("Backend Engineer"),
            None,
            NextPolicy::Multi,
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
