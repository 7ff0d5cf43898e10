// All LLM prompt constants for the Pathway module.
// The system prompt comes from llm_client::prompts (cross-cutting).

/// Status-labeling rules, baseline policy: exactly one "next" skill.
pub const STATUS_RULES_SINGLE_NEXT: &str = r#"For each skill node, assign a "status" field as:
  - "owned" if it's in my current skills,
  - "next" for the single next skill I should learn,
  - "future" for all others."#;

/// Status-labeling rules, relaxed policy: every immediately-learnable skill
/// may be marked "next".
pub const STATUS_RULES_MULTI_NEXT: &str = r#"For each skill node, assign a "status" field as:
  - "owned" if it's in my current skills,
  - "next" for every skill I am ready to learn right now,
  - "future" for all others."#;

/// Every node must be reachable through the link set; a synthetic "Start"
/// root may anchor foundational skills with no prerequisite.
pub const LINK_COVERAGE_INSTRUCTION: &str = r#"Every node must appear in at least one link. If a foundational skill has no prerequisite, you may introduce a synthetic root node named "Start" and link from it."#;

/// Output schema, with the fenced-block wrapper the extractor looks for.
pub const SCHEMA_INSTRUCTION: &str = r#"Return the result inside a fenced code block labeled json, exactly in this format:

```json
{
  "nodes": [
    { "id": "Skill A", "status": "owned" }
  ],
  "links": [
    { "source": "Skill A", "target": "Skill B" }
  ]
}
```

"status" must be one of "owned", "next", or "future"."#;
