// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces fenced-JSON output.
///
/// Asking for a fenced block (rather than bare JSON) makes extraction robust:
/// the normalizer looks for the fence first and only falls back to brace
/// scanning when the model ignores this instruction.
pub const FENCED_JSON_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST wrap your final answer in a fenced code block labeled json, \
    like ```json ... ```. \
    The block must contain a single valid JSON object and nothing else. \
    Do NOT include explanations inside the block.";
