use anyhow::{bail, Context, Result};

/// Selects how the prompt instructs the model to label "next" skills.
///
/// `Single` asks for exactly one immediate next skill; `Multi` lets the
/// model mark every skill the learner is ready for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NextPolicy {
    #[default]
    Single,
    Multi,
}

/// Application configuration loaded from environment variables.
/// Every field has a default suitable for a local LM Studio endpoint,
/// so a bare `cargo run` works against an out-of-the-box install.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_endpoint: String,
    pub model_name: String,
    pub temperature: f32,
    pub next_policy: NextPolicy,
    pub filter_orphan_links: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let next_policy = match env_or("NEXT_POLICY", "single").as_str() {
            "single" => NextPolicy::Single,
            "multi" => NextPolicy::Multi,
            other => bail!("NEXT_POLICY must be 'single' or 'multi', got '{other}'"),
        };

        Ok(Config {
            model_endpoint: env_or(
                "MODEL_ENDPOINT",
                "http://127.0.0.1:1234/v1/chat/completions",
            ),
            model_name: env_or("MODEL_NAME", "deepseek-r1-distill-llama-8b"),
            temperature: env_or("MODEL_TEMPERATURE", "0.7")
                .parse::<f32>()
                .context("MODEL_TEMPERATURE must be a number")?,
            next_policy,
            filter_orphan_links: matches!(
                env_or("FILTER_ORPHAN_LINKS", "false").as_str(),
                "1" | "true"
            ),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
