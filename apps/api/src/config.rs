use anyhow::{Context, Result};

/// Groq's OpenAI-compatible chat completions endpoint.
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default generation model. Override with GROQ_MODEL.
pub const DEFAULT_GROQ_MODEL: &str = "mixtral-8x7b-32768";

/// Default description of the medical graph handed to the query synthesizer.
/// Deployments with a richer graph can override it via GRAPH_SCHEMA.
pub const DEFAULT_GRAPH_SCHEMA: &str = "\
Nodes:
1. Symptom
2. Disease
3. Medicine

Relationships:
1. (Symptom)-[INDICATES]->(Disease)
2. (Disease)-[TREATED_BY]->(Medicine)";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub groq_model: String,
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub graph_schema: String,
    /// Reject synthesized queries that do not start with a Cypher keyword.
    pub validate_generated_query: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_api_url: std::env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_API_URL.to_string()),
            groq_model: std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string()),
            neo4j_uri: require_env("NEO4J_URI")?,
            neo4j_user: require_env("NEO4J_USER")?,
            neo4j_password: require_env("NEO4J_PASSWORD")?,
            graph_schema: std::env::var("GRAPH_SCHEMA")
                .unwrap_or_else(|_| DEFAULT_GRAPH_SCHEMA.to_string()),
            validate_generated_query: std::env::var("VALIDATE_GENERATED_QUERY")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
