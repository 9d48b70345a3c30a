//! Query Synthesizer — turns free-text symptom descriptions into Cypher.
//!
//! One LLM call per request, no retry, no streaming. Any failure (service
//! unreachable, error status, empty or implausible completion) yields `None`;
//! the orchestrator must not attempt execution in that case.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::llm_client::{strip_code_fences, TextGenerator};
use crate::pipeline::prompts;

const MAX_TOKENS: u32 = 300;

/// Completions must start with one of these (case-insensitive) when the
/// validation policy is on.
const VALID_START_KEYWORDS: [&str; 4] = ["MATCH", "CALL", "CREATE", "MERGE"];

pub struct QuerySynthesizer {
    llm: Arc<dyn TextGenerator>,
    schema: String,
    validate: bool,
}

impl QuerySynthesizer {
    pub fn new(llm: Arc<dyn TextGenerator>, schema: String, validate: bool) -> Self {
        Self {
            llm,
            schema,
            validate,
        }
    }

    /// Returns a Cypher query for the given symptoms, or `None` on any
    /// synthesis failure.
    pub async fn synthesize(&self, symptoms: &str) -> Option<String> {
        let prompt = prompts::build_synthesis_prompt(&self.schema, symptoms);

        let completion = match self
            .llm
            .complete(prompts::SYNTHESIS_SYSTEM, &prompt, MAX_TOKENS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                error!("Error generating Cypher query: {e}");
                return None;
            }
        };

        let cypher = strip_code_fences(&completion).trim().to_string();

        if cypher.is_empty() {
            warn!("Synthesizer returned an empty query");
            return None;
        }

        if self.validate && !starts_with_cypher_keyword(&cypher) {
            warn!("Generated query does not appear to be valid Cypher: {cypher}");
            return None;
        }

        debug!("Synthesized query: {cypher}");
        Some(cypher)
    }
}

fn starts_with_cypher_keyword(cypher: &str) -> bool {
    let upper = cypher.to_uppercase();
    VALID_START_KEYWORDS
        .iter()
        .any(|keyword| upper.starts_with(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_match_any_case() {
        assert!(starts_with_cypher_keyword("MATCH (s:Symptom) RETURN s"));
        assert!(starts_with_cypher_keyword("match (s:Symptom) return s"));
    }

    #[test]
    fn test_accepts_call_create_merge() {
        assert!(starts_with_cypher_keyword("CALL db.labels()"));
        assert!(starts_with_cypher_keyword("CREATE (d:Disease {name: 'Flu'})"));
        assert!(starts_with_cypher_keyword("MERGE (m:Medicine {name: 'Paracetamol'})"));
    }

    #[test]
    fn test_rejects_prose() {
        assert!(!starts_with_cypher_keyword(
            "I cannot generate a query for that input."
        ));
        assert!(!starts_with_cypher_keyword("RETURN 1"));
    }
}
