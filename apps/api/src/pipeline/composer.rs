//! Answer Composer — turns the original question plus the raw records into a
//! natural-language answer. One LLM call; a service failure degrades to a
//! fixed apology rather than an error.

use std::sync::Arc;

use tracing::error;

use crate::graph::ResultRecord;
use crate::llm_client::TextGenerator;
use crate::pipeline::prompts;

const MAX_TOKENS: u32 = 500;

/// Returned when the composition call fails. The user resubmits; nothing is
/// retried automatically.
pub const APOLOGY: &str =
    "I'm sorry, but I couldn't process your request at this time. Please try again later.";

pub struct AnswerComposer {
    llm: Arc<dyn TextGenerator>,
}

impl AnswerComposer {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// Composes an answer from the question and the record list. The records
    /// are serialized as JSON without assuming any fixed field set; an empty
    /// list is passed through so the model can suggest rephrasing.
    pub async fn compose(&self, question: &str, records: &[ResultRecord]) -> String {
        let records_json =
            serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string());
        let prompt = prompts::build_composition_prompt(question, &records_json);

        match self
            .llm
            .complete(prompts::COMPOSITION_SYSTEM, &prompt, MAX_TOKENS)
            .await
        {
            Ok(answer) => answer,
            Err(e) => {
                error!("Error formulating answer: {e}");
                APOLOGY.to_string()
            }
        }
    }
}
