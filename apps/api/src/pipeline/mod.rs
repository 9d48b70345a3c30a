//! The symptom-answering pipeline: synthesize a Cypher query from free text,
//! execute it against the medical graph, compose a natural-language answer
//! from the rows. Strictly linear, single-shot per request; every stage
//! converts its failures into values so the pipeline always produces display
//! text and never unwinds into the HTTP shell.

pub mod composer;
pub mod executor;
pub mod prompts;
pub mod synthesizer;

use std::sync::Arc;

use tracing::debug;

use crate::llm_client::TextGenerator;
use crate::pipeline::composer::AnswerComposer;
use crate::pipeline::executor::GraphExecutor;
use crate::pipeline::synthesizer::QuerySynthesizer;

/// Returned when query synthesis fails and the rest of the pipeline is
/// skipped.
pub const UNABLE_TO_PROCESS: &str =
    "Unable to process your request at this time. Please try again later.";

pub struct Pipeline {
    synthesizer: QuerySynthesizer,
    executor: GraphExecutor,
    composer: AnswerComposer,
}

impl Pipeline {
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        executor: GraphExecutor,
        schema: String,
        validate_query: bool,
    ) -> Self {
        Self {
            synthesizer: QuerySynthesizer::new(llm.clone(), schema, validate_query),
            executor,
            composer: AnswerComposer::new(llm),
        }
    }

    /// Answers one symptom description. Always returns a non-empty string:
    /// synthesis failure short-circuits to a fixed message, execution failure
    /// degrades to zero records, composition failure degrades to an apology.
    pub async fn answer_symptoms(&self, user_text: &str) -> String {
        let Some(cypher) = self.synthesizer.synthesize(user_text).await else {
            return UNABLE_TO_PROCESS.to_string();
        };

        let records = self.executor.execute(&cypher).await;
        debug!("Executor returned {} record(s)", records.len());

        self.composer.compose(user_text, &records).await
    }
}
