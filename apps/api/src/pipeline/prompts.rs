// All LLM prompt constants for the pipeline module.
// The synthesizer and composer each get a system prompt plus a builder for
// the per-request user prompt.

/// System prompt for Cypher synthesis — enforces query-only output.
pub const SYNTHESIS_SYSTEM: &str = "You are a helpful assistant that generates Cypher queries \
    for Neo4j. Respond only with the query, no additional text.";

/// System prompt for answer composition.
pub const COMPOSITION_SYSTEM: &str = "You are a helpful medical assistant. \
    Provide informative answers based on the given database results.";

/// Disclaimer appended to every composition prompt.
pub const DISCLAIMER_INSTRUCTION: &str = "Important: Always include a disclaimer that this \
    information is for educational purposes only and should not replace professional medical advice.";

/// Builds the synthesis prompt: schema first, then the desired query shape.
pub fn build_synthesis_prompt(schema: &str, symptoms: &str) -> String {
    format!(
        r#"Given the following Neo4j database schema:

{schema}

Generate a Cypher query to find diseases and their treatments related to the following symptoms: {symptoms}

The query should:
1. Match nodes labeled as 'Symptom' that match the given symptoms
2. Find 'Disease' nodes that are connected to these symptoms via the 'INDICATES' relationship
3. Find 'Medicine' nodes that are connected to the diseases via the 'TREATED_BY' relationship
4. Return the disease names, their related symptoms, and recommended medicines
5. Limit the results to 5 diseases

Respond ONLY with the Cypher query, no explanations or additional text."#
    )
}

/// Builds the composition prompt from the original question and the records
/// serialized as JSON. The empty-result guidance and the disclaimer are part
/// of every prompt so the model handles both cases.
pub fn build_composition_prompt(question: &str, records_json: &str) -> String {
    format!(
        r#"Question: {question}
Database result: {records_json}
Please formulate a helpful answer based on this information. Include the following in your response:
1. The diseases that match the symptoms
2. A brief explanation of how the symptoms relate to each disease
3. Recommended medicines for each disease
If no results were found, suggest that the user try rephrasing their symptoms or consult a medical professional.

{DISCLAIMER_INSTRUCTION}"#
    )
}
