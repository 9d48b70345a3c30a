//! Graph Query Executor — runs a synthesized query and materializes the rows.
//!
//! Never raises to the caller: a disabled connection, a rejected query, or a
//! driver error all degrade to an empty record list plus a logged diagnostic,
//! so the pipeline can still compose a "no results" answer.

use std::sync::Arc;

use tracing::{error, info};

use crate::graph::{QueryRunner, ResultRecord};

pub struct GraphExecutor {
    /// `None` when the startup liveness probe failed. Fail-fast-once: the
    /// executor stays disabled for the life of the process.
    runner: Option<Arc<dyn QueryRunner>>,
}

impl GraphExecutor {
    pub fn new(runner: Arc<dyn QueryRunner>) -> Self {
        Self {
            runner: Some(runner),
        }
    }

    pub fn disabled() -> Self {
        Self { runner: None }
    }

    /// Runs the query exactly once. Zero rows is success with an empty list.
    pub async fn execute(&self, cypher: &str) -> Vec<ResultRecord> {
        let Some(runner) = &self.runner else {
            error!("Graph executor is disabled: Neo4j was unreachable at startup");
            return Vec::new();
        };

        match runner.run(cypher).await {
            Ok(records) => {
                if records.is_empty() {
                    info!("Query returned no rows");
                }
                records
            }
            Err(e) => {
                error!("Error querying Neo4j: {e}. Query: {cypher}");
                Vec::new()
            }
        }
    }
}
