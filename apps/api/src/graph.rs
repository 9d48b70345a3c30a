use std::collections::BTreeMap;

use async_trait::async_trait;
use neo4rs::{query, Graph};
use serde_json::Value;
use tracing::{info, warn};

/// One row of a query result. The field set is determined by the query, not a
/// fixed schema, so consumers must destructure defensively.
pub type ResultRecord = BTreeMap<String, Value>;

/// Seam over the graph database so the executor can be exercised without a
/// live Neo4j instance.
#[async_trait]
pub trait QueryRunner: Send + Sync {
    /// Runs the query once on a scoped session and materializes all rows.
    async fn run(&self, cypher: &str) -> Result<Vec<ResultRecord>, neo4rs::Error>;
}

/// Connects to Neo4j and verifies the connection with a trivial probe.
/// Called once at startup; a probe failure disables graph queries for the
/// whole process rather than being retried per request.
pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Graph, neo4rs::Error> {
    info!("Connecting to Neo4j at {uri}...");

    let graph = Graph::new(uri, user, password).await?;

    // Liveness probe; drains the stream so the session is released.
    let mut rows = graph.execute(query("RETURN 1")).await?;
    while rows.next().await?.is_some() {}

    info!("Neo4j connection established");
    Ok(graph)
}

/// Production `QueryRunner` backed by a `neo4rs::Graph`.
/// The driver pools connections internally; each `run` call gets its own
/// session, released when the row stream is drained or dropped.
pub struct Neo4jRunner {
    graph: Graph,
}

impl Neo4jRunner {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl QueryRunner for Neo4jRunner {
    async fn run(&self, cypher: &str) -> Result<Vec<ResultRecord>, neo4rs::Error> {
        let mut stream = self.graph.execute(query(cypher)).await?;

        let mut records = Vec::new();
        while let Some(row) = stream.next().await? {
            match row.to::<ResultRecord>() {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping row that could not be deserialized: {e}"),
            }
        }

        Ok(records)
    }
}
