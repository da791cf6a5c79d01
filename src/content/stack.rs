//! Technology groups for the "My Data Stack" grid.

use serde::{Deserialize, Serialize};

/// A titled set of technologies rendered as one grid card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackGroup {
    pub title: String,
    pub items: Vec<String>,
}

impl StackGroup {
    pub fn new(title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }

    pub fn builtin() -> Vec<StackGroup> {
        vec![
            StackGroup::new("Data Ingestion", &["Kafka", "Fivetran", "Airbyte", "Kinesis", "Webhook ETL"]),
            StackGroup::new("Data Storage", &["AWS S3", "Snowflake", "BigQuery", "Delta Lake", "Postgres"]),
            StackGroup::new("Data Transformation", &["dbt", "Spark", "SQL", "Python", "DuckDB"]),
            StackGroup::new("Orchestration", &["Airflow", "Prefect", "Dagster", "Step Functions"]),
            StackGroup::new("BI / Visualization", &["Tableau", "Looker", "Mode", "Metabase"]),
            StackGroup::new(
                "Reliability & Observability",
                &["Great Expectations", "Monte Carlo", "OpenLineage", "CloudWatch"],
            ),
        ]
    }
}
